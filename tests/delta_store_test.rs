/// Store tests against the bundled demo data
///
/// These tests verify that:
/// 1. The demo CSVs can be queried directly
/// 2. The demo CSVs convert into Delta tables with the catalog schemas
/// 3. A store opened from the Delta tables serves the GraphQL schema

mod delta_tests {
    use async_graphql::Request;
    use serde_json::json;
    use sheetable_graphql::catalog::import::{composers_schema, csv_to_delta, sheets_schema};
    use sheetable_graphql::catalog::{CatalogStore, DataFusionStore, Pagination};
    use sheetable_graphql::config::StoreConfig;
    use sheetable_graphql::schema::SchemaBuilder;
    use std::path::PathBuf;
    use std::sync::Arc;

    /// Helper to get the path to the demo CSV files
    fn demo_csv(filename: &str) -> String {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("demos");
        path.push("data");
        path.push(filename);
        path.to_string_lossy().to_string()
    }

    async fn delta_store(dir: &tempfile::TempDir) -> DataFusionStore {
        let sheets = dir.path().join("sheets");
        let composers = dir.path().join("composers");

        let sheet_rows = csv_to_delta(&demo_csv("sheets.csv"), sheets.to_str().unwrap(), sheets_schema())
            .await
            .expect("Failed to convert sheets");
        assert_eq!(sheet_rows, 7);

        let composer_rows = csv_to_delta(
            &demo_csv("composers.csv"),
            composers.to_str().unwrap(),
            composers_schema(),
        )
        .await
        .expect("Failed to convert composers");
        assert_eq!(composer_rows, 4);

        DataFusionStore::open(&StoreConfig {
            sheets: sheets.to_string_lossy().to_string(),
            composers: composers.to_string_lossy().to_string(),
        })
        .await
        .expect("Failed to open Delta tables")
    }

    #[tokio::test]
    async fn test_csv_store() {
        let _ = tracing_subscriber::fmt::try_init();

        let store = DataFusionStore::open(&StoreConfig {
            sheets: demo_csv("sheets.csv"),
            composers: demo_csv("composers.csv"),
        })
        .await
        .expect("Failed to register CSV tables");

        let page = store
            .list_sheets(&Pagination::from_args(None, Some(3)), None)
            .await
            .unwrap();

        let names: Vec<&str> = page.rows.iter().map(|s| s.safe_sheet_name.as_str()).collect();
        assert_eq!(names, vec!["nocturne-op-9-no-2", "prelude-in-c-major", "gymnopedie-no-1"]);
        assert_eq!(page.total_rows, 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.rows[0].tags, vec!["piano", "romantic", "nocturne"]);
    }

    #[tokio::test]
    async fn test_delta_store_lists_and_filters() {
        let _ = tracing_subscriber::fmt::try_init();

        let dir = tempfile::tempdir().unwrap();
        let store = delta_store(&dir).await;

        let composers = store.list_composers(&Pagination::default()).await.unwrap();
        let names: Vec<&str> = composers.rows.iter().map(|c| c.safe_name.as_str()).collect();
        assert_eq!(names, vec!["chopin", "bach", "satie", "mozart"]);

        let bach = store
            .list_sheets(&Pagination::default(), Some("bach"))
            .await
            .unwrap();
        assert_eq!(bach.total_rows, 2);
        assert_eq!(bach.rows[0].safe_sheet_name, "prelude-in-c-major");
        assert_eq!(bach.rows[0].uploader_id, Some(1));

        let chopin = store.find_composer_by_safe_name("chopin").await.unwrap().unwrap();
        assert_eq!(chopin.epoch.as_deref(), Some("Romantic"));
        assert!(store.find_composer_by_safe_name("debussy").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delta_store_behind_schema() {
        let _ = tracing_subscriber::fmt::try_init();

        let dir = tempfile::tempdir().unwrap();
        let store = delta_store(&dir).await;
        let schema = SchemaBuilder::new(Arc::new(store)).build_schema().unwrap();

        let query = r#"
            query {
                composers(pageSize: 1) {
                    Name
                    Epoch
                    UpdatedAt
                    Sheets(pageSize: 1) {
                        SheetName
                        ReleaseDate
                        Composer { SafeName }
                    }
                }
            }
        "#;

        let response = schema.execute(Request::new(query)).await;
        assert!(response.errors.is_empty(), "Query had errors: {:?}", response.errors);

        let data = response.data.into_json().unwrap();
        assert_eq!(
            data,
            json!({
                "composers": [{
                    "Name": "Frédéric Chopin",
                    "Epoch": "Romantic",
                    "UpdatedAt": "2024-03-01T08:00:00Z",
                    "Sheets": [{
                        "SheetName": "Nocturne Op. 9 No. 2",
                        "ReleaseDate": "1832-01-01T00:00:00Z",
                        "Composer": { "SafeName": "chopin" }
                    }]
                }]
            })
        );
    }
}
