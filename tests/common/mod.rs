#![allow(dead_code)]

/// Shared fixtures: in-memory catalog tables and schema helpers

use async_graphql::dynamic::Schema;
use datafusion::arrow::array::{Int64Array, StringArray, TimestampSecondArray};
use datafusion::arrow::datatypes::{DataType, Field, Schema as ArrowSchema, TimeUnit};
use datafusion::arrow::record_batch::RecordBatch;
use sheetable_graphql::catalog::{DataFusionStore, COMPOSERS_TABLE, SHEETS_TABLE};
use sheetable_graphql::schema::SchemaBuilder;
use std::sync::Arc;

/// Seconds since the epoch of 2024-01-01T00:00:00Z
pub const BASE_TIME: i64 = 1_704_067_200;

pub struct SheetRow {
    pub name: &'static str,
    pub safe_name: &'static str,
    pub composer: &'static str,
    pub safe_composer: &'static str,
    pub updated_at: i64,
}

pub struct ComposerRow {
    pub safe_name: &'static str,
    pub name: &'static str,
    pub updated_at: i64,
}

fn utc_seconds() -> DataType {
    DataType::Timestamp(TimeUnit::Second, Some("UTC".into()))
}

pub fn sheets_batch(rows: &[SheetRow]) -> RecordBatch {
    let schema = Arc::new(ArrowSchema::new(vec![
        Field::new("sheet_name", DataType::Utf8, false),
        Field::new("safe_sheet_name", DataType::Utf8, false),
        Field::new("composer", DataType::Utf8, false),
        Field::new("safe_composer", DataType::Utf8, false),
        Field::new("tags", DataType::Utf8, true),
        Field::new("created_at", utc_seconds(), true),
        Field::new("updated_at", utc_seconds(), true),
        Field::new("uploader_id", DataType::Int64, true),
    ]));

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.name))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.safe_name))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.composer))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.safe_composer))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|_| "piano;solo"))),
            Arc::new(
                TimestampSecondArray::from_iter_values(rows.iter().map(|_| BASE_TIME))
                    .with_timezone("UTC"),
            ),
            Arc::new(
                TimestampSecondArray::from_iter_values(rows.iter().map(|r| r.updated_at))
                    .with_timezone("UTC"),
            ),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|_| 1))),
        ],
    )
    .unwrap()
}

pub fn composers_batch(rows: &[ComposerRow]) -> RecordBatch {
    let schema = Arc::new(ArrowSchema::new(vec![
        Field::new("safe_name", DataType::Utf8, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("portrait_url", DataType::Utf8, true),
        Field::new("epoch", DataType::Utf8, true),
        Field::new("created_at", utc_seconds(), true),
        Field::new("updated_at", utc_seconds(), true),
    ]));

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.safe_name))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.name))),
            Arc::new(StringArray::from(vec![None::<&str>; rows.len()])),
            Arc::new(StringArray::from(vec![None::<&str>; rows.len()])),
            Arc::new(
                TimestampSecondArray::from_iter_values(rows.iter().map(|_| BASE_TIME))
                    .with_timezone("UTC"),
            ),
            Arc::new(
                TimestampSecondArray::from_iter_values(rows.iter().map(|r| r.updated_at))
                    .with_timezone("UTC"),
            ),
        ],
    )
    .unwrap()
}

pub fn store_with(sheets: &[SheetRow], composers: &[ComposerRow]) -> DataFusionStore {
    let store = DataFusionStore::new();
    store.register_batch(SHEETS_TABLE, sheets_batch(sheets)).unwrap();
    store
        .register_batch(COMPOSERS_TABLE, composers_batch(composers))
        .unwrap();
    store
}

pub fn schema_with(sheets: &[SheetRow], composers: &[ComposerRow]) -> Schema {
    let _ = tracing_subscriber::fmt::try_init();

    SchemaBuilder::new(Arc::new(store_with(sheets, composers)))
        .build_schema()
        .expect("Failed to build schema")
}

/// One sheet by Bach and Bach himself
pub fn bach_schema() -> Schema {
    schema_with(
        &[SheetRow {
            name: "Prelude in C Major",
            safe_name: "prelude-in-c-major",
            composer: "Johann Sebastian Bach",
            safe_composer: "bach",
            updated_at: BASE_TIME + 60,
        }],
        &[ComposerRow {
            safe_name: "bach",
            name: "Johann Sebastian Bach",
            updated_at: BASE_TIME,
        }],
    )
}
