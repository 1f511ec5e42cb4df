use crate::cli::example::{demo_tables, DEMO_DATA_DIR};
use sheetable_graphql::catalog::import::csv_to_delta;
use sheetable_graphql::error::{Result, SheetableError};

/// Convert the demo CSV files to Delta tables under `output_dir`.
/// This is used internally by init --example
pub async fn convert_example_data(output_dir: &str) -> Result<()> {
    tracing::info!("🔄 Converting demo CSV files to Delta tables...");

    std::fs::create_dir_all(output_dir)?;

    let tables = demo_tables();
    let table_count = tables.len();
    let mut success_count = 0;

    for table in tables {
        let csv_path = format!("{}/{}", DEMO_DATA_DIR, table.csv_file);
        let delta_path = format!("{}/{}", output_dir, table.table);

        match csv_to_delta(&csv_path, &delta_path, (table.schema)()).await {
            Ok(row_count) => {
                tracing::info!("✅ Converted {} ({} rows) -> {}", table.csv_file, row_count, delta_path);
                success_count += 1;
            }
            Err(e) => {
                tracing::error!("❌ Failed to convert {}: {}", table.csv_file, e);
            }
        }
    }

    tracing::info!("🎉 Conversion complete! {} of {} tables converted", success_count, table_count);

    // The server needs both tables
    if success_count != table_count {
        return Err(SheetableError::Config(format!(
            "Only {} of {} demo tables were converted",
            success_count, table_count
        )));
    }

    tracing::info!("📁 Delta tables created in: {}", output_dir);
    Ok(())
}
