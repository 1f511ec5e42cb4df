/// CSV to Delta table import
///
/// Catalog tables are written with fixed Arrow schemas so that the Delta
/// tables always carry the column names and types the store decodes.

use crate::error::{Result, SheetableError};

use deltalake::arrow::csv::ReaderBuilder;
use deltalake::arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use deltalake::arrow::record_batch::RecordBatch;
use deltalake::operations::create::CreateBuilder;
use deltalake::writer::{DeltaWriter, RecordBatchWriter};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn timestamp_type() -> DataType {
    DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into()))
}

/// Arrow schema of the `sheets` table. Tags are stored `;`-separated.
pub fn sheets_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("sheet_name", DataType::Utf8, false),
        Field::new("safe_sheet_name", DataType::Utf8, false),
        Field::new("composer", DataType::Utf8, false),
        Field::new("safe_composer", DataType::Utf8, false),
        Field::new("information_text", DataType::Utf8, true),
        Field::new("pdf_url", DataType::Utf8, true),
        Field::new("tags", DataType::Utf8, true),
        Field::new("created_at", timestamp_type(), true),
        Field::new("updated_at", timestamp_type(), true),
        Field::new("release_date", timestamp_type(), true),
        Field::new("uploader_id", DataType::Int64, true),
    ]))
}

/// Arrow schema of the `composers` table
pub fn composers_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("safe_name", DataType::Utf8, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("portrait_url", DataType::Utf8, true),
        Field::new("epoch", DataType::Utf8, true),
        Field::new("created_at", timestamp_type(), true),
        Field::new("updated_at", timestamp_type(), true),
    ]))
}

/// Convert one CSV file (with header) into a fresh Delta table.
///
/// The CSV is parsed and written to a staging directory next to `delta_path`
/// first; an existing table at `delta_path` is only replaced once the new one
/// is committed. Returns the number of rows written.
pub async fn csv_to_delta(csv_path: &str, delta_path: &str, schema: Arc<Schema>) -> Result<usize> {
    if !Path::new(csv_path).exists() {
        return Err(SheetableError::Config(format!(
            "CSV file not found: {}",
            csv_path
        )));
    }

    let batches = read_csv(csv_path, Arc::clone(&schema))?;
    let total_rows: usize = batches.iter().map(|batch| batch.num_rows()).sum();

    let target = Path::new(delta_path);
    let staging = staging_path(target)?;
    if staging.exists() {
        std::fs::remove_dir_all(&staging)?;
    }
    std::fs::create_dir_all(&staging)?;

    if let Err(e) = write_delta(&staging, &schema, batches).await {
        let _ = std::fs::remove_dir_all(&staging);
        return Err(e);
    }

    if target.exists() {
        std::fs::remove_dir_all(target)?;
    }
    std::fs::rename(&staging, target)?;

    tracing::debug!("Wrote {} rows from {} to {}", total_rows, csv_path, delta_path);

    Ok(total_rows)
}

fn read_csv(csv_path: &str, schema: Arc<Schema>) -> Result<Vec<RecordBatch>> {
    let file = File::open(csv_path)?;
    let csv_reader = ReaderBuilder::new(schema)
        .with_header(true)
        .build(file)
        .map_err(|e| SheetableError::Config(format!("CSV read error: {}", e)))?;

    csv_reader
        .map(|batch| {
            batch.map_err(|e| {
                SheetableError::Config(format!("Failed to read CSV batch from {}: {}", csv_path, e))
            })
        })
        .collect()
}

/// Sibling of `target` the new table is built in
fn staging_path(target: &Path) -> Result<PathBuf> {
    let name = target.file_name().ok_or_else(|| {
        SheetableError::Config(format!(
            "Delta table path '{}' has no directory name",
            target.display()
        ))
    })?;

    let mut staging_name = name.to_os_string();
    staging_name.push(".importing");
    Ok(target.with_file_name(staging_name))
}

async fn write_delta(location: &Path, schema: &Schema, batches: Vec<RecordBatch>) -> Result<()> {
    let columns = schema
        .fields()
        .iter()
        .map(|f| -> Result<deltalake::kernel::StructField> {
            let delta_type: deltalake::kernel::DataType =
                f.data_type().try_into().map_err(|e| {
                    SheetableError::SchemaGeneration(format!(
                        "Failed to convert data type {:?} of column '{}': {}",
                        f.data_type(),
                        f.name(),
                        e
                    ))
                })?;
            Ok(deltalake::kernel::StructField::new(
                f.name().clone(),
                delta_type,
                f.is_nullable(),
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut table = CreateBuilder::new()
        .with_location(location.to_string_lossy())
        .with_columns(columns)
        .await?;

    let mut writer = RecordBatchWriter::for_table(&table)?;
    for batch in batches {
        writer.write(batch).await?;
    }
    writer.flush_and_commit(&mut table).await?;

    Ok(())
}
