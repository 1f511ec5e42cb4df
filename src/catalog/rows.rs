/// Conversion from Arrow record batches to catalog rows
///
/// Columns are looked up by name, so tables may carry extra columns or list
/// them in any order. Key columns (names and safe names) must exist; every
/// other column is optional and decodes to `None` when absent.

use crate::catalog::models::{Composer, Sheet};
use crate::error::{Result, SheetableError};

use chrono::{DateTime, Utc};
use datafusion::arrow::array::{Array, ArrayRef, AsArray};
use datafusion::arrow::datatypes::{
    DataType, Int16Type, Int32Type, Int64Type, Int8Type, TimeUnit, TimestampMicrosecondType,
    TimestampMillisecondType, TimestampNanosecondType, TimestampSecondType, UInt16Type,
    UInt32Type, UInt64Type, UInt8Type,
};
use datafusion::arrow::record_batch::RecordBatch;

/// Separator for tags stored in a plain string column
pub const TAG_SEPARATOR: char = ';';

/// Decode every row of `batches` into sheets
pub fn sheets_from_batches(batches: &[RecordBatch]) -> Result<Vec<Sheet>> {
    let mut sheets = Vec::new();

    for batch in batches {
        let columns = Columns::new(batch, "sheets");
        for row in 0..batch.num_rows() {
            sheets.push(Sheet {
                sheet_name: columns.key_string("sheet_name", row)?,
                safe_sheet_name: columns.key_string("safe_sheet_name", row)?,
                composer: columns.key_string("composer", row)?,
                safe_composer: columns.key_string("safe_composer", row)?,
                information_text: columns.string("information_text", row)?,
                pdf_url: columns.string("pdf_url", row)?,
                tags: columns.tags("tags", row)?,
                created_at: columns.timestamp("created_at", row)?,
                updated_at: columns.timestamp("updated_at", row)?,
                release_date: columns.timestamp("release_date", row)?,
                uploader_id: columns.integer("uploader_id", row)?,
            });
        }
    }

    Ok(sheets)
}

/// Decode every row of `batches` into composers
pub fn composers_from_batches(batches: &[RecordBatch]) -> Result<Vec<Composer>> {
    let mut composers = Vec::new();

    for batch in batches {
        let columns = Columns::new(batch, "composers");
        for row in 0..batch.num_rows() {
            composers.push(Composer {
                safe_name: columns.key_string("safe_name", row)?,
                name: columns.key_string("name", row)?,
                portrait_url: columns.string("portrait_url", row)?,
                epoch: columns.string("epoch", row)?,
                created_at: columns.timestamp("created_at", row)?,
                updated_at: columns.timestamp("updated_at", row)?,
            });
        }
    }

    Ok(composers)
}

struct Columns<'a> {
    batch: &'a RecordBatch,
    table: &'static str,
}

impl<'a> Columns<'a> {
    fn new(batch: &'a RecordBatch, table: &'static str) -> Self {
        Self { batch, table }
    }

    fn column(&self, name: &str) -> Option<&'a ArrayRef> {
        self.batch.column_by_name(name)
    }

    fn unsupported(&self, name: &str, column: &ArrayRef) {
        tracing::warn!(
            "Unsupported type {:?} for column '{}.{}', returning null",
            column.data_type(),
            self.table,
            name
        );
    }

    /// Key columns must exist; a null key decodes to an empty string
    fn key_string(&self, name: &str, row: usize) -> Result<String> {
        if self.column(name).is_none() {
            return Err(SheetableError::RowDecode(format!(
                "Table '{}' has no column '{}'",
                self.table, name
            )));
        }
        Ok(self.string(name, row)?.unwrap_or_default())
    }

    fn string(&self, name: &str, row: usize) -> Result<Option<String>> {
        let Some(column) = self.column(name) else {
            return Ok(None);
        };
        if column.is_null(row) {
            return Ok(None);
        }

        let value = match column.data_type() {
            DataType::Utf8 => column.as_string_opt::<i32>().map(|a| a.value(row).to_string()),
            DataType::LargeUtf8 => column.as_string_opt::<i64>().map(|a| a.value(row).to_string()),
            _ => {
                self.unsupported(name, column);
                None
            }
        };

        Ok(value)
    }

    fn integer(&self, name: &str, row: usize) -> Result<Option<i64>> {
        let Some(column) = self.column(name) else {
            return Ok(None);
        };
        if column.is_null(row) {
            return Ok(None);
        }

        let value = match column.data_type() {
            DataType::Int8 => column.as_primitive_opt::<Int8Type>().map(|a| a.value(row) as i64),
            DataType::Int16 => column.as_primitive_opt::<Int16Type>().map(|a| a.value(row) as i64),
            DataType::Int32 => column.as_primitive_opt::<Int32Type>().map(|a| a.value(row) as i64),
            DataType::Int64 => column.as_primitive_opt::<Int64Type>().map(|a| a.value(row)),
            DataType::UInt8 => column.as_primitive_opt::<UInt8Type>().map(|a| a.value(row) as i64),
            DataType::UInt16 => column.as_primitive_opt::<UInt16Type>().map(|a| a.value(row) as i64),
            DataType::UInt32 => column.as_primitive_opt::<UInt32Type>().map(|a| a.value(row) as i64),
            DataType::UInt64 => {
                let Some(array) = column.as_primitive_opt::<UInt64Type>() else {
                    return Ok(None);
                };
                let value = array.value(row);
                Some(i64::try_from(value).map_err(|_| {
                    SheetableError::RowDecode(format!(
                        "Value {} in column '{}.{}' does not fit in a 64-bit signed integer",
                        value, self.table, name
                    ))
                })?)
            }
            _ => {
                self.unsupported(name, column);
                None
            }
        };

        Ok(value)
    }

    fn timestamp(&self, name: &str, row: usize) -> Result<Option<DateTime<Utc>>> {
        let Some(column) = self.column(name) else {
            return Ok(None);
        };
        if column.is_null(row) {
            return Ok(None);
        }

        // (seconds, nanoseconds) since the epoch; the timezone tag does not
        // change the stored instant
        let parts = match column.data_type() {
            DataType::Timestamp(TimeUnit::Second, _) => column
                .as_primitive_opt::<TimestampSecondType>()
                .map(|a| (a.value(row), 0)),
            DataType::Timestamp(TimeUnit::Millisecond, _) => column
                .as_primitive_opt::<TimestampMillisecondType>()
                .map(|a| split_epoch(a.value(row), 1_000)),
            DataType::Timestamp(TimeUnit::Microsecond, _) => column
                .as_primitive_opt::<TimestampMicrosecondType>()
                .map(|a| split_epoch(a.value(row), 1_000_000)),
            DataType::Timestamp(TimeUnit::Nanosecond, _) => column
                .as_primitive_opt::<TimestampNanosecondType>()
                .map(|a| split_epoch(a.value(row), 1_000_000_000)),
            DataType::Utf8 | DataType::LargeUtf8 => {
                return Ok(self.string(name, row)?.as_deref().and_then(parse_timestamp));
            }
            _ => {
                self.unsupported(name, column);
                None
            }
        };

        let Some((secs, nsecs)) = parts else {
            return Ok(None);
        };

        DateTime::<Utc>::from_timestamp(secs, nsecs)
            .map(Some)
            .ok_or_else(|| {
                SheetableError::RowDecode(format!(
                    "Invalid timestamp in column '{}.{}': {}s",
                    self.table, name, secs
                ))
            })
    }

    fn tags(&self, name: &str, row: usize) -> Result<Vec<String>> {
        let Some(column) = self.column(name) else {
            return Ok(Vec::new());
        };
        if column.is_null(row) {
            return Ok(Vec::new());
        }

        match column.data_type() {
            DataType::Utf8 | DataType::LargeUtf8 => Ok(self
                .string(name, row)?
                .map(|joined| split_tags(&joined))
                .unwrap_or_default()),
            DataType::List(_) => {
                let Some(list) = column.as_list_opt::<i32>() else {
                    return Ok(Vec::new());
                };
                let values = list.value(row);
                string_values(&values).ok_or_else(|| {
                    SheetableError::RowDecode(format!(
                        "Column '{}.{}' must be a list of strings",
                        self.table, name
                    ))
                })
            }
            _ => {
                self.unsupported(name, column);
                Ok(Vec::new())
            }
        }
    }
}

/// Parse an RFC 3339 timestamp, normalizing the offset to UTC.
///
/// Anything else yields `None`.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|datetime| datetime.with_timezone(&Utc))
}

fn split_epoch(value: i64, per_second: i64) -> (i64, u32) {
    let secs = value.div_euclid(per_second);
    let rem = value.rem_euclid(per_second);
    (secs, (rem * (1_000_000_000 / per_second)) as u32)
}

fn split_tags(joined: &str) -> Vec<String> {
    joined
        .split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn string_values(values: &ArrayRef) -> Option<Vec<String>> {
    let array = values.as_string_opt::<i32>()?;
    Some(
        (0..array.len())
            .filter(|i| !array.is_null(*i))
            .map(|i| array.value(i).to_string())
            .collect(),
    )
}
