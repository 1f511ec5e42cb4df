/// DataFusion-backed catalog store
///
/// Both catalog tables live in one `SessionContext`. They can be registered
/// from CSV files (testing), Delta tables (production) or in-memory record
/// batches, and every query goes through the DataFrame API.

use crate::catalog::models::{Composer, Sheet};
use crate::catalog::pagination::{Page, Pagination};
use crate::catalog::rows::{composers_from_batches, sheets_from_batches};
use crate::catalog::store::CatalogStore;
use crate::config::StoreConfig;
use crate::error::{Result, SheetableError};

use async_trait::async_trait;
use datafusion::arrow::datatypes::{DataType, TimeUnit};
use datafusion::arrow::record_batch::RecordBatch;
use datafusion::logical_expr::try_cast;
use datafusion::prelude::*;
use std::sync::Arc;

pub const SHEETS_TABLE: &str = "sheets";
pub const COMPOSERS_TABLE: &str = "composers";

pub struct DataFusionStore {
    ctx: SessionContext,
}

impl DataFusionStore {
    /// Create a store with no tables registered
    pub fn new() -> Self {
        Self {
            ctx: SessionContext::new(),
        }
    }

    /// Open both catalog tables from their configured locations
    pub async fn open(config: &StoreConfig) -> Result<Self> {
        let store = Self::new();

        tracing::info!("Registering {} from {}", SHEETS_TABLE, config.sheets);
        store.register_table_from_path(SHEETS_TABLE, &config.sheets).await?;

        tracing::info!("Registering {} from {}", COMPOSERS_TABLE, config.composers);
        store
            .register_table_from_path(COMPOSERS_TABLE, &config.composers)
            .await?;

        Ok(store)
    }

    /// Register a table from a file path (supports CSV for testing, Delta for production)
    pub async fn register_table_from_path(&self, name: &str, path: &str) -> Result<()> {
        if path.ends_with(".csv") {
            self.ctx
                .register_csv(name, path, CsvReadOptions::default())
                .await
                .map_err(|e| {
                    SheetableError::SchemaGeneration(format!(
                        "Failed to register CSV '{}': {}",
                        path, e
                    ))
                })?;
        } else {
            let delta_table = deltalake::open_table(path).await.map_err(|e| {
                SheetableError::SchemaGeneration(format!(
                    "Failed to open Delta table '{}': {}",
                    path, e
                ))
            })?;

            self.ctx
                .register_table(name, Arc::new(delta_table))
                .map_err(|e| {
                    SheetableError::SchemaGeneration(format!(
                        "Failed to register Delta table '{}': {}",
                        name, e
                    ))
                })?;
        }

        Ok(())
    }

    /// Register an in-memory record batch as a table
    pub fn register_batch(&self, name: &str, batch: RecordBatch) -> Result<()> {
        self.ctx.register_batch(name, batch)?;
        Ok(())
    }

    /// Run a paginated, sorted query against `table`.
    ///
    /// Returns the batches of the requested page and the number of rows that
    /// match `filter` across all pages.
    async fn fetch_page(
        &self,
        table: &str,
        filter: Option<Expr>,
        pagination: &Pagination,
    ) -> Result<(Vec<RecordBatch>, usize)> {
        let mut df = self.ctx.table(table).await?;
        if let Some(predicate) = filter {
            df = df.filter(predicate)?;
        }

        let total_rows = df.clone().count().await?;

        let sort = sort_key(&df, &pagination.sort.column).sort(!pagination.sort.descending, false);
        let df = df
            .sort(vec![sort])?
            .limit(pagination.offset(), pagination.fetch())?;

        tracing::debug!(
            "Querying {} (sort: {}, page: {}, limit: {}, total: {})",
            table,
            pagination.sort,
            pagination.page,
            pagination.limit,
            total_rows
        );

        let batches = df.collect().await?;
        Ok((batches, total_rows))
    }
}

/// Sort expression for `column`.
///
/// Timestamps stored as text are ordered by the instant they denote, not by
/// their characters; values that do not parse sort as nulls (last).
fn sort_key(df: &DataFrame, column: &str) -> Expr {
    let is_text = df
        .schema()
        .field_with_unqualified_name(column)
        .map(|field| matches!(field.data_type(), DataType::Utf8 | DataType::LargeUtf8))
        .unwrap_or(false);

    if is_text {
        try_cast(
            col(column),
            DataType::Timestamp(TimeUnit::Nanosecond, Some("UTC".into())),
        )
    } else {
        col(column)
    }
}

impl Default for DataFusionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for DataFusionStore {
    async fn list_sheets(
        &self,
        pagination: &Pagination,
        safe_composer: Option<&str>,
    ) -> Result<Page<Sheet>> {
        let filter = safe_composer.map(|name| col("safe_composer").eq(lit(name)));
        let (batches, total_rows) = self.fetch_page(SHEETS_TABLE, filter, pagination).await?;
        let rows = sheets_from_batches(&batches)?;
        Ok(Page::new(rows, pagination, total_rows))
    }

    async fn list_composers(&self, pagination: &Pagination) -> Result<Page<Composer>> {
        let (batches, total_rows) = self.fetch_page(COMPOSERS_TABLE, None, pagination).await?;
        let rows = composers_from_batches(&batches)?;
        Ok(Page::new(rows, pagination, total_rows))
    }

    async fn find_composer_by_safe_name(&self, safe_name: &str) -> Result<Option<Composer>> {
        tracing::debug!("Looking up composer '{}'", safe_name);

        let batches = self
            .ctx
            .table(COMPOSERS_TABLE)
            .await?
            .filter(col("safe_name").eq(lit(safe_name)))?
            .limit(0, Some(1))?
            .collect()
            .await?;

        Ok(composers_from_batches(&batches)?.into_iter().next())
    }
}
