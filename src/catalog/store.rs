use crate::catalog::models::{Composer, Sheet};
use crate::catalog::pagination::{Page, Pagination};
use crate::error::Result;

use async_trait::async_trait;

/// Read access to the sheet music catalog.
///
/// This is the only seam between the GraphQL resolvers and storage: the schema
/// builder injects one shared `Arc<dyn CatalogStore>` and every list or
/// relation field goes through it.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// List sheets ordered by `pagination.sort`, optionally restricted to the
    /// sheets whose `safe_composer` equals `safe_composer`.
    async fn list_sheets(
        &self,
        pagination: &Pagination,
        safe_composer: Option<&str>,
    ) -> Result<Page<Sheet>>;

    /// List composers ordered by `pagination.sort`
    async fn list_composers(&self, pagination: &Pagination) -> Result<Page<Composer>>;

    /// Look up one composer by its safe name. A missing composer is `Ok(None)`.
    async fn find_composer_by_safe_name(&self, safe_name: &str) -> Result<Option<Composer>>;
}
