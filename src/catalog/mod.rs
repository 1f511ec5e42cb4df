/// Sheet music catalog: row types, pagination and storage
///
/// Resolvers only ever see the `CatalogStore` trait; `DataFusionStore` is the
/// implementation used by the server.

mod datafusion_store;
pub mod import;
mod models;
mod pagination;
mod rows;
mod store;

pub use datafusion_store::{DataFusionStore, COMPOSERS_TABLE, SHEETS_TABLE};
pub use models::{Composer, Sheet};
pub use pagination::{Page, Pagination, Sort, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use rows::{composers_from_batches, parse_timestamp, sheets_from_batches, TAG_SEPARATOR};
pub use store::CatalogStore;
