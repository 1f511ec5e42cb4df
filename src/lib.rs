pub mod catalog;
pub mod config;
pub mod error;
pub mod schema;
pub mod server;

// Re-export commonly used types
pub use crate::catalog::{CatalogStore, Composer, DataFusionStore, Page, Pagination, Sheet};
pub use crate::config::{Config, ServerConfig, StoreConfig};
pub use crate::error::{Result, SheetableError};
pub use crate::schema::SchemaBuilder;
