/// GraphQL schema for the sheet music catalog
///
/// This module declares the `Sheet` and `Composer` object types, the
/// `DateTime` scalar, the root list fields and the relation resolvers.

mod builder;
mod resolver;
mod scalars;
mod types;

pub use builder::{SchemaBuilder, QUERY_TYPE};
pub use resolver::StoreHandle;
pub use scalars::{datetime_value, format_datetime, parse_datetime, DATETIME_SCALAR};
pub use types::{composer_type, sheet_type, COMPOSER_TYPE, SHEET_TYPE};
