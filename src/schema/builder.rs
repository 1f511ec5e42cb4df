/// GraphQL schema builder
///
/// This module provides the `SchemaBuilder` which assembles the catalog schema
/// and injects the shared store handle every resolver reads from.

use crate::error::{Result, SheetableError};
use crate::schema::resolver::{create_composers_resolver, create_sheets_resolver, StoreHandle};
use crate::schema::scalars::datetime_scalar;
use crate::schema::types::{composer_type, sheet_type};

use async_graphql::dynamic::{Object, Schema};

/// Name of the root query type
pub const QUERY_TYPE: &str = "RootQuery";

/// Schema builder for the sheet music catalog
pub struct SchemaBuilder {
    store: StoreHandle,
}

impl SchemaBuilder {
    /// Create a new schema builder over a catalog store
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Build the complete GraphQL schema.
    ///
    /// Call once per server instance; the result is shared by all requests.
    pub fn build_schema(self) -> Result<Schema> {
        tracing::info!("Building catalog schema");

        let query = Object::new(QUERY_TYPE)
            .field(create_sheets_resolver())
            .field(create_composers_resolver());

        Schema::build(query.type_name(), None, None)
            .register(datetime_scalar())
            .register(sheet_type())
            .register(composer_type())
            .register(query)
            .data(self.store)
            .finish()
            .map_err(|e| SheetableError::SchemaGeneration(format!("Failed to build schema: {}", e)))
    }
}
