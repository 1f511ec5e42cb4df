use sheetable_graphql::catalog::import::{composers_schema, sheets_schema};
use sheetable_graphql::catalog::{COMPOSERS_TABLE, SHEETS_TABLE};
use sheetable_graphql::config::{Config, ServerConfig, StoreConfig};

use deltalake::arrow::datatypes::Schema;
use std::sync::Arc;

/// Directory holding the bundled demo CSV files
pub const DEMO_DATA_DIR: &str = "demos/data";

/// Directory the demo Delta tables are written to
pub const DEMO_DELTA_DIR: &str = "demos/delta";

/// A bundled demo table and the schema it is imported with
pub struct DemoTable {
    pub csv_file: &'static str,
    pub table: &'static str,
    pub schema: fn() -> Arc<Schema>,
}

pub fn demo_tables() -> Vec<DemoTable> {
    vec![
        DemoTable {
            csv_file: "sheets.csv",
            table: SHEETS_TABLE,
            schema: sheets_schema,
        },
        DemoTable {
            csv_file: "composers.csv",
            table: COMPOSERS_TABLE,
            schema: composers_schema,
        },
    ]
}

/// Configuration serving the demo Delta tables under `delta_dir`
pub fn example_config(delta_dir: &str) -> Config {
    Config {
        server: ServerConfig {
            playground: true,
            ..ServerConfig::default()
        },
        store: StoreConfig {
            sheets: format!("{}/{}", delta_dir, SHEETS_TABLE),
            composers: format!("{}/{}", delta_dir, COMPOSERS_TABLE),
        },
    }
}
