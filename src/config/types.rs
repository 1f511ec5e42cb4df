use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub store: StoreConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind the server to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// HTTP path of the GraphQL endpoint
    #[serde(default = "default_path")]
    pub path: String,

    /// Pretty-print JSON responses
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Serve the GraphQL playground on GET requests
    #[serde(default)]
    pub playground: bool,
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_path() -> String {
    "/graphql".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
            path: default_path(),
            pretty: default_pretty(),
            playground: false,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.path.starts_with('/') {
            return Err(format!("Endpoint path '{}' must start with '/'", self.path));
        }

        if self.path == "/health" {
            return Err("Endpoint path '/health' is reserved for the health check".to_string());
        }

        Ok(())
    }
}

/// Locations of the catalog tables.
///
/// Each location is either a `.csv` file or a Delta table directory/URI
/// (e.g., `demos/delta/sheets`, `s3://bucket/catalog/sheets`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub sheets: String,
    pub composers: String,
}

impl StoreConfig {
    /// Validate store configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.sheets.trim().is_empty() {
            return Err("Store location for 'sheets' must not be empty".to_string());
        }

        if self.composers.trim().is_empty() {
            return Err("Store location for 'composers' must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_validation_valid() {
        let store = StoreConfig {
            sheets: "demos/delta/sheets".to_string(),
            composers: "demos/data/composers.csv".to_string(),
        };

        assert!(store.validate().is_ok());
    }

    #[test]
    fn test_store_validation_empty_location() {
        let store = StoreConfig {
            sheets: "  ".to_string(),
            composers: "demos/delta/composers".to_string(),
        };

        assert!(store.validate().is_err());
    }

    #[test]
    fn test_server_validation_relative_path() {
        let server = ServerConfig {
            path: "graphql".to_string(),
            ..ServerConfig::default()
        };

        assert!(server.validate().is_err());
    }

    #[test]
    fn test_server_validation_reserved_path() {
        let server = ServerConfig {
            path: "/health".to_string(),
            ..ServerConfig::default()
        };

        assert!(server.validate().is_err());
    }

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.port, 4000);
        assert_eq!(server.path, "/graphql");
        assert!(server.pretty);
        assert!(!server.playground);
    }
}
