mod types;

pub use types::{Config, ServerConfig, StoreConfig};

use crate::error::{Result, SheetableError};
use ::config::{Environment, File, FileFormat};
use std::fs;

/// Prefix for environment overrides, e.g. `SHEETABLE__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "SHEETABLE";

/// Load configuration from a TOML file, layering environment overrides on top
pub fn load_config(path: &str) -> Result<Config> {
    let config: Config = ::config::Config::builder()
        .add_source(File::new(path, FileFormat::Toml))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    validate(&config)?;

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    validate(config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)
        .map_err(|e| SheetableError::Config(format!("Failed to write config file '{}': {}", path, e)))?;

    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    config.server.validate().map_err(SheetableError::Config)?;
    config.store.validate().map_err(SheetableError::Config)?;
    Ok(())
}
