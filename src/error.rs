use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetableError {
    #[error("Delta table error: {0}")]
    DeltaTable(#[from] deltalake::DeltaTableError),

    #[error("DataFusion error: {0}")]
    DataFusion(#[from] datafusion::error::DataFusionError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    #[error("Schema generation error: {0}")]
    SchemaGeneration(String),

    #[error("Row decoding error: {0}")]
    RowDecode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for SheetableError {
    fn from(err: toml::de::Error) -> Self {
        SheetableError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for SheetableError {
    fn from(err: toml::ser::Error) -> Self {
        SheetableError::Serialization(format!("TOML serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SheetableError>;
