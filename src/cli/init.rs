use crate::cli::example::{example_config, DEMO_DELTA_DIR};
use sheetable_graphql::config::{Config, ServerConfig, StoreConfig};
use sheetable_graphql::error::{Result, SheetableError};

/// Run the init command to configure existing tables or set up the demo catalog
pub async fn run(
    example: bool,
    sheets: Option<String>,
    composers: Option<String>,
    output: Option<String>,
) -> Result<()> {
    let config = if example {
        tracing::info!("🎼 Setting up the demo sheet music catalog...");
        crate::cli::convert::convert_example_data(DEMO_DELTA_DIR).await?;
        example_config(DEMO_DELTA_DIR)
    } else {
        let (Some(sheets), Some(composers)) = (sheets, composers) else {
            return Err(SheetableError::Config(
                "--sheets and --composers are required unless --example is used".to_string(),
            ));
        };
        Config {
            server: ServerConfig::default(),
            store: StoreConfig { sheets, composers },
        }
    };

    tracing::info!("   • sheets    -> {}", config.store.sheets);
    tracing::info!("   • composers -> {}", config.store.composers);

    // Output to stdout or file
    if let Some(output_path) = output {
        sheetable_graphql::config::save_config(&config, &output_path)?;
        tracing::info!("📝 Generated {}", output_path);
        tracing::info!("🚀 Ready to serve! Run: sheetable-graphql serve --config {}", output_path);
    } else {
        let toml_string = toml::to_string_pretty(&config)?;
        println!("{}", toml_string);
        tracing::info!("💡 Tip: Add --output <file> to save to a file instead of stdout");
    }

    Ok(())
}
