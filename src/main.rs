use clap::{Parser, Subcommand};
use sheetable_graphql::error::Result;

mod cli;

#[derive(Parser)]
#[command(name = "sheetable-graphql")]
#[command(version)]
#[command(about = "Read-only GraphQL API over a sheet music catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate configuration for existing tables, or set up the demo catalog
    Init {
        /// Convert the bundled demo CSVs into Delta tables and configure them
        #[arg(long)]
        example: bool,

        /// Location of the sheets table (required unless --example is used)
        #[arg(long, required_unless_present = "example")]
        sheets: Option<String>,

        /// Location of the composers table (required unless --example is used)
        #[arg(long, required_unless_present = "example")]
        composers: Option<String>,

        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Start GraphQL server
    Serve {
        /// Config file path
        #[arg(long, default_value = "sheetable.toml")]
        config: String,

        /// Server port (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            example,
            sheets,
            composers,
            output,
        } => {
            cli::init::run(example, sheets, composers, output).await?;
        }
        Commands::Serve { config, port } => {
            cli::serve::run(config, port).await?;
        }
    }

    Ok(())
}
