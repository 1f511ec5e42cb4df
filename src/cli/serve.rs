use sheetable_graphql::catalog::DataFusionStore;
use sheetable_graphql::error::Result;
use sheetable_graphql::schema::SchemaBuilder;
use std::sync::Arc;

/// Run the serve command to start the GraphQL server
pub async fn run(config_path: String, port: Option<u16>) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    let config = sheetable_graphql::config::load_config(&config_path)?;
    let server_port = port.unwrap_or(config.server.port);

    tracing::info!("🔧 Opening catalog tables...");
    let store = DataFusionStore::open(&config.store).await?;

    let schema = SchemaBuilder::new(Arc::new(store)).build_schema()?;

    tracing::info!("✅ Schema built successfully");
    tracing::info!(
        "🚀 GraphQL server running on http://{}:{}{}",
        config.server.bind,
        server_port,
        config.server.path
    );
    if config.server.playground {
        tracing::info!(
            "📊 Playground: http://localhost:{}{}",
            server_port,
            config.server.path
        );
    }
    tracing::info!("💡 Press Ctrl+C to stop the server");

    sheetable_graphql::server::serve(schema, &config.server, server_port).await
}
