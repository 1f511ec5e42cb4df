/// HTTP transport for the GraphQL schema
///
/// One endpoint (configurable path) accepts GraphQL over POST (JSON body) and
/// GET (query string) and answers with `{"data": ..., "errors": [...]}`.

use crate::config::ServerConfig;
use crate::error::{Result, SheetableError};

use async_graphql::dynamic::Schema;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

struct AppState {
    schema: Schema,
    pretty: bool,
}

/// Build the router serving `schema` at `config.path`, plus `/health`
pub fn router(schema: Schema, config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        schema,
        pretty: config.pretty,
    });

    // With the playground on, GET serves the UI instead of executing queries
    let endpoint = if config.playground {
        let path = config.path.clone();
        get(move || graphql_playground(path)).post(graphql_handler)
    } else {
        get(graphql_handler).post(graphql_handler)
    };

    Router::new()
        .route(&config.path, endpoint)
        .route("/health", get(health_check))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Bind to `config.bind:port` and serve until the process stops
pub async fn serve(schema: Schema, config: &ServerConfig, port: u16) -> Result<()> {
    let app = router(schema, config);

    let addr = format!("{}:{}", config.bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        SheetableError::Config(format!(
            "Failed to bind to {}: {}. Port may be in use.",
            addr, e
        ))
    })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| SheetableError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

async fn graphql_handler(State(state): State<Arc<AppState>>, request: GraphQLRequest) -> Response {
    let response = state.schema.execute(request.into_inner()).await;

    if !response.errors.is_empty() {
        tracing::debug!("Query finished with {} error(s)", response.errors.len());
    }

    if !state.pretty {
        return GraphQLResponse::from(response).into_response();
    }

    match serde_json::to_string_pretty(&response) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize GraphQL response: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn graphql_playground(path: String) -> Html<String> {
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new(&path),
    ))
}

async fn health_check() -> &'static str {
    "OK"
}
