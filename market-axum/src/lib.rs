#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

use axum::{Router, http::header, routing};
use market_core::ports::MarketplaceRepository;
use tower_http::cors;

pub mod config;
mod errors;
mod openapi;
mod routes;

use config::AxumConfig;
use openapi::openapi_router;

/// Shared state for every handler: the repository the routes operate on.
#[derive(Clone)]
pub struct AppState<T: MarketplaceRepository> {
    repository: T,
}

/// Build the application router over the given repository.
///
/// The resource routers are nested under `/api`; the OpenAPI document and
/// RapiDoc UI are merged alongside, and a permissive CORS policy is applied
/// so browser clients can reach the API directly.
pub fn router<T: MarketplaceRepository>(repository: T) -> Router {
    let policy = cors::CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers([header::CONTENT_TYPE]);

    // Each resource router registers both slash forms of its paths, so the
    // canonical trailing-slash URLs resolve after the prefix is stripped.
    Router::new()
        .nest(
            "/api",
            routes::markets::router()
                .merge(routes::sellers::router())
                .merge(routes::products::router()),
        )
        .route("/health", routing::get(health))
        .layer(policy)
        .with_state(AppState { repository })
        .merge(openapi_router())
}

async fn health() -> &'static str {
    "OK"
}

/// Bind the configured address and serve requests until shutdown.
pub async fn start_server<T: MarketplaceRepository>(
    config: AxumConfig,
    repository: T,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!(
        "Listening for requests on {}",
        listener.local_addr()?
    );
    axum::serve(listener, router(repository)).await
}
