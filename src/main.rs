use axum::{Router, http::header, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tally::{
    api::{handlers::api_routes, openapi::ApiDoc},
    config::CONFIG,
    core::services::SettlementService,
    infrastructure::{
        cache::in_memory::InMemoryCache, logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryBalanceStore,
    },
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&CONFIG.log_level))
        .init();
    info!("Loaded configuration: {:?}", *CONFIG);

    let store = InMemoryBalanceStore::new();
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    let service = Arc::new(SettlementService::new(store, logging, cache));

    // Expired summaries are only skipped on read, so sweep them periodically
    let sweeper = service.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CONFIG.summary_cache_ttl.max(Duration::from_secs(1)));
        loop {
            interval.tick().await;
            if let Err(e) = sweeper.purge_expired_summaries().await {
                error!("Failed to purge expired summaries: {}", e);
            }
        }
    });

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST, http::Method::PUT])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
