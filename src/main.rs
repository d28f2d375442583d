use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use hotel_booking::config::AppConfig;
use hotel_booking::handlers;
use hotel_booking::services::inventory::JsonFileInventory;
use hotel_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    tracing::info!(
        inventory = %config.inventory_path,
        elicitation_timeout_secs = ?config.elicitation_timeout_secs,
        "loaded configuration"
    );

    let state = Arc::new(AppState {
        inventory: Arc::new(JsonFileInventory::new(&config.inventory_path)),
        config: config.clone(),
        http: reqwest::Client::new(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/tools", get(handlers::tools::list_tools))
        .route("/tools/book_room", post(handlers::tools::book_room))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
