mod error;
mod handlers;
mod nlp_service;
mod record;
mod routes;
mod sentiment;
mod settings;
mod state;
mod store;
mod translate;

#[cfg(test)]
mod testing;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use settings::Settings;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sentiment_api=debug,tower_http=debug")),
        )
        .init();

    let settings = Settings::load()?;
    info!(
        "Loaded settings: database={}, collection={}",
        settings.mongo_database, settings.mongo_collection
    );

    let app_state = AppState::new(&settings).await?;

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
