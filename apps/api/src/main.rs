mod advisor;
mod config;
mod errors;
mod feedback;
mod llm_client;
mod models;
mod normalize;
mod pitch;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::prompts::FUNDINGNEMO_SYSTEM;
use crate::llm_client::GradientClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("fundingnemo_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FundingNEMO API v{}", env!("CARGO_PKG_VERSION"));

    // The persona is fixed at construction; the credential is read per call.
    let llm = GradientClient::new(FUNDINGNEMO_SYSTEM);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState { llm: Arc::new(llm) };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
