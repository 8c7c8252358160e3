use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use legal_insights::llm::google::GoogleAdapter;
use legal_insights::{config::Config, routes::create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legal_insights=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; refuses to start without GEMINI_API_KEY
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // The model client is constructed once and shared read-only across
    // requests
    let llm = Arc::new(GoogleAdapter::new(
        &config.llm.google_api_key,
        &config.llm.model,
    ));
    info!(model = %config.llm.model, "Model client initialized");

    // Create shared state
    let state = AppState {
        config: config.clone(),
        llm,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
