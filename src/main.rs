use duck_curve_api::repositories::EmoncmsClient;
use duck_curve_api::services::WarmupScheduler;
use duck_curve_api::{create_router, AppState, Config};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Starting duck-curve-api");

    let config = Config::from_env()?;
    info!("Configuration loaded");

    let client = EmoncmsClient::new(&config.provider)?;
    let state = AppState::new(Arc::new(client));

    if config.warmup.enabled {
        let summary = WarmupScheduler::new(state.loader.clone(), &config.warmup)
            .run()
            .await;
        info!(loaded = summary.loaded, failed = summary.failed, "Warmup complete");
    }

    let router = create_router(state);
    let addr = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    info!("API server listening on {}", addr);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
        }
        info!("Shutdown signal received");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Application shutdown complete");
    Ok(())
}
