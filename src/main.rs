//! Server entry point: `.env`, logging, configuration, storage, then serve until Ctrl-C.

use fra_registry::{build_state, create_app, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fra_registry=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "loaded configuration");
    if config.uses_default_secret() {
        tracing::warn!("SECRET_KEY is not set; using the insecure development default");
    }

    let bind_addr = config.bind_addr.clone();
    let state = build_state(config).await?;
    let app = create_app(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
