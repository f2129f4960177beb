mod config;
mod error;
mod routes;

use anyhow::{Context, Result};
use tracing::info;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    let app = routes::router(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Server listening on {}", config.bind_addr);
    info!("Serving static files from {}", config.static_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}
