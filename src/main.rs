use cinebot::api::{create_router, AppState};
use cinebot::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    if config.tmdb_api_key.is_none() {
        tracing::warn!("TMDB_API_KEY is not set; chat turns will report a configuration error");
    }

    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "cinebot listening");
    axum::serve(listener, app).await?;

    Ok(())
}
