use std::sync::Arc;

use anyhow::Context;

use discvr_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::load(".env").context("invalid configuration")?;
    discvr_observability::init(config.log_format);

    if config.gemini.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; /api/ask will fail until it is configured");
    }

    let services = discvr_api::app::services::build_services(&config)?;
    let app = discvr_api::app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
