use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users_api::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load()?;
    tracing::info!("Storage target: {}", config.database_url());

    start_server(&config).await?;

    Ok(())
}
