use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users_ui::{terminal, ApiClient, UiConfig, UsersView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the rendered page
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users_ui=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = UiConfig::load()?;
    tracing::info!("Using API at {}", config.url);

    let view = UsersView::new(ApiClient::new(config)?);

    terminal::run(view, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    Ok(())
}
