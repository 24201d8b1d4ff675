use tldr_reader::{router, NewsClient, ReaderConfig, ReaderState};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tldr_reader=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ReaderConfig::from_env()?;
    tracing::info!(
        api_url = %config.api_url,
        wire_format = config.wire_format.media_type(),
        "Configuration loaded"
    );

    let client = NewsClient::from_config(&config)?;
    let app = router(ReaderState::new(client)).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    tracing::info!("Reader listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
