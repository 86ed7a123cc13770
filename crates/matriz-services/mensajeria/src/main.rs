use std::sync::Arc;

use matriz_mensajeria::{create_router, AppState, GraphClient, MensajeriaConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = MensajeriaConfig::default();
    tracing::info!(
        "Starting mensajeria service on {}:{}",
        config.host,
        config.port
    );

    if config.verify_token.is_empty() {
        tracing::warn!("WHATSAPP_VERIFY_TOKEN is empty; webhook verification will fail");
    }

    let graph = GraphClient::new(&config)?;
    let state = Arc::new(AppState::new(config.clone(), graph));

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
