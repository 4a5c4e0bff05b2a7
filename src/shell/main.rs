use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use product_composite::shell::composition::compose;
use product_composite::shell::config::AppConfig;
use product_composite::shell::http::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    fmt().with_env_filter(filter).init();

    let application = compose(&config).context("failed to wire the application")?;
    let app = router(application.state, application.stores);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        mode = ?config.downstream.mode,
        service_address = %config.server.service_address(),
        "product composite listening on http://{addr} (GraphQL at /gql)"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    for worker in application.workers {
        worker.abort();
    }
    tracing::info!("product composite stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "failed to listen for shutdown signal");
    }
}
