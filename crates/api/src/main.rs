use anyhow::{Context, Result};
use api::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{
    config::Config,
    utils::{Telemetry, init_logger},
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let providers = match &config.otel_endpoint {
        Some(endpoint) => Some(
            Telemetry::new("coffee-shop-api", endpoint.clone())
                .start()
                .context("Failed to start OpenTelemetry exporters")?,
        ),
        None => None,
    };

    init_logger(
        providers.as_ref().map(|p| &p.logger),
        "api",
        config.dev_mode,
        config.enable_file_log,
    );

    let port = config.port;

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!("🚀 Server started successfully");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    if let Some(providers) = providers
        && let Err(e) = providers.shutdown()
    {
        warn!("{e}");
    }

    Ok(())
}
