use anyhow::Context;

use discog_api::bootstrap;
use discog_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    // --- Tracing ---
    bootstrap::init_tracing(config.log_format);
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Dependencies ---
    let state = bootstrap::build_state(config)
        .await
        .context("Startup aborted")?;

    // --- Serve ---
    bootstrap::serve(state).await?;
    Ok(())
}
