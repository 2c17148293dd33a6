use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use kalp_core::DEFAULT_REST_ADDR;
use kalp_core::config::{core_config_from_env_values, screen_ttl_from_env_value};

/// Main entry point for the KalpSağlık service
///
/// Serves the REST API (with Swagger UI) until Ctrl-C, then tears down every mounted screen so no
/// narration outlives the process.
///
/// # Environment Variables
/// - `KALP_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `KALP_SPEECH_ENGINE`: `command` or `simulated` (default: "command")
/// - `KALP_SPEECH_PROGRAM`: speech program for the command engine (default: "espeak-ng")
/// - `KALP_SPEECH_ARGS`: whitespace-separated argument template for that program
/// - `KALP_SCREEN_TTL_SECS`: seconds a mounted screen may go unpolled before it is torn down
///   (default: 600)
///
/// # Returns
/// * `Ok(())` - If the server starts, runs and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kalp_run=info".parse()?)
                .add_directive("kalp_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("KALP_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = core_config_from_env_values(
        std::env::var("KALP_SPEECH_ENGINE").ok(),
        std::env::var("KALP_SPEECH_PROGRAM").ok(),
        std::env::var("KALP_SPEECH_ARGS").ok(),
    )?
    .with_screen_ttl(screen_ttl_from_env_value(
        std::env::var("KALP_SCREEN_TTL_SECS").ok(),
    )?);

    tracing::info!("++ Starting KalpSağlık REST on {}", rest_addr);
    tracing::info!(
        "++ Speech engine: {} ({})",
        cfg.speech_engine(),
        cfg.speech_command().program()
    );
    tracing::info!("++ Idle screens evicted after {:?}", cfg.screen_ttl());

    let state = AppState::new(&cfg);
    let sweeper = state.spawn_screen_sweeper();
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Shutting down, stopping narration");
    sweeper.abort();
    state.screens().unmount_all().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
