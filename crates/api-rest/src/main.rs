//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development when only the HTTP surface (with OpenAPI/Swagger UI) is wanted. The
//! workspace's main `kalp-run` binary serves the same router.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use kalp_core::config::{core_config_from_env_values, screen_ttl_from_env_value};
use kalp_core::DEFAULT_REST_ADDR;

/// Main entry point for the KalpSağlık REST API server
///
/// # Environment Variables
/// - `KALP_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `KALP_SPEECH_ENGINE`: `command` or `simulated` (default: "command")
/// - `KALP_SPEECH_PROGRAM`, `KALP_SPEECH_ARGS`: speech program and argument template
/// - `KALP_SCREEN_TTL_SECS`: seconds before an unpolled screen is torn down (default: 600)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the speech configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("kalp_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("KALP_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = core_config_from_env_values(
        std::env::var("KALP_SPEECH_ENGINE").ok(),
        std::env::var("KALP_SPEECH_PROGRAM").ok(),
        std::env::var("KALP_SPEECH_ARGS").ok(),
    )?
    .with_screen_ttl(screen_ttl_from_env_value(
        std::env::var("KALP_SCREEN_TTL_SECS").ok(),
    )?);

    tracing::info!(
        "-- Starting KalpSağlık REST API on {} (speech engine: {})",
        addr,
        cfg.speech_engine()
    );

    let state = AppState::new(&cfg);
    state.spawn_screen_sweeper();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
