//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging with the OpenAPI/Swagger UI. The workspace's main
//! `healthbot-run` binary serves the same router.

use healthbot_core::{ChatService, CoreConfig, SessionStore, DEFAULT_REST_ADDR};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the healthbot REST API server
///
/// # Environment Variables
/// - `HEALTHBOT_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `HEALTHBOT_TRANSLATE_URL`, `HEALTHBOT_TRANSLATE_TIMEOUT_SECS`,
///   `HEALTHBOT_MAX_QUESTION_LEN`, `HEALTHBOT_MAX_SESSIONS`: see `healthbot_core::config`
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("healthbot_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("HEALTHBOT_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = CoreConfig::from_lookup(|key| std::env::var(key).ok())?;
    let chat = ChatService::from_config(&cfg)?;

    tracing::info!("-- Starting healthbot REST API on {}", addr);
    tracing::info!("-- Translating via {}", cfg.translate_endpoint());

    let app = api_rest::router(api_rest::AppState::new(
        chat,
        SessionStore::with_max_sessions(cfg.max_sessions()),
    ));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
