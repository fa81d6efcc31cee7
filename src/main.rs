use healthbot_core::{ChatService, CoreConfig, SessionStore, DEFAULT_REST_ADDR};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;

/// Main entry point for the healthbot application
///
/// Starts the REST server (default port 3000) and runs until Ctrl-C.
///
/// # Environment Variables
/// - `HEALTHBOT_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `HEALTHBOT_TRANSLATE_URL`: translation endpoint
///   (default: "https://translate.googleapis.com/translate_a/single")
/// - `HEALTHBOT_TRANSLATE_TIMEOUT_SECS`: translation request timeout (default: 10)
/// - `HEALTHBOT_MAX_QUESTION_LEN`: longest accepted question, in characters (default: 2000)
/// - `HEALTHBOT_MAX_SESSIONS`: cap on live REST sessions (default: 10000)
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, startup or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthbot_run=info".parse()?)
                .add_directive("healthbot_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("HEALTHBOT_REST_ADDR")
        .unwrap_or_else(|_| DEFAULT_REST_ADDR.into())
        .parse()?;

    let cfg = CoreConfig::from_lookup(|key| std::env::var(key).ok())?;
    let chat = ChatService::from_config(&cfg)?;

    tracing::info!("++ Starting healthbot REST on {}", rest_addr);
    tracing::info!(
        "++ Translating via {} (timeout {:?})",
        cfg.translate_endpoint(),
        cfg.translate_timeout()
    );

    let app = api_rest::router(AppState::new(
        chat,
        SessionStore::with_max_sessions(cfg.max_sessions()),
    ));

    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- healthbot stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
