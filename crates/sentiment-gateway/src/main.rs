//! Sentiment gateway
//!
//! - `POST /`         : classify `{ "msg" }`
//! - `POST /feedback` : record `{ "msg", "feedback" }`
//! - `GET  /metrics`  : Prometheus text exposition
//!
//! Config path comes from `SENTIMENT_CONFIG` (default `sentiment.yaml`).

use tracing_subscriber::{fmt, EnvFilter};

use sentiment_core::error::{Result, SentimentError};
use sentiment_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("SENTIMENT_CONFIG")
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.server.listen_addr()?;
    let buckets = cfg.metrics.input_size_buckets.clone();

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, config = %path, ?buckets, "sentiment-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SentimentError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| SentimentError::Internal(format!("server failed: {e}")))?;

    tracing::info!("sentiment-gateway stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "ctrl-c handler failed; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    state.set_draining();
    tracing::info!("shutdown requested, draining");
}
