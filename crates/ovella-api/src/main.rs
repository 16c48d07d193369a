use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use ovella_api::state::AppState;
use ovella_inference::{InferenceConfig, Orchestrator, DEFAULT_REMOTE_TIMEOUT};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for the hosting platform's log sink.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let local_only = env::var("OVELLA_LOCAL_ONLY")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let ml_service_url = env::var("OVELLA_ML_URL").ok();
    let gateway_url = env::var("OVELLA_GATEWAY_URL").ok();
    let remote_timeout = env::var("OVELLA_REMOTE_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_REMOTE_TIMEOUT);

    let config = InferenceConfig {
        local_only,
        ml_service_url,
        gateway_url,
        remote_timeout,
    };
    if config.local_only {
        tracing::info!("starting in local-only mode, remote inference disabled");
    } else if config.ml_service_url.is_none() && config.gateway_url.is_none() {
        tracing::warn!("no remote endpoint configured, every prediction will use the local engine");
    }

    let orchestrator = Orchestrator::new(config)?;
    let state = AppState {
        orchestrator: Arc::new(orchestrator),
    };

    let app = ovella_api::router(state);

    let addr = env::var("OVELLA_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
