//! The always-succeeding prediction front door.
//!
//! In remote-preferred mode, the direct ML-service transport races the
//! platform gateway transport for the same backend under a single
//! deadline: the first well-formed success wins and the loser is dropped.
//! Any remote failure falls back to the local engine, so `predict` can
//! only ever fail with a [`ValidationError`].

use std::time::Duration;

use tracing::{debug, info, warn};

use ovella_core::error::ValidationError;
use ovella_core::models::assessment::AssessmentInput;
use ovella_core::models::prediction::PredictionResult;
use ovella_core::validate::validate;

use crate::client::RemoteClient;
use crate::error::RemoteError;

/// Overall remote budget before the local fallback takes over.
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(15);

/// Explicit orchestrator configuration, assembled by the binary at startup
/// and passed in here — no ambient globals, nothing read at module load.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Skip the network entirely and always use the local engine.
    pub local_only: bool,
    /// Direct ML-service endpoint (preferred transport).
    pub ml_service_url: Option<String>,
    /// Platform gateway endpoint for the same backend (alternate transport).
    pub gateway_url: Option<String>,
    /// Overall budget for the remote attempt.
    pub remote_timeout: Duration,
}

impl InferenceConfig {
    /// Pure local computation, no network.
    pub fn local_only() -> Self {
        Self {
            local_only: true,
            ml_service_url: None,
            gateway_url: None,
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }
}

/// Stateless per-request prediction orchestrator. Holds no mutable state,
/// so one instance can serve any number of concurrent callers.
pub struct Orchestrator {
    config: InferenceConfig,
    client: RemoteClient,
}

impl Orchestrator {
    pub fn new(config: InferenceConfig) -> Result<Self, RemoteError> {
        let client = RemoteClient::new(config.remote_timeout)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Validate a raw submission and predict.
    ///
    /// Only validation failures surface as errors; every remote failure
    /// mode degrades to the deterministic local engine.
    pub async fn predict(
        &self,
        raw: &serde_json::Value,
    ) -> Result<PredictionResult, ValidationError> {
        let input = validate(raw)?;
        Ok(self.predict_validated(&input).await)
    }

    /// Predict for an already-validated input. Infallible.
    pub async fn predict_validated(&self, input: &AssessmentInput) -> PredictionResult {
        if self.config.local_only {
            debug!("local-only mode, skipping remote inference");
            return ovella_engine::evaluate(input);
        }

        let remote =
            tokio::time::timeout(self.config.remote_timeout, self.race_transports(input)).await;
        match remote {
            Ok(Ok(result)) => {
                info!(label = %result.label, path = "remote", "prediction obtained");
                result
            }
            Ok(Err(e)) => {
                warn!(error = %e, path = "fallback", "remote inference failed, using local engine");
                ovella_engine::evaluate(input)
            }
            Err(_) => {
                warn!(
                    timeout = ?self.config.remote_timeout,
                    path = "fallback",
                    "remote inference timed out, using local engine"
                );
                ovella_engine::evaluate(input)
            }
        }
    }

    /// Race the configured transports; first well-formed success wins.
    ///
    /// When the first finisher failed, the survivor is awaited — a slow
    /// success still beats a fast failure. The losing future is dropped on
    /// return, which cancels its in-flight request.
    async fn race_transports(
        &self,
        input: &AssessmentInput,
    ) -> Result<PredictionResult, RemoteError> {
        match (
            self.config.ml_service_url.as_deref(),
            self.config.gateway_url.as_deref(),
        ) {
            (Some(direct_url), Some(gateway_url)) => {
                let direct = self.client.predict(direct_url, input);
                let gateway = self.client.predict(gateway_url, input);
                tokio::pin!(direct, gateway);

                tokio::select! {
                    outcome = &mut direct => match outcome {
                        Ok(result) => Ok(result),
                        Err(e) => {
                            warn!(error = %e, transport = "direct", "transport failed, awaiting alternate");
                            gateway.await
                        }
                    },
                    outcome = &mut gateway => match outcome {
                        Ok(result) => Ok(result),
                        Err(e) => {
                            warn!(error = %e, transport = "gateway", "transport failed, awaiting alternate");
                            direct.await
                        }
                    },
                }
            }
            (Some(url), None) | (None, Some(url)) => self.client.predict(url, input).await,
            (None, None) => Err(RemoteError::NotConfigured),
        }
    }
}
