//! HTTP client for the remote inference service.

use std::time::Duration;

use ovella_core::models::assessment::AssessmentInput;
use ovella_core::models::prediction::PredictionResult;

use crate::error::RemoteError;
use crate::wire::{self, RemoteResponse};

const USER_AGENT: &str = concat!("ovella/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over `reqwest` that POSTs a serialized input and
/// normalizes whatever comes back. One instance is shared by every
/// transport; `reqwest::Client` pools connections internally.
pub struct RemoteClient {
    http: reqwest::Client,
}

impl RemoteClient {
    /// The per-request timeout doubles as a safety net under the
    /// orchestrator's overall deadline.
    pub fn new(timeout: Duration) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        Ok(Self { http })
    }

    /// POST the input to one endpoint and map the response into the
    /// canonical result shape.
    pub async fn predict(
        &self,
        url: &str,
        input: &AssessmentInput,
    ) -> Result<PredictionResult, RemoteError> {
        let response = self.http.post(url).json(input).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body: RemoteResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::Malformed(e.to_string()))?;

        wire::normalize(body)
    }
}
