use thiserror::Error;

/// Failures talking to the remote inference service.
///
/// Every variant is an expected, handled condition: the orchestrator
/// absorbs them into the local fallback and none of them ever reach the
/// caller as an error.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("no remote endpoint configured")]
    NotConfigured,

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("service returned status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RemoteError::Timeout
        } else if e.is_decode() {
            RemoteError::Malformed(e.to_string())
        } else {
            RemoteError::Network(e.to_string())
        }
    }
}
