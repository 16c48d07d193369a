use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

/// Header the upstream auth collaborator uses to forward the caller
/// identity.
pub const CALLER_HEADER: &str = "x-caller-id";

/// Audit logging middleware.
///
/// Logs every API request as a structured event with the truncated caller
/// identity and handling latency; the JSON subscriber ships these to the
/// platform's log sink. Identifiers are cut down before logging so full
/// user ids never land in the logs.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let caller = truncated(caller_id(req.headers()));

    let started = Instant::now();
    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        caller = %caller,
        latency_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}

/// Caller identity from the forwarded header; unauthenticated traffic is
/// tagged `anonymous`.
pub fn caller_id(headers: &HeaderMap) -> &str {
    headers
        .get(CALLER_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("anonymous")
}

/// Keep only the first few characters of an identifier for logging.
pub fn truncated(id: &str) -> String {
    let head: String = id.chars().take(8).collect();
    format!("{head}...")
}
