//! Orchestrator behavior against a local mock inference service: remote
//! success, tolerant normalization, racing, and the fallback guarantee.

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use ovella_core::models::assessment::AssessmentInput;
use ovella_core::models::prediction::RiskLabel;
use ovella_core::validate::validate;
use ovella_inference::{InferenceConfig, Orchestrator};

/// Serve a router on an ephemeral port, returning the /predict URL.
async fn spawn_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}/predict")
}

fn remote_config(url: String) -> InferenceConfig {
    InferenceConfig {
        local_only: false,
        ml_service_url: Some(url),
        gateway_url: None,
        remote_timeout: Duration::from_secs(2),
    }
}

/// Low-risk submission: the local engine would say "No Risk", so any test
/// that sees another label knows the remote response was used.
fn submission() -> serde_json::Value {
    json!({
        "age": 25,
        "weight": 60,
        "height": 168,
        "cycleRegularity": "regular",
        "exerciseFrequency": "3-4_week",
        "diet": "balanced",
    })
}

fn validated() -> AssessmentInput {
    validate(&submission()).expect("submission is valid")
}

fn early_response() -> serde_json::Value {
    json!({
        "label": "Early",
        "probabilities": { "NoRisk": 0.2, "Early": 0.6, "High": 0.2 },
        "topContributors": [
            { "feature": "BMI", "contribution": 0.3, "explanation": "from the model" }
        ],
    })
}

#[tokio::test]
async fn local_only_mode_matches_the_engine() {
    let orchestrator = Orchestrator::new(InferenceConfig::local_only()).expect("orchestrator");

    let result = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(result, ovella_engine::evaluate(&validated()));
}

#[tokio::test]
async fn local_only_mode_is_idempotent() {
    let orchestrator = Orchestrator::new(InferenceConfig::local_only()).expect("orchestrator");

    let first = orchestrator.predict(&submission()).await.expect("valid input");
    let second = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(
        serde_json::to_vec(&first).expect("serializable"),
        serde_json::to_vec(&second).expect("serializable"),
    );
}

#[tokio::test]
async fn validation_failure_is_the_only_error_path() {
    let orchestrator = Orchestrator::new(InferenceConfig::local_only()).expect("orchestrator");

    let err = orchestrator
        .predict(&json!({ "age": 5 }))
        .await
        .expect_err("invalid submission must be rejected");
    assert!(!err.violations.is_empty());
}

#[tokio::test]
async fn a_well_formed_remote_response_wins_over_the_local_engine() {
    let url = spawn_service(Router::new().route(
        "/predict",
        post(|| async { Json(early_response()) }),
    ))
    .await;
    let orchestrator = Orchestrator::new(remote_config(url)).expect("orchestrator");

    let result = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(result.label, RiskLabel::Early);
    assert_eq!(
        result.top_contributors[0].explanation.as_deref(),
        Some("from the model")
    );
}

#[tokio::test]
async fn alternate_casing_and_naming_are_normalized() {
    let url = spawn_service(Router::new().route(
        "/predict",
        post(|| async {
            Json(json!({
                "label": "Early",
                "probabilities": { "noRisk": 1.0, "early": 2.0, "high": 1.0 },
                "top_contributors": [
                    { "feature": "Insulin Resistance", "contribution": 0.9 }
                ],
            }))
        }),
    ))
    .await;
    let orchestrator = Orchestrator::new(remote_config(url)).expect("orchestrator");

    let result = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(result.label, RiskLabel::Early);

    // Raw values are re-normalized to sum 1.0.
    assert!((result.probabilities.sum() - 1.0).abs() < 1e-9);
    assert_eq!(result.probabilities.early, 0.5);

    // Missing explanations are filled from the static table.
    assert_eq!(
        result.top_contributors[0].explanation.as_deref(),
        Some("Insulin Resistance contributes to your risk assessment.")
    );
}

#[tokio::test]
async fn falls_back_on_server_error() {
    let url = spawn_service(Router::new().route(
        "/predict",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;
    let orchestrator = Orchestrator::new(remote_config(url)).expect("orchestrator");

    let result = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(result, ovella_engine::evaluate(&validated()));
}

#[tokio::test]
async fn falls_back_on_malformed_payload() {
    let url = spawn_service(Router::new().route(
        "/predict",
        post(|| async { Json(json!({ "status": "ok" })) }),
    ))
    .await;
    let orchestrator = Orchestrator::new(remote_config(url)).expect("orchestrator");

    let result = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(result, ovella_engine::evaluate(&validated()));
}

#[tokio::test]
async fn falls_back_on_zero_sum_probabilities() {
    let url = spawn_service(Router::new().route(
        "/predict",
        post(|| async {
            Json(json!({
                "label": "High",
                "probabilities": { "NoRisk": 0.0, "Early": 0.0, "High": 0.0 },
            }))
        }),
    ))
    .await;
    let orchestrator = Orchestrator::new(remote_config(url)).expect("orchestrator");

    let result = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(result, ovella_engine::evaluate(&validated()));
}

#[tokio::test]
async fn falls_back_within_the_timeout_bound() {
    let url = spawn_service(Router::new().route(
        "/predict",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(early_response())
        }),
    ))
    .await;
    let mut config = remote_config(url);
    config.remote_timeout = Duration::from_millis(300);
    let orchestrator = Orchestrator::new(config).expect("orchestrator");

    let started = Instant::now();
    let result = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(result, ovella_engine::evaluate(&validated()));
    assert!(
        started.elapsed() < Duration::from_secs(2),
        "fallback must not wait for the slow remote"
    );
}

#[tokio::test]
async fn falls_back_when_no_endpoint_is_configured() {
    let config = InferenceConfig {
        local_only: false,
        ml_service_url: None,
        gateway_url: None,
        remote_timeout: Duration::from_secs(2),
    };
    let orchestrator = Orchestrator::new(config).expect("orchestrator");

    let result = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(result, ovella_engine::evaluate(&validated()));
}

#[tokio::test]
async fn the_faster_transport_wins_the_race() {
    let slow = spawn_service(Router::new().route(
        "/predict",
        post(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({
                "label": "High",
                "probabilities": { "NoRisk": 0.1, "Early": 0.2, "High": 0.7 },
            }))
        }),
    ))
    .await;
    let fast = spawn_service(Router::new().route(
        "/predict",
        post(|| async { Json(early_response()) }),
    ))
    .await;

    let config = InferenceConfig {
        local_only: false,
        ml_service_url: Some(slow),
        gateway_url: Some(fast),
        remote_timeout: Duration::from_secs(2),
    };
    let orchestrator = Orchestrator::new(config).expect("orchestrator");

    let result = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(result.label, RiskLabel::Early, "the fast gateway should win");
}

#[tokio::test]
async fn a_slow_success_beats_a_fast_failure() {
    let failing = spawn_service(Router::new().route(
        "/predict",
        post(|| async { StatusCode::BAD_GATEWAY }),
    ))
    .await;
    let succeeding = spawn_service(Router::new().route(
        "/predict",
        post(|| async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Json(early_response())
        }),
    ))
    .await;

    let config = InferenceConfig {
        local_only: false,
        ml_service_url: Some(failing),
        gateway_url: Some(succeeding),
        remote_timeout: Duration::from_secs(2),
    };
    let orchestrator = Orchestrator::new(config).expect("orchestrator");

    let result = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(result.label, RiskLabel::Early, "the surviving transport should win");
}

#[tokio::test]
async fn both_transports_failing_falls_back_locally() {
    let a = spawn_service(Router::new().route(
        "/predict",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;
    let b = spawn_service(Router::new().route(
        "/predict",
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;

    let config = InferenceConfig {
        local_only: false,
        ml_service_url: Some(a),
        gateway_url: Some(b),
        remote_timeout: Duration::from_secs(2),
    };
    let orchestrator = Orchestrator::new(config).expect("orchestrator");

    let result = orchestrator.predict(&submission()).await.expect("valid input");
    assert_eq!(result, ovella_engine::evaluate(&validated()));
}
