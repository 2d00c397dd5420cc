use super::{serve, test_config};
use crate::recommender::http::{extract_error_message, extract_recommendation};
use crate::recommender::{
    ErrorKind, HttpRecommender, RecommendationField, RecommendError, Recommender, RecommenderFactory,
};
use axum::http::{header::CONTENT_TYPE, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

async fn recommender_for(router: Router) -> HttpRecommender {
    let base_url = serve(router).await;
    HttpRecommender::new(&test_config(&base_url)).expect("Failed to build recommender")
}

#[tokio::test]
async fn test_recommendation_field_is_returned() {
    let recommender = recommender_for(Router::new().route(
        "/recommend",
        post(|| async { Json(json!({ "recommendation": "Consider the X1 Carbon." })) }),
    ))
    .await;

    let recommendation = recommender.recommend("best budget laptop").await.unwrap();

    assert_eq!(recommendation.text, "Consider the X1 Carbon.");
    assert_eq!(recommendation.field, RecommendationField::Recommendation);
}

#[tokio::test]
async fn test_answer_field_is_accepted_as_fallback() {
    let recommender = recommender_for(Router::new().route(
        "/recommend",
        post(|| async { Json(json!({ "answer": "Try the Sony WH-1000XM5." })) }),
    ))
    .await;

    let recommendation = recommender.recommend("noise cancelling headphones").await.unwrap();

    assert_eq!(recommendation.text, "Try the Sony WH-1000XM5.");
    assert_eq!(recommendation.field, RecommendationField::Answer);
}

#[tokio::test]
async fn test_request_shape() {
    let seen: Arc<Mutex<Option<(String, Value)>>> = Arc::new(Mutex::new(None));
    let captured = seen.clone();
    let recommender = recommender_for(Router::new().route(
        "/recommend",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let captured = captured.clone();
            async move {
                let content_type = headers
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                *captured.lock().unwrap() = Some((content_type, body));
                Json(json!({ "recommendation": "ok" }))
            }
        }),
    ))
    .await;

    recommender.recommend("usb-c hub").await.unwrap();

    let (content_type, body) = seen.lock().unwrap().clone().expect("request not captured");
    assert_eq!(content_type, "application/json");
    assert_eq!(body, json!({ "input": "usb-c hub", "session_id": "default" }));
}

#[tokio::test]
async fn test_server_error_without_body_uses_status_code() {
    let recommender = recommender_for(Router::new().route(
        "/recommend",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;

    let err = recommender.recommend("laptop").await.unwrap_err();

    assert_eq!(
        err,
        RecommendError::Server {
            status: 500,
            message: "status code 500".to_string()
        }
    );
    assert_eq!(err.kind(), ErrorKind::Server);
}

#[tokio::test]
async fn test_server_error_body_message_is_used() {
    let recommender = recommender_for(Router::new().route(
        "/recommend",
        post(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "detail": "model overloaded" })),
            )
        }),
    ))
    .await;

    let err = recommender.recommend("laptop").await.unwrap_err();

    assert_eq!(
        err,
        RecommendError::Server {
            status: 503,
            message: "model overloaded".to_string()
        }
    );
}

#[tokio::test]
async fn test_success_without_recommendation_is_soft_failure() {
    let recommender = recommender_for(Router::new().route(
        "/recommend",
        post(|| async { Json(json!({ "error": "vector store unavailable" })) }),
    ))
    .await;

    let err = recommender.recommend("tv").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NoRecommendation);
    assert_eq!(
        err,
        RecommendError::NoRecommendation {
            detail: Some("vector store unavailable".to_string())
        }
    );
}

#[tokio::test]
async fn test_non_object_body_is_unexpected() {
    let recommender = recommender_for(Router::new().route(
        "/recommend",
        post(|| async { Json(json!(["not", "an", "object"])) }),
    ))
    .await;

    let err = recommender.recommend("tv").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
}

#[tokio::test]
async fn test_unreachable_server_is_connectivity_error() {
    // Grab a free port, then close it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let recommender = HttpRecommender::new(&test_config(&format!("http://{addr}"))).unwrap();
    let err = recommender.recommend("keyboard").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Connectivity);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let base_url = serve(Router::new().route(
        "/recommend",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "recommendation": "too late" }))
        }),
    ))
    .await;
    let config = test_config(&base_url).with_request_timeout(Duration::from_millis(200));
    let recommender = HttpRecommender::new(&config).unwrap();

    let err = recommender.recommend("webcam").await.unwrap_err();

    assert_eq!(err, RecommendError::Timeout(Duration::from_millis(200)));
}

#[tokio::test]
async fn test_ping_returns_greeting() {
    let recommender = recommender_for(Router::new().route(
        "/",
        get(|| async { Json(json!({ "message": "Hello from system starts!" })) }),
    ))
    .await;

    let greeting = recommender.ping().await.unwrap();

    assert_eq!(greeting.as_deref(), Some("Hello from system starts!"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = test_config("localhost:8000");
    let result = RecommenderFactory::http(&config);
    assert!(matches!(result, Err(RecommendError::Configuration(_))));
}

#[test]
fn test_extract_recommendation_priority() {
    let body = r#"{"answer": "second", "recommendation": "first"}"#;
    let (text, field) = extract_recommendation(body).unwrap();
    assert_eq!(text, "first");
    assert_eq!(field, RecommendationField::Recommendation);

    // Blank values do not count
    let body = r#"{"recommendation": "  ", "answer": "fallback"}"#;
    let (text, field) = extract_recommendation(body).unwrap();
    assert_eq!(text, "fallback");
    assert_eq!(field, RecommendationField::Answer);
}

#[test]
fn test_extract_error_message() {
    assert_eq!(
        extract_error_message(r#"{"message": "bad input", "detail": "ignored"}"#).as_deref(),
        Some("bad input")
    );
    assert_eq!(
        extract_error_message(r#"{"error": "boom"}"#).as_deref(),
        Some("boom")
    );
    // FastAPI validation errors carry a list, not a string
    assert_eq!(extract_error_message(r#"{"detail": [{"loc": ["body"]}]}"#), None);
    assert_eq!(extract_error_message("<html>502 Bad Gateway</html>"), None);
    assert_eq!(extract_error_message(""), None);
}
