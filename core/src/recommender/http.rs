use crate::config::{ClientConfig, ConfigError};
use crate::recommender::{
    Recommendation, RecommendationField, RecommendError, Recommender, RecommenderInfo,
};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

/// Error body fields that may carry a human-readable message, in priority order
pub const ERROR_MESSAGE_FIELDS: [&str; 3] = ["message", "detail", "error"];

#[derive(Debug, Serialize)]
struct RecommendRequest<'a> {
    input: &'a str,
    session_id: &'a str,
}

/// Recommender backed by the remote `/recommend` endpoint
pub struct HttpRecommender {
    info: RecommenderInfo,
    client: reqwest::Client,
    recommend_url: String,
    health_url: String,
    session_id: String,
    request_timeout: Duration,
}

impl HttpRecommender {
    pub fn new(config: &ClientConfig) -> Result<Self, RecommendError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            info: RecommenderInfo {
                name: "Recommendation API".to_string(),
                description: format!("Product recommendations from {}", config.base_url),
                version: "0.1.0".to_string(),
            },
            client,
            recommend_url: config.recommend_url(),
            health_url: config.health_url(),
            session_id: config.session_id.clone(),
            request_timeout: config.request_timeout,
        })
    }

    /// Call the service root and return its greeting, if it sent one.
    pub async fn ping(&self) -> Result<Option<String>, RecommendError> {
        let resp = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(server_error(status.as_u16(), &body));
        }

        Ok(serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string)))
    }

    fn transport_error(&self, error: reqwest::Error) -> RecommendError {
        if error.is_timeout() {
            RecommendError::Timeout(self.request_timeout)
        } else {
            RecommendError::Connectivity(error.to_string())
        }
    }
}

#[async_trait]
impl Recommender for HttpRecommender {
    async fn recommend(&self, text: &str) -> Result<Recommendation, RecommendError> {
        let start = Instant::now();
        let body = RecommendRequest {
            input: text,
            session_id: &self.session_id,
        };
        debug!(url = %self.recommend_url, "sending recommendation request");

        let resp = self
            .client
            .post(&self.recommend_url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(server_error(status.as_u16(), &body));
        }

        let body = resp.text().await.map_err(|e| self.transport_error(e))?;
        let (text, field) = extract_recommendation(&body)?;
        debug!(field = field.key(), elapsed_ms = start.elapsed().as_millis() as u64, "recommendation received");

        Ok(Recommendation {
            text,
            field,
            elapsed: start.elapsed(),
        })
    }

    fn info(&self) -> RecommenderInfo {
        self.info.clone()
    }
}

fn server_error(status: u16, body: &str) -> RecommendError {
    let message = extract_error_message(body).unwrap_or_else(|| format!("status code {status}"));
    RecommendError::Server { status, message }
}

fn non_empty_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Pull a human-readable message out of an error body. Returns `None` when the
/// body is not JSON or has none of [`ERROR_MESSAGE_FIELDS`] as a string.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ERROR_MESSAGE_FIELDS
        .iter()
        .find_map(|key| non_empty_str(&value, key))
        .map(str::to_string)
}

/// Pull the recommendation text out of a success body, checking
/// [`RecommendationField::PRIORITY`] in order.
pub fn extract_recommendation(body: &str) -> Result<(String, RecommendationField), RecommendError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| RecommendError::InvalidResponse(format!("decode error: {e}")))?;
    if !value.is_object() {
        return Err(RecommendError::InvalidResponse(
            "expected a JSON object".to_string(),
        ));
    }

    RecommendationField::PRIORITY
        .iter()
        .find_map(|field| non_empty_str(&value, field.key()).map(|text| (text.to_string(), *field)))
        .ok_or_else(|| RecommendError::NoRecommendation {
            detail: non_empty_str(&value, "error").map(str::to_string),
        })
}
