use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::{ClientConfig, ConfigError};

pub mod http;
pub mod mock;

#[cfg(test)]
mod tests;

pub use http::HttpRecommender;
pub use mock::MockRecommender;

/// Anything that can answer a product question
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Ask for a recommendation for the given question
    async fn recommend(&self, text: &str) -> Result<Recommendation, RecommendError>;

    /// Get recommender information
    fn info(&self) -> RecommenderInfo;
}

/// Response fields that may carry the recommendation, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationField {
    Recommendation,
    Answer,
}

impl RecommendationField {
    pub const PRIORITY: [RecommendationField; 2] =
        [RecommendationField::Recommendation, RecommendationField::Answer];

    pub fn key(self) -> &'static str {
        match self {
            RecommendationField::Recommendation => "recommendation",
            RecommendationField::Answer => "answer",
        }
    }
}

/// A successful answer from a recommender
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub text: String,
    pub field: RecommendationField,
    pub elapsed: Duration,
}

/// Information about a recommender
#[derive(Debug, Clone)]
pub struct RecommenderInfo {
    pub name: String,
    pub description: String,
    pub version: String,
}

/// Coarse classification used to pick what the user is told
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never reached a server
    Connectivity,
    /// The server did not answer within the request timeout
    Timeout,
    /// The server answered with a non-success status
    Server,
    /// The server answered but gave no usable recommendation
    NoRecommendation,
    Unexpected,
}

impl ErrorKind {
    /// The fixed text rendered as the assistant's reply for this kind
    pub fn notice(self) -> &'static str {
        match self {
            ErrorKind::Connectivity => {
                "Unable to connect to the server. Please check your internet connection."
            }
            ErrorKind::Timeout => "The server took too long to respond. Please try again later.",
            ErrorKind::Server => "The server encountered an error. Please try again later.",
            ErrorKind::NoRecommendation => "No recommendation found. Try rephrasing your question.",
            ErrorKind::Unexpected => {
                "Sorry, I encountered an error while processing your request. Please try again."
            }
        }
    }
}

/// Errors that can occur while fetching a recommendation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecommendError {
    #[error("failed to reach recommendation service: {0}")]
    Connectivity(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("no recommendation found{}", .detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default())]
    NoRecommendation { detail: Option<String> },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl RecommendError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecommendError::Connectivity(_) => ErrorKind::Connectivity,
            RecommendError::Timeout(_) => ErrorKind::Timeout,
            RecommendError::Server { .. } => ErrorKind::Server,
            RecommendError::NoRecommendation { .. } => ErrorKind::NoRecommendation,
            RecommendError::InvalidResponse(_) | RecommendError::Configuration(_) => {
                ErrorKind::Unexpected
            }
        }
    }
}

/// Factory for creating the available recommenders
pub struct RecommenderFactory;

impl RecommenderFactory {
    /// Create an HTTP recommender for the configured service.
    pub fn http(config: &ClientConfig) -> Result<Arc<dyn Recommender>, RecommendError> {
        let recommender = HttpRecommender::new(config)?;
        Ok(Arc::new(recommender))
    }

    /// Create an offline recommender that answers locally
    pub fn mock() -> Arc<dyn Recommender> {
        Arc::new(MockRecommender::new())
    }
}
