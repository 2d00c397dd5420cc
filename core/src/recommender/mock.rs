use super::{Recommendation, RecommendationField, RecommendError, Recommender, RecommenderInfo};
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Offline recommender that answers locally after a simulated delay.
///
/// A few trigger phrases produce each failure kind so the UI can be exercised
/// without a server: `error`, `network error`, `timeout` and `nothing`.
pub struct MockRecommender {
    info: RecommenderInfo,
    delay: Duration,
}

impl MockRecommender {
    pub fn new() -> Self {
        Self {
            info: RecommenderInfo {
                name: "Mock Recommender".to_string(),
                description: "Offline recommender for trying out the UI".to_string(),
                version: "0.1.0".to_string(),
            },
            delay: Duration::from_millis(800), // Simulate network latency
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockRecommender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Recommender for MockRecommender {
    async fn recommend(&self, text: &str) -> Result<Recommendation, RecommendError> {
        let start = Instant::now();
        tokio::time::sleep(self.delay).await;

        // Simulate failures for testing
        match text.trim().to_lowercase().as_str() {
            "error" => {
                return Err(RecommendError::Server {
                    status: 500,
                    message: "Simulated server error".to_string(),
                })
            }
            "network error" => {
                return Err(RecommendError::Connectivity(
                    "Simulated network failure".to_string(),
                ))
            }
            "timeout" => return Err(RecommendError::Timeout(self.delay)),
            "nothing" => return Err(RecommendError::NoRecommendation { detail: None }),
            _ => {}
        }

        Ok(Recommendation {
            text: format!(
                "Here is what I would look at for \"{}\": compare the top-rated options in your budget and check recent reviews.",
                text.trim()
            ),
            field: RecommendationField::Recommendation,
            elapsed: start.elapsed(),
        })
    }

    fn info(&self) -> RecommenderInfo {
        self.info.clone()
    }
}
