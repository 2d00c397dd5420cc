use crate::config::DEFAULT_NOTICE_SECS;
use crate::message::Message;
use crate::recommender::{ErrorKind, Recommendation, RecommendError, Recommender};
use crate::view::{ChatElements, Notice, SubmitState};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Notice shown when the user submits blank input
pub const EMPTY_INPUT_NOTICE: &str = "Please enter a question first!";

/// Result of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was sent
    Rejected,
    Answered { text: String },
    Failed { kind: ErrorKind },
}

/// Mediates between user input and a recommender, rendering every chat turn
/// through the injected element handles.
pub struct ChatController {
    recommender: Arc<dyn Recommender>,
    elements: ChatElements,
    awaiting_response: bool,
    notice_duration: Duration,
}

impl ChatController {
    pub fn new(recommender: Arc<dyn Recommender>, elements: ChatElements) -> Self {
        Self {
            recommender,
            elements,
            awaiting_response: false,
            notice_duration: Duration::from_secs(DEFAULT_NOTICE_SECS),
        }
    }

    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    /// Run one submission: validate, render the user turn, call the
    /// recommender and render its answer or a notice for the failure.
    pub async fn submit(&mut self, raw_input: &str) -> SubmitOutcome {
        let question = raw_input.trim();
        if question.is_empty() {
            self.elements
                .notices
                .show(Notice::new(EMPTY_INPUT_NOTICE, self.notice_duration));
            return SubmitOutcome::Rejected;
        }

        self.render(&Message::user(question));
        self.elements.input.clear();
        self.set_awaiting_response(true);

        self.elements.log.show_typing();
        self.elements.log.scroll_to_latest();

        let result = self.call_remote(question).await;

        self.elements.log.hide_typing();
        let outcome = match result {
            Ok(recommendation) => {
                self.render(&Message::assistant(recommendation.text.clone()));
                SubmitOutcome::Answered {
                    text: recommendation.text,
                }
            }
            Err(error) => {
                let kind = error.kind();
                warn!(?kind, %error, "recommendation request failed");
                self.render(&Message::assistant(kind.notice()));
                SubmitOutcome::Failed { kind }
            }
        };

        self.set_awaiting_response(false);
        outcome
    }

    /// Ask the recommender for an answer to the question
    pub async fn call_remote(&self, text: &str) -> Result<Recommendation, RecommendError> {
        debug!(recommender = %self.recommender.info().name, "calling recommender");
        self.recommender.recommend(text).await
    }

    /// Append a bubble for the message and scroll it into view
    pub fn render(&self, message: &Message) {
        self.elements.log.append(message);
        self.elements.log.scroll_to_latest();
    }

    fn set_awaiting_response(&mut self, awaiting: bool) {
        self.awaiting_response = awaiting;
        self.elements.input.set_enabled(!awaiting);
        self.elements.submit.set_enabled(!awaiting);
        if awaiting {
            self.elements.submit.show_state(SubmitState::Loading);
        } else {
            self.elements.submit.show_state(SubmitState::Idle);
            self.elements.input.focus();
        }
    }
}
