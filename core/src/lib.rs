pub mod config;
pub mod controller;
pub mod message;
pub mod recommender;
pub mod view;

// Re-export main types for convenience
pub use config::{ClientConfig, ConfigError};
pub use controller::{ChatController, SubmitOutcome};
pub use message::{Author, Message};
pub use recommender::{
    ErrorKind, Recommendation, RecommendationField, RecommendError, Recommender,
    RecommenderFactory, RecommenderInfo,
};
pub use view::{ChatElements, InputField, MessageLog, Notice, NoticeArea, SubmitControl, SubmitState};
