//! Handles through which the chat controller drives its UI elements.
//!
//! A front end hands the controller one handle per element. Handles take
//! `&self` so a front end can back several of them with the same shared state.

use crate::message::Message;
use std::time::Duration;

/// The scrollable list of chat bubbles
pub trait MessageLog: Send + Sync {
    /// Append a bubble for the message
    fn append(&self, message: &Message);

    /// Show the typing placeholder bubble
    fn show_typing(&self);

    /// Remove the typing placeholder if it is visible
    fn hide_typing(&self);

    /// Bring the newest entry into view
    fn scroll_to_latest(&self);
}

/// The text box the user types questions into
pub trait InputField: Send + Sync {
    /// Clear the text and shrink the field back to its resting height
    fn clear(&self);

    fn set_enabled(&self, enabled: bool);

    fn focus(&self);
}

/// Visual sub-state of the submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// Shows the button label
    Idle,
    /// Shows the loading indicator
    Loading,
}

/// The button that sends the question
pub trait SubmitControl: Send + Sync {
    fn set_enabled(&self, enabled: bool);

    fn show_state(&self, state: SubmitState);
}

/// A transient message that disappears on its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub ttl: Duration,
}

impl Notice {
    pub fn new(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            ttl,
        }
    }
}

/// Where transient notices are displayed. Implementations are responsible
/// for dismissing a notice once its ttl has elapsed.
pub trait NoticeArea: Send + Sync {
    fn show(&self, notice: Notice);
}

/// The element handles a [`crate::ChatController`] is built with
pub struct ChatElements {
    pub log: Box<dyn MessageLog>,
    pub input: Box<dyn InputField>,
    pub submit: Box<dyn SubmitControl>,
    pub notices: Box<dyn NoticeArea>,
}

impl ChatElements {
    pub fn new(
        log: impl MessageLog + 'static,
        input: impl InputField + 'static,
        submit: impl SubmitControl + 'static,
        notices: impl NoticeArea + 'static,
    ) -> Self {
        Self {
            log: Box::new(log),
            input: Box::new(input),
            submit: Box::new(submit),
            notices: Box::new(notices),
        }
    }
}
