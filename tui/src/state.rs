use product_chat_core::{ChatController, RecommenderInfo};
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::screen::SharedScreen;

/// Application state
pub struct AppState {
    /// What the controller renders into
    pub screen: SharedScreen,

    /// The controller; held by a submission task while a request is in flight
    pub controller: Arc<Mutex<ChatController>>,

    /// Recommender shown in the status line
    pub recommender_info: RecommenderInfo,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Chat scroll state
    pub chat_scroll: usize,

    /// Where the submit button was last drawn, for mouse clicks
    pub submit_area: Rect,

    /// Whether cursor is visible (for blinking effect)
    pub cursor_visible: bool,

    /// Last time cursor blinked
    pub last_cursor_blink: Instant,

    /// Drives the typing dots and the button spinner
    pub started: Instant,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        screen: SharedScreen,
        controller: ChatController,
        recommender_info: RecommenderInfo,
    ) -> Self {
        Self {
            screen,
            controller: Arc::new(Mutex::new(controller)),
            recommender_info,
            should_quit: false,
            chat_scroll: 0,
            submit_area: Rect::default(),
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
            started: Instant::now(),
        }
    }

    /// Update cursor blinking state
    pub fn update_cursor_blink(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_cursor_blink).as_millis() >= 500 {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_blink = now;
        }
    }
}
