//! Shared on-screen state and the element handles the controller drives.
//!
//! The draw loop reads a [`Screen`] every tick; the controller mutates it
//! through the handles from another task. The lock is only held for short
//! synchronous sections.

use product_chat_core::{
    ChatElements, InputField, Message, MessageLog, Notice, NoticeArea, SubmitControl, SubmitState,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// A notice together with the moment it appeared
#[derive(Debug, Clone)]
pub struct ActiveNotice {
    pub notice: Notice,
    pub shown_at: Instant,
}

impl ActiveNotice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.notice.ttl
    }
}

/// Everything visible in the chat window
#[derive(Debug)]
pub struct Screen {
    /// Rendered chat turns, oldest first
    pub messages: Vec<Message>,

    /// When the typing placeholder appeared, if it is visible
    pub typing_since: Option<Instant>,

    /// Whether the log should stay pinned to the newest entry
    pub follow_latest: bool,

    /// Current input text
    pub input: String,

    /// Cursor position in input text (byte index)
    pub input_cursor: usize,

    pub input_enabled: bool,
    pub input_focused: bool,
    pub submit_enabled: bool,
    pub submit_state: SubmitState,

    pub notice: Option<ActiveNotice>,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            typing_since: None,
            follow_latest: true,
            input: String::new(),
            input_cursor: 0,
            input_enabled: true,
            input_focused: true,
            submit_enabled: true,
            submit_state: SubmitState::Idle,
            notice: None,
        }
    }
}

impl Screen {
    pub fn is_typing(&self) -> bool {
        self.typing_since.is_some()
    }

    /// Drop the notice once its ttl has elapsed
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }
}

pub type SharedScreen = Arc<Mutex<Screen>>;

pub fn new_shared() -> SharedScreen {
    Arc::new(Mutex::new(Screen::default()))
}

/// Lock the screen, recovering the data if a previous holder panicked
pub fn lock(screen: &SharedScreen) -> MutexGuard<'_, Screen> {
    screen.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Build the controller's element handles over one shared screen
pub fn elements(screen: &SharedScreen) -> ChatElements {
    ChatElements::new(
        LogHandle(screen.clone()),
        InputHandle(screen.clone()),
        SubmitHandle(screen.clone()),
        NoticeHandle(screen.clone()),
    )
}

pub struct LogHandle(SharedScreen);

impl MessageLog for LogHandle {
    fn append(&self, message: &Message) {
        lock(&self.0).messages.push(message.clone());
    }

    fn show_typing(&self) {
        lock(&self.0).typing_since = Some(Instant::now());
    }

    fn hide_typing(&self) {
        lock(&self.0).typing_since = None;
    }

    fn scroll_to_latest(&self) {
        lock(&self.0).follow_latest = true;
    }
}

pub struct InputHandle(SharedScreen);

impl InputField for InputHandle {
    fn clear(&self) {
        let mut screen = lock(&self.0);
        screen.input.clear();
        screen.input_cursor = 0;
    }

    fn set_enabled(&self, enabled: bool) {
        let mut screen = lock(&self.0);
        screen.input_enabled = enabled;
        if !enabled {
            screen.input_focused = false;
        }
    }

    fn focus(&self) {
        let mut screen = lock(&self.0);
        if screen.input_enabled {
            screen.input_focused = true;
        }
    }
}

pub struct SubmitHandle(SharedScreen);

impl SubmitControl for SubmitHandle {
    fn set_enabled(&self, enabled: bool) {
        lock(&self.0).submit_enabled = enabled;
    }

    fn show_state(&self, state: SubmitState) {
        lock(&self.0).submit_state = state;
    }
}

pub struct NoticeHandle(SharedScreen);

impl NoticeArea for NoticeHandle {
    fn show(&self, notice: Notice) {
        lock(&self.0).notice = Some(ActiveNotice {
            notice,
            shown_at: Instant::now(),
        });
    }
}
