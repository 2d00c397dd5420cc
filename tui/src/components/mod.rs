// UI components for the TUI

pub mod chat;
pub mod input;
pub mod notice;
pub mod status;
pub mod submit;

pub use chat::ChatComponent;
pub use input::InputComponent;
pub use notice::NoticeComponent;
pub use status::StatusComponent;
pub use submit::SubmitComponent;

use std::time::Duration;

/// Pick an animation frame from the time elapsed since the animation began
pub(crate) fn frame_index(elapsed: Duration, frame_ms: u128, frame_count: usize) -> usize {
    ((elapsed.as_millis() / frame_ms) % frame_count as u128) as usize
}
