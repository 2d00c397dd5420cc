use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use crate::screen::{self, Screen};
use crate::state::AppState;
use crate::utils::layout;

const SCROLL_STEP: usize = 3;
const PAGE_STEP: usize = 10;

/// Handles input events for the application
pub struct InputHandler;

impl InputHandler {
    /// Handle input events (keyboard and mouse)
    pub fn handle_event(state: &mut AppState, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::handle_key_event(state, key.code, key.modifiers);
            }
            Event::Mouse(mouse_event) => {
                Self::handle_mouse_event(state, mouse_event);
            }
            _ => {}
        }
    }

    fn handle_key_event(state: &mut AppState, key_code: KeyCode, modifiers: KeyModifiers) {
        match key_code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                state.should_quit = true;
            }
            KeyCode::Enter
                if modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
            {
                Self::edit(state, |screen| insert_char(screen, '\n'));
            }
            KeyCode::Enter => {
                Self::submit_input(state);
            }
            KeyCode::Up => Self::scroll_up(state, 1),
            KeyCode::Down => Self::scroll_down(state, 1),
            KeyCode::PageUp => Self::scroll_up(state, PAGE_STEP),
            KeyCode::PageDown => Self::scroll_down(state, PAGE_STEP),
            KeyCode::End => {
                let mut screen = screen::lock(&state.screen);
                if screen.input.is_empty() {
                    // Jump back to the newest message
                    screen.follow_latest = true;
                } else {
                    screen.input_cursor = screen.input.len();
                }
            }
            KeyCode::Home => Self::edit(state, |screen| screen.input_cursor = 0),
            KeyCode::Left => Self::edit(state, move_cursor_left),
            KeyCode::Right => Self::edit(state, move_cursor_right),
            KeyCode::Backspace => Self::edit(state, delete_char_before),
            KeyCode::Delete => Self::edit(state, delete_char_after),
            KeyCode::Esc => Self::edit(state, |screen| {
                screen.input.clear();
                screen.input_cursor = 0;
            }),
            KeyCode::Char(c) => Self::edit(state, |screen| insert_char(screen, c)),
            _ => {}
        }
    }

    fn handle_mouse_event(state: &mut AppState, mouse_event: MouseEvent) {
        match mouse_event.kind {
            MouseEventKind::ScrollUp => Self::scroll_up(state, SCROLL_STEP),
            MouseEventKind::ScrollDown => Self::scroll_down(state, SCROLL_STEP),
            MouseEventKind::Down(MouseButton::Left)
                if layout::contains(state.submit_area, mouse_event.column, mouse_event.row) =>
            {
                Self::submit_input(state);
            }
            _ => {}
        }
    }

    /// Apply an edit to the input, ignoring it while the input is disabled
    fn edit(state: &mut AppState, apply: impl FnOnce(&mut Screen)) {
        let mut screen = screen::lock(&state.screen);
        if !screen.input_enabled {
            return;
        }
        screen.input_focused = true;
        apply(&mut *screen);
    }

    fn scroll_up(state: &mut AppState, lines: usize) {
        screen::lock(&state.screen).follow_latest = false;
        state.chat_scroll = state.chat_scroll.saturating_sub(lines);
    }

    fn scroll_down(state: &mut AppState, lines: usize) {
        screen::lock(&state.screen).follow_latest = false;
        state.chat_scroll = state.chat_scroll.saturating_add(lines);
    }

    /// Hand the current input to the controller on a background task.
    /// Dropped if a submission is already in flight.
    fn submit_input(state: &mut AppState) {
        let raw_input = {
            let screen = screen::lock(&state.screen);
            if !screen.input_enabled || !screen.submit_enabled {
                return;
            }
            screen.input.clone()
        };

        let Ok(mut controller) = state.controller.clone().try_lock_owned() else {
            debug!("submission already in flight, ignoring");
            return;
        };

        tokio::spawn(async move {
            let outcome = controller.submit(&raw_input).await;
            debug!(?outcome, "submission settled");
        });
    }
}

/// Insert a character at the cursor position
fn insert_char(screen: &mut Screen, ch: char) {
    let cursor = screen.input_cursor.min(screen.input.len());
    screen.input.insert(cursor, ch);
    screen.input_cursor = cursor + ch.len_utf8();
}

/// Delete the character before the cursor
fn delete_char_before(screen: &mut Screen) {
    if let Some((idx, _)) = screen.input[..screen.input_cursor].char_indices().next_back() {
        screen.input.remove(idx);
        screen.input_cursor = idx;
    }
}

/// Delete the character under the cursor
fn delete_char_after(screen: &mut Screen) {
    if screen.input_cursor < screen.input.len() {
        screen.input.remove(screen.input_cursor);
    }
}

fn move_cursor_left(screen: &mut Screen) {
    if let Some((idx, _)) = screen.input[..screen.input_cursor].char_indices().next_back() {
        screen.input_cursor = idx;
    }
}

fn move_cursor_right(screen: &mut Screen) {
    if let Some(ch) = screen.input[screen.input_cursor..].chars().next() {
        screen.input_cursor += ch.len_utf8();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use product_chat_core::recommender::MockRecommender;
    use product_chat_core::{Author, ChatController, Recommender};
    use std::sync::Arc;
    use std::time::Duration;

    fn test_state(delay: Duration) -> AppState {
        let screen = screen::new_shared();
        let recommender: Arc<dyn Recommender> = Arc::new(MockRecommender::new().with_delay(delay));
        let info = recommender.info();
        let controller = ChatController::new(recommender, screen::elements(&screen));
        AppState::new(screen, controller, info)
    }

    fn key(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) {
        InputHandler::handle_event(state, Event::Key(KeyEvent::new(code, modifiers)));
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            key(state, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    /// Wait until the log holds `count` messages and the controls are back
    async fn wait_for_messages(state: &AppState, count: usize) {
        for _ in 0..200 {
            {
                let screen = screen::lock(&state.screen);
                if screen.messages.len() >= count && screen.input_enabled {
                    return;
                }
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("timed out waiting for {count} messages");
    }

    #[test]
    fn test_editing_keys() {
        let mut state = test_state(Duration::ZERO);
        type_text(&mut state, "héllo");
        key(&mut state, KeyCode::Left, KeyModifiers::NONE);
        key(&mut state, KeyCode::Left, KeyModifiers::NONE);
        key(&mut state, KeyCode::Backspace, KeyModifiers::NONE);
        key(&mut state, KeyCode::Enter, KeyModifiers::ALT);

        let screen = screen::lock(&state.screen);
        assert_eq!(screen.input, "hé\nlo");
        assert_eq!(screen.input_cursor, "hé\n".len());
    }

    #[test]
    fn test_edits_ignored_while_disabled() {
        let mut state = test_state(Duration::ZERO);
        screen::lock(&state.screen).input_enabled = false;

        type_text(&mut state, "abc");

        assert!(screen::lock(&state.screen).input.is_empty());
    }

    #[test]
    fn test_manual_scroll_stops_following() {
        let mut state = test_state(Duration::ZERO);
        key(&mut state, KeyCode::PageUp, KeyModifiers::NONE);
        assert!(!screen::lock(&state.screen).follow_latest);

        key(&mut state, KeyCode::End, KeyModifiers::NONE);
        assert!(screen::lock(&state.screen).follow_latest);
    }

    #[tokio::test]
    async fn test_enter_submits_through_controller() {
        let mut state = test_state(Duration::from_millis(10));
        type_text(&mut state, "wireless earbuds");

        key(&mut state, KeyCode::Enter, KeyModifiers::NONE);
        wait_for_messages(&state, 2).await;

        let screen = screen::lock(&state.screen);
        let authors: Vec<Author> = screen.messages.iter().map(|m| m.author).collect();
        assert_eq!(authors, vec![Author::User, Author::Assistant]);
        assert_eq!(screen.messages[0].text, "wireless earbuds");
        assert!(screen.input.is_empty());
        assert!(!screen.is_typing());
        assert!(screen.input_focused);
    }

    #[tokio::test]
    async fn test_second_enter_while_in_flight_is_dropped() {
        let mut state = test_state(Duration::from_millis(50));
        type_text(&mut state, "smart watch");

        key(&mut state, KeyCode::Enter, KeyModifiers::NONE);
        // The spawned submission has not run yet, so the input still holds the text
        key(&mut state, KeyCode::Enter, KeyModifiers::NONE);
        wait_for_messages(&state, 2).await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(screen::lock(&state.screen).messages.len(), 2);
    }

    #[tokio::test]
    async fn test_blank_enter_shows_notice() {
        let mut state = test_state(Duration::ZERO);
        type_text(&mut state, "   ");

        key(&mut state, KeyCode::Enter, KeyModifiers::NONE);
        for _ in 0..100 {
            if screen::lock(&state.screen).notice.is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let screen = screen::lock(&state.screen);
        assert!(screen.messages.is_empty());
        assert_eq!(
            screen.notice.as_ref().map(|n| n.notice.text.as_str()),
            Some("Please enter a question first!")
        );
    }
}
