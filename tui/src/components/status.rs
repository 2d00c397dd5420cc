use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use crate::{screen, state::AppState};

/// Component for rendering the status line
pub struct StatusComponent;

impl StatusComponent {
    /// Render the status line
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        let (busy, follow_latest) = {
            let screen = screen::lock(&state.screen);
            (screen.is_typing() || !screen.input_enabled, screen.follow_latest)
        };

        let scroll_hint = if follow_latest { "" } else { " | End to jump to latest" };
        let status_text = if busy {
            format!("● Waiting for a recommendation...{}", scroll_hint)
        } else {
            format!(
                "Ready - {} | Enter to send, Shift+Enter for newline, Ctrl+C to quit{}",
                state.recommender_info.name, scroll_hint
            )
        };

        let status = Paragraph::new(status_text)
            .style(if busy {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Green)
            });

        f.render_widget(status, area);
    }
}
