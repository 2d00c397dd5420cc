use product_chat_core::SubmitState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::frame_index;
use crate::{screen, state::AppState};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Component for the submit button beside the input
pub struct SubmitComponent;

impl SubmitComponent {
    pub fn render(state: &mut AppState, f: &mut Frame, area: Rect) {
        // Remember where the button is so mouse clicks can find it
        state.submit_area = area;

        let (enabled, submit_state) = {
            let screen = screen::lock(&state.screen);
            (screen.submit_enabled, screen.submit_state)
        };

        let label = match submit_state {
            SubmitState::Idle => "Ask ➤".to_string(),
            SubmitState::Loading => {
                let spinner = SPINNER_FRAMES[frame_index(state.started.elapsed(), 80, SPINNER_FRAMES.len())];
                format!("{} ...", spinner)
            }
        };

        let style = if enabled {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        // Vertically centre the label inside the borders
        let padding = area.height.saturating_sub(3) / 2;
        let mut text = "\n".repeat(padding as usize);
        text.push_str(&label);

        let button = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, area);
    }
}
