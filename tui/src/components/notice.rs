use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use crate::{screen, state::AppState};

const MAX_NOTICE_WIDTH: u16 = 48;

/// Component for the transient notice in the top-right corner
pub struct NoticeComponent;

impl NoticeComponent {
    pub fn render(state: &AppState, f: &mut Frame) {
        let Some(text) = screen::lock(&state.screen)
            .notice
            .as_ref()
            .map(|active| active.notice.text.clone())
        else {
            return;
        };

        let area = Self::notice_area(f.size(), &text);
        let notice = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White).bg(Color::Red)),
            );

        f.render_widget(Clear, area);
        f.render_widget(notice, area);
    }

    fn notice_area(frame: Rect, text: &str) -> Rect {
        let text_width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let width = text_width
            .saturating_add(4)
            .min(MAX_NOTICE_WIDTH)
            .min(frame.width.saturating_sub(2));
        let inner_width = width.saturating_sub(2).max(1);
        let height = text_width.div_ceil(inner_width).saturating_add(2).min(frame.height);
        Rect::new(
            frame.x + frame.width.saturating_sub(width + 1),
            frame.y + 1,
            width,
            height,
        )
    }
}
