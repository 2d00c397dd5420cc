use product_chat_core::{Author, Message};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use std::time::Duration;

use super::frame_index;
use crate::{screen, state::AppState};

const TYPING_FRAMES: [&str; 4] = ["○ ○ ○", "● ○ ○", "○ ● ○", "○ ○ ●"];

/// Component for rendering the chat log
pub struct ChatComponent;

impl ChatComponent {
    /// Render the chat messages
    pub fn render(state: &mut AppState, f: &mut Frame, area: Rect) {
        let available_width = area.width.saturating_sub(4) as usize; // Borders and bubble indent

        let (chat_lines, follow_latest) = {
            let screen = screen::lock(&state.screen);
            let mut chat_lines = Vec::new();
            for msg in &screen.messages {
                Self::render_message(&mut chat_lines, msg, available_width);
                chat_lines.push(Line::from(""));
            }
            if let Some(since) = screen.typing_since {
                Self::render_typing(&mut chat_lines, since.elapsed());
            }
            if screen.messages.is_empty() && !screen.is_typing() {
                Self::render_welcome(&mut chat_lines);
            }
            (chat_lines, screen.follow_latest)
        };

        // Calculate scroll limits
        let content_height = chat_lines.len();
        let visible_height = area.height.saturating_sub(2) as usize; // Account for borders
        let max_scroll = content_height.saturating_sub(visible_height);

        let scroll_pos = if follow_latest {
            max_scroll
        } else {
            state.chat_scroll.min(max_scroll)
        };
        state.chat_scroll = scroll_pos;

        let visible_lines: Vec<Line> = chat_lines
            .into_iter()
            .skip(scroll_pos)
            .take(visible_height)
            .collect();

        let chat = Paragraph::new(Text::from(visible_lines))
            .block(Block::default().borders(Borders::ALL).title(" Product Assistant "));
        f.render_widget(chat, area);

        if content_height > visible_height {
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));
            let mut scrollbar_state = ScrollbarState::new(max_scroll.max(1)).position(scroll_pos);
            f.render_stateful_widget(
                scrollbar,
                area.inner(&ratatui::layout::Margin { vertical: 1, horizontal: 0 }),
                &mut scrollbar_state,
            );
        }
    }

    fn author_style(author: Author) -> Style {
        match author {
            Author::User => Style::default().fg(Color::Cyan),
            Author::Assistant => Style::default().fg(Color::Green),
        }
    }

    fn render_header(chat_lines: &mut Vec<Line<'static>>, author: Author) {
        chat_lines.push(Line::from(Span::styled(
            format!("{} {}", author.avatar(), author.label()),
            Self::author_style(author).add_modifier(Modifier::BOLD),
        )));
    }

    fn render_message(chat_lines: &mut Vec<Line<'static>>, msg: &Message, available_width: usize) {
        Self::render_header(chat_lines, msg.author);
        let style = Self::author_style(msg.author);
        for line in wrap_text(&msg.text, available_width) {
            chat_lines.push(Line::from(Span::styled(format!("  {}", line), style)));
        }
    }

    fn render_typing(chat_lines: &mut Vec<Line<'static>>, elapsed: Duration) {
        Self::render_header(chat_lines, Author::Assistant);
        let dots = TYPING_FRAMES[frame_index(elapsed, 250, TYPING_FRAMES.len())];
        chat_lines.push(Line::from(Span::styled(
            format!("  {}", dots),
            Style::default().fg(Color::DarkGray),
        )));
    }

    fn render_welcome(chat_lines: &mut Vec<Line<'static>>) {
        chat_lines.push(Line::from(Span::styled(
            "Ask about any product and I'll suggest something that fits.",
            Style::default().fg(Color::Yellow),
        )));
    }
}

/// Word-wrap text to the given width, keeping explicit line breaks.
/// Words longer than the width are split.
pub fn wrap_text(content: &str, width: usize) -> Vec<String> {
    // Too narrow to wrap sensibly
    if width < 10 {
        return content.lines().map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for paragraph in content.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: String = word.to_string();
            let mut word_len = word.chars().count();
            while word_len > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let head: String = word.chars().take(width).collect();
                word = word.chars().skip(width).collect();
                word_len -= width;
                lines.push(head);
            }
            if current.is_empty() {
                current = word;
                current_len = word_len;
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(&word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::replace(&mut current, word));
                current_len = word_len;
            }
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("Consider the Lenovo ThinkPad X1 Carbon for travel", 20);
        assert_eq!(
            lines,
            vec!["Consider the Lenovo", "ThinkPad X1 Carbon", "for travel"]
        );
    }

    #[test]
    fn test_wrap_text_keeps_line_breaks_and_splits_long_words() {
        let lines = wrap_text("1. Kindle\n2. Kobo-Libra-Colour-Edition", 10);
        assert_eq!(
            lines,
            vec!["1. Kindle", "2.", "Kobo-Libra", "-Colour-Ed", "ition"]
        );
    }

    #[test]
    fn test_typing_frames_cycle() {
        assert_eq!(frame_index(Duration::from_millis(0), 250, 4), 0);
        assert_eq!(frame_index(Duration::from_millis(260), 250, 4), 1);
        assert_eq!(frame_index(Duration::from_millis(1010), 250, 4), 0);
    }
}
