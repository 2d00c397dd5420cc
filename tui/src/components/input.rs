use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::{screen, state::AppState};

/// Component for rendering the question input
pub struct InputComponent;

impl InputComponent {
    /// Render the input area
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        let screen = screen::lock(&state.screen);

        if !screen.input_enabled {
            let input = Paragraph::new("Waiting for a recommendation...")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title(" Question "));
            f.render_widget(input, area);
            return;
        }

        let text_width = area.width.saturating_sub(2).max(1) as usize;
        let text_height = area.height.saturating_sub(2) as usize;

        let (lines, cursor_line, cursor_col) =
            layout_input(&screen.input, screen.input_cursor, text_width);

        // Keep the cursor line visible
        let scroll_pos = cursor_line.saturating_sub(text_height.saturating_sub(1));
        let display_text = lines
            .into_iter()
            .skip(scroll_pos)
            .take(text_height)
            .collect::<Vec<_>>()
            .join("\n");

        let (border_style, placeholder) = if screen.input_focused {
            (Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD), false)
        } else {
            (Style::default(), screen.input.is_empty())
        };

        let paragraph = if placeholder {
            Paragraph::new("Ask about a product...").style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(display_text)
        };
        let input_widget = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Question "),
        );
        f.render_widget(input_widget, area);

        if screen.input_focused && state.cursor_visible {
            let cursor_x = area.x + 1 + cursor_col as u16;
            let cursor_y = area.y + 1 + (cursor_line - scroll_pos) as u16;
            let right = (area.x + area.width).saturating_sub(1);
            let bottom = (area.y + area.height).saturating_sub(1);
            if cursor_x < right && cursor_y < bottom {
                f.set_cursor(cursor_x, cursor_y);
            }
        }
    }
}

/// Break input into display lines of at most `width` characters and locate
/// the cursor (a byte index into `input`) as a (line, column) pair.
pub fn layout_input(input: &str, cursor: usize, width: usize) -> (Vec<String>, usize, usize) {
    let mut lines = vec![String::new()];
    let mut cursor_pos = (0, 0);
    let mut col = 0;

    for (i, ch) in input.char_indices() {
        if i == cursor {
            cursor_pos = (lines.len() - 1, col);
        }
        if ch == '\n' {
            lines.push(String::new());
            col = 0;
            continue;
        }
        if col == width {
            lines.push(String::new());
            col = 0;
            if i == cursor {
                cursor_pos = (lines.len() - 1, 0);
            }
        }
        if let Some(line) = lines.last_mut() {
            line.push(ch);
        }
        col += 1;
    }

    if cursor >= input.len() {
        cursor_pos = (lines.len() - 1, col.min(width.saturating_sub(1)));
    }

    (lines, cursor_pos.0, cursor_pos.1)
}
