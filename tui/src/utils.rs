/// Utility functions for the TUI application

/// Terminal management utilities
pub mod terminal {
    use anyhow::Result;
    use crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::io;

    /// Switch to raw mode on the alternate screen with mouse capture
    pub fn setup() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    }

    /// Undo everything `setup` did
    pub fn restore<B: ratatui::backend::Backend + std::io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Layout calculation utilities
pub mod layout {
    use ratatui::layout::{Constraint, Direction, Layout, Rect};

    pub const SUBMIT_WIDTH: u16 = 12;
    pub const MIN_INPUT_HEIGHT: u16 = 3;
    pub const MAX_INPUT_HEIGHT: u16 = 8;

    /// Create the main application layout
    pub fn create_main_layout(area: Rect, input_height: u16) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(1),               // Chat log
                Constraint::Length(input_height), // Input row
                Constraint::Length(1),            // Status line
            ].as_ref())
            .split(area)
            .to_vec()
    }

    /// Split the input row into the text box and the submit button
    pub fn create_input_row_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(SUBMIT_WIDTH),
            ].as_ref())
            .split(area)
            .to_vec()
    }

    /// Height of the input box for the given text, growing with its content.
    /// `total_width` is the width of the whole frame.
    pub fn input_height(input: &str, total_width: u16) -> u16 {
        // Outer margin, submit button and the input's own borders
        let text_width = total_width.saturating_sub(2 + SUBMIT_WIDTH + 2).max(1) as usize;
        let lines: usize = input
            .split('\n')
            .map(|line| line.chars().count().max(1).div_ceil(text_width))
            .sum();
        let lines = u16::try_from(lines).unwrap_or(u16::MAX);
        lines.saturating_add(2).clamp(MIN_INPUT_HEIGHT, MAX_INPUT_HEIGHT)
    }

    /// Whether a terminal cell lies inside the rectangle
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_input_height_grows_and_caps() {
            // 40 columns leaves 24 for text
            assert_eq!(input_height("", 40), MIN_INPUT_HEIGHT);
            assert_eq!(input_height("short", 40), MIN_INPUT_HEIGHT);
            assert_eq!(input_height("one\ntwo", 40), 4);
            assert_eq!(input_height(&"x".repeat(48), 40), 4);
            assert_eq!(input_height(&"line\n".repeat(20), 40), MAX_INPUT_HEIGHT);
        }

        #[test]
        fn test_contains() {
            let area = Rect::new(10, 5, 12, 3);
            assert!(contains(area, 10, 5));
            assert!(contains(area, 21, 7));
            assert!(!contains(area, 22, 7));
            assert!(!contains(area, 15, 8));
        }
    }
}
