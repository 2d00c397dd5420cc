use anyhow::Result;
use crossterm::event;
use product_chat_core::{ChatController, Recommender};
use ratatui::{backend::Backend, Frame, Terminal};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use crate::{
    components::{ChatComponent, InputComponent, NoticeComponent, StatusComponent, SubmitComponent},
    handlers::InputHandler,
    screen::{self, SharedScreen},
    state::AppState,
    utils::{layout, terminal},
};

const TICK: Duration = Duration::from_millis(50);

/// Main application
pub struct App {
    state: AppState,
}

impl App {
    /// Create a new application instance
    pub fn new(recommender: Arc<dyn Recommender>, notice_duration: Duration) -> Self {
        let screen: SharedScreen = screen::new_shared();
        let info = recommender.info();
        let controller = ChatController::new(recommender, screen::elements(&screen))
            .with_notice_duration(notice_duration);
        Self {
            state: AppState::new(screen, controller, info),
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        let mut terminal = terminal::setup()?;

        info!("TUI initialized, starting main loop");

        // Main application loop
        let result = self.run_app(&mut terminal).await;

        // Restore terminal
        terminal::restore(&mut terminal)?;

        result
    }

    /// Main application loop
    async fn run_app<B: Backend + std::io::Write>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.state.update_cursor_blink();
            screen::lock(&self.state.screen).expire_notice(Instant::now());

            terminal.draw(|f| self.ui(f))?;

            // Handle terminal input, or wait a tick so the animations keep moving
            if event::poll(Duration::ZERO)? {
                let terminal_event = event::read()?;
                InputHandler::handle_event(&mut self.state, terminal_event);
            } else {
                tokio::time::sleep(TICK).await;
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the user interface
    fn ui(&mut self, f: &mut Frame) {
        let input_height = {
            let screen = screen::lock(&self.state.screen);
            layout::input_height(&screen.input, f.size().width)
        };
        let main_chunks = layout::create_main_layout(f.size(), input_height);
        let input_chunks = layout::create_input_row_layout(main_chunks[1]);

        ChatComponent::render(&mut self.state, f, main_chunks[0]);
        InputComponent::render(&self.state, f, input_chunks[0]);
        SubmitComponent::render(&mut self.state, f, input_chunks[1]);
        StatusComponent::render(&self.state, f, main_chunks[2]);

        // Notice overlay (render on top)
        NoticeComponent::render(&self.state, f);
    }
}
