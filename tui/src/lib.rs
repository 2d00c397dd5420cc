//! Terminal front end for the product chat, rendering the controller's chat
//! turns with ratatui.

pub mod app;
pub mod components;
pub mod handlers;
pub mod screen;
pub mod state;
pub mod utils;

// Re-export main types for convenience
pub use app::App;
