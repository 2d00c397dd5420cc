// Terminal event handlers

pub mod input;

pub use input::InputHandler;
