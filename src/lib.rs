//! Floe - engine for the sinking-ice penguin board game

pub mod ai;
pub mod core;
pub mod engine;
pub mod utils;

// Re-export commonly used items
pub use core::game::Game;
pub use engine::Engine;
