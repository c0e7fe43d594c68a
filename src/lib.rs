//! Block Snake - the classic single-player snake game in the terminal
//!
//! This library provides:
//! - Core game logic: snake movement, food placement, collisions (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering and terminal lifetime (render module)
//! - The interactive tick loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
