//! GUI module for the checkers game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::CheckersApp;
pub use session::{GameMode, Session, SessionConfig};
