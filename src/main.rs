//! Checkers GUI
//!
//! Play 10x10 checkers against the computer or another player.
//!
//! ## Usage
//!
//! - `checkers` - Play Light against the computer
//! - `checkers --human dark` - Let the computer open
//! - `checkers --pvp` - Two players on one screen
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use checkers::ui::{CheckersApp, GameMode, SessionConfig};
use checkers::Color;

/// Checkers with an alpha-beta computer player
#[derive(Parser)]
#[command(name = "checkers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Side played by the human against the computer
    #[arg(long, value_enum, default_value_t = Side::Light)]
    human: Side,

    /// Two human players, no computer
    #[arg(long)]
    pvp: bool,

    /// Depth the computer always searches in full
    #[arg(long, default_value_t = 3)]
    min_depth: u8,

    /// Budget for searching past the minimum depth, in milliseconds
    #[arg(long, default_value_t = 2000)]
    time_limit_ms: u64,

    /// Pause after each computer move, in milliseconds
    #[arg(long, default_value_t = 500)]
    move_delay_ms: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    Light,
    Dark,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Light => Color::Light,
            Side::Dark => Color::Dark,
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mode = if cli.pvp {
        GameMode::PvP
    } else {
        GameMode::PvE {
            human_color: cli.human.into(),
        }
    };
    let config = SessionConfig {
        min_depth: cli.min_depth,
        time_limit_ms: cli.time_limit_ms,
        move_delay_ms: cli.move_delay_ms,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Checkers"),
        ..Default::default()
    };

    eframe::run_native(
        "Checkers",
        options,
        Box::new(move |cc| Ok(Box::new(CheckersApp::new(cc, mode, config)))),
    )
}
