//! Theme constants for the checkers GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(139, 90, 43); // Saddle brown frame
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(240, 217, 181);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(120, 78, 48);
pub const COORD_LABEL: Color32 = Color32::from_rgb(250, 235, 210);

// Piece colors with better contrast
pub const DARK_PIECE: Color32 = Color32::from_rgb(35, 30, 30);
pub const DARK_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(85, 75, 75);
pub const LIGHT_PIECE: Color32 = Color32::from_rgb(235, 60, 50);
pub const LIGHT_PIECE_SHADOW: Color32 = Color32::from_rgb(170, 35, 30);
pub const CROWN: Color32 = Color32::from_rgb(255, 200, 40);

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(80, 200, 255);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn last_move_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 230, 120, 70)
}

pub fn destination_dot() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 200, 255, 170)
}

pub fn capture_dot() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 120, 60, 200)
}

pub fn hover_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const DESTINATION_RADIUS_RATIO: f32 = 0.14;
pub const CROWN_RADIUS_RATIO: f32 = 0.18;
pub const SELECTED_RING_WIDTH: f32 = 3.0;
