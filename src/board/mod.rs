//! Board representation for 10x10 checkers

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::error::GameError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (10x10)
pub const BOARD_SIZE: usize = 10;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 100

/// Rows filled with pieces on each side at the start of a game
pub const SETUP_ROWS: usize = 4;

/// Pieces per side in the starting position
pub const PIECES_PER_SIDE: u8 = 20;

/// Piece colors
///
/// Dark starts on rows 0-3 and moves down the board, Light starts on
/// rows 6-9 and moves up. Light moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }

    /// Row step of a forward move
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::Dark => 1,
            Color::Light => -1,
        }
    }

    /// Row on which this color's men start (its back row)
    #[inline]
    pub fn home_row(self) -> u8 {
        match self {
            Color::Dark => 0,
            Color::Light => (BOARD_SIZE - 1) as u8,
        }
    }

    /// Row on which this color's men are crowned
    #[inline]
    pub fn promotion_row(self) -> u8 {
        self.opponent().home_row()
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Dark => "Dark",
            Color::Light => "Light",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Build a position from signed coordinates, rejecting cells off the grid.
    pub fn checked(row: i32, col: i32) -> Result<Self, GameError> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbor one diagonal step away, if it is on the board
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Pos> {
        let row = self.row as i32 + dr as i32;
        let col = self.col as i32 + dc as i32;
        if Self::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Pieces only ever stand on the dark squares of the checkerboard
    #[inline]
    pub fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A piece as seen on a given square.
///
/// Pieces carry no identity beyond where they stand; the same piece becomes
/// a king in place when it is crowned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
    pub pos: Pos,
}
