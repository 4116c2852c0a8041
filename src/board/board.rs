//! Board structure with piece and king counters

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Color, Piece, Pos, BOARD_SIZE, PIECES_PER_SIDE, SETUP_ROWS};
use crate::error::BoardParseError;

/// Game board.
///
/// A small value type: search branches copy it freely and never share
/// mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Dark pieces bitboard
    dark: Bitboard,
    /// Light pieces bitboard
    light: Bitboard,
    /// Kings of either color
    kings: Bitboard,
    /// Pieces remaining per color
    dark_left: u8,
    light_left: u8,
    /// Kings currently on the board per color
    dark_kings: u8,
    light_kings: u8,
}

impl Board {
    /// Standard starting position: 20 men per side on the playable
    /// squares of rows 0-3 (Dark) and 6-9 (Light).
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE as u8 {
            let color = if (row as usize) < SETUP_ROWS {
                Color::Dark
            } else if (row as usize) >= BOARD_SIZE - SETUP_ROWS {
                Color::Light
            } else {
                continue;
            };
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                if pos.is_playable() {
                    board.place_piece(pos, color, false);
                }
            }
        }
        debug_assert_eq!(board.dark_left, PIECES_PER_SIDE);
        debug_assert_eq!(board.light_left, PIECES_PER_SIDE);
        board
    }

    /// Board with no pieces, for building positions by hand
    pub const fn empty() -> Self {
        Self {
            dark: Bitboard::new(),
            light: Bitboard::new(),
            kings: Bitboard::new(),
            dark_left: 0,
            light_left: 0,
            dark_kings: 0,
            light_kings: 0,
        }
    }

    /// Get the piece standing at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.color_at(pos).map(|color| Piece {
            color,
            king: self.kings.get(pos),
            pos,
        })
    }

    /// Color of the piece at position
    #[inline]
    pub fn color_at(&self, pos: Pos) -> Option<Color> {
        if self.dark.get(pos) {
            Some(Color::Dark)
        } else if self.light.get(pos) {
            Some(Color::Light)
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.dark.get(pos) && !self.light.get(pos)
    }

    /// Put a piece on an empty playable square (position setup only).
    /// Occupied or non-playable squares are left untouched.
    pub fn place_piece(&mut self, pos: Pos, color: Color, king: bool) {
        if !pos.is_playable() || !self.is_empty(pos) {
            return;
        }
        self.occupancy_mut(color).set(pos);
        *self.left_mut(color) += 1;
        if king {
            self.kings.set(pos);
            *self.kings_mut(color) += 1;
        }
    }

    /// Relocate the piece on `from` to `to`, crowning it if `to` is its
    /// promotion row.
    ///
    /// Legality is not checked here; callers pass destinations produced by
    /// the move generator. Returns true if the piece was crowned by this
    /// move. A piece that is already a king is never counted twice.
    pub fn move_piece(&mut self, from: Pos, to: Pos) -> bool {
        let Some(piece) = self.get(from) else {
            return false;
        };

        let occupancy = self.occupancy_mut(piece.color);
        occupancy.clear(from);
        occupancy.set(to);

        if piece.king {
            self.kings.clear(from);
            self.kings.set(to);
            return false;
        }

        if to.row == piece.color.promotion_row() {
            self.kings.set(to);
            *self.kings_mut(piece.color) += 1;
            return true;
        }
        false
    }

    /// Remove captured pieces. Empty squares are ignored.
    pub fn remove_pieces(&mut self, captured: &[Pos]) {
        for &pos in captured {
            let Some(piece) = self.get(pos) else {
                continue;
            };
            self.occupancy_mut(piece.color).clear(pos);
            let left = self.left_mut(piece.color);
            *left = left.saturating_sub(1);
            if piece.king {
                self.kings.clear(pos);
                let kings = self.kings_mut(piece.color);
                *kings = kings.saturating_sub(1);
            }
        }
    }

    /// All pieces of a color, row-major order
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.occupancy(color).iter_ones().map(move |pos| Piece {
            color,
            king: self.kings.get(pos),
            pos,
        })
    }

    /// Occupancy bitboard for a color
    #[inline]
    pub fn occupancy(&self, color: Color) -> &Bitboard {
        match color {
            Color::Dark => &self.dark,
            Color::Light => &self.light,
        }
    }

    #[inline]
    fn occupancy_mut(&mut self, color: Color) -> &mut Bitboard {
        match color {
            Color::Dark => &mut self.dark,
            Color::Light => &mut self.light,
        }
    }

    /// Pieces remaining for a color
    #[inline]
    pub fn pieces_left(&self, color: Color) -> u8 {
        match color {
            Color::Dark => self.dark_left,
            Color::Light => self.light_left,
        }
    }

    #[inline]
    fn left_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::Dark => &mut self.dark_left,
            Color::Light => &mut self.light_left,
        }
    }

    /// Kings on the board for a color
    #[inline]
    pub fn kings(&self, color: Color) -> u8 {
        match color {
            Color::Dark => self.dark_kings,
            Color::Light => self.light_kings,
        }
    }

    #[inline]
    fn kings_mut(&mut self, color: Color) -> &mut u8 {
        match color {
            Color::Dark => &mut self.dark_kings,
            Color::Light => &mut self.light_kings,
        }
    }

    /// Total pieces on board
    #[inline]
    pub fn total_pieces(&self) -> u32 {
        self.dark_left as u32 + self.light_left as u32
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn piece_symbol(piece: Option<Piece>) -> char {
    match piece {
        None => '.',
        Some(Piece { color: Color::Dark, king: false, .. }) => 'd',
        Some(Piece { color: Color::Dark, king: true, .. }) => 'D',
        Some(Piece { color: Color::Light, king: false, .. }) => 'l',
        Some(Piece { color: Color::Light, king: true, .. }) => 'L',
    }
}

impl fmt::Display for Board {
    /// One line per row, row 0 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                write!(f, "{}", piece_symbol(self.get(Pos::new(row, col))))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse the diagram written by `Display`. Blank lines and surrounding
    /// whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE {
                return Err(BoardParseError::RowLength { row, found: len });
            }
            for (col, symbol) in line.chars().enumerate() {
                let (color, king) = match symbol {
                    '.' => continue,
                    'd' => (Color::Dark, false),
                    'D' => (Color::Dark, true),
                    'l' => (Color::Light, false),
                    'L' => (Color::Light, true),
                    _ => return Err(BoardParseError::UnknownSymbol { row, col, symbol }),
                };
                let pos = Pos::new(row as u8, col as u8);
                if !pos.is_playable() {
                    return Err(BoardParseError::UnplayableSquare { row, col });
                }
                board.place_piece(pos, color, king);
            }
        }
        Ok(board)
    }
}
