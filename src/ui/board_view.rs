//! Board rendering for the checkers GUI

use crate::board::{Board, Color, Piece, Pos, BOARD_SIZE};
use crate::rules::MoveMap;
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view needs to know beyond the pieces
pub struct BoardOverlay<'a> {
    pub selected: Option<Pos>,
    pub destinations: Option<&'a MoveMap>,
    pub last_move: Option<(Pos, Pos)>,
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: BoardOverlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_squares(&painter);
        self.draw_coordinates(&painter);

        if let Some((from, to)) = overlay.last_move {
            painter.rect_filled(self.cell_rect(from), CornerRadius::same(0), last_move_fill());
            painter.rect_filled(self.cell_rect(to), CornerRadius::same(0), last_move_fill());
        }

        self.draw_pieces(&painter, board);

        if let Some(pos) = overlay.selected {
            let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(
                self.board_to_screen(pos),
                radius,
                Stroke::new(SELECTED_RING_WIDTH, SELECTED_RING),
            );
        }

        if let Some(moves) = overlay.destinations {
            self.draw_destinations(&painter, moves);
        }

        let mut clicked_pos = None;

        if overlay.interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if board_pos.is_playable() {
                        painter.rect_filled(self.cell_rect(board_pos), CornerRadius::same(0), hover_fill());
                    }
                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 10x10 checkerboard
    fn draw_squares(&self, painter: &Painter) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let fill = if pos.is_playable() { DARK_SQUARE } else { LIGHT_SQUARE };
                painter.rect_filled(self.cell_rect(pos), CornerRadius::same(0), fill);
            }
        }
    }

    /// Draw coordinate labels (columns 0-9 across, rows 0-9 down)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let half = self.cell_size * 0.5;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size + half;

            let pos = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_LABEL);

            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, self.board_rect.min.y + offset);
            painter.text(pos, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_LABEL);
        }
    }

    /// Draw all pieces
    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for color in [Color::Dark, Color::Light] {
            for piece in board.pieces(color) {
                self.draw_piece(painter, piece);
            }
        }
    }

    /// Draw a single piece with visual polish
    fn draw_piece(&self, painter: &Painter, piece: Piece) {
        let center = self.board_to_screen(piece.pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        // Shadow
        let shadow_offset = Vec2::new(2.0, 2.0);
        painter.circle_filled(
            center + shadow_offset,
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        match piece.color {
            Color::Dark => {
                painter.circle_filled(center, radius, DARK_PIECE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, DARK_PIECE_HIGHLIGHT);
            }
            Color::Light => {
                painter.circle_filled(center, radius, LIGHT_PIECE);

                // Inner ring for depth
                painter.circle_stroke(center, radius * 0.75, Stroke::new(radius * 0.1, LIGHT_PIECE_SHADOW));
            }
        }

        if piece.king {
            let crown = self.cell_size * CROWN_RADIUS_RATIO;
            painter.circle_stroke(center, crown, Stroke::new(3.0, CROWN));
            painter.circle_filled(center, crown * 0.4, CROWN);
        }
    }

    /// Draw markers on the selected piece's destinations
    fn draw_destinations(&self, painter: &Painter, moves: &MoveMap) {
        let radius = self.cell_size * DESTINATION_RADIUS_RATIO;
        for (dest, captured) in moves {
            let color = if captured.is_empty() { destination_dot() } else { capture_dot() };
            painter.circle_filled(self.board_to_screen(*dest), radius, color);
        }
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the center of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
