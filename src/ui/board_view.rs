//! Board rendering for the Othello GUI

use crate::{Board, Cell, Pos, Side, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Playing area (the 8x8 squares, without margin)
    grid_rect: Rect,
    /// Draw a dot on every legal move
    pub show_legal_moves: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            grid_rect: Rect::NOTHING,
            show_legal_moves: true,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any.
    ///
    /// Only legal cells are reported as clicks; `accept_input` is false
    /// while the AI is to move or the game is over.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        suggested_move: Option<Pos>,
        accept_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        );

        painter.rect_filled(response.rect, CornerRadius::same(4), GRID_LINE);

        self.draw_squares(&painter);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);

        let hover = if accept_input {
            response.hover_pos().and_then(|p| self.screen_to_board(p))
        } else {
            None
        };

        // Hover highlight sits under the disks, like the square fill
        if let Some(pos) = hover {
            let color = if board.is_legal(pos) {
                HOVER_VALID
            } else {
                hover_invalid()
            };
            painter.rect_filled(self.cell_rect(pos).shrink(1.0), CornerRadius::ZERO, color);
        }

        self.draw_disks(&painter, board);

        if accept_input && self.show_legal_moves {
            for pos in board.legal_moves() {
                self.draw_legal_hint(&painter, pos);
            }
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(pos) = suggested_move {
            self.draw_suggestion(&painter, pos, board.side_to_move());
        }

        match hover {
            Some(pos) if response.clicked() && board.is_legal(pos) => Some(pos),
            _ => None,
        }
    }

    /// Draw the checkered 8x8 squares
    fn draw_squares(&self, painter: &Painter) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let color = if (row + col) % 2 == 0 { BOARD_LIGHT } else { BOARD_DARK };
                painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, color);
            }
        }
    }

    /// Draw the lines between squares
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.grid_rect.min;
        let span = self.cell_size * BOARD_SIZE as f32;

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [min + Vec2::new(offset, 0.0), min + Vec2::new(offset, span)],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [min + Vec2::new(0.0, offset), min + Vec2::new(span, offset)],
                stroke,
            );
        }
    }

    /// Draw row and column indices (0-7) matching move coordinates
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let center = self.grid_rect.min.x + (i as f32 + 0.5) * self.cell_size;

            // Column label above the board
            painter.text(
                Pos2::new(center, self.grid_rect.min.y - BOARD_MARGIN * 0.5),
                egui::Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                COORD_TEXT,
            );

            // Row label left of the board
            let y = self.grid_rect.min.y + (i as f32 + 0.5) * self.cell_size;
            painter.text(
                Pos2::new(self.grid_rect.min.x - BOARD_MARGIN * 0.5, y),
                egui::Align2::CENTER_CENTER,
                i.to_string(),
                font.clone(),
                COORD_TEXT,
            );
        }
    }

    /// Draw all placed disks
    fn draw_disks(&self, painter: &Painter, board: &Board) {
        for (row, cells) in board.cells().iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell != Cell::Empty {
                    self.draw_disk(painter, Pos::new(row as u8, col as u8), cell);
                }
            }
        }
    }

    /// Draw a single disk with visual polish
    fn draw_disk(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match cell {
            Cell::Dark => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, DARK_DISK);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    DARK_DISK_HIGHLIGHT,
                );
            }
            Cell::Light => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, LIGHT_DISK);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, LIGHT_DISK_SHADOW),
                );
            }
            Cell::Empty => {}
        }
    }

    fn draw_legal_hint(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * HINT_RADIUS_RATIO, legal_hint());
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISK_RADIUS_RATIO;

        let (fill, text) = match turn {
            Side::Dark => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), LIGHT_DISK),
            Side::Light => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), DARK_DISK),
        };

        painter.circle_filled(center, radius, fill);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(14.0),
            text,
        );
    }

    /// Screen rectangle of one square
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;
        Pos::checked(row, col)
    }

    /// Convert board position to the center of its square
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
