//! Board rendering and click handling

use crate::{Board, Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

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
            cell_size: 50.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks are only reported for empty cells while `accepting_input`.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_cells: Option<&[Pos]>,
        accepting_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        if let Some(cells) = winning_cells {
            self.draw_winning_cells(&painter, cells);
        }

        self.draw_grid(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        let mut clicked_pos = None;

        if accepting_input {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                if board.is_empty_at(board_pos) {
                    self.draw_hover_preview(&painter, board_pos);

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for (row, cells) in board.cells().iter().enumerate() {
            for (col, &stone) in cells.iter().enumerate() {
                if stone != Stone::Empty {
                    self.draw_stone(painter, Pos::new(row as u8, col as u8), stone);
                }
            }
        }
    }

    /// Draw a single stone
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Shade the winning cells and outline their stones
    fn draw_winning_cells(&self, painter: &Painter, cells: &[Pos]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);

        for &pos in cells {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::same(0), win_cell_fill());
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(self.cell_center(pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos) {
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(self.cell_center(pos), radius, hover_valid());
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        Pos::checked(row, col)
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Centre of a cell in screen coordinates
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 50.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(532.0)),
        }
    }

    #[test]
    fn test_screen_to_board() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(20.0, 20.0)), Some(Pos::new(0, 0)));
        assert_eq!(view.screen_to_board(Pos2::new(140.0, 70.0)), Some(Pos::new(1, 2)));
        assert_eq!(view.screen_to_board(Pos2::new(5.0, 5.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(520.0, 20.0)), None);
    }

    #[test]
    fn test_cell_center_round_trips() {
        let view = view();
        let pos = Pos::new(7, 3);
        assert_eq!(view.screen_to_board(view.cell_center(pos)), Some(pos));
    }
}
