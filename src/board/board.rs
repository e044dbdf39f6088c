//! Fixed 10x10 grid of cells

use super::{Player, Pos, Stone, BOARD_SIZE};
use crate::error::GameError;

/// Game board
///
/// Cells only ever go from `Empty` to a stone; clearing happens by replacing
/// the whole board on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Stone; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Check whether signed indices fall inside the grid
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col)
    }

    /// Validate raw indices into a position
    pub fn pos(&self, row: usize, col: usize) -> Result<Pos, GameError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Pos::new(row as u8, col as u8))
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// Get the cell at raw indices
    pub fn get(&self, row: usize, col: usize) -> Result<Stone, GameError> {
        let pos = self.pos(row, col)?;
        Ok(self.stone_at(pos))
    }

    /// Check if the cell at raw indices is empty
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.get(row, col)? == Stone::Empty)
    }

    /// Place a stone for `player`
    ///
    /// Fails without touching the grid when the indices are off the board
    /// or the cell is already taken.
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> Result<Pos, GameError> {
        let pos = self.pos(row, col)?;
        if !self.is_empty_at(pos) {
            return Err(GameError::CellOccupied { row, col });
        }
        self.cells[pos.row as usize][pos.col as usize] = player.stone();
        Ok(pos)
    }

    /// Get stone at an already validated position
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.stone_at(pos) == Stone::Empty
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..super::TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(|&pos| self.is_empty_at(pos))
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&stone| stone != Stone::Empty)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    /// Copy of the whole grid, indexed `[row][col]`
    #[inline]
    pub fn cells(&self) -> [[Stone; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
