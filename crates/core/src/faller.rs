//! Faller module - the active three-jewel piece
//!
//! A faller is three stacked jewels in one column. The anchor row is the row
//! of the bottom jewel in raw grid coordinates, so the piece occupies rows
//! `row`, `row - 1`, `row - 2` and the anchor may go negative while part of
//! the piece is still above the grid. The faller holds no reference to the
//! board; feasibility queries take it as an argument.

use tui_columns_types::{Direction, Jewel};

use crate::board::Board;

/// Faller lifecycle state.
///
/// `Landed` means the piece is resting on something; one more blocked
/// downward tick freezes it into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallerState {
    Moving,
    Landed,
}

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faller {
    /// 1-based column, always within `[1, board.cols()]`.
    pub(crate) column: i16,
    /// Raw row of the bottom jewel; negative while above the grid.
    pub(crate) row: i16,
    /// Jewels ordered bottom to top.
    pub(crate) jewels: [Jewel; 3],
    pub(crate) state: FallerState,
}

impl Faller {
    pub(crate) fn new(column: i16, row: i16, jewels: [Jewel; 3]) -> Self {
        Self {
            column,
            row,
            jewels,
            state: FallerState::Moving,
        }
    }

    pub fn column(&self) -> i16 {
        self.column
    }

    /// Raw row of the bottom jewel.
    pub fn row(&self) -> i16 {
        self.row
    }

    /// Jewels ordered bottom to top.
    pub fn jewels(&self) -> [Jewel; 3] {
        self.jewels
    }

    pub fn state(&self) -> FallerState {
        self.state
    }

    /// Cycle the jewels by one position: the bottom jewel moves to the top.
    ///
    /// Purely an internal relabeling; always legal regardless of board state.
    pub fn rotate(&mut self) {
        self.jewels.rotate_left(1);
    }

    /// Whether the piece can shift one column in `direction`.
    ///
    /// Fails if the candidate column leaves the board, or if any of the three
    /// rows the piece occupies has a non-empty cell in the candidate column.
    /// Rows above the top of the grid count as clear.
    pub fn can_move(&self, board: &Board, direction: Direction) -> bool {
        let candidate = self.column + direction.offset();
        if candidate < 1 || candidate > board.cols() as i16 {
            return false;
        }

        (0..3).all(|i| {
            let row = self.row - i;
            // get() is None above the grid, which counts as clear.
            !matches!(board.get(row, candidate - 1), Some(cell) if !cell.is_empty())
        })
    }

    /// Shift the column by one; callers must have validated via `can_move`.
    pub(crate) fn shift(&mut self, direction: Direction) {
        self.column += direction.offset();
    }
}
