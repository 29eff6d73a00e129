//! Board module - manages the game grid
//!
//! The grid is `visible_rows + BUFFER_ROWS` rows by `columns` columns, stored
//! as a flat row-major array. Raw row 0 is the top buffer row; the visible
//! area starts at raw row `BUFFER_ROWS` (so `visible_row = raw_row -
//! BUFFER_ROWS`). That convention is used everywhere; no other offset
//! arithmetic appears in this crate.

use tui_columns_types::{Cell, Jewel, BUFFER_ROWS};

use crate::matches::MatchSet;

/// The game grid, buffer rows included, plus the sticky game-over flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
    game_over: bool,
}

impl Board {
    /// Create an empty board with the given visible dimensions.
    ///
    /// The stored grid gains `BUFFER_ROWS` hidden rows on top.
    pub fn new(visible_rows: usize, cols: usize) -> Self {
        let rows = visible_rows + BUFFER_ROWS;
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            game_over: false,
        }
    }

    /// Calculate flat index from (row, col), buffer rows included.
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || row >= self.rows as i16 || col < 0 || col >= self.cols as i16 {
            return None;
        }
        Some((row as usize) * self.cols + (col as usize))
    }

    /// Total row count, buffer rows included.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn visible_rows(&self) -> usize {
        self.rows - BUFFER_ROWS
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col). Returns `None` if out of bounds.
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i16, col: i16, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty.
    pub fn is_empty_at(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// True once the game-over flag has been set. The flag is terminal; it
    /// is never reset for the remainder of the session.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub(crate) fn set_game_over(&mut self) {
        self.game_over = true;
    }

    /// Wrap every matched jewel as marked-for-clear.
    ///
    /// Idempotent per coordinate: re-marking an already-marked cell is a
    /// no-op, so overlapping runs cannot double-mark.
    pub fn mark(&mut self, matches: &MatchSet) {
        for (row, col) in matches.iter() {
            if let Some(idx) = self.index(row as i16, col as i16) {
                if let Cell::Jewel(jewel) = self.cells[idx] {
                    self.cells[idx] = Cell::Marked(jewel);
                }
            }
        }
    }

    /// Strip the marked wrapper back to a plain jewel without clearing.
    ///
    /// Only used by the renderer between flash frames.
    pub fn unmark(&mut self, matches: &MatchSet) {
        for (row, col) in matches.iter() {
            if let Some(idx) = self.index(row as i16, col as i16) {
                if let Cell::Marked(jewel) = self.cells[idx] {
                    self.cells[idx] = Cell::Jewel(jewel);
                }
            }
        }
    }

    /// Empty every marked cell. Irreversible.
    pub fn clear_marked(&mut self) {
        for cell in &mut self.cells {
            if cell.is_marked() {
                *cell = Cell::Empty;
            }
        }
    }

    /// Compact every column downward under gravity.
    ///
    /// Per column: gather the non-empty cells top-to-bottom, then rewrite the
    /// column bottom-aligned in the same relative order, emptying the rows
    /// above. Columns are processed independently; intra-column order is
    /// never changed. Idempotent.
    pub fn settle(&mut self) {
        let mut stack: Vec<Cell> = Vec::with_capacity(self.rows);

        for col in 0..self.cols {
            stack.clear();
            for row in 0..self.rows {
                let cell = self.cells[row * self.cols + col];
                if !cell.is_empty() {
                    stack.push(cell);
                }
            }

            let first_filled = self.rows - stack.len();
            for row in 0..self.rows {
                self.cells[row * self.cols + col] = if row < first_filled {
                    Cell::Empty
                } else {
                    stack[row - first_filled]
                };
            }
        }
    }

    /// Check the hidden buffer rows for leftover jewels.
    ///
    /// Sets the game-over flag and returns true if any buffer cell is
    /// occupied. Invoked right after a freeze, never during free movement.
    pub fn check_buffer_rows(&mut self) -> bool {
        let buffered = self.cells[..BUFFER_ROWS * self.cols]
            .iter()
            .any(|cell| !cell.is_empty());
        if buffered {
            self.game_over = true;
        }
        buffered
    }

    /// Build a board from row strings, top row (buffer included) first.
    ///
    /// Spaces are empty cells, letters are jewels. Fixture convenience, used
    /// by tests and kept public for callers that set up prefilled boards.
    pub fn from_rows(visible_rows: usize, cols: usize, rows: &[&str]) -> Self {
        let mut board = Self::new(visible_rows, cols);
        assert_eq!(rows.len(), board.rows, "row count must include buffer rows");

        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), cols);
            for (c, ch) in line.chars().enumerate() {
                if let Some(jewel) = Jewel::from_char(ch) {
                    board.cells[r * cols + c] = Cell::Jewel(jewel);
                }
            }
        }
        board
    }
}
