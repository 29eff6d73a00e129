//! Match detection - aligned runs of three or more identical jewels
//!
//! Scans the buffer-inclusive grid in four directions (rows, columns, both
//! diagonals) with a sliding window of 3. Pure functions of grid contents.

use tui_columns_types::{Cell, Jewel};

use crate::board::Board;

/// A deduplicated set of (row, col) grid coordinates.
///
/// Backed by a flat occupancy mask plus an insertion-ordered coordinate list,
/// so membership checks and iteration are both cheap without hashing.
#[derive(Debug, Clone)]
pub struct MatchSet {
    cols: usize,
    mask: Vec<bool>,
    coords: Vec<(usize, usize)>,
}

impl MatchSet {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            mask: vec![false; rows * cols],
            coords: Vec::new(),
        }
    }

    /// Insert a coordinate; duplicates from overlapping runs are dropped.
    pub fn insert(&mut self, row: usize, col: usize) {
        let idx = row * self.cols + col;
        if !self.mask[idx] {
            self.mask[idx] = true;
            self.coords.push((row, col));
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask[row * self.cols + col]
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.coords.iter().copied()
    }
}

/// (row, col) steps for the four scanned alignments: horizontal, vertical,
/// and the two diagonals.
const DIRECTIONS: [(i16, i16); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The jewel at (row, col), ignoring cells already marked for clear.
fn plain_jewel(board: &Board, row: i16, col: i16) -> Option<Jewel> {
    match board.get(row, col) {
        Some(Cell::Jewel(jewel)) => Some(jewel),
        _ => None,
    }
}

/// Find every cell that participates in a run of 3+ identical jewels.
///
/// All four alignments are scanned across the full grid, buffer rows
/// included. A run of N > 3 contributes all N cells through its overlapping
/// windows; the set deduplicates shared cells of crossing runs.
pub fn detect_matches(board: &Board) -> MatchSet {
    let rows = board.rows() as i16;
    let cols = board.cols() as i16;
    let mut matches = MatchSet::new(board.rows(), board.cols());

    for (dr, dc) in DIRECTIONS {
        for row in 0..rows {
            for col in 0..cols {
                // Skip windows whose far end leaves the grid.
                let end_row = row + 2 * dr;
                let end_col = col + 2 * dc;
                if end_row >= rows || end_col < 0 || end_col >= cols {
                    continue;
                }

                let jewel = plain_jewel(board, row, col);
                if jewel.is_some()
                    && plain_jewel(board, row + dr, col + dc) == jewel
                    && plain_jewel(board, end_row, end_col) == jewel
                {
                    for i in 0..3 {
                        matches.insert((row + i * dr) as usize, (col + i * dc) as usize);
                    }
                }
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_set_deduplicates() {
        let mut set = MatchSet::new(4, 4);
        set.insert(1, 2);
        set.insert(1, 2);
        set.insert(2, 2);
        assert_eq!(set.len(), 2);
        assert!(set.contains(1, 2));
        assert!(!set.contains(0, 0));
    }

    #[test]
    fn test_empty_board_has_no_matches() {
        let board = Board::new(4, 4);
        assert!(detect_matches(&board).is_empty());
    }

    #[test]
    fn test_marked_cells_do_not_rematch() {
        let mut board = Board::from_rows(
            1,
            4,
            &[
                "    ", //
                "    ", //
                "    ", //
                "RRR ",
            ],
        );
        let first = detect_matches(&board);
        assert_eq!(first.len(), 3);

        board.mark(&first);
        assert!(detect_matches(&board).is_empty());
    }
}
