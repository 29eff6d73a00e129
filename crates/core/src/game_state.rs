//! Game state module - orchestrates the faller against the grid
//!
//! `GameState` owns the board and the optional active faller and carries the
//! cross-cutting sequencing logic: per-tick gravity, landing and freezing,
//! the overflow buffer for jewels frozen above the grid, and spawning.
//! Match detection, marking, clearing and settling are exposed individually
//! so a driving loop can interleave them with its own flash timing.

use arrayvec::ArrayVec;

use tui_columns_types::{Cell, Direction, GameCommand, Jewel, BUFFER_ROWS};

use crate::board::Board;
use crate::error::GameError;
use crate::faller::{Faller, FallerState};
use crate::matches::{self, MatchSet};
use crate::rng::SimpleRng;

/// Jewels that froze above row 0, waiting to re-enter their origin column.
#[derive(Debug, Clone)]
struct Overflow {
    /// 1-based column the jewels came from.
    column: i16,
    /// Bottom-to-top order, same as the faller that spilled them.
    jewels: ArrayVec<Jewel, 3>,
}

/// Complete game state: grid, active faller, overflow buffer, RNG.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    faller: Option<Faller>,
    overflow: Vec<Overflow>,
    rng: SimpleRng,
}

impl GameState {
    /// Create a game with an empty `visible_rows x columns` board (plus the
    /// hidden buffer rows) and the given RNG seed.
    pub fn new(visible_rows: usize, columns: usize, seed: u32) -> Self {
        Self {
            board: Board::new(visible_rows, columns),
            faller: None,
            overflow: Vec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Build a game around a prefilled board.
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            faller: None,
            overflow: Vec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn faller(&self) -> Option<&Faller> {
        self.faller.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Create a faller in `column` with the given jewels, top to bottom.
    ///
    /// Rejects out-of-range columns and jewel counts other than three before
    /// any state mutation. If the visible-area entry row of the target
    /// column is already occupied, the game-over flag is set and no piece is
    /// created.
    pub fn spawn_faller(&mut self, column: i16, jewels: &[Jewel]) -> Result<(), GameError> {
        if self.board.is_game_over() {
            return Err(GameError::GameOver);
        }
        if column < 1 || column > self.board.cols() as i16 {
            return Err(GameError::InvalidParameters(format!(
                "column {column} is out of bounds"
            )));
        }
        if jewels.len() != 3 {
            return Err(GameError::InvalidParameters(
                "a faller must have exactly three jewels".into(),
            ));
        }
        if self.faller.is_some() {
            return Err(GameError::InvalidMove("a faller is already active".into()));
        }

        // The entry row is the first visible row, immediately below the buffer.
        let entry_row = BUFFER_ROWS as i16;
        if !self.board.is_empty_at(entry_row, column - 1) {
            self.board.set_game_over();
            return Ok(());
        }

        // Store bottom-to-top; the piece enters with its bottom jewel on the
        // last buffer row.
        let mut faller = Faller::new(column, entry_row - 1, [jewels[2], jewels[1], jewels[0]]);
        if !self.board.is_empty_at(faller.row() + 1, column - 1) {
            faller.state = FallerState::Landed;
        }
        self.faller = Some(faller);
        Ok(())
    }

    /// Spawn a faller in a uniformly random column with three uniformly
    /// random jewels (independent draws, with replacement).
    pub fn spawn_random_faller(&mut self) -> Result<(), GameError> {
        let column = self.rng.next_column(self.board.cols());
        let jewels = self.rng.next_jewels();
        self.spawn_faller(column, &jewels)
    }

    /// Dispatch a player command.
    ///
    /// After game over every command fails with [`GameError::GameOver`] and
    /// mutates nothing. Blocked lateral moves and probes with no active
    /// faller are absorbed as no-ops; rotating with no active faller is the
    /// one no-target case that is surfaced.
    pub fn apply_command(&mut self, cmd: GameCommand) -> Result<(), GameError> {
        if self.board.is_game_over() {
            return Err(GameError::GameOver);
        }

        match cmd {
            GameCommand::Rotate => match self.faller.as_mut() {
                Some(faller) => {
                    faller.rotate();
                    Ok(())
                }
                None => Err(GameError::InvalidMove("no active faller to rotate".into())),
            },
            GameCommand::MoveLeft => {
                self.lateral(Direction::Left);
                Ok(())
            }
            GameCommand::MoveRight => {
                self.lateral(Direction::Right);
                Ok(())
            }
            GameCommand::SoftDrop => self.step_down(),
            GameCommand::DropProbe => {
                self.drop_probe();
                Ok(())
            }
        }
    }

    /// Apply one gravity step on the controller's schedule.
    ///
    /// A Moving faller descends one row and lands when blocked; a Landed
    /// faller either reverts to Moving (support vanished) or freezes into
    /// the grid. Raises [`GameError::GameOver`] when the freeze leaves
    /// jewels in the buffer rows.
    pub fn advance_tick(&mut self) -> Result<(), GameError> {
        if self.board.is_game_over() {
            return Err(GameError::GameOver);
        }
        self.step_down()
    }

    fn step_down(&mut self) -> Result<(), GameError> {
        let Some(faller) = self.faller else {
            return Ok(());
        };

        match faller.state() {
            FallerState::Moving => {
                self.gravity_step(faller);
                Ok(())
            }
            FallerState::Landed => {
                // Inert while a match flash is pending directly above.
                if self.marked_above(&faller) {
                    return Ok(());
                }
                if self.board.is_empty_at(faller.row() + 1, faller.column() - 1) {
                    // Support vanished: revert to Moving without descending
                    // on this tick.
                    self.faller = Some(Faller {
                        state: FallerState::Moving,
                        ..faller
                    });
                    Ok(())
                } else {
                    self.freeze(faller)
                }
            }
        }
    }

    /// Descend a Moving faller one row if the cell below is free.
    fn gravity_step(&mut self, mut faller: Faller) {
        let next_row = faller.row() + 1;
        if self.board.is_empty_at(next_row, faller.column() - 1) {
            faller.row = next_row;
            faller.state = if self.board.is_empty_at(next_row + 1, faller.column() - 1) {
                FallerState::Moving
            } else {
                FallerState::Landed
            };
        } else {
            faller.state = FallerState::Landed;
        }
        self.faller = Some(faller);
    }

    /// Check-only probe: settles a Moving faller into Landed when nothing
    /// below it is free, without moving it.
    fn drop_probe(&mut self) {
        let Some(mut faller) = self.faller else {
            return;
        };
        if faller.state() != FallerState::Moving {
            return;
        }

        let next_row = faller.row() + 1;
        let room_below = next_row + 1 < self.board.rows() as i16
            && self.board.is_empty_at(next_row, faller.column() - 1);
        if !room_below {
            faller.state = FallerState::Landed;
            self.faller = Some(faller);
        }
    }

    /// Shift the faller sideways if feasible, then recompute its state
    /// against the new column.
    fn lateral(&mut self, direction: Direction) {
        let Some(mut faller) = self.faller else {
            return;
        };
        if !faller.can_move(&self.board, direction) {
            return;
        }

        faller.shift(direction);
        faller.state = if self.board.is_empty_at(faller.row() + 1, faller.column() - 1) {
            FallerState::Moving
        } else {
            FallerState::Landed
        };
        self.faller = Some(faller);
    }

    /// Whether the cell directly above the faller's top jewel is marked for
    /// clear. Deliberately checks only that single cell.
    fn marked_above(&self, faller: &Faller) -> bool {
        matches!(
            self.board.get(faller.row() - 3, faller.column() - 1),
            Some(cell) if cell.is_marked()
        )
    }

    /// Commit the faller's jewels into the grid and destroy it.
    ///
    /// Jewels whose row would be negative go to the overflow buffer instead.
    /// The buffer-row check runs afterwards; on game over the faller is
    /// still gone and the committed jewels stay.
    fn freeze(&mut self, faller: Faller) -> Result<(), GameError> {
        self.faller = None;

        let mut spilled = ArrayVec::<Jewel, 3>::new();
        for (i, jewel) in faller.jewels().into_iter().enumerate() {
            let row = faller.row() - i as i16;
            if row >= 0 {
                self.board.set(row, faller.column() - 1, Cell::Jewel(jewel));
            } else {
                spilled.push(jewel);
            }
        }
        if !spilled.is_empty() {
            self.overflow.push(Overflow {
                column: faller.column(),
                jewels: spilled,
            });
        }

        if self.board.check_buffer_rows() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    /// Scan the grid for runs of 3+ identical jewels in all four directions.
    pub fn detect_matches(&self) -> MatchSet {
        matches::detect_matches(&self.board)
    }

    /// Wrap the matched cells as marked-for-clear (idempotent per cell).
    pub fn mark_matches(&mut self, matches: &MatchSet) {
        self.board.mark(matches);
    }

    /// Strip marks without clearing; used between flash frames.
    pub fn unmark_matches(&mut self, matches: &MatchSet) {
        self.board.unmark(matches);
    }

    /// Empty every marked cell.
    pub fn clear_marked(&mut self) {
        self.board.clear_marked();
    }

    /// Compact all columns downward, then re-apply any overflowed jewels to
    /// the top of their origin columns where headroom appeared.
    pub fn settle(&mut self) {
        self.board.settle();
        self.drain_overflow();
    }

    fn drain_overflow(&mut self) {
        let mut pending = std::mem::take(&mut self.overflow);

        for entry in &mut pending {
            let col = entry.column - 1;

            // Lowest free row at the top of the column.
            let first_occupied = (0..self.board.rows() as i16)
                .find(|&row| !self.board.is_empty_at(row, col))
                .unwrap_or(self.board.rows() as i16);
            let mut target = first_occupied - 1;

            let mut placed = 0;
            for &jewel in entry.jewels.iter() {
                if target < 0 {
                    break;
                }
                self.board.set(target, col, Cell::Jewel(jewel));
                target -= 1;
                placed += 1;
            }
            entry.jewels.drain(..placed);
        }

        pending.retain(|entry| !entry.jewels.is_empty());
        self.overflow = pending;
    }
}
