//! Core rules engine - pure, deterministic, and testable
//!
//! This crate contains the complete rules of the falling-jewel game and
//! nothing else: no I/O, no timing, no rendering. The surrounding
//! application drives it through commands and ticks, which makes it:
//!
//! - **Deterministic**: same seed and command sequence, same game
//! - **Testable**: every rule is reachable from a plain function call
//! - **Portable**: runs headless or behind any front-end
//!
//! # Module Structure
//!
//! - [`board`]: the grid, buffer rows included, with mark/clear/settle
//! - [`faller`]: the active three-jewel piece and its movement feasibility
//! - [`matches`]: 4-direction run detection over the grid
//! - [`game_state`]: command dispatch, gravity, freezing, overflow, spawning
//! - [`rng`]: seeded LCG for random spawns
//! - [`error`]: the typed failures surfaced to callers
//!
//! # Sequencing
//!
//! A driving loop calls [`GameState::advance_tick`] on its own gravity
//! schedule and [`GameState::apply_command`] on input events. After a freeze
//! it repeats detect → mark → (flash) → clear → settle until detection comes
//! back empty, then spawns the next faller. The detect/mark/unmark/clear/
//! settle steps are exposed individually so the loop owns all pauses.
//!
//! # Example
//!
//! ```
//! use tui_columns_core::GameState;
//! use tui_columns_types::{GameCommand, BOARD_COLS, VISIBLE_ROWS};
//!
//! let mut game = GameState::new(VISIBLE_ROWS, BOARD_COLS, 12345);
//! game.spawn_random_faller().unwrap();
//!
//! game.apply_command(GameCommand::MoveRight).unwrap();
//! game.apply_command(GameCommand::Rotate).unwrap();
//! game.advance_tick().unwrap();
//!
//! assert!(game.faller().is_some());
//! ```

pub mod board;
pub mod error;
pub mod faller;
pub mod game_state;
pub mod matches;
pub mod rng;

pub use tui_columns_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::GameError;
pub use faller::{Faller, FallerState};
pub use game_state::GameState;
pub use matches::{detect_matches, MatchSet};
pub use rng::SimpleRng;
