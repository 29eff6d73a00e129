//! Error kinds raised by the rules engine.

use thiserror::Error;

/// Failures surfaced by the game core.
///
/// Blocked lateral moves and probes during normal command dispatch are
/// absorbed as no-ops rather than raised; see
/// [`GameState::apply_command`](crate::GameState::apply_command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Faller creation was requested with out-of-range or malformed
    /// parameters. Rejected before any state mutation.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// An operation was invoked with no valid target, e.g. rotating while
    /// no faller is active.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// The game-over flag is set; no command may mutate grid or faller
    /// state anymore.
    #[error("the game is over")]
    GameOver,
}
