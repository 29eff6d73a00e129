//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions (visible play area).
pub const VISIBLE_ROWS: usize = 13;
pub const BOARD_COLS: usize = 6;

/// Hidden rows stacked above the visible play area.
///
/// They are part of the same addressable grid: raw rows `0..BUFFER_ROWS` are
/// hidden, and `visible_row = raw_row - BUFFER_ROWS`. A non-empty cell in a
/// buffer row after a freeze ends the game.
pub const BUFFER_ROWS: usize = 3;

/// Game timing constants (in milliseconds), used by the terminal front-end.
pub const TICK_MS: u64 = 650;
pub const FLASH_MS: u64 = 200;
pub const FLASH_CYCLES: u32 = 3;

/// Jewel kinds (the symbol alphabet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jewel {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
}

impl Jewel {
    /// All jewel kinds, in alphabet order.
    pub const ALL: [Jewel; 7] = [
        Jewel::Red,
        Jewel::Orange,
        Jewel::Yellow,
        Jewel::Green,
        Jewel::Cyan,
        Jewel::Blue,
        Jewel::Purple,
    ];

    /// Parse jewel from its letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Jewel::Red),
            'O' => Some(Jewel::Orange),
            'Y' => Some(Jewel::Yellow),
            'G' => Some(Jewel::Green),
            'C' => Some(Jewel::Cyan),
            'B' => Some(Jewel::Blue),
            'P' => Some(Jewel::Purple),
            _ => None,
        }
    }

    /// Convert to the single-letter form
    pub fn as_char(&self) -> char {
        match self {
            Jewel::Red => 'R',
            Jewel::Orange => 'O',
            Jewel::Yellow => 'Y',
            Jewel::Green => 'G',
            Jewel::Cyan => 'C',
            Jewel::Blue => 'B',
            Jewel::Purple => 'P',
        }
    }
}

/// A single grid cell.
///
/// `Marked` is a transient display/clear state: a jewel that belongs to a
/// detected match and is about to be cleared. It never survives a settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Jewel(Jewel),
    Marked(Jewel),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_marked(&self) -> bool {
        matches!(self, Cell::Marked(_))
    }

    /// The jewel in this cell, marked or not.
    pub fn jewel(&self) -> Option<Jewel> {
        match self {
            Cell::Empty => None,
            Cell::Jewel(j) | Cell::Marked(j) => Some(*j),
        }
    }
}

/// Lateral movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for this direction.
    pub fn offset(&self) -> i16 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Player-driven game commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    /// One-row drop probe: advances the faller a single row if possible.
    SoftDrop,
    /// Check-only probe: settles the faller's state without moving it.
    /// Used by a driving loop to decide whether a held drop key still has
    /// an effect.
    DropProbe,
    Rotate,
}
