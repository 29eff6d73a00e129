//! TUI Columns (workspace facade crate).
//!
//! This package keeps a stable `tui_columns::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_columns_core as core;
pub use tui_columns_input as input;
pub use tui_columns_term as term;
pub use tui_columns_types as types;
