//! Bounded 2-D binary cellular automaton with pluggable transition rules and
//! a parallel double-buffered update pass.

pub mod automaton;
pub mod error;
pub use automaton::{Cell, CellState, Grid, GridConfig, Pattern, Rule};
pub use error::{GridError, Result};
