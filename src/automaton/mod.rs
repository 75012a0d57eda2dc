//! Bounded grid engine internals and public API.

mod cell;
mod config;
mod grid;
mod patterns;
mod rules;
mod shape;
mod snapshot;
mod task;

pub use cell::{Cell, CellState};
pub use config::{GridConfig, MAX_RADIUS, THREADS_ENV};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use rules::{Rule, RuleFn};
pub use shape::Shape;
pub use snapshot::Snapshot;
pub use task::{UpdateTask, run_pass};
