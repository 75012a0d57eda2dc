//! Named seed patterns, as `(row, column)` offsets from a top-left origin.

use super::cell::CellState;
use super::grid::Grid;
use crate::error::{GridError, Result};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
];

impl Pattern {
    /// Case-insensitive lookup in [`PATTERNS`].
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Like [`Pattern::find`], reporting a miss as an error.
    pub fn resolve(name: &str) -> Result<&'static Pattern> {
        Self::find(name).ok_or_else(|| GridError::UnknownPattern(name.to_owned()))
    }

    /// Bounding box as `(rows, columns)`.
    pub fn extent(&self) -> (u32, u32) {
        self.cells.iter().fold((0, 0), |(rows, columns), &(r, c)| {
            (rows.max(r + 1), columns.max(c + 1))
        })
    }

    /// Set this pattern's cells alive with its top-left corner at
    /// `(row, column)`. Leaves the grid untouched if any cell would fall
    /// outside it.
    pub fn stamp(&self, grid: &mut Grid, row: u32, column: u32) -> Result<()> {
        let (rows, columns) = self.extent();
        let fits = row.checked_add(rows).is_some_and(|end| end <= grid.rows())
            && column
                .checked_add(columns)
                .is_some_and(|end| end <= grid.columns());
        if !fits {
            return Err(GridError::CoordinateOutOfBounds {
                row,
                column,
                rows: grid.rows(),
                columns: grid.columns(),
            });
        }

        for &(dr, dc) in self.cells {
            if let Some(index) = grid.index_of(row + dr, column + dc) {
                grid.set_cell_state(index, CellState::Alive)?;
            }
        }
        Ok(())
    }
}
