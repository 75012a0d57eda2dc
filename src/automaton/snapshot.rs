//! Read-only view of one generation.

use super::cell::{Cell, CellState};
use super::shape::Shape;

/// Immutable view handed to transition rules. Rules can read any cell but
/// hold no path to mutate the generation they are evaluating.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    cells: &'a [Cell],
    shape: Shape,
}

impl<'a> Snapshot<'a> {
    #[inline]
    pub(crate) fn new(cells: &'a [Cell], shape: Shape) -> Self {
        debug_assert_eq!(cells.len(), shape.len());
        Self { cells, shape }
    }

    #[inline(always)]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline(always)]
    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// State at `index`. Indices come from the grid's own enumeration, so
    /// they are in range.
    #[inline(always)]
    pub fn state(&self, index: usize) -> CellState {
        self.cells[index].state
    }

    #[inline]
    pub fn neighbour_index(&self, centre: usize, local_offset: usize) -> Option<usize> {
        self.shape.neighbour_index(centre, local_offset)
    }

    /// Number of alive cells in the clipped neighbourhood of `centre`,
    /// `centre` itself excluded.
    pub fn alive_neighbours(&self, centre: usize) -> usize {
        self.shape
            .neighbours(centre)
            .filter(|&i| self.cells[i].is_alive())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::Snapshot;
    use crate::automaton::cell::Cell;
    use crate::automaton::shape::Shape;

    #[test]
    fn alive_neighbours_excludes_centre() {
        let shape = Shape::new(3, 3, 1).unwrap();
        let cells = vec![Cell::ALIVE; 9];
        let snapshot = Snapshot::new(&cells, shape);
        assert_eq!(snapshot.alive_neighbours(4), 8);
        assert_eq!(snapshot.alive_neighbours(0), 3);
    }

    #[test]
    fn cell_out_of_range_is_none() {
        let shape = Shape::new(2, 2, 1).unwrap();
        let cells = vec![Cell::DEAD; 4];
        let snapshot = Snapshot::new(&cells, shape);
        assert_eq!(snapshot.cell(3), Some(Cell::DEAD));
        assert_eq!(snapshot.cell(4), None);
    }
}
