//! Row-major index mapping and neighbourhood window enumeration.
//!
//! A cell's neighbourhood is the `(2r+1) x (2r+1)` block centred on it,
//! enumerated row-major by a local offset. Offsets that land outside the
//! grid are absent; there is no wraparound.

/// Fixed geometry of a grid: extent plus neighbourhood radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    rows: u32,
    columns: u32,
    radius: u32,
    len: usize,
}

impl Shape {
    /// Returns `None` when either extent is zero or the cell count
    /// overflows `usize`.
    pub fn new(rows: u32, columns: u32, radius: u32) -> Option<Self> {
        if rows == 0 || columns == 0 {
            return None;
        }
        let len = (rows as usize).checked_mul(columns as usize)?;
        Some(Self {
            rows,
            columns,
            radius,
            len,
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline(always)]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Total number of cells, `rows * columns`.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn contains(&self, index: usize) -> bool {
        index < self.len
    }

    /// Row-major index of `(row, column)`, or `None` outside the grid.
    #[inline]
    pub fn index_of(&self, row: u32, column: u32) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    /// Inverse of [`Shape::index_of`] on the valid domain.
    #[inline]
    pub fn row_column_of(&self, index: usize) -> (u32, u32) {
        debug_assert!(
            self.contains(index),
            "row_column_of: index {index} out of bounds for {} cells",
            self.len
        );
        let columns = self.columns as usize;
        ((index / columns) as u32, (index % columns) as u32)
    }

    /// Side length of the neighbourhood window, `2r + 1`.
    #[inline(always)]
    pub fn window_side(&self) -> usize {
        2 * self.radius as usize + 1
    }

    /// Number of local offsets in the window, centre included.
    #[inline(always)]
    pub fn window_len(&self) -> usize {
        let side = self.window_side();
        side * side
    }

    /// Local offset that resolves back to the window's own centre.
    #[inline(always)]
    pub fn centre_offset(&self) -> usize {
        self.window_len() / 2
    }

    /// Global index of the cell at `local_offset` in the window centred on
    /// `centre`.
    ///
    /// Returns `None` for the centre offset itself, for offsets past the end
    /// of the window, and for positions that fall off the grid edge.
    pub fn neighbour_index(&self, centre: usize, local_offset: usize) -> Option<usize> {
        let side = self.window_side();
        if local_offset >= side * side || local_offset == self.centre_offset() {
            return None;
        }
        if !self.contains(centre) {
            return None;
        }

        let radius = self.radius as i64;
        let d_row = (local_offset / side) as i64 - radius;
        let d_column = (local_offset % side) as i64 - radius;

        let (row, column) = self.row_column_of(centre);
        let row = row as i64 + d_row;
        let column = column as i64 + d_column;
        if row < 0 || column < 0 {
            return None;
        }
        self.index_of(u32::try_from(row).ok()?, u32::try_from(column).ok()?)
    }

    /// In-grid neighbours of `centre`, excluding `centre`, in window order.
    pub fn neighbours(&self, centre: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.window_len()).filter_map(move |offset| self.neighbour_index(centre, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::Shape;
    use proptest::prelude::*;

    fn shape(rows: u32, columns: u32, radius: u32) -> Shape {
        Shape::new(rows, columns, radius).expect("valid test shape")
    }

    #[test]
    fn rejects_empty_extent() {
        assert!(Shape::new(0, 4, 1).is_none());
        assert!(Shape::new(4, 0, 1).is_none());
    }

    #[test]
    fn index_of_is_row_major() {
        let s = shape(3, 5, 1);
        assert_eq!(s.index_of(0, 0), Some(0));
        assert_eq!(s.index_of(0, 4), Some(4));
        assert_eq!(s.index_of(1, 0), Some(5));
        assert_eq!(s.index_of(2, 4), Some(14));
        assert_eq!(s.row_column_of(7), (1, 2));
    }

    #[test]
    fn index_of_reports_absence_instead_of_wrapping() {
        let s = shape(3, 5, 1);
        assert_eq!(s.index_of(3, 0), None);
        assert_eq!(s.index_of(0, 5), None);
        assert_eq!(s.index_of(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn centre_offset_is_never_a_neighbour() {
        let s = shape(5, 5, 2);
        let centre = s.index_of(2, 2).unwrap();
        assert_eq!(s.centre_offset(), 12);
        assert_eq!(s.neighbour_index(centre, s.centre_offset()), None);
    }

    #[test]
    fn radius_one_interior_window_is_row_major() {
        let s = shape(4, 4, 1);
        let centre = s.index_of(1, 1).unwrap();
        let got: Vec<_> = (0..9).map(|o| s.neighbour_index(centre, o)).collect();
        assert_eq!(
            got,
            vec![
                Some(0),
                Some(1),
                Some(2),
                Some(4),
                None,
                Some(6),
                Some(8),
                Some(9),
                Some(10)
            ]
        );
    }

    #[test]
    fn corner_window_is_clipped() {
        let s = shape(4, 4, 1);
        let got: Vec<_> = s.neighbours(0).collect();
        assert_eq!(got, vec![1, 4, 5]);

        let last = s.index_of(3, 3).unwrap();
        let got: Vec<_> = s.neighbours(last).collect();
        assert_eq!(got, vec![10, 11, 14]);
    }

    #[test]
    fn offsets_past_window_are_absent() {
        let s = shape(4, 4, 1);
        assert_eq!(s.neighbour_index(5, 9), None);
        assert_eq!(s.neighbour_index(5, usize::MAX), None);
    }

    #[test]
    fn radius_two_on_non_square_grid() {
        let s = shape(3, 7, 2);
        let centre = s.index_of(1, 3).unwrap();
        let mut got: Vec<_> = s.neighbours(centre).collect();
        got.sort_unstable();
        let mut expected = Vec::new();
        for row in 0..3u32 {
            for column in 1..=5u32 {
                if (row, column) != (1, 3) {
                    expected.push(s.index_of(row, column).unwrap());
                }
            }
        }
        assert_eq!(got, expected);
    }

    #[test]
    fn window_wider_than_grid_covers_everything_else() {
        let s = shape(2, 3, 4);
        let got: Vec<_> = s.neighbours(4).collect();
        assert_eq!(got, vec![0, 1, 2, 3, 5]);
    }

    proptest! {
        #[test]
        fn index_and_row_column_are_inverse(
            rows in 1u32..64,
            columns in 1u32..64,
            seed in any::<u64>(),
        ) {
            let s = shape(rows, columns, 1);
            let index = (seed % s.len() as u64) as usize;
            let (row, column) = s.row_column_of(index);
            prop_assert_eq!(s.index_of(row, column), Some(index));
            prop_assert_eq!(s.row_column_of(s.index_of(row, column).unwrap()), (row, column));
        }

        #[test]
        fn neighbours_stay_in_range_and_exclude_centre(
            rows in 1u32..24,
            columns in 1u32..24,
            radius in 1u32..4,
            seed in any::<u64>(),
        ) {
            let s = shape(rows, columns, radius);
            let centre = (seed % s.len() as u64) as usize;
            let (cr, cc) = s.row_column_of(centre);
            for neighbour in s.neighbours(centre) {
                prop_assert!(neighbour < s.len());
                prop_assert_ne!(neighbour, centre);
                let (nr, nc) = s.row_column_of(neighbour);
                prop_assert!(nr.abs_diff(cr) <= radius && nc.abs_diff(cc) <= radius);
            }
        }

        #[test]
        fn neighbour_count_matches_clipped_window(
            rows in 1u32..24,
            columns in 1u32..24,
            radius in 1u32..4,
            seed in any::<u64>(),
        ) {
            let s = shape(rows, columns, radius);
            let centre = (seed % s.len() as u64) as usize;
            let (row, column) = s.row_column_of(centre);
            let span = |pos: u32, extent: u32| {
                let lo = pos.saturating_sub(radius);
                let hi = (pos + radius).min(extent - 1);
                (hi - lo + 1) as usize
            };
            let expected = span(row, rows) * span(column, columns) - 1;
            prop_assert_eq!(s.neighbours(centre).count(), expected);
        }
    }
}
