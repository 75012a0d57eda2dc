use life_grid::{Cell, CellState, Grid, GridConfig, GridError};

fn grid(rows: u32, columns: u32, radius: u32) -> Grid {
    Grid::with_config(
        GridConfig::new(rows, columns, "GameOfLife", radius).thread_count(1),
        None,
    )
    .unwrap()
}

#[test]
fn initialise_copies_initial_state() {
    let initial = vec![Cell::ALIVE, Cell::DEAD, Cell::DEAD, Cell::ALIVE, Cell::ALIVE, Cell::DEAD];
    let g = Grid::initialise(2, 3, "GameOfLife", 1, Some(initial.clone())).unwrap();
    assert_eq!(g.cells(), initial.as_slice());
    assert_eq!(g.cell(3).unwrap(), Cell::ALIVE);
    assert_eq!(g.cell_at(1, 0).unwrap(), Cell::ALIVE);
}

#[test]
fn initialise_rejects_wrong_length_state() {
    let err = Grid::initialise(3, 3, "GameOfLife", 1, Some(vec![Cell::DEAD; 8])).unwrap_err();
    assert!(matches!(
        err,
        GridError::ShapeMismatch {
            expected: 9,
            actual: 8
        }
    ));
}

#[test]
fn initialise_rejects_unknown_rule() {
    let err = Grid::initialise(3, 3, "Seeds", 1, None).unwrap_err();
    assert!(matches!(err, GridError::UnknownRule(name) if name == "Seeds"));
}

#[test]
fn initialise_rejects_zero_radius() {
    let err = Grid::initialise(3, 3, "GameOfLife", 0, None).unwrap_err();
    assert!(matches!(err, GridError::InvalidRadius(0)));
}

#[test]
fn cell_access_is_bounds_checked() {
    let mut g = grid(2, 2, 1);
    assert!(matches!(
        g.cell(4),
        Err(GridError::IndexOutOfBounds { index: 4, len: 4 })
    ));
    assert!(matches!(
        g.set_cell_state(9, CellState::Alive),
        Err(GridError::IndexOutOfBounds { index: 9, len: 4 })
    ));
    assert!(matches!(
        g.cell_at(0, 2),
        Err(GridError::CoordinateOutOfBounds {
            row: 0,
            column: 2,
            rows: 2,
            columns: 2
        })
    ));
}

#[test]
fn set_cell_state_takes_effect_immediately() {
    let mut g = grid(3, 3, 1);
    g.set_cell_state(4, CellState::Alive).unwrap();
    assert_eq!(g.cell(4).unwrap(), Cell::ALIVE);
    assert_eq!(g.generation(), 0);
    assert_eq!(g.population(), 1);
}

#[test]
fn index_and_row_column_are_inverse_on_whole_grid() {
    let g = grid(7, 13, 1);
    for row in 0..7 {
        for column in 0..13 {
            let index = g.index_of(row, column).unwrap();
            assert_eq!(g.row_column_of(index), (row, column));
        }
    }
    for index in 0..g.len() {
        let (row, column) = g.row_column_of(index);
        assert_eq!(g.index_of(row, column), Some(index));
    }
    assert_eq!(g.index_of(7, 0), None);
    assert_eq!(g.index_of(0, 13), None);
}

#[test]
fn neighbour_index_never_returns_centre_or_out_of_range() {
    for radius in 1..=3 {
        let g = grid(6, 9, radius);
        let window = (2 * radius as usize + 1).pow(2);
        for centre in 0..g.len() {
            for offset in 0..window + 2 {
                if let Some(n) = g.neighbour_index(centre, offset) {
                    assert_ne!(n, centre);
                    assert!(n < g.len());
                }
            }
        }
    }
}

#[test]
fn tick_reads_only_the_previous_generation() {
    // Sequential in-place evaluation in index order would see (0,1) already
    // dead when evaluating (0,2) and let the whole row collapse.
    let mut g = grid(3, 3, 1);
    for index in [3, 4, 5] {
        g.set_cell_state(index, CellState::Alive).unwrap();
    }
    g.tick();
    let alive: Vec<_> = (0..9).filter(|&i| g.cell(i).unwrap().is_alive()).collect();
    assert_eq!(alive, vec![1, 4, 7]);
}

#[test]
fn generation_counts_ticks() {
    let mut g = grid(4, 4, 1);
    g.tick();
    g.tick_n(4);
    assert_eq!(g.generation(), 5);
}

#[test]
fn dispose_consumes_grid() {
    let g = grid(4, 4, 1);
    g.dispose();
}
