//! Grid storage and the double-buffered update loop.

use std::fmt;

use log::{debug, trace};

use super::cell::{Cell, CellState};
use super::config::{GridConfig, MAX_RADIUS, resolve_thread_count};
use super::rules::{Rule, RuleFn};
use super::shape::Shape;
use super::snapshot::Snapshot;
use super::task::{UpdateTask, run_pass};
use crate::error::{GridError, Result};

pub struct Grid {
    shape: Shape,
    cells: Vec<Cell>,
    rule: Rule,
    handler: RuleFn,
    generation: u64,
    population_cache: Option<u64>,
    pool: rayon::ThreadPool,
}

impl Grid {
    /// Allocate a `rows x columns` grid bound to the rule named `rule_name`.
    ///
    /// Cells take their values from `initial_state` when given, otherwise
    /// start dead. Worker count is auto-detected; use
    /// [`Grid::with_config`] to control it.
    pub fn initialise(
        rows: u32,
        columns: u32,
        rule_name: &str,
        radius: u32,
        initial_state: Option<Vec<Cell>>,
    ) -> Result<Self> {
        Self::with_config(GridConfig::new(rows, columns, rule_name, radius), initial_state)
    }

    /// Create a grid with explicit configuration.
    pub fn with_config(config: GridConfig, initial_state: Option<Vec<Cell>>) -> Result<Self> {
        let shape = Shape::new(config.rows, config.columns, config.radius).ok_or(
            GridError::InvalidDimensions {
                rows: config.rows,
                columns: config.columns,
            },
        )?;
        if config.radius < 1 || config.radius > MAX_RADIUS {
            return Err(GridError::InvalidRadius(config.radius));
        }
        let rule: Rule = config.rule.parse()?;

        let cells = match initial_state {
            Some(cells) if cells.len() != shape.len() => {
                return Err(GridError::ShapeMismatch {
                    expected: shape.len(),
                    actual: cells.len(),
                });
            }
            Some(cells) => cells,
            None => vec![Cell::DEAD; shape.len()],
        };

        let threads = resolve_thread_count(&config);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("life-grid-{i}"))
            .build()?;

        debug!(
            "initialised {}x{} grid, rule {rule}, radius {}, {threads} worker(s)",
            shape.rows(),
            shape.columns(),
            shape.radius()
        );

        Ok(Self {
            shape,
            cells,
            rule,
            handler: rule.handler(),
            generation: 0,
            population_cache: None,
            pool,
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> u32 {
        self.shape.rows()
    }

    #[inline(always)]
    pub fn columns(&self) -> u32 {
        self.shape.columns()
    }

    #[inline(always)]
    pub fn radius(&self) -> u32 {
        self.shape.radius()
    }

    #[inline(always)]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn thread_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// The current generation, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.cells, self.shape)
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if self.shape.contains(index) {
            Ok(())
        } else {
            Err(GridError::IndexOutOfBounds {
                index,
                len: self.cells.len(),
            })
        }
    }

    pub fn cell(&self, index: usize) -> Result<Cell> {
        self.check_index(index)?;
        Ok(self.cells[index])
    }

    pub fn cell_at(&self, row: u32, column: u32) -> Result<Cell> {
        let index = self
            .index_of(row, column)
            .ok_or(GridError::CoordinateOutOfBounds {
                row,
                column,
                rows: self.rows(),
                columns: self.columns(),
            })?;
        Ok(self.cells[index])
    }

    /// Overwrite one cell immediately. Only valid between ticks.
    pub fn set_cell_state(&mut self, index: usize, state: CellState) -> Result<()> {
        self.check_index(index)?;
        self.cells[index] = Cell::new(state);
        self.population_cache = None;
        Ok(())
    }

    /// Flip one cell and return its new state.
    pub fn toggle_cell(&mut self, index: usize) -> Result<CellState> {
        let state = self.cell(index)?.state.toggled();
        self.set_cell_state(index, state)?;
        Ok(state)
    }

    #[inline]
    pub fn row_column_of(&self, index: usize) -> (u32, u32) {
        self.shape.row_column_of(index)
    }

    #[inline]
    pub fn index_of(&self, row: u32, column: u32) -> Option<usize> {
        self.shape.index_of(row, column)
    }

    #[inline]
    pub fn neighbour_index(&self, centre: usize, local_offset: usize) -> Option<usize> {
        self.shape.neighbour_index(centre, local_offset)
    }

    /// Advance one generation.
    ///
    /// Every cell is evaluated against the pre-tick generation and written
    /// into a fresh buffer, which then replaces the old one.
    pub fn tick(&mut self) {
        let mut next = vec![Cell::DEAD; self.cells.len()];
        {
            let task = UpdateTask::new(self.snapshot(), self.handler);
            self.pool.install(|| run_pass(&task, &mut next));
        }
        self.cells = next;
        self.population_cache = None;
        self.generation += 1;
        trace!("generation {}", self.generation);
    }

    pub fn tick_n(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Number of alive cells.
    pub fn population(&mut self) -> u64 {
        if let Some(cached) = self.population_cache {
            return cached;
        }
        let total = self.cells.iter().filter(|c| c.is_alive()).count() as u64;
        self.population_cache = Some(total);
        total
    }

    pub fn for_each_alive<F: FnMut(u32, u32)>(&self, mut f: F) {
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_alive() {
                let (row, column) = self.shape.row_column_of(index);
                f(row, column);
            }
        }
    }

    /// Release the cell storage and worker pool.
    pub fn dispose(self) {
        debug!(
            "disposing {}x{} grid at generation {}",
            self.rows(),
            self.columns(),
            self.generation
        );
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows())
            .field("columns", &self.columns())
            .field("radius", &self.radius())
            .field("rule", &self.rule)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

/// One line per row, `#` for alive and `.` for dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns() as usize) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
