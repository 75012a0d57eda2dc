//! Per-site cell state.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    #[inline(always)]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

/// One grid site. Replaced wholesale during a tick, never edited in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub state: CellState,
}

impl Cell {
    pub const DEAD: Cell = Cell {
        state: CellState::Dead,
    };
    pub const ALIVE: Cell = Cell {
        state: CellState::Alive,
    };

    #[inline(always)]
    pub const fn new(state: CellState) -> Self {
        Self { state }
    }

    #[inline(always)]
    pub fn is_alive(self) -> bool {
        self.state.is_alive()
    }
}

impl From<CellState> for Cell {
    #[inline]
    fn from(state: CellState) -> Self {
        Self::new(state)
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        Self::new(alive.into())
    }
}
