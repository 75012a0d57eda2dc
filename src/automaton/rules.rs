//! Transition rule registry.
//!
//! Every rule is a pure function of `(index, snapshot)`. Rules never touch
//! shared state, which is what lets the tick evaluate cells on any thread in
//! any order.

use std::fmt;
use std::str::FromStr;

use super::cell::CellState;
use super::snapshot::Snapshot;
use crate::error::GridError;

/// Signature shared by every transition rule.
pub type RuleFn = fn(usize, &Snapshot<'_>) -> CellState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Flip the cell's own state every tick.
    SwitchState,
    /// Alive iff exactly one neighbour is alive.
    InheritNeighbourSingular,
    /// B3/S23.
    GameOfLife,
    /// B36/S23.
    HighLife,
}

impl Rule {
    pub const ALL: [Rule; 4] = [
        Rule::SwitchState,
        Rule::InheritNeighbourSingular,
        Rule::GameOfLife,
        Rule::HighLife,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::SwitchState => "SwitchState",
            Rule::InheritNeighbourSingular => "InheritNeighbourSingular",
            Rule::GameOfLife => "GameOfLife",
            Rule::HighLife => "HighLife",
        }
    }

    /// Function bound into the grid at initialisation.
    pub fn handler(self) -> RuleFn {
        match self {
            Rule::SwitchState => switch_state,
            Rule::InheritNeighbourSingular => inherit_neighbour_singular,
            Rule::GameOfLife => game_of_life,
            Rule::HighLife => high_life,
        }
    }

    #[inline]
    pub fn apply(self, index: usize, snapshot: &Snapshot<'_>) -> CellState {
        (self.handler())(index, snapshot)
    }
}

impl FromStr for Rule {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| GridError::UnknownRule(s.to_owned()))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn switch_state(index: usize, snapshot: &Snapshot<'_>) -> CellState {
    snapshot.state(index).toggled()
}

pub fn inherit_neighbour_singular(index: usize, snapshot: &Snapshot<'_>) -> CellState {
    let mut alive = 0usize;
    for neighbour in snapshot.shape().neighbours(index) {
        if snapshot.state(neighbour).is_alive() {
            alive += 1;
            if alive > 1 {
                return CellState::Dead;
            }
        }
    }
    CellState::from(alive == 1)
}

pub fn game_of_life(index: usize, snapshot: &Snapshot<'_>) -> CellState {
    birth_survival(index, snapshot, &[3], &[2, 3])
}

pub fn high_life(index: usize, snapshot: &Snapshot<'_>) -> CellState {
    birth_survival(index, snapshot, &[3, 6], &[2, 3])
}

/// Outer-totalistic update: a dead cell is born when its alive-neighbour
/// count is in `birth`, an alive cell survives when it is in `survival`.
#[inline]
fn birth_survival(
    index: usize,
    snapshot: &Snapshot<'_>,
    birth: &[usize],
    survival: &[usize],
) -> CellState {
    let neighbours = snapshot.alive_neighbours(index);
    let next_alive = if snapshot.state(index).is_alive() {
        survival.contains(&neighbours)
    } else {
        birth.contains(&neighbours)
    };
    CellState::from(next_alive)
}
