//! Per-cell update work for one tick.
//!
//! Workers read the pre-tick generation through a shared [`Snapshot`] and
//! write into disjoint `&mut` chunks of the output buffer, so the write
//! phase needs no locking.

use rayon::prelude::*;

use super::cell::Cell;
use super::rules::RuleFn;
use super::snapshot::Snapshot;

/// Below this many cells the pass runs on the calling thread.
pub(crate) const PARALLEL_MIN_CELLS: usize = 4_096;
/// Target chunks handed to each worker, for load balancing near edges where
/// neighbourhoods are cheaper.
const CHUNKS_PER_WORKER: usize = 4;
const CHUNK_MIN: usize = 256;
const CHUNK_MAX: usize = 65_536;

/// Evaluates one rule against one read-only generation.
#[derive(Clone, Copy)]
pub struct UpdateTask<'a> {
    snapshot: Snapshot<'a>,
    rule: RuleFn,
}

impl<'a> UpdateTask<'a> {
    pub fn new(snapshot: Snapshot<'a>, rule: RuleFn) -> Self {
        Self { snapshot, rule }
    }

    /// Compute the next cell at `index` into its output slot.
    #[inline(always)]
    pub fn execute(&self, index: usize, slot: &mut Cell) {
        *slot = Cell::new((self.rule)(index, &self.snapshot));
    }

    /// Evaluate a contiguous run of cells starting at global index `start`.
    #[inline]
    fn execute_range(&self, start: usize, out: &mut [Cell]) {
        for (offset, slot) in out.iter_mut().enumerate() {
            self.execute(start + offset, slot);
        }
    }
}

#[inline]
pub(crate) fn chunk_size(len: usize, workers: usize) -> usize {
    let workers = workers.max(1);
    let target_chunks = workers.saturating_mul(CHUNKS_PER_WORKER);
    len.div_ceil(target_chunks).clamp(CHUNK_MIN, CHUNK_MAX)
}

/// Fill `out` with the next generation.
///
/// Must be called inside the owning pool's `install` so the chunking
/// matches the worker count. Every index in `0..out.len()` is written
/// exactly once. A panicking rule aborts the pass and resumes unwinding in
/// the caller.
pub fn run_pass(task: &UpdateTask<'_>, out: &mut [Cell]) {
    debug_assert_eq!(out.len(), task.snapshot.len());
    let workers = rayon::current_num_threads();

    if workers <= 1 || out.len() < PARALLEL_MIN_CELLS {
        task.execute_range(0, out);
        return;
    }

    let chunk = chunk_size(out.len(), workers);
    out.par_chunks_mut(chunk)
        .enumerate()
        .for_each(|(chunk_index, slots)| task.execute_range(chunk_index * chunk, slots));
}
