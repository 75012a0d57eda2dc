//! Grid construction options.

use std::sync::OnceLock;

/// Largest neighbourhood radius accepted at initialisation.
pub const MAX_RADIUS: u32 = 1_024;

/// Overrides the auto-detected worker count when no explicit count is set.
pub const THREADS_ENV: &str = "LIFE_GRID_THREADS";

static PHYSICAL_CORES: OnceLock<usize> = OnceLock::new();

/// Configuration for a [`Grid`](super::Grid) instance.
///
/// `rows`, `columns`, `rule` and `radius` are required; the worker knobs
/// default to auto-detection and can be set with the builder methods.
#[derive(Clone, Debug)]
pub struct GridConfig {
    pub rows: u32,
    pub columns: u32,
    /// Rule name, resolved against the registry at initialisation.
    pub rule: String,
    pub radius: u32,
    /// Number of worker threads for the update pool.
    /// `None` means `LIFE_GRID_THREADS`, then physical core count.
    pub thread_count: Option<usize>,
    /// Hard upper bound on workers regardless of how the count was chosen.
    pub max_threads: Option<usize>,
}

impl GridConfig {
    pub fn new(rows: u32, columns: u32, rule: impl Into<String>, radius: u32) -> Self {
        Self {
            rows,
            columns,
            rule: rule.into(),
            radius,
            thread_count: None,
            max_threads: None,
        }
    }

    /// Set an explicit worker count for the update pool.
    pub fn thread_count(mut self, n: usize) -> Self {
        self.thread_count = Some(n.max(1));
        self
    }

    /// Set a hard upper bound on workers.
    pub fn max_threads(mut self, n: usize) -> Self {
        self.max_threads = Some(n.max(1));
        self
    }
}

#[inline]
fn physical_core_count() -> usize {
    *PHYSICAL_CORES.get_or_init(|| num_cpus::get_physical().max(1))
}

fn parse_thread_env(value: Option<String>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}

/// Resolve the worker count from a config, falling back to auto-detect.
pub(crate) fn resolve_thread_count(config: &GridConfig) -> usize {
    let mut threads = config
        .thread_count
        .or_else(|| parse_thread_env(std::env::var(THREADS_ENV).ok()))
        .unwrap_or_else(physical_core_count);
    if let Some(cap) = config.max_threads {
        threads = threads.min(cap);
    }
    threads.max(1)
}
