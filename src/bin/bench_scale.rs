//! Tick throughput across grid sizes and worker counts.
//!
//! Use with `--release` for meaningful results.

#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use rand::RngCore;
use rand::SeedableRng;
use std::time::Instant;

use life_grid::{Cell, Grid, GridConfig};

const DENSITY: f64 = 0.42;
const SEED: u64 = 0x5EED_1234_ABCD_EF01;

fn seed_cells(side: u32) -> Vec<Cell> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(SEED);
    let threshold = (u64::MAX as f64 * DENSITY) as u64;
    (0..side as usize * side as usize)
        .map(|_| Cell::from(rng.next_u64() <= threshold))
        .collect()
}

fn bench(side: u32, radius: u32, threads: usize, ticks: u64) -> life_grid::Result<(f64, u64)> {
    let config = GridConfig::new(side, side, "GameOfLife", radius).thread_count(threads);
    let mut grid = Grid::with_config(config, Some(seed_cells(side)))?;

    let start = Instant::now();
    grid.tick_n(ticks);
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok((total_ms, grid.population()))
}

fn main() -> life_grid::Result<()> {
    let scales: &[(u32, u64)] = &[
        (64, 200),   // below the parallel threshold
        (256, 100),
        (1024, 20),
        (2048, 5),
    ];
    let mut worker_counts = vec![1usize, 4, num_cpus::get()];
    worker_counts.dedup();

    println!(
        "{:<10} {:>6} {:>8} {:>8} {:>12} {:>10}",
        "Grid", "Radius", "Threads", "Ticks", "Total(ms)", "Avg(ms)"
    );
    println!("{}", "-".repeat(60));

    for &(side, ticks) in scales {
        for radius in [1u32, 2] {
            for &threads in &worker_counts {
                let (total_ms, _pop) = bench(side, radius, threads, ticks)?;
                println!(
                    "{:<10} {:>6} {:>8} {:>8} {:>12.1} {:>10.4}",
                    format!("{side}x{side}"),
                    radius,
                    threads,
                    ticks,
                    total_ms,
                    total_ms / ticks as f64
                );
            }
        }
    }
    Ok(())
}
