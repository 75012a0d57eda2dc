#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser};
use log::{LevelFilter, info};
use rand::{Rng, SeedableRng};
use simple_logger::SimpleLogger;

use life_grid::{Cell, Grid, GridConfig, Pattern, Rule};

/// Run a bounded cellular automaton and report population over time.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 256)]
    rows: u32,

    #[arg(long, default_value_t = 256)]
    columns: u32,

    /// Transition rule name.
    #[arg(long, default_value_t = Rule::GameOfLife.to_string())]
    rule: String,

    /// Neighbourhood radius (Chebyshev distance).
    #[arg(long, default_value_t = 1)]
    radius: u32,

    /// Worker threads for the update pass (default: auto).
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Report population every N ticks.
    #[arg(long, default_value_t = 10)]
    checkpoint: u64,

    /// Fraction of cells seeded alive when no pattern is given.
    #[arg(long, default_value_t = 0.42)]
    density: f64,

    #[arg(long, default_value_t = 0x5EED_1234_ABCD_EF01)]
    seed: u64,

    /// Seed with a named pattern, centred, instead of random noise.
    #[arg(long)]
    pattern: Option<String>,

    /// Print the final generation.
    #[arg(long)]
    print: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn random_state(rows: u32, columns: u32, density: f64, seed: u64) -> Vec<Cell> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let len = rows as usize * columns as usize;
    (0..len)
        .map(|_| Cell::from(rng.random_bool(density.clamp(0.0, 1.0))))
        .collect()
}

fn build_grid(args: &Args) -> life_grid::Result<Grid> {
    let mut config = GridConfig::new(args.rows, args.columns, args.rule.as_str(), args.radius);
    if let Some(n) = args.threads {
        config = config.thread_count(n);
    }

    match args.pattern.as_deref() {
        Some(name) => {
            let pattern = Pattern::resolve(name)?;
            let mut grid = Grid::with_config(config, None)?;
            let (rows, columns) = pattern.extent();
            let row = args.rows.saturating_sub(rows) / 2;
            let column = args.columns.saturating_sub(columns) / 2;
            pattern.stamp(&mut grid, row, column)?;
            Ok(grid)
        }
        None => {
            let initial = random_state(args.rows, args.columns, args.density, args.seed);
            Grid::with_config(config, Some(initial))
        }
    }
}

fn run(args: &Args) -> life_grid::Result<()> {
    let mut grid = build_grid(args)?;
    info!(
        "{}x{} {} r={} on {} worker(s), population {}",
        grid.rows(),
        grid.columns(),
        grid.rule(),
        grid.radius(),
        grid.thread_count(),
        grid.population()
    );

    let checkpoint = args.checkpoint.max(1);
    let start = Instant::now();
    let mut done = 0u64;
    while done < args.ticks {
        let batch = checkpoint.min(args.ticks - done);
        let phase = Instant::now();
        grid.tick_n(batch);
        done += batch;
        let ms = phase.elapsed().as_secs_f64() * 1000.0;
        println!(
            "Generation {}: population = {} ({ms:.3} ms, {:.6} ms/tick)",
            grid.generation(),
            grid.population(),
            ms / batch as f64
        );
    }

    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    println!("\n--- Summary ({} ticks) ---", args.ticks);
    println!("{total_ms:.3} ms total");

    if args.print {
        print!("{grid}");
    }
    grid.dispose();
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("failed to install logger: {e}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
