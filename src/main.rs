//! # taquin - N×N Sliding-Tile Solver
//!
//! Command-line driver for the puzzle engine. The A* core always returns an
//! optimal solution; this binary wraps it with board input, scrambling, and
//! benchmarking.
//!
//! ## CLI overview
//!
//! Three subcommands:
//!
//! - `solve`: Parse a board from its CSV form and print the solution string.
//! - `solve-random`: Scramble a solved board and print the step-by-step
//!   solution, optionally from a fixed seed.
//! - `benchmark`: Generate random solvable boards and solve them in
//!   parallel, reporting percentile statistics.
//!
//! Run with `--help` for full details.
#![warn(clippy::pedantic)]

use anyhow::{Context, anyhow, ensure};
use clap::{Parser, Subcommand};
use colored::Colorize;
use flexi_logger::Logger;
use indicatif::{ParallelProgressIterator, ProgressIterator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::ThreadPoolBuilder;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use taquin::{
    Board, SearchNode, SolveStats, Solver, StatsSummary, create_game_board,
    create_game_board_with, encode_moves, parse_board, solution_moves,
    stats::{print_run_stats, print_summary_table},
};

/// Default board side length.
const DEFAULT_SIDE: usize = 3;

/// Default number of benchmark runs.
const DEFAULT_RUNS: usize = 200;

/// Default number of scramble steps used to generate random boards.
const DEFAULT_SCRAMBLE_STEPS: usize = 80;

/// Command-line arguments for the sliding-tile solver.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Log level for the stderr logger (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

/// Subcommands supported by the CLI.
#[derive(Subcommand)]
enum Commands {
    /// Solve a board given in its CSV form and print the solution string
    Solve {
        /// Board as "n,t0,...,t(n²-1)" in row-major order, blank as -1
        #[arg(short, long)]
        board: String,
        /// Print solve statistics after the solution
        #[arg(long)]
        stats: bool,
    },
    /// Scramble a solved board and print the step-by-step solution
    SolveRandom {
        /// Board side length
        #[arg(short, long, default_value_t = DEFAULT_SIDE)]
        n: usize,
        /// Number of scramble steps to generate the random board
        #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_STEPS)]
        scramble_steps: usize,
        /// Seed for a reproducible scramble (defaults to the thread RNG)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run many random boards and print aggregate statistics
    Benchmark {
        /// Number of boards to generate and solve
        #[arg(short, long, default_value_t = DEFAULT_RUNS)]
        runs: usize,
        /// Board side length
        #[arg(short, long, default_value_t = DEFAULT_SIDE)]
        n: usize,
        /// Number of scramble steps to generate random boards
        #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_STEPS)]
        scramble_steps: usize,
        /// Number of worker threads to use (defaults to Rayon automatic)
        #[arg(short, long)]
        threads: Option<usize>,
    },
}

/// Parse, solve, and print the compact solution string for one board.
fn solve_csv(csv: &str, show_stats: bool) -> anyhow::Result<()> {
    let board = parse_board(csv)?;
    println!("{board}\n");

    let mut solver = Solver::new(SearchNode::root(board));
    let leaf = solver
        .solve()
        .ok_or_else(|| anyhow!("board is not reachable from the solved configuration"))?;
    let moves = solution_moves(&leaf);

    println!(
        "{} {} ({} moves)",
        "Solution:".bold(),
        encode_moves(&moves).green(),
        moves.len()
    );

    if show_stats {
        print_run_stats(&solver.stats());
    }
    Ok(())
}

/// Solve a single scrambled board and print the path and per-step heuristic.
fn solve_random(n: usize, scramble_steps: usize, seed: Option<u64>) -> anyhow::Result<()> {
    ensure!(n >= 2, "board side must be at least 2");

    let root = match seed {
        Some(seed) => create_game_board_with(n, scramble_steps, &mut StdRng::seed_from_u64(seed)),
        None => create_game_board(n, scramble_steps),
    };
    let mut board = root.board().clone();

    println!("Solving a random {n}x{n} board ({scramble_steps} scramble moves)...");

    let mut solver = Solver::new(root);
    let leaf = solver
        .solve()
        .expect("scrambled boards are always solvable");
    let moves = solution_moves(&leaf);

    println!(
        "\nSolution path ({} steps)\n",
        moves.len()
    );
    println!("Step 0/{} h(n): {}\n{board}\n", moves.len(), board.heuristic());
    for (idx, direction) in moves.iter().enumerate() {
        board.move_blank(*direction);
        println!(
            "Step {}/{} ({direction}) h(n): {}\n{board}\n",
            idx + 1,
            moves.len(),
            board.heuristic()
        );
    }

    println!(
        "{} {}",
        "Solution:".bold(),
        encode_moves(&moves).green()
    );
    print_run_stats(&solver.stats());
    Ok(())
}

/// Solve a collection of boards in parallel, gathering per-run statistics.
fn run_solves(boards: &[Board]) -> Vec<SolveStats> {
    boards
        .par_iter()
        .progress()
        .map(|board| {
            let mut solver = Solver::new(SearchNode::root(board.clone()));
            solver
                .solve()
                .expect("scrambled boards are always solvable");
            solver.stats()
        })
        .collect()
}

/// Benchmark the engine over many random boards.
fn benchmark(
    runs: usize,
    n: usize,
    scramble_steps: usize,
    threads: Option<usize>,
) -> anyhow::Result<()> {
    ensure!(n >= 2, "board side must be at least 2");

    if let Some(t) = threads {
        ThreadPoolBuilder::new()
            .num_threads(t)
            .build_global()
            .context("failed to build thread pool")?;
        println!("Using {t} threads for parallel execution.");
    }

    println!("Generating {runs} random {n}x{n} boards with {scramble_steps} scramble moves...");
    let boards: Vec<Board> = (0..runs)
        .progress()
        .map(|_| create_game_board(n, scramble_steps).board().clone())
        .collect();

    println!("Solving...");
    let results = run_solves(&boards);

    print_summary_table(&StatsSummary::from(results.as_slice()));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _logger = Logger::try_with_env_or_str(&args.log_level)
        .context("invalid log level")?
        .log_to_stderr()
        .start()?;

    match args.command {
        Commands::Solve { board, stats } => solve_csv(&board, stats),
        Commands::SolveRandom {
            n,
            scramble_steps,
            seed,
        } => solve_random(n, scramble_steps, seed),
        Commands::Benchmark {
            runs,
            n,
            scramble_steps,
            threads,
        } => benchmark(runs, n, scramble_steps, threads),
    }
}
