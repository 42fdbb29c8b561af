//! Command-line puzzle solver.
//!
//! Reads a puzzle as an 81-character line (digits for givens, `.` for open
//! cells), solves it, and prints the solved grid. `--diagonal` adds the two
//! main diagonals as units; `--show-steps` replays every recorded
//! assignment before the final grid.

use std::process::ExitCode;

use clap::Parser;
use diadoku_core::Variant;
use diadoku_solver::{AssignmentLog, solve_with_log};
use log::info;

/// Solves standard and diagonal 9x9 puzzles.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The puzzle as one 81-character line, row by row. Use digits 1-9 for
    /// givens and `.` for open cells.
    grid: String,

    /// Require distinct digits on both main diagonals as well.
    #[arg(long)]
    diagonal: bool,

    /// Print every assignment the solver made, in order, before the
    /// solution.
    #[arg(long)]
    show_steps: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let variant = if args.diagonal {
        Variant::Diagonal
    } else {
        Variant::Standard
    };

    let mut log = AssignmentLog::new();
    let solution = match solve_with_log(&args.grid, variant, &mut log) {
        Ok(solution) => solution,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let Some(solution) = solution else {
        eprintln!("no solution");
        return ExitCode::FAILURE;
    };

    info!("solved after {} assignments", log.len());

    if args.show_steps {
        for (step, snapshot) in log.snapshots().iter().enumerate() {
            println!("step {}:", step + 1);
            println!("{snapshot}");
        }
    }
    println!("{solution}");
    ExitCode::SUCCESS
}
