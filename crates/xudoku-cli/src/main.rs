//! Command-line front end for the xudoku solver.

use std::{process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use log::info;
use xudoku_core::{Board, ConstraintGraph, ReplayLog, Variant};
use xudoku_solver::{SolveError, Solver};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Solve 9x9 sudoku grids, with or without the diagonal constraints"
)]
struct Args {
    /// 81-character grid in row-major order, `.` for unknown cells.
    grid: String,

    /// Constraint set to solve under.
    #[arg(long, value_enum, default_value_t = VariantArg::Diagonal)]
    variant: VariantArg,

    /// Record assignment history and report how many snapshots were taken.
    #[arg(long)]
    replay: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    Classic,
    Diagonal,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Classic => Variant::Classic,
            VariantArg::Diagonal => Variant::Diagonal,
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SolveError> {
    let board = Board::from_grid(&args.grid)?;
    let graph = ConstraintGraph::new(args.variant.into());

    let start = Instant::now();
    let (solved, recorded) = if args.replay {
        let mut solver = Solver::with_sink(&graph, ReplayLog::new());
        let solved = solver.solve(board)?;
        let recorded = Some(solver.into_sink().len());
        (solved, recorded)
    } else {
        (Solver::new(&graph).solve(board)?, None)
    };
    info!(
        "solved under {:?} rules in {:.2?}",
        args.variant,
        start.elapsed()
    );

    print!("{solved}");
    if let Some(count) = recorded {
        println!("{count} assignments recorded");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_variant_mapping() {
        assert_eq!(Variant::from(VariantArg::Classic), Variant::Classic);
        assert_eq!(Variant::from(VariantArg::Diagonal), Variant::Diagonal);
    }
}
