//! Constraint propagation and backtracking search for xudoku boards.
//!
//! The solver combines three local-consistency rules (elimination,
//! only-choice, and naked twins) into a fixpoint loop ([`reduce`]), and
//! drives that loop from a depth-first backtracking search with a
//! most-constrained-cell heuristic ([`Solver`]).
//!
//! Failure is always a value: a dead search branch reports
//! [`Contradiction`], an exhausted search reports
//! [`SolveError::Unsolvable`], and neither is ever surfaced as a panic.
//!
//! # Examples
//!
//! ```
//! use xudoku_core::{ReplayLog, Variant};
//! use xudoku_solver::solve_grid;
//!
//! let grid =
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";
//! let mut log = ReplayLog::new();
//! let solved = solve_grid(grid, Variant::Diagonal, &mut log)?;
//!
//! assert_eq!(solved.total_candidates(), 81);
//! assert!(!log.is_empty());
//! # Ok::<(), xudoku_solver::SolveError>(())
//! ```

use xudoku_core::ParseError;

pub mod reduce;
pub mod rule;
pub mod search;

pub use self::{
    reduce::reduce,
    search::{Solver, solve_grid},
};

/// Some cell's candidate set became empty during propagation.
///
/// This is the ordinary failure mode of a wrong guess: search treats it as
/// "this branch is dead" and backtracks. It is never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("a cell has no remaining candidates")]
pub struct Contradiction;

/// Failure to produce a solved board from a grid string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The grid string failed validation at the boundary.
    #[display("invalid grid: {_0}")]
    Parse(#[error(source)] ParseError),
    /// Every branch of the search space ended in a contradiction.
    #[display("puzzle has no solution")]
    Unsolvable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_converts() {
        let err = SolveError::from(ParseError::BadLength { len: 3 });
        assert_eq!(err, SolveError::Parse(ParseError::BadLength { len: 3 }));
        assert_eq!(err.to_string(), "invalid grid: grid must be exactly 81 characters, got 3");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Contradiction.to_string(),
            "a cell has no remaining candidates"
        );
        assert_eq!(SolveError::Unsolvable.to_string(), "puzzle has no solution");
    }
}
