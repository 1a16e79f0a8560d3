//! Depth-first backtracking search over board clones.

use xudoku_core::{AssignmentSink, Board, Cell, ConstraintGraph, NullSink, Variant};

use crate::{SolveError, reduce::reduce};

/// A backtracking solver bound to a constraint graph and a history sink.
///
/// The graph is shared by reference; the sink is owned so a caller can hand
/// in a [`ReplayLog`], solve, and take it back with [`into_sink`]. Every
/// branch of the search works on its own clone of the board, so failed
/// guesses are discarded wholesale and sibling branches never see each
/// other's state.
///
/// [`ReplayLog`]: xudoku_core::ReplayLog
/// [`into_sink`]: Solver::into_sink
///
/// # Examples
///
/// ```
/// use xudoku_core::{Board, ConstraintGraph, Variant};
/// use xudoku_solver::Solver;
///
/// let grid =
///     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";
/// let graph = ConstraintGraph::new(Variant::Diagonal);
/// let board = Board::from_grid(grid)?;
///
/// let solved = Solver::new(&graph).solve(board)?;
/// assert!(solved.is_solved(&graph));
/// # Ok::<(), xudoku_solver::SolveError>(())
/// ```
#[derive(Debug)]
pub struct Solver<'g, S = NullSink> {
    graph: &'g ConstraintGraph,
    sink: S,
}

impl<'g> Solver<'g> {
    /// Creates a solver that discards assignment history.
    #[must_use]
    pub const fn new(graph: &'g ConstraintGraph) -> Self {
        Self {
            graph,
            sink: NullSink,
        }
    }
}

impl<'g, S: AssignmentSink> Solver<'g, S> {
    /// Creates a solver recording every assignment into `sink`.
    #[must_use]
    pub const fn with_sink(graph: &'g ConstraintGraph, sink: S) -> Self {
        Self { graph, sink }
    }

    /// Returns the history sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the solver and returns the history sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Solves the board, returning the first solution found.
    ///
    /// The search is deterministic: ties in the most-constrained-cell
    /// heuristic break toward the earliest cell in row-major order, and
    /// candidates are tried in ascending digit order.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Unsolvable`] when every branch of the search
    /// space ends in a contradiction.
    pub fn solve(&mut self, board: Board) -> Result<Board, SolveError> {
        self.search(board).ok_or(SolveError::Unsolvable)
    }

    /// One node of the search tree: propagate, then branch on the most
    /// constrained unsolved cell.
    fn search(&mut self, mut board: Board) -> Option<Board> {
        if reduce(self.graph, &mut board, &mut self.sink).is_err() {
            // A wrong guess upstream; this branch is dead.
            return None;
        }
        if board.is_complete() {
            return Some(board);
        }

        let cell = most_constrained(&board)?;
        for digit in board.get(cell) {
            let mut branch = board.clone();
            branch.assign(cell, digit, &mut self.sink);
            if let Some(solved) = self.search(branch) {
                return Some(solved);
            }
        }
        None
    }
}

/// Picks the unsolved cell with the fewest remaining candidates, scanning
/// in canonical row-major order so ties resolve to the earliest cell.
fn most_constrained(board: &Board) -> Option<Cell> {
    let mut best: Option<(usize, Cell)> = None;
    for cell in Cell::ALL {
        let len = board.get(cell).len();
        if len >= 2 && best.is_none_or(|(min, _)| len < min) {
            best = Some((len, cell));
        }
    }
    best.map(|(_, cell)| cell)
}

/// Parses and solves a grid string in one call.
///
/// Assignment history (including assignments inside abandoned search
/// branches) is delivered to `sink`.
///
/// # Errors
///
/// Returns [`SolveError::Parse`] for a malformed grid string and
/// [`SolveError::Unsolvable`] when the puzzle has no solution.
pub fn solve_grid<S: AssignmentSink>(
    grid: &str,
    variant: Variant,
    sink: &mut S,
) -> Result<Board, SolveError> {
    let board = Board::from_grid(grid)?;
    let graph = ConstraintGraph::new(variant);
    Solver::with_sink(&graph, sink).solve(board)
}

#[cfg(test)]
mod tests {
    use xudoku_core::{DigitSet, NullSink};

    use super::*;

    #[test]
    fn test_most_constrained_prefers_fewest_candidates() {
        let mut board = Board::new();
        let mut trim = |cell: Cell, n: usize| {
            for digit in xudoku_core::Digit::ALL.iter().take(9 - n) {
                board.eliminate(cell, *digit);
            }
        };
        trim(Cell::new(4, 4), 3);
        trim(Cell::new(7, 7), 2);

        assert_eq!(most_constrained(&board), Some(Cell::new(7, 7)));
    }

    #[test]
    fn test_most_constrained_breaks_ties_row_major() {
        let board = Board::new();
        // Everything holds nine candidates; the first cell wins.
        assert_eq!(most_constrained(&board), Some(Cell::new(0, 0)));
    }

    #[test]
    fn test_most_constrained_ignores_solved_and_empty_cells() {
        let mut board = Board::new();
        board.assign(Cell::new(0, 0), xudoku_core::Digit::D1, &mut NullSink);
        for digit in xudoku_core::Digit::ALL {
            board.eliminate(Cell::new(0, 1), digit);
        }

        assert_eq!(most_constrained(&board), Some(Cell::new(0, 2)));
    }

    #[test]
    fn test_most_constrained_none_when_complete() {
        let solved = Board::from_grid(
            "123456789456789123789123456214365897365897214897214365531642978642978531978531642",
        )
        .unwrap();
        assert_eq!(most_constrained(&solved), None);
        assert!(solved.get(Cell::new(0, 0)) == DigitSet::single_digit(xudoku_core::Digit::D1));
    }
}
