//! The propagation fixpoint loop.

use xudoku_core::{AssignmentSink, Board, ConstraintGraph};

use crate::{Contradiction, rule};

/// Runs the three rules to a fixpoint, or reports a contradiction.
///
/// Each round applies elimination, naked twins (itself looped to a
/// fixpoint), and only-choice. The round total of [`Board::total_candidates`]
/// is the progress signal: no rule ever grows a set, so an unchanged total
/// means nothing narrowed and the board is stable. A cell emptied during a
/// round aborts the loop immediately.
///
/// Propagation alone fully solves easy puzzles; harder ones stabilize with
/// multi-candidate cells left, which is where search takes over.
///
/// # Errors
///
/// Returns [`Contradiction`] if any cell ends a round with no candidates.
/// For search this is an ordinary dead branch, not a fatal error.
pub fn reduce<S: AssignmentSink + ?Sized>(
    graph: &ConstraintGraph,
    board: &mut Board,
    sink: &mut S,
) -> Result<(), Contradiction> {
    loop {
        let before = board.total_candidates();

        rule::eliminate(graph, board, sink);
        rule::naked_twins(graph, board, sink);
        rule::only_choice(graph, board, sink);

        if board.has_contradiction() {
            return Err(Contradiction);
        }
        if board.total_candidates() == before {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use xudoku_core::{Cell, NullSink, Variant};

    use super::*;

    // Solvable by propagation alone under classic rules.
    const EASY: &str =
        "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";

    #[test]
    fn test_propagation_solves_an_easy_puzzle() {
        let graph = ConstraintGraph::new(Variant::Classic);
        let mut board = Board::from_grid(EASY).unwrap();

        reduce(&graph, &mut board, &mut NullSink).unwrap();

        assert!(board.is_solved(&graph));
        assert_eq!(board.total_candidates(), 81);
    }

    // Needs search on top of propagation; reduce stops at a true fixpoint.
    const CANONICAL: &str =
        "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

    #[test]
    fn test_reduce_is_idempotent_at_a_fixpoint() {
        let graph = ConstraintGraph::new(Variant::Diagonal);
        let mut board = Board::from_grid(CANONICAL).unwrap();

        reduce(&graph, &mut board, &mut NullSink).unwrap();
        let settled = board.total_candidates();

        reduce(&graph, &mut board, &mut NullSink).unwrap();
        assert_eq!(board.total_candidates(), settled);
    }

    #[test]
    fn test_duplicate_givens_are_a_contradiction() {
        let graph = ConstraintGraph::new(Variant::Classic);
        let grid = format!("55{}", ".".repeat(79));
        let mut board = Board::from_grid(&grid).unwrap();

        assert_eq!(
            reduce(&graph, &mut board, &mut NullSink),
            Err(Contradiction)
        );
    }

    #[test]
    fn test_forced_empty_cell_is_a_contradiction() {
        let graph = ConstraintGraph::new(Variant::Classic);
        let mut board = Board::new();
        // A3 can only be 5, but two solved peers already claim 5.
        for digit in xudoku_core::Digit::ALL {
            if digit != xudoku_core::Digit::D5 {
                board.eliminate(Cell::new(0, 2), digit);
            }
        }
        board.assign(Cell::new(0, 0), xudoku_core::Digit::D5, &mut NullSink);
        board.assign(Cell::new(5, 2), xudoku_core::Digit::D5, &mut NullSink);

        assert_eq!(
            reduce(&graph, &mut board, &mut NullSink),
            Err(Contradiction)
        );
    }
}
