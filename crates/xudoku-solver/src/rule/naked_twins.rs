//! Naked twins: a matching candidate pair claims its two digits for a line.

use tinyvec::ArrayVec;
use xudoku_core::{AssignmentSink, Board, ConstraintGraph, DigitSet};

use super::narrow;

/// Applies the naked-twins rule to every row and column unit, looping until
/// it stops making progress.
///
/// Two cells of a unit holding the same two-candidate set are "twins": those
/// two digits must land in the twin cells, so they are removed from every
/// other cell of the unit. Any cell whose set equals the pair exactly is
/// skipped, including a coincidental third pair-cell.
///
/// Boxes and diagonals are deliberately out of scope; the rule only scans
/// [`ConstraintGraph::line_units`].
pub fn naked_twins<S: AssignmentSink + ?Sized>(
    graph: &ConstraintGraph,
    board: &mut Board,
    sink: &mut S,
) {
    loop {
        let before = board.total_candidates();

        for unit in graph.line_units() {
            // Pair values seen once so far, and values confirmed as twins.
            let mut seen: ArrayVec<[DigitSet; 9]> = ArrayVec::new();
            let mut twins: ArrayVec<[DigitSet; 4]> = ArrayVec::new();
            for &cell in unit.cells() {
                let set = board.get(cell);
                if set.len() != 2 {
                    continue;
                }
                if seen.contains(&set) {
                    if !twins.contains(&set) {
                        twins.push(set);
                    }
                } else {
                    seen.push(set);
                }
            }

            for &twin in &twins {
                for &cell in unit.cells() {
                    if board.get(cell) == twin {
                        continue;
                    }
                    for digit in twin {
                        narrow(board, cell, digit, sink);
                    }
                }
            }
        }

        // Eliminations above can reveal new twins; go again until the
        // candidate total settles.
        if board.total_candidates() == before {
            break;
        }
    }
}
