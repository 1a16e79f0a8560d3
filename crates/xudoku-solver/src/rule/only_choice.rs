//! Only-choice: a digit with a single admitting cell in a unit goes there.

use xudoku_core::{AssignmentSink, Board, ConstraintGraph, Digit};

/// Assigns every digit that fits in exactly one cell of some unit.
///
/// Unlike elimination this can narrow a cell holding several candidates in
/// one step: if `7` appears nowhere else in the row, a cell holding `179`
/// becomes `7` directly. Cells already solved to the digit are skipped so
/// the history sink sees each assignment once.
pub fn only_choice<S: AssignmentSink + ?Sized>(
    graph: &ConstraintGraph,
    board: &mut Board,
    sink: &mut S,
) {
    for unit in graph.all_units() {
        for digit in Digit::ALL {
            let mut places = unit
                .cells()
                .iter()
                .filter(|&&cell| board.get(cell).contains(digit));
            if let Some(&cell) = places.next()
                && places.next().is_none()
                && !board.get(cell).is_single()
            {
                board.assign(cell, digit, sink);
            }
        }
    }
}
