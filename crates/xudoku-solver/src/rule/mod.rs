//! The three local-consistency rules.
//!
//! Each rule is a pass over the board that only ever narrows candidate
//! sets. The [`reduce`] loop runs them in a fixed order until none of them
//! makes progress.
//!
//! [`reduce`]: crate::reduce::reduce

use xudoku_core::{AssignmentSink, Board, Cell, Digit};

mod eliminate;
mod naked_twins;
mod only_choice;

pub use self::{eliminate::eliminate, naked_twins::naked_twins, only_choice::only_choice};

/// Removes `digit` from the candidate set of `cell`.
///
/// A removal that leaves exactly one candidate is an assignment and is
/// routed through [`Board::assign`] so the replay log stays accurate. A
/// removal that empties the cell goes through [`Board::eliminate`]; the
/// contradiction is picked up by the reduction loop.
pub(crate) fn narrow<S: AssignmentSink + ?Sized>(
    board: &mut Board,
    cell: Cell,
    digit: Digit,
    sink: &mut S,
) -> bool {
    let set = board.get(cell);
    if !set.contains(digit) {
        return false;
    }
    match set.removed(digit).single() {
        Some(last) => board.assign(cell, last, sink),
        None => {
            board.eliminate(cell, digit);
        }
    }
    true
}
