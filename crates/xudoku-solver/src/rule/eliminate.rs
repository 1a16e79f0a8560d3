//! Elimination: solved cells forbid their digit in every peer.

use xudoku_core::{AssignmentSink, Board, Cell, ConstraintGraph, Digit};

use super::narrow;

/// Removes every solved cell's digit from the candidate sets of its peers.
///
/// The solved cells are snapshotted before any removal happens; a peer that
/// becomes solved during the pass cascades in a later round of the
/// reduction loop rather than within this pass.
pub fn eliminate<S: AssignmentSink + ?Sized>(
    graph: &ConstraintGraph,
    board: &mut Board,
    sink: &mut S,
) {
    let solved: Vec<(Cell, Digit)> = Cell::ALL
        .iter()
        .filter_map(|&cell| board.get(cell).single().map(|digit| (cell, digit)))
        .collect();

    for (cell, digit) in solved {
        for peer in graph.peers(cell) {
            narrow(board, peer, digit, sink);
        }
    }
}
