//! Assignment history recording.
//!
//! Downstream consumers (replay, visualization) want the sequence of
//! single-value assignments made while solving, including those made inside
//! abandoned search branches. Rather than a global mutable log, the solve
//! path carries an [`AssignmentSink`]; [`Board::assign`] notifies it with a
//! snapshot of the whole board after every committed assignment.
//!
//! [`Board::assign`]: crate::Board::assign

use crate::board::Board;

/// A sink receiving a board snapshot at every committed assignment.
///
/// [`Board::assign`] is the only operation that notifies the sink; raw
/// candidate narrowing never does.
///
/// [`Board::assign`]: crate::Board::assign
pub trait AssignmentSink {
    /// Called with the full board immediately after an assignment commits.
    fn record(&mut self, board: &Board);
}

impl<'a, S: AssignmentSink + ?Sized> AssignmentSink for &'a mut S {
    fn record(&mut self, board: &Board) {
        (**self).record(board);
    }
}

/// A sink that discards every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AssignmentSink for NullSink {
    fn record(&mut self, _board: &Board) {}
}

/// A sink that keeps every snapshot for later replay.
///
/// # Examples
///
/// ```
/// use xudoku_core::{Board, Cell, Digit, ReplayLog};
///
/// let mut log = ReplayLog::new();
/// let mut board = Board::new();
/// board.assign(Cell::new(0, 0), Digit::D3, &mut log);
///
/// assert_eq!(log.snapshots().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReplayLog {
    snapshots: Vec<Board>,
}

impl ReplayLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded snapshots, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the number of recorded assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl AssignmentSink for ReplayLog {
    fn record(&mut self, board: &Board) {
        self.snapshots.push(board.clone());
    }
}
