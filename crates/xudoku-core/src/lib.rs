//! Core data structures for grid-based constraint puzzles.
//!
//! This crate holds the data model shared by the xudoku solver and front
//! ends: type-safe digits and cells, bitset candidate/cell sets, the
//! constraint graph (units and peers, with or without the diagonal units),
//! the mutable candidate board, and the assignment-history seam.
//!
//! # Overview
//!
//! - [`digit`] / [`cell`]: type-safe identifiers for the 9 digits and the
//!   81 grid cells.
//! - [`digit_set`] / [`cell_set`]: bitset collections over those
//!   identifiers.
//! - [`graph`]: the static constraint structure: 29 units in diagonal
//!   mode (9 rows, 9 columns, 9 boxes, 2 diagonals), 27 in classic mode,
//!   plus precomputed per-cell peer sets.
//! - [`board`]: the evolving puzzle state (one candidate set per cell),
//!   grid-string decoding, and fixed-width rendering.
//! - [`history`]: the [`AssignmentSink`] collaborator notified at every
//!   committed single-value assignment.
//!
//! # Examples
//!
//! ```
//! use xudoku_core::{Board, Cell, ConstraintGraph, Digit, NullSink, Variant};
//!
//! let graph = ConstraintGraph::new(Variant::Diagonal);
//! let mut board = Board::new();
//!
//! board.assign(Cell::new(0, 0), Digit::D2, &mut NullSink);
//!
//! assert_eq!(board.solved_count(), 1);
//! assert_eq!(graph.peers(Cell::new(0, 0)).len(), 26);
//! ```

pub mod board;
pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod graph;
pub mod history;

// Re-export commonly used types
pub use self::{
    board::{Board, ParseError},
    cell::Cell,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    graph::{ConstraintGraph, Unit, UnitKind, Variant},
    history::{AssignmentSink, NullSink, ReplayLog},
};
