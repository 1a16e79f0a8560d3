//! The constraint graph: units and peers.
//!
//! A *unit* is an ordered group of nine cells that must jointly contain
//! every digit 1-9 exactly once. The *peers* of a cell are all cells that
//! share at least one unit with it. Both are computed once when a
//! [`ConstraintGraph`] is built and are read-only afterwards, so a single
//! graph can be shared by reference across any number of boards.

use tinyvec::ArrayVec;

use crate::{cell::Cell, cell_set::CellSet};

/// Which rule set the grid is played under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Classic sudoku: 9 rows, 9 columns, and 9 boxes (27 units).
    Classic,
    /// Diagonal sudoku: the classic units plus the two main diagonals
    /// (29 units).
    #[default]
    Diagonal,
}

/// The role a unit plays on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// A horizontal row.
    Row,
    /// A vertical column.
    Column,
    /// A 3x3 box.
    Box,
    /// One of the two main diagonals.
    Diagonal,
}

/// An ordered group of nine cells constrained to hold each digit once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    kind: UnitKind,
    cells: [Cell; 9],
}

impl Unit {
    const fn new(kind: UnitKind, cells: [Cell; 9]) -> Self {
        Self { kind, cells }
    }

    /// Returns the role of this unit.
    #[must_use]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Returns the nine member cells, in unit order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns `true` if `cell` belongs to this unit.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// Static description of the grid's constraint structure.
///
/// Holds the full unit list, the units containing each cell, and the
/// deduplicated peer set of each cell. Unit order is rows 0-8, columns 0-8,
/// boxes 0-8, then (diagonal variant only) the top-left to bottom-right
/// diagonal followed by the top-right to bottom-left diagonal.
///
/// # Examples
///
/// ```
/// use xudoku_core::{Cell, ConstraintGraph, Variant};
///
/// let graph = ConstraintGraph::new(Variant::Diagonal);
/// assert_eq!(graph.all_units().len(), 29);
///
/// // A corner cell on the main diagonal sees its row, column, box, and
/// // diagonal.
/// assert_eq!(graph.units_of(Cell::new(0, 0)).count(), 4);
/// assert_eq!(graph.peers(Cell::new(0, 0)).len(), 26);
///
/// // An off-diagonal cell sees only row, column, and box.
/// assert_eq!(graph.units_of(Cell::new(0, 1)).count(), 3);
/// assert_eq!(graph.peers(Cell::new(0, 1)).len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    variant: Variant,
    units: Vec<Unit>,
    // The center cell lies on both diagonals, so a cell can belong to up to
    // five units.
    containing: [ArrayVec<[u8; 5]>; 81],
    peers: [CellSet; 81],
}

impl ConstraintGraph {
    /// Builds the constraint graph for the given variant.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let mut units = Vec::with_capacity(29);
        for row in 0..9 {
            units.push(Unit::new(
                UnitKind::Row,
                std::array::from_fn(|col| Cell::new(row, col as u8)),
            ));
        }
        for col in 0..9 {
            units.push(Unit::new(
                UnitKind::Column,
                std::array::from_fn(|row| Cell::new(row as u8, col)),
            ));
        }
        for box_index in 0..9 {
            units.push(Unit::new(
                UnitKind::Box,
                std::array::from_fn(|i| {
                    let i = i as u8;
                    Cell::new((box_index / 3) * 3 + i / 3, (box_index % 3) * 3 + i % 3)
                }),
            ));
        }
        if variant == Variant::Diagonal {
            units.push(Unit::new(
                UnitKind::Diagonal,
                std::array::from_fn(|i| Cell::new(i as u8, i as u8)),
            ));
            units.push(Unit::new(
                UnitKind::Diagonal,
                std::array::from_fn(|i| Cell::new(8 - i as u8, i as u8)),
            ));
        }

        let mut containing = [ArrayVec::new(); 81];
        let mut peers = [CellSet::EMPTY; 81];
        for (id, unit) in (0u8..).zip(&units) {
            for &cell in unit.cells() {
                containing[cell.index()].push(id);
                for &other in unit.cells() {
                    if other != cell {
                        peers[cell.index()].insert(other);
                    }
                }
            }
        }

        Self {
            variant,
            units,
            containing,
            peers,
        }
    }

    /// Returns the variant this graph was built for.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the full ordered unit list (27 or 29 units).
    #[must_use]
    pub fn all_units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the 18 row and column units.
    ///
    /// The naked-twins rule is restricted to these; boxes and diagonals are
    /// deliberately excluded.
    #[must_use]
    pub fn line_units(&self) -> &[Unit] {
        &self.units[..18]
    }

    /// Returns the units containing `cell`: row, column, box, and any
    /// diagonal units the cell lies on (3 to 5 in total).
    pub fn units_of(&self, cell: Cell) -> impl Iterator<Item = &Unit> {
        self.containing[cell.index()]
            .iter()
            .map(|&id| &self.units[usize::from(id)])
    }

    /// Returns every cell sharing at least one unit with `cell`, excluding
    /// `cell` itself.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> CellSet {
        self.peers[cell.index()]
    }
}
