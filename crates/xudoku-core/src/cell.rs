//! Cell identifiers for the 9x9 grid.

use std::fmt::{self, Display};

/// One of the 81 cells of the grid, addressed by (row, column).
///
/// Rows are conventionally named `A`-`I` and columns `1`-`9`; the
/// [`Display`] impl renders the familiar `"A1"` form. Internally a cell is a
/// row-major index 0-80, and [`Cell::ALL`] lists all cells in that canonical
/// order. Search depends on that order as the tie-break when several cells
/// share the minimum candidate count.
///
/// # Examples
///
/// ```
/// use xudoku_core::Cell;
///
/// let cell = Cell::new(0, 0);
/// assert_eq!(cell.to_string(), "A1");
///
/// let cell = Cell::new(4, 4);
/// assert_eq!(cell.to_string(), "E5");
/// assert_eq!(cell.box_index(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell(u8);

impl Cell {
    /// The number of cells on the grid.
    pub const COUNT: usize = 81;

    /// All 81 cells in canonical row-major order (`A1`..`A9`, `B1`..`I9`).
    pub const ALL: [Self; 81] = {
        let mut all = [Self(0); 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a cell from 0-based row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self(row * 9 + col)
    }

    /// Returns the 0-based row (0 = row `A`).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the 0-based column (0 = column `1`).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the index of the 3x3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns the row-major index 0-80.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn from_index(index: u8) -> Self {
        debug_assert!(index < 81);
        Self(index)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row()) as char, self.col() + 1)
    }
}
