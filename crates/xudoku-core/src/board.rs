//! The evolving puzzle state: one candidate set per cell.

use std::fmt::{self, Display};

use crate::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    graph::ConstraintGraph,
    history::AssignmentSink,
};

/// Error decoding an 81-character grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The input was not exactly 81 characters long.
    #[display("grid must be exactly 81 characters, got {len}")]
    BadLength {
        /// Actual character count of the input.
        len: usize,
    },
    /// The input contained a character outside `{'.', '1'-'9'}`.
    #[display("invalid character {ch:?} at position {index}")]
    BadChar {
        /// The offending character.
        ch: char,
        /// Its 0-based position in the input.
        index: usize,
    },
}

/// A mapping from every cell to its current candidate set.
///
/// A cell is *solved* when exactly one candidate remains. An empty candidate
/// set means the surrounding assignment path is contradictory; boards are
/// never handed back to callers in that state, propagation reports the
/// contradiction instead.
///
/// Boards are cheap to clone; search clones one per branch so sibling
/// branches never alias.
///
/// # Examples
///
/// ```
/// use xudoku_core::{Board, Cell, Digit, NullSink};
///
/// let mut board = Board::new();
/// board.assign(Cell::new(0, 0), Digit::D3, &mut NullSink);
///
/// assert_eq!(board.get(Cell::new(0, 0)).single(), Some(Digit::D3));
/// assert_eq!(board.solved_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with every cell unconstrained (all nine candidates).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Decodes an 81-character grid string in row-major order.
    ///
    /// `.` marks an unknown cell (full candidate set); `1`-`9` mark givens.
    /// Givens are written directly and do not notify any history sink.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the input is not exactly 81 characters or
    /// contains a character outside `{'.', '1'-'9'}`.
    pub fn from_grid(grid: &str) -> Result<Self, ParseError> {
        let len = grid.chars().count();
        if len != Cell::COUNT {
            return Err(ParseError::BadLength { len });
        }

        let mut board = Self::new();
        for (index, ch) in grid.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let digit = Digit::from_char(ch).ok_or(ParseError::BadChar { ch, index })?;
            board.cells[index] = DigitSet::single_digit(digit);
        }
        Ok(board)
    }

    /// Returns the current candidate set of `cell`.
    #[must_use]
    pub const fn get(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Replaces the candidate set of `cell` with the single `digit` and
    /// notifies the sink with a snapshot of the updated board.
    ///
    /// This is the only operation that records history. Any narrowing that
    /// leaves a cell with exactly one candidate must go through here rather
    /// than through repeated [`eliminate`] calls, so replay logs stay
    /// accurate.
    ///
    /// [`eliminate`]: Board::eliminate
    pub fn assign<S: AssignmentSink + ?Sized>(&mut self, cell: Cell, digit: Digit, sink: &mut S) {
        self.cells[cell.index()] = DigitSet::single_digit(digit);
        sink.record(self);
    }

    /// Removes `digit` from the candidate set of `cell` if present.
    ///
    /// Returns `true` if the set changed. May leave the cell empty; callers
    /// detect that as a contradiction.
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) -> bool {
        let set = &mut self.cells[cell.index()];
        let had = set.contains(digit);
        set.remove(digit);
        had
    }

    /// Returns the number of solved cells (candidate set of size one).
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.is_single()).count()
    }

    /// Returns the sum of candidate-set sizes over all cells.
    ///
    /// Equals 81 exactly when the board is fully solved. Propagation uses
    /// this as its fixpoint signal: a pass that changes nothing leaves the
    /// total unchanged, and no rule ever grows a set.
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.cells.iter().map(DigitSet::len).sum()
    }

    /// Returns `true` if every cell is solved.
    ///
    /// Completeness alone does not prove validity; see
    /// [`is_solved`](Board::is_solved).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(DigitSet::is_single)
    }

    /// Returns `true` if any cell has an empty candidate set.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(DigitSet::is_empty)
    }

    /// Returns `true` if every cell is solved and every unit of `graph`
    /// contains all nine digits exactly once.
    #[must_use]
    pub fn is_solved(&self, graph: &ConstraintGraph) -> bool {
        self.is_complete()
            && graph.all_units().iter().all(|unit| {
                let seen: DigitSet = unit
                    .cells()
                    .iter()
                    .map(|&cell| self.get(cell))
                    .fold(DigitSet::EMPTY, |acc, set| acc | set);
                seen == DigitSet::FULL
            })
    }

    /// Returns the solved digit of `cell`, or `None` if it still holds
    /// several (or zero) candidates.
    #[must_use]
    pub fn solved_digit(&self, cell: Cell) -> Option<Digit> {
        self.get(cell).single()
    }
}

impl Display for Board {
    /// Renders the board as a fixed-width 9x9 grid with `3x3` box
    /// separators: a `|` after columns 3 and 6 and a dashed rule after rows
    /// `C` and `F`. Column width adapts to the widest candidate set so
    /// partially solved boards stay readable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + self.cells.iter().map(DigitSet::len).max().unwrap_or(0);
        let band = "-".repeat(width * 3);
        let rule = format!("{band}+{band}+{band}");

        for row in 0..9 {
            for col in 0..9 {
                let set = self.get(Cell::new(row, col)).to_string();
                write!(f, "{set:^width$}")?;
                if col == 2 || col == 5 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "{rule}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::Variant, history::NullSink};

    const SOLVED_CLASSIC: &str =
        "123456789456789123789123456214365897365897214897214365531642978642978531978531642";

    #[test]
    fn test_from_grid_decodes_givens_and_blanks() {
        let grid = format!("2.3{}", ".".repeat(78));
        let board = Board::from_grid(&grid).unwrap();
        assert_eq!(board.get(Cell::new(0, 0)).single(), Some(Digit::D2));
        assert_eq!(board.get(Cell::new(0, 1)), DigitSet::FULL);
        assert_eq!(board.get(Cell::new(0, 2)).single(), Some(Digit::D3));
        assert_eq!(board.solved_count(), 2);
    }

    #[test]
    fn test_from_grid_rejects_bad_length() {
        assert_eq!(
            Board::from_grid("123"),
            Err(ParseError::BadLength { len: 3 })
        );
        let long = ".".repeat(82);
        assert_eq!(
            Board::from_grid(&long),
            Err(ParseError::BadLength { len: 82 })
        );
    }

    #[test]
    fn test_from_grid_rejects_bad_char() {
        let grid = format!("..0{}", ".".repeat(78));
        assert_eq!(
            Board::from_grid(&grid),
            Err(ParseError::BadChar { ch: '0', index: 2 })
        );
        let grid = format!("{}x", ".".repeat(80));
        assert_eq!(
            Board::from_grid(&grid),
            Err(ParseError::BadChar { ch: 'x', index: 80 })
        );
    }

    #[test]
    fn test_assign_replaces_set() {
        let mut board = Board::new();
        let cell = Cell::new(4, 4);
        board.assign(cell, Digit::D7, &mut NullSink);
        assert_eq!(board.get(cell), DigitSet::single_digit(Digit::D7));
    }

    #[test]
    fn test_eliminate_reports_change() {
        let mut board = Board::new();
        let cell = Cell::new(0, 0);
        assert!(board.eliminate(cell, Digit::D5));
        assert!(!board.eliminate(cell, Digit::D5));
        assert_eq!(board.get(cell).len(), 8);
    }

    #[test]
    fn test_counts() {
        let board = Board::new();
        assert_eq!(board.solved_count(), 0);
        assert_eq!(board.total_candidates(), 81 * 9);

        let solved = Board::from_grid(SOLVED_CLASSIC).unwrap();
        assert_eq!(solved.solved_count(), 81);
        assert_eq!(solved.total_candidates(), 81);
        assert!(solved.is_complete());
    }

    #[test]
    fn test_contradiction_detection() {
        let mut board = Board::new();
        let cell = Cell::new(3, 3);
        for digit in Digit::ALL {
            board.eliminate(cell, digit);
        }
        assert!(board.has_contradiction());
        assert!(!board.is_complete());
    }

    #[test]
    fn test_is_solved_checks_units() {
        let solved = Board::from_grid(SOLVED_CLASSIC).unwrap();
        let classic = ConstraintGraph::new(Variant::Classic);
        let diagonal = ConstraintGraph::new(Variant::Diagonal);

        assert!(solved.is_solved(&classic));
        // The same filling repeats digits on the main diagonal, so it is not
        // a valid diagonal solution.
        assert!(!solved.is_solved(&diagonal));

        // A complete board with a duplicated digit is not solved.
        let mut broken = solved.clone();
        broken.assign(Cell::new(0, 0), Digit::D2, &mut NullSink);
        assert!(broken.is_complete());
        assert!(!broken.is_solved(&classic));
    }

    #[test]
    fn test_render_solved_grid() {
        let solved = Board::from_grid(SOLVED_CLASSIC).unwrap();
        let rendered = solved.to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "1 2 3 |4 5 6 |7 8 9 ");
        assert_eq!(lines[3], "------+------+------");
        assert_eq!(lines[7], "------+------+------");
    }

    #[test]
    fn test_render_width_follows_widest_cell() {
        let board = Board::new();
        let lines: Vec<String> = board.to_string().lines().map(String::from).collect();
        // Nine candidates plus one padding space, plus two separators.
        assert_eq!(lines[0].len(), 9 * 10 + 2);
    }
}
