//! Cell identifiers for the 9×9 board.

use std::fmt::{self, Display};

/// One of the 81 cells of the board.
///
/// A cell is identified by its linear index in row-major order: index 0 is
/// the top-left cell, index 80 the bottom-right. The conventional name pairs
/// a row letter `A..=I` with a column digit `1..=9`, so index 0 is `A1` and
/// index 80 is `I9`.
///
/// The linear index order is the iteration order everywhere in the solver;
/// deterministic tie-breaks depend on it.
///
/// # Examples
///
/// ```
/// use diadoku_core::Cell;
///
/// let cell = Cell::from_row_col(0, 2);
/// assert_eq!(cell.to_string(), "A3");
/// assert_eq!(cell.index(), 2);
/// assert_eq!(cell.box_index(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    index: u8,
}

impl Cell {
    /// All 81 cells in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { index: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Creates a cell from its linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81);
        Self { index }
    }

    /// Creates a cell from 0-based row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self {
            index: row * 9 + col,
        }
    }

    /// Parses a conventional cell name like `A1` or `I9`.
    ///
    /// Returns `None` for anything that is not a row letter `A..=I`
    /// followed by a column digit `1..=9`.
    ///
    /// # Examples
    ///
    /// ```
    /// use diadoku_core::Cell;
    ///
    /// assert_eq!(Cell::from_name("E5"), Some(Cell::from_row_col(4, 4)));
    /// assert_eq!(Cell::from_name("J1"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let row = chars.next()?;
        let col = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !row.is_ascii_uppercase() || !col.is_ascii_digit() {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = ((row as u8).wrapping_sub(b'A'), (col as u8).wrapping_sub(b'1'));
        if row >= 9 || col >= 9 {
            return None;
        }
        Some(Self::from_row_col(row, col))
    }

    /// Returns the linear index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the 0-based row (0-8, top to bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / 9
    }

    /// Returns the 0-based column (0-8, left to right).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.index % 9
    }

    /// Returns the index of the 3×3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.row()) as char;
        let col = (b'1' + self.col()) as char;
        write!(f, "{row}{col}")
    }
}
