//! Candidate grids, solved grids, and the 81-character line encoding.
//!
//! The line encoding assigns one character per cell in row-major order:
//! `'1'..='9'` for a given digit, `'.'` for an empty cell. Anything else is
//! a format error, reported before any solving begins.
//!
//! # Examples
//!
//! ```
//! use diadoku_core::{Cell, CandidateGrid, Digit};
//!
//! let grid: CandidateGrid = "..3.2.6..9..3.5..1..18.64....81.29..7.......\
//!                            8..67.82....26.95..8..2.3..9..5.1.3.."
//!     .parse()?;
//!
//! let a3 = Cell::from_name("A3").unwrap();
//! assert_eq!(grid.candidates(a3).as_single(), Some(Digit::D3));
//! # Ok::<(), diadoku_core::ParseGridError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet, topology::Topology};

/// The placeholder character for an empty cell in the line encoding.
pub const PLACEHOLDER: char = '.';

/// An error parsing the 81-character line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input is not exactly 81 characters long.
    #[display("grid must be exactly 81 characters, got {len}")]
    BadLength {
        /// The actual input length in characters.
        len: usize,
    },
    /// The input contains a character other than `'1'..='9'` or `'.'`.
    #[display("invalid grid character {found:?} at position {index}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Its 0-based position in the input.
        index: usize,
    },
}

/// Candidate state for all 81 cells.
///
/// Every cell maps to a [`DigitSet`] of candidates. A cell is *solved* when
/// its set is a singleton, and the grid is *complete* when every cell is
/// solved. An empty set is a contradiction; this type does not police that
/// itself, the solver layer detects it the moment an elimination produces
/// one.
///
/// The grid is a plain value (81 small bitsets), so cloning it per search
/// branch is cheap and keeps speculative branches fully isolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [DigitSet; 81],
}

impl CandidateGrid {
    /// Creates a grid with all nine candidates open in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Parses the 81-character line encoding.
    ///
    /// Given digits become singleton candidate sets; placeholders start with
    /// all nine candidates.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError`] if the input length is not 81 characters
    /// or any character is neither a digit `1`-`9` nor `'.'`. Nothing is
    /// partially constructed on error.
    pub fn from_line(line: &str) -> Result<Self, ParseGridError> {
        let len = line.chars().count();
        if len != 81 {
            return Err(ParseGridError::BadLength { len });
        }
        let mut cells = [DigitSet::FULL; 81];
        for (index, c) in line.chars().enumerate() {
            cells[index] = match Digit::from_char(c) {
                Some(digit) => DigitSet::singleton(digit),
                None if c == PLACEHOLDER => DigitSet::FULL,
                None => return Err(ParseGridError::InvalidCharacter { found: c, index }),
            };
        }
        Ok(Self { cells })
    }

    /// Renders the grid back into the line encoding.
    ///
    /// Solved cells render as their digit, open cells as `'.'`.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|set| set.as_single().map_or(PLACEHOLDER, Digit::as_char))
            .collect()
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[usize::from(cell.index())]
    }

    /// Replaces the candidate set of a cell.
    pub fn set_candidates(&mut self, cell: Cell, candidates: DigitSet) {
        self.cells[usize::from(cell.index())] = candidates;
    }

    /// Removes a candidate from a cell.
    ///
    /// Returns `true` if the candidate was present. May leave the cell's set
    /// empty; the caller is responsible for treating that as a
    /// contradiction.
    pub fn remove_candidate(&mut self, cell: Cell, digit: Digit) -> bool {
        self.cells[usize::from(cell.index())].remove(digit)
    }

    /// Forces a cell to a single digit.
    ///
    /// Returns `true` if the candidate set changed.
    pub fn assign(&mut self, cell: Cell, digit: Digit) -> bool {
        let singleton = DigitSet::singleton(digit);
        let slot = &mut self.cells[usize::from(cell.index())];
        let changed = *slot != singleton;
        *slot = singleton;
        changed
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns `true` if any cell has an empty candidate set.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|set| set.is_empty())
    }

    /// Returns `true` if every cell is solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|set| set.len() == 1)
    }

    /// Converts a complete grid into a [`SolvedGrid`].
    ///
    /// Returns `None` while any cell is still undetermined. Completeness is
    /// not the same as correctness; see [`SolvedGrid::is_valid`].
    #[must_use]
    pub fn to_solved(&self) -> Option<SolvedGrid> {
        let mut digits = [Digit::D1; 81];
        for (slot, set) in digits.iter_mut().zip(&self.cells) {
            *slot = set.as_single()?;
        }
        Some(SolvedGrid { cells: digits })
    }
}

impl Default for CandidateGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for CandidateGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

impl Display for CandidateGrid {
    /// Renders a 2-D view with every cell's remaining candidates, column
    /// width sized to the widest set, and `3×3` block separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + self.cells.iter().map(|set| set.len().max(1)).max().unwrap_or(1);
        let line = [
            "-".repeat(width * 3),
            "-".repeat(width * 3),
            "-".repeat(width * 3),
        ]
        .join("+");
        for cell in Cell::ALL {
            let text = self.candidates(cell).to_string();
            write!(f, "{text:^width$}")?;
            match cell.col() {
                2 | 5 => write!(f, "|")?,
                8 => {
                    writeln!(f)?;
                    if cell.row() == 2 || cell.row() == 5 {
                        writeln!(f, "{line}")?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// A fully determined grid: every cell maps to exactly one digit.
///
/// Produced by the solver on success. Being fully determined says nothing
/// about correctness on its own; [`is_valid`](Self::is_valid) performs the
/// per-unit distinctness verification against a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolvedGrid {
    cells: [Digit; 81],
}

impl SolvedGrid {
    /// Returns the digit of a cell.
    #[must_use]
    pub fn digit(&self, cell: Cell) -> Digit {
        self.cells[usize::from(cell.index())]
    }

    /// Renders the grid into the 81-character line encoding.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.cells.iter().copied().map(Digit::as_char).collect()
    }

    /// Verifies that every unit of `topology` holds nine distinct digits.
    ///
    /// This is the final correctness check, used to validate results rather
    /// than to produce them.
    #[must_use]
    pub fn is_valid(&self, topology: &Topology) -> bool {
        topology.units().iter().all(|unit| {
            let digits: DigitSet = unit.cells().iter().map(|&cell| self.digit(cell)).collect();
            digits.len() == 9
        })
    }
}

impl Display for SolvedGrid {
    /// Renders a 9×9 digit grid with `3×3` block separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::ALL {
            write!(f, " {}", self.digit(cell))?;
            match cell.col() {
                2 | 5 => write!(f, " |")?,
                8 => {
                    writeln!(f)?;
                    if cell.row() == 2 || cell.row() == 5 {
                        writeln!(f, "-------+-------+-------")?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}
