//! Shared fixtures for unit tests.

use diadoku_core::{CandidateGrid, Topology};

use crate::SolveState;

/// A standard puzzle solvable by propagation alone.
pub(crate) const FIXTURE: &str =
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";

/// The unique solution of [`FIXTURE`].
pub(crate) const FIXTURE_SOLVED: &str =
    "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

/// A diagonal puzzle with 17 givens; unsolvable without the diagonal units.
pub(crate) const DIAGONAL_FIXTURE: &str =
    "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

/// Parses a puzzle line into a fresh solve state.
///
/// # Panics
///
/// Panics if the line is not a valid 81-character puzzle.
pub(crate) fn state_from_line<'t>(line: &str, topology: &'t Topology) -> SolveState<'t> {
    let grid: CandidateGrid = line.parse().unwrap();
    SolveState::new(topology, grid)
}
