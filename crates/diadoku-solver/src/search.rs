//! Depth-first search over stalled grids.

use diadoku_core::{CandidateGrid, ParseGridError, SolvedGrid, Topology, Variant};
use log::debug;

use crate::{AssignmentLog, Propagator, SolveState};

/// A depth-first solver combining propagation with guess-and-check search.
///
/// Each search node first reduces the grid to the rules' fixpoint. A
/// contradicted branch is abandoned, a complete branch is the answer, and a
/// stalled branch picks the unsolved cell with the fewest candidates and
/// tries each of them in ascending digit order on a cloned state. Branches
/// never share mutations, so a failed guess costs nothing to undo.
///
/// The search returns the first solution found. Under-constrained puzzles
/// with several solutions yield whichever one the deterministic branch order
/// reaches first.
#[derive(Debug, Default, Clone)]
pub struct BacktrackSolver {
    propagator: Propagator,
}

impl BacktrackSolver {
    /// Creates a solver with an explicit propagator.
    #[must_use]
    pub const fn new(propagator: Propagator) -> Self {
        Self { propagator }
    }

    /// Creates a solver with the standard rules.
    #[must_use]
    pub fn with_standard_rules() -> Self {
        Self::new(Propagator::with_standard_rules())
    }

    /// Returns the propagator used at each search node.
    #[must_use]
    pub const fn propagator(&self) -> &Propagator {
        &self.propagator
    }

    /// Solves a grid, returning `None` if no solution exists.
    #[must_use]
    pub fn solve(
        &self,
        topology: &Topology,
        grid: &CandidateGrid,
        log: &mut AssignmentLog,
    ) -> Option<SolvedGrid> {
        let state = SolveState::new(topology, *grid);
        let solved = self.search(state, log)?;
        solved.grid().to_solved()
    }

    fn search<'t>(
        &self,
        mut state: SolveState<'t>,
        log: &mut AssignmentLog,
    ) -> Option<SolveState<'t>> {
        // A contradiction just prunes this branch; it is not an error of
        // the solve as a whole.
        let complete = self.propagator.reduce(&mut state, log).ok()?;
        if complete {
            return Some(state);
        }
        let cell = state.most_constrained_cell()?;
        for digit in state.candidates(cell) {
            debug!("guessing {digit} at {cell}");
            let mut branch = state.clone();
            branch.assign(cell, digit, log);
            if let Some(solved) = self.search(branch, log) {
                return Some(solved);
            }
        }
        None
    }
}

/// Solves a puzzle line with the standard rules.
///
/// Returns `Ok(None)` for a well-formed puzzle that has no solution.
///
/// # Errors
///
/// Returns [`ParseGridError`] if the input is not a valid 81-character
/// puzzle line.
///
/// # Examples
///
/// ```
/// use diadoku_core::Variant;
/// use diadoku_solver::solve;
///
/// let puzzle =
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
/// let solution = solve(puzzle, Variant::Standard)?.unwrap();
///
/// assert!(solution.to_line().starts_with("483921657"));
/// # Ok::<(), diadoku_core::ParseGridError>(())
/// ```
pub fn solve(input: &str, variant: Variant) -> Result<Option<SolvedGrid>, ParseGridError> {
    let mut log = AssignmentLog::new();
    solve_with_log(input, variant, &mut log)
}

/// [`solve`] with assignment logging for step-by-step replay.
///
/// # Errors
///
/// Returns [`ParseGridError`] if the input is not a valid 81-character
/// puzzle line.
pub fn solve_with_log(
    input: &str,
    variant: Variant,
    log: &mut AssignmentLog,
) -> Result<Option<SolvedGrid>, ParseGridError> {
    let grid: CandidateGrid = input.parse()?;
    let topology = Topology::new(variant);
    Ok(BacktrackSolver::with_standard_rules().solve(&topology, &grid, log))
}

#[cfg(test)]
mod tests {
    use diadoku_core::Cell;

    use super::*;
    use crate::testing::{DIAGONAL_FIXTURE, FIXTURE, FIXTURE_SOLVED};

    #[test]
    fn test_solve_fixture() {
        let solution = solve(FIXTURE, Variant::Standard).unwrap().unwrap();
        assert_eq!(solution.to_line(), FIXTURE_SOLVED);
    }

    #[test]
    fn test_solution_first_column() {
        let solution = solve(FIXTURE, Variant::Standard).unwrap().unwrap();
        let column: Vec<u8> = (0..9)
            .map(|row| solution.digit(Cell::from_row_col(row, 0)).value())
            .collect();
        assert_eq!(column, [4, 9, 2, 5, 7, 1, 3, 8, 6]);
    }

    #[test]
    fn test_unsolvable_is_none_not_error() {
        let input =
            "55...............................................................................";
        assert_eq!(solve(input, Variant::Standard).unwrap(), None);
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(solve("123", Variant::Standard).is_err());
        let bad =
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.x";
        assert!(solve(bad, Variant::Standard).is_err());
    }

    #[test]
    fn test_empty_grid_terminates_with_valid_solution() {
        let input = ".".repeat(81);
        let topology = Topology::new(Variant::Standard);
        let solution = solve(&input, Variant::Standard).unwrap().unwrap();
        assert!(solution.is_valid(&topology));
    }

    #[test]
    fn test_diagonal_fixture_requires_diagonal_units() {
        let topology = Topology::new(Variant::Diagonal);
        let solution = solve(DIAGONAL_FIXTURE, Variant::Diagonal).unwrap().unwrap();
        assert!(solution.is_valid(&topology));
    }

    #[test]
    fn test_second_diagonal_puzzle() {
        let input =
            "9.1....8.8.5.7..4.2.4....6...7......5..............83.3..6......9................";
        let topology = Topology::new(Variant::Diagonal);
        let solution = solve(input, Variant::Diagonal).unwrap().unwrap();
        assert!(solution.is_valid(&topology));
    }

    #[test]
    fn test_log_ends_with_complete_grid() {
        let mut log = AssignmentLog::new();
        let solution = solve_with_log(FIXTURE, Variant::Standard, &mut log)
            .unwrap()
            .unwrap();

        assert!(!log.is_empty());
        let last = log.snapshots().last().unwrap();
        assert!(last.is_complete());
        assert_eq!(last.to_line(), solution.to_line());
    }
}
