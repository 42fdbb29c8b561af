use diadoku_core::Digit;

use crate::{
    AssignmentLog, ContradictionError, SolveState,
    rule::{BoxedRule, Rule},
};

const NAME: &str = "only choice";

/// Finalizes digits that fit in only one cell of a unit.
///
/// For every unit and every digit, the rule scans which cells of the unit
/// still carry the digit as a candidate. When exactly one cell does, that
/// cell is forced to the digit. This is a strengthening assignment: the cell
/// does not need to have been ambiguous, since the unit-wide scan alone
/// proves the digit can go nowhere else.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice {}

impl OnlyChoice {
    /// Creates a new `OnlyChoice` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(
        &self,
        state: &mut SolveState<'_>,
        log: &mut AssignmentLog,
    ) -> Result<bool, ContradictionError> {
        let mut changed = false;
        let topology = state.topology();
        for unit in topology.units() {
            for digit in Digit::ALL {
                let mut carriers = unit
                    .cells()
                    .iter()
                    .filter(|&&cell| state.candidates(cell).contains(digit));
                if let (Some(&only), None) = (carriers.next(), carriers.next()) {
                    changed |= state.assign(only, digit, log);
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use diadoku_core::{CandidateGrid, Cell, DigitSet, Topology, Variant};

    use super::*;

    fn cell(name: &str) -> Cell {
        Cell::from_name(name).unwrap()
    }

    #[test]
    fn test_assigns_digit_with_single_carrier_in_row() {
        let topology = Topology::new(Variant::Standard);
        let mut grid = CandidateGrid::new();
        for c in topology.units()[0].cells() {
            if *c != cell("A4") {
                grid.remove_candidate(*c, Digit::D7);
            }
        }
        let mut state = SolveState::new(&topology, grid);
        let mut log = AssignmentLog::new();

        assert!(OnlyChoice::new().apply(&mut state, &mut log).unwrap());
        assert_eq!(state.candidates(cell("A4")).as_single(), Some(Digit::D7));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_strengthens_ambiguous_cell() {
        let topology = Topology::new(Variant::Standard);
        let mut grid = CandidateGrid::new();
        // D2 fits only in I9 within row I, even though I9 itself still
        // carries several candidates.
        for c in topology.units()[8].cells() {
            if *c != cell("I9") {
                grid.remove_candidate(*c, Digit::D2);
            }
        }
        grid.set_candidates(
            cell("I9"),
            DigitSet::from_iter([Digit::D2, Digit::D5, Digit::D8]),
        );
        let mut state = SolveState::new(&topology, grid);
        let mut log = AssignmentLog::new();

        assert!(OnlyChoice::new().apply(&mut state, &mut log).unwrap());
        assert_eq!(state.candidates(cell("I9")).as_single(), Some(Digit::D2));
    }

    #[test]
    fn test_no_change_on_open_grid() {
        let topology = Topology::new(Variant::Standard);
        let mut state = SolveState::new(&topology, CandidateGrid::new());
        let mut log = AssignmentLog::new();

        assert!(!OnlyChoice::new().apply(&mut state, &mut log).unwrap());
        assert!(log.is_empty());
    }

    #[test]
    fn test_applies_to_diagonal_units() {
        let topology = Topology::new(Variant::Diagonal);
        let mut grid = CandidateGrid::new();
        // Restrict D3 to E5 on the main diagonal only; rows, columns, and
        // boxes all still have several carriers.
        for c in topology.units()[27].cells() {
            if *c != cell("E5") {
                grid.remove_candidate(*c, Digit::D3);
            }
        }
        let mut state = SolveState::new(&topology, grid);
        let mut log = AssignmentLog::new();

        assert!(OnlyChoice::new().apply(&mut state, &mut log).unwrap());
        assert_eq!(state.candidates(cell("E5")).as_single(), Some(Digit::D3));
    }

    #[test]
    fn test_idempotent_once_stalled() {
        let topology = Topology::new(Variant::Standard);
        let mut grid = CandidateGrid::new();
        for c in topology.units()[0].cells() {
            if *c != cell("A4") {
                grid.remove_candidate(*c, Digit::D7);
            }
        }
        let mut state = SolveState::new(&topology, grid);
        let mut log = AssignmentLog::new();
        let rule = OnlyChoice::new();

        while rule.apply(&mut state, &mut log).unwrap() {}
        let before = *state.grid();
        assert!(!rule.apply(&mut state, &mut log).unwrap());
        assert_eq!(*state.grid(), before);
    }
}
