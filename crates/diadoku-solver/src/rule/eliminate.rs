use diadoku_core::Cell;

use crate::{
    AssignmentLog, ContradictionError, SolveState,
    rule::{BoxedRule, Rule},
};

const NAME: &str = "eliminate";

/// Removes every solved cell's digit from the candidate sets of its peers.
///
/// One pass visits all cells in linear order. A removal can newly solve a
/// peer, and the freshly solved peer's own eliminations are only picked up
/// when it is visited, later in the same pass if its index is higher and
/// otherwise in the next round. A single pass is therefore not guaranteed to
/// reach the elimination fixpoint on its own; the propagator re-applies it.
///
/// The rule never touches the solved cell's own candidate set. If a peer was
/// itself solved with the same digit, removing it empties that peer's set,
/// which is the contradiction signal for an over-constrained grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate {}

impl Eliminate {
    /// Creates a new `Eliminate` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for Eliminate {
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
        for cell in Cell::ALL {
            let Some(digit) = state.candidates(cell).as_single() else {
                continue;
            };
            for peer in state.topology().peers(cell) {
                changed |= state.eliminate(peer, digit, log)?;
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use diadoku_core::{Cell, Digit, DigitSet, Topology, Variant};

    use super::*;
    use crate::testing::{FIXTURE, state_from_line};

    fn cell(name: &str) -> Cell {
        Cell::from_name(name).unwrap()
    }

    #[test]
    fn test_fixture_first_pass() {
        let topology = Topology::new(Variant::Standard);
        let mut state = state_from_line(FIXTURE, &topology);
        let mut log = AssignmentLog::new();

        assert!(Eliminate::new().apply(&mut state, &mut log).unwrap());

        // A1 sees 3, 2, 6 in its row, 9, 7, 8 in its column, and 9, 1 in
        // its box, leaving exactly {4, 5}.
        assert_eq!(
            state.candidates(cell("A1")),
            DigitSet::from_iter([Digit::D4, Digit::D5])
        );
        // A solved cell's own candidate set is never reduced.
        assert_eq!(state.candidates(cell("A3")), DigitSet::singleton(Digit::D3));
    }

    #[test]
    fn test_removes_only_from_peers() {
        let topology = Topology::new(Variant::Standard);
        let mut state = state_from_line(
            "5................................................................................",
            &topology,
        );
        let mut log = AssignmentLog::new();

        Eliminate::new().apply(&mut state, &mut log).unwrap();

        // Peers of A1 lose digit 5.
        assert!(!state.candidates(cell("A9")).contains(Digit::D5));
        assert!(!state.candidates(cell("I1")).contains(Digit::D5));
        assert!(!state.candidates(cell("C3")).contains(Digit::D5));
        // Non-peers keep the full set.
        assert_eq!(state.candidates(cell("B4")), DigitSet::FULL);
        assert_eq!(state.candidates(cell("I9")), DigitSet::FULL);
    }

    #[test]
    fn test_diagonal_peers_participate() {
        let topology = Topology::new(Variant::Diagonal);
        let mut state = state_from_line(
            "5................................................................................",
            &topology,
        );
        let mut log = AssignmentLog::new();

        Eliminate::new().apply(&mut state, &mut log).unwrap();

        // I9 shares the main diagonal with A1 in the diagonal variant.
        assert!(!state.candidates(cell("I9")).contains(Digit::D5));
        assert!(!state.candidates(cell("E5")).contains(Digit::D5));
    }

    #[test]
    fn test_duplicate_givens_in_unit_contradict() {
        let topology = Topology::new(Variant::Standard);
        let mut state = state_from_line(
            "55...............................................................................",
            &topology,
        );
        let mut log = AssignmentLog::new();

        let err = Eliminate::new().apply(&mut state, &mut log).unwrap_err();
        assert_eq!(err.cell, cell("A2"));
    }

    #[test]
    fn test_stalled_pass_reports_no_change() {
        let topology = Topology::new(Variant::Standard);
        let mut state = state_from_line(FIXTURE, &topology);
        let mut log = AssignmentLog::new();
        let rule = Eliminate::new();

        while rule.apply(&mut state, &mut log).unwrap() {}
        let before = *state.grid();
        assert!(!rule.apply(&mut state, &mut log).unwrap());
        assert_eq!(*state.grid(), before);
    }
}
