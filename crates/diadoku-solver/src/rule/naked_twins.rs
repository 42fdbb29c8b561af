use diadoku_core::DigitSet;

use crate::{
    AssignmentLog, ContradictionError, SolveState,
    rule::{BoxedRule, Rule},
};

const NAME: &str = "naked twins";

/// Eliminates candidates locked up by a pair of twin cells.
///
/// Two cells of the same unit whose candidate sets are the same two digits
/// must take those two digits between them, so no other cell of the unit can
/// take either. The rule scans each unit for candidate pairs shared by
/// exactly two cells and removes both digits from the rest of the unit.
///
/// Three or more cells sharing the same pair are left alone. That grid is
/// already contradictory, and the contradiction surfaces on its own once
/// other deductions shrink one of the cells to a single digit.
///
/// Twins are scoped to a single unit. Two cells with matching pairs that
/// share no unit constrain nothing, and a pair found in one unit only
/// eliminates within that unit even if the twins also share another.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins {}

impl NakedTwins {
    /// Creates a new `NakedTwins` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for NakedTwins {
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
            let mut pairs: Vec<DigitSet> = unit
                .cells()
                .iter()
                .map(|&cell| state.candidates(cell))
                .filter(|set| set.len() == 2)
                .collect();
            pairs.sort_unstable();
            pairs.dedup();

            for pair in pairs {
                let twins = unit
                    .cells()
                    .iter()
                    .filter(|&&cell| state.candidates(cell) == pair)
                    .count();
                if twins != 2 {
                    continue;
                }
                for &cell in unit.cells() {
                    // Solved cells and the twins themselves keep their sets.
                    if state.candidates(cell) == pair || state.candidates(cell).len() <= 1 {
                        continue;
                    }
                    for digit in pair {
                        changed |= state.eliminate(cell, digit, log)?;
                    }
                }
            }
        }
        Ok(changed)
    }
}
