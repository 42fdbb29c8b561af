//! Fixpoint constraint propagation.

use log::trace;

use crate::{
    AssignmentLog, ContradictionError, SolveState,
    rule::{BoxedRule, standard_rules},
};

/// Applies a set of deduction rules in rounds until none makes progress.
///
/// One round applies each rule once, in order. Rounds repeat as long as the
/// grid keeps changing; when a full round changes nothing the grid has
/// reached the rules' fixpoint and control returns to the caller, solved or
/// stalled.
///
/// # Examples
///
/// ```
/// use diadoku_core::{CandidateGrid, Topology, Variant};
/// use diadoku_solver::{AssignmentLog, Propagator, SolveState};
///
/// let topology = Topology::new(Variant::Standard);
/// let grid: CandidateGrid =
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
///         .parse()?;
/// let mut state = SolveState::new(&topology, grid);
/// let mut log = AssignmentLog::new();
///
/// let propagator = Propagator::with_standard_rules();
/// let complete = propagator.reduce(&mut state, &mut log)?;
///
/// assert!(complete);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Propagator {
    rules: Vec<BoxedRule>,
}

impl Propagator {
    /// Creates a propagator from an explicit rule list.
    #[must_use]
    pub const fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Creates a propagator with the standard rules.
    #[must_use]
    pub fn with_standard_rules() -> Self {
        Self::new(standard_rules())
    }

    /// Returns the rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Creates a zeroed stats record matching this propagator's rule list.
    #[must_use]
    pub fn new_stats(&self) -> PropagatorStats {
        PropagatorStats {
            applications: vec![0; self.rules.len()],
            rounds: 0,
        }
    }

    /// Reduces the state to the rules' fixpoint.
    ///
    /// Returns `Ok(true)` if the grid is complete afterwards and `Ok(false)`
    /// if propagation stalled with cells still open.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictionError`] if any rule empties a candidate set.
    /// The state is then partially mutated and must be discarded.
    pub fn reduce(
        &self,
        state: &mut SolveState<'_>,
        log: &mut AssignmentLog,
    ) -> Result<bool, ContradictionError> {
        let mut stats = self.new_stats();
        self.reduce_with_stats(state, log, &mut stats)
    }

    /// [`reduce`](Self::reduce) with per-rule application counting.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictionError`] if any rule empties a candidate set.
    pub fn reduce_with_stats(
        &self,
        state: &mut SolveState<'_>,
        log: &mut AssignmentLog,
        stats: &mut PropagatorStats,
    ) -> Result<bool, ContradictionError> {
        loop {
            let mut round_changed = false;
            for (i, rule) in self.rules.iter().enumerate() {
                let changed = rule.apply(state, log)?;
                if changed {
                    stats.applications[i] += 1;
                    round_changed = true;
                    trace!(
                        "rule {} made progress, {} cells solved",
                        rule.name(),
                        state.solved_count()
                    );
                }
            }
            if !round_changed {
                return Ok(state.is_complete());
            }
            stats.rounds += 1;
        }
    }
}

impl Default for Propagator {
    fn default() -> Self {
        Self::with_standard_rules()
    }
}

/// Counters describing one propagation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropagatorStats {
    applications: Vec<usize>,
    rounds: usize,
}

impl PropagatorStats {
    /// Returns how many times each rule made progress, aligned with the
    /// propagator's rule order.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the number of rounds that changed the grid.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns `true` if any rule made progress.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.applications.iter().any(|&n| n > 0)
    }
}

#[cfg(test)]
mod tests {
    use diadoku_core::{Topology, Variant};

    use super::*;
    use crate::testing::{FIXTURE, FIXTURE_SOLVED, state_from_line};

    #[test]
    fn test_fixture_solved_by_propagation_alone() {
        let topology = Topology::new(Variant::Standard);
        let mut state = state_from_line(FIXTURE, &topology);
        let mut log = AssignmentLog::new();

        let complete = Propagator::with_standard_rules()
            .reduce(&mut state, &mut log)
            .unwrap();

        assert!(complete);
        assert_eq!(state.grid().to_line(), FIXTURE_SOLVED);
        assert!(!log.is_empty());
    }

    #[test]
    fn test_solved_grid_reports_complete_without_progress() {
        let topology = Topology::new(Variant::Standard);
        let mut state = state_from_line(FIXTURE_SOLVED, &topology);
        let mut log = AssignmentLog::new();
        let propagator = Propagator::with_standard_rules();
        let mut stats = propagator.new_stats();

        let complete = propagator
            .reduce_with_stats(&mut state, &mut log, &mut stats)
            .unwrap();

        assert!(complete);
        assert!(!stats.has_progress());
        assert_eq!(stats.rounds(), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_reduce_is_idempotent_at_fixpoint() {
        let topology = Topology::new(Variant::Standard);
        // Too few givens to solve by deduction; reduce stalls.
        let mut state = state_from_line(
            "4................................................................................",
            &topology,
        );
        let mut log = AssignmentLog::new();
        let propagator = Propagator::with_standard_rules();

        assert!(!propagator.reduce(&mut state, &mut log).unwrap());
        let fixpoint = *state.grid();
        assert!(!propagator.reduce(&mut state, &mut log).unwrap());
        assert_eq!(*state.grid(), fixpoint);
    }

    #[test]
    fn test_contradiction_propagates_out() {
        let topology = Topology::new(Variant::Standard);
        let mut state = state_from_line(
            "55...............................................................................",
            &topology,
        );
        let mut log = AssignmentLog::new();

        let err = Propagator::with_standard_rules()
            .reduce(&mut state, &mut log)
            .unwrap_err();
        assert_eq!(err.cell.to_string(), "A2");
    }

    #[test]
    fn test_stats_track_rule_order() {
        let topology = Topology::new(Variant::Standard);
        let mut state = state_from_line(FIXTURE, &topology);
        let mut log = AssignmentLog::new();
        let propagator = Propagator::with_standard_rules();
        let mut stats = propagator.new_stats();

        propagator
            .reduce_with_stats(&mut state, &mut log, &mut stats)
            .unwrap();

        assert_eq!(stats.applications().len(), propagator.rules().len());
        // Elimination always fires on a fresh puzzle with givens.
        assert!(stats.applications()[0] > 0);
        assert!(stats.rounds() > 0);
    }
}
