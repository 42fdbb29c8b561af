//! Deduction rules.
//!
//! Each rule implements the [`Rule`] trait and performs one pass of a single
//! kind of deduction over a [`SolveState`]. Rules do not loop to their own
//! fixpoint; the [`Propagator`](crate::Propagator) re-applies them in rounds
//! until the whole rule set stalls.

use std::fmt::Debug;

pub use self::{eliminate::Eliminate, naked_twins::NakedTwins, only_choice::OnlyChoice};
use crate::{AssignmentLog, ContradictionError, SolveState};

mod eliminate;
mod naked_twins;
mod only_choice;

/// Returns the standard deduction rules in application order.
///
/// One propagation round applies [`Eliminate`], [`OnlyChoice`], and then
/// [`NakedTwins`]. All three converge to the same fixpoint regardless of
/// interleaving, so the order only affects how fast a round makes progress.
#[must_use]
pub fn standard_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(OnlyChoice::new()),
        Box::new(NakedTwins::new()),
    ]
}

/// A single kind of candidate deduction.
///
/// Applying a rule transforms the solve state in place; the search layer
/// isolates speculative branches by cloning the state, so from the caller's
/// perspective each application still behaves like a pure transformation of
/// one snapshot into the next.
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Applies one pass of the rule.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The pass removed at least one candidate
    /// * `Ok(false)` - The pass changed nothing (the rule is stalled)
    ///
    /// # Errors
    ///
    /// Returns [`ContradictionError`] the moment any cell's candidate set
    /// becomes empty; the state must not be used further on that branch.
    fn apply(
        &self,
        state: &mut SolveState<'_>,
        log: &mut AssignmentLog,
    ) -> Result<bool, ContradictionError>;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
