//! Constraint-propagation and search solver for standard and diagonal
//! puzzles.
//!
//! Solving proceeds in two layers. The [`Propagator`] repeatedly applies
//! deduction [rules](crate::rule) until the grid stops changing, and the
//! [`BacktrackSolver`] handles stalled grids by guessing a digit in the most
//! constrained cell and recursing on a cloned state. Every cell
//! finalization is recorded in an [`AssignmentLog`] for later replay.
//!
//! # Examples
//!
//! ```
//! use diadoku_core::Variant;
//! use diadoku_solver::solve;
//!
//! let puzzle =
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";
//! let solution = solve(puzzle, Variant::Diagonal)?.expect("puzzle has a solution");
//!
//! println!("{solution}");
//! # Ok::<(), diadoku_core::ParseGridError>(())
//! ```

pub use self::{
    assignment_log::AssignmentLog,
    error::ContradictionError,
    propagator::{Propagator, PropagatorStats},
    rule::{BoxedRule, Rule, standard_rules},
    search::{BacktrackSolver, solve, solve_with_log},
    state::SolveState,
};

mod assignment_log;
mod error;
mod propagator;
pub mod rule;
mod search;
mod state;
#[cfg(test)]
mod testing;
