//! Append-only log of assignment snapshots.

use diadoku_core::CandidateGrid;

/// An ordered, append-only log of grid snapshots, one per finalized cell.
///
/// Every time a cell transitions to a single definite digit, whether by
/// propagation or by a search guess, the solver pushes a snapshot of the
/// whole candidate grid here, but only when the assignment actually changed
/// something. The log is write-only from the solver's perspective: nothing
/// in propagation or search reads it back, so it can never influence the
/// solving result. Consumers replay it for visualization.
///
/// One log is scoped to one solve invocation; create a fresh log per puzzle
/// instead of sharing one across solves.
///
/// # Examples
///
/// ```
/// use diadoku_core::Variant;
/// use diadoku_solver::{AssignmentLog, solve_with_log};
///
/// let mut log = AssignmentLog::new();
/// let puzzle =
///     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
/// let solution = solve_with_log(puzzle, Variant::Standard, &mut log)?;
///
/// assert!(solution.is_some());
/// assert!(!log.is_empty());
/// # Ok::<(), diadoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct AssignmentLog {
    snapshots: Vec<CandidateGrid>,
}

impl AssignmentLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot of the grid.
    ///
    /// Called by the solve state whenever a cell was just finalized.
    pub(crate) fn record(&mut self, grid: &CandidateGrid) {
        self.snapshots.push(*grid);
    }

    /// Returns all recorded snapshots in assignment order.
    ///
    /// Snapshots from abandoned search branches are included; a
    /// visualization replaying the log shows the solver backtracking.
    #[must_use]
    pub fn snapshots(&self) -> &[CandidateGrid] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_in_order() {
        let mut log = AssignmentLog::new();
        assert!(log.is_empty());

        let first = CandidateGrid::new();
        let mut second = CandidateGrid::new();
        second.assign(diadoku_core::Cell::new(0), diadoku_core::Digit::D1);

        log.record(&first);
        log.record(&second);

        assert_eq!(log.len(), 2);
        assert_eq!(log.snapshots()[0], first);
        assert_eq!(log.snapshots()[1], second);
    }
}
