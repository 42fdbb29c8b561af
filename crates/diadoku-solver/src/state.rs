//! Mutable solver state.

use diadoku_core::{CandidateGrid, Cell, Digit, DigitSet, Topology};

use crate::{AssignmentLog, ContradictionError};

/// The working state of one solve: a candidate grid plus the shared
/// read-only topology it is being solved against.
///
/// `SolveState` is the only surface deduction rules and the search layer use
/// to mutate candidates. Its mutation primitives centralize the two pieces
/// of bookkeeping the rules would otherwise each have to repeat: detecting
/// the contradiction sentinel (an emptied candidate set) and recording
/// assignment snapshots in the [`AssignmentLog`].
///
/// Cloning a `SolveState` clones the candidate grid but shares the
/// topology; the search layer clones before every speculative assignment so
/// a failed branch can never leak partial mutations into its siblings.
#[derive(Debug, Clone)]
pub struct SolveState<'t> {
    topology: &'t Topology,
    grid: CandidateGrid,
}

impl<'t> SolveState<'t> {
    /// Creates a state from a starting grid.
    #[must_use]
    pub const fn new(topology: &'t Topology, grid: CandidateGrid) -> Self {
        Self { topology, grid }
    }

    /// Returns the topology this state is solved against.
    #[must_use]
    pub const fn topology(&self) -> &'t Topology {
        self.topology
    }

    /// Returns the current candidate grid.
    #[must_use]
    pub const fn grid(&self) -> &CandidateGrid {
        &self.grid
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.grid.candidates(cell)
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.grid.solved_count()
    }

    /// Returns `true` if every cell is solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    /// Removes a candidate digit from a cell.
    ///
    /// Returns `Ok(true)` if the candidate was present and removed. When the
    /// removal leaves exactly one candidate, the cell was just solved and a
    /// snapshot is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictionError`] if the removal empties the cell's
    /// candidate set.
    pub fn eliminate(
        &mut self,
        cell: Cell,
        digit: Digit,
        log: &mut AssignmentLog,
    ) -> Result<bool, ContradictionError> {
        if !self.grid.remove_candidate(cell, digit) {
            return Ok(false);
        }
        let remaining = self.grid.candidates(cell);
        if remaining.is_empty() {
            return Err(ContradictionError { cell });
        }
        if remaining.len() == 1 {
            log.record(&self.grid);
        }
        Ok(true)
    }

    /// Forces a cell to a single digit.
    ///
    /// Returns `true` if the candidate set changed; a snapshot is recorded
    /// only in that case (no duplicate entries for no-op assignments).
    pub fn assign(&mut self, cell: Cell, digit: Digit, log: &mut AssignmentLog) -> bool {
        let changed = self.grid.assign(cell, digit);
        if changed {
            log.record(&self.grid);
        }
        changed
    }

    /// Returns the unsolved cell with the fewest candidates, or `None` if
    /// the grid is complete.
    ///
    /// Ties are broken by linear cell order, which keeps the search
    /// deterministic. This is the minimum-remaining-values heuristic:
    /// branching on the most constrained cell first keeps the search tree
    /// narrow.
    #[must_use]
    pub fn most_constrained_cell(&self) -> Option<Cell> {
        let mut best: Option<(usize, Cell)> = None;
        for cell in Cell::ALL {
            let len = self.candidates(cell).len();
            if len > 1 && best.is_none_or(|(best_len, _)| len < best_len) {
                if len == 2 {
                    return Some(cell);
                }
                best = Some((len, cell));
            }
        }
        best.map(|(_, cell)| cell)
    }
}
