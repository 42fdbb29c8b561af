use diadoku_core::Cell;

/// A cell's candidate set became empty during propagation.
///
/// This is a branch-local signal, not a program fault: the search layer
/// treats it as "this hypothesis is unsatisfiable" and moves on to the next
/// candidate digit. It only surfaces as the final no-solution outcome when
/// every branch at every level has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell {cell} has no remaining candidates")]
pub struct ContradictionError {
    /// The cell whose candidate set was emptied.
    pub cell: Cell,
}
