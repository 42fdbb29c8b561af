//! Core data structures for the diadoku solver.
//!
//! This crate provides the data model shared by the propagation and search
//! layers: digits, candidate bitsets, cell identifiers, the immutable
//! unit/peer topology, and the candidate/solved grid types with their
//! 81-character line encoding.
//!
//! # Overview
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`digit_set`]: 9-bit candidate sets per cell
//! - [`cell`] / [`cell_set`]: board positions and 81-bit position sets
//! - [`topology`]: rows, columns, boxes, optional diagonals, and the
//!   derived unit/peer relationships, built once and shared read-only
//! - [`grid`]: candidate state, solved grids, parsing and rendering
//!
//! # Examples
//!
//! ```
//! use diadoku_core::{CandidateGrid, Cell, Topology, Variant};
//!
//! let topology = Topology::new(Variant::Standard);
//! let grid: CandidateGrid =
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
//!         .parse()?;
//!
//! let a1 = Cell::from_name("A1").unwrap();
//! assert_eq!(topology.peers(a1).len(), 20);
//! assert_eq!(grid.solved_count(), 17);
//! # Ok::<(), diadoku_core::ParseGridError>(())
//! ```

pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod topology;

pub use self::{
    cell::Cell,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    grid::{CandidateGrid, ParseGridError, SolvedGrid},
    topology::{Topology, Unit, UnitKind, Variant},
};
