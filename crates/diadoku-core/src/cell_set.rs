//! Board-wide cell sets.
//!
//! This module provides [`CellSet`], an 81-bit set of [`Cell`]s backed by a
//! `u128`. Unit membership and peer relationships are stored as cell sets so
//! that "remove this digit from every peer" style operations stay cheap.

use std::{
    fmt::{self, Debug},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::cell::Cell;

/// A set of cells, one bit per board position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

const ALL_BITS: u128 = (1 << 81) - 1;

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 81 cells.
    pub const FULL: Self = Self { bits: ALL_BITS };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a cell into the set.
    pub const fn insert(&mut self, cell: Cell) {
        self.bits |= 1 << cell.index();
    }

    /// Removes a cell from the set.
    pub const fn remove(&mut self, cell: Cell) {
        self.bits &= !(1 << cell.index());
    }

    /// Returns `true` if the set contains the cell.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        self.bits & (1 << cell.index()) != 0
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the cells in linear index order.
    #[must_use]
    pub fn iter(self) -> Cells {
        Cells { bits: self.bits }
    }
}

impl Default for CellSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for CellSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = Cells;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellSet`], in linear index order.
#[derive(Debug, Clone)]
pub struct Cells {
    bits: u128,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Cell::new(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Cells {}
