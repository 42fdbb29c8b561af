//! Static board structure: units and peers.
//!
//! A *unit* is a group of 9 cells that must jointly contain every digit
//! exactly once: the 9 rows, 9 columns, 9 boxes, and (in the diagonal
//! variant) the two main diagonals. A *peer* of a cell is any other cell
//! sharing at least one unit with it.
//!
//! A [`Topology`] is built once per solve and never mutated afterwards; the
//! propagator and search layers read it through shared references. The unit
//! list order is deterministic (rows, then columns, then boxes, then
//! diagonals) because tie-breaks elsewhere depend on a stable iteration
//! order.
//!
//! # Examples
//!
//! ```
//! use diadoku_core::{Cell, Topology, Variant};
//!
//! let topology = Topology::new(Variant::Standard);
//! assert_eq!(topology.units().len(), 27);
//!
//! let a1 = Cell::from_name("A1").unwrap();
//! assert_eq!(topology.peers(a1).len(), 20);
//! ```

use tinyvec::ArrayVec;

use crate::{cell::Cell, cell_set::CellSet};

/// Which rule set the board uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Classic sudoku: rows, columns, and boxes.
    #[default]
    Standard,
    /// Diagonal sudoku: additionally, both main diagonals are units.
    Diagonal,
}

/// The kind of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// A row of 9 cells.
    Row,
    /// A column of 9 cells.
    Column,
    /// A 3×3 box of 9 cells.
    Box,
    /// One of the two main diagonals (diagonal variant only).
    Diagonal,
}

/// A group of exactly 9 cells that must contain each digit once.
#[derive(Debug, Clone, Copy)]
pub struct Unit {
    kind: UnitKind,
    cells: [Cell; 9],
    members: CellSet,
}

impl Unit {
    fn new(kind: UnitKind, cells: [Cell; 9]) -> Self {
        let members = cells.iter().copied().collect();
        Self {
            kind,
            cells,
            members,
        }
    }

    /// Returns the kind of this unit.
    #[must_use]
    pub const fn kind(self) -> UnitKind {
        self.kind
    }

    /// Returns the cells of this unit, in construction order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the cells of this unit as a set.
    #[must_use]
    pub const fn members(self) -> CellSet {
        self.members
    }
}

/// Per-cell list of unit ids.
///
/// A cell belongs to 3 units normally, 4 on one diagonal, and 5 at the
/// center where both diagonals cross.
type UnitIds = ArrayVec<[u8; 5]>;

/// Immutable unit/peer structure for one board variant.
#[derive(Debug, Clone)]
pub struct Topology {
    variant: Variant,
    units: Vec<Unit>,
    units_of: [UnitIds; 81],
    peers: [CellSet; 81],
}

/// Cartesian product of row and column coordinates, in row-major order.
///
/// This is how rows, columns, and boxes are assembled: a row unit crosses
/// one row coordinate with all nine columns, and so on.
fn cross(rows: &[u8], cols: &[u8]) -> Vec<Cell> {
    rows.iter()
        .flat_map(|&row| cols.iter().map(move |&col| Cell::from_row_col(row, col)))
        .collect()
}

fn unit_cells(cells: Vec<Cell>) -> [Cell; 9] {
    cells.try_into().expect("a unit has exactly 9 cells")
}

impl Topology {
    /// Builds the unit list and peer sets for the given variant.
    ///
    /// Purely deterministic construction from fixed inputs; there is nothing
    /// to fail. Unit order is rows (top to bottom), columns (left to right),
    /// boxes (left to right, top to bottom), then the top-left→bottom-right
    /// diagonal followed by the top-right→bottom-left one.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let all: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

        let mut units = Vec::with_capacity(29);
        for row in all {
            units.push(Unit::new(UnitKind::Row, unit_cells(cross(&[row], &all))));
        }
        for col in all {
            units.push(Unit::new(UnitKind::Column, unit_cells(cross(&all, &[col]))));
        }
        for band in [0, 3, 6] {
            for stack in [0, 3, 6] {
                let rows = [band, band + 1, band + 2];
                let cols = [stack, stack + 1, stack + 2];
                units.push(Unit::new(UnitKind::Box, unit_cells(cross(&rows, &cols))));
            }
        }
        if variant == Variant::Diagonal {
            let main = all.map(|i| Cell::from_row_col(i, i));
            let anti = all.map(|i| Cell::from_row_col(i, 8 - i));
            units.push(Unit::new(UnitKind::Diagonal, main));
            units.push(Unit::new(UnitKind::Diagonal, anti));
        }

        let mut units_of: [UnitIds; 81] = std::array::from_fn(|_| UnitIds::new());
        for (id, unit) in (0_u8..).zip(&units) {
            for cell in unit.cells() {
                units_of[usize::from(cell.index())].push(id);
            }
        }

        let mut peers = [CellSet::EMPTY; 81];
        for cell in Cell::ALL {
            let mut set = CellSet::EMPTY;
            for &id in &units_of[usize::from(cell.index())] {
                set |= units[usize::from(id)].members();
            }
            set.remove(cell);
            peers[usize::from(cell.index())] = set;
        }

        Self {
            variant,
            units,
            units_of,
            peers,
        }
    }

    /// Returns the variant this topology was built for.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns all units in deterministic order (27, or 29 with diagonals).
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the units containing `cell`, in unit-list order.
    pub fn units_of(&self, cell: Cell) -> impl Iterator<Item = &Unit> {
        self.units_of[usize::from(cell.index())]
            .iter()
            .map(|&id| &self.units[usize::from(id)])
    }

    /// Returns every cell sharing at least one unit with `cell`, excluding
    /// `cell` itself.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> CellSet {
        self.peers[usize::from(cell.index())]
    }
}
