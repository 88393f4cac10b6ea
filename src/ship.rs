//! Ship entity: occupied cells in placement order with per-cell hit tracking.

use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Stable handle for a ship within a board's arena. Replaces the
/// object-reference identity the game logic needs for hit tracking and
/// hunt state; valid only for the board that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Arena index of this ship.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship on the board. Cells are stored in placement order, so the
/// first entry is the ship's start cell; `hit_flags` runs parallel to
/// `cells`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    cells: Vec<(usize, usize)>,
    hit_flags: Vec<bool>,
    hits: usize,
}

impl Ship {
    /// Create an unplaced ship; `Board::place` fills in its cells.
    pub(crate) fn new(class: ShipClass, orientation: Orientation) -> Self {
        debug_assert!(class.length() > 0);
        Ship {
            class,
            orientation,
            cells: Vec::with_capacity(class.length()),
            hit_flags: Vec::with_capacity(class.length()),
            hits: 0,
        }
    }

    /// Record one more occupied cell, preserving placement order.
    pub(crate) fn occupy(&mut self, row: usize, col: usize) {
        self.cells.push((row, col));
        self.hit_flags.push(false);
    }

    /// Register a hit at (`row`, `col`). Idempotent: a cell already hit
    /// stays hit and the count is unchanged. Coordinates the ship does
    /// not occupy are silently ignored. Returns `true` only when the
    /// call moved a cell from unhit to hit.
    pub fn hit(&mut self, row: usize, col: usize) -> bool {
        match self.cells.iter().position(|&cell| cell == (row, col)) {
            Some(i) if !self.hit_flags[i] => {
                self.hit_flags[i] = true;
                self.hits += 1;
                true
            }
            _ => false,
        }
    }

    /// Check if the ship is sunk (every occupied cell hit).
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.class.length()
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    pub fn length(&self) -> usize {
        self.class.length()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells in placement order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    pub fn is_cell_hit(&self, row: usize, col: usize) -> bool {
        self.cells
            .iter()
            .position(|&cell| cell == (row, col))
            .is_some_and(|i| self.hit_flags[i])
    }

    /// Cells that have been hit, in placement order.
    pub fn hit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .zip(&self.hit_flags)
            .filter(|(_, &hit)| hit)
            .map(|(&cell, _)| cell)
    }

    /// Cells that have not been hit yet, in placement order.
    pub fn unhit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .zip(&self.hit_flags)
            .filter(|(_, &hit)| !hit)
            .map(|(&cell, _)| cell)
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:?}, {}/{} hit)",
            self.class.name(),
            self.orientation,
            self.hits,
            self.class.length(),
        )
    }
}
