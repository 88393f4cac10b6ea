//! Board state: the 10x10 cell grid, the ship arena, placement
//! validation with the 1-cell buffer rule, and attack resolution.

use crate::common::{AttackOutcome, GameError};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::{Orientation, Ship, ShipClass, ShipId};
use core::fmt;
use log::debug;
use rand::Rng;

/// Attempt budget per ship for random placement. The buffered fleet on
/// a 10x10 board places within a handful of draws in practice; the cap
/// turns a pathological loop into an error instead of a hang.
const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// An attack landed here and found no ship.
    Miss,
    /// Occupied by the ship with the given handle.
    Ship(ShipId),
}

/// A player's board: row-major grid plus the arena owning the ships
/// placed on it. Reset by replacing the whole board, never in place.
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::with_capacity(NUM_SHIPS),
        }
    }

    /// Read a cell; `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Look up a ship by handle.
    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// All ships placed so far, with their handles.
    pub fn ships(&self) -> impl Iterator<Item = (ShipId, &Ship)> {
        self.ships.iter().enumerate().map(|(i, s)| (ShipId(i), s))
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// True when the cell has already been attacked: a miss marker, or
    /// a ship segment that is already hit.
    pub fn already_attacked(&self, row: usize, col: usize) -> bool {
        match self.cell(row, col) {
            Some(Cell::Miss) => true,
            Some(Cell::Ship(id)) => self.ships[id.0].is_cell_hit(row, col),
            _ => false,
        }
    }

    /// Check whether a ship of `length` fits at (`row`, `col`) with
    /// `orientation`: in bounds, on empty cells, and no other ship in
    /// the 8-neighborhood of any target cell. Side-effect free.
    pub fn can_place(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        self.check_placement(row, col, length, orientation).is_ok()
    }

    fn check_placement(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if length == 0 || row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfBounds);
        }
        match orientation {
            Orientation::Horizontal if col + length > BOARD_SIZE => {
                return Err(GameError::OutOfBounds)
            }
            Orientation::Vertical if row + length > BOARD_SIZE => {
                return Err(GameError::OutOfBounds)
            }
            _ => {}
        }
        for (r, c) in extent(row, col, length, orientation) {
            if self.grid[r][c] != Cell::Empty {
                return Err(GameError::Overlap);
            }
        }
        // Buffer rule: no ship may sit orthogonally or diagonally next
        // to another, so every neighbor of every target cell must be
        // empty. Target cells themselves were just checked empty, so
        // they never trip this.
        for (r, c) in extent(row, col, length, orientation) {
            for (nr, nc) in neighbors(r, c) {
                if self.grid[nr][nc] != Cell::Empty {
                    return Err(GameError::TooClose);
                }
            }
        }
        Ok(())
    }

    /// Place a ship of the given class. All-or-nothing: on error the
    /// board is untouched and no ship is created. On success the new
    /// handle is written into each target cell in placement order and
    /// returned.
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        class: ShipClass,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        self.check_placement(row, col, class.length(), orientation)?;
        let id = ShipId(self.ships.len());
        let mut ship = Ship::new(class, orientation);
        for (r, c) in extent(row, col, class.length(), orientation) {
            ship.occupy(r, c);
            self.grid[r][c] = Cell::Ship(id);
        }
        self.ships.push(ship);
        debug!(
            "placed {} at ({}, {}) {:?}",
            class.name(),
            row,
            col,
            orientation
        );
        Ok(id)
    }

    /// Place the whole fleet at random, in fleet order. Each ship draws
    /// a fresh orientation and start position until a buffered spot is
    /// found; failed draws never disturb ships already placed. Errors
    /// only if a ship exhausts its attempt budget.
    pub fn place_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for class in FLEET {
            let mut placed = false;
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let orientation = if rng.random_bool(0.5) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let (max_row, max_col) = match orientation {
                    Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - class.length()),
                    Orientation::Vertical => (BOARD_SIZE - class.length(), BOARD_SIZE - 1),
                };
                let row = rng.random_range(0..=max_row);
                let col = rng.random_range(0..=max_col);
                if self.can_place(row, col, class.length(), orientation) {
                    self.place(row, col, class, orientation)?;
                    placed = true;
                    break;
                }
            }
            if !placed {
                return Err(GameError::UnableToPlaceShip);
            }
        }
        Ok(())
    }

    /// True when the placed ships match the required fleet composition
    /// exactly: one 5, one 4, two 3s, one 2.
    pub fn all_ships_placed(&self) -> bool {
        let mut placed: Vec<usize> = self.ships.iter().map(|s| s.length()).collect();
        let mut required: Vec<usize> = FLEET.iter().map(|c| c.length()).collect();
        placed.sort_unstable();
        required.sort_unstable();
        placed == required
    }

    /// Resolve an attack at (`row`, `col`). Out-of-bounds coordinates,
    /// repeated misses and repeated ship-cell hits change nothing and
    /// report `Ignored`; an already-hit ship cell still forwards to
    /// `Ship::hit`, which no-ops, whether or not the ship is sunk.
    pub fn receive_attack(&mut self, row: usize, col: usize) -> AttackOutcome {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return AttackOutcome::Ignored;
        }
        match self.grid[row][col] {
            Cell::Miss => AttackOutcome::Ignored,
            Cell::Empty => {
                self.grid[row][col] = Cell::Miss;
                AttackOutcome::Miss
            }
            Cell::Ship(id) => {
                let ship = &mut self.ships[id.0];
                if !ship.hit(row, col) {
                    return AttackOutcome::Ignored;
                }
                if ship.is_sunk() {
                    debug!("{} sunk", ship.name());
                    AttackOutcome::Sunk(id)
                } else {
                    AttackOutcome::Hit(id)
                }
            }
        }
    }

    /// True when every ship on the board is sunk. A board with no
    /// ships is vacuously over.
    pub fn is_game_over(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in 0..BOARD_SIZE {
            write!(f, "  ")?;
            for col in 0..BOARD_SIZE {
                let glyph = match self.grid[row][col] {
                    Cell::Empty => '.',
                    Cell::Miss => 'o',
                    Cell::Ship(id) if self.ships[id.0].is_cell_hit(row, col) => 'x',
                    Cell::Ship(_) => '#',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// Cells a ship of `length` occupies from (`row`, `col`), in placement
/// order. Callers guarantee the extent is in bounds.
fn extent(
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> impl Iterator<Item = (usize, usize)> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => (row, col + i),
        Orientation::Vertical => (row + i, col),
    })
}

/// In-bounds cells of the 8-neighborhood around (`row`, `col`).
fn neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    (-1..=1).flat_map(move |dr: isize| {
        (-1..=1).filter_map(move |dc: isize| {
            if dr == 0 && dc == 0 {
                return None;
            }
            let nr = row.checked_add_signed(dr)?;
            let nc = col.checked_add_signed(dc)?;
            (nr < BOARD_SIZE && nc < BOARD_SIZE).then_some((nr, nc))
        })
    })
}
