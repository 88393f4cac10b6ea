//! Shared result and error types: attack outcomes and game errors.

use crate::ship::ShipId;
use core::fmt;

/// Result of resolving one attack against a board.
///
/// `Ignored` covers every input the engine absorbs without changing
/// state: out-of-bounds coordinates, re-attacking a miss marker and
/// re-attacking an already-hit ship cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Attack struck open water; the cell is now marked as a miss.
    Miss,
    /// Attack struck an unhit segment of the given ship.
    Hit(ShipId),
    /// Attack struck the ship's last unhit segment, sinking it.
    Sunk(ShipId),
    /// Attack changed nothing; board state is exactly as before.
    Ignored,
}

/// Errors reported by placement and registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Ship extent does not fit on the board at the requested origin.
    OutOfBounds,
    /// A target cell is already occupied or marked.
    Overlap,
    /// A target cell touches another ship orthogonally or diagonally.
    TooClose,
    /// Random placement exhausted its attempt budget.
    UnableToPlaceShip,
    /// Registry already holds two players.
    RosterFull,
    /// No player registered under the given identity.
    UnknownPlayer,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::Overlap => write!(f, "Ship placement overlaps an occupied cell"),
            GameError::TooClose => write!(f, "Ship placement violates the 1-cell buffer rule"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship within attempt budget"),
            GameError::RosterFull => write!(f, "Both player slots are already taken"),
            GameError::UnknownPlayer => write!(f, "No player registered under that identity"),
        }
    }
}

impl std::error::Error for GameError {}
