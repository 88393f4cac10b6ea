//! Player registry: at most two records, each owning a board.

use crate::board::Board;
use crate::common::GameError;
use core::fmt;

/// Identity of a game participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Player1,
    Player2,
    Computer,
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Player1 => write!(f, "player 1"),
            PlayerId::Player2 => write!(f, "player 2"),
            PlayerId::Computer => write!(f, "computer"),
        }
    }
}

/// A registered participant and the board they defend.
pub struct PlayerRecord {
    identity: PlayerId,
    board: Board,
}

impl PlayerRecord {
    pub fn identity(&self) -> PlayerId {
        self.identity
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Swap in a fresh empty board (new game / ship reset).
    pub fn reset_board(&mut self) {
        self.board = Board::new();
    }
}

/// Registry of game participants. Holds zero, one or two records,
/// never more.
pub struct Roster {
    records: Vec<PlayerRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            records: Vec::with_capacity(2),
        }
    }

    /// Register a participant with a fresh empty board. Rejected
    /// without state change once two records exist.
    pub fn create_player(&mut self, identity: PlayerId) -> Result<(), GameError> {
        if self.records.len() == 2 {
            return Err(GameError::RosterFull);
        }
        self.records.push(PlayerRecord {
            identity,
            board: Board::new(),
        });
        Ok(())
    }

    /// Drop all records (mode switch / new game).
    pub fn reset(&mut self) {
        self.records.clear();
    }

    pub fn lookup(&self, identity: PlayerId) -> Option<&PlayerRecord> {
        self.records.iter().find(|r| r.identity == identity)
    }

    pub fn lookup_mut(&mut self, identity: PlayerId) -> Option<&mut PlayerRecord> {
        self.records.iter_mut().find(|r| r.identity == identity)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.records.iter()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new()
    }
}
