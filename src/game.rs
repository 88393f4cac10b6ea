//! Game session: one parameterized engine composing the player
//! registry, the turn controller and the opponent AI. A session owns
//! all of its state, so multiple games can run side by side.

use crate::ai::OpponentAi;
use crate::board::Board;
use crate::common::{AttackOutcome, GameError};
use crate::player::{PlayerId, Roster};
use crate::turn::{GameMode, TurnController};
use log::debug;
use rand::Rng;

pub struct GameSession {
    roster: Roster,
    turns: TurnController,
    opponent: OpponentAi,
}

impl GameSession {
    /// Start a session in the given mode with both participants
    /// registered on fresh boards.
    pub fn new(mode: GameMode) -> Self {
        let mut roster = Roster::new();
        for identity in mode.participants() {
            // A fresh roster has room for exactly these two.
            let _ = roster.create_player(identity);
        }
        GameSession {
            roster,
            turns: TurnController::new(mode),
            opponent: OpponentAi::new(),
        }
    }

    pub fn game_mode(&self) -> GameMode {
        self.turns.game_mode()
    }

    /// Switch mode: re-registers the new mode's participants on fresh
    /// boards, resets the acting player and clears hunt state.
    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.turns.set_game_mode(mode);
        self.roster.reset();
        for identity in mode.participants() {
            let _ = self.roster.create_player(identity);
        }
        self.opponent.reset();
        debug!("game mode set to {mode:?}");
    }

    pub fn current_player(&self) -> PlayerId {
        self.turns.current_player()
    }

    pub fn set_current_player(&mut self, identity: PlayerId) {
        self.turns.set_current_player(identity);
    }

    pub fn opponent_of(&self, identity: PlayerId) -> PlayerId {
        self.turns.opponent_of(identity)
    }

    pub fn board(&self, identity: PlayerId) -> Option<&Board> {
        self.roster.lookup(identity).map(|r| r.board())
    }

    pub fn board_mut(&mut self, identity: PlayerId) -> Option<&mut Board> {
        self.roster.lookup_mut(identity).map(|r| r.board_mut())
    }

    /// Place the full fleet at random on the given participant's board,
    /// replacing whatever was there.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        identity: PlayerId,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let record = self
            .roster
            .lookup_mut(identity)
            .ok_or(GameError::UnknownPlayer)?;
        record.reset_board();
        record.board_mut().place_randomly(rng)
    }

    /// True when every participant has the complete fleet placed.
    pub fn ready(&self) -> bool {
        !self.roster.is_empty() && self.roster.records().all(|r| r.board().all_ships_placed())
    }

    /// The current player fires at the opposing board. The turn passes
    /// to the defender once the attack actually lands; an ignored
    /// attack (out of bounds or repeated) leaves the turn in place.
    pub fn attack(&mut self, row: usize, col: usize) -> AttackOutcome {
        let defender = self.turns.opponent_of(self.turns.current_player());
        let outcome = match self.roster.lookup_mut(defender) {
            Some(record) => record.board_mut().receive_attack(row, col),
            None => AttackOutcome::Ignored,
        };
        if outcome != AttackOutcome::Ignored {
            self.turns.advance();
        }
        outcome
    }

    /// The computer fires one shot at the human board, then control
    /// reverts to the human whether or not a target was found. Only
    /// meaningful in single mode; a multi-mode session has no computer
    /// seat and this does nothing.
    pub fn opponent_take_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<((usize, usize), AttackOutcome)> {
        if self.turns.game_mode() != GameMode::Single {
            return None;
        }
        let human = self.turns.opponent_of(PlayerId::Computer);
        let record = self.roster.lookup_mut(human)?;
        let result = self.opponent.take_turn(record.board_mut(), rng);
        self.turns.set_current_player(human);
        result
    }

    /// The participant whose opponent's fleet is fully sunk, if the
    /// game has ended. Boards with no ships yet don't count as beaten.
    pub fn winner(&self) -> Option<PlayerId> {
        for record in self.roster.records() {
            if record.board().ship_count() > 0 && record.board().is_game_over() {
                return Some(self.turns.opponent_of(record.identity()));
            }
        }
        None
    }

    /// Tear the session back down to fresh boards and turn state in the
    /// current mode.
    pub fn reset(&mut self) {
        let mode = self.turns.game_mode();
        self.set_game_mode(mode);
    }
}
