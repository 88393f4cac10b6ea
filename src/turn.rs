//! Turn state: game mode and the currently acting player.

use crate::player::PlayerId;

/// How the session is staffed: one human against the computer, or two
/// humans sharing a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Single,
    Multi,
}

impl GameMode {
    /// The two participants this mode is played between, first player
    /// first.
    pub fn participants(self) -> [PlayerId; 2] {
        match self {
            GameMode::Single => [PlayerId::Player1, PlayerId::Computer],
            GameMode::Multi => [PlayerId::Player1, PlayerId::Player2],
        }
    }
}

/// Tracks whose turn it is and under which mode. Turn alternation is
/// mechanical here; multi-mode hand-off confirmation between human
/// turns is a presentation concern.
pub struct TurnController {
    mode: GameMode,
    current: PlayerId,
}

impl TurnController {
    pub fn new(mode: GameMode) -> Self {
        TurnController {
            mode,
            current: mode.participants()[0],
        }
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Set the acting player directly. Not validated against the
    /// registered participants; callers keep the two in step.
    pub fn set_current_player(&mut self, identity: PlayerId) {
        self.current = identity;
    }

    pub fn game_mode(&self) -> GameMode {
        self.mode
    }

    /// Switch mode and reset the acting player to the mode's first
    /// participant.
    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.current = mode.participants()[0];
    }

    /// The participant opposing `identity` in the current mode. An
    /// identity outside the pair maps to the first participant.
    pub fn opponent_of(&self, identity: PlayerId) -> PlayerId {
        let [first, second] = self.mode.participants();
        if identity == first {
            second
        } else {
            first
        }
    }

    /// Hand the turn to the other participant.
    pub fn advance(&mut self) {
        self.current = self.opponent_of(self.current);
    }
}
