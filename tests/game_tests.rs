use broadside::{
    AttackOutcome, GameError, GameMode, GameSession, Orientation, PlayerId, Roster, ShipClass,
    TurnController,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_roster_caps_at_two_players() {
    let mut roster = Roster::new();
    roster.create_player(PlayerId::Player1).unwrap();
    roster.create_player(PlayerId::Computer).unwrap();
    assert_eq!(
        roster.create_player(PlayerId::Player2),
        Err(GameError::RosterFull)
    );
    assert_eq!(roster.len(), 2);
    assert!(roster.lookup(PlayerId::Player2).is_none());

    roster.reset();
    assert!(roster.is_empty());
    assert!(roster.lookup(PlayerId::Player1).is_none());
}

#[test]
fn test_turn_controller_alternates_participants() {
    let mut turns = TurnController::new(GameMode::Single);
    assert_eq!(turns.current_player(), PlayerId::Player1);
    turns.advance();
    assert_eq!(turns.current_player(), PlayerId::Computer);
    turns.advance();
    assert_eq!(turns.current_player(), PlayerId::Player1);
}

#[test]
fn test_set_game_mode_resets_current_player() {
    let mut turns = TurnController::new(GameMode::Single);
    turns.advance();
    assert_eq!(turns.current_player(), PlayerId::Computer);
    turns.set_game_mode(GameMode::Multi);
    assert_eq!(turns.game_mode(), GameMode::Multi);
    assert_eq!(turns.current_player(), PlayerId::Player1);
    assert_eq!(turns.opponent_of(PlayerId::Player1), PlayerId::Player2);
}

#[test]
fn test_session_registers_mode_participants() {
    let session = GameSession::new(GameMode::Single);
    assert!(session.board(PlayerId::Player1).is_some());
    assert!(session.board(PlayerId::Computer).is_some());
    assert!(session.board(PlayerId::Player2).is_none());

    let multi = GameSession::new(GameMode::Multi);
    assert!(multi.board(PlayerId::Player2).is_some());
    assert!(multi.board(PlayerId::Computer).is_none());
}

#[test]
fn test_session_attack_passes_turn_on_landed_shot() {
    let mut session = GameSession::new(GameMode::Single);
    session
        .board_mut(PlayerId::Computer)
        .unwrap()
        .place(0, 0, ShipClass::new("Destroyer", 2), Orientation::Horizontal)
        .unwrap();

    assert_eq!(session.current_player(), PlayerId::Player1);
    let outcome = session.attack(5, 5);
    assert_eq!(outcome, AttackOutcome::Miss);
    assert_eq!(session.current_player(), PlayerId::Computer);
}

#[test]
fn test_session_ignored_attack_keeps_turn() {
    let mut session = GameSession::new(GameMode::Single);
    assert_eq!(session.attack(12, 0), AttackOutcome::Ignored);
    assert_eq!(session.current_player(), PlayerId::Player1);

    session.attack(5, 5); // miss, turn passes
    session.set_current_player(PlayerId::Player1);
    assert_eq!(session.attack(5, 5), AttackOutcome::Ignored);
    assert_eq!(session.current_player(), PlayerId::Player1);
}

#[test]
fn test_session_ready_and_winner() {
    let mut session = GameSession::new(GameMode::Single);
    let mut rng = SmallRng::seed_from_u64(7);
    assert!(!session.ready());
    session.place_randomly(PlayerId::Player1, &mut rng).unwrap();
    assert!(!session.ready());
    session.place_randomly(PlayerId::Computer, &mut rng).unwrap();
    assert!(session.ready());
    assert_eq!(session.winner(), None);

    // sink the computer fleet outright
    let targets: Vec<(usize, usize)> = session
        .board(PlayerId::Computer)
        .unwrap()
        .ships()
        .flat_map(|(_, ship)| ship.cells().to_vec())
        .collect();
    let board = session.board_mut(PlayerId::Computer).unwrap();
    for (r, c) in targets {
        board.receive_attack(r, c);
    }
    assert_eq!(session.winner(), Some(PlayerId::Player1));
}

#[test]
fn test_set_game_mode_wipes_boards() {
    let mut session = GameSession::new(GameMode::Single);
    let mut rng = SmallRng::seed_from_u64(3);
    session.place_randomly(PlayerId::Player1, &mut rng).unwrap();
    session.set_game_mode(GameMode::Multi);
    assert_eq!(session.board(PlayerId::Player1).unwrap().ship_count(), 0);
    assert_eq!(session.current_player(), PlayerId::Player1);
    assert!(session.board(PlayerId::Computer).is_none());
}

#[test]
fn test_opponent_turn_refused_in_multi_mode() {
    let mut session = GameSession::new(GameMode::Multi);
    let mut rng = SmallRng::seed_from_u64(11);
    assert!(session.opponent_take_turn(&mut rng).is_none());
}

#[test]
fn test_opponent_turn_reverts_control_to_human() {
    let mut session = GameSession::new(GameMode::Single);
    let mut rng = SmallRng::seed_from_u64(5);
    session.place_randomly(PlayerId::Player1, &mut rng).unwrap();
    session.set_current_player(PlayerId::Computer);
    let shot = session.opponent_take_turn(&mut rng);
    assert!(shot.is_some());
    assert_eq!(session.current_player(), PlayerId::Player1);
}

#[test]
fn test_place_randomly_unknown_player_errors() {
    let mut session = GameSession::new(GameMode::Single);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        session.place_randomly(PlayerId::Player2, &mut rng),
        Err(GameError::UnknownPlayer)
    );
}
