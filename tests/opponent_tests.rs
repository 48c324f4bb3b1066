//! Automated opponent tests against full sessions.

use connect_four::core::{GameConfig, GameRng, PlayerId};
use connect_four::error::MoveError;
use connect_four::opponent::{OpponentPolicy, UniformRandom};
use connect_four::rules::Status;
use connect_four::session::Session;

/// Always plays the leftmost open column.
struct Leftmost;

impl OpponentPolicy for Leftmost {
    fn choose_column(&self, session: &Session, _rng: &mut GameRng) -> Option<usize> {
        session.legal_columns().first().copied()
    }
}

/// Never picks a column.
struct Abstain;

impl OpponentPolicy for Abstain {
    fn choose_column(&self, _session: &Session, _rng: &mut GameRng) -> Option<usize> {
        None
    }
}

/// Play a human-vs-computer game where the human uses `human` as well.
fn play_out(session: &mut Session, human: &dyn OpponentPolicy, rng: &mut GameRng) -> Vec<usize> {
    let mut columns = Vec::new();
    while !session.is_terminal() {
        let result = if session.awaiting_automated() {
            session.play_automated(&UniformRandom, rng).unwrap()
        } else {
            let column = human.choose_column(session, rng).unwrap();
            session.human_drop(column).unwrap()
        };
        columns.push(result.placement.column);
    }
    columns
}

// =============================================================================
// Basic Policy Tests
// =============================================================================

#[test]
fn test_automated_move_returns_legal_column() {
    let mut session = Session::with_players("Ada", "Computer", true);
    session.drop(3).unwrap();

    let mut rng = GameRng::new(42);
    for _ in 0..100 {
        let column = session.automated_move(&UniformRandom, &mut rng).unwrap();
        assert!(session.legal_columns().contains(&column));
    }
    // Choosing never mutates.
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_uniform_avoids_full_columns() {
    let mut session = Session::with_players("Ada", "Computer", true);
    let mut rng = GameRng::new(11);

    // 41 drops with no line, leaving only column 0 open with Yellow to move.
    let columns = [
        4, 1, 6, 2, 1, 0, 1, 4, 4, 2, 4, 1, 3, 6, 3, 3, 1, 0, 4, 6, 6, 1, 2, 3, 6, 0, 6, 4, 2,
        5, 5, 3, 3, 2, 5, 5, 0, 2, 0, 5, 5,
    ];
    for column in columns {
        session.drop(column).unwrap();
    }
    assert_eq!(session.status(), Status::AwaitingMove(PlayerId::SECOND));
    assert_eq!(session.legal_columns().as_slice(), &[0]);

    for _ in 0..20 {
        assert_eq!(session.automated_move(&UniformRandom, &mut rng), Ok(0));
    }
}

#[test]
fn test_uniform_reaches_every_column() {
    let mut session = Session::with_players("Ada", "Computer", true);
    session.drop(0).unwrap();

    let mut rng = GameRng::new(2024);
    let mut seen = [false; 7];
    for _ in 0..500 {
        let column = session.automated_move(&UniformRandom, &mut rng).unwrap();
        seen[column] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

// =============================================================================
// Turn Gating
// =============================================================================

#[test]
fn test_automated_move_rejected_on_human_turn() {
    let session = Session::with_players("Ada", "Computer", true);
    let mut rng = GameRng::new(1);

    assert!(!session.awaiting_automated());
    assert_eq!(
        session.automated_move(&UniformRandom, &mut rng),
        Err(MoveError::NotAutomatedTurn)
    );
}

#[test]
fn test_automated_move_rejected_when_game_over() {
    let mut session = Session::with_players("Ada", "Computer", true);
    for column in [0, 1, 0, 1, 0, 1, 0] {
        session.drop(column).unwrap();
    }
    let mut rng = GameRng::new(1);

    assert_eq!(
        session.automated_move(&UniformRandom, &mut rng),
        Err(MoveError::GameOver)
    );
    assert_eq!(
        session.play_automated(&UniformRandom, &mut rng),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_policy_without_choice_is_not_game_over() {
    let mut session = Session::with_players("Ada", "Computer", true);
    let mut rng = GameRng::new(1);
    session.human_drop(3).unwrap();

    assert_eq!(
        session.automated_move(&Abstain, &mut rng),
        Err(MoveError::NoColumnChosen)
    );
    let before = session.clone();
    assert_eq!(
        session.play_automated(&Abstain, &mut rng),
        Err(MoveError::NoColumnChosen)
    );
    assert_eq!(session, before);
    assert!(!session.is_terminal());
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_automated_games_terminate() {
    for seed in 0..50 {
        let mut session = Session::new(GameConfig::from_entries("Ada", "")).unwrap();
        let mut rng = GameRng::new(seed);

        let columns = play_out(&mut session, &UniformRandom, &mut rng);

        assert!(session.is_terminal());
        assert!(columns.len() <= 42);
        assert_eq!(columns.len(), session.history().len());
        let wins: u32 = session.scores().iter().map(|(_, &s)| s).sum();
        assert_eq!(wins, u32::from(session.outcome().winner().is_some()));
    }
}

#[test]
fn test_automated_games_replay_with_same_seed() {
    let mut session1 = Session::with_players("Ada", "Computer", true);
    let mut session2 = Session::with_players("Ada", "Computer", true);

    let columns1 = play_out(&mut session1, &UniformRandom, &mut GameRng::new(99));
    let columns2 = play_out(&mut session2, &UniformRandom, &mut GameRng::new(99));

    assert_eq!(columns1, columns2);
    assert_eq!(session1, session2);
}

#[test]
fn test_rng_state_restore_replays_choices() {
    let mut session = Session::with_players("Ada", "Computer", true);
    session.drop(3).unwrap();

    let mut rng = GameRng::new(5);
    let saved = rng.state();
    let first: Vec<_> = (0..10)
        .map(|_| session.automated_move(&UniformRandom, &mut rng).unwrap())
        .collect();

    let mut restored = GameRng::from_state(&saved);
    let second: Vec<_> = (0..10)
        .map(|_| session.automated_move(&UniformRandom, &mut restored).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_custom_policy_plugs_in() {
    let mut session = Session::with_players("Ada", "Computer", true);
    let mut rng = GameRng::new(0);

    session.human_drop(6).unwrap();
    let result = session.play_automated(&Leftmost, &mut rng).unwrap();
    assert_eq!(result.placement.column, 0);
    assert_eq!(result.placement.player, PlayerId::SECOND);

    let boxed: Box<dyn OpponentPolicy> = Box::new(Leftmost);
    session.human_drop(6).unwrap();
    assert_eq!(session.automated_move(boxed.as_ref(), &mut rng), Ok(0));
}
