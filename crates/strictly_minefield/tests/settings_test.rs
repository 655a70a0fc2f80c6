//! Tests for settings validation at game construction.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_minefield::{ConfigErrorKind, Game, Position, Settings};

fn settings(board_size: i32, starting_lives: i32, starting_column: i32) -> Settings {
    Settings {
        board_size,
        starting_lives,
        starting_column,
        ..Settings::default()
    }
}

#[test]
fn test_invalid_settings_are_rejected() {
    let cases = [
        (-1, 1, 1),
        (1, -1, 1),
        (1, 1, -1),
        (0, 1, 1),
        (1, 0, 1),
        (1, 1, 0),
        (1, 1, 2),
        (27, 1, 1),
    ];

    for (board_size, lives, column) in cases {
        let mut rng = StdRng::seed_from_u64(0);
        let result = Game::new(settings(board_size, lives, column), None, &mut rng);
        assert!(
            result.is_err(),
            "expected rejection for size={board_size} lives={lives} column={column}"
        );
    }
}

#[test]
fn test_error_kinds_name_the_bad_field() {
    let err = settings(27, 1, 1).validate().unwrap_err();
    assert_eq!(err.kind(), &ConfigErrorKind::BoardSize(27));

    let err = settings(8, 0, 1).validate().unwrap_err();
    assert_eq!(err.kind(), &ConfigErrorKind::StartingLives(0));

    let err = settings(8, 3, 9).validate().unwrap_err();
    assert_eq!(
        err.kind(),
        &ConfigErrorKind::StartingColumn {
            column: 9,
            board_size: 8
        }
    );
    assert!(err.to_string().contains("starting column 9"));
}

#[test]
fn test_valid_settings_construct() {
    let mut rng = StdRng::seed_from_u64(0);
    let game = Game::new(settings(8, 2, 4), None, &mut rng).expect("valid settings");
    assert_eq!(game.lives_left(), 2);
    assert_eq!(game.player_position(), Position::new(4, 1));
    assert!(!game.status_line().trim().is_empty());
}

#[test]
fn test_extreme_board_sizes_are_valid() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(Game::new(settings(1, 1, 1), None, &mut rng).is_ok());
    assert!(Game::new(settings(26, 1, 26), None, &mut rng).is_ok());
}

#[test]
fn test_density_is_clamped_not_rejected() {
    let mut high = Settings {
        mine_density_percent: 150,
        ..Settings::default()
    };
    high.validate().expect("density is never an error");
    assert_eq!(high.mine_density_percent, 100);

    let mut low = Settings {
        mine_density_percent: -20,
        ..Settings::default()
    };
    low.validate().expect("density is never an error");
    assert_eq!(low.mine_density_percent, 0);
}

#[test]
fn test_initial_position_must_be_on_the_board() {
    let mut rng = StdRng::seed_from_u64(0);
    for position in [Position::new(0, 1), Position::new(9, 1), Position::new(4, 9)] {
        let err = Game::new(Settings::default(), Some(position), &mut rng).unwrap_err();
        assert!(matches!(
            err.kind(),
            ConfigErrorKind::InitialPosition { board_size: 8, .. }
        ));
    }
}

#[test]
fn test_initial_position_error_uses_board_label() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = Game::new(Settings::default(), Some(Position::new(9, 1)), &mut rng).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("initial position A9 must be on the 8x8 board"));
    assert!(!message.contains("Position {"));
}

#[test]
fn test_settings_deserialize_with_defaults() {
    let settings: Settings = serde_json::from_str(r#"{"board_size": 5}"#).expect("parse");
    assert_eq!(settings.board_size, 5);
    assert_eq!(settings.starting_lives, 3);
    assert_eq!(settings.starting_column, 4);
    assert_eq!(settings.seed, None);
}
