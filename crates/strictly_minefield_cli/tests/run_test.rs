//! Tests for scripted end-to-end runs.

use clap::Parser;
use strictly_minefield_cli::{Cli, RunOutcome, run};

fn cli(extra: &[&str]) -> (Cli, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("minefield.toml");
    let mut args = vec![
        "minefield".to_string(),
        "--config".to_string(),
        config.display().to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    (Cli::try_parse_from(args).expect("valid args"), dir)
}

fn play(extra: &[&str]) -> (RunOutcome, String) {
    let (cli, _dir) = cli(extra);
    let mut out = Vec::new();
    let outcome = run(&cli, &mut out).expect("run");
    (outcome, String::from_utf8(out).expect("utf8"))
}

#[test]
fn test_scripted_win() {
    let (outcome, text) = play(&["--density", "0", "--moves", "UUUUUUUU"]);
    assert_eq!(outcome, RunOutcome::Won);
    assert!(text.contains("Current Position: A4 | Lives Left 3 | Moves Made 0"));
    assert!(text.contains(
        "Moved:Up | Current Position: I4 | Lives Left 3 | Moves Made 8 | Congratulations, You Won!"
    ));
    assert!(text.contains("Game ended: Won after 8 moves"));
}

#[test]
fn test_script_running_out_leaves_game_unfinished() {
    let (outcome, text) = play(&["--density", "0", "--moves", "UR"]);
    assert_eq!(outcome, RunOutcome::Unfinished);
    assert!(text.contains("Game ended: InProgress after 2 moves"));
}

#[test]
fn test_exit_codes() {
    use std::process::ExitCode;
    assert_eq!(RunOutcome::Won.exit_code(), ExitCode::SUCCESS);
    assert_eq!(RunOutcome::Unfinished.exit_code(), ExitCode::SUCCESS);
    assert_eq!(RunOutcome::Lost.exit_code(), ExitCode::from(1));
    assert_eq!(RunOutcome::BadConfig.exit_code(), ExitCode::from(2));
}

#[test]
fn test_invalid_settings_stop_before_play() {
    let (outcome, text) = play(&["--board-size", "30", "--moves", "U"]);
    assert_eq!(outcome, RunOutcome::BadConfig);
    assert!(text.contains("board size 30"));
    assert!(!text.contains("Moved:"));
}

#[test]
fn test_json_summary() {
    let (_, text) = play(&["--density", "0", "--moves", "U", "--json"]);
    assert!(text.trim_end().ends_with(r#"{"progress":"InProgress","score":1}"#));
}
