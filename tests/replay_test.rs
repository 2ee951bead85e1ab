//! Tests for headless replay scripts.

use tictactoe_engine::{Mark, Outcome};
use tictactoe_tui::{ReplayStep, run_script};

fn steps(text: &str) -> Vec<ReplayStep> {
    text.split_whitespace()
        .map(|s| s.parse().expect("valid step"))
        .collect()
}

#[test]
fn test_branching_script() {
    // Five moves, back to the start, then a fresh first move.
    let report = run_script(&steps("0 1 2 3 jump:0 4"));

    assert!(report.rejected.is_empty());
    assert_eq!(report.session.history, ["Go to game start", "Go to move #1"]);
    assert_eq!(report.session.board[4], Some(Mark::X));
    assert_eq!(report.session.current_player, Mark::O);
}

#[test]
fn test_multi_game_scoreboard() {
    let report = run_script(&steps(
        "0 1 4 2 8 new 0 1 2 4 3 7 new 0 1 2 4 3 5 7 6 8",
    ));

    assert!(report.rejected.is_empty());
    assert_eq!(report.session.outcome, Outcome::Draw);
    assert_eq!(report.session.score.x(), 1);
    assert_eq!(report.session.score.o(), 1);
    assert_eq!(report.session.score.draws(), 1);
}

#[test]
fn test_reset_scores_step() {
    let report = run_script(&steps("0 1 4 2 8 reset-scores"));
    assert_eq!(report.session.score.games(), 0);
    assert_eq!(report.session.outcome, Outcome::Win(Mark::X));
    assert_eq!(report.session.winning_line.map(|line| line.len()), Some(3));
}

#[test]
fn test_report_serializes_rejections() {
    let report = run_script(&steps("4 4 jump:7"));
    let json = serde_json::to_value(&report).expect("serializable");

    assert_eq!(json["applied"], 1);
    assert_eq!(json["rejected"][0]["step"], "4");
    assert_eq!(json["rejected"][1]["step"], "jump:7");
    assert_eq!(json["session"]["cursor"], 1);
}
