//! Integration tests for board-analysis.
//!
//! The engine tests require Stockfish to be installed and available in PATH.
//! Run with: `cargo test -p board-analysis --test integration -- --ignored`

use std::sync::Arc;

use board_analysis::{
    analyze, Analysis, EngineSettings, EvaluationOutcome, Evaluator, MaterialBalance,
    PendingEvaluation, UciEvaluator,
};
use board_core::{Color, PieceSymbol, Position, Square};

/// Check if Stockfish is available in PATH.
fn stockfish_available() -> bool {
    std::process::Command::new("stockfish")
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .map(|mut child| {
            let _ = child.kill();
            let _ = child.wait();
        })
        .is_ok()
}

#[test]
fn test_scenario_fen_and_material() {
    let mut position = Position::empty();
    position.place(Square::E1, PieceSymbol::WhiteKing);
    position.place(Square::D1, PieceSymbol::WhiteQueen);
    position.place(Square::E8, PieceSymbol::BlackKing);

    match analyze(&position) {
        Analysis::Report(report) => {
            assert_eq!(report.fen, "4k3/8/8/8/8/8/8/3QK3 w KQkq - 0 1");
            assert_eq!(report.total(Color::White), 2);
            assert_eq!(report.total(Color::Black), 1);
            assert_eq!(report.balance(), MaterialBalance::White(9));
        }
        Analysis::EmptyBoard => panic!("board is not empty"),
    }
}

#[test]
fn test_loaded_empty_placement_reports_empty_board() {
    let mut position = Position::startpos();
    position.load_fen("8/8/8/8/8/8/8/8").unwrap();
    assert_eq!(analyze(&position), Analysis::EmptyBoard);
}

#[test]
fn test_report_serializes_to_json() {
    let Analysis::Report(report) = analyze(&Position::startpos()) else {
        panic!("startpos is not empty");
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["side_to_move"], "white");
    assert_eq!(json["white"]["pawn"], 8);
    assert_eq!(json["black"]["queen"], 1);
    assert_eq!(
        json["fen"],
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );
    assert_eq!(json["white_total"], 16);
    assert_eq!(json["black_material"], 39);
    assert_eq!(json["differential"], 0);
    assert_eq!(json["balance"]["side"], "equal");

    let balance = serde_json::to_value(MaterialBalance::Black(4)).unwrap();
    assert_eq!(balance["side"], "black");
    assert_eq!(balance["advantage"], 4);
}

#[test]
fn test_report_json_carries_material_summary() {
    let mut position = Position::empty();
    position.place(Square::E1, PieceSymbol::WhiteKing);
    position.place(Square::D1, PieceSymbol::WhiteQueen);
    position.place(Square::E8, PieceSymbol::BlackKing);
    let Analysis::Report(report) = analyze(&position) else {
        panic!("board has pieces");
    };

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["white_total"], 2);
    assert_eq!(json["black_total"], 1);
    assert_eq!(json["white_material"], 9);
    assert_eq!(json["black_material"], 0);
    assert_eq!(json["differential"], 9);
    assert_eq!(json["balance"]["side"], "white");
    assert_eq!(json["balance"]["advantage"], 9);
}

#[tokio::test]
#[ignore = "requires Stockfish"]
async fn test_stockfish_candidates_for_startpos() {
    if !stockfish_available() {
        eprintln!("Skipping test: Stockfish not available");
        return;
    }

    let evaluator = UciEvaluator::new(EngineSettings {
        depth: 8,
        candidates: 3,
        ..EngineSettings::default()
    });
    let candidates = evaluator
        .evaluate(&Position::startpos().to_fen())
        .await
        .expect("Failed to evaluate starting position");

    assert_eq!(candidates.len(), 3);
    for candidate in &candidates {
        assert!(candidate.notation.is_some());
        assert!(candidate.depth.unwrap_or(0) >= 8);
        assert!(!candidate.pv.is_empty());
    }
}

#[tokio::test]
#[ignore = "requires Stockfish"]
async fn test_stockfish_finds_mate_in_one() {
    if !stockfish_available() {
        eprintln!("Skipping test: Stockfish not available");
        return;
    }

    // White: Kg6, Qa1. Black: Kh8. Qa8# or Qh1#.
    let mut position = Position::empty();
    position.place(Square::from_algebraic("g6").unwrap(), PieceSymbol::WhiteKing);
    position.place(Square::A1, PieceSymbol::WhiteQueen);
    position.place(Square::H8, PieceSymbol::BlackKing);

    let evaluator: Arc<dyn Evaluator> = Arc::new(UciEvaluator::new(EngineSettings {
        depth: 6,
        candidates: 1,
        ..EngineSettings::default()
    }));
    let mut pending = PendingEvaluation::spawn(evaluator, position.to_fen());

    match pending.wait().await {
        EvaluationOutcome::Completed { candidates, .. } => {
            assert_eq!(candidates[0].mate(), Some(1));
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}
