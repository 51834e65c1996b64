//! Text rendering of boards, reports and engine suggestions.

use std::fmt::Write;

use board_analysis::{Analysis, AnalysisReport, CandidateMove, EvaluationOutcome, MaterialBalance};
use board_core::{Board, Color, Square};

/// Shown instead of statistics when the board has no pieces.
pub const EMPTY_BOARD_MESSAGE: &str =
    "The board is empty. Place some pieces or reset to the start position.";

/// Draws the board with rank and file labels, eighth rank on top.
///
/// Empty squares are shown as `·`.
pub fn board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..8u8 {
        let rank = 8 - row;
        let _ = write!(out, "{} ", rank);
        for (col, piece) in board.row(row).iter().enumerate() {
            if col > 0 {
                out.push(' ');
            }
            out.push(piece.map_or('·', |p| p.glyph()));
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");
    out
}

/// Formats an analysis result.
pub fn analysis(analysis: &Analysis) -> String {
    match analysis {
        Analysis::EmptyBoard => EMPTY_BOARD_MESSAGE.to_string(),
        Analysis::Report(report) => report_text(report),
    }
}

fn report_text(report: &AnalysisReport) -> String {
    let mut out = String::from("Current position:\n");
    let _ = writeln!(out, "Turn: {}", report.side_to_move);
    let _ = writeln!(out, "White pieces: {}", report.total(Color::White));
    let _ = writeln!(out, "Black pieces: {}", report.total(Color::Black));
    let _ = writeln!(out, "White: {}", report.white);
    let _ = writeln!(out, "Black: {}", report.black);
    match report.balance() {
        MaterialBalance::Equal => out.push_str("Material: Equal\n"),
        balance => {
            let _ = writeln!(out, "Material advantage: {}", balance);
        }
    }
    let _ = write!(out, "FEN: {}", report.fen);
    out
}

/// Formats engine suggestions, best first.
pub fn candidates(fen: &str, candidates: &[CandidateMove]) -> String {
    if candidates.is_empty() {
        return format!("Engine found no moves for {}", fen);
    }

    let mut out = format!("Engine suggestions for {}:", fen);
    for (i, candidate) in candidates.iter().enumerate() {
        let _ = write!(
            out,
            "\n  {}. {}",
            i + 1,
            candidate.notation.as_deref().unwrap_or("?")
        );
        if let Some(evaluation) = candidate.evaluation {
            let _ = write!(out, "  {}", evaluation);
        }
        if let Some(depth) = candidate.depth {
            let _ = write!(out, "  depth {}", depth);
        }
        if candidate.pv.len() > 1 {
            let _ = write!(out, "  line {}", candidate.pv.join(" "));
        }
    }
    out
}

/// Formats the end of a background evaluation, if there is anything to show.
pub fn outcome(outcome: &EvaluationOutcome) -> Option<String> {
    match outcome {
        EvaluationOutcome::Completed { fen, candidates: list } => Some(candidates(fen, list)),
        EvaluationOutcome::Failed { error, .. } => {
            Some(format!("Engine analysis unavailable: {}", error))
        }
        EvaluationOutcome::Cancelled { .. } => None,
    }
}

/// Formats one square for messages, e.g. `e4: ♕`.
pub fn square(board: &Board, sq: Square) -> String {
    match board.get(sq) {
        Some(piece) => format!("{}: {}", sq, piece),
        None => format!("{}: empty", sq),
    }
}
