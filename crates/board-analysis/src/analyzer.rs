//! Material analysis of a position.
//!
//! This module provides [`analyze`], a pure function from a [`Position`] to
//! an [`Analysis`]. It never mutates the position.

use board_core::{Color, Position};
use serde::Serialize;

use crate::counts::{MaterialBalance, PieceCounts};

/// Result of analyzing a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    /// Neither side has a single piece on the board.
    ///
    /// Callers show a "board is empty" message instead of statistics.
    EmptyBoard,
    /// Statistics for a board with at least one piece.
    Report(AnalysisReport),
}

/// Immutable snapshot of a position's piece counts and material.
///
/// Serializes with the derived totals, differential and balance alongside
/// the raw counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ReportFields")]
pub struct AnalysisReport {
    /// Side to move when the report was produced.
    pub side_to_move: Color,
    /// White's pieces by role.
    pub white: PieceCounts,
    /// Black's pieces by role.
    pub black: PieceCounts,
    /// The FEN the report describes.
    pub fen: String,
}

impl AnalysisReport {
    /// Returns the piece counts for one side.
    pub fn counts(&self, color: Color) -> &PieceCounts {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Total number of pieces for one side, kings included.
    pub fn total(&self, color: Color) -> u32 {
        self.counts(color).total()
    }

    /// Material value for one side.
    pub fn material(&self, color: Color) -> u32 {
        self.counts(color).material()
    }

    /// White material minus black material. Positive favors white.
    pub fn differential(&self) -> i32 {
        self.material(Color::White) as i32 - self.material(Color::Black) as i32
    }

    /// The differential as a side and a magnitude.
    pub fn balance(&self) -> MaterialBalance {
        MaterialBalance::from_differential(self.differential())
    }
}

#[derive(Serialize)]
struct ReportFields {
    side_to_move: Color,
    white: PieceCounts,
    black: PieceCounts,
    white_total: u32,
    black_total: u32,
    white_material: u32,
    black_material: u32,
    differential: i32,
    balance: MaterialBalance,
    fen: String,
}

impl From<AnalysisReport> for ReportFields {
    fn from(report: AnalysisReport) -> Self {
        Self {
            white_total: report.total(Color::White),
            black_total: report.total(Color::Black),
            white_material: report.material(Color::White),
            black_material: report.material(Color::Black),
            differential: report.differential(),
            balance: report.balance(),
            side_to_move: report.side_to_move,
            white: report.white,
            black: report.black,
            fen: report.fen,
        }
    }
}

/// Counts every piece on the board in a single pass and derives material.
pub fn analyze(position: &Position) -> Analysis {
    let mut white = PieceCounts::default();
    let mut black = PieceCounts::default();

    for (_, piece) in position.board().pieces() {
        match piece.color() {
            Color::White => white.add(piece.role()),
            Color::Black => black.add(piece.role()),
        }
    }

    if white.total() == 0 && black.total() == 0 {
        return Analysis::EmptyBoard;
    }

    Analysis::Report(AnalysisReport {
        side_to_move: position.side_to_move(),
        white,
        black,
        fen: position.to_fen(),
    })
}
