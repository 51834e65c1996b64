//! Engine evaluation types.

use std::fmt;

use board_core::Color;
use serde::Serialize;

/// Represents an engine's evaluation of a position.
///
/// Evaluations can be either centipawn scores (for normal positions)
/// or mate scores (when a forced mate is found). Unless stated otherwise,
/// scores are from White's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluation {
    /// Centipawn evaluation (positive = white advantage)
    Centipawns(i32),
    /// Mate in N moves (positive = white mates, negative = black mates)
    Mate(i32),
}

impl Evaluation {
    /// Builds an evaluation from the `score cp` / `score mate` pair of a UCI
    /// info line. A mate score takes precedence.
    pub fn from_uci_score(cp: Option<i32>, mate: Option<i32>) -> Option<Self> {
        match (cp, mate) {
            (_, Some(m)) => Some(Evaluation::Mate(m)),
            (Some(cp), None) => Some(Evaluation::Centipawns(cp)),
            (None, None) => None,
        }
    }

    /// Returns the same evaluation from the other side's point of view.
    pub fn flip(self) -> Self {
        match self {
            Evaluation::Centipawns(cp) => Evaluation::Centipawns(-cp),
            Evaluation::Mate(m) => Evaluation::Mate(-m),
        }
    }

    /// Converts a score relative to `side_to_move` into White's point of view.
    pub fn for_white(self, side_to_move: Color) -> Self {
        match side_to_move {
            Color::White => self,
            Color::Black => self.flip(),
        }
    }

    /// Score in pawns, or `None` for a mate score.
    pub fn pawns(self) -> Option<f64> {
        match self {
            Evaluation::Centipawns(cp) => Some(f64::from(cp) / 100.0),
            Evaluation::Mate(_) => None,
        }
    }

    /// Moves until mate, or `None` for a centipawn score.
    pub fn mate_in(self) -> Option<i32> {
        match self {
            Evaluation::Mate(m) => Some(m),
            Evaluation::Centipawns(_) => None,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Centipawns(cp) => write!(f, "{:+.2}", f64::from(*cp) / 100.0),
            Evaluation::Mate(m) => write!(f, "#{}", m),
        }
    }
}

/// One candidate move suggested by an evaluator.
///
/// Every field is optional: evaluators report what they know.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CandidateMove {
    /// The move in UCI notation (e.g. "e2e4").
    pub notation: Option<String>,
    /// Score after this move, from White's point of view.
    pub evaluation: Option<Evaluation>,
    /// Search depth the score was found at.
    pub depth: Option<u32>,
    /// Principal variation starting with this move.
    pub pv: Vec<String>,
}

impl CandidateMove {
    /// Score in pawns, if the evaluation is not a mate score.
    pub fn eval(&self) -> Option<f64> {
        self.evaluation.and_then(Evaluation::pawns)
    }

    /// Mate-in-N count, if the evaluation is a mate score.
    pub fn mate(&self) -> Option<i32> {
        self.evaluation.and_then(Evaluation::mate_in)
    }
}
