//! Position analysis for the board editor.
//!
//! The synchronous part of this crate turns a [`Position`](board_core::Position)
//! into piece counts and a material balance. The asynchronous part asks an
//! external UCI engine for candidate moves; its results are advisory and never
//! feed back into the position.
//!
//! # Overview
//!
//! - [`analyze`] - Piece counts and material balance, or [`Analysis::EmptyBoard`]
//! - [`PieceCounts`] and [`MaterialBalance`] - The numbers behind a report
//! - [`Evaluator`] - Anything that can score a FEN asynchronously
//! - [`UciEvaluator`] - An [`Evaluator`] backed by an engine process like Stockfish
//! - [`PendingEvaluation`] - A cancelable evaluation running in the background
//!
//! # Example
//!
//! ```
//! use board_analysis::{analyze, Analysis};
//! use board_core::Position;
//!
//! match analyze(&Position::startpos()) {
//!     Analysis::Report(report) => assert_eq!(report.differential(), 0),
//!     Analysis::EmptyBoard => unreachable!(),
//! }
//! ```

pub mod analyzer;
pub mod counts;
pub mod engine;
pub mod evaluation;
pub mod pending;

pub use analyzer::{analyze, Analysis, AnalysisReport};
pub use counts::{MaterialBalance, PieceCounts};
pub use engine::{EngineSettings, Evaluator, EvaluatorError, UciEvaluator};
pub use evaluation::{CandidateMove, Evaluation};
pub use pending::{EvaluationOutcome, PendingEvaluation};
