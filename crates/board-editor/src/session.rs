//! An editing session: one position, its last exported FEN, and at most one
//! background engine evaluation.

use std::sync::Arc;

use board_analysis::{analyze, Analysis, EvaluationOutcome, Evaluator, PendingEvaluation};
use board_core::{Color, FenError, Position};
use thiserror::Error;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::command::{Command, HELP};
use crate::render;

/// Errors from executing a command. None of them change the position.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Fen(#[from] FenError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error("No FEN to copy. Analyze the position first.")]
    NothingToCopy,
}

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show this text.
    Text(String),
    /// End the session.
    Quit,
}

/// Owns the position being edited.
///
/// The position is only ever changed through [`Session::execute`]. Engine
/// evaluations run in the background and are reported through
/// [`Session::evaluation_finished`]; they never touch the position.
pub struct Session {
    position: Position,
    last_fen: Option<String>,
    evaluator: Option<Arc<dyn Evaluator>>,
    pending: Option<PendingEvaluation>,
    clipboard: Option<Clipboard>,
}

impl Session {
    /// Starts a session on the standard starting arrangement.
    pub fn new(side: Color) -> Self {
        let mut position = Position::startpos();
        position.set_side_to_move(side);
        Self {
            position,
            last_fen: None,
            evaluator: None,
            pending: None,
            clipboard: None,
        }
    }

    /// Enables engine suggestions after each analysis.
    pub fn with_evaluator(mut self, evaluator: Arc<dyn Evaluator>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Enables the `copy` command.
    pub fn with_clipboard(mut self, clipboard: Clipboard) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// The position being edited.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The FEN produced by the last `analyze` or `fen` command, if any.
    pub fn last_fen(&self) -> Option<&str> {
        self.last_fen.as_deref()
    }

    /// The FEN of the evaluation currently running, if any.
    pub fn pending_fen(&self) -> Option<&str> {
        self.pending.as_ref().map(PendingEvaluation::fen)
    }

    /// Runs one command.
    ///
    /// Must be called from within a tokio runtime when an evaluator is set,
    /// since `analyze` spawns the evaluation.
    pub fn execute(&mut self, command: Command) -> Result<Reply, SessionError> {
        let text = match command {
            Command::Place(sq, piece) => {
                self.position.place(sq, piece);
                render::square(self.position.board(), sq)
            }
            Command::Remove(sq) => {
                self.position.remove(sq);
                render::square(self.position.board(), sq)
            }
            Command::Clear => {
                self.position.clear();
                self.last_fen = None;
                self.pending = None;
                render::board(self.position.board())
            }
            Command::Reset => {
                self.position = Position::startpos();
                format!(
                    "{}\n{}",
                    render::board(self.position.board()),
                    self.analyze()
                )
            }
            Command::Side(color) => {
                self.position.set_side_to_move(color);
                format!("{} to move", color)
            }
            Command::Load(fen) => {
                self.position.load_fen(&fen)?;
                render::board(self.position.board())
            }
            Command::Fen => {
                let fen = self.position.to_fen();
                self.last_fen = Some(fen.clone());
                fen
            }
            Command::Analyze => self.analyze(),
            Command::Board => render::board(self.position.board()),
            Command::Copy => {
                let fen = self.last_fen.as_deref().ok_or(SessionError::NothingToCopy)?;
                let clipboard = self.clipboard.as_ref().ok_or(ClipboardError::NotConfigured)?;
                clipboard.copy(fen)?;
                "Copied!".to_string()
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    /// Analyzes the position and, for a non-empty board, replaces any
    /// running evaluation with one for the new FEN.
    fn analyze(&mut self) -> String {
        let fen = self.position.to_fen();
        let analysis = analyze(&self.position);
        self.last_fen = Some(fen.clone());

        let mut text = render::analysis(&analysis);
        match (&analysis, &self.evaluator) {
            (Analysis::Report(_), Some(evaluator)) => {
                self.pending = Some(PendingEvaluation::spawn(Arc::clone(evaluator), fen));
                text.push_str("\nAsking the engine for candidate moves...");
            }
            _ => self.pending = None,
        }
        text
    }

    /// Resolves when the running evaluation ends; never resolves if there is
    /// none.
    ///
    /// Cancel safe, so it can sit in a `select!` next to input handling.
    /// Failures are logged here and returned for display; they do not affect
    /// the session.
    pub async fn evaluation_finished(&mut self) -> EvaluationOutcome {
        let Some(pending) = self.pending.as_mut() else {
            return std::future::pending().await;
        };
        let outcome = pending.wait().await;
        self.pending = None;

        if let EvaluationOutcome::Failed { fen, error } = &outcome {
            tracing::warn!(%fen, %error, "engine evaluation failed");
        }
        outcome
    }
}
