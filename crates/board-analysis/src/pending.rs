//! Background evaluations keyed by the FEN they were started for.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::engine::{Evaluator, EvaluatorError};
use crate::evaluation::CandidateMove;

/// How a background evaluation ended.
#[derive(Debug)]
pub enum EvaluationOutcome {
    /// The evaluator answered.
    Completed {
        fen: String,
        candidates: Vec<CandidateMove>,
    },
    /// The evaluator failed; the error is for display and logging only.
    Failed { fen: String, error: EvaluatorError },
    /// The evaluation was cancelled before it finished.
    Cancelled { fen: String },
}

impl EvaluationOutcome {
    /// The FEN this outcome belongs to.
    pub fn fen(&self) -> &str {
        match self {
            EvaluationOutcome::Completed { fen, .. }
            | EvaluationOutcome::Failed { fen, .. }
            | EvaluationOutcome::Cancelled { fen } => fen,
        }
    }
}

/// An evaluation running on the tokio runtime.
///
/// Dropping a `PendingEvaluation` aborts the task, so replacing the pending
/// evaluation of a session cancels the old one.
#[derive(Debug)]
pub struct PendingEvaluation {
    fen: String,
    handle: JoinHandle<Result<Vec<CandidateMove>, EvaluatorError>>,
}

impl PendingEvaluation {
    /// Starts evaluating `fen` in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(evaluator: Arc<dyn Evaluator>, fen: String) -> Self {
        tracing::debug!(%fen, "starting background evaluation");
        let handle = tokio::spawn(evaluator.evaluate(&fen));
        Self { fen, handle }
    }

    /// The FEN being evaluated.
    pub fn fen(&self) -> &str {
        &self.fen
    }

    /// Returns true once the task has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Requests cancellation. [`wait`](Self::wait) then reports
    /// [`EvaluationOutcome::Cancelled`] unless the task had already finished.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Waits for the evaluation to end.
    ///
    /// Cancel safe: dropping the returned future leaves the evaluation
    /// running. Once this has resolved, the `PendingEvaluation` is spent and
    /// must not be waited on again.
    pub async fn wait(&mut self) -> EvaluationOutcome {
        let fen = self.fen.clone();
        match (&mut self.handle).await {
            Ok(Ok(candidates)) => EvaluationOutcome::Completed { fen, candidates },
            Ok(Err(error)) => EvaluationOutcome::Failed { fen, error },
            Err(e) if e.is_cancelled() => EvaluationOutcome::Cancelled { fen },
            Err(e) => EvaluationOutcome::Failed {
                fen,
                error: EvaluatorError::Task(e.to_string()),
            },
        }
    }
}

impl Drop for PendingEvaluation {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
