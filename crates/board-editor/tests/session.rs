//! Session behavior with a scripted evaluator in place of a real engine.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use board_analysis::{CandidateMove, Evaluation, EvaluationOutcome, Evaluator, EvaluatorError};
use board_core::{Color, PieceSymbol, Square};
use board_editor::command::Command;
use board_editor::render;
use board_editor::session::{Reply, Session};
use futures_util::future::BoxFuture;

/// Answers with one candidate per call, after an optional delay.
struct Scripted {
    calls: AtomicUsize,
    /// Set once an evaluation runs to the end of its delay.
    finished: Arc<AtomicBool>,
    delay: Duration,
    fail: bool,
}

impl Scripted {
    fn new(delay: Duration, fail: bool) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            finished: Arc::new(AtomicBool::new(false)),
            delay,
            fail,
        })
    }
}

impl Evaluator for Scripted {
    fn evaluate(&self, _fen: &str) -> BoxFuture<'static, Result<Vec<CandidateMove>, EvaluatorError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay;
        let fail = self.fail;
        let finished = Arc::clone(&self.finished);
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            finished.store(true, Ordering::SeqCst);
            if fail {
                return Err(EvaluatorError::InvalidResponse("scripted failure".to_string()));
            }
            Ok(vec![CandidateMove {
                notation: Some("d1d8".to_string()),
                evaluation: Some(Evaluation::Mate(1)),
                depth: Some(4),
                pv: vec!["d1d8".to_string()],
            }])
        })
    }
}

fn scenario_session(evaluator: Arc<Scripted>) -> Session {
    let mut session = Session::new(Color::White).with_evaluator(evaluator);
    session.execute(Command::Clear).unwrap();
    session
        .execute(Command::Place(Square::E1, PieceSymbol::WhiteKing))
        .unwrap();
    session
        .execute(Command::Place(Square::D1, PieceSymbol::WhiteQueen))
        .unwrap();
    session
        .execute(Command::Place(Square::E8, PieceSymbol::BlackKing))
        .unwrap();
    session
}

#[tokio::test]
async fn test_analyze_merges_engine_result() {
    let evaluator = Scripted::new(Duration::ZERO, false);
    let mut session = scenario_session(evaluator.clone());

    let Reply::Text(report) = session.execute(Command::Analyze).unwrap() else {
        panic!("expected text");
    };
    assert!(report.contains("Material advantage: White +9"));
    assert!(report.contains("FEN: 4k3/8/8/8/8/8/8/3QK3 w KQkq - 0 1"));
    assert_eq!(session.pending_fen(), Some("4k3/8/8/8/8/8/8/3QK3 w KQkq - 0 1"));

    let outcome = session.evaluation_finished().await;
    assert_eq!(outcome.fen(), "4k3/8/8/8/8/8/8/3QK3 w KQkq - 0 1");
    let text = render::outcome(&outcome).unwrap();
    assert!(text.contains("1. d1d8  #1  depth 4"));
    assert_eq!(session.pending_fen(), None);
    assert_eq!(evaluator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_new_analysis_replaces_pending_one() {
    let evaluator = Scripted::new(Duration::from_millis(50), false);
    let mut session = scenario_session(evaluator.clone());

    session.execute(Command::Analyze).unwrap();
    session.execute(Command::Side(Color::Black)).unwrap();
    session.execute(Command::Analyze).unwrap();

    let outcome = session.evaluation_finished().await;
    assert!(matches!(outcome, EvaluationOutcome::Completed { .. }));
    assert_eq!(outcome.fen(), "4k3/8/8/8/8/8/8/3QK3 b KQkq - 0 1");
    assert_eq!(evaluator.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_engine_failure_leaves_report_intact() {
    let evaluator = Scripted::new(Duration::ZERO, true);
    let mut session = scenario_session(evaluator);

    session.execute(Command::Analyze).unwrap();
    let before = session.position().clone();

    let outcome = session.evaluation_finished().await;
    assert!(matches!(
        outcome,
        EvaluationOutcome::Failed {
            error: EvaluatorError::InvalidResponse(_),
            ..
        }
    ));
    assert_eq!(session.position(), &before);
    assert_eq!(
        session.last_fen(),
        Some("4k3/8/8/8/8/8/8/3QK3 w KQkq - 0 1")
    );
}

#[tokio::test]
async fn test_empty_board_skips_engine() {
    let evaluator = Scripted::new(Duration::ZERO, false);
    let mut session = Session::new(Color::White).with_evaluator(evaluator.clone());
    session.execute(Command::Clear).unwrap();

    let reply = session.execute(Command::Analyze).unwrap();
    assert_eq!(reply, Reply::Text(render::EMPTY_BOARD_MESSAGE.to_string()));
    assert_eq!(session.pending_fen(), None);
    assert_eq!(evaluator.calls.load(Ordering::SeqCst), 0);

    let waited = tokio::time::timeout(Duration::from_millis(20), session.evaluation_finished()).await;
    assert!(waited.is_err(), "no evaluation should be running");
}

#[tokio::test]
async fn test_clear_cancels_pending_evaluation() {
    let evaluator = Scripted::new(Duration::from_millis(50), false);
    let mut session = scenario_session(evaluator.clone());

    session.execute(Command::Analyze).unwrap();
    assert!(session.pending_fen().is_some());
    session.execute(Command::Clear).unwrap();
    assert_eq!(session.pending_fen(), None);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(evaluator.calls.load(Ordering::SeqCst), 1);
    assert!(
        !evaluator.finished.load(Ordering::SeqCst),
        "cleared evaluation kept running"
    );
}
