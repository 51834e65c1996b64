//! UCI engine wrapper for candidate-move evaluation.
//!
//! Evaluation is advisory: it runs outside the synchronous position model,
//! may fail or time out, and its output is only ever displayed.

use std::collections::BTreeMap;
use std::process::Stdio;
use std::time::Duration;

use board_core::{fen, Color, PieceSymbol, Square};
use futures_util::future::BoxFuture;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::Command;

use crate::evaluation::{CandidateMove, Evaluation};

/// Maximum number of lines to read before giving up on a UCI response.
pub const MAX_UCI_LINES: usize = 10_000;

/// Errors that can occur while asking an engine for candidate moves.
#[derive(Error, Debug)]
pub enum EvaluatorError {
    /// Failed to spawn the engine process.
    #[error("Failed to spawn engine '{path}': {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Reading from or writing to the engine failed.
    #[error("Engine I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The engine closed its output before answering.
    #[error("Engine closed unexpectedly")]
    Closed,
    /// Engine returned an invalid or unexpected response.
    #[error("Invalid engine response: {0}")]
    InvalidResponse(String),
    /// The engine did not finish within the configured time.
    #[error("Engine did not answer within {0:?}")]
    Timeout(Duration),
    /// The background task running the evaluation panicked.
    #[error("Evaluation task failed: {0}")]
    Task(String),
}

/// Settings for a UCI engine process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Path to the engine executable, or a name looked up in `PATH`.
    pub path: String,
    /// Search depth passed to `go depth`.
    pub depth: u32,
    /// Number of candidate moves requested via `MultiPV`.
    pub candidates: u32,
    /// Upper bound on the whole exchange, spawn to `bestmove`.
    pub timeout: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            path: "stockfish".to_string(),
            depth: 12,
            candidates: 3,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Anything that can suggest candidate moves for a FEN.
///
/// The returned future owns everything it needs so it can be spawned onto
/// a runtime and aborted at any point.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, fen: &str) -> BoxFuture<'static, Result<Vec<CandidateMove>, EvaluatorError>>;
}

/// An [`Evaluator`] that runs a fresh UCI engine process per request.
///
/// The process is killed if the request is dropped before it finishes.
#[derive(Debug, Clone)]
pub struct UciEvaluator {
    settings: EngineSettings,
}

impl UciEvaluator {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}

impl Evaluator for UciEvaluator {
    fn evaluate(&self, fen: &str) -> BoxFuture<'static, Result<Vec<CandidateMove>, EvaluatorError>> {
        let settings = self.settings.clone();
        let fen = fen.to_string();
        Box::pin(async move {
            let timeout = settings.timeout;
            tokio::time::timeout(timeout, run_engine(&settings, &fen))
                .await
                .map_err(|_| EvaluatorError::Timeout(timeout))?
        })
    }
}

async fn run_engine(
    settings: &EngineSettings,
    fen: &str,
) -> Result<Vec<CandidateMove>, EvaluatorError> {
    tracing::debug!(path = %settings.path, depth = settings.depth, "spawning engine");

    let mut child = Command::new(&settings.path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| EvaluatorError::Spawn {
            path: settings.path.clone(),
            source,
        })?;

    let mut stdin = child.stdin.take().ok_or(EvaluatorError::Closed)?;
    let stdout = child.stdout.take().ok_or(EvaluatorError::Closed)?;
    let mut reader = BufReader::new(stdout);

    let result = search(
        &mut reader,
        &mut stdin,
        fen,
        settings.depth,
        settings.candidates,
    )
    .await;

    // The engine may already be gone; the search result is what matters.
    let _ = send(&mut stdin, "quit").await;
    drop(stdin);
    let _ = child.wait().await;

    result
}

/// Runs one UCI exchange over an already-connected engine.
///
/// Performs the `uci`/`isready` handshake, sets `MultiPV`, searches `fen`
/// to `depth`, and returns one candidate per principal variation, best
/// first. Scores are converted to White's point of view using the FEN's
/// side-to-move field.
pub async fn search<R, W>(
    reader: &mut R,
    writer: &mut W,
    fen: &str,
    depth: u32,
    candidates: u32,
) -> Result<Vec<CandidateMove>, EvaluatorError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    send(writer, "uci").await?;
    let mut name = None;
    read_until(reader, |line| {
        if let Some(n) = line.strip_prefix("id name ") {
            name = Some(n.to_string());
        }
        line == "uciok"
    })
    .await?;
    tracing::debug!(engine = name.as_deref().unwrap_or("unknown"), "uci handshake complete");

    send(writer, &format!("setoption name MultiPV value {}", candidates.max(1))).await?;
    send(writer, "isready").await?;
    read_until(reader, |line| line == "readyok").await?;

    send(writer, &format!("position fen {}", engine_fen(fen))).await?;
    send(writer, &format!("go depth {}", depth)).await?;

    let side = fen
        .split_whitespace()
        .nth(1)
        .and_then(|field| field.chars().next())
        .and_then(Color::from_fen_char)
        .unwrap_or(Color::White);

    let mut lines: BTreeMap<u32, InfoLine> = BTreeMap::new();
    let mut best_move = None;
    let mut lines_read = 0;
    loop {
        if lines_read > MAX_UCI_LINES {
            return Err(EvaluatorError::InvalidResponse(
                "Too many lines without bestmove".to_string(),
            ));
        }
        lines_read += 1;
        let line = read_line(reader).await?;

        if line.starts_with("info ") {
            if let Some(info) = parse_info_line(&line) {
                lines.insert(info.multipv, info);
            }
        } else if let Some(rest) = line.strip_prefix("bestmove") {
            best_move = rest.split_whitespace().next().map(str::to_string);
            break;
        }
    }

    let best_move = best_move
        .ok_or_else(|| EvaluatorError::InvalidResponse("No best move received".to_string()))?;
    if best_move == "(none)" {
        tracing::debug!(fen, "engine found no legal move");
        return Ok(Vec::new());
    }

    let mut result: Vec<CandidateMove> = lines
        .into_values()
        .map(|info| CandidateMove {
            notation: info.pv.first().cloned(),
            evaluation: Some(info.evaluation.for_white(side)),
            depth: Some(info.depth),
            pv: info.pv,
        })
        .collect();

    match result.first_mut() {
        Some(first) if first.notation.is_none() => first.notation = Some(best_move),
        Some(_) => {}
        None => result.push(CandidateMove {
            notation: Some(best_move),
            ..CandidateMove::default()
        }),
    }

    Ok(result)
}

/// Rewrites the castling field so it only claims rights the board can back.
///
/// Edited positions always carry `KQkq`, but engines may reject or
/// misbehave on castling rights without a king and rook on their home
/// squares. Text that does not parse is returned unchanged.
pub fn engine_fen(text: &str) -> String {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let Ok(board) = fen::parse_placement(fen::placement_field(text)) else {
        return text.to_string();
    };
    if fields.len() < 3 {
        return text.to_string();
    }

    let white_home = board.get(Square::E1) == Some(PieceSymbol::WhiteKing);
    let black_home = board.get(Square::E8) == Some(PieceSymbol::BlackKing);
    let rook_on = |sq: Square, rook: PieceSymbol| board.get(sq) == Some(rook);

    let mut castling = String::new();
    for (c, ok) in [
        ('K', white_home && rook_on(Square::H1, PieceSymbol::WhiteRook)),
        ('Q', white_home && rook_on(Square::A1, PieceSymbol::WhiteRook)),
        ('k', black_home && rook_on(Square::H8, PieceSymbol::BlackRook)),
        ('q', black_home && rook_on(Square::A8, PieceSymbol::BlackRook)),
    ] {
        if ok && fields[2].contains(c) {
            castling.push(c);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }

    let mut out = format!("{} {} {}", fields[0], fields[1], castling);
    for field in &fields[3..] {
        out.push(' ');
        out.push_str(field);
    }
    out
}

/// The fields of a UCI `info` line this crate cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoLine {
    /// Index of the principal variation (1 when `multipv` is absent).
    pub multipv: u32,
    pub depth: u32,
    /// Score relative to the side to move.
    pub evaluation: Evaluation,
    pub pv: Vec<String>,
}

/// Parse a UCI info line to extract depth, multipv, score and PV.
///
/// Format: "info depth X multipv N score cp Y nodes Z pv move1 move2 ..."
///
/// Returns `None` for lines without a depth or an exact score, including
/// `lowerbound`/`upperbound` aspiration results.
pub fn parse_info_line(line: &str) -> Option<InfoLine> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let mut depth: Option<u32> = None;
    let mut multipv: u32 = 1;
    let mut cp: Option<i32> = None;
    let mut mate: Option<i32> = None;
    let mut pv: Vec<String> = Vec::new();

    let mut i = 0;
    while i < parts.len() {
        match parts[i] {
            "depth" => {
                depth = parts.get(i + 1).and_then(|s| s.parse().ok());
                i += 1;
            }
            "multipv" => {
                multipv = parts.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(1);
                i += 1;
            }
            "score" => {
                match parts.get(i + 1).copied() {
                    Some("cp") => cp = parts.get(i + 2).and_then(|s| s.parse().ok()),
                    Some("mate") => mate = parts.get(i + 2).and_then(|s| s.parse().ok()),
                    _ => {}
                }
                i += 2;
            }
            "lowerbound" | "upperbound" => return None,
            "pv" => {
                pv = parts[i + 1..].iter().map(|s| (*s).to_string()).collect();
                break;
            }
            _ => {}
        }
        i += 1;
    }

    Some(InfoLine {
        multipv,
        depth: depth?,
        evaluation: Evaluation::from_uci_score(cp, mate)?,
        pv,
    })
}

async fn send<W>(writer: &mut W, command: &str) -> Result<(), EvaluatorError>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(command.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

async fn read_line<R>(reader: &mut R) -> Result<String, EvaluatorError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let bytes = reader.read_line(&mut line).await?;
    if bytes == 0 {
        return Err(EvaluatorError::Closed);
    }
    Ok(line.trim().to_string())
}

async fn read_until<R, F>(reader: &mut R, mut done: F) -> Result<(), EvaluatorError>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&str) -> bool,
{
    for _ in 0..MAX_UCI_LINES {
        let line = read_line(reader).await?;
        if done(&line) {
            return Ok(());
        }
    }
    Err(EvaluatorError::InvalidResponse(
        "Engine never acknowledged the handshake".to_string(),
    ))
}
