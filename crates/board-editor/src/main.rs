use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use board_analysis::{analyze, Analysis, AnalysisReport, CandidateMove, Evaluator, UciEvaluator};
use board_core::{Color, Position};
use board_editor::clipboard::Clipboard;
use board_editor::command::{self, Command, CommandError};
use board_editor::config::EditorConfig;
use board_editor::render;
use board_editor::session::{Reply, Session};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "board-editor")]
#[command(about = "Build chess positions by hand, export FEN and compare material")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// UCI engine executable (overrides the config file)
    #[arg(long, global = true)]
    engine: Option<String>,
    /// Engine search depth (overrides the config file)
    #[arg(long, global = true)]
    depth: Option<u32>,
    /// Do not query an engine
    #[arg(long, global = true)]
    no_engine: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit a position interactively (default)
    Repl,
    /// Print the FEN of a board built from placements like Ke1 Qd1 ke8
    Fen {
        /// Pieces to place, each a piece letter or glyph followed by a square
        placements: Vec<String>,
        /// Side to move
        #[arg(short, long, default_value = "white")]
        side: Color,
    },
    /// Print the material report for a FEN
    Analyze {
        /// FEN text; only the piece placement is read
        fen: String,
        /// Side to move
        #[arg(short, long, default_value = "white")]
        side: Color,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct AnalyzeJson {
    empty: bool,
    report: Option<AnalysisReport>,
    candidates: Vec<CandidateMove>,
    #[serde(skip_serializing_if = "Option::is_none")]
    engine_error: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(EditorConfig::default_path);
    let mut config = EditorConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(engine) = cli.engine {
        config.engine_path = engine;
    }
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if cli.no_engine {
        config.engine_enabled = false;
    }

    let evaluator: Option<Arc<dyn Evaluator>> = config
        .engine_enabled
        .then(|| Arc::new(UciEvaluator::new(config.engine_settings())) as Arc<dyn Evaluator>);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl(&config, evaluator).await,
        Commands::Fen { placements, side } => {
            let mut position = Position::empty();
            position.set_side_to_move(side);
            for token in &placements {
                let (sq, piece) = command::parse_placement(token)?;
                position.place(sq, piece);
            }
            println!("{}", position.to_fen());
            Ok(())
        }
        Commands::Analyze { fen, side, json } => {
            let mut position = Position::empty();
            position.set_side_to_move(side);
            position.load_fen(&fen)?;
            analyze_once(&position, evaluator, json).await
        }
    }
}

async fn analyze_once(
    position: &Position,
    evaluator: Option<Arc<dyn Evaluator>>,
    json: bool,
) -> anyhow::Result<()> {
    let analysis = analyze(position);

    let mut candidates = Vec::new();
    let mut engine_error = None;
    if let (Analysis::Report(report), Some(evaluator)) = (&analysis, evaluator) {
        match evaluator.evaluate(&report.fen).await {
            Ok(list) => candidates = list,
            Err(e) => {
                tracing::warn!(error = %e, "engine evaluation failed");
                engine_error = Some(e.to_string());
            }
        }
    }

    if json {
        let out = AnalyzeJson {
            empty: analysis == Analysis::EmptyBoard,
            report: match analysis {
                Analysis::Report(report) => Some(report),
                Analysis::EmptyBoard => None,
            },
            candidates,
            engine_error,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", render::board(position.board()));
    println!("{}", render::analysis(&analysis));
    if let Analysis::Report(report) = &analysis {
        match engine_error {
            Some(e) => println!("Engine analysis unavailable: {}", e),
            None if !candidates.is_empty() => {
                println!("{}", render::candidates(&report.fen, &candidates))
            }
            None => {}
        }
    }
    Ok(())
}

async fn repl(config: &EditorConfig, evaluator: Option<Arc<dyn Evaluator>>) -> anyhow::Result<()> {
    let mut session = Session::new(config.side);
    if let Some(evaluator) = evaluator {
        session = session.with_evaluator(evaluator);
    }
    if let Some(clipboard) = config
        .clipboard_command
        .as_deref()
        .and_then(Clipboard::from_command)
    {
        session = session.with_clipboard(clipboard);
    }

    println!("{}", render::board(session.position().board()));
    println!("Type 'help' for commands.");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line).map_err(anyhow::Error::from).and_then(|cmd| {
                    session.execute(cmd).map_err(anyhow::Error::from)
                }) {
                    Ok(Reply::Text(text)) => println!("{}", text),
                    Ok(Reply::Quit) => break,
                    Err(e) if matches!(e.downcast_ref::<CommandError>(), Some(CommandError::Empty)) => {}
                    Err(e) => println!("Error: {}", e),
                }
                prompt()?;
            }
            outcome = session.evaluation_finished() => {
                if let Some(text) = render::outcome(&outcome) {
                    println!("\n{}", text);
                    prompt()?;
                }
            }
        }
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}
