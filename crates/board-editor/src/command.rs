//! Editor command parsing.

use board_core::{Color, ParseColorError, PieceSymbol, Square};
use thiserror::Error;

/// Errors from parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("invalid square '{0}', expected a1 through h8")]
    InvalidSquare(String),
    #[error("invalid piece '{0}', expected one of KQRBNP/kqrbnp or a piece glyph")]
    InvalidPiece(String),
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),
}

/// Commands accepted by an editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put a piece on a square, replacing any occupant.
    Place(Square, PieceSymbol),
    /// Empty a square.
    Remove(Square),
    /// Empty the whole board.
    Clear,
    /// Load the starting arrangement with white to move and analyze it.
    Reset,
    /// Choose the side to move.
    Side(Color),
    /// Replace the board from FEN text.
    Load(String),
    /// Print the FEN of the current position.
    Fen,
    /// Count material and start an engine evaluation.
    Analyze,
    /// Draw the board.
    Board,
    /// Copy the last FEN to the clipboard.
    Copy,
    /// List commands.
    Help,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parse one line of input.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let cmd = parts.next().ok_or(CommandError::Empty)?;

        match cmd.to_ascii_lowercase().as_str() {
            "place" | "put" => {
                let square = parts.next().ok_or(CommandError::MissingArgument {
                    command: "place",
                    argument: "a square",
                })?;
                let piece = parts.next().ok_or(CommandError::MissingArgument {
                    command: "place",
                    argument: "a piece",
                })?;
                Ok(Command::Place(parse_square(square)?, parse_piece(piece)?))
            }
            "remove" | "rm" => {
                let square = parts.next().ok_or(CommandError::MissingArgument {
                    command: "remove",
                    argument: "a square",
                })?;
                Ok(Command::Remove(parse_square(square)?))
            }
            "side" | "turn" => {
                let color = parts.next().ok_or(CommandError::MissingArgument {
                    command: "side",
                    argument: "white or black",
                })?;
                Ok(Command::Side(color.parse()?))
            }
            "load" => {
                let fen = parts.collect::<Vec<_>>().join(" ");
                if fen.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "load",
                        argument: "FEN text",
                    });
                }
                Ok(Command::Load(fen))
            }
            "clear" => Ok(Command::Clear),
            "reset" => Ok(Command::Reset),
            "fen" => Ok(Command::Fen),
            "analyze" | "analyse" => Ok(Command::Analyze),
            "board" | "show" => Ok(Command::Board),
            "copy" => Ok(Command::Copy),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(cmd.to_string())),
        }
    }
}

/// Parses an algebraic square name.
pub fn parse_square(s: &str) -> Result<Square, CommandError> {
    Square::from_algebraic(s).ok_or_else(|| CommandError::InvalidSquare(s.to_string()))
}

/// Parses a piece given as a FEN letter or a glyph.
pub fn parse_piece(s: &str) -> Result<PieceSymbol, CommandError> {
    PieceSymbol::parse(s).ok_or_else(|| CommandError::InvalidPiece(s.to_string()))
}

/// Parses a placement token such as `Ke1` or `♛d8`: a piece followed by a square.
pub fn parse_placement(token: &str) -> Result<(Square, PieceSymbol), CommandError> {
    let mut chars = token.chars();
    let piece = chars
        .next()
        .ok_or_else(|| CommandError::InvalidPiece(String::new()))?;
    let square = chars.as_str();
    let piece = parse_piece(piece.encode_utf8(&mut [0; 4]))?;
    Ok((parse_square(square)?, piece))
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  place <square> <piece>   put a piece (KQRBNP white, kqrbnp black, or a glyph)
  remove <square>          empty a square
  clear                    empty the board
  reset                    starting position, white to move
  side <white|black>       choose the side to move
  load <fen>               replace the board from FEN (side to move is kept)
  fen                      print the FEN
  analyze                  count material and ask the engine for moves
  board                    draw the board
  copy                     copy the last FEN to the clipboard
  help                     this list
  quit                     leave";

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_parse_place() {
        assert_eq!(
            Command::parse("place e4 Q"),
            Ok(Command::Place(sq("e4"), PieceSymbol::WhiteQueen))
        );
        assert_eq!(
            Command::parse("  PUT h8 ♜ "),
            Ok(Command::Place(sq("h8"), PieceSymbol::BlackRook))
        );
    }

    #[test]
    fn test_parse_place_errors() {
        assert_eq!(
            Command::parse("place e4"),
            Err(CommandError::MissingArgument {
                command: "place",
                argument: "a piece"
            })
        );
        assert_eq!(
            Command::parse("place z9 Q"),
            Err(CommandError::InvalidSquare("z9".to_string()))
        );
        assert_eq!(
            Command::parse("place e4 X"),
            Err(CommandError::InvalidPiece("X".to_string()))
        );
    }

    #[test]
    fn test_parse_remove_and_side() {
        assert_eq!(Command::parse("rm a1"), Ok(Command::Remove(sq("a1"))));
        assert_eq!(Command::parse("side black"), Ok(Command::Side(Color::Black)));
        assert_eq!(Command::parse("turn w"), Ok(Command::Side(Color::White)));
        assert!(matches!(
            Command::parse("side green"),
            Err(CommandError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_parse_load_keeps_all_fields() {
        assert_eq!(
            Command::parse("load 4k3/8/8/8/8/8/8/3QK3 b - - 0 1"),
            Ok(Command::Load("4k3/8/8/8/8/8/8/3QK3 b - - 0 1".to_string()))
        );
        assert!(matches!(
            Command::parse("load"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("clear"), Ok(Command::Clear));
        assert_eq!(Command::parse("reset"), Ok(Command::Reset));
        assert_eq!(Command::parse("fen"), Ok(Command::Fen));
        assert_eq!(Command::parse("analyse"), Ok(Command::Analyze));
        assert_eq!(Command::parse("show"), Ok(Command::Board));
        assert_eq!(Command::parse("copy"), Ok(Command::Copy));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("castle"),
            Err(CommandError::Unknown("castle".to_string()))
        );
    }

    #[test]
    fn test_parse_placement_token() {
        assert_eq!(
            parse_placement("Ke1"),
            Ok((sq("e1"), PieceSymbol::WhiteKing))
        );
        assert_eq!(
            parse_placement("♛d8"),
            Ok((sq("d8"), PieceSymbol::BlackQueen))
        );
        assert_eq!(
            parse_placement("Ke9"),
            Err(CommandError::InvalidSquare("e9".to_string()))
        );
        assert_eq!(
            parse_placement("e1"),
            Err(CommandError::InvalidPiece("e".to_string()))
        );
    }
}
