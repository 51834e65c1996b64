//! A board together with the side to move.

use crate::fen::FenError;
use crate::{Board, Color, PieceSymbol, Square};

/// The unit that is serialized to and from FEN.
///
/// A position is owned by exactly one editing session. The side to move is
/// chosen by the user, not derived from loaded FEN text: [`Position::load_fen`]
/// only replaces the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    board: Board,
    side_to_move: Color,
}

impl Position {
    /// Creates an empty board with white to move.
    pub fn empty() -> Self {
        Position {
            board: Board::empty(),
            side_to_move: Color::White,
        }
    }

    /// Creates the standard starting arrangement with white to move.
    pub fn startpos() -> Self {
        Position {
            board: Board::startpos(),
            side_to_move: Color::White,
        }
    }

    /// Creates a position from an existing board.
    pub fn new(board: Board, side_to_move: Color) -> Self {
        Position {
            board,
            side_to_move,
        }
    }

    /// Returns the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Sets the side to move.
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Returns the occupant of a square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<PieceSymbol> {
        self.board.get(sq)
    }

    /// Puts `piece` on `sq`; the previous occupant is returned and may be ignored.
    pub fn place(&mut self, sq: Square, piece: PieceSymbol) -> Option<PieceSymbol> {
        self.board.place(sq, piece)
    }

    /// Empties `sq`.
    pub fn remove(&mut self, sq: Square) -> Option<PieceSymbol> {
        self.board.remove(sq)
    }

    /// Empties every square. The side to move is kept.
    pub fn clear(&mut self) {
        self.board.clear();
    }

    /// Encodes the position as `<placement> <w|b> KQkq - 0 1`.
    pub fn to_fen(&self) -> String {
        self.board.to_fen(self.side_to_move)
    }

    /// Replaces the board from FEN text, keeping the current side to move.
    ///
    /// On error the position is unchanged.
    pub fn load_fen(&mut self, text: &str) -> Result<(), FenError> {
        self.board.load_fen(text)
    }
}
