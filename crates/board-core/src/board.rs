//! The 64-square placement grid.

use std::ops::Index;

use crate::fen::{self, FenError};
use crate::{Color, PieceSymbol, Square};

/// A free-form chess board.
///
/// Every one of the 64 squares always has an entry; an empty square holds
/// `None`. Since a square holds at most one value, two pieces can never
/// share a square. Nothing else is enforced: any number of kings, pawns on
/// the back rank and so on are all representable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<PieceSymbol>; 64],
}

impl Board {
    /// Creates a board with every square empty.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn startpos() -> Self {
        fen::parse_placement(fen::STARTPOS_PLACEMENT).expect("start placement is valid")
    }

    /// Returns the occupant of a square.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<PieceSymbol> {
        self.squares[sq.index() as usize]
    }

    /// Puts `piece` on `sq`, returning whatever was there before.
    pub fn place(&mut self, sq: Square, piece: PieceSymbol) -> Option<PieceSymbol> {
        self.squares[sq.index() as usize].replace(piece)
    }

    /// Empties `sq`, returning its previous occupant.
    pub fn remove(&mut self, sq: Square) -> Option<PieceSymbol> {
        self.squares[sq.index() as usize].take()
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.squares = [None; 64];
    }

    /// Returns true if no square is occupied.
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }

    /// Iterates over all 64 squares with their occupants, in FEN order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<PieceSymbol>)> + '_ {
        Square::all().map(move |sq| (sq, self.get(sq)))
    }

    /// Iterates over occupied squares only.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PieceSymbol)> + '_ {
        self.iter().filter_map(|(sq, piece)| piece.map(|p| (sq, p)))
    }

    /// Returns the eight squares of a FEN row (0 = eighth rank).
    pub fn row(&self, row: u8) -> &[Option<PieceSymbol>] {
        let start = usize::from(row.min(7)) * 8;
        &self.squares[start..start + 8]
    }

    /// Encodes the piece placement field only.
    pub fn placement(&self) -> String {
        fen::encode_placement(self)
    }

    /// Encodes a full FEN string with the given side to move.
    ///
    /// The board keeps no history, so castling rights, en passant target and
    /// move counters are always the fixed `KQkq - 0 1`.
    pub fn to_fen(&self, side_to_move: Color) -> String {
        format!(
            "{} {} {}",
            self.placement(),
            side_to_move.fen_char(),
            fen::PLACEHOLDER_FIELDS
        )
    }

    /// Replaces the board contents with the placement field of `text`.
    ///
    /// Anything after the first space is ignored. The input is fully
    /// validated before the board is touched, so on error the board is left
    /// exactly as it was.
    pub fn load_fen(&mut self, text: &str) -> Result<(), FenError> {
        *self = fen::parse_placement(fen::placement_field(text))?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Square> for Board {
    type Output = Option<PieceSymbol>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.index() as usize]
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.placement())
    }
}
