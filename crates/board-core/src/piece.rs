//! Chess piece representation.

use std::fmt;

use crate::Color;

/// The six kinds of chess pieces, independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Role {
    King = 0,
    Queen = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
    Pawn = 5,
}

impl Role {
    /// All roles in display order (king first, pawn last).
    pub const ALL: [Role; 6] = [
        Role::King,
        Role::Queen,
        Role::Rook,
        Role::Bishop,
        Role::Knight,
        Role::Pawn,
    ];

    /// Returns the uppercase FEN letter for this role.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Role::King => 'K',
            Role::Queen => 'Q',
            Role::Rook => 'R',
            Role::Bishop => 'B',
            Role::Knight => 'N',
            Role::Pawn => 'P',
        }
    }

    /// Material value in pawns. Kings count for nothing.
    #[inline]
    pub const fn material_value(self) -> u32 {
        match self {
            Role::King => 0,
            Role::Queen => 9,
            Role::Rook => 5,
            Role::Bishop | Role::Knight => 3,
            Role::Pawn => 1,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::King => "King",
            Role::Queen => "Queen",
            Role::Rook => "Rook",
            Role::Bishop => "Bishop",
            Role::Knight => "Knight",
            Role::Pawn => "Pawn",
        };
        write!(f, "{}", name)
    }
}

/// One of the twelve pieces that can occupy a square.
///
/// Every value has exactly one display glyph and one FEN letter, and both
/// parse back to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceSymbol {
    WhiteKing,
    WhiteQueen,
    WhiteRook,
    WhiteBishop,
    WhiteKnight,
    WhitePawn,
    BlackKing,
    BlackQueen,
    BlackRook,
    BlackBishop,
    BlackKnight,
    BlackPawn,
}

impl PieceSymbol {
    /// All twelve pieces, white first, each side in [`Role::ALL`] order.
    pub const ALL: [PieceSymbol; 12] = [
        PieceSymbol::WhiteKing,
        PieceSymbol::WhiteQueen,
        PieceSymbol::WhiteRook,
        PieceSymbol::WhiteBishop,
        PieceSymbol::WhiteKnight,
        PieceSymbol::WhitePawn,
        PieceSymbol::BlackKing,
        PieceSymbol::BlackQueen,
        PieceSymbol::BlackRook,
        PieceSymbol::BlackBishop,
        PieceSymbol::BlackKnight,
        PieceSymbol::BlackPawn,
    ];

    /// Builds the piece of the given color and role.
    pub const fn new(color: Color, role: Role) -> Self {
        match (color, role) {
            (Color::White, Role::King) => PieceSymbol::WhiteKing,
            (Color::White, Role::Queen) => PieceSymbol::WhiteQueen,
            (Color::White, Role::Rook) => PieceSymbol::WhiteRook,
            (Color::White, Role::Bishop) => PieceSymbol::WhiteBishop,
            (Color::White, Role::Knight) => PieceSymbol::WhiteKnight,
            (Color::White, Role::Pawn) => PieceSymbol::WhitePawn,
            (Color::Black, Role::King) => PieceSymbol::BlackKing,
            (Color::Black, Role::Queen) => PieceSymbol::BlackQueen,
            (Color::Black, Role::Rook) => PieceSymbol::BlackRook,
            (Color::Black, Role::Bishop) => PieceSymbol::BlackBishop,
            (Color::Black, Role::Knight) => PieceSymbol::BlackKnight,
            (Color::Black, Role::Pawn) => PieceSymbol::BlackPawn,
        }
    }

    /// Returns the color of this piece.
    pub const fn color(self) -> Color {
        match self {
            PieceSymbol::WhiteKing
            | PieceSymbol::WhiteQueen
            | PieceSymbol::WhiteRook
            | PieceSymbol::WhiteBishop
            | PieceSymbol::WhiteKnight
            | PieceSymbol::WhitePawn => Color::White,
            _ => Color::Black,
        }
    }

    /// Returns the role of this piece.
    pub const fn role(self) -> Role {
        match self {
            PieceSymbol::WhiteKing | PieceSymbol::BlackKing => Role::King,
            PieceSymbol::WhiteQueen | PieceSymbol::BlackQueen => Role::Queen,
            PieceSymbol::WhiteRook | PieceSymbol::BlackRook => Role::Rook,
            PieceSymbol::WhiteBishop | PieceSymbol::BlackBishop => Role::Bishop,
            PieceSymbol::WhiteKnight | PieceSymbol::BlackKnight => Role::Knight,
            PieceSymbol::WhitePawn | PieceSymbol::BlackPawn => Role::Pawn,
        }
    }

    /// Returns the FEN letter: uppercase for white, lowercase for black.
    pub const fn fen_char(self) -> char {
        let c = self.role().letter();
        match self.color() {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Parses a FEN letter (`KQRBNP` / `kqrbnp`).
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let role = match c.to_ascii_uppercase() {
            'K' => Role::King,
            'Q' => Role::Queen,
            'R' => Role::Rook,
            'B' => Role::Bishop,
            'N' => Role::Knight,
            'P' => Role::Pawn,
            _ => return None,
        };
        Some(PieceSymbol::new(color, role))
    }

    /// Returns the Unicode chess glyph used for display.
    pub const fn glyph(self) -> char {
        match self {
            PieceSymbol::WhiteKing => '♔',
            PieceSymbol::WhiteQueen => '♕',
            PieceSymbol::WhiteRook => '♖',
            PieceSymbol::WhiteBishop => '♗',
            PieceSymbol::WhiteKnight => '♘',
            PieceSymbol::WhitePawn => '♙',
            PieceSymbol::BlackKing => '♚',
            PieceSymbol::BlackQueen => '♛',
            PieceSymbol::BlackRook => '♜',
            PieceSymbol::BlackBishop => '♝',
            PieceSymbol::BlackKnight => '♞',
            PieceSymbol::BlackPawn => '♟',
        }
    }

    /// Parses a Unicode chess glyph.
    pub fn from_glyph(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|piece| piece.glyph() == c)
    }

    /// Parses either a FEN letter or a glyph, given as a one-character string.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::from_fen_char(c).or_else(|| Self::from_glyph(c))
    }
}

impl fmt::Display for PieceSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
