//! FEN (Forsyth-Edwards Notation) piece-placement encoding and decoding.
//!
//! Only the first FEN field is interpreted. Encoded strings always carry the
//! fixed trailing fields [`PLACEHOLDER_FIELDS`], and decoding ignores
//! whatever follows the placement.

use thiserror::Error;

use crate::{Board, PieceSymbol, Square};

/// Placement field of the standard starting arrangement.
pub const STARTPOS_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Full FEN of the standard starting arrangement, white to move.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Placement field of an empty board.
pub const EMPTY_PLACEMENT: &str = "8/8/8/8/8/8/8/8";

/// Castling, en passant and move counter fields emitted after the side to move.
pub const PLACEHOLDER_FIELDS: &str = "KQkq - 0 1";

/// Errors that can occur when decoding a FEN piece placement.
///
/// Ranks are reported the way a player reads them: the first segment of the
/// placement is rank 8, the last is rank 1.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("malformed FEN: expected 8 ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("malformed FEN: rank {rank} runs past 8 squares")]
    RankOverflow { rank: u8 },

    #[error("malformed FEN: rank {rank} has {squares} squares, expected 8")]
    RankUnderflow { rank: u8, squares: u8 },

    #[error("malformed FEN: invalid character '{ch}' in rank {rank}")]
    UnrecognizedChar { ch: char, rank: u8 },
}

/// Returns the piece placement field: everything before the first space.
///
/// Only `' '` separates fields. Leading spaces yield an empty placement and
/// other whitespace stays in the placement, where decoding rejects it.
pub fn placement_field(fen: &str) -> &str {
    fen.split(' ').next().unwrap_or("")
}

/// Encodes the board's piece placement.
///
/// Rows are written top (rank 8) to bottom, each left to right, with runs
/// of empty squares collapsed into a digit.
pub fn encode_placement(board: &Board) -> String {
    let mut out = String::with_capacity(71);

    for row in 0..8u8 {
        let mut empty_count = 0u8;
        for piece in board.row(row) {
            match piece {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

/// Decodes a piece placement field into a fresh board.
pub fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let segments: Vec<&str> = placement.split('/').collect();
    if segments.len() != 8 {
        return Err(FenError::WrongRankCount(segments.len()));
    }

    let mut board = Board::empty();

    for (row, segment) in (0u8..).zip(segments) {
        let rank = 8 - row;
        let mut col = 0u8;

        for ch in segment.chars() {
            match ch {
                '1'..='8' => {
                    col += ch as u8 - b'0';
                    if col > 8 {
                        return Err(FenError::RankOverflow { rank });
                    }
                }
                _ => {
                    let piece = PieceSymbol::from_fen_char(ch)
                        .ok_or(FenError::UnrecognizedChar { ch, rank })?;
                    let sq = Square::from_coords(row, col).ok_or(FenError::RankOverflow { rank })?;
                    board.place(sq, piece);
                    col += 1;
                }
            }
        }

        if col != 8 {
            return Err(FenError::RankUnderflow { rank, squares: col });
        }
    }

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_roundtrip() {
        let board = parse_placement(STARTPOS_PLACEMENT).unwrap();
        assert_eq!(encode_placement(&board), STARTPOS_PLACEMENT);
    }

    #[test]
    fn empty_roundtrip() {
        let board = parse_placement(EMPTY_PLACEMENT).unwrap();
        assert!(board.is_empty());
        assert_eq!(encode_placement(&board), EMPTY_PLACEMENT);
    }

    #[test]
    fn placement_field_stops_at_space() {
        assert_eq!(placement_field(STARTPOS), STARTPOS_PLACEMENT);
        assert_eq!(placement_field("8/8/8/8/8/8/8/8"), EMPTY_PLACEMENT);
        assert_eq!(placement_field(""), "");
        assert_eq!(placement_field(" 4k3/8 w"), "");
        assert_eq!(placement_field("8/8\tb w"), "8/8\tb");
    }

    #[test]
    fn only_spaces_separate_fields() {
        let leading = " 4k3/8/8/8/8/8/8/4K3 w - - 0 1";
        assert_eq!(
            parse_placement(placement_field(leading)),
            Err(FenError::WrongRankCount(1))
        );
        assert_eq!(
            parse_placement(placement_field("8/8/8/8/8/8/8/8\tb")),
            Err(FenError::UnrecognizedChar { ch: '\t', rank: 1 })
        );
        assert_eq!(
            parse_placement(placement_field("8/8/8/8/8/8/8/8\nxyz")),
            Err(FenError::UnrecognizedChar { ch: '\n', rank: 1 })
        );
    }

    #[test]
    fn runs_flush_before_pieces() {
        let board = parse_placement("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        assert_eq!(encode_placement(&board), "r3k2r/8/8/8/8/8/8/R3K2R");
    }

    #[test]
    fn split_digits_are_merged_on_encode() {
        let board = parse_placement("44/8/8/8/8/8/8/11111111").unwrap();
        assert_eq!(encode_placement(&board), EMPTY_PLACEMENT);
    }

    #[test]
    fn invalid_rank_count() {
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8"),
            Err(FenError::WrongRankCount(7))
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/8/8"),
            Err(FenError::WrongRankCount(9))
        );
        assert_eq!(parse_placement(""), Err(FenError::WrongRankCount(1)));
    }

    #[test]
    fn invalid_short_rank() {
        assert_eq!(
            parse_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN"),
            Err(FenError::RankUnderflow { rank: 1, squares: 7 })
        );
    }

    #[test]
    fn invalid_long_rank() {
        assert_eq!(
            parse_placement("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(FenError::RankOverflow { rank: 8 })
        );
        assert_eq!(
            parse_placement("8/8/8/8/71p/8/8/8"),
            Err(FenError::RankOverflow { rank: 4 })
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/9"),
            Err(FenError::UnrecognizedChar { ch: '9', rank: 1 })
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            parse_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR"),
            Err(FenError::UnrecognizedChar { ch: 'X', rank: 2 })
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/07"),
            Err(FenError::UnrecognizedChar { ch: '0', rank: 1 })
        );
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongRankCount(3);
        assert!(err.to_string().contains('3'));

        let err = FenError::RankUnderflow { rank: 1, squares: 7 };
        assert!(err.to_string().contains("rank 1 has 7 squares"));

        let err = FenError::UnrecognizedChar { ch: 'x', rank: 5 };
        assert!(err.to_string().contains("'x'"));
        assert!(err.to_string().starts_with("malformed FEN"));
    }
}
