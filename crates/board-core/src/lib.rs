//! Core types for building chess positions by hand.
//!
//! This crate provides the position model used by the board editor:
//! - [`PieceSymbol`], [`Role`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Board`], a 64-square free-form placement grid
//! - [`Position`], a board plus the side to move
//! - FEN piece-placement encoding and decoding
//!
//! The board is not a game state: there is no move generation and no
//! check on king count or pawn placement. Any of the 12 pieces may sit on
//! any of the 64 squares.

mod board;
mod color;
pub mod fen;
mod piece;
mod position;
mod square;

pub use board::Board;
pub use color::{Color, ParseColorError};
pub use fen::FenError;
pub use piece::{PieceSymbol, Role};
pub use position::Position;
pub use square::{File, Rank, Square};
