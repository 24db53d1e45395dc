//! Chess board representation and rules.
//!
//! A 64-square mailbox with an ordered log of applied moves. Generates the
//! fully legal moves of a side (two-square advance, en passant, promotion and
//! castling included), applies and reverses moves, and detects check.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.calculate_all_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//!
//! let e2 = "e2".parse().unwrap();
//! let e4 = "e4".parse().unwrap();
//! assert!(board.is_legal(e2, e4));
//! board.play(e2, e4).unwrap();
//! assert!(!board.is_checked(Color::Black));
//! ```

mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, FenError, SquareError};
pub use state::Board;
pub use types::{
    Color, LegalMove, LegalMoves, MoveCandidate, MoveDetail, MoveKind, MoveRecord, Offset, Piece,
    PieceKind, Square,
};

pub(crate) use types::castle_rook_squares;
