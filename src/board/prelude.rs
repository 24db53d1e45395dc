//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert!(!board.is_checked(Color::White));
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, Color, FenError, LegalMove, LegalMoves, MoveKind, MoveRecord,
    Piece, PieceKind, Square, SquareError,
};
