//! Core chess types.
//!
//! This module contains the leaf types the board is built from:
//! - `Square` - packed (file, rank) coordinate with algebraic conversion
//! - `Offset` - orthogonal, diagonal and knight step vectors
//! - `MoveCandidate` - reset-able cursor used while walking rays
//! - `Piece`, `PieceKind` and `Color`
//! - `MoveKind`, `MoveDetail`, `MoveRecord` and `LegalMoves`

mod cursor;
mod moves;
mod offset;
mod piece;
mod square;

pub use cursor::MoveCandidate;
pub use moves::{LegalMove, LegalMoves, MoveDetail, MoveKind, MoveRecord};
pub use offset::Offset;
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use moves::castle_rook_squares;
