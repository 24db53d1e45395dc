pub mod board;

pub use board::{Board, BoardError, Color, LegalMoves, MoveKind, Piece, PieceKind, Square};
