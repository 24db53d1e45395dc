//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let a2: Square = "a2".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .piece(a2, Color::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert!(!board.is_checked(Color::White));
//! ```

use super::{Board, BoardError, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
///
/// Pieces start with a move count of zero, except pawns placed off their
/// starting rank, which count as having moved once. Use `moved` to set a
/// count explicitly (for example to take away castling).
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        BoardBuilder {
            pieces: Square::all()
                .filter_map(|sq| board.piece_at(sq).map(|piece| (sq, piece)))
                .collect(),
        }
    }

    /// Place a piece on the board, replacing any occupant.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        let move_count = match kind {
            PieceKind::Pawn if square.rank() != color.pawn_start_rank() => 1,
            _ => 0,
        };
        self.moved(square, color, kind, move_count)
    }

    /// Place a piece that has already made `move_count` moves.
    #[must_use]
    pub fn moved(mut self, square: Square, color: Color, kind: PieceKind, move_count: u32) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces
            .push((square, Piece::new(color, kind).with_move_count(move_count)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board, checking that each side has exactly one king and
    /// that no pawn stands on a back rank.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set_piece(square, piece);
        }
        validate_setup(&board)?;
        Ok(board)
    }
}

pub(crate) fn validate_setup(board: &Board) -> Result<(), BoardError> {
    for color in Color::BOTH {
        let kings = board
            .pieces(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(BoardError::InvalidSetup {
                reason: format!("{color} has {kings} kings, expected 1"),
            });
        }
    }

    let stranded_pawn = Square::all().find(|&sq| {
        (sq.rank() == 0 || sq.rank() == 7)
            && board
                .piece_at(sq)
                .is_some_and(|piece| piece.kind == PieceKind::Pawn)
    });
    if let Some(sq) = stranded_pawn {
        return Err(BoardError::InvalidSetup {
            reason: format!("pawn on back rank square {sq}"),
        });
    }

    Ok(())
}
