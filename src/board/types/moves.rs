//! Move kinds, history records and legal move collections.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// How a move mutates the board beyond relocating the moving piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Default,
    TwoSquareAdvance,
    EnPassant,
    Promotion,
    CastleKingside,
    CastleQueenside,
}

impl MoveKind {
    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            MoveKind::Default => "default",
            MoveKind::TwoSquareAdvance => "two-square advance",
            MoveKind::EnPassant => "en passant",
            MoveKind::Promotion => "promotion",
            MoveKind::CastleKingside => "O-O",
            MoveKind::CastleQueenside => "O-O-O",
        };
        f.write_str(tag)
    }
}

/// Rook relocation for a castling move: (home square, post-castle square).
#[inline]
#[must_use]
pub(crate) const fn castle_rook_squares(color: Color, kingside: bool) -> (Square, Square) {
    let rank = color.back_rank();
    if kingside {
        (Square::at(7, rank), Square::at(5, rank))
    } else {
        (Square::at(0, rank), Square::at(3, rank))
    }
}

/// Per-kind payload stored with a history record, carrying what undo needs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveDetail {
    Default,
    TwoSquareAdvance,
    /// The captured pawn stood beside the mover, not on the destination.
    EnPassant { captured_on: Square },
    Promotion,
    CastleKingside { rook_from: Square, rook_to: Square },
    CastleQueenside { rook_from: Square, rook_to: Square },
}

impl MoveDetail {
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        match self {
            MoveDetail::Default => MoveKind::Default,
            MoveDetail::TwoSquareAdvance => MoveKind::TwoSquareAdvance,
            MoveDetail::EnPassant { .. } => MoveKind::EnPassant,
            MoveDetail::Promotion => MoveKind::Promotion,
            MoveDetail::CastleKingside { .. } => MoveKind::CastleKingside,
            MoveDetail::CastleQueenside { .. } => MoveKind::CastleQueenside,
        }
    }
}

/// One applied move in the board's history log.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub detail: MoveDetail,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.detail.kind()
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// A move confirmed legal for the side that generated it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl LegalMove {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        LegalMove { from, to, kind }
    }
}

impl fmt::Display for LegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Legal moves of one side, in generation order (by origin square index).
///
/// Each (from, to) pair appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    moves: Vec<LegalMove>,
}

impl LegalMoves {
    pub(crate) fn new() -> Self {
        LegalMoves { moves: Vec::new() }
    }

    pub(crate) fn push(&mut self, mv: LegalMove) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[LegalMove] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LegalMove> {
        self.moves.iter()
    }

    #[must_use]
    pub fn kind(&self, from: Square, to: Square) -> Option<MoveKind> {
        self.moves
            .iter()
            .find(|mv| mv.from == from && mv.to == to)
            .map(|mv| mv.kind)
    }

    #[must_use]
    pub fn contains(&self, from: Square, to: Square) -> bool {
        self.kind(from, to).is_some()
    }

    /// Moves of the piece standing on `from`.
    pub fn from_square(&self, from: Square) -> impl Iterator<Item = &LegalMove> + '_ {
        self.moves.iter().filter(move |mv| mv.from == from)
    }

    /// True when the piece on `from` has at least one legal move.
    #[must_use]
    pub fn is_movable(&self, from: Square) -> bool {
        self.moves.iter().any(|mv| mv.from == from)
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = &'a LegalMove;
    type IntoIter = std::slice::Iter<'a, LegalMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for LegalMoves {
    type Item = LegalMove;
    type IntoIter = std::vec::IntoIter<LegalMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_castle_rook_squares() {
        assert_eq!(
            castle_rook_squares(Color::White, true),
            (sq("h1"), sq("f1"))
        );
        assert_eq!(
            castle_rook_squares(Color::Black, false),
            (sq("a8"), sq("d8"))
        );
    }

    #[test]
    fn test_detail_kind() {
        let detail = MoveDetail::EnPassant {
            captured_on: sq("d5"),
        };
        assert_eq!(detail.kind(), MoveKind::EnPassant);
        assert!(MoveDetail::CastleQueenside {
            rook_from: sq("a1"),
            rook_to: sq("d1"),
        }
        .kind()
        .is_castle());
    }

    #[test]
    fn test_legal_moves_lookup() {
        let mut moves = LegalMoves::new();
        moves.push(LegalMove::new(sq("e2"), sq("e3"), MoveKind::Default));
        moves.push(LegalMove::new(
            sq("e2"),
            sq("e4"),
            MoveKind::TwoSquareAdvance,
        ));
        moves.push(LegalMove::new(sq("g1"), sq("f3"), MoveKind::Default));

        assert_eq!(moves.len(), 3);
        assert_eq!(
            moves.kind(sq("e2"), sq("e4")),
            Some(MoveKind::TwoSquareAdvance)
        );
        assert!(!moves.contains(sq("e2"), sq("e5")));
        assert_eq!(moves.from_square(sq("e2")).count(), 2);
        assert!(moves.is_movable(sq("g1")));
        assert!(!moves.is_movable(sq("b1")));
        assert_eq!(moves.as_slice()[0].to_string(), "e2e3");
    }
}
