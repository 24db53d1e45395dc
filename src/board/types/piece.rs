//! Piece, piece kind and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::offset::Offset;
use super::square::Square;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Back rank layout from the a-file to the h-file
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Parse a piece kind from a character of either case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Convert to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Ray directions for sliding pieces; empty for the rest.
    #[must_use]
    pub const fn slide_directions(self) -> &'static [Offset] {
        match self {
            PieceKind::Bishop => &Offset::DIAGONAL,
            PieceKind::Rook => &Offset::ORTHOGONAL,
            PieceKind::Queen => &Offset::ROYAL,
            _ => &[],
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors (White first)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank a pawn of this color must stand on to capture en passant
    /// (4 for White, 3 for Black).
    #[inline]
    #[must_use]
    pub const fn en_passant_rank(self) -> usize {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }

    /// Single pawn step forward
    #[inline]
    #[must_use]
    pub const fn pawn_push(self) -> Offset {
        match self {
            Color::White => Offset::NORTH,
            Color::Black => Offset::SOUTH,
        }
    }

    /// Diagonal-forward capture steps
    #[inline]
    #[must_use]
    pub const fn pawn_captures(self) -> [Offset; 2] {
        match self {
            Color::White => [Offset::NORTH_WEST, Offset::NORTH_EAST],
            Color::Black => [Offset::SOUTH_WEST, Offset::SOUTH_EAST],
        }
    }

    /// Home square of the king (e1 / e8)
    #[inline]
    #[must_use]
    pub const fn king_home(self) -> Square {
        Square::at(4, self.back_rank())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece instance on the board.
///
/// `move_count` counts the moves made by this piece; zero means it has never
/// moved, which is what castling and the pawn double step look at.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub owner: Color,
    pub kind: PieceKind,
    pub move_count: u32,
}

impl Piece {
    /// A piece that has not moved yet.
    #[must_use]
    pub const fn new(owner: Color, kind: PieceKind) -> Self {
        Piece {
            owner,
            kind,
            move_count: 0,
        }
    }

    #[must_use]
    pub const fn with_move_count(mut self, move_count: u32) -> Self {
        self.move_count = move_count;
        self
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.move_count != 0
    }

    #[inline]
    #[must_use]
    pub fn to_fen_char(&self) -> char {
        self.kind.to_fen_char(self.owner)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.owner, self.kind)
    }
}
