//! Error types for chess board operations.

use std::fmt;

use super::{Color, PieceKind, Square};

/// Error type for board mutations and invariant lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The (from, to) pair is not in the confirmed legal move set
    IllegalMove { from: Square, to: Square },
    /// Undo requested with an empty history
    NoMoveToUndo,
    /// A required piece (a king) is missing from the board
    PieceNotFound { color: Color, kind: PieceKind },
    /// A move was applied before legal moves were calculated for the position
    MovesNotCalculated,
    /// A position under construction breaks a board invariant
    InvalidSetup { reason: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IllegalMove { from, to } => {
                write!(f, "Illegal move '{from}{to}'")
            }
            BoardError::NoMoveToUndo => write!(f, "No move to undo"),
            BoardError::PieceNotFound { color, kind } => {
                write!(f, "No {color} {kind} on the board")
            }
            BoardError::MovesNotCalculated => {
                write!(f, "Legal moves have not been calculated for this position")
            }
            BoardError::InvalidSetup { reason } => {
                write!(f, "Invalid position: {reason}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid rank in position string
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character, or a right whose king and rook are not home
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Parsed placement breaks a board invariant
    InvalidSetup { reason: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidSetup { reason } => {
                write!(f, "Invalid position in FEN: {reason}")
            }
        }
    }
}

impl std::error::Error for FenError {}

impl From<BoardError> for FenError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidSetup { reason } => FenError::InvalidSetup { reason },
            other => FenError::InvalidSetup {
                reason: other.to_string(),
            },
        }
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
