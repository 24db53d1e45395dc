//! FEN import and export.
//!
//! The board keeps no castling flags or en passant square of its own: both
//! are derived from move counts and the history log. Importing maps the FEN
//! fields onto those facts and exporting reads them back.

use super::builder::validate_setup;
use super::error::FenError;
use super::{
    castle_rook_squares, Board, Color, MoveDetail, MoveKind, MoveRecord, Piece, PieceKind, Square,
};

const CASTLING_FLAGS: [(Color, bool, char); 4] = [
    (Color::White, true, 'K'),
    (Color::White, false, 'Q'),
    (Color::Black, true, 'k'),
    (Color::Black, false, 'q'),
];

/// Move count a piece is given when read from FEN, before castling rights
/// are applied. Kings and rooks count as moved until a right says otherwise.
fn imported_move_count(sq: Square, color: Color, kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn if sq.rank() == color.pawn_start_rank() => 0,
        PieceKind::Pawn | PieceKind::King | PieceKind::Rook => 1,
        _ => 0,
    }
}

impl Board {
    /// Parse a position and the side to move from FEN notation.
    ///
    /// Halfmove and fullmove counters are accepted but ignored.
    pub fn try_from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::at(file, rank);
                let move_count = imported_move_count(sq, color, kind);
                board.set_piece(sq, Piece::new(color, kind).with_move_count(move_count));
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }
        validate_setup(&board)?;

        // Parse side to move
        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        for c in parts[2].chars() {
            if c == '-' {
                continue;
            }
            let &(color, kingside, _) = CASTLING_FLAGS
                .iter()
                .find(|(_, _, flag)| *flag == c)
                .ok_or(FenError::InvalidCastling { char: c })?;
            if !board.grant_castling(color, kingside) {
                return Err(FenError::InvalidCastling { char: c });
            }
        }

        // Parse en passant target
        if parts[3] != "-" {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let target: Square = parts[3].parse().map_err(|_| invalid())?;
            let record = board.double_step_behind(target, side_to_move.opponent()).ok_or_else(invalid)?;
            board.history.push(record);
        }

        Ok((board, side_to_move))
    }

    /// Parse a FEN position.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> (Self, Color) {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Mark the king and the rook of one wing as unmoved. Returns false when
    /// either is not on its home square.
    fn grant_castling(&mut self, color: Color, kingside: bool) -> bool {
        let king_home = color.king_home();
        let (rook_home, _) = castle_rook_squares(color, kingside);
        if !self.is_occupied_by(king_home, color, PieceKind::King)
            || !self.is_occupied_by(rook_home, color, PieceKind::Rook)
        {
            return false;
        }
        for sq in [king_home, rook_home] {
            if let Some(piece) = self.squares[sq.index()].as_mut() {
                piece.move_count = 0;
            }
        }
        true
    }

    /// The double step by `mover` that makes `target` an en passant square,
    /// if the placement is consistent with one having just been played.
    fn double_step_behind(&self, target: Square, mover: Color) -> Option<MoveRecord> {
        let origin = Square::at(target.file(), mover.pawn_start_rank());
        let landing = Square::at(target.file(), mover.opponent().en_passant_rank());
        let consistent = origin.offset(mover.pawn_push()) == Some(target)
            && self.is_empty(origin)
            && self.is_empty(target)
            && self.is_occupied_by(landing, mover, PieceKind::Pawn);
        consistent.then_some(MoveRecord {
            from: origin,
            to: landing,
            captured: None,
            detail: MoveDetail::TwoSquareAdvance,
        })
    }

    /// True while the king and the rook of that wing are both unmoved on
    /// their home squares.
    fn castling_available(&self, color: Color, kingside: bool) -> bool {
        let (rook_home, _) = castle_rook_squares(color, kingside);
        let unmoved = |sq: Square, kind: PieceKind| {
            matches!(self.piece_at(sq), Some(p) if p.owner == color && p.kind == kind && !p.has_moved())
        };
        unmoved(color.king_home(), PieceKind::King) && unmoved(rook_home, PieceKind::Rook)
    }

    /// Convert the position to FEN notation with `side_to_move` as the active color.
    #[must_use]
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(piece) = self.piece_at(Square::at(file, rank)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling: String = CASTLING_FLAGS
            .iter()
            .filter(|(color, kingside, _)| self.castling_available(*color, *kingside))
            .map(|(_, _, flag)| *flag)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = match self.last_move() {
            Some(last) if last.kind() == MoveKind::TwoSquareAdvance => {
                Square::at(last.to.file(), (last.from.rank() + last.to.rank()) / 2).to_string()
            }
            _ => "-".to_string(),
        };

        let fullmove = 1 + self.history.len() / 2;
        format!(
            "{} {active} {castling} {en_passant} 0 {fullmove}",
            rows.join("/")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_start_position_matches_new() {
        let (board, side) = Board::from_fen(START_FEN);
        assert_eq!(side, Color::White);
        assert_eq!(board, Board::new());
        assert_eq!(Board::new().to_fen(Color::White), START_FEN);
    }

    #[test]
    fn test_castling_rights_become_move_counts() {
        let (board, _) = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
        assert!(!board.piece_at(sq("e1")).unwrap().has_moved());
        assert!(!board.piece_at(sq("h1")).unwrap().has_moved());
        assert!(board.piece_at(sq("a1")).unwrap().has_moved());
        assert!(!board.piece_at(sq("a8")).unwrap().has_moved());
        assert!(board.piece_at(sq("h8")).unwrap().has_moved());
        assert_eq!(
            board.to_fen(Color::White),
            "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1"
        );
    }

    #[test]
    fn test_en_passant_seeds_history() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1";
        let (board, side) = Board::from_fen(fen);
        assert_eq!(side, Color::White);
        let last = board.last_move().unwrap();
        assert_eq!(last.from, sq("d7"));
        assert_eq!(last.to, sq("d5"));
        assert_eq!(last.kind(), MoveKind::TwoSquareAdvance);
        assert!(board.to_fen(side).contains(" d6 "));
    }

    #[test]
    fn test_inconsistent_en_passant_rejected() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq d6 0 1";
        assert_eq!(
            Board::try_from_fen(fen).unwrap_err(),
            FenError::InvalidEnPassant {
                found: "d6".to_string()
            }
        );
    }

    #[test]
    fn test_castling_without_rook_rejected() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w K - 0 1";
        assert_eq!(
            Board::try_from_fen(fen).unwrap_err(),
            FenError::InvalidCastling { char: 'K' }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::try_from_fen("8/8 w").unwrap_err(),
            FenError::TooFewParts { found: 2 }
        );
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").unwrap_err(),
            FenError::InvalidSideToMove {
                found: "x".to_string()
            }
        );
        assert_eq!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4KX2 w - - 0 1").unwrap_err(),
            FenError::InvalidPiece { char: 'X' }
        );
        assert!(matches!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidSetup { .. })
        ));
        assert!(matches!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K3/8 w - - 0 1"),
            Err(FenError::InvalidRank { .. })
        ));
        assert!(matches!(
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(FenError::TooManyFiles { .. })
        ));
    }
}
