use super::super::{
    castle_rook_squares, Board, LegalMove, MoveCandidate, MoveKind, Offset, Piece, PieceKind,
    Square,
};

impl Board {
    pub(crate) fn king_candidates(&mut self, from: Square, king: Piece, moves: &mut Vec<LegalMove>) {
        let side = king.owner;
        let mut cursor = MoveCandidate::new(from);
        for step in Offset::ROYAL {
            cursor.reset();
            if !cursor.step(step) {
                continue;
            }
            let to = cursor.current();
            if self.is_empty(to) || self.is_capturable(to, side) {
                moves.push(LegalMove::new(from, to, MoveKind::Default));
            }
        }

        if king.move_count != 0 || from != side.king_home() || self.is_checked(side) {
            return;
        }
        for kingside in [true, false] {
            if let Some(mv) = self.castle_candidate(from, king, kingside) {
                moves.push(mv);
            }
        }
    }

    /// Castling with the rook on the given wing.
    ///
    /// The rook must be unmoved on its home square, every square between it
    /// and the king empty, and the square the king passes over unattacked.
    /// The landing square is left to the general check-safety filter.
    fn castle_candidate(&mut self, from: Square, king: Piece, kingside: bool) -> Option<LegalMove> {
        let side = king.owner;
        let (rook_home, _) = castle_rook_squares(side, kingside);
        match self.piece_at(rook_home) {
            Some(rook) if rook.owner == side && rook.kind == PieceKind::Rook && !rook.has_moved() => {}
            _ => return None,
        }

        let (low, high) = if kingside {
            (from.file() + 1, rook_home.file())
        } else {
            (rook_home.file() + 1, from.file())
        };
        if !(low..high).all(|file| self.is_empty(Square::at(file, from.rank()))) {
            return None;
        }

        let step = if kingside { Offset::EAST } else { Offset::WEST };
        let passing = from.offset(step)?;
        if !self.leaves_king_safe(side, LegalMove::new(from, passing, MoveKind::Default)) {
            return None;
        }

        let landing = passing.offset(step)?;
        let kind = if kingside {
            MoveKind::CastleKingside
        } else {
            MoveKind::CastleQueenside
        };
        Some(LegalMove::new(from, landing, kind))
    }
}
