use super::super::{Board, Color, LegalMove, MoveCandidate, MoveKind, Piece, PieceKind, Square};

fn advance_kind(side: Color, to: Square) -> MoveKind {
    if to.rank() == side.promotion_rank() {
        MoveKind::Promotion
    } else {
        MoveKind::Default
    }
}

impl Board {
    pub(crate) fn pawn_candidates(&self, from: Square, pawn: Piece, moves: &mut Vec<LegalMove>) {
        let side = pawn.owner;
        let forward = side.pawn_push();
        let mut cursor = MoveCandidate::new(from);

        if cursor.step(forward) && self.is_empty(cursor.current()) {
            let one = cursor.current();
            moves.push(LegalMove::new(from, one, advance_kind(side, one)));

            // The first step only needs to be empty, not legal on its own.
            if pawn.move_count == 0 && cursor.step(forward) && self.is_empty(cursor.current()) {
                moves.push(LegalMove::new(
                    from,
                    cursor.current(),
                    MoveKind::TwoSquareAdvance,
                ));
            }
        }

        for diagonal in side.pawn_captures() {
            cursor.reset();
            if cursor.step(diagonal) && self.is_capturable(cursor.current(), side) {
                let to = cursor.current();
                moves.push(LegalMove::new(from, to, advance_kind(side, to)));
            }
        }

        if let Some(to) = self.en_passant_target(from, side) {
            moves.push(LegalMove::new(from, to, MoveKind::EnPassant));
        }
    }

    /// Destination of an en passant capture by the pawn on `from`, if the
    /// immediately preceding move was an enemy double step landing beside it.
    fn en_passant_target(&self, from: Square, side: Color) -> Option<Square> {
        if from.rank() != side.en_passant_rank() {
            return None;
        }
        let last = self.last_move()?;
        if last.kind() != MoveKind::TwoSquareAdvance
            || last.to.rank() != from.rank()
            || last.to.file().abs_diff(from.file()) != 1
        {
            return None;
        }
        if !self.is_occupied_by(last.to, side.opponent(), PieceKind::Pawn) {
            return None;
        }

        let target = last.to.offset(side.pawn_push())?;
        self.is_empty(target).then_some(target)
    }
}
