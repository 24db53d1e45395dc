use super::super::{Board, Color, LegalMove, MoveCandidate, MoveKind, Offset, Square};

impl Board {
    pub(crate) fn knight_candidates(&self, from: Square, side: Color, moves: &mut Vec<LegalMove>) {
        let mut cursor = MoveCandidate::new(from);
        for leap in Offset::KNIGHT {
            cursor.reset();
            if !cursor.step(leap) {
                continue;
            }
            let to = cursor.current();
            if self.is_empty(to) || self.is_capturable(to, side) {
                moves.push(LegalMove::new(from, to, MoveKind::Default));
            }
        }
    }
}
