use super::super::{Board, LegalMove, MoveCandidate, MoveKind, Piece, Square};

impl Board {
    /// Bishop, rook and queen moves: every empty square along each ray, plus
    /// the first occupied square when it holds a capturable enemy.
    pub(crate) fn sliding_candidates(&self, from: Square, piece: Piece, moves: &mut Vec<LegalMove>) {
        let mut cursor = MoveCandidate::new(from);
        for &direction in piece.kind.slide_directions() {
            cursor.reset();
            while cursor.step(direction) {
                let to = cursor.current();
                if self.is_empty(to) {
                    moves.push(LegalMove::new(from, to, MoveKind::Default));
                    continue;
                }
                if self.is_capturable(to, piece.owner) {
                    moves.push(LegalMove::new(from, to, MoveKind::Default));
                }
                break;
            }
        }
    }
}
