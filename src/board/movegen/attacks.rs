use super::super::{Board, Color, MoveCandidate, Offset, PieceKind, Square};

impl Board {
    /// True when `side`'s king is attacked.
    ///
    /// # Panics
    /// Panics if `side` has no king; the board never removes kings, so this
    /// only happens on a corrupted position.
    #[must_use]
    pub fn is_checked(&self, side: Color) -> bool {
        match self.king_square(side) {
            Ok(king) => self.is_attacked_by(king, side.opponent()),
            Err(err) => panic!("{err}"),
        }
    }

    /// True when a piece of `attacker` attacks `target`, walking outward from
    /// `target` rather than consulting any attack table.
    #[must_use]
    pub fn is_attacked_by(&self, target: Square, attacker: Color) -> bool {
        let mut cursor = MoveCandidate::new(target);

        // An attacking pawn stands where a defending pawn on `target` would capture.
        for diagonal in attacker.opponent().pawn_captures() {
            cursor.reset();
            if cursor.step(diagonal) && self.is_occupied_by(cursor.current(), attacker, PieceKind::Pawn) {
                return true;
            }
        }

        for leap in Offset::KNIGHT {
            cursor.reset();
            if cursor.step(leap) && self.is_occupied_by(cursor.current(), attacker, PieceKind::Knight) {
                return true;
            }
        }

        for direction in Offset::ROYAL {
            cursor.reset();
            while cursor.step(direction) {
                let Some(piece) = self.piece_at(cursor.current()) else {
                    continue;
                };
                if piece.owner == attacker {
                    let hits = match piece.kind {
                        PieceKind::Queen => true,
                        PieceKind::King => cursor.distance() == 1,
                        PieceKind::Rook => direction.is_orthogonal(),
                        PieceKind::Bishop => !direction.is_orthogonal(),
                        PieceKind::Pawn | PieceKind::Knight => false,
                    };
                    if hits {
                        return true;
                    }
                }
                break;
            }
        }

        false
    }
}
