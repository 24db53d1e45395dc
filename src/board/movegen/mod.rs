mod attacks;
mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, LegalMove, LegalMoves, MoveKind, PieceKind, Square};

impl Board {
    /// Generate the legal moves of `side` as a fresh collection.
    ///
    /// Candidates come from each piece's movement rule; each is then applied,
    /// checked with `is_checked`, and undone. The board is back in its
    /// original state when this returns.
    pub fn legal_moves(&mut self, side: Color) -> LegalMoves {
        let mut candidates = Vec::new();
        let mut legal = LegalMoves::new();

        for from in Square::all() {
            let Some(piece) = self.piece_at(from) else {
                continue;
            };
            if piece.owner != side {
                continue;
            }

            candidates.clear();
            match piece.kind {
                PieceKind::Pawn => self.pawn_candidates(from, piece, &mut candidates),
                PieceKind::Knight => self.knight_candidates(from, side, &mut candidates),
                PieceKind::King => self.king_candidates(from, piece, &mut candidates),
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                    self.sliding_candidates(from, piece, &mut candidates);
                }
            }

            for mv in &candidates {
                if self.leaves_king_safe(side, *mv) {
                    legal.push(*mv);
                }
            }
        }

        legal
    }

    /// Recompute and store the legal moves of `side`.
    ///
    /// Must be called before `is_legal`, `legal_move_kind`, `is_movable` or
    /// `apply_move` can be trusted for the current position.
    pub fn calculate_all_moves(&mut self, side: Color) -> &LegalMoves {
        let moves = self.legal_moves(side);

        #[cfg(feature = "logging")]
        log::trace!("{side} has {} legal moves", moves.len());

        &self.confirmed.insert((side, moves)).1
    }

    /// The confirmed legal moves, if calculated since the last mutation.
    #[must_use]
    pub fn confirmed_moves(&self) -> Option<&LegalMoves> {
        self.confirmed.as_ref().map(|(_, moves)| moves)
    }

    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.legal_move_kind(from, to).is_some()
    }

    #[must_use]
    pub fn legal_move_kind(&self, from: Square, to: Square) -> Option<MoveKind> {
        self.confirmed_moves()?.kind(from, to)
    }

    /// True when the piece on `sq` has at least one confirmed legal move.
    #[must_use]
    pub fn is_movable(&self, sq: Square) -> bool {
        self.confirmed_moves()
            .is_some_and(|moves| moves.is_movable(sq))
    }

    /// True when `side` has any legal move in the current position.
    pub fn has_legal_moves(&mut self, side: Color) -> bool {
        !self.legal_moves(side).is_empty()
    }

    /// Speculatively apply `mv`, test `side`'s king, and undo.
    fn leaves_king_safe(&mut self, side: Color, mv: LegalMove) -> bool {
        self.make_move(mv.from, mv.to, mv.kind);
        let checked = self.is_checked(side);
        self.unmake_move();
        !checked
    }
}
