use super::{
    castle_rook_squares, Board, BoardError, MoveDetail, MoveKind, MoveRecord, PieceKind, Square,
};

impl Board {
    /// Apply a move without any legality check and push its record.
    ///
    /// Legality filtering pairs every call with `unmake_move`; the two must
    /// stay exact inverses and nothing else may observe the board in between.
    pub(crate) fn make_move(&mut self, from: Square, to: Square, kind: MoveKind) {
        let mut piece = self.squares[from.index()]
            .take()
            .expect("make_move: origin square is empty");
        let mut captured = self.squares[to.index()].take();
        piece.move_count += 1;

        let detail = match kind {
            MoveKind::Default => MoveDetail::Default,
            MoveKind::TwoSquareAdvance => MoveDetail::TwoSquareAdvance,
            MoveKind::Promotion => {
                piece.kind = PieceKind::Queen;
                MoveDetail::Promotion
            }
            MoveKind::EnPassant => {
                debug_assert!(captured.is_none(), "en passant onto an occupied square");
                let captured_on = Square::at(to.file(), from.rank());
                captured = self.squares[captured_on.index()].take();
                MoveDetail::EnPassant { captured_on }
            }
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let kingside = kind == MoveKind::CastleKingside;
                let (rook_from, rook_to) = castle_rook_squares(piece.owner, kingside);
                let rook = self.squares[rook_from.index()].take();
                self.squares[rook_to.index()] = rook;
                if kingside {
                    MoveDetail::CastleKingside { rook_from, rook_to }
                } else {
                    MoveDetail::CastleQueenside { rook_from, rook_to }
                }
            }
        };

        self.squares[to.index()] = Some(piece);
        self.history.push(MoveRecord {
            from,
            to,
            captured,
            detail,
        });
    }

    /// Pop the last record and reverse it exactly.
    pub(crate) fn unmake_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        let mut piece = self.squares[record.to.index()]
            .take()
            .expect("unmake_move: destination square is empty");
        piece.move_count -= 1;

        match record.detail {
            MoveDetail::Default | MoveDetail::TwoSquareAdvance => {
                self.squares[record.to.index()] = record.captured;
            }
            MoveDetail::Promotion => {
                piece.kind = PieceKind::Pawn;
                self.squares[record.to.index()] = record.captured;
            }
            MoveDetail::EnPassant { captured_on } => {
                self.squares[captured_on.index()] = record.captured;
            }
            MoveDetail::CastleKingside { rook_from, rook_to }
            | MoveDetail::CastleQueenside { rook_from, rook_to } => {
                let rook = self.squares[rook_to.index()].take();
                self.squares[rook_from.index()] = rook;
            }
        }

        self.squares[record.from.index()] = Some(piece);
        Some(record)
    }

    /// Apply a move previously confirmed by `calculate_all_moves`.
    ///
    /// The move is rejected before any mutation unless `(from, to)` is in the
    /// confirmed set with the same `kind`. The confirmed set is discarded
    /// afterwards; recalculate before the next move.
    pub fn apply_move(&mut self, from: Square, to: Square, kind: MoveKind) -> Result<(), BoardError> {
        let Some((_, confirmed)) = &self.confirmed else {
            return Err(BoardError::MovesNotCalculated);
        };
        if confirmed.kind(from, to) != Some(kind) {
            #[cfg(feature = "logging")]
            log::warn!("rejected {from}{to} ({kind}): not a confirmed legal move");
            return Err(BoardError::IllegalMove { from, to });
        }

        self.make_move(from, to, kind);
        self.confirmed = None;

        #[cfg(feature = "logging")]
        log::debug!("applied {from}{to} ({kind}), history length {}", self.history.len());
        Ok(())
    }

    /// Apply a confirmed move, looking its kind up in the confirmed set.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveKind, BoardError> {
        let kind = match &self.confirmed {
            Some((_, confirmed)) => confirmed
                .kind(from, to)
                .ok_or(BoardError::IllegalMove { from, to })?,
            None => return Err(BoardError::MovesNotCalculated),
        };
        self.apply_move(from, to, kind)?;
        Ok(kind)
    }

    /// Reverse the most recent move.
    pub fn undo_last_move(&mut self) -> Result<MoveRecord, BoardError> {
        let record = self.unmake_move().ok_or(BoardError::NoMoveToUndo)?;
        self.confirmed = None;

        #[cfg(feature = "logging")]
        log::debug!("undid {record} ({}), history length {}", record.kind(), self.history.len());
        Ok(record)
    }
}
