use super::{BoardError, Color, LegalMoves, MoveRecord, Piece, PieceKind, Square};

/// Board state: the 64 occupants plus the log of applied moves.
///
/// Equality compares occupants (including move counts) and history; the
/// confirmed legal move set is derived state and is ignored.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; Square::COUNT],
    pub(crate) history: Vec<MoveRecord>,
    // Legal moves from the last `calculate_all_moves`, cleared by every
    // committed apply/undo.
    pub(crate) confirmed: Option<(Color, LegalMoves)>,
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, kind) in PieceKind::BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                board.set_piece(
                    Square::at(file, color.back_rank()),
                    Piece::new(color, *kind),
                );
                board.set_piece(
                    Square::at(file, color.pawn_start_rank()),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; Square::COUNT],
            history: Vec::new(),
            confirmed: None,
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[must_use]
    pub fn is_occupied_by(&self, sq: Square, color: Color, kind: PieceKind) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.owner == color && p.kind == kind)
    }

    /// True when `sq` holds an enemy of `mover` that may be taken. Kings are
    /// never capture targets.
    #[must_use]
    pub fn is_capturable(&self, sq: Square, mover: Color) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.owner != mover && p.kind != PieceKind::King)
    }

    /// First square (in index order) holding the given piece.
    #[must_use]
    pub fn find_piece_square(&self, color: Color, kind: PieceKind) -> Option<Square> {
        Square::all().find(|&sq| self.is_occupied_by(sq, color, kind))
    }

    /// Square of `color`'s king.
    pub fn king_square(&self, color: Color) -> Result<Square, BoardError> {
        self.find_piece_square(color, PieceKind::King)
            .ok_or(BoardError::PieceNotFound {
                color,
                kind: PieceKind::King,
            })
    }

    /// Occupied squares of one side, in index order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.owner == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares && self.history == other.history
    }
}

impl Eq for Board {}
