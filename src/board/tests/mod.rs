//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Special positions and rule corner cases
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, Color, MoveKind, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Play a line of moves in coordinate notation ("e2e4"), recalculating the
/// confirmed set before each one. Returns the side to move afterwards.
pub(super) fn play_line(board: &mut Board, mut side: Color, line: &[&str]) -> Color {
    for mv in line {
        board.calculate_all_moves(side);
        let (from, to) = mv.split_at(2);
        board
            .play(sq(from), sq(to))
            .unwrap_or_else(|e| panic!("{mv} for {side}: {e}"));
        side = side.opponent();
    }
    side
}

/// Kind of the legal move `from`-`to` for `side`, if any.
pub(super) fn legal_kind(board: &mut Board, side: Color, from: &str, to: &str) -> Option<MoveKind> {
    board.legal_moves(side).kind(sq(from), sq(to))
}
