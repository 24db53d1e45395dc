use super::{Board, Color, LegalMove};

impl Board {
    /// Count leaf nodes of the legal move tree `depth` plies deep, `side` to move.
    pub fn perft(&mut self, side: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(side);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in &moves {
            self.make_move(mv.from, mv.to, mv.kind);
            nodes += self.perft(side.opponent(), depth - 1);
            self.unmake_move();
        }

        nodes
    }

    /// Per-move leaf counts at `depth`, in generation order.
    pub fn perft_divide(&mut self, side: Color, depth: usize) -> Vec<(LegalMove, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let moves = self.legal_moves(side);
        let mut divide = Vec::with_capacity(moves.len());
        for mv in moves {
            self.make_move(mv.from, mv.to, mv.kind);
            let nodes = self.perft(side.opponent(), depth - 1);
            self.unmake_move();
            divide.push((mv, nodes));
        }
        divide
    }
}
