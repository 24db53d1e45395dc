use serde::Deserialize;

use chess_rules::board::Board;

#[derive(Deserialize)]
struct PerftSet {
    positions: Vec<PerftPosition>,
}

#[derive(Deserialize)]
struct PerftPosition {
    name: String,
    fen: String,
    depths: Vec<(usize, u64)>,
    #[serde(default)]
    slow_depths: Vec<(usize, u64)>,
}

fn load_positions() -> PerftSet {
    let data = include_str!("data/perft_positions.json");
    serde_json::from_str(data).expect("invalid perft_positions.json")
}

fn check_counts(position: &PerftPosition, depths: &[(usize, u64)]) {
    let (mut board, side) = Board::try_from_fen(&position.fen)
        .unwrap_or_else(|err| panic!("bad fen for {}: {err}", position.name));

    for &(depth, expected) in depths {
        let nodes = board.perft(side, depth);
        assert_eq!(
            nodes, expected,
            "perft mismatch for '{}' at depth {}",
            position.name, depth
        );
    }
}

#[test]
fn perft_suite() {
    for position in &load_positions().positions {
        check_counts(position, &position.depths);
    }
}

#[test]
#[ignore]
fn perft_suite_deep() {
    for position in &load_positions().positions {
        check_counts(position, &position.slow_depths);
    }
}

#[test]
fn perft_divide_matches_total() {
    for position in &load_positions().positions {
        let (mut board, side) = Board::from_fen(&position.fen);
        let total: u64 = board
            .perft_divide(side, 2)
            .iter()
            .map(|(_, nodes)| nodes)
            .sum();
        assert_eq!(total, board.perft(side, 2), "{}", position.name);
    }
}
