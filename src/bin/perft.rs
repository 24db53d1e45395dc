use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_rules::board::Board;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let Some(depth) = args.get(1).and_then(|arg| arg.parse::<usize>().ok()) else {
        eprintln!("usage: perft <depth> [fen]");
        return ExitCode::FAILURE;
    };

    let (mut board, side) = if args.len() > 2 {
        match Board::try_from_fen(&args[2..].join(" ")) {
            Ok(parsed) => parsed,
            Err(err) => {
                eprintln!("invalid fen: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        (Board::new(), chess_rules::Color::White)
    };

    let start = Instant::now();
    let divide = board.perft_divide(side, depth);
    let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();
    let elapsed = start.elapsed();

    println!("side_to_move: {side}");
    println!("in_check: {}", board.is_checked(side));
    for (mv, nodes) in &divide {
        println!("{mv}: {nodes}");
    }
    println!();
    println!("moves: {}", divide.len());
    println!("nodes: {total}");
    println!("time: {elapsed:?}");
    ExitCode::SUCCESS
}
