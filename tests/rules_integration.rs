use serde::Deserialize;

use chess_rules::board::prelude::*;

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    fen: String,
    moves: String,
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn squares_from_problem_move(mv: &str) -> (Square, Square) {
    let (from, to) = mv
        .split_once('-')
        .unwrap_or_else(|| panic!("malformed move '{mv}'"));
    (sq(from), sq(to))
}

fn load_problems() -> ProblemSet {
    let data = include_str!("data/problems.json");
    serde_json::from_str(data).expect("invalid problems.json")
}

#[test]
fn mate_in_one_suite() {
    for problem in load_problems()
        .problems
        .iter()
        .filter(|p| p.kind == "Mate in One")
    {
        let (mut board, side) = Board::from_fen(&problem.fen);
        let (from, to) = squares_from_problem_move(&problem.moves);

        board.calculate_all_moves(side);
        board
            .play(from, to)
            .unwrap_or_else(|err| panic!("{}: {err}", problem.name));

        let defender = side.opponent();
        assert!(
            board.is_checked(defender) && !board.has_legal_moves(defender),
            "mate in one failed for '{}' fen: {} move: {}",
            problem.name,
            problem.fen,
            problem.moves
        );
    }
}

#[test]
fn stalemate_suite() {
    for problem in load_problems()
        .problems
        .iter()
        .filter(|p| p.kind == "Stalemate")
    {
        let (mut board, side) = Board::from_fen(&problem.fen);
        assert!(!board.is_checked(side), "{} is check", problem.name);
        assert!(
            board.calculate_all_moves(side).is_empty(),
            "{} has legal moves",
            problem.name
        );
    }
}

#[test]
fn scripted_game_with_every_move_kind() {
    let mut board = Board::new();
    let mut side = Color::White;
    let line = [
        ("e2", "e4", MoveKind::TwoSquareAdvance),
        ("d7", "d5", MoveKind::TwoSquareAdvance),
        ("e4", "e5", MoveKind::Default),
        ("f7", "f5", MoveKind::TwoSquareAdvance),
        ("e5", "f6", MoveKind::EnPassant),
        ("g8", "h6", MoveKind::Default),
        ("f6", "g7", MoveKind::Default),
        ("e7", "e6", MoveKind::Default),
        ("g7", "h8", MoveKind::Promotion),
        ("b8", "c6", MoveKind::Default),
        ("g1", "f3", MoveKind::Default),
        ("c8", "d7", MoveKind::Default),
        ("f1", "e2", MoveKind::Default),
        ("d8", "e7", MoveKind::Default),
        ("e1", "g1", MoveKind::CastleKingside),
        ("e8", "c8", MoveKind::CastleQueenside),
    ];

    for (from, to, kind) in line {
        let moves = board.calculate_all_moves(side);
        assert_eq!(moves.kind(sq(from), sq(to)), Some(kind), "{from}{to}");
        board.apply_move(sq(from), sq(to), kind).unwrap();
        side = side.opponent();
    }

    assert!(board.is_occupied_by(sq("h8"), Color::White, PieceKind::Queen));
    assert!(board.is_occupied_by(sq("g1"), Color::White, PieceKind::King));
    assert!(board.is_occupied_by(sq("f1"), Color::White, PieceKind::Rook));
    assert!(board.is_occupied_by(sq("c8"), Color::Black, PieceKind::King));
    assert!(board.is_occupied_by(sq("d8"), Color::Black, PieceKind::Rook));
    assert!(!board.is_checked(Color::White));
    assert_eq!(board.history().len(), line.len());
    assert_eq!(board.history()[8].captured.unwrap().kind, PieceKind::Rook);

    let captured = board.history()[4].captured.unwrap();
    assert_eq!(captured.kind, PieceKind::Pawn);
    assert_eq!(captured.owner, Color::Black);

    while board.undo_last_move().is_ok() {}
    assert_eq!(board, Board::new());
}

#[test]
fn errors_are_reported() {
    let mut board = Board::new();
    assert_eq!(board.undo_last_move(), Err(BoardError::NoMoveToUndo));
    assert_eq!(
        board.play(sq("e2"), sq("e4")),
        Err(BoardError::MovesNotCalculated)
    );

    board.calculate_all_moves(Color::White);
    let err = board.play(sq("e1"), sq("e2")).unwrap_err();
    assert_eq!(err.to_string(), "Illegal move 'e1e2'");

    assert!(matches!(
        Board::try_from_fen("not a fen"),
        Err(FenError::TooFewParts { .. })
    ));
    assert!("z9".parse::<Square>().is_err());
}

#[test]
fn builder_positions_generate_moves() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build()
        .unwrap();

    let moves = board.calculate_all_moves(Color::White);
    assert_eq!(moves.kind(sq("e1"), sq("g1")), Some(MoveKind::CastleKingside));
    assert_eq!(moves.kind(sq("e1"), sq("c1")), Some(MoveKind::CastleQueenside));
    assert_eq!(moves.len(), 26);
}

#[cfg(feature = "serde")]
#[test]
fn move_records_serialize() {
    let mut board = Board::new();
    board.calculate_all_moves(Color::White);
    board.play(sq("e2"), sq("e4")).unwrap();

    let json = serde_json::to_string(board.last_move().unwrap()).unwrap();
    let record: MoveRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(&record, board.last_move().unwrap());
}
