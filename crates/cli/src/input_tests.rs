use super::*;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

#[test]
fn words_are_commands() {
    let b = Board::new_game();
    assert_eq!(parse_command(&b, "moves\n"), Ok(Command::Moves));
    assert_eq!(parse_command(&b, "  HINT "), Ok(Command::Hint));
    assert_eq!(parse_command(&b, "undo"), Ok(Command::Undo));
    assert_eq!(parse_command(&b, "?"), Ok(Command::Help));
    assert_eq!(parse_command(&b, "q"), Ok(Command::Quit));
    assert_eq!(parse_command(&b, "exit"), Ok(Command::Quit));
    assert_eq!(parse_command(&b, "   \n"), Err(InputError::Empty));
}

#[test]
fn coordinate_moves_resolve_to_legal_moves() {
    let b = Board::new_game();
    let Command::Move(mv) = parse_command(&b, "E2E4\n").unwrap() else {
        panic!("expected a move");
    };
    assert_eq!(mv.to_string(), "e2e4");
    assert!(legal_moves(&b).contains(&mv));
}

#[test]
fn malformed_text_is_bad_notation() {
    let b = Board::new_game();
    for text in ["e2", "e2e4e5", "z9e4", "e2e9", "e2e4x", "e7e8k", "é2e4"] {
        assert!(
            matches!(parse_move(&b, text), Err(InputError::BadNotation(_))),
            "{text}"
        );
    }
}

#[test]
fn illegal_moves_are_rejected() {
    let b = Board::new_game();
    for text in ["e2e5", "e7e5", "a1a2", "e1g1", "d4d5"] {
        assert_eq!(parse_move(&b, text), Err(InputError::Illegal(text.into())), "{text}");
    }
}

#[test]
fn castling_gets_its_flag() {
    let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert!(parse_move(&b, "e1g1").unwrap().is_castle());
    assert!(parse_move(&b, "e1c1").unwrap().is_castle());
}

#[test]
fn en_passant_gets_its_flag() {
    let b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    assert!(parse_move(&b, "e5d6").unwrap().is_en_passant());
}

#[test]
fn promotion_piece_is_honoured() {
    let b = board("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    assert_eq!(parse_move(&b, "e7e8").unwrap().promo, Some(PieceKind::Queen));
    assert_eq!(parse_move(&b, "e7e8n").unwrap().promo, Some(PieceKind::Knight));
    assert_eq!(parse_move(&b, "e7e8r").unwrap().promo, Some(PieceKind::Rook));
    // a piece letter on a non-promoting move
    assert_eq!(
        parse_move(&Board::new_game(), "e2e4q"),
        Err(InputError::Illegal("e2e4q".into()))
    );
}
