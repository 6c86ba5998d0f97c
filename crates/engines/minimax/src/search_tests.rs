use super::*;
use chess_core::legal_moves;

const POSITIONS: [(&str, u8); 5] = [
    ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 3),
    ("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 2 3", 2),
    ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3),
    ("6k1/5ppp/8/8/8/8/5PPP/3R2K1 b - - 0 1", 3),
    ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2),
];

fn run(fen: &str, depth: u8, alpha_beta: bool) -> (Option<ScoredMove>, u64) {
    let weights = EvalWeights::default();
    let mut searcher = Searcher::new(&weights, alpha_beta);
    let best = searcher.best_move(&Board::from_fen(fen).unwrap(), depth);
    (best, searcher.nodes)
}

#[test]
fn alpha_beta_picks_the_same_move() {
    for (fen, depth) in POSITIONS {
        let (plain, plain_nodes) = run(fen, depth, false);
        let (pruned, pruned_nodes) = run(fen, depth, true);
        assert_eq!(plain, pruned, "{fen} at depth {depth}");
        assert!(pruned_nodes <= plain_nodes, "{fen}: pruning visited more nodes");
    }
}

#[test]
fn best_move_score_matches_full_scores() {
    let weights = EvalWeights::default();
    for (fen, depth) in &POSITIONS[..4] {
        let board = Board::from_fen(fen).unwrap();
        let side = board.side_to_move;
        let all = Searcher::new(&weights, true).score_all(&board, *depth);
        let best = Searcher::new(&weights, true).best_move(&board, *depth).unwrap();

        let first_best = all
            .iter()
            .copied()
            .reduce(|a, b| if better_for(side, b.score, a.score) { b } else { a })
            .unwrap();
        assert_eq!(best, first_best, "{fen}");
    }
}

#[test]
fn score_all_follows_generation_order() {
    let weights = EvalWeights::default();
    let board = Board::new_game();
    let scored = Searcher::new(&weights, false).score_all(&board, 1);
    let moves: Vec<_> = scored.iter().map(|s| s.mv).collect();
    assert_eq!(moves, legal_moves(&board));
}

#[test]
fn terminal_scores() {
    // White is mated (fool's mate)
    let mated = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
        .unwrap();
    assert_eq!(terminal_score(&mated, 0), -MATE_SCORE);
    assert_eq!(terminal_score(&mated, 3), -(MATE_SCORE - 3));

    let stalemate = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(terminal_score(&stalemate, 2), 0);
}

#[test]
fn no_moves_means_no_best_move() {
    let (best, nodes) = run("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1", 3, true);
    assert_eq!(best, None);
    assert_eq!(nodes, 1);
}

#[test]
fn shorter_mate_is_preferred() {
    let (best, _) = run("k7/2K5/8/8/8/8/8/7R w - - 0 1", 3, false);
    assert_eq!(best.map(|b| b.score), Some(MATE_SCORE - 1));
}

#[test]
fn better_for_is_strict() {
    assert!(better_for(Color::White, 3, 2));
    assert!(!better_for(Color::White, 2, 2));
    assert!(better_for(Color::Black, -3, 2));
    assert!(!better_for(Color::Black, 2, 2));
}

#[test]
fn scored_move_display() {
    let mv = legal_moves(&Board::new_game())[0];
    let s = ScoredMove { mv, score: 35 };
    assert_eq!(s.to_string(), format!("{mv} (+35)"));
}
