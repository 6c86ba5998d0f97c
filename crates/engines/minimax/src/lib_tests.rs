use super::*;
use chess_core::legal_moves;

/// Black Ka8, White Kc7 and Rh1: Ra1 is the only mate.
const ROOK_MATE: &str = "k7/2K5/8/8/8/8/8/7R w - - 0 1";

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

/// Depth-1 minimax by hand: score every child statically and keep the first
/// best one for the side to move.
fn brute_force_depth_one(board: &Board) -> (Move, i32) {
    let side = board.side_to_move;
    let mut best: Option<(Move, i32)> = None;
    for mv in legal_moves(board) {
        let score = evaluate(&board.apply(mv).unwrap());
        if best.is_none_or(|(_, b)| better_for(side, score, b)) {
            best = Some((mv, score));
        }
    }
    best.unwrap()
}

#[test]
fn depth_one_matches_brute_force() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ] {
        let pos = board(fen);
        let (mv, score) = brute_force_depth_one(&pos);
        for alpha_beta in [false, true] {
            let mut engine = MinimaxEngine::new(MinimaxConfig {
                depth: 1,
                alpha_beta,
                ..MinimaxConfig::default()
            });
            let result = engine.search(&pos);
            assert_eq!(result.best_move, Some(mv), "{fen}");
            assert_eq!(result.score, score, "{fen}");
            assert_eq!(result.depth, 1);
        }
    }
}

#[test]
fn finds_rook_mate_at_every_depth() {
    let pos = board(ROOK_MATE);
    for depth in 1..=3 {
        let mut engine = MinimaxEngine::with_depth(depth);
        let result = engine.search(&pos);
        assert_eq!(
            result.best_move.map(|m| m.to_string()).as_deref(),
            Some("h1a1"),
            "depth {depth}"
        );
        assert_eq!(result.score, MATE_SCORE - 1);
        assert!(result.nodes > 0);
        assert_eq!(engine.nodes(), result.nodes);
    }
}

#[test]
fn mate_outranks_huge_weights() {
    let config: MinimaxConfig = toml::from_str(
        r#"
            depth = 2
            [weights]
            mobility_weight = 2000000000
            center_bonus = 2000000000
        "#,
    )
    .unwrap();
    let mut engine = MinimaxEngine::new(config);
    let result = engine.search(&board(ROOK_MATE));
    assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("h1a1"));
    assert_eq!(result.score, MATE_SCORE - 1);
}

/// Only material counts, so every root move below scores the same.
const MATERIAL_ONLY: EvalWeights = EvalWeights {
    mobility_weight: 0,
    capture_bonus: 0,
    center_bonus: 0,
};

#[test]
fn ties_go_to_the_first_generated_move() {
    for fen in [
        "4k3/8/8/8/8/8/8/4K2R w - - 0 1",
        "4k2r/8/8/8/8/8/8/4K3 b - - 0 1",
    ] {
        let pos = board(fen);
        let first = legal_moves(&pos)[0];
        for depth in 1..=2 {
            for alpha_beta in [false, true] {
                let mut engine = MinimaxEngine::new(MinimaxConfig {
                    depth,
                    alpha_beta,
                    weights: MATERIAL_ONLY,
                });
                let ranked = engine.rank_moves(&pos);
                assert!(ranked.iter().all(|s| s.score == ranked[0].score), "{fen}");
                assert_eq!(ranked.iter().map(|s| s.mv).collect::<Vec<_>>(), legal_moves(&pos));
                assert_eq!(engine.select_move(&pos).unwrap(), first, "{fen} depth {depth}");
            }
        }
    }
}

#[test]
fn black_finds_mate_too() {
    // colours reversed: Black Rh8 mates on a8
    let pos = board("7r/8/8/8/8/8/2k5/K7 b - - 0 1");
    let mut engine = MinimaxEngine::with_depth(2);
    let result = engine.search(&pos);
    assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("h8a8"));
    assert_eq!(result.score, -(MATE_SCORE - 1));
}

#[test]
fn takes_a_hanging_queen() {
    let pos = board("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    let mut engine = MinimaxEngine::with_depth(1);
    assert_eq!(engine.select_move(&pos).unwrap().to_string(), "d2d5");
}

#[test]
fn no_legal_move_is_an_error() {
    let mut engine = MinimaxEngine::default();

    let mated = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    let result = engine.search(&mated);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -MATE_SCORE);
    assert_eq!(engine.select_move(&mated), Err(ChessError::NoLegalMove));

    let stalemate = board("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert_eq!(engine.search(&stalemate).score, 0);
    assert_eq!(engine.select_move(&stalemate), Err(ChessError::NoLegalMove));
}

#[test]
fn rank_moves_is_sorted_best_first() {
    let pos = board(ROOK_MATE);
    let mut engine = MinimaxEngine::with_depth(2);
    let ranked = engine.rank_moves(&pos);

    assert_eq!(ranked.len(), legal_moves(&pos).len());
    assert_eq!(ranked[0].mv.to_string(), "h1a1");
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(Some(ranked[0].mv), engine.search(&pos).best_move);
}

#[test]
fn rank_moves_for_black_puts_lowest_first() {
    let pos = board("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    let mut engine = MinimaxEngine::with_depth(1);
    let ranked = engine.rank_moves(&pos);
    assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
    assert_eq!(Some(ranked[0].mv), engine.search(&pos).best_move);
}

#[test]
fn zero_depth_still_picks_a_move() {
    let mut engine = MinimaxEngine::with_depth(0);
    let result = engine.search(&Board::new_game());
    assert_eq!(result.depth, 1);
    assert!(result.best_move.is_some());
}

#[test]
fn config_loads_from_toml() {
    let cfg: MinimaxConfig = toml::from_str(
        r#"
            depth = 2
            alpha_beta = false

            [weights]
            mobility_weight = 0
        "#,
    )
    .unwrap();
    assert_eq!(cfg.depth, 2);
    assert!(!cfg.alpha_beta);
    assert_eq!(cfg.weights.mobility_weight, 0);
    assert_eq!(cfg.weights.capture_bonus, EvalWeights::default().capture_bonus);

    let empty: MinimaxConfig = toml::from_str("").unwrap();
    assert_eq!(empty, MinimaxConfig::default());
}

#[test]
fn engine_name() {
    assert_eq!(MinimaxEngine::default().name(), "Minimax v1.0");
}
