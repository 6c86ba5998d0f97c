use std::time::Instant;

use rayon::prelude::*;

use chess_core::{Board, perft, perft_divide};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 250_000;

/// Published node counts (chessprogramming.org "Perft Results").
const SUITE: &[(&str, &[(u8, u64)])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281), (5, 4_865_609)],
    ),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[(1, 48), (2, 2_039), (3, 97_862), (4, 4_085_603)],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238), (5, 674_624)],
    ),
    (
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[(1, 6), (2, 264), (3, 9_467), (4, 422_333)],
    ),
    (
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        &[(1, 44), (2, 1_486), (3, 62_379)],
    ),
    (
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        &[(1, 46), (2, 2_079), (3, 89_890)],
    ),
];

#[test]
fn perft_standard_suite() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    SUITE.par_iter().enumerate().for_each(|(idx, (fen, depths))| {
        let case_start = Instant::now();
        let mut ran_depths = Vec::new();

        for &(depth, expected) in depths.iter() {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {depth} for case {} (expected {expected} nodes); set {FULL_PERFT_ENV}=1 to run all.",
                    idx + 1
                );
                continue;
            }
            let mut board = Board::from_fen(fen).unwrap();
            let before = board.clone();
            let got = perft(&mut board, depth);
            assert_eq!(
                got, expected,
                "Perft mismatch for FEN '{fen}' at depth {depth}"
            );
            assert_eq!(board, before, "perft must leave the board unchanged");
            ran_depths.push(depth);
        }

        println!(
            "Case {:02} done: depths {:?}, elapsed {:.3?}",
            idx + 1,
            ran_depths,
            case_start.elapsed()
        );
    });
}

#[test]
fn divide_sums_to_perft() {
    let mut board = Board::from_fen(SUITE[1].0).unwrap();
    let split = perft_divide(&mut board, 2);
    assert_eq!(split.len(), 48);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 2_039);
}

#[test]
fn perft_depth_zero_is_one() {
    let mut board = Board::new_game();
    assert_eq!(perft(&mut board, 0), 1);
}
