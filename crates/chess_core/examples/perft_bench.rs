//! Perft benchmark for profiling move generation.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]
//!
//! With no FEN the standard suite runs; with a FEN, that position is split
//! per root move so a mismatch against a reference engine can be narrowed down.

use chess_core::{Board, perft, perft_divide};
use std::env;
use std::process::ExitCode;
use std::time::{Duration, Instant};

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Position 4",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
    ),
    (
        "Position 5",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ -",
    ),
];

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    match args.get(2) {
        Some(fen) => match Board::from_fen(fen) {
            Ok(mut board) => {
                let start = Instant::now();
                let mut total = 0u64;
                for (mv, nodes) in perft_divide(&mut board, depth) {
                    println!("{mv}: {nodes}");
                    total += nodes;
                }
                let elapsed = start.elapsed();
                println!();
                println!("Nodes: {total}");
                println!("Time: {elapsed:.3?} ({:.0} nps)", nps(total, elapsed));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        None => {
            println!("=== Perft Benchmark Suite (depth {depth}) ===");
            let mut total_nodes = 0u64;
            let mut total_time = Duration::ZERO;
            for (name, fen) in TEST_POSITIONS {
                let Ok(mut board) = Board::from_fen(fen) else {
                    eprintln!("{name}: bad FEN");
                    return ExitCode::FAILURE;
                };
                print!("{name:.<30}");
                let start = Instant::now();
                let nodes = perft(&mut board, depth);
                let elapsed = start.elapsed();
                total_nodes += nodes;
                total_time += elapsed;
                println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)", nps(nodes, elapsed));
            }
            println!("{:=<70}", "");
            println!(
                "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
                nps(total_nodes, total_time)
            );
            ExitCode::SUCCESS
        }
    }
}
