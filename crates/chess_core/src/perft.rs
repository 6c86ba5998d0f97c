use crate::{board::Board, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(board, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = board.make_move(mv);
            nodes += inner(board, depth - 1, rest);
            board.unmake_move(mv, undo);
        }
        nodes
    }

    // one move buffer per remaining ply
    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, depth, &mut layers[..])
}

/// Node count below each root move, in generation order.
pub fn perft_divide(board: &mut Board, depth: u8) -> Vec<(Move, u64)> {
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(board, &mut roots);
    roots
        .into_iter()
        .map(|mv| {
            let undo = board.make_move(mv);
            let nodes = perft(board, depth.saturating_sub(1));
            board.unmake_move(mv, undo);
            (mv, nodes)
        })
        .collect()
}
