use crate::board::{Board, DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS};
use crate::types::*;

const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the board only once.
///
/// Order is deterministic: origin squares ascending (a1..h8), then per-piece
/// direction order.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
/// `board` is used as scratch space and is restored before returning.
pub fn legal_moves_into(board: &mut Board, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(board, out);

    let mover = board.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable board.
    out.retain(|&mv| {
        let undo = board.make_move(mv);
        let illegal = board.in_check(mover);
        board.unmake_move(mv, undo);
        !illegal
    });
}

/// True if the side to move has at least one legal move. Stops at the first.
pub fn has_legal_move(board: &Board) -> bool {
    let mut tmp = board.clone();
    let mut pseudo = Vec::with_capacity(64);
    pseudo_moves(&tmp, &mut pseudo);
    let mover = tmp.side_to_move;
    pseudo.into_iter().any(|mv| {
        let undo = tmp.make_move(mv);
        let ok = !tmp.in_check(mover);
        tmp.unmake_move(mv, undo);
        ok
    })
}

/// Moves that obey each piece's movement rules, ignoring self-check.
pub fn pseudo_moves(board: &Board, out: &mut Vec<Move>) {
    let us = board.side_to_move;
    for (from, pc) in board.pieces() {
        if pc.color != us {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, from, us, out),
            PieceKind::Knight => gen_steps(board, from, us, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => gen_slider(board, from, us, &DIAGONALS, out),
            PieceKind::Rook => gen_slider(board, from, us, &ORTHOGONALS, out),
            PieceKind::Queen => gen_slider(board, from, us, &QUEEN_DIRS, out),
            PieceKind::King => {
                gen_steps(board, from, us, &KING_DELTAS, out);
                gen_castle(board, from, us, out);
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, capture: bool, out: &mut Vec<Move>) {
    if to.rank() == 0 || to.rank() == 7 {
        for pk in PieceKind::PROMOTIONS {
            out.push(Move::promotion(from, to, pk, capture));
        }
    } else if capture {
        out.push(Move::with_flag(from, to, MoveFlag::Capture));
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();
    let start_rank: i8 = match c {
        Color::White => 1,
        Color::Black => 6,
    };

    // forward 1, then forward 2 from the start rank through the same empty square
    if let Some(to) = from.offset(0, dir)
        && board.piece_at(to).is_none()
    {
        push_pawn_move(from, to, false, out);
        if from.rank() == start_rank
            && let Some(to2) = from.offset(0, 2 * dir)
            && board.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, true, out),
            Some(_) => {}
            None if board.en_passant == Some(to) => {
                out.push(Move::with_flag(from, to, MoveFlag::EnPassant));
            }
            None => {}
        }
    }
}

/// Single-step movers: knight and king.
fn gen_steps(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in deltas {
        if let Some(to) = from.offset(df, dr) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::with_flag(from, to, MoveFlag::Capture)),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::with_flag(from, to, MoveFlag::Capture));
                    break;
                }
                _ => break,
            }
            cur = to.offset(df, dr);
        }
    }
}

struct CastleSide {
    kingside: bool,
    rook_file: i8,
    king_to_file: i8,
    /// Squares that must be empty, as files on the back rank.
    empty_files: &'static [i8],
    /// Squares the king crosses or lands on, as files on the back rank.
    safe_files: &'static [i8],
}

const CASTLE_SIDES: [CastleSide; 2] = [
    CastleSide {
        kingside: true,
        rook_file: 7,
        king_to_file: 6,
        empty_files: &[5, 6],
        safe_files: &[5, 6],
    },
    CastleSide {
        kingside: false,
        rook_file: 0,
        king_to_file: 2,
        empty_files: &[3, 2, 1],
        safe_files: &[3, 2],
    },
];

fn gen_castle(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let back: i8 = match c {
        Color::White => 0,
        Color::Black => 7,
    };
    // Must be on the home king square
    if from.file() != 4 || from.rank() != back {
        return;
    }
    if !(board.castling.kingside(c) || board.castling.queenside(c)) {
        return;
    }
    // Can't castle out of check.
    if board.in_check(c) {
        return;
    }

    let enemy = c.other();
    let rook = Piece::new(c, PieceKind::Rook);
    let on_back = |file: i8| Square::try_new(file, back);

    for side in &CASTLE_SIDES {
        let has_right = if side.kingside {
            board.castling.kingside(c)
        } else {
            board.castling.queenside(c)
        };
        if !has_right {
            continue;
        }
        if on_back(side.rook_file).and_then(|s| board.piece_at(s)) != Some(rook) {
            continue;
        }
        let path_empty = side
            .empty_files
            .iter()
            .all(|&f| on_back(f).is_some_and(|s| board.piece_at(s).is_none()));
        let path_safe = side
            .safe_files
            .iter()
            .all(|&f| on_back(f).is_some_and(|s| !board.is_square_attacked(s, enemy)));
        if path_empty
            && path_safe
            && let Some(to) = on_back(side.king_to_file)
        {
            out.push(Move::with_flag(from, to, MoveFlag::Castle));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
