//! Knight move generation: eight fixed offsets with per-offset column
//! exclusions instead of arithmetic wraparound.

use crate::board::builder::Builder;
use crate::chess_move::ChessMove;
use crate::piece::Piece;
use crate::square;

const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

fn wraps(col: i8, off: i8) -> bool {
    match col {
        0 => matches!(off, -17 | -10 | 6 | 15),
        1 => matches!(off, -10 | 6),
        6 => matches!(off, -6 | 10),
        7 => matches!(off, -15 | -6 | 10 | 17),
        _ => false,
    }
}

pub fn knight_moves(piece: &Piece, board: &Builder) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for off in KNIGHT_OFFSETS {
        if wraps(square::col(piece.square), off) {
            continue;
        }
        let Ok(dest) = square::offset(piece.square, off) else {
            continue;
        };
        match board.piece_at(dest) {
            Some(other) if other.team == piece.team => continue,
            occupant => moves.push(ChessMove::Normal {
                piece: *piece,
                dest,
                is_capture: occupant.is_some(),
            }),
        }
    }
    moves
}
