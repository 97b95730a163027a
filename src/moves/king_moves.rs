//! King move generation: one step in each of the eight directions.
//!
//! Moving into an attacked square is not filtered here; a position rejects
//! any move whose successor leaves the mover's own king attacked.

use crate::board::builder::Builder;
use crate::chess_move::ChessMove;
use crate::piece::Piece;
use crate::square;

const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn king_moves(piece: &Piece, board: &Builder) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    let col = square::col(piece.square);
    for off in KING_OFFSETS {
        if (col == 0 && (off == -9 || off == -1 || off == 7))
            || (col == 7 && (off == -7 || off == 1 || off == 9))
        {
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::piece::{PieceClass, Team};

    #[test]
    fn centre_king_has_eight_moves() {
        let mut board = Builder::new(Team::White);
        let king = Piece::new(PieceClass::King, Team::White, 27);
        board.set_piece(king);
        assert_eq!(king_moves(&king, &board).len(), 8);
    }

    #[test]
    fn edge_king_never_wraps() {
        let mut board = Builder::new(Team::White);
        let king = Piece::new(PieceClass::King, Team::White, 24);
        board.set_piece(king);
        let moves = king_moves(&king, &board);
        assert_eq!(moves.len(), 5);
        assert!(moves.iter().all(|m| square::col(m.dest()) <= 1));
    }
}
