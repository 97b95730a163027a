//! Bishop move generation: the four diagonal rays.

use crate::board::builder::Builder;
use crate::chess_move::ChessMove;
use crate::piece::Piece;
use crate::square;

const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];

pub fn bishop_moves(piece: &Piece, board: &Builder) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for off in BISHOP_OFFSETS {
        let mut dest = piece.square;
        loop {
            if (square::col(dest) == 0 && (off == -9 || off == 7))
                || (square::col(dest) == 7 && (off == -7 || off == 9))
            {
                break;
            }
            if !square::is_valid(dest + off) {
                break;
            }
            dest += off;
            match board.piece_at(dest) {
                None => moves.push(ChessMove::Normal {
                    piece: *piece,
                    dest,
                    is_capture: false,
                }),
                Some(other) => {
                    if other.team != piece.team {
                        moves.push(ChessMove::Normal {
                            piece: *piece,
                            dest,
                            is_capture: true,
                        });
                    }
                    break;
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::piece::{PieceClass, Team};

    #[test]
    fn centre_bishop_covers_both_diagonals() {
        let mut board = Builder::new(Team::White);
        let bishop = Piece::new(PieceClass::Bishop, Team::White, 27);
        board.set_piece(bishop);
        assert_eq!(bishop_moves(&bishop, &board).len(), 13);
    }

    #[test]
    fn corner_bishop_never_wraps() {
        let mut board = Builder::new(Team::White);
        let bishop = Piece::new(PieceClass::Bishop, Team::White, 7);
        board.set_piece(bishop);
        let moves = bishop_moves(&bishop, &board);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|m| square::col(m.dest()) != 7));
    }
}
