//! Queen move generation: the rook and bishop rays combined.

use crate::board::builder::Builder;
use crate::chess_move::ChessMove;
use crate::piece::Piece;
use crate::square;

const QUEEN_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn queen_moves(piece: &Piece, board: &Builder) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for off in QUEEN_OFFSETS {
        let mut dest = piece.square;
        loop {
            if (square::col(dest) == 0 && (off == -9 || off == -1 || off == 7))
                || (square::col(dest) == 7 && (off == -7 || off == 1 || off == 9))
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
    fn centre_queen_covers_all_eight_rays() {
        let mut board = Builder::new(Team::White);
        let queen = Piece::new(PieceClass::Queen, Team::White, 27);
        board.set_piece(queen);
        assert_eq!(queen_moves(&queen, &board).len(), 27);
    }

    #[test]
    fn rays_stop_at_the_first_piece() {
        let mut board = Builder::new(Team::White);
        let queen = Piece::new(PieceClass::Queen, Team::White, 0);
        board.set_piece(queen);
        board.set_piece(Piece::new(PieceClass::Pawn, Team::Black, 18));
        let moves = queen_moves(&queen, &board);
        assert!(moves.iter().any(|m| m.dest() == 18 && m.is_capture()));
        assert!(moves.iter().all(|m| m.dest() != 27));
    }
}
