//! Rook move generation, including castling.
//!
//! Castling is generated from the rook's slide: when the ray along the rank
//! reaches the rook's own unmoved king two or more squares away over empty
//! squares, a castling move is yielded carrying both pieces.

use crate::board::builder::Builder;
use crate::chess_move::ChessMove;
use crate::piece::{Piece, PieceClass};
use crate::square;

const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];

pub fn rook_moves(piece: &Piece, board: &Builder) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for off in ROOK_OFFSETS {
        let mut dest = piece.square;
        loop {
            // Horizontal rays stop at the board edge instead of wrapping.
            if (square::col(dest) == 0 && off == -1) || (square::col(dest) == 7 && off == 1) {
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
                Some(other) if other.team != piece.team => {
                    moves.push(ChessMove::Normal {
                        piece: *piece,
                        dest,
                        is_capture: true,
                    });
                    break;
                }
                Some(other) => {
                    if other.class == PieceClass::King
                        && off.abs() == 1
                        && !piece.has_moved
                        && !other.has_moved
                        && (other.square - piece.square).abs() >= 2
                    {
                        moves.push(ChessMove::Castling {
                            rook: *piece,
                            king: *other,
                            dest: other.square,
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
    use crate::piece::Team;

    #[test]
    fn open_rook_covers_both_lines() {
        let mut board = Builder::new(Team::White);
        let rook = Piece::new(PieceClass::Rook, Team::White, 27);
        board.set_piece(rook);
        assert_eq!(rook_moves(&rook, &board).len(), 14);
    }

    #[test]
    fn slide_stops_on_friend_and_captures_foe() {
        let mut board = Builder::new(Team::White);
        let rook = Piece::new(PieceClass::Rook, Team::White, 0);
        board.set_piece(rook);
        board.set_piece(Piece::new(PieceClass::Pawn, Team::White, 16));
        board.set_piece(Piece::new(PieceClass::Pawn, Team::Black, 2));
        let moves = rook_moves(&rook, &board);
        // Up the file: a2 only; along the rank: b1 and the capture on c1.
        assert_eq!(moves.len(), 3);
        assert!(moves.iter().any(|m| m.dest() == 2 && m.is_capture()));
        assert!(moves.iter().all(|m| m.dest() != 16));
    }

    #[test]
    fn castling_requires_unmoved_pieces_and_a_clear_rank() {
        let mut board = Builder::new(Team::White);
        let rook = Piece::new(PieceClass::Rook, Team::White, 7);
        board.set_piece(rook);
        board.set_piece(Piece::new(PieceClass::King, Team::White, 4));
        assert!(rook_moves(&rook, &board)
            .iter()
            .any(|m| matches!(m, ChessMove::Castling { .. })));

        // A blocker on f1 kills it.
        board.set_piece(Piece::new(PieceClass::Knight, Team::White, 5));
        assert!(rook_moves(&rook, &board)
            .iter()
            .all(|m| !matches!(m, ChessMove::Castling { .. })));

        // So does a king that has already moved.
        let mut board = Builder::new(Team::White);
        board.set_piece(rook);
        board.set_piece(Piece::new(PieceClass::King, Team::White, 5).moved_to(4));
        assert!(rook_moves(&rook, &board)
            .iter()
            .all(|m| !matches!(m, ChessMove::Castling { .. })));
    }
}
