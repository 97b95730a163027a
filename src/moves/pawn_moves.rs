//! Pawn move generation: pushes, double steps, diagonal captures,
//! en-passant, and promotion substitution.
//!
//! Any pawn move landing on the farthest rank is wrapped in a `Promotion`
//! carrying the underlying move; the promoted piece is fixed to a queen.

use crate::board::builder::Builder;
use crate::chess_move::ChessMove;
use crate::piece::{Piece, PieceClass};
use crate::square;

const PAWN_OFFSETS: [i8; 4] = [7, 8, 9, 16];

fn promote_if_on_last_rank(piece: &Piece, mv: ChessMove) -> ChessMove {
    if square::row(mv.dest()) == piece.team.promotion_row() {
        let dest = mv.dest();
        ChessMove::Promotion {
            inner: Box::new(mv),
            promote_to: Piece::new(PieceClass::Queen, piece.team, dest).moved_to(dest),
        }
    } else {
        mv
    }
}

pub fn pawn_moves(piece: &Piece, board: &Builder) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    let dir = piece.team.forward();
    let col = square::col(piece.square);
    for off in PAWN_OFFSETS {
        let step = off * dir;
        if (col == 0 && (step == -9 || step == 7)) || (col == 7 && (step == -7 || step == 9)) {
            continue;
        }
        let Ok(dest) = square::offset(piece.square, step) else {
            continue;
        };
        match off {
            7 | 9 => match board.piece_at(dest) {
                Some(other) if other.team != piece.team => {
                    moves.push(promote_if_on_last_rank(
                        piece,
                        ChessMove::Normal {
                            piece: *piece,
                            dest,
                            is_capture: true,
                        },
                    ));
                }
                Some(_) => {}
                None => {
                    // En-passant: the target pawn double-stepped last ply,
                    // stands laterally adjacent, and dies on its own square.
                    if let Some(target) = board.en_passant() {
                        if target.team != piece.team
                            && (target.square - dest).abs() == 8
                            && (target.square - piece.square).abs() == 1
                        {
                            moves.push(ChessMove::EnPassantCapture {
                                pawn: *piece,
                                dest,
                                captured: *target,
                            });
                        }
                    }
                }
            },
            16 => {
                let behind = dest - dir * 8;
                if piece.has_moved
                    || board.piece_at(dest).is_some()
                    || board.piece_at(behind).is_some()
                {
                    continue;
                }
                moves.push(ChessMove::PawnJump {
                    piece: *piece,
                    dest,
                });
            }
            _ => {
                if board.piece_at(dest).is_none() {
                    moves.push(promote_if_on_last_rank(
                        piece,
                        ChessMove::Normal {
                            piece: *piece,
                            dest,
                            is_capture: false,
                        },
                    ));
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
    fn unmoved_pawn_pushes_one_or_two() {
        let mut board = Builder::new(Team::White);
        let pawn = Piece::new(PieceClass::Pawn, Team::White, 12);
        board.set_piece(pawn);
        let moves = pawn_moves(&pawn, &board);
        assert_eq!(moves.len(), 2);
        assert!(moves
            .iter()
            .any(|m| matches!(m, ChessMove::PawnJump { .. }) && m.dest() == 28));
        assert!(moves.iter().any(|m| m.dest() == 20));
    }

    #[test]
    fn blocked_double_step_is_suppressed() {
        let mut board = Builder::new(Team::White);
        let pawn = Piece::new(PieceClass::Pawn, Team::White, 12);
        board.set_piece(pawn);
        board.set_piece(Piece::new(PieceClass::Knight, Team::Black, 28));
        let moves = pawn_moves(&pawn, &board);
        assert!(moves.iter().all(|m| !matches!(m, ChessMove::PawnJump { .. })));

        // A blocker on the intervening square suppresses both pushes.
        let mut board = Builder::new(Team::White);
        board.set_piece(pawn);
        board.set_piece(Piece::new(PieceClass::Knight, Team::Black, 20));
        assert!(pawn_moves(&pawn, &board).is_empty());
    }

    #[test]
    fn captures_only_diagonally_and_never_across_the_edge() {
        let mut board = Builder::new(Team::White);
        let pawn = Piece::new(PieceClass::Pawn, Team::White, 8);
        board.set_piece(pawn);
        board.set_piece(Piece::new(PieceClass::Pawn, Team::Black, 17));
        // From a2 the wrapped "capture" 8+7 would land on h2 = 15.
        board.set_piece(Piece::new(PieceClass::Pawn, Team::Black, 15));
        let moves = pawn_moves(&pawn, &board);
        assert!(moves.iter().any(|m| m.dest() == 17 && m.is_capture()));
        assert!(moves.iter().all(|m| m.dest() != 15));
    }

    #[test]
    fn black_pawn_moves_toward_row_zero() {
        let mut board = Builder::new(Team::Black);
        let pawn = Piece::new(PieceClass::Pawn, Team::Black, 52);
        board.set_piece(pawn);
        let dests: Vec<_> = pawn_moves(&pawn, &board).iter().map(|m| m.dest()).collect();
        assert_eq!(dests, vec![44, 36]);
    }

    #[test]
    fn push_to_last_rank_promotes_to_queen() {
        let mut board = Builder::new(Team::White);
        let pawn = Piece::new(PieceClass::Pawn, Team::White, 55).moved_to(55);
        board.set_piece(pawn);
        let moves = pawn_moves(&pawn, &board);
        assert_eq!(moves.len(), 1);
        match &moves[0] {
            ChessMove::Promotion { inner, promote_to } => {
                assert_eq!(inner.dest(), 63);
                assert_eq!(promote_to.class, PieceClass::Queen);
                assert_eq!(promote_to.square, 63);
            }
            other => panic!("expected promotion, got {other:?}"),
        }
    }

    #[test]
    fn capture_into_last_rank_also_promotes() {
        let mut board = Builder::new(Team::White);
        let pawn = Piece::new(PieceClass::Pawn, Team::White, 54).moved_to(54);
        board.set_piece(pawn);
        board.set_piece(Piece::new(PieceClass::Rook, Team::Black, 63));
        let moves = pawn_moves(&pawn, &board);
        assert_eq!(moves.len(), 2);
        assert!(moves
            .iter()
            .all(|m| matches!(m, ChessMove::Promotion { .. })));
        assert!(moves
            .iter()
            .any(|m| m.dest() == 63 && m.is_capture()));
        assert!(moves.iter().any(|m| m.dest() == 62 && !m.is_capture()));
    }

    #[test]
    fn en_passant_requires_adjacency_and_a_fresh_double_step() {
        let mut board = Builder::new(Team::White);
        let pawn = Piece::new(PieceClass::Pawn, Team::White, 36).moved_to(36);
        board.set_piece(pawn);
        let target = Piece::new(PieceClass::Pawn, Team::Black, 51).moved_to(35);
        board.set_piece(target);
        board.set_en_passant(target);
        let moves = pawn_moves(&pawn, &board);
        assert!(moves
            .iter()
            .any(|m| matches!(m, ChessMove::EnPassantCapture { .. }) && m.dest() == 43));

        // A distant target pawn offers nothing.
        let mut board = Builder::new(Team::White);
        board.set_piece(pawn);
        let far = Piece::new(PieceClass::Pawn, Team::Black, 49).moved_to(33);
        board.set_piece(far);
        board.set_en_passant(far);
        assert!(pawn_moves(&pawn, &board)
            .iter()
            .all(|m| !matches!(m, ChessMove::EnPassantCapture { .. })));
    }
}
