//! The five ways a position can change, as one owned tagged union.
//!
//! Every variant carries the moving piece and a destination square, and
//! `execute` builds a brand-new position: the prior occupant set minus the
//! mover (and anything captured) plus the mover's post-move value, with the
//! side to move flipped. `Promotion` wraps its underlying pawn move as a
//! boxed inner value and substitutes the promoted piece afterwards.

use crate::board::builder::Builder;
use crate::board::position::Position;
use crate::errors::EngineError;
use crate::piece::Piece;
use crate::square::Square;

#[derive(Debug, Clone, PartialEq)]
pub enum ChessMove {
    Normal {
        piece: Piece,
        dest: Square,
        is_capture: bool,
    },
    /// A pawn double step. The moved pawn becomes the en-passant target of
    /// the resulting position for exactly one ply.
    PawnJump { piece: Piece, dest: Square },
    /// Generated from the rook's slide; `dest` is the king's home square,
    /// and both post-move squares are derived from it on execution.
    Castling {
        rook: Piece,
        king: Piece,
        dest: Square,
    },
    /// The captured pawn is tracked separately because it does not stand on
    /// the destination square.
    EnPassantCapture {
        pawn: Piece,
        dest: Square,
        captured: Piece,
    },
    Promotion {
        inner: Box<ChessMove>,
        promote_to: Piece,
    },
}

impl ChessMove {
    /// The piece making this move. For castling that is the rook, matching
    /// how the move is generated.
    pub fn piece(&self) -> &Piece {
        match self {
            ChessMove::Normal { piece, .. } => piece,
            ChessMove::PawnJump { piece, .. } => piece,
            ChessMove::Castling { rook, .. } => rook,
            ChessMove::EnPassantCapture { pawn, .. } => pawn,
            ChessMove::Promotion { inner, .. } => inner.piece(),
        }
    }

    pub fn dest(&self) -> Square {
        match self {
            ChessMove::Normal { dest, .. } => *dest,
            ChessMove::PawnJump { dest, .. } => *dest,
            ChessMove::Castling { dest, .. } => *dest,
            ChessMove::EnPassantCapture { dest, .. } => *dest,
            ChessMove::Promotion { inner, .. } => inner.dest(),
        }
    }

    pub fn is_capture(&self) -> bool {
        match self {
            ChessMove::Normal { is_capture, .. } => *is_capture,
            ChessMove::PawnJump { .. } => false,
            ChessMove::Castling { .. } => false,
            ChessMove::EnPassantCapture { .. } => true,
            ChessMove::Promotion { inner, .. } => inner.is_capture(),
        }
    }

    /// The piece this move captures on `position`, if any. Used for the
    /// captured-piece display bookkeeping and the attack heuristic; never
    /// for legality.
    pub fn captured_piece(&self, position: &Position) -> Option<Piece> {
        match self {
            ChessMove::EnPassantCapture { captured, .. } => Some(*captured),
            ChessMove::Promotion { inner, .. } => inner.captured_piece(position),
            _ if self.is_capture() => position.tiles()[self.dest() as usize],
            _ => None,
        }
    }

    /// Builds the successor position this move produces. The input position
    /// is never mutated. Fails only when the successor violates a
    /// construction invariant (a side without a king), which callers treat
    /// as a per-candidate skip.
    pub fn execute(&self, position: &Position) -> Result<Position, EngineError> {
        match self {
            ChessMove::Normal { piece, dest, .. } => {
                let mut builder = Builder::new(position.side_to_move().opposite());
                for other in position.pieces() {
                    if other == piece || other.square == *dest {
                        continue;
                    }
                    builder.set_piece(*other);
                }
                builder.set_piece(piece.moved_to(*dest));
                builder.build()
            }
            ChessMove::PawnJump { piece, dest } => {
                let mut builder = Builder::new(position.side_to_move().opposite());
                for other in position.pieces() {
                    if other == piece {
                        continue;
                    }
                    builder.set_piece(*other);
                }
                let pawn = piece.moved_to(*dest);
                builder.set_piece(pawn);
                builder.set_en_passant(pawn);
                builder.build()
            }
            ChessMove::Castling { rook, king, .. } => {
                let mut builder = Builder::new(position.side_to_move().opposite());
                for other in position.pieces() {
                    if other == rook || other == king {
                        continue;
                    }
                    builder.set_piece(*other);
                }
                // King moves two squares toward the rook; the rook lands
                // adjacent on the side it came from.
                let toward_rook = if rook.square > king.square { 1 } else { -1 };
                builder.set_piece(king.moved_to(king.square + 2 * toward_rook));
                builder.set_piece(rook.moved_to(king.square + toward_rook));
                builder.build()
            }
            ChessMove::EnPassantCapture {
                pawn,
                dest,
                captured,
            } => {
                let mut builder = Builder::new(position.side_to_move().opposite());
                for other in position.pieces() {
                    if other == pawn || other == captured {
                        continue;
                    }
                    builder.set_piece(*other);
                }
                builder.set_piece(pawn.moved_to(*dest));
                builder.build()
            }
            ChessMove::Promotion { inner, promote_to } => {
                let after = inner.execute(position)?;
                let mut builder = Builder::new(after.side_to_move());
                for other in after.pieces() {
                    if other.square == inner.dest() {
                        builder.set_piece(*promote_to);
                    } else {
                        builder.set_piece(*other);
                    }
                }
                builder.build()
            }
        }
    }
}
