//! Per-side aggregation of a position: pieces, moves, king, check status.
//!
//! A view is recomputed for every position and never mutated. Whether the
//! side is checkmated or stalemated needs the owning position (escape moves
//! are probed by executing them), so those live on `Position`.

use crate::chess_move::ChessMove;
use crate::piece::{Piece, Team};

#[derive(Debug, Clone)]
pub struct PlayerView {
    team: Team,
    pieces: Vec<Piece>,
    moves: Vec<ChessMove>,
    king: Piece,
    in_check: bool,
}

impl PlayerView {
    pub(crate) fn new(
        team: Team,
        pieces: Vec<Piece>,
        moves: Vec<ChessMove>,
        king: Piece,
        in_check: bool,
    ) -> Self {
        PlayerView {
            team,
            pieces,
            moves,
            king,
            in_check,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// This side's pseudo-legal moves, in generation order.
    pub fn moves(&self) -> &[ChessMove] {
        &self.moves
    }

    pub fn king(&self) -> &Piece {
        &self.king
    }

    /// True iff any opponent move targets the king's square. Computed once
    /// at construction.
    pub fn in_check(&self) -> bool {
        self.in_check
    }
}
