//! Common interface for move-selection strategies, so callers can swap
//! search algorithms behind a single seam.

use crate::board::position::Position;
use crate::chess_move::ChessMove;

pub trait Algorithm {
    /// Selects a move for the side to move, or `None` when no legal move
    /// exists (the game is over for that side).
    fn choose_move(&self, position: &Position) -> Option<ChessMove>;
}
