//! A trivial baseline that plays a uniformly random legal move.
//!
//! Useful as a cheap opponent in tests and for exercising the worker
//! boundary without paying for a real search.

use rand::seq::SliceRandom;

use crate::board::position::{MoveOutcome, Position};
use crate::chess_move::ChessMove;
use crate::search::algorithm::Algorithm;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMover;

impl Algorithm for RandomMover {
    fn choose_move(&self, position: &Position) -> Option<ChessMove> {
        let applicable: Vec<&ChessMove> = position
            .to_move()
            .moves()
            .iter()
            .filter(|mv| matches!(position.make_move(mv), MoveOutcome::Applied(_)))
            .collect();
        applicable
            .choose(&mut rand::thread_rng())
            .map(|mv| (*mv).clone())
    }
}
