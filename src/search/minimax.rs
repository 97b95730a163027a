//! Plain fixed-depth Minimax.
//!
//! The maximize/minimize role is fixed once at the root from the side to
//! move (White maximizes) and alternates by ply from there. Candidates whose
//! application is rejected — self-check, or a successor that cannot be
//! built — are skipped, never aborting the search. Ties keep the first
//! move found, and move lists iterate in stable generation order, so the
//! choice is deterministic.

use crate::board::position::{MoveOutcome, Position};
use crate::chess_move::ChessMove;
use crate::piece::Team;
use crate::search::algorithm::Algorithm;
use crate::search::evaluator::Evaluate;

pub struct Minimax<E: Evaluate> {
    evaluator: E,
    depth: i32,
}

impl<E: Evaluate> Minimax<E> {
    pub fn new(evaluator: E, depth: i32) -> Self {
        Minimax { evaluator, depth }
    }

    fn min(&self, position: &Position, depth: i32) -> i32 {
        if position.has_game_ended() || depth <= 0 {
            return self.evaluator.evaluate(position, depth);
        }
        let mut min_value = i32::MAX;
        for mv in position.to_move().moves() {
            let MoveOutcome::Applied(next) = position.make_move(mv) else {
                continue;
            };
            let value = self.max(&next, depth - 1);
            if value < min_value {
                min_value = value;
            }
        }
        min_value
    }

    fn max(&self, position: &Position, depth: i32) -> i32 {
        if position.has_game_ended() || depth <= 0 {
            return self.evaluator.evaluate(position, depth);
        }
        let mut max_value = i32::MIN;
        for mv in position.to_move().moves() {
            let MoveOutcome::Applied(next) = position.make_move(mv) else {
                continue;
            };
            let value = self.min(&next, depth - 1);
            if value > max_value {
                max_value = value;
            }
        }
        max_value
    }
}

impl<E: Evaluate> Algorithm for Minimax<E> {
    fn choose_move(&self, position: &Position) -> Option<ChessMove> {
        let maximizing = position.side_to_move() == Team::White;
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;
        for mv in position.to_move().moves() {
            let MoveOutcome::Applied(next) = position.make_move(mv) else {
                continue;
            };
            let value = if maximizing {
                self.min(&next, self.depth - 1)
            } else {
                self.max(&next, self.depth - 1)
            };
            if (maximizing && value > best_value) || (!maximizing && value < best_value) {
                best_value = value;
                best_move = Some(mv.clone());
            }
        }
        best_move
    }
}
