//! Fixed-depth Minimax with alpha-beta pruning.
//!
//! Identical tree walk and role assignment as `Minimax`, with `(alpha,
//! beta)` bounds carried down the path: a minimizing node stops as soon as
//! its value can no longer exceed `alpha`, a maximizing node as soon as it
//! reaches `beta`. Pruning never changes the root value, only the work done
//! to find it.

use crate::board::position::{MoveOutcome, Position};
use crate::chess_move::ChessMove;
use crate::piece::Team;
use crate::search::algorithm::Algorithm;
use crate::search::evaluator::Evaluate;

pub struct AlphaBeta<E: Evaluate> {
    evaluator: E,
    depth: i32,
}

impl<E: Evaluate> AlphaBeta<E> {
    pub fn new(evaluator: E, depth: i32) -> Self {
        AlphaBeta { evaluator, depth }
    }

    fn min(&self, position: &Position, depth: i32, alpha: i32, mut beta: i32) -> i32 {
        if position.has_game_ended() || depth <= 0 {
            return self.evaluator.evaluate(position, depth);
        }
        let mut min_value = i32::MAX;
        for mv in position.to_move().moves() {
            let MoveOutcome::Applied(next) = position.make_move(mv) else {
                continue;
            };
            let value = self.max(&next, depth - 1, alpha, beta);
            if value < min_value {
                min_value = value;
            }
            if value <= alpha {
                break;
            }
            if value < beta {
                beta = value;
            }
        }
        min_value
    }

    fn max(&self, position: &Position, depth: i32, mut alpha: i32, beta: i32) -> i32 {
        if position.has_game_ended() || depth <= 0 {
            return self.evaluator.evaluate(position, depth);
        }
        let mut max_value = i32::MIN;
        for mv in position.to_move().moves() {
            let MoveOutcome::Applied(next) = position.make_move(mv) else {
                continue;
            };
            let value = self.min(&next, depth - 1, alpha, beta);
            if value > max_value {
                max_value = value;
            }
            if value >= beta {
                break;
            }
            if value > alpha {
                alpha = value;
            }
        }
        max_value
    }
}

impl<E: Evaluate> Algorithm for AlphaBeta<E> {
    fn choose_move(&self, position: &Position) -> Option<ChessMove> {
        let maximizing = position.side_to_move() == Team::White;
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;
        for mv in position.to_move().moves() {
            let MoveOutcome::Applied(next) = position.make_move(mv) else {
                continue;
            };
            let value = if maximizing {
                self.min(&next, self.depth - 1, i32::MIN, i32::MAX)
            } else {
                self.max(&next, self.depth - 1, i32::MIN, i32::MAX)
            };
            if (maximizing && value > best_value) || (!maximizing && value < best_value) {
                best_value = value;
                best_move = Some(mv.clone());
            }
        }
        best_move
    }
}
