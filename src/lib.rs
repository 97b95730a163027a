//! Crate root module declarations for the Quince Chess engine.
//!
//! This file exposes the rules core (squares, pieces, moves, positions),
//! the search subsystem (evaluator and algorithms), and the worker boundary
//! (position codec and request/response service) under stable module paths
//! for the binary, tests, and benches.

pub mod errors;
pub mod square;
pub mod piece;
pub mod chess_move;

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod board {
    pub mod builder;
    pub mod player;
    pub mod position;
}

pub mod search {
    pub mod algorithm;
    pub mod alpha_beta;
    pub mod evaluator;
    pub mod minimax;
    pub mod random_mover;
}

pub mod codec;
pub mod service;
