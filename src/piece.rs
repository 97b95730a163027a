//! Immutable piece values and per-class move dispatch.
//!
//! A `Piece` is a plain value: class, team, square, and whether it has moved.
//! Moving never mutates a piece; `moved_to` returns a fresh value at the new
//! square with `has_moved` set. The six piece classes are a closed set, so
//! move generation dispatches through an exhaustive match rather than any
//! open-ended trait object.

use std::fmt;

use crate::board::builder::Builder;
use crate::chess_move::ChessMove;
use crate::moves::{
    bishop_moves::bishop_moves, king_moves::king_moves, knight_moves::knight_moves,
    pawn_moves::pawn_moves, queen_moves::queen_moves, rook_moves::rook_moves,
};
use crate::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Pawn advance direction along the row axis: White climbs, Black sinks.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// The row a pawn of this team promotes on.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Team::White => 7,
            Team::Black => 0,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "white"),
            Team::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceClass {
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Pawn,
}

impl PieceClass {
    /// Material value used by the evaluator and the attack heuristic.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceClass::Pawn => 100,
            PieceClass::Knight => 300,
            PieceClass::Bishop => 330,
            PieceClass::Rook => 500,
            PieceClass::Queen => 900,
            PieceClass::King => 10_000,
        }
    }
}

/// A piece on the board. `Copy` by design: successor positions hold fresh
/// values, never references into a prior position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub class: PieceClass,
    pub team: Team,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(class: PieceClass, team: Team, square: Square) -> Self {
        Piece {
            class,
            team,
            square,
            has_moved: false,
        }
    }

    /// Returns the piece as it stands after moving to `dest`. The original
    /// value is untouched.
    pub const fn moved_to(&self, dest: Square) -> Piece {
        Piece {
            class: self.class,
            team: self.team,
            square: dest,
            has_moved: true,
        }
    }

    /// Pseudo-legal moves for this piece on the staged board: geometry and
    /// occupancy only. Leaving one's own king attacked is rejected one level
    /// up, when a position applies the move.
    pub fn pseudo_legal_moves(&self, board: &Builder) -> Vec<ChessMove> {
        match self.class {
            PieceClass::Rook => rook_moves(self, board),
            PieceClass::Knight => knight_moves(self, board),
            PieceClass::Bishop => bishop_moves(self, board),
            PieceClass::Queen => queen_moves(self, board),
            PieceClass::King => king_moves(self, board),
            PieceClass::Pawn => pawn_moves(self, board),
        }
    }

    /// Unicode figurine for display at the rendering boundary.
    pub const fn symbol(&self) -> char {
        match (self.team, self.class) {
            (Team::White, PieceClass::Rook) => '\u{2656}',
            (Team::White, PieceClass::Knight) => '\u{2658}',
            (Team::White, PieceClass::Bishop) => '\u{2657}',
            (Team::White, PieceClass::Queen) => '\u{2655}',
            (Team::White, PieceClass::King) => '\u{2654}',
            (Team::White, PieceClass::Pawn) => '\u{2659}',
            (Team::Black, PieceClass::Rook) => '\u{265C}',
            (Team::Black, PieceClass::Knight) => '\u{265E}',
            (Team::Black, PieceClass::Bishop) => '\u{265D}',
            (Team::Black, PieceClass::Queen) => '\u{265B}',
            (Team::Black, PieceClass::King) => '\u{265A}',
            (Team::Black, PieceClass::Pawn) => '\u{265F}',
        }
    }
}
