//! Immutable 64-square position snapshots.
//!
//! A position is built once by the `Builder` and never changes afterwards:
//! applying a move produces a brand-new position. That keeps a position
//! trivially shareable across the search tree and across a worker boundary,
//! and eliminates aliasing and undo bugs by construction.

use crate::board::builder::Builder;
use crate::board::player::PlayerView;
use crate::chess_move::ChessMove;
use crate::errors::EngineError;
use crate::piece::{Piece, PieceClass, Team};
use crate::square::{self, Square};

/// Outcome of applying a move to a position. `Rejected` is a defined no-op,
/// not an error: it covers wrong-side movers, moves leaving one's own king
/// attacked, and candidates whose successor cannot be constructed.
#[derive(Debug)]
pub enum MoveOutcome {
    Applied(Position),
    Rejected,
}

impl MoveOutcome {
    pub fn applied(self) -> Option<Position> {
        match self {
            MoveOutcome::Applied(position) => Some(position),
            MoveOutcome::Rejected => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Position {
    side_to_move: Team,
    tiles: [Option<Piece>; 64],
    white: PlayerView,
    black: PlayerView,
    /// Display-only capture history; never consulted for legality.
    captured: Vec<Piece>,
    en_passant: Option<Piece>,
}

impl Position {
    pub(crate) fn assemble(
        side_to_move: Team,
        tiles: [Option<Piece>; 64],
        white: PlayerView,
        black: PlayerView,
        en_passant: Option<Piece>,
    ) -> Self {
        Position {
            side_to_move,
            tiles,
            white,
            black,
            captured: Vec::new(),
            en_passant,
        }
    }

    /// The standard starting position, White to move.
    pub fn standard() -> Position {
        let mut builder = Builder::new(Team::White);
        let back_rank = [
            PieceClass::Rook,
            PieceClass::Knight,
            PieceClass::Bishop,
            PieceClass::Queen,
            PieceClass::King,
            PieceClass::Bishop,
            PieceClass::Knight,
            PieceClass::Rook,
        ];
        for (col, class) in back_rank.into_iter().enumerate() {
            let col = col as i8;
            builder.set_piece(Piece::new(class, Team::White, square::from_row_col(0, col)));
            builder.set_piece(Piece::new(
                PieceClass::Pawn,
                Team::White,
                square::from_row_col(1, col),
            ));
            builder.set_piece(Piece::new(
                PieceClass::Pawn,
                Team::Black,
                square::from_row_col(6, col),
            ));
            builder.set_piece(Piece::new(class, Team::Black, square::from_row_col(7, col)));
        }
        builder
            .build()
            .expect("standard position has both kings")
    }

    pub fn side_to_move(&self) -> Team {
        self.side_to_move
    }

    /// The read-only 64-square occupant array the rendering boundary draws.
    pub fn tiles(&self) -> &[Option<Piece>; 64] {
        &self.tiles
    }

    /// Occupant lookup with explicit bounds checking: an out-of-range index
    /// is a caller bug, reported as `OutOfBounds`.
    pub fn piece_at(&self, sq: Square) -> Result<Option<&Piece>, EngineError> {
        if square::is_valid(sq) {
            Ok(self.tiles[sq as usize].as_ref())
        } else {
            Err(EngineError::OutOfBounds)
        }
    }

    /// All active pieces, White's then Black's, each in square order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white.pieces().iter().chain(self.black.pieces().iter())
    }

    pub fn player(&self, team: Team) -> &PlayerView {
        match team {
            Team::White => &self.white,
            Team::Black => &self.black,
        }
    }

    pub fn to_move(&self) -> &PlayerView {
        self.player(self.side_to_move)
    }

    pub fn opponent(&self) -> &PlayerView {
        self.player(self.side_to_move.opposite())
    }

    /// Capture history threaded through applied moves, for display only.
    pub fn captures(&self) -> &[Piece] {
        &self.captured
    }

    pub fn en_passant(&self) -> Option<&Piece> {
        self.en_passant.as_ref()
    }

    /// The stored moves of the piece standing on `sq`, for the selection
    /// highlight at the rendering boundary.
    pub fn moves_for_piece(&self, sq: Square) -> Vec<&ChessMove> {
        match self.tiles.get(sq as usize).and_then(|t| t.as_ref()) {
            Some(piece) => self
                .player(piece.team)
                .moves()
                .iter()
                .filter(|m| m.piece().square == sq)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Applies a move for the side to move. A mover from the wrong side, a
    /// successor that leaves the mover's own king attacked, or a successor
    /// that cannot be constructed all yield `Rejected`; an accepted move
    /// yields the successor with its capture history extended.
    pub fn make_move(&self, mv: &ChessMove) -> MoveOutcome {
        if mv.piece().team != self.side_to_move {
            return MoveOutcome::Rejected;
        }
        let Ok(mut next) = mv.execute(self) else {
            return MoveOutcome::Rejected;
        };
        // Self-check is illegal: in the successor, the side that just moved
        // must not be attacked.
        if next.player(self.side_to_move).in_check() {
            return MoveOutcome::Rejected;
        }
        next.captured = self.captured.clone();
        if let Some(captured) = mv.captured_piece(self) {
            next.captured.push(captured);
        }
        MoveOutcome::Applied(next)
    }

    /// True on the first own-side move whose successor does not leave this
    /// side's king attacked. Candidates that fail to execute are skipped.
    pub fn has_escape_moves(&self, team: Team) -> bool {
        for mv in self.player(team).moves() {
            if let Ok(next) = mv.execute(self) {
                if !next.player(team).in_check() {
                    return true;
                }
            }
        }
        false
    }

    pub fn is_checkmate(&self, team: Team) -> bool {
        self.player(team).in_check() && !self.has_escape_moves(team)
    }

    pub fn is_stalemate(&self, team: Team) -> bool {
        !self.player(team).in_check() && !self.has_escape_moves(team)
    }

    pub fn has_game_ended(&self) -> bool {
        self.is_checkmate(Team::White)
            || self.is_stalemate(Team::White)
            || self.is_checkmate(Team::Black)
            || self.is_stalemate(Team::Black)
    }
}
