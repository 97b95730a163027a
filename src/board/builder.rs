//! Mutable staging object used only while constructing a position.
//!
//! The builder is also the board view move generation reads: occupancy and
//! the en-passant target are staged here before `build` derives the full
//! move set and both player views, after which the position is immutable.

use crate::board::player::PlayerView;
use crate::board::position::Position;
use crate::errors::EngineError;
use crate::piece::{Piece, Team};
use crate::square::{self, Square};

pub struct Builder {
    side_to_move: Team,
    tiles: [Option<Piece>; 64],
    en_passant: Option<Piece>,
}

impl Builder {
    pub fn new(side_to_move: Team) -> Self {
        Builder {
            side_to_move,
            tiles: [None; 64],
            en_passant: None,
        }
    }

    /// Stages a piece on its own square. Off-board pieces are ignored, as in
    /// the reference behavior; a later `set_piece` on the same square
    /// replaces the earlier occupant.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        if square::is_valid(piece.square) {
            self.tiles[piece.square as usize] = Some(piece);
        }
        self
    }

    /// Records the pawn that just double-stepped, vulnerable to en-passant
    /// capture for exactly one ply.
    pub fn set_en_passant(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant = Some(pawn);
        self
    }

    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        if square::is_valid(sq) {
            self.tiles[sq as usize].as_ref()
        } else {
            None
        }
    }

    pub fn en_passant(&self) -> Option<&Piece> {
        self.en_passant.as_ref()
    }

    /// Derives the move set and both player views and freezes the position.
    /// Fails with `KingMissing` when a side has no king, which a legal game
    /// can never reach.
    pub fn build(self) -> Result<Position, EngineError> {
        let mut white_pieces = Vec::new();
        let mut black_pieces = Vec::new();
        for sq in 0..square::SQUARE_COUNT {
            if let Some(piece) = self.tiles[sq as usize] {
                match piece.team {
                    Team::White => white_pieces.push(piece),
                    Team::Black => black_pieces.push(piece),
                }
            }
        }

        // Square order keeps the move list stable, which makes search
        // tie-breaking deterministic.
        let mut white_moves = Vec::new();
        let mut black_moves = Vec::new();
        for piece in white_pieces.iter().chain(black_pieces.iter()) {
            let generated = piece.pseudo_legal_moves(&self);
            match piece.team {
                Team::White => white_moves.extend(generated),
                Team::Black => black_moves.extend(generated),
            }
        }

        let white_king = *find_king(&white_pieces).ok_or(EngineError::KingMissing(Team::White))?;
        let black_king = *find_king(&black_pieces).ok_or(EngineError::KingMissing(Team::Black))?;

        let white_in_check = black_moves.iter().any(|m| m.dest() == white_king.square);
        let black_in_check = white_moves.iter().any(|m| m.dest() == black_king.square);

        let white = PlayerView::new(
            Team::White,
            white_pieces,
            white_moves,
            white_king,
            white_in_check,
        );
        let black = PlayerView::new(
            Team::Black,
            black_pieces,
            black_moves,
            black_king,
            black_in_check,
        );

        Ok(Position::assemble(
            self.side_to_move,
            self.tiles,
            white,
            black,
            self.en_passant,
        ))
    }
}

fn find_king(pieces: &[Piece]) -> Option<&Piece> {
    pieces
        .iter()
        .find(|p| matches!(p.class, crate::piece::PieceClass::King))
}
