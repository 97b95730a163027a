//! Compact position encoding for the worker boundary.
//!
//! A position travels as an ASCII bit string of `1 + 64*4` characters.
//! Bit 0 is the side to move (`1` = White). Each following 4-bit group
//! encodes one square in index order: the occupancy-side bit, then a 3-bit
//! piece code. Code `111` is reserved. The format carries no moved flags and
//! no en-passant target; decoding reconstructs `has_moved` conservatively
//! from home squares.

use crate::board::builder::Builder;
use crate::board::position::Position;
use crate::errors::EngineError;
use crate::piece::{Piece, PieceClass, Team};
use crate::square::{self, Square};

pub const ENCODED_LEN: usize = 1 + 64 * 4;

const fn class_code(class: PieceClass) -> u8 {
    match class {
        PieceClass::Rook => 0b001,
        PieceClass::Knight => 0b010,
        PieceClass::Bishop => 0b011,
        PieceClass::Queen => 0b100,
        PieceClass::King => 0b101,
        PieceClass::Pawn => 0b110,
    }
}

fn class_from_code(code: u8) -> Result<Option<PieceClass>, EngineError> {
    match code {
        0b000 => Ok(None),
        0b001 => Ok(Some(PieceClass::Rook)),
        0b010 => Ok(Some(PieceClass::Knight)),
        0b011 => Ok(Some(PieceClass::Bishop)),
        0b100 => Ok(Some(PieceClass::Queen)),
        0b101 => Ok(Some(PieceClass::King)),
        0b110 => Ok(Some(PieceClass::Pawn)),
        _ => Err(EngineError::ReservedPieceCode),
    }
}

/// Whether `sq` is a plausible initial square for the piece, used to
/// reconstruct the moved flag. Only pawns, kings, and rooks consult the
/// flag during generation, so only they are pinned down.
fn is_home_square(class: PieceClass, team: Team, sq: Square) -> bool {
    match (class, team) {
        (PieceClass::Pawn, Team::White) => square::row(sq) == 1,
        (PieceClass::Pawn, Team::Black) => square::row(sq) == 6,
        (PieceClass::King, Team::White) => sq == 4,
        (PieceClass::King, Team::Black) => sq == 60,
        (PieceClass::Rook, Team::White) => sq == 0 || sq == 7,
        (PieceClass::Rook, Team::Black) => sq == 56 || sq == 63,
        _ => true,
    }
}

pub fn encode_position(position: &Position) -> String {
    let mut bits = String::with_capacity(ENCODED_LEN);
    bits.push(if position.side_to_move() == Team::White {
        '1'
    } else {
        '0'
    });
    for tile in position.tiles() {
        match tile {
            None => bits.push_str("0000"),
            Some(piece) => {
                bits.push(if piece.team == Team::White { '1' } else { '0' });
                let code = class_code(piece.class);
                for shift in [2, 1, 0] {
                    bits.push(if code >> shift & 1 == 1 { '1' } else { '0' });
                }
            }
        }
    }
    bits
}

pub fn decode_position(bits: &str) -> Result<Position, EngineError> {
    let bytes = bits.as_bytes();
    if bytes.len() != ENCODED_LEN || bytes.iter().any(|b| *b != b'0' && *b != b'1') {
        return Err(EngineError::MalformedEncoding);
    }
    let bit = |i: usize| bytes[i] == b'1';

    let side_to_move = if bit(0) { Team::White } else { Team::Black };
    let mut builder = Builder::new(side_to_move);
    for sq in 0..64 {
        let base = 1 + sq * 4;
        let code = (bit(base + 1) as u8) << 2 | (bit(base + 2) as u8) << 1 | bit(base + 3) as u8;
        let Some(class) = class_from_code(code)? else {
            continue;
        };
        let team = if bit(base) { Team::White } else { Team::Black };
        let sq = sq as Square;
        let mut piece = Piece::new(class, team, sq);
        piece.has_moved = !is_home_square(class, team, sq);
        builder.set_piece(piece);
    }
    builder.build()
}
