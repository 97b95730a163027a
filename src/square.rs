//! Board squares as flat indices.
//!
//! A square is an index `0..=63` with `row = index / 8` and `col = index % 8`.
//! Row 0 is White's back rank, so White pawns advance by `+8`. Offsets are
//! signed so sliding and knight deltas can be applied directly.

use crate::errors::EngineError;

pub type Square = i8;

pub const SQUARE_COUNT: i8 = 64;

#[inline]
pub const fn is_valid(square: Square) -> bool {
    square >= 0 && square < SQUARE_COUNT
}

#[inline]
pub const fn row(square: Square) -> i8 {
    square >> 3
}

#[inline]
pub const fn col(square: Square) -> i8 {
    square & 7
}

#[inline]
pub const fn from_row_col(row: i8, col: i8) -> Square {
    row * 8 + col
}

/// Steps a square by a signed offset, failing when the result leaves the
/// board. Column wraparound is not detected here; callers exclude wrapping
/// offsets with explicit column checks before stepping.
pub fn offset(square: Square, delta: i8) -> Result<Square, EngineError> {
    let dest = square + delta;
    if is_valid(dest) {
        Ok(dest)
    } else {
        Err(EngineError::OutOfBounds)
    }
}
