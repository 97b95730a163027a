use thiserror::Error;

use crate::piece::Team;

/// Represents all possible error types that can occur in the chess engine.
/// Used throughout the codebase for error handling and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Indicates an attempted access outside the bounds of the chess board.
    #[error("board index out of bounds")]
    OutOfBounds,
    /// A position was built without a king for the named side. This is an
    /// invariant violation: correct move generation and application can
    /// never capture a king.
    #[error("no {0} king on the board")]
    KingMissing(Team),
    /// An encoded position used the reserved piece code `111`.
    #[error("reserved piece code in encoded position")]
    ReservedPieceCode,
    /// An encoded position had the wrong length or non-bit characters.
    #[error("malformed position encoding")]
    MalformedEncoding,
    /// A search request was made on a position with no legal move.
    #[error("no legal move available")]
    NoMoveAvailable,
}
