//! The search request/response message boundary.
//!
//! A collaborator hands over an encoded position and gets back the chosen
//! move's origin and destination squares. Promotion piece choice and capture
//! bookkeeping are re-derived by the caller against its own legal-move set,
//! so the reply carries squares only.

use serde::{Deserialize, Serialize};

use crate::codec::decode_position;
use crate::errors::EngineError;
use crate::search::algorithm::Algorithm;
use crate::square::Square;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Bit-string position encoding, see `codec`.
    pub position: String,
    /// `"white"` or `"black"`. Informational: the encoded side-to-move bit
    /// is authoritative.
    pub side: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMove {
    #[serde(rename = "fromSquare")]
    pub from_square: Square,
    #[serde(rename = "toSquare")]
    pub to_square: Square,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "bestMove")]
    pub best_move: BestMove,
}

/// Decodes the request, runs the given algorithm, and encodes the chosen
/// move. Positions with no legal move yield `NoMoveAvailable`.
pub fn answer_request(
    request: &SearchRequest,
    algorithm: &dyn Algorithm,
) -> Result<SearchResponse, EngineError> {
    let position = decode_position(&request.position)?;
    if request.side != position.side_to_move().to_string() {
        tracing::warn!(
            requested = %request.side,
            encoded = %position.side_to_move(),
            "request side disagrees with encoded side to move"
        );
    }
    tracing::debug!(side = %position.side_to_move(), "search requested");
    let chosen = algorithm
        .choose_move(&position)
        .ok_or(EngineError::NoMoveAvailable)?;
    Ok(SearchResponse {
        best_move: BestMove {
            from_square: chosen.piece().square,
            to_square: chosen.dest(),
        },
    })
}
