//! Pluggable static position evaluation.
//!
//! Search stays modular by delegating leaf scoring to this trait, so
//! alternate heuristics can be swapped without touching search code. The
//! default evaluator is symmetric: `score = f(White) - f(Black)`, so White
//! prefers large values and Black small ones.

use crate::board::player::PlayerView;
use crate::board::position::Position;
use crate::piece::Team;

pub const CHECKMATE_BONUS: i32 = 10_000;
pub const CHECK_BONUS: i32 = 45;
pub const MOBILITY_MULTIPLIER: i32 = 5;
pub const ATTACK_MULTIPLIER: i32 = 1;
/// Stand-in mobility value when the opponent has no moves at all, instead
/// of a division failure. Far below mate scores, which decide such
/// positions anyway.
pub const MOBILITY_CEILING: i32 = 1000;

pub trait Evaluate {
    /// Static score of `position`, with `depth` the remaining search depth
    /// so nearer mates can outrank distant ones.
    fn evaluate(&self, position: &Position, depth: i32) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEvaluator;

impl Evaluate for DefaultEvaluator {
    fn evaluate(&self, position: &Position, depth: i32) -> i32 {
        side_score(position, Team::White, depth) - side_score(position, Team::Black, depth)
    }
}

fn side_score(position: &Position, team: Team, depth: i32) -> i32 {
    let player = position.player(team);
    let opponent = position.player(team.opposite());
    mobility(player, opponent)
        + king_threats(position, team, depth)
        + attacks(position, player)
        + castle(player)
        + material(player)
        + pawn_structure(player)
}

fn mobility(player: &PlayerView, opponent: &PlayerView) -> i32 {
    let own = player.moves().len() as i32;
    let theirs = opponent.moves().len() as i32;
    if theirs == 0 {
        return MOBILITY_CEILING;
    }
    MOBILITY_MULTIPLIER * own * 10 / theirs
}

/// Reward for having the opposing king under threat: a scaled checkmate
/// bonus, or a flat check bonus. The depth weight makes a mate found with
/// more depth remaining (an earlier mate) worth more.
fn king_threats(position: &Position, team: Team, depth: i32) -> i32 {
    let opponent = team.opposite();
    if position.is_checkmate(opponent) {
        CHECKMATE_BONUS * depth_bonus(depth)
    } else if position.player(opponent).in_check() {
        CHECK_BONUS
    } else {
        0
    }
}

fn depth_bonus(depth: i32) -> i32 {
    if depth == 0 {
        1
    } else {
        depth * 100
    }
}

/// One point per own move capturing an equal-or-lower-valued piece.
fn attacks(position: &Position, player: &PlayerView) -> i32 {
    let mut attack_score = 0;
    for mv in player.moves() {
        if mv.is_capture() {
            if let Some(victim) = mv.captured_piece(position) {
                if mv.piece().class.value() <= victim.class.value() {
                    attack_score += 1;
                }
            }
        }
    }
    attack_score * ATTACK_MULTIPLIER
}

fn material(player: &PlayerView) -> i32 {
    player.pieces().iter().map(|p| p.class.value()).sum()
}

// Castling and pawn-structure terms are fixed at zero for parity with the
// reference evaluator.
fn castle(_player: &PlayerView) -> i32 {
    0
}

fn pawn_structure(_player: &PlayerView) -> i32 {
    0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::builder::Builder;
    use crate::piece::{Piece, PieceClass};

    #[test]
    fn starting_position_is_balanced() {
        let position = Position::standard();
        assert_eq!(DefaultEvaluator.evaluate(&position, 0), 0);
    }

    #[test]
    fn extra_material_shifts_the_score() {
        // White has an extra queen in an otherwise bare-kings position.
        let mut builder = Builder::new(Team::White);
        builder.set_piece(Piece::new(PieceClass::King, Team::White, 4));
        builder.set_piece(Piece::new(PieceClass::King, Team::Black, 60));
        builder.set_piece(Piece::new(PieceClass::Queen, Team::White, 27));
        let position = builder.build().expect("valid position");
        assert!(DefaultEvaluator.evaluate(&position, 0) > 900);
    }

    #[test]
    fn checkmate_dominates_and_prefers_shallower_depth() {
        // Back-rank mate: black king h8 behind its own pawns, white rook a8.
        let mut builder = Builder::new(Team::Black);
        builder.set_piece(Piece::new(PieceClass::King, Team::White, 4));
        builder.set_piece(Piece::new(PieceClass::Rook, Team::White, 0).moved_to(56));
        builder.set_piece(Piece::new(PieceClass::King, Team::Black, 63));
        builder.set_piece(Piece::new(PieceClass::Pawn, Team::Black, 54).moved_to(54));
        builder.set_piece(Piece::new(PieceClass::Pawn, Team::Black, 55).moved_to(55));
        let position = builder.build().expect("valid position");
        assert!(position.is_checkmate(Team::Black));
        let shallow = DefaultEvaluator.evaluate(&position, 0);
        let deep = DefaultEvaluator.evaluate(&position, 2);
        assert!(shallow >= CHECKMATE_BONUS);
        assert!(deep > shallow);
    }

    #[test]
    fn check_earns_the_flat_bonus() {
        // White rook gives a bare check; no mate anywhere.
        let mut with_check = Builder::new(Team::Black);
        with_check.set_piece(Piece::new(PieceClass::King, Team::White, 4));
        with_check.set_piece(Piece::new(PieceClass::Rook, Team::White, 0).moved_to(36));
        with_check.set_piece(Piece::new(PieceClass::King, Team::Black, 60));
        let checked = with_check.build().expect("valid position");
        assert!(checked.player(Team::Black).in_check());
        assert!(!checked.is_checkmate(Team::Black));

        let mut without = Builder::new(Team::Black);
        without.set_piece(Piece::new(PieceClass::King, Team::White, 4));
        without.set_piece(Piece::new(PieceClass::Rook, Team::White, 0).moved_to(35));
        without.set_piece(Piece::new(PieceClass::King, Team::Black, 60));
        let quiet = without.build().expect("valid position");

        let diff = DefaultEvaluator.evaluate(&checked, 0) - DefaultEvaluator.evaluate(&quiet, 0);
        // Mobility differs a little between the two placements, but the
        // check bonus must account for most of the swing.
        assert!(diff > CHECK_BONUS / 2);
    }
}
