//! Candidate generation and full legal-move enumeration.
//!
//! `candidate_destinations` answers "where can the piece on this square
//! go", reading the state only. `generate_legal_moves` sweeps all origin
//! squares in row-major order for the side to move and types each
//! destination, producing the enumeration the validator, the UI, and the
//! opponent policies all share.

use crate::game_state::archess_types::{ActionType, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::archer_moves::{generate_archer_movement, generate_archer_ranged_targets};
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::pawn_moves::generate_pawn_destinations;

/// Candidate destination squares for the piece on `from`; empty when the
/// square is empty. For archers the result holds both movement squares and
/// ranged-attack targets, disambiguated downstream by occupancy.
pub fn candidate_destinations(state: &GameState, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    let Some(piece) = state.piece_at(from) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_destinations(state, from, piece.color, &mut out),
        PieceKind::Archer => {
            generate_archer_movement(state, from, &mut out);
            generate_archer_ranged_targets(state, from, piece.color, &mut out);
        }
        // No movement rules for the remaining kinds in the current rule
        // scope; they hold their squares.
        PieceKind::Knight
        | PieceKind::Bishop
        | PieceKind::Rook
        | PieceKind::Queen
        | PieceKind::King => {}
    }

    out
}

/// Enumerate every legal move for the side to move. Origins are visited in
/// row-major order, destinations in generator order; archer candidates onto
/// enemy-occupied squares carry `RangedAttack`, everything else `Move`.
/// Paralyzed pieces are skipped.
pub fn generate_legal_moves(state: &GameState) -> Vec<MoveDescription> {
    let mut legal = Vec::with_capacity(64);

    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            let Some(piece) = state.piece_at(from) else {
                continue;
            };
            if piece.color != state.current_player || piece.paralyzed {
                continue;
            }

            for to in candidate_destinations(state, from) {
                let action = match state.piece_at(to) {
                    Some(target)
                        if piece.kind == PieceKind::Archer && target.color != piece.color =>
                    {
                        ActionType::RangedAttack
                    }
                    _ => ActionType::Move,
                };
                legal.push(MoveDescription::new(from, to, action));
            }
        }
    }

    legal
}
