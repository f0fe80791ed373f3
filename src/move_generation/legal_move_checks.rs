//! Legality predicates and king-presence scans.
//!
//! `is_legal_move` is a pure boolean query: it never mutates state and
//! never panics, so it serves both single-move validation and legal-move
//! enumeration. The king scans read the authoritative grid, not the
//! caches, and back the terminal-condition check.

use crate::game_state::archess_types::{ActionType, Color, PieceKind, Square, Winner};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::candidate_destinations;

/// Decide legality of a candidate (from, to, action) triple for the side to
/// move. Checks short-circuit in order: bounds, origin occupancy, ownership,
/// no same-color destination, generator membership. The action type itself
/// is not constrained here; the combat resolver disambiguates it.
pub fn is_legal_move(state: &GameState, from: Square, to: Square, action: ActionType) -> bool {
    let _ = action;

    if !from.in_bounds() || !to.in_bounds() {
        return false;
    }

    let Some(piece) = state.piece_at(from) else {
        return false;
    };

    if piece.color != state.current_player {
        return false;
    }

    if let Some(target) = state.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
    }

    candidate_destinations(state, from).contains(&to)
}

/// Scan the grid for `color`'s King.
pub fn scan_king_square(state: &GameState, color: Color) -> Option<Square> {
    for row in 0..8u8 {
        for col in 0..8u8 {
            let square = Square::new(row, col);
            if let Some(piece) = state.piece_at(square) {
                if piece.kind == PieceKind::King && piece.color == color {
                    return Some(square);
                }
            }
        }
    }
    None
}

/// Winner implied by the board, if any: a side whose King is absent has
/// lost. Pure; the combat resolver records the result on the state.
pub fn terminal_winner(state: &GameState) -> Option<Winner> {
    if scan_king_square(state, Color::White).is_none() {
        Some(Winner::Black)
    } else if scan_king_square(state, Color::Black).is_none() {
        Some(Winner::White)
    } else {
        None
    }
}
