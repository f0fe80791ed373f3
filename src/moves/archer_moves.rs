//! Archer candidate-destination generation.
//!
//! Archers move like a king but only onto empty squares (they cannot
//! capture by moving), and attack at range one or two squares straight
//! ahead without relocating. Ranged attacks ignore the intervening square.

use crate::game_state::archess_rules::{is_ranged_vulnerable, RANGED_ATTACK_MAX_RANGE};
use crate::game_state::archess_types::{Color, Square};
use crate::game_state::game_state::GameState;

/// Append the archer's movement destinations: the eight king-adjacent
/// squares that are empty.
pub fn generate_archer_movement(state: &GameState, from: Square, out: &mut Vec<Square>) {
    for d_row in [-1i8, 0, 1] {
        for d_col in [-1i8, 0, 1] {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            if let Some(to) = from.offset(d_row, d_col) {
                if state.piece_at(to).is_none() {
                    out.push(to);
                }
            }
        }
    }
}

/// Append the archer's ranged-attack targets: squares one or two steps
/// straight ahead in `color`'s forward direction, same column, occupied by
/// an enemy piece of a vulnerable kind.
pub fn generate_archer_ranged_targets(
    state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    for distance in 1..=RANGED_ATTACK_MAX_RANGE {
        if let Some(target_square) = from.offset(color.forward() * distance, 0) {
            if let Some(target) = state.piece_at(target_square) {
                if target.color != color && is_ranged_vulnerable(target.kind) {
                    out.push(target_square);
                }
            }
        }
    }
}
