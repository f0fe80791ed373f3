//! Pawn candidate-destination generation.

use crate::game_state::archess_types::{Color, Square};
use crate::game_state::game_state::GameState;

/// Append the candidate destinations for the pawn of `color` on `from`:
/// a single forward step onto an empty square, the double step from the
/// home rank when both intervening squares are empty, and diagonal captures
/// onto enemy-occupied squares.
pub fn generate_pawn_destinations(
    state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if state.piece_at(one_step).is_none() {
            out.push(one_step);

            if from.row == color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if state.piece_at(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        if let Some(diagonal) = from.offset(forward, d_col) {
            if let Some(target) = state.piece_at(diagonal) {
                if target.color != color {
                    out.push(diagonal);
                }
            }
        }
    }
}
