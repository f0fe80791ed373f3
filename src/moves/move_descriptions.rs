//! Move descriptors and the integer action codec.
//!
//! Every move is addressable as an integer in `[0, 8192)` using a fixed
//! mixed-radix layout, most significant first:
//!
//! `code = ((from_row*8 + from_col) * 64 + (to_row*8 + to_col)) * 2 + action_type`
//!
//! Decoding inverts the layout with integer division/modulo and never fails
//! inside the action space; legality is the validator's job, not the
//! codec's.

use crate::archess_errors::ArchessErrors;
use crate::game_state::archess_types::{ActionType, Square};

/// Number of addressable actions: 64 origins x 64 destinations x 2 types.
pub const ACTION_SPACE_SIZE: u16 = 8192;

/// A candidate or executed move: origin, destination, and action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub from: Square,
    pub to: Square,
    pub action: ActionType,
}

impl MoveDescription {
    #[inline]
    pub const fn new(from: Square, to: Square, action: ActionType) -> Self {
        Self { from, to, action }
    }
}

#[inline]
pub fn encode_action(move_description: MoveDescription) -> u16 {
    (move_description.from.index() * 64 + move_description.to.index()) * 2
        + move_description.action.index()
}

#[inline]
pub fn decode_action(code: u16) -> Result<MoveDescription, ArchessErrors> {
    if code >= ACTION_SPACE_SIZE {
        return Err(ArchessErrors::ActionCodeOutOfRange(code));
    }

    let action = if code % 2 == 0 {
        ActionType::Move
    } else {
        ActionType::RangedAttack
    };
    let squares = code / 2;
    let to_index = squares % 64;
    let from_index = squares / 64;

    Ok(MoveDescription::new(
        Square::new((from_index / 8) as u8, (from_index % 8) as u8),
        Square::new((to_index / 8) as u8, (to_index % 8) as u8),
        action,
    ))
}
