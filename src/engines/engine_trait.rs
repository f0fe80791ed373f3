//! Policy abstraction for the baseline opponents.
//!
//! Defines the common interface behind which opponent strategies are
//! selected at runtime, plus the `opponent_move` entry point that picks and
//! executes a move in one call. Policies are stateless and depend only on
//! the public legal-move enumeration and `piece_at`, never on board
//! internals.

use rand::RngCore;

use crate::archess_errors::ArchessErrors;
use crate::engines::engine_greedy::GreedyPolicy;
use crate::engines::engine_random::RandomPolicy;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::execute_move;
use crate::moves::move_descriptions::MoveDescription;

pub trait Policy {
    fn name(&self) -> &str;

    /// Pick a move for the side to move, or `None` when no legal move
    /// exists. Randomness comes from the injected `rng` only.
    fn choose_move(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<MoveDescription>;
}

/// Baseline opponent selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentKind {
    Random,
    Greedy,
}

/// Pick a move with the selected policy without executing it.
pub fn select_move(
    state: &GameState,
    kind: OpponentKind,
    rng: &mut dyn RngCore,
) -> Option<MoveDescription> {
    match kind {
        OpponentKind::Random => RandomPolicy.choose_move(state, rng),
        OpponentKind::Greedy => GreedyPolicy.choose_move(state, rng),
    }
}

/// Pick a move with the selected policy and execute it, returning the
/// executed move. `None` when the side to move has no legal move.
pub fn opponent_move(
    state: &mut GameState,
    kind: OpponentKind,
    rng: &mut dyn RngCore,
) -> Result<Option<MoveDescription>, ArchessErrors> {
    let chosen = select_move(state, kind, rng);
    if let Some(mv) = chosen {
        execute_move(state, mv, rng)?;
    }
    Ok(chosen)
}
