//! Uniform-random baseline policy.
//!
//! Selects uniformly from the legal (from, to) pairs and is primarily used
//! for diagnostics, integration testing, and as the greedy policy's
//! fallback. It always submits an ordinary `Move` action, even when the
//! destination happens to be a ranged-attack target.

use rand::prelude::IndexedRandom;
use rand::RngCore;

use crate::engines::engine_trait::Policy;
use crate::game_state::archess_types::ActionType;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::MoveDescription;

pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn name(&self) -> &str {
        "Archess Random"
    }

    fn choose_move(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<MoveDescription> {
        let legal_moves = generate_legal_moves(state);
        let picked = legal_moves.as_slice().choose(rng)?;
        Some(MoveDescription::new(picked.from, picked.to, ActionType::Move))
    }
}
