//! Seeded policy-vs-policy match harness for local testing.
//!
//! Runs two baseline policies against each other without any wrapper I/O,
//! with all randomness drawn from a single `StdRng` seeded by the caller.
//! The ply cap lives here, outside the core terminal checker: step-count
//! truncation is an episode concern, not a rule of the game.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::archess_errors::ArchessErrors;
use crate::engines::engine_trait::{select_move, OpponentKind};
use crate::game_state::archess_types::{Color, Winner};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::execute_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWin,
    BlackWin,
    /// Ply cap reached, or a side ran out of legal moves, before a king
    /// fell.
    Unfinished,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 200 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub plies: u16,
    pub white_reward: f32,
    pub black_reward: f32,
}

/// Play a single seeded policy-vs-policy match from the starting position.
pub fn play_policy_match(
    white: OpponentKind,
    black: OpponentKind,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, ArchessErrors> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new_game();

    let mut plies = 0u16;
    let mut white_reward = 0.0f32;
    let mut black_reward = 0.0f32;

    for _ in 0..config.max_plies {
        let mover = state.current_player;
        let kind = match mover {
            Color::White => white,
            Color::Black => black,
        };

        let Some(chosen) = select_move(&state, kind, &mut rng) else {
            break;
        };

        let result = execute_move(&mut state, chosen, &mut rng)?;
        match mover {
            Color::White => white_reward += result.reward,
            Color::Black => black_reward += result.reward,
        }
        plies += 1;

        if result.game_over {
            break;
        }
    }

    let outcome = match state.winner {
        Some(Winner::White) => MatchOutcome::WhiteWin,
        Some(Winner::Black) => MatchOutcome::BlackWin,
        _ => MatchOutcome::Unfinished,
    };

    Ok(MatchResult {
        outcome,
        final_state: state,
        plies,
        white_reward,
        black_reward,
    })
}
