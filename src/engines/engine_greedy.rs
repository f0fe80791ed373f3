//! Greedy highest-value-capture baseline policy.
//!
//! Scans the legal moves for enemy-occupied destinations and takes the most
//! valuable one; without a capture on the board it falls back to the random
//! policy. Like the random policy it always submits an ordinary `Move`
//! action and never triggers the ranged-attack branch.

use rand::RngCore;

use crate::engines::engine_random::RandomPolicy;
use crate::engines::engine_trait::Policy;
use crate::game_state::archess_types::ActionType;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::MoveDescription;

pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn name(&self) -> &str {
        "Archess Greedy"
    }

    fn choose_move(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<MoveDescription> {
        let legal_moves = generate_legal_moves(state);

        // Ties keep the first capture seen, so the choice is deterministic
        // in enumeration order.
        let mut best: Option<(i32, MoveDescription)> = None;
        for mv in &legal_moves {
            let Some(target) = state.piece_at(mv.to) else {
                continue;
            };
            let value = target.kind.value();
            if best.map_or(true, |(best_value, _)| value > best_value) {
                best = Some((
                    value,
                    MoveDescription::new(mv.from, mv.to, ActionType::Move),
                ));
            }
        }

        match best {
            Some((_, mv)) => Some(mv),
            None => RandomPolicy.choose_move(state, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::GreedyPolicy;
    use crate::engines::engine_trait::Policy;
    use crate::game_state::archess_types::{ActionType, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::generate_legal_moves;

    #[test]
    fn takes_the_most_valuable_capture() {
        // Pawn takes on b6 is worth 1; pawn takes the queen on f6 is worth 9.
        let game = GameState::from_fen("4k3/8/1p3q2/P3P3/8/8/8/4K3 w -")
            .expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(0);

        let picked = GreedyPolicy
            .choose_move(&game, &mut rng)
            .expect("captures are available");
        assert_eq!(picked.from, Square::new(3, 4));
        assert_eq!(picked.to, Square::new(2, 5));
        assert_eq!(picked.action, ActionType::Move);
    }

    #[test]
    fn equal_captures_resolve_to_the_first_in_enumeration_order() {
        // Two pawn-takes-pawn captures of equal value; the a5 pawn comes
        // first in row-major order.
        let game = GameState::from_fen("4k3/8/1p3p2/P3P3/8/8/8/4K3 w -")
            .expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(0);

        let picked = GreedyPolicy
            .choose_move(&game, &mut rng)
            .expect("captures are available");
        assert_eq!(picked.from, Square::new(3, 0));
        assert_eq!(picked.to, Square::new(2, 1));
    }

    #[test]
    fn falls_back_to_a_random_legal_move_without_captures() {
        let game = GameState::new_game();
        let legal = generate_legal_moves(&game);
        let mut rng = StdRng::seed_from_u64(3);

        let picked = GreedyPolicy
            .choose_move(&game, &mut rng)
            .expect("start position has legal moves");
        assert!(legal
            .iter()
            .any(|mv| mv.from == picked.from && mv.to == picked.to));
    }

    #[test]
    fn ranged_only_captures_are_still_issued_as_moves() {
        // The archer's only capture is its ranged target; greedy submits it
        // with the ordinary Move action anyway.
        let game = GameState::from_fen("4k3/8/4b3/8/4A3/8/8/4K3 w -")
            .expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(0);

        let picked = GreedyPolicy
            .choose_move(&game, &mut rng)
            .expect("a capture is available");
        assert_eq!(picked.to, Square::new(2, 4));
        assert_eq!(picked.action, ActionType::Move);
    }
}
