use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random from the legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded constructor for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(
        &mut self,
        _state: &GameState,
        moves: &[(usize, GameState)],
    ) -> (usize, GameState) {
        assert!(!moves.is_empty(), "no legal moves available");
        let idx = self.rng.random_range(0..moves.len());
        moves[idx].clone()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
