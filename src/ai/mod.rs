//! Move selection: the [`Agent`] trait, the heuristic evaluator, and the
//! minimax, random, and human players.

mod agent;
mod heuristic;
mod human;
mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::evaluate;
pub use human::HumanAgent;
pub use minimax::{find_best_move, minimax, search_tree, MinimaxAgent, SearchNode};
pub use random::RandomAgent;

use crate::game::PlayerKind;

/// Build the agent a configured player kind calls for. `depth` applies
/// to search-driven players only; `seed`, when present, makes random
/// draws reproducible.
pub fn agent_for(kind: PlayerKind, depth: u32, seed: Option<u64>) -> Box<dyn Agent> {
    match kind {
        PlayerKind::Human => Box::new(HumanAgent::new()),
        PlayerKind::Random => Box::new(match seed {
            Some(s) => RandomAgent::from_seed(s),
            None => RandomAgent::new(),
        }),
        PlayerKind::Search => Box::new(match seed {
            Some(s) => MinimaxAgent::from_seed(depth, s),
            None => MinimaxAgent::new(depth),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_names() {
        assert_eq!(agent_for(PlayerKind::Random, 0, Some(1)).name(), "Random");
        assert_eq!(agent_for(PlayerKind::Search, 4, Some(1)).name(), "Minimax");
        assert_eq!(agent_for(PlayerKind::Human, 0, None).name(), "Human");
    }
}
