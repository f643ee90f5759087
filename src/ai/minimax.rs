use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{GameState, Side};

use super::agent::Agent;
use super::heuristic::evaluate;

/// Full-width minimax, no pruning. The branching factor is bounded by
/// the pit count and search depths stay small, so exhaustive search is
/// a deliberate simplicity choice here.
///
/// `maximizing` holds when the side to move at this node is
/// `perspective`; leaves score via the heuristic from `perspective`'s
/// point of view.
pub fn minimax(state: &GameState, depth: u32, maximizing: bool, perspective: Side) -> i32 {
    if depth == 0 || state.is_game_over() {
        return evaluate(state, perspective);
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        return evaluate(state, perspective);
    }

    if maximizing {
        let mut best = i32::MIN;
        for (_, next) in &moves {
            let value = minimax(next, depth - 1, next.to_move() == perspective, perspective);
            best = best.max(value);
        }
        best
    } else {
        let mut best = i32::MAX;
        for (_, next) in &moves {
            let value = minimax(next, depth - 1, next.to_move() == perspective, perspective);
            best = best.min(value);
        }
        best
    }
}

/// Score each candidate move one ply down and return the best, choosing
/// uniformly at random among moves tied at the top score (exact integer
/// equality). Returns `None` when `moves` is empty — callers must treat
/// that as "no move", not a playable result.
pub fn find_best_move<R: Rng>(
    state: &GameState,
    moves: &[(usize, GameState)],
    depth: u32,
    rng: &mut R,
) -> Option<(usize, GameState)> {
    let mut best_score = i32::MIN;
    let mut best: Vec<&(usize, GameState)> = Vec::new();

    for entry in moves {
        let (_, next) = entry;
        let score = minimax(
            next,
            depth.saturating_sub(1),
            next.to_move() == state.to_move(),
            state.to_move(),
        );
        if score > best_score {
            best_score = score;
            best.clear();
            best.push(entry);
        } else if score == best_score {
            best.push(entry);
        }
    }

    if best.is_empty() {
        return None;
    }
    Some(best[rng.random_range(0..best.len())].clone())
}

/// One explored position in a materialized search tree.
pub struct SearchNode {
    pub state: GameState,
    /// The pit whose move produced this node; `None` at the root.
    pub pit: Option<usize>,
    pub score: i32,
    pub children: Vec<SearchNode>,
}

/// Run the same search as [`minimax`] but keep the explored tree, for
/// callers that want to inspect scores below the root.
pub fn search_tree(state: &GameState, depth: u32, perspective: Side) -> SearchNode {
    build_node(
        state,
        None,
        depth,
        state.to_move() == perspective,
        perspective,
    )
}

fn build_node(
    state: &GameState,
    pit: Option<usize>,
    depth: u32,
    maximizing: bool,
    perspective: Side,
) -> SearchNode {
    if depth == 0 || state.is_game_over() {
        return SearchNode {
            state: state.clone(),
            pit,
            score: evaluate(state, perspective),
            children: Vec::new(),
        };
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        return SearchNode {
            state: state.clone(),
            pit,
            score: evaluate(state, perspective),
            children: Vec::new(),
        };
    }

    let children: Vec<SearchNode> = moves
        .into_iter()
        .map(|(move_pit, next)| {
            let child_maximizing = next.to_move() == perspective;
            build_node(&next, Some(move_pit), depth - 1, child_maximizing, perspective)
        })
        .collect();

    let score = if maximizing {
        children.iter().map(|c| c.score).fold(i32::MIN, i32::max)
    } else {
        children.iter().map(|c| c.score).fold(i32::MAX, i32::min)
    };

    SearchNode {
        state: state.clone(),
        pit,
        score,
        children,
    }
}

/// Search-driven agent: scores every legal move to a fixed depth and
/// plays a random pick among the equal best.
pub struct MinimaxAgent {
    depth: u32,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        MinimaxAgent {
            depth,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded constructor for reproducible move selection.
    pub fn from_seed(depth: u32, seed: u64) -> Self {
        MinimaxAgent {
            depth,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_move(
        &mut self,
        state: &GameState,
        moves: &[(usize, GameState)],
    ) -> (usize, GameState) {
        find_best_move(state, moves, self.depth, &mut self.rng)
            .expect("select_move requires a non-empty move list")
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
