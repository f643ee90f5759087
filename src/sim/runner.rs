use std::io::Write;
use std::time::{Duration, Instant};

use crate::ai::{agent_for, Agent};
use crate::config::{GameSettings, SearchSettings, SimSettings};
use crate::game::{GameState, Rules, Side, Variant};

use super::metrics::BatchMetrics;

/// Everything the reporting layer needs from one finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Absolute pit index of every move, in play order.
    pub pit_sequence: Vec<usize>,
    pub p1_score: u32,
    pub p2_score: u32,
    pub move_count: usize,
    /// Whether the stalemate threshold forced the game to end.
    pub loop_flag: bool,
}

/// Result of a whole batch run.
pub struct BatchOutcome {
    pub records: Vec<GameRecord>,
    pub metrics: BatchMetrics,
    pub elapsed: Duration,
}

/// Derive a deterministic seed for a given game index.
pub fn game_seed(base_seed: u64, game_index: usize) -> u64 {
    // FNV-1a-inspired mixing for deterministic, well-distributed seeds
    let mut hash = base_seed ^ 0x517cc1b727220a95;
    let index = game_index as u64;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index;
    hash = hash.wrapping_mul(0x100000001b3);
    hash ^= index >> 32;
    hash
}

/// Play one game between two agents.
///
/// The loop ends when the mover has no legal reply, when a store passes
/// half the stones in play, or when `stalemate_threshold` captureless
/// moves force the remaining stones to be split evenly. Kalah games
/// that end without the store condition count each side's leftover pit
/// stones toward that side's score.
pub fn play_game(
    rules: Rules,
    p1: &mut dyn Agent,
    p2: &mut dyn Agent,
    stalemate_threshold: u32,
    show_board: bool,
) -> GameRecord {
    let mut state = GameState::initial(rules);
    let mut pit_sequence = Vec::new();
    let mut move_count = 0;
    let mut loop_flag = false;
    let mut early_end = false;
    let half = rules.total_stones() / 2;

    loop {
        let moves = state.legal_moves();
        if moves.is_empty() {
            break;
        }
        if state.moves_without_capture() == stalemate_threshold {
            state = state.split_remaining_stones();
            loop_flag = true;
            break;
        }

        let agent: &mut dyn Agent = match state.to_move() {
            Side::One => &mut *p1,
            Side::Two => &mut *p2,
        };
        let (pit, next) = agent.select_move(&state, &moves);
        pit_sequence.push(pit);
        state = next;
        move_count += 1;

        if show_board {
            println!("\n{pit}");
            print!("{}", state.board());
        }

        if state.store(Side::One) > half || state.store(Side::Two) > half {
            early_end = true;
            break;
        }
    }

    let (p1_score, p2_score) = if rules.variant == Variant::Kalah && !early_end && !loop_flag {
        state.side_totals()
    } else {
        (state.store(Side::One), state.store(Side::Two))
    };

    GameRecord {
        pit_sequence,
        p1_score,
        p2_score,
        move_count,
        loop_flag,
    }
}

/// Run the configured number of games, printing coarse progress to
/// stdout, and aggregate the results.
pub fn run_batch(
    game: &GameSettings,
    search: &SearchSettings,
    sim: &SimSettings,
) -> BatchOutcome {
    let rules = game.rules();
    let mut records = Vec::with_capacity(sim.games);
    let mut metrics = BatchMetrics::new();
    let progress_step = (sim.games / 10).max(1);

    let start = Instant::now();
    for i in 1..=sim.games {
        let seeds = sim
            .seed
            .map(|s| (game_seed(s, 2 * i), game_seed(s, 2 * i + 1)));
        let mut p1 = agent_for(game.player1, search.depth_player1, seeds.map(|s| s.0));
        let mut p2 = agent_for(game.player2, search.depth_player2, seeds.map(|s| s.1));

        let record = play_game(
            rules,
            p1.as_mut(),
            p2.as_mut(),
            sim.stalemate_threshold,
            sim.show_board,
        );
        metrics.record(&record);
        records.push(record);

        if i % progress_step == 0 {
            print!("{}% ", i * 100 / sim.games);
            let _ = std::io::stdout().flush();
        }
    }

    BatchOutcome {
        records,
        metrics,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::config::AppConfig;
    use crate::game::PlayerKind;

    fn rules(variant: Variant) -> Rules {
        Rules {
            pits_per_side: 6,
            stones_per_pit: 4,
            variant,
        }
    }

    #[test]
    fn test_random_game_completes_and_conserves() {
        let mut p1 = RandomAgent::from_seed(1);
        let mut p2 = RandomAgent::from_seed(2);
        let record = play_game(rules(Variant::Kalah), &mut p1, &mut p2, 1000, false);

        assert!(record.move_count > 0);
        assert_eq!(record.pit_sequence.len(), record.move_count);
        // Scores never exceed the stones in play. Games that end on the
        // store condition leave unscored stones in the pits, so the sum
        // may fall short of 48.
        assert!(record.p1_score + record.p2_score <= 48);
    }

    #[test]
    fn test_wari_game_scores_from_stores() {
        let mut p1 = RandomAgent::from_seed(3);
        let mut p2 = RandomAgent::from_seed(4);
        let record = play_game(rules(Variant::Wari), &mut p1, &mut p2, 1000, false);
        assert!(record.p1_score + record.p2_score <= 48);
    }

    #[test]
    fn test_zero_threshold_forces_immediate_split() {
        let mut p1 = RandomAgent::from_seed(5);
        let mut p2 = RandomAgent::from_seed(6);
        let record = play_game(rules(Variant::Kalah), &mut p1, &mut p2, 0, false);

        assert!(record.loop_flag);
        assert_eq!(record.move_count, 0);
        assert_eq!(record.p1_score, 24);
        assert_eq!(record.p2_score, 24);
    }

    #[test]
    fn test_seeded_batches_are_identical() {
        let mut config = AppConfig::default();
        config.game.player1 = PlayerKind::Random;
        config.game.player2 = PlayerKind::Random;
        config.sim.games = 5;
        config.sim.seed = Some(123);

        let a = run_batch(&config.game, &config.search, &config.sim);
        let b = run_batch(&config.game, &config.search, &config.sim);

        for (ra, rb) in a.records.iter().zip(&b.records) {
            assert_eq!(ra.pit_sequence, rb.pit_sequence);
            assert_eq!(ra.p1_score, rb.p1_score);
            assert_eq!(ra.p2_score, rb.p2_score);
        }
    }

    #[test]
    fn test_game_seed_deterministic_and_varied() {
        assert_eq!(game_seed(42, 100), game_seed(42, 100));
        assert_ne!(game_seed(42, 0), game_seed(42, 1));
        assert_ne!(game_seed(1, 0), game_seed(2, 0));
    }

    #[test]
    fn test_search_vs_random_batch() {
        let mut config = AppConfig::default();
        config.search.depth_player1 = 2;
        config.search.depth_player2 = 2;
        config.sim.games = 3;
        config.sim.seed = Some(7);

        let outcome = run_batch(&config.game, &config.search, &config.sim);
        assert_eq!(outcome.records.len(), 3);
        assert_eq!(
            outcome.metrics.p1_wins + outcome.metrics.p2_wins + outcome.metrics.draws,
            3
        );
    }
}
