//! Batch orchestration: the game loop, result aggregation, and the
//! delimited text report.

mod metrics;
mod report;
mod runner;

pub use metrics::BatchMetrics;
pub use report::{report_file_name, write_report};
pub use runner::{game_seed, play_game, run_batch, BatchOutcome, GameRecord};
