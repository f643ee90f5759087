use std::io::{self, Write};

use crate::config::{GameSettings, SearchSettings, SimSettings};
use crate::game::PlayerKind;

use super::runner::BatchOutcome;

/// Default report file name, e.g. `Kalah_6_4_C6vR_1e3g.txt`.
pub fn report_file_name(game: &GameSettings, search: &SearchSettings, sim: &SimSettings) -> String {
    let mut name = format!(
        "{}_{}_{}_{}",
        game.variant.name(),
        game.pits_per_side,
        game.stones_per_pit,
        game.player1.code()
    );
    if game.player1 == PlayerKind::Search {
        name.push_str(&search.depth_player1.to_string());
    }
    name.push('v');
    name.push_str(game.player2.code());
    if game.player2 == PlayerKind::Search {
        name.push_str(&search.depth_player2.to_string());
    }
    name.push_str(&format!("_1e{}g.txt", sim.games.max(1).ilog10()));
    name
}

fn player_description(kind: PlayerKind, depth: u32) -> String {
    if kind == PlayerKind::Search {
        format!("{}(depth: {})", kind.code(), depth)
    } else {
        kind.code().to_string()
    }
}

/// Write the delimited batch summary: configuration header, optional
/// per-game rows (pit sequence and/or scores), and the aggregate block.
pub fn write_report<W: Write>(
    out: &mut W,
    game: &GameSettings,
    search: &SearchSettings,
    sim: &SimSettings,
    outcome: &BatchOutcome,
) -> io::Result<()> {
    writeln!(
        out,
        "{}: {} pits_per_player, {} stones_per_pit, P1: {}, P2: {}, {} games",
        game.variant.name(),
        game.pits_per_side,
        game.stones_per_pit,
        player_description(game.player1, search.depth_player1),
        player_description(game.player2, search.depth_player2),
        sim.games
    )?;

    if sim.record_moves {
        writeln!(out)?;
        write!(out, "pit_sequence;")?;
    }
    if sim.record_moves || sim.record_stats {
        writeln!(out, "p1_score;p2_score;number_of_moves;")?;

        for record in &outcome.records {
            if sim.record_moves {
                for pit in &record.pit_sequence {
                    write!(out, "{pit},")?;
                }
                write!(out, ";")?;
            }
            write!(
                out,
                "{};{};{};",
                record.p1_score, record.p2_score, record.move_count
            )?;
            if record.loop_flag {
                write!(out, "LOOP")?;
            }
            writeln!(out)?;
        }
    }

    let metrics = &outcome.metrics;
    writeln!(out, "\nP1's wins: {}", metrics.p1_wins)?;
    writeln!(out, "P2's wins: {}", metrics.p2_wins)?;
    writeln!(out, "Draws: {}", metrics.draws)?;
    writeln!(out, "\nLoops: {}", metrics.loops)?;
    writeln!(out, "\nExcluding games with loops:")?;
    writeln!(out, "Average number of moves: {}", metrics.average_moves())?;
    writeln!(out, "The longest game: {} moves", metrics.longest_game)?;
    write!(out, "\nExecution time: {} s", outcome.elapsed.as_secs_f64())?;
    Ok(())
}
