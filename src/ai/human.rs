use std::io::{self, BufRead, Write};

use crate::game::{GameState, Side};

use super::agent::Agent;

/// Interactive agent: renders the board and prompts for a pit choice.
///
/// Pits are presented 1-based within the mover's own row (P1's pit 0 is
/// "1"; P2's first pit is likewise "1"), and the prompt repeats until a
/// playable pit is entered. Generic over its reader/writer so tests can
/// drive it from buffers.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<io::BufReader<io::Stdin>, io::Stdout> {
    pub fn new() -> Self {
        HumanAgent {
            input: io::BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl Default for HumanAgent<io::BufReader<io::Stdin>, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }

    /// Translate an absolute pit index into the 1-based number shown to
    /// the player on `side`.
    fn display_index(pit: usize, side: Side, pits_per_side: usize) -> usize {
        match side {
            Side::One => pit + 1,
            Side::Two => pit - pits_per_side,
        }
    }

    /// Translate the player's 1-based entry back to an absolute index.
    fn absolute_index(choice: usize, side: Side, pits_per_side: usize) -> usize {
        match side {
            Side::One => choice - 1,
            Side::Two => choice + pits_per_side,
        }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_move(
        &mut self,
        state: &GameState,
        moves: &[(usize, GameState)],
    ) -> (usize, GameState) {
        let side = state.to_move();
        let n = state.rules().pits_per_side;

        let _ = write!(self.output, "{}", state.board());
        let _ = writeln!(self.output, "Player to move: {}", side.name());

        loop {
            let _ = write!(self.output, "Choose pit (1-{n}) from available: ");
            for (pit, _) in moves {
                let _ = write!(self.output, "{} ", Self::display_index(*pit, side, n));
            }
            let _ = write!(self.output, "\n> ");
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                // End of input: fall back to the first legal move so a
                // closed stdin cannot spin the prompt forever.
                Ok(0) => {
                    let _ = writeln!(self.output, "Input closed, playing first available pit.");
                    return moves[0].clone();
                }
                Ok(_) => {}
                Err(_) => continue,
            }

            let Ok(choice) = line.trim().parse::<usize>() else {
                let _ = writeln!(self.output, "Invalid choice. Try again.");
                continue;
            };
            if choice < 1 || choice > n {
                let _ = writeln!(self.output, "Invalid choice. Try again.");
                continue;
            }

            let pit = Self::absolute_index(choice, side, n);
            if let Some(entry) = moves.iter().find(|(m, _)| *m == pit) {
                return entry.clone();
            }
            let _ = writeln!(self.output, "Invalid choice. Try again.");
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
