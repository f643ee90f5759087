use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Side;

/// What a finished move did, beyond moving stones: whether any capture
/// fired and whether the mover earned another turn.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct MoveEffects {
    pub captured: bool,
    pub extra_move: bool,
}

/// The rule variant, chosen once per game.
///
/// All rule differences live behind this enum: how sowing treats the
/// mover's own store, what a landing stone captures, and which candidate
/// moves are admissible at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Kalah,
    Wari,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Kalah => "Kalah",
            Variant::Wari => "Wari",
        }
    }

    /// Whether the sowing walk deposits into the mover's own store.
    pub(super) fn sows_own_store(self) -> bool {
        matches!(self, Variant::Kalah)
    }

    /// Apply this variant's capture rule to the pit the last stone
    /// landed in. Runs after sowing is complete.
    pub(super) fn apply_capture(self, board: &mut Board, mover: Side, landing: usize) -> MoveEffects {
        match self {
            Variant::Wari => wari_capture(board, mover, landing),
            Variant::Kalah => kalah_capture(board, mover, landing),
        }
    }

    /// Whether a candidate move is admissible given the board it
    /// produces. Kalah admits every non-empty pit; Wari rejects moves
    /// that leave the opponent without a single stone to answer with.
    pub(super) fn move_is_legal(self, after: &Board, mover: Side) -> bool {
        match self {
            Variant::Kalah => true,
            Variant::Wari => after.side_has_stones(mover.other()),
        }
    }
}

/// Chain capture: from the landing pit, walk toward lower indices while
/// still inside the opponent's range and the pit holds exactly 2 or 3
/// stones, banking each such pit. The first 0/1/4+ pit ends the chain.
fn wari_capture(board: &mut Board, mover: Side, landing: usize) -> MoveEffects {
    let range = board.pit_range(mover.other());
    let store = board.store_index(mover);
    let mut effects = MoveEffects::default();

    let mut idx = landing;
    while range.contains(&idx) && (board.pits[idx] == 2 || board.pits[idx] == 3) {
        board.pits[store] += board.pits[idx];
        board.pits[idx] = 0;
        effects.captured = true;
        if idx == 0 {
            break;
        }
        idx -= 1;
    }
    effects
}

/// Landing in an empty own pit steals the opposite pit: both its stones
/// and the landing stone go to the mover's store. Landing in the own
/// store earns an extra move.
fn kalah_capture(board: &mut Board, mover: Side, landing: usize) -> MoveEffects {
    let n = board.rules().pits_per_side;
    let mut effects = MoveEffects::default();

    if board.pit_range(mover).contains(&landing) && board.pits[landing] == 1 {
        let opposite = 2 * n - landing;
        if board.pits[opposite] > 0 {
            let captured = board.pits[opposite] + 1;
            board.pits[opposite] = 0;
            board.pits[landing] = 0;
            let store = board.store_index(mover);
            board.pits[store] += captured;
            effects.captured = true;
        }
    }
    if landing == board.store_index(mover) {
        effects.extra_move = true;
    }
    effects
}
