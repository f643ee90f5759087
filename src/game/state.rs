use super::board::{Board, Rules};
use super::player::Side;

/// A position in play: the board, whose turn it is, and how long the
/// game has gone without a capture.
///
/// States are immutable; every transition returns a fresh value and
/// leaves its parent untouched, so search branches never alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Side,
    moves_without_capture: u32,
}

impl GameState {
    /// Create the opening state: full pits, empty stores, P1 to move.
    pub fn initial(rules: Rules) -> Self {
        GameState {
            board: Board::new(rules),
            to_move: Side::One,
            moves_without_capture: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> Rules {
        self.board.rules()
    }

    /// The side whose turn it is.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Consecutive moves without a capture, for stalemate breaking.
    /// Reset to zero by any capture.
    pub fn moves_without_capture(&self) -> u32 {
        self.moves_without_capture
    }

    /// Stones banked in a side's store.
    pub fn store(&self, side: Side) -> u32 {
        self.board.store(side)
    }

    /// Sow from `pit` and apply the variant's capture rule, returning
    /// the resulting state. The turn flips unless the move earned an
    /// extra turn (Kalah store landing).
    ///
    /// `pit` must be a non-store pit holding at least one stone;
    /// [`legal_moves`](Self::legal_moves) is the gate that guarantees
    /// this during play.
    pub fn apply_move(&self, pit: usize) -> GameState {
        let mut board = self.board.clone();
        let landing = board.sow(pit, self.to_move);
        let effects = self.rules().variant.apply_capture(&mut board, self.to_move, landing);

        let to_move = if effects.extra_move {
            self.to_move
        } else {
            self.to_move.other()
        };
        let moves_without_capture = if effects.captured {
            0
        } else {
            self.moves_without_capture + 1
        };

        GameState {
            board,
            to_move,
            moves_without_capture,
        }
    }

    /// Enumerate the mover's playable pits together with the state each
    /// produces, in ascending pit order. Under Wari, moves that would
    /// leave the opponent with nothing to play are excluded.
    ///
    /// An empty result is the primary "no move available" signal.
    pub fn legal_moves(&self) -> Vec<(usize, GameState)> {
        let variant = self.rules().variant;
        let mut moves = Vec::new();
        for pit in self.board.pit_range(self.to_move) {
            if self.board.get(pit) == 0 {
                continue;
            }
            let next = self.apply_move(pit);
            if variant.move_is_legal(next.board(), self.to_move) {
                moves.push((pit, next));
            }
        }
        moves
    }

    /// Whether this position ends the game: a store holds strictly more
    /// than half the stones in play, or the side to move has no stones
    /// left in its pits. Cheaper than generating moves, and used as the
    /// search cutoff.
    pub fn is_game_over(&self) -> bool {
        let half = self.rules().total_stones() / 2;
        if self.store(Side::One) > half || self.store(Side::Two) > half {
            return true;
        }
        !self.board.side_has_stones(self.to_move)
    }

    /// Stalemate resolution: sweep every playing pit, discard one stone
    /// if the swept total is odd, and bank half in each store.
    pub fn split_remaining_stones(&self) -> GameState {
        let mut board = self.board.clone();
        let mut swept = 0;
        for side in [Side::One, Side::Two] {
            for pit in board.pit_range(side) {
                swept += std::mem::take(&mut board.pits[pit]);
            }
        }
        let half = (swept - swept % 2) / 2;
        let p1_store = board.store_index(Side::One);
        let p2_store = board.store_index(Side::Two);
        board.pits[p1_store] += half;
        board.pits[p2_store] += half;

        GameState {
            board,
            to_move: self.to_move,
            moves_without_capture: self.moves_without_capture,
        }
    }

    /// Sum each half of the board (pits plus store). Kalah games that
    /// run out of moves score leftover stones for the side they sit on.
    pub fn side_totals(&self) -> (u32, u32) {
        let n = self.rules().pits_per_side;
        let p1: u32 = self.board.pits[..=n].iter().sum();
        let p2: u32 = self.board.pits[n + 1..].iter().sum();
        (p1, p2)
    }
}

#[cfg(test)]
impl GameState {
    /// Test helper: a state with explicit pit contents and turn.
    pub(crate) fn with_pits(rules: Rules, pits: Vec<u32>, to_move: Side) -> GameState {
        GameState {
            board: Board::from_pits(rules, pits),
            to_move,
            moves_without_capture: 0,
        }
    }
}
