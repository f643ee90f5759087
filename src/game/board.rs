use std::fmt;
use std::ops::Range;

use super::player::Side;
use super::variant::Variant;

/// Immutable per-game rule parameters, fixed at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub pits_per_side: usize,
    pub stones_per_pit: u32,
    pub variant: Variant,
}

impl Rules {
    /// Number of stones in play for the whole game.
    pub fn total_stones(&self) -> u32 {
        2 * self.pits_per_side as u32 * self.stones_per_pit
    }
}

/// The physical board: `2n + 2` pit counts laid out as
/// `[P1 pits 0..n-1][P1 store n][P2 pits n+1..2n][P2 store 2n+1]`.
///
/// A value type; every move clones its parent board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(super) pits: Vec<u32>,
    rules: Rules,
}

impl Board {
    /// Create the opening board: every playing pit filled, stores empty.
    pub fn new(rules: Rules) -> Self {
        let n = rules.pits_per_side;
        let mut pits = vec![rules.stones_per_pit; 2 * n + 2];
        pits[n] = 0;
        pits[2 * n + 1] = 0;
        Board { pits, rules }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Stone count at an absolute pit index.
    pub fn get(&self, index: usize) -> u32 {
        self.pits[index]
    }

    /// Absolute indices of a side's playing pits (store excluded).
    pub fn pit_range(&self, side: Side) -> Range<usize> {
        let n = self.rules.pits_per_side;
        match side {
            Side::One => 0..n,
            Side::Two => n + 1..2 * n + 1,
        }
    }

    /// Absolute index of a side's store.
    pub fn store_index(&self, side: Side) -> usize {
        let n = self.rules.pits_per_side;
        match side {
            Side::One => n,
            Side::Two => 2 * n + 1,
        }
    }

    /// Stones currently banked in a side's store.
    pub fn store(&self, side: Side) -> u32 {
        self.pits[self.store_index(side)]
    }

    /// Whether a side has any stone left in its playing pits.
    pub fn side_has_stones(&self, side: Side) -> bool {
        self.pit_range(side).any(|i| self.pits[i] > 0)
    }

    /// Sum over every pit and both stores.
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Empty the chosen pit and distribute its stones one per pit along
    /// the circular path, returning the final landing index.
    ///
    /// Skipped while walking: the opponent's store, the originating pit,
    /// and under Wari the mover's own store as well.
    pub(super) fn sow(&mut self, from: usize, mover: Side) -> usize {
        let mut stones = std::mem::take(&mut self.pits[from]);
        let own_store = self.store_index(mover);
        let opponent_store = self.store_index(mover.other());
        let len = self.pits.len();

        let mut pos = from;
        while stones > 0 {
            pos = (pos + 1) % len;
            if pos == opponent_store {
                continue;
            }
            if pos == from {
                continue;
            }
            if pos == own_store && !self.rules.variant.sows_own_store() {
                continue;
            }
            self.pits[pos] += 1;
            stones -= 1;
        }
        pos
    }
}

#[cfg(test)]
impl Board {
    /// Test helper: a board with explicit pit contents.
    pub(crate) fn from_pits(rules: Rules, pits: Vec<u32>) -> Board {
        assert_eq!(pits.len(), 2 * rules.pits_per_side + 2);
        Board { pits, rules }
    }
}

fn cell(count: u32) -> String {
    let open = if count < 100 { "[ " } else { "[" };
    let close = if count < 10 { " ]" } else { "]" };
    format!("{open}{count}{close}")
}

impl fmt::Display for Board {
    /// Renders the board as two pit rows with the stores on the flanks,
    /// P2's pits mirrored so both sides read in play order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.rules.pits_per_side;

        write!(f, "P2  ")?;
        for i in (n + 1..=2 * n).rev() {
            write!(f, "{}", cell(self.pits[i]))?;
        }
        writeln!(f)?;

        write!(f, "{}", cell(self.pits[2 * n + 1]))?;
        write!(f, "{}", " ".repeat(n * 5 - 2))?;
        writeln!(f, "{}", cell(self.pits[n]))?;

        write!(f, "P1  ")?;
        for i in 0..n {
            write!(f, "{}", cell(self.pits[i]))?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kalah_rules() -> Rules {
        Rules {
            pits_per_side: 6,
            stones_per_pit: 4,
            variant: Variant::Kalah,
        }
    }

    fn wari_rules() -> Rules {
        Rules {
            variant: Variant::Wari,
            ..kalah_rules()
        }
    }

    #[test]
    fn test_new_board_layout() {
        let board = Board::new(kalah_rules());
        assert_eq!(
            board.pits,
            vec![4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]
        );
        assert_eq!(board.store_index(Side::One), 6);
        assert_eq!(board.store_index(Side::Two), 13);
        assert_eq!(board.pit_range(Side::One), 0..6);
        assert_eq!(board.pit_range(Side::Two), 7..13);
        assert_eq!(board.total_stones(), 48);
    }

    #[test]
    fn test_sow_deposits_in_own_store_under_kalah() {
        let mut board = Board::new(kalah_rules());
        let landing = board.sow(2, Side::One);
        assert_eq!(landing, 6);
        assert_eq!(board.pits, vec![4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
    }

    #[test]
    fn test_sow_skips_own_store_under_wari() {
        let mut board = Board::new(wari_rules());
        let landing = board.sow(2, Side::One);
        // Fourth stone passes over the store and lands in the opponent's
        // first pit instead.
        assert_eq!(landing, 7);
        assert_eq!(board.pits, vec![4, 4, 0, 5, 5, 5, 0, 5, 4, 4, 4, 4, 4, 0]);
    }

    #[test]
    fn test_sow_skips_opponent_store() {
        let mut board = Board::new(kalah_rules());
        board.pits = vec![0, 0, 0, 0, 0, 9, 0, 4, 4, 4, 4, 4, 4, 0];
        let landing = board.sow(5, Side::One);
        // 9 stones: store, six opponent pits, opponent store skipped,
        // then wraps to pits 0 and 1.
        assert_eq!(landing, 1);
        assert_eq!(board.get(13), 0);
        assert_eq!(board.pits, vec![1, 1, 0, 0, 0, 0, 1, 5, 5, 5, 5, 5, 5, 0]);
    }

    #[test]
    fn test_sow_never_redeposits_in_origin() {
        let mut board = Board::new(kalah_rules());
        // Enough stones for a full lap: the origin is skipped, so a
        // 13-stone sow fills every other reachable pit exactly once.
        board.pits = vec![13, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0];
        let landing = board.sow(0, Side::One);
        assert_eq!(board.get(0), 0);
        assert_eq!(landing, 1);
        assert_eq!(
            board.pits,
            vec![0, 6, 5, 5, 5, 5, 1, 5, 5, 5, 5, 5, 5, 0]
        );
    }

    #[test]
    fn test_sow_conserves_stones() {
        let mut board = Board::new(kalah_rules());
        board.sow(3, Side::One);
        assert_eq!(board.total_stones(), 48);
        board.sow(9, Side::Two);
        assert_eq!(board.total_stones(), 48);
    }

    #[test]
    fn test_display_widths() {
        assert_eq!(cell(4), "[ 4 ]");
        assert_eq!(cell(12), "[ 12]");
        assert_eq!(cell(104), "[104]");
    }

    #[test]
    fn test_display_rows() {
        let board = Board::new(kalah_rules());
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("P2  "));
        assert!(lines[2].starts_with("P1  "));
        assert_eq!(lines[0].matches("[ 4 ]").count(), 6);
    }
}
