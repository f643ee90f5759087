use serde::{Deserialize, Serialize};

/// One of the two sides of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Get the opposing side
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::One => "P1",
            Side::Two => "P2",
        }
    }
}

/// What controls a side: a person at the terminal, a uniform random
/// picker, or the minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Random,
    Search,
}

impl PlayerKind {
    /// Single-letter code used in report headers and file names.
    pub fn code(self) -> &'static str {
        match self {
            PlayerKind::Human => "P",
            PlayerKind::Random => "R",
            PlayerKind::Search => "C",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::One.other(), Side::Two);
        assert_eq!(Side::Two.other(), Side::One);
    }

    #[test]
    fn test_side_name() {
        assert_eq!(Side::One.name(), "P1");
        assert_eq!(Side::Two.name(), "P2");
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(PlayerKind::Human.code(), "P");
        assert_eq!(PlayerKind::Random.code(), "R");
        assert_eq!(PlayerKind::Search.code(), "C");
    }
}
