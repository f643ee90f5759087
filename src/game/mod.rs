//! Core Mancala game logic: board layout, rule variants, and the game
//! state machine with immutable transitions.

mod board;
mod player;
mod state;
mod variant;

pub use board::{Board, Rules};
pub use player::{PlayerKind, Side};
pub use state::GameState;
pub use variant::Variant;
