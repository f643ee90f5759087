use crate::game::GameState;

/// Universal interface for move-selecting players.
pub trait Agent {
    /// Pick one of the supplied legal moves for the side to move.
    /// `moves` pairs each playable pit with the state it produces and is
    /// never empty; the game loop only consults an agent when at least
    /// one legal move exists.
    fn select_move(
        &mut self,
        state: &GameState,
        moves: &[(usize, GameState)],
    ) -> (usize, GameState);

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
