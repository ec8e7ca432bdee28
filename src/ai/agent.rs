use crate::error::SelectError;
use crate::game::Board;

/// Universal interface for computer opponents.
pub trait Agent {
    /// Select a column to play on `board`.
    ///
    /// The board is borrowed mutably so implementations can probe moves with
    /// apply/undo, but it must be handed back exactly as it was received.
    fn select_column(&mut self, board: &mut Board) -> Result<usize, SelectError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
