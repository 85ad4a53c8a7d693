//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to join.
    WaitingForPlayers,
    /// The current player still has rolls left this turn.
    Rolling,
    /// No rolls left; the current player must commit a category.
    MustPick,
    /// Every scorecard is complete; the outcome can be read.
    GameOver,
}
