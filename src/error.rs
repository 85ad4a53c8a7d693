//! Error types for game operations.

use thiserror::Error;

/// Errors from constructing dice values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiceError {
    /// A die face was outside `1..=6`.
    #[error("die face {face} is outside 1..=6")]
    InvalidFace {
        /// The offending face value.
        face: u8,
    },
}

/// Errors from recording a score on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The category already holds a score.
    #[error("category already holds a score")]
    CategoryFilled,
}

/// Errors from joining a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The game has already started.
    #[error("the game has already started")]
    GameInProgress,
}

/// Errors from starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Invalid game state for starting.
    #[error("invalid game state for starting")]
    InvalidState,
    /// No players have joined.
    #[error("no players have joined")]
    NoPlayers,
}

/// Errors from rolling the dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// Invalid game state for rolling (no rolls left, or game not running).
    #[error("invalid game state for rolling")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors from toggling a die's kept flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeepError {
    /// Invalid game state for keeping dice.
    #[error("invalid game state for keeping dice")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The turn's first roll has not happened yet.
    #[error("no roll has been made this turn")]
    NoRollYet,
    /// Die index out of range.
    #[error("die index out of range")]
    InvalidDie,
}

/// Errors from committing a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    /// Invalid game state for picking a category.
    #[error("invalid game state for picking a category")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The turn's first roll has not happened yet.
    #[error("no roll has been made this turn")]
    NoRollYet,
    /// The category already holds a score.
    #[error("category already holds a score")]
    CategoryFilled,
}
