//! Final standings once every scorecard is complete.

extern crate alloc;

use alloc::vec::Vec;

use crate::totals::Totals;

/// Final totals for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStanding {
    /// The player ID.
    pub player_id: u8,
    /// The player's final totals, including any Yacht bonuses.
    pub totals: Totals,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// Standings sorted by grand total, highest first. Players with equal
    /// totals keep their join order.
    pub standings: Vec<PlayerStanding>,
    /// The winning player ID, or `None` when the top total is tied.
    pub winner: Option<u8>,
}
