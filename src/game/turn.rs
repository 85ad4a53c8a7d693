use rand::Rng;

use crate::dice::{DICE_COUNT, Roll};
use crate::error::{KeepError, RollError};

use super::{Game, GameState};

impl Game {
    /// Rolls all dice that are not kept.
    ///
    /// The first roll of a turn rerolls everything, since keeps are cleared
    /// when the turn begins. When the last roll of the turn is used the game
    /// moves to [`GameState::MustPick`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the rolling state, the player
    /// is unknown, or it is not the player's turn.
    pub fn roll_dice(&self, player_id: u8) -> Result<Roll, RollError> {
        if *self.state.lock() != GameState::Rolling {
            return Err(RollError::InvalidState);
        }
        if !self.players.lock().contains(&player_id) {
            return Err(RollError::PlayerNotFound);
        }
        if !self.is_current(player_id) {
            return Err(RollError::NotYourTurn);
        }

        let kept = *self.kept.lock();
        let mut faces = self.dice.lock().faces();
        let mut rng = self.rng.lock();
        for (face, kept) in faces.iter_mut().zip(kept) {
            if !kept {
                *face = rng.random_range(1..=6);
            }
        }
        drop(rng);

        let roll = Roll::from_faces(faces);
        *self.dice.lock() = roll;

        let mut rolls_left = self.rolls_left.lock();
        *rolls_left -= 1;
        let exhausted = *rolls_left == 0;
        drop(rolls_left);

        if exhausted {
            *self.state.lock() = GameState::MustPick;
        }

        Ok(roll)
    }

    /// Toggles whether a die is kept across rerolls.
    ///
    /// Returns the die's new kept flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the rolling state, it is not
    /// the player's turn, the turn's first roll has not happened yet, or the
    /// die index is out of range.
    pub fn toggle_keep(&self, player_id: u8, die: usize) -> Result<bool, KeepError> {
        if *self.state.lock() != GameState::Rolling {
            return Err(KeepError::InvalidState);
        }
        if !self.is_current(player_id) {
            return Err(KeepError::NotYourTurn);
        }
        if !self.has_rolled() {
            return Err(KeepError::NoRollYet);
        }
        if die >= DICE_COUNT {
            return Err(KeepError::InvalidDie);
        }

        let mut kept = self.kept.lock();
        kept[die] = !kept[die];
        Ok(kept[die])
    }
}
