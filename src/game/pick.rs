use crate::category::Category;
use crate::error::PickError;
use crate::scoring::{YACHT_SCORE, score};

use super::{Game, GameState};

impl Game {
    /// Commits the current roll into a category on the player's card.
    ///
    /// Returns the recorded points. The committed value is
    /// [`score`]`(current roll, category)` and can never be changed
    /// afterwards. Committing ends the turn: the next player's turn begins,
    /// or the game ends once every card is complete.
    ///
    /// A Yacht bonus is earned when the committed category is not Yacht,
    /// scores non-zero, the roll is five of a kind, and the player's Yacht
    /// box already holds 50.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not running, it is not the player's
    /// turn, the player is unknown, no roll has been made this turn, or the
    /// category already holds a score.
    pub fn pick_category(&self, player_id: u8, category: Category) -> Result<u32, PickError> {
        let state = *self.state.lock();
        if state != GameState::Rolling && state != GameState::MustPick {
            return Err(PickError::InvalidState);
        }
        if !self.players.lock().contains(&player_id) {
            return Err(PickError::PlayerNotFound);
        }
        if !self.is_current(player_id) {
            return Err(PickError::NotYourTurn);
        }
        if !self.has_rolled() {
            return Err(PickError::NoRollYet);
        }

        let roll = *self.dice.lock();
        let points = score(roll, category);

        let mut cards = self.cards.lock();
        let card = cards.get_mut(&player_id).ok_or(PickError::PlayerNotFound)?;

        let earns_yacht_bonus = self.options.yacht_bonus
            && category != Category::Yacht
            && points > 0
            && roll.is_five_of_a_kind()
            && card.get(Category::Yacht) == Some(YACHT_SCORE);

        if card.record(category, points).is_err() {
            return Err(PickError::CategoryFilled);
        }
        drop(cards);

        if earns_yacht_bonus {
            *self.yacht_bonuses.lock().entry(player_id).or_insert(0) += 1;
        }

        self.advance_turn();
        Ok(points)
    }

    /// Moves to the next player's turn, or ends the game when every card is
    /// complete.
    fn advance_turn(&self) {
        if self.all_cards_complete() {
            *self.state.lock() = GameState::GameOver;
            return;
        }

        let player_count = self.players.lock().len();
        let mut turn_index = self.turn_index.lock();
        *turn_index = (*turn_index + 1) % player_count;
        drop(turn_index);

        self.begin_turn();
    }
}
