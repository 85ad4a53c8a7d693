//! Game engine and round-state management.

use core::sync::atomic::{AtomicU8, Ordering};

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::sync::Mutex;

use crate::dice::{DICE_COUNT, Roll};
use crate::error::{JoinError, StartError};
use crate::options::GameOptions;
use crate::result::{GameOutcome, PlayerStanding};
use crate::scorecard::ScoreCard;
use crate::totals::{Totals, totals_with_bonus};

mod pick;
pub mod state;
mod turn;

pub use state::GameState;

/// A Yacht game engine that manages players, dice, and turn flow.
///
/// The game owns the dice, kept flags, per-player scorecards, and whose turn
/// it is. Use [`GameOptions`] to configure rules such as rolls per turn and
/// the Yacht bonus. Scoring itself stays in the pure [`crate::score`] and
/// [`crate::totals`] functions; the engine only decides when they apply.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Current face-up dice.
    pub dice: Mutex<Roll>,
    /// Which dice are kept (not rerolled).
    pub kept: Mutex<[bool; DICE_COUNT]>,
    /// Rolls remaining in the current turn.
    rolls_left: Mutex<u8>,
    /// Next player ID to assign.
    next_id: AtomicU8,
    /// Active player IDs, in join order (which is also turn order).
    pub players: Mutex<Vec<u8>>,
    /// Player scorecards (`player_id` -> card).
    pub cards: Mutex<HashMap<u8, ScoreCard>>,
    /// Earned Yacht bonuses (`player_id` -> count).
    pub yacht_bonuses: Mutex<HashMap<u8, u32>>,
    /// Index into `players` of the player whose turn it is.
    turn_index: Mutex<usize>,
    /// Random number generator for dice rolls.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use yachtrs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::WaitingForPlayers),
            dice: Mutex::new(Roll::default()),
            kept: Mutex::new([false; DICE_COUNT]),
            rolls_left: Mutex::new(0),
            next_id: AtomicU8::new(0),
            players: Mutex::new(Vec::new()),
            cards: Mutex::new(HashMap::new()),
            yacht_bonuses: Mutex::new(HashMap::new()),
            turn_index: Mutex::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Joins the game with an empty scorecard.
    ///
    /// Returns the assigned player ID. Join order is turn order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already started.
    pub fn join(&self) -> Result<u8, JoinError> {
        if *self.state.lock() != GameState::WaitingForPlayers {
            return Err(JoinError::GameInProgress);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.players.lock().push(id);
        self.cards.lock().insert(id, ScoreCard::new());
        self.yacht_bonuses.lock().insert(id, 0);
        Ok(id)
    }

    /// Leaves the game, forfeiting the scorecard.
    ///
    /// If it was the leaving player's turn, the next player's turn begins.
    /// If no players remain the game returns to waiting. Once the game is
    /// over the roster is frozen so the final standings stay intact.
    pub fn leave(&self, player_id: u8) {
        if *self.state.lock() == GameState::GameOver {
            return;
        }

        let mut players = self.players.lock();
        let Some(position) = players.iter().position(|&id| id == player_id) else {
            return;
        };
        players.remove(position);
        let remaining = players.len();
        drop(players);

        self.cards.lock().remove(&player_id);
        self.yacht_bonuses.lock().remove(&player_id);

        let mut state = self.state.lock();
        if *state == GameState::WaitingForPlayers {
            return;
        }

        if remaining == 0 {
            *state = GameState::WaitingForPlayers;
            return;
        }
        drop(state);

        let mut turn_index = self.turn_index.lock();
        let was_current = position == *turn_index;
        if position < *turn_index {
            *turn_index -= 1;
        } else if *turn_index >= remaining {
            *turn_index = 0;
        }
        drop(turn_index);

        if self.all_cards_complete() {
            *self.state.lock() = GameState::GameOver;
        } else if was_current {
            self.begin_turn();
        }
    }

    /// Returns the number of active players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Starts the game: the first joined player rolls first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for players or nobody has
    /// joined.
    pub fn start(&self) -> Result<(), StartError> {
        if *self.state.lock() != GameState::WaitingForPlayers {
            return Err(StartError::InvalidState);
        }
        if self.players.lock().is_empty() {
            return Err(StartError::NoPlayers);
        }

        *self.turn_index.lock() = 0;
        self.begin_turn();
        Ok(())
    }

    /// Resets everything for a fresh game, keeping the joined players.
    pub fn reset(&self) {
        let players = self.players.lock();
        let mut cards = self.cards.lock();
        let mut bonuses = self.yacht_bonuses.lock();
        for &id in players.iter() {
            cards.insert(id, ScoreCard::new());
            bonuses.insert(id, 0);
        }
        drop(bonuses);
        drop(cards);
        drop(players);

        *self.dice.lock() = Roll::default();
        *self.kept.lock() = [false; DICE_COUNT];
        *self.rolls_left.lock() = 0;
        *self.turn_index.lock() = 0;
        *self.state.lock() = GameState::WaitingForPlayers;
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` before the game starts or after it ends.
    pub fn current_player(&self) -> Option<u8> {
        let state = *self.state.lock();
        match state {
            GameState::Rolling | GameState::MustPick => {
                let turn_index = *self.turn_index.lock();
                self.players.lock().get(turn_index).copied()
            }
            GameState::WaitingForPlayers | GameState::GameOver => None,
        }
    }

    /// Returns the rolls remaining in the current turn.
    pub fn rolls_left(&self) -> u8 {
        *self.rolls_left.lock()
    }

    /// Returns the current face-up dice.
    pub fn get_dice(&self) -> Roll {
        *self.dice.lock()
    }

    /// Returns which dice are currently kept.
    pub fn get_kept(&self) -> [bool; DICE_COUNT] {
        *self.kept.lock()
    }

    /// Returns a snapshot of the player's scorecard.
    ///
    /// Returns `None` if the player ID is not found.
    pub fn get_card(&self, player_id: u8) -> Option<ScoreCard> {
        self.cards.lock().get(&player_id).copied()
    }

    /// Returns how many Yacht bonuses the player has earned.
    pub fn yacht_bonus_count(&self, player_id: u8) -> u32 {
        self.yacht_bonuses
            .lock()
            .get(&player_id)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the player's totals, including earned Yacht bonuses.
    ///
    /// Returns `None` if the player ID is not found.
    pub fn totals_for(&self, player_id: u8) -> Option<Totals> {
        let card = self.get_card(player_id)?;
        Some(totals_with_bonus(&card, self.yacht_bonus_count(player_id)))
    }

    /// Returns the final standings once the game is over.
    ///
    /// Returns `None` while the game is still running. Standings are sorted
    /// by grand total, highest first; the winner is `None` on a tie for
    /// first place.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if *self.state.lock() != GameState::GameOver {
            return None;
        }

        let players = self.players.lock().clone();
        let mut standings: Vec<PlayerStanding> = players
            .iter()
            .filter_map(|&player_id| {
                self.totals_for(player_id).map(|totals| PlayerStanding {
                    player_id,
                    totals,
                })
            })
            .collect();
        standings.sort_by(|a, b| b.totals.total.cmp(&a.totals.total));

        let winner = match standings.as_slice() {
            [] => None,
            [first] => Some(first.player_id),
            [first, second, ..] => {
                if first.totals.total == second.totals.total {
                    None
                } else {
                    Some(first.player_id)
                }
            }
        };

        Some(GameOutcome { standings, winner })
    }

    /// Returns the per-turn roll budget. A configured 0 is treated as 1;
    /// every turn needs a roll before a category can be committed.
    fn rolls_budget(&self) -> u8 {
        if self.options.rolls_per_turn == 0 {
            1
        } else {
            self.options.rolls_per_turn
        }
    }

    /// Resets the per-turn state for the player at `turn_index`.
    fn begin_turn(&self) {
        *self.rolls_left.lock() = self.rolls_budget();
        *self.kept.lock() = [false; DICE_COUNT];
        *self.state.lock() = GameState::Rolling;
    }

    /// Returns whether at least one roll has been made this turn.
    fn has_rolled(&self) -> bool {
        *self.rolls_left.lock() < self.rolls_budget()
    }

    fn is_current(&self, player_id: u8) -> bool {
        self.current_player() == Some(player_id)
    }

    fn all_cards_complete(&self) -> bool {
        self.cards.lock().values().all(ScoreCard::is_complete)
    }
}
