//! Game configuration options.

/// Configuration options for a Yacht game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use yachtrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_rolls_per_turn(2)
///     .with_yacht_bonus(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of rolls each player gets per turn. The engine treats 0 as 1,
    /// since a turn cannot be committed without at least one roll.
    pub rolls_per_turn: u8,
    /// Whether the +100 Yacht bonus rule is in effect.
    pub yacht_bonus: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rolls_per_turn: 3,
            yacht_bonus: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of rolls per turn.
    ///
    /// # Example
    ///
    /// ```
    /// use yachtrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_rolls_per_turn(1);
    /// assert_eq!(options.rolls_per_turn, 1);
    /// ```
    #[must_use]
    pub const fn with_rolls_per_turn(mut self, rolls_per_turn: u8) -> Self {
        self.rolls_per_turn = rolls_per_turn;
        self
    }

    /// Enables or disables the +100 Yacht bonus rule.
    ///
    /// # Example
    ///
    /// ```
    /// use yachtrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_yacht_bonus(false);
    /// assert!(!options.yacht_bonus);
    /// ```
    #[must_use]
    pub const fn with_yacht_bonus(mut self, yacht_bonus: bool) -> Self {
        self.yacht_bonus = yacht_bonus;
        self
    }
}
