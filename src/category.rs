//! Scoring categories and their player-facing text.

/// Number of categories on a scorecard.
pub const CATEGORY_COUNT: usize = 12;

/// A scoring category.
///
/// The declaration order is the canonical card order: indices 0-5 form the
/// upper section (Ones through Sixes), indices 6-11 the lower section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    /// Sum of dice showing 1.
    Ones,
    /// Sum of dice showing 2.
    Twos,
    /// Sum of dice showing 3.
    Threes,
    /// Sum of dice showing 4.
    Fours,
    /// Sum of dice showing 5.
    Fives,
    /// Sum of dice showing 6.
    Sixes,
    /// Sum of all five dice, no pattern required.
    Choice,
    /// Four or more dice showing the same face.
    FourOfAKind,
    /// A triple plus a pair (a quintuple also qualifies).
    FullHouse,
    /// Four consecutive faces.
    SmallStraight,
    /// Five consecutive faces.
    LargeStraight,
    /// All five dice showing the same face.
    Yacht,
}

impl Category {
    /// All categories in card order.
    pub const ALL: [Self; CATEGORY_COUNT] = [
        Self::Ones,
        Self::Twos,
        Self::Threes,
        Self::Fours,
        Self::Fives,
        Self::Sixes,
        Self::Choice,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::SmallStraight,
        Self::LargeStraight,
        Self::Yacht,
    ];

    /// Returns the canonical index of this category (0-11).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the category at the given canonical index.
    ///
    /// # Example
    ///
    /// ```
    /// use yachtrs::Category;
    ///
    /// assert_eq!(Category::from_index(11), Some(Category::Yacht));
    /// assert_eq!(Category::from_index(12), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CATEGORY_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns whether this category belongs to the upper section.
    #[must_use]
    pub const fn is_upper(self) -> bool {
        (self as usize) < 6
    }

    /// Returns the display name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ones => "Ones",
            Self::Twos => "Twos",
            Self::Threes => "Threes",
            Self::Fours => "Fours",
            Self::Fives => "Fives",
            Self::Sixes => "Sixes",
            Self::Choice => "Choice",
            Self::FourOfAKind => "4 of a Kind",
            Self::FullHouse => "Full House",
            Self::SmallStraight => "Small Straight",
            Self::LargeStraight => "Large Straight",
            Self::Yacht => "Yacht",
        }
    }

    /// Returns the rule text shown to players for this category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ones => "Sum of dice showing 1 (max 5)",
            Self::Twos => "Sum of dice showing 2 (max 10)",
            Self::Threes => "Sum of dice showing 3 (max 15)",
            Self::Fours => "Sum of dice showing 4 (max 20)",
            Self::Fives => "Sum of dice showing 5 (max 25)",
            Self::Sixes => "Sum of dice showing 6 (max 30)",
            Self::Choice => "Sum of all five dice (max 30)",
            Self::FourOfAKind => "Four or more of the same face: sum of all five dice (max 30)",
            Self::FullHouse => "Three of one face plus two of another: sum of all five dice",
            Self::SmallStraight => {
                "Four consecutive faces (1-2-3-4, 2-3-4-5 or 3-4-5-6): fixed 15 points"
            }
            Self::LargeStraight => {
                "Five consecutive faces (1-2-3-4-5 or 2-3-4-5-6): fixed 30 points"
            }
            Self::Yacht => "All five dice the same: fixed 50 points",
        }
    }

    /// Returns a worked example roll for this category.
    #[must_use]
    pub const fn example(self) -> &'static str {
        match self {
            Self::Ones => "1-1-1-5-6 = 3",
            Self::Twos => "2-2-2-5-6 = 6",
            Self::Threes => "3-3-3-5-6 = 9",
            Self::Fours => "1-2-4-4-4 = 12",
            Self::Fives => "1-2-5-5-5 = 15",
            Self::Sixes => "1-2-6-6-6 = 18",
            Self::Choice => "3-4-5-6-6 = 24",
            Self::FourOfAKind => "5-6-6-6-6 = 29",
            Self::FullHouse => "5-5-6-6-6 = 28",
            Self::SmallStraight => "1-2-3-4-5 = 15",
            Self::LargeStraight => "2-3-4-5-6 = 30",
            Self::Yacht => "1-1-1-1-1 = 50",
        }
    }
}
