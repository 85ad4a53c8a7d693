//! Per-player scorecard with one optional entry per category.

use crate::category::{CATEGORY_COUNT, Category};
use crate::error::RecordError;

/// A player's scorecard: exactly one entry per category.
///
/// An entry is `None` until the category is committed; a recorded 0 is a
/// valid score, distinct from unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreCard {
    /// Recorded scores, indexed by category.
    entries: [Option<u32>; CATEGORY_COUNT],
}

impl ScoreCard {
    /// Creates an empty scorecard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: [None; CATEGORY_COUNT],
        }
    }

    /// Returns the recorded score for a category, if any.
    #[must_use]
    pub const fn get(&self, category: Category) -> Option<u32> {
        self.entries[category.index()]
    }

    /// Returns whether a category has been committed.
    #[must_use]
    pub const fn is_filled(&self, category: Category) -> bool {
        self.entries[category.index()].is_some()
    }

    /// Permanently records a score for a category.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::CategoryFilled`] if the category already holds
    /// a score; committed entries can never be changed.
    ///
    /// # Example
    ///
    /// ```
    /// use yachtrs::{Category, ScoreCard};
    ///
    /// let mut card = ScoreCard::new();
    /// card.record(Category::Yacht, 50).unwrap();
    /// assert_eq!(card.get(Category::Yacht), Some(50));
    /// assert!(card.record(Category::Yacht, 0).is_err());
    /// ```
    pub const fn record(&mut self, category: Category, points: u32) -> Result<(), RecordError> {
        if self.entries[category.index()].is_some() {
            return Err(RecordError::CategoryFilled);
        }
        self.entries[category.index()] = Some(points);
        Ok(())
    }

    /// Returns the categories that have not been committed yet, in card order.
    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|category| !self.is_filled(*category))
    }

    /// Returns the number of committed categories.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    /// Returns whether every category has been committed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(Option::is_some)
    }

    /// Returns all entries in card order.
    #[must_use]
    pub const fn entries(&self) -> [Option<u32>; CATEGORY_COUNT] {
        self.entries
    }
}
