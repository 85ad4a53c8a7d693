//! Totals over a scorecard: subtotals, bonuses, and previews.

use crate::category::Category;
use crate::dice::Roll;
use crate::scorecard::ScoreCard;
use crate::scoring::score;

/// Upper-section subtotal needed to earn the upper bonus.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;

/// Points awarded by the upper bonus.
pub const UPPER_BONUS: u32 = 35;

/// Points awarded per Yacht bonus (a second five of a kind rolled after the
/// Yacht category already holds 50, credited when a different non-zero
/// category is committed).
pub const YACHT_BONUS: u32 = 100;

/// Totals derived from a scorecard snapshot.
///
/// Never stored; recompute from the card whenever it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of the upper-section entries (unset counts as 0).
    pub upper_subtotal: u32,
    /// 35 if the upper subtotal reached 63, otherwise 0.
    pub upper_bonus: u32,
    /// Sum of the lower-section entries (unset counts as 0).
    pub lower_subtotal: u32,
    /// Grand total, including bonuses.
    pub total: u32,
}

/// A speculative evaluation of committing one category against the current
/// roll, without touching the real card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    /// Totals of the card as it stands.
    pub current: Totals,
    /// Totals with the previewed category provisionally filled in.
    pub hypothetical: Totals,
    /// `hypothetical.total - current.total`.
    pub delta: u32,
}

/// Computes the totals for a scorecard.
///
/// # Example
///
/// ```
/// use yachtrs::{Category, ScoreCard, totals};
///
/// let mut card = ScoreCard::new();
/// card.record(Category::Sixes, 24).unwrap();
/// card.record(Category::Choice, 18).unwrap();
///
/// let t = totals(&card);
/// assert_eq!(t.upper_subtotal, 24);
/// assert_eq!(t.upper_bonus, 0);
/// assert_eq!(t.total, 42);
/// ```
#[must_use]
pub fn totals(card: &ScoreCard) -> Totals {
    totals_with_bonus(card, 0)
}

/// Computes the totals for a scorecard, adding [`YACHT_BONUS`] points per
/// earned Yacht bonus to the grand total.
#[must_use]
pub fn totals_with_bonus(card: &ScoreCard, yacht_bonuses: u32) -> Totals {
    let mut upper_subtotal = 0;
    let mut lower_subtotal = 0;
    for category in Category::ALL {
        let points = card.get(category).unwrap_or(0);
        if category.is_upper() {
            upper_subtotal += points;
        } else {
            lower_subtotal += points;
        }
    }

    let upper_bonus = if upper_subtotal >= UPPER_BONUS_THRESHOLD {
        UPPER_BONUS
    } else {
        0
    };

    Totals {
        upper_subtotal,
        upper_bonus,
        lower_subtotal,
        total: upper_subtotal + upper_bonus + lower_subtotal + YACHT_BONUS * yacht_bonuses,
    }
}

/// Computes current and hypothetical totals for committing `category`
/// against `roll`.
///
/// The caller's card is copied, never mutated. If the category is already
/// filled the hypothetical totals equal the current ones and the delta is 0;
/// by contract callers only preview open categories while rolls remain.
///
/// # Example
///
/// ```
/// use yachtrs::{Category, Roll, ScoreCard, preview};
///
/// let card = ScoreCard::new();
/// let roll = Roll::new([6, 6, 6, 6, 6]).unwrap();
/// let p = preview(&card, roll, Category::Yacht);
/// assert_eq!(p.delta, 50);
/// assert_eq!(p.current.total, 0);
/// ```
#[must_use]
pub fn preview(card: &ScoreCard, roll: Roll, category: Category) -> Preview {
    let current = totals(card);

    let mut hypothetical_card = *card;
    if !hypothetical_card.is_filled(category) {
        // Cannot fail: just checked the entry is unset.
        let _ = hypothetical_card.record(category, score(roll, category));
    }
    let hypothetical = totals(&hypothetical_card);

    Preview {
        current,
        hypothetical,
        delta: hypothetical.total - current.total,
    }
}
