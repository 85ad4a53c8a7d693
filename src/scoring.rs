//! Scoring rules: mapping a roll and a category to points.

use crate::category::Category;
use crate::dice::Roll;

/// Fixed score for a small straight.
pub const SMALL_STRAIGHT_SCORE: u32 = 15;

/// Fixed score for a large straight.
pub const LARGE_STRAIGHT_SCORE: u32 = 30;

/// Fixed score for a Yacht.
pub const YACHT_SCORE: u32 = 50;

/// Returns whether `len` consecutive faces starting at `start` all appear.
const fn has_run(counts: &[u8; 6], start: u8, len: u8) -> bool {
    let mut face = start;
    while face < start + len {
        if counts[(face - 1) as usize] == 0 {
            return false;
        }
        face += 1;
    }
    true
}

/// Computes the points the given category would award for the given roll.
///
/// Pure and total: a roll that does not satisfy a category's pattern scores
/// 0, which is a legitimate result rather than an error. Each category is
/// evaluated on its own merits; a quintuple, for example, scores both Full
/// House (sum of dice) and Yacht (50) when asked about either.
///
/// # Example
///
/// ```
/// use yachtrs::{Category, Roll, score};
///
/// let roll = Roll::new([5, 5, 5, 5, 2]).unwrap();
/// assert_eq!(score(roll, Category::Fives), 20);
/// assert_eq!(score(roll, Category::FourOfAKind), 22);
/// assert_eq!(score(roll, Category::Yacht), 0);
/// ```
#[must_use]
pub fn score(roll: Roll, category: Category) -> u32 {
    let counts = roll.counts();

    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            let face = category.index() as u8 + 1;
            u32::from(roll.face_count(face)) * u32::from(face)
        }
        Category::Choice => roll.sum(),
        Category::FourOfAKind => {
            if counts.iter().any(|&c| c >= 4) {
                roll.sum()
            } else {
                0
            }
        }
        Category::FullHouse => {
            // A quintuple counts as a full house, as does the usual 3 + 2.
            if counts.contains(&5) || (counts.contains(&3) && counts.contains(&2)) {
                roll.sum()
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if (1..=3).any(|start| has_run(&counts, start, 4)) {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if (1..=2).any(|start| has_run(&counts, start, 5)) {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::Yacht => {
            if roll.is_five_of_a_kind() {
                YACHT_SCORE
            } else {
                0
            }
        }
    }
}
