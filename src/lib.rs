//! A Yacht dice game engine with optional `no_std` support.
//!
//! The scoring core is a pair of pure functions: [`score`] maps a five-die
//! [`Roll`] and a [`Category`] to points, and [`totals`]/[`preview`] turn a
//! [`ScoreCard`] snapshot into subtotals, the upper bonus, and speculative
//! deltas. On top of that, [`Game`] manages the full round flow: joining,
//! rolling, keeping dice, and committing categories.
//!
//! # Example
//!
//! ```
//! use yachtrs::{Category, Roll, score};
//!
//! let roll = Roll::new([4, 4, 5, 5, 5]).unwrap();
//! assert_eq!(score(roll, Category::FullHouse), 23);
//! assert_eq!(score(roll, Category::Fives), 15);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod category;
pub mod dice;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod scorecard;
pub mod scoring;
mod sync;
pub mod totals;

// Re-export main types
pub use category::{CATEGORY_COUNT, Category};
pub use dice::{DICE_COUNT, FACE_COUNT, Roll};
pub use error::{
    DiceError, JoinError, KeepError, PickError, RecordError, RollError, StartError,
};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use result::{GameOutcome, PlayerStanding};
pub use scorecard::ScoreCard;
pub use scoring::{LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE, YACHT_SCORE, score};
pub use totals::{
    Preview, Totals, UPPER_BONUS, UPPER_BONUS_THRESHOLD, YACHT_BONUS, preview, totals,
    totals_with_bonus,
};
