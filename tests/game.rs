//! Game integration tests.

use yachtrs::{
    Category, DiceError, Game, GameOptions, GameState, JoinError, KeepError, PickError, Roll,
    RollError, ScoreCard, StartError, UPPER_BONUS, YACHT_BONUS, YACHT_SCORE, preview, score,
    totals, totals_with_bonus,
};

fn roll(faces: [u8; 5]) -> Roll {
    Roll::new(faces).unwrap()
}

fn set_dice(game: &Game, faces: [u8; 5]) {
    *game.dice.lock() = roll(faces);
}

/// Rolls once, overrides the dice to a fixed value, and commits a category.
fn take_turn(game: &Game, player: u8, faces: [u8; 5], category: Category) -> u32 {
    game.roll_dice(player).unwrap();
    set_dice(game, faces);
    game.pick_category(player, category).unwrap()
}

#[test]
fn roll_validates_faces() {
    assert_eq!(
        Roll::new([0, 2, 3, 4, 5]).unwrap_err(),
        DiceError::InvalidFace { face: 0 }
    );
    assert_eq!(
        Roll::new([1, 2, 3, 4, 7]).unwrap_err(),
        DiceError::InvalidFace { face: 7 }
    );

    let r = roll([6, 1, 6, 2, 6]);
    assert_eq!(r.faces(), [6, 1, 6, 2, 6]);
    assert_eq!(r.sum(), 21);
    assert_eq!(r.face_count(6), 3);
    assert_eq!(r.face_count(3), 0);
    assert!(!r.is_five_of_a_kind());
    assert!(roll([4, 4, 4, 4, 4]).is_five_of_a_kind());
}

#[test]
fn category_index_roundtrip() {
    for (i, category) in Category::ALL.into_iter().enumerate() {
        assert_eq!(category.index(), i);
        assert_eq!(Category::from_index(i), Some(category));
        assert_eq!(category.is_upper(), i < 6);
        assert!(!category.name().is_empty());
        assert!(!category.description().is_empty());
        assert!(!category.example().is_empty());
    }
    assert_eq!(Category::from_index(12), None);
}

#[test]
fn upper_section_scores_count_times_face() {
    let r = roll([1, 1, 1, 4, 5]);
    assert_eq!(score(r, Category::Ones), 3);
    assert_eq!(score(r, Category::Fours), 4);
    assert_eq!(score(r, Category::Fives), 5);
    assert_eq!(score(r, Category::Sixes), 0);

    // count * face for every upper category
    let r = roll([2, 2, 6, 6, 6]);
    for (i, category) in Category::ALL[..6].iter().enumerate() {
        let face = i as u8 + 1;
        let expected = u32::from(r.face_count(face)) * u32::from(face);
        assert_eq!(score(r, *category), expected);
    }
}

#[test]
fn choice_sums_all_dice() {
    assert_eq!(score(roll([2, 2, 2, 4, 5]), Category::Choice), 15);
    assert_eq!(score(roll([6, 6, 6, 6, 6]), Category::Choice), 30);
}

#[test]
fn four_of_a_kind_needs_four_matching() {
    assert_eq!(score(roll([5, 5, 5, 5, 2]), Category::FourOfAKind), 22);
    assert_eq!(score(roll([5, 5, 5, 4, 2]), Category::FourOfAKind), 0);
    // five matching also qualifies
    assert_eq!(score(roll([3, 3, 3, 3, 3]), Category::FourOfAKind), 15);
}

#[test]
fn full_house_is_three_plus_two() {
    assert_eq!(score(roll([4, 4, 5, 5, 5]), Category::FullHouse), 23);
    // four of a kind is not a full house
    assert_eq!(score(roll([4, 4, 4, 4, 5]), Category::FullHouse), 0);
    assert_eq!(score(roll([1, 2, 3, 4, 5]), Category::FullHouse), 0);
}

#[test]
fn quintuple_scores_full_house_and_yacht_independently() {
    let r = roll([6, 6, 6, 6, 6]);
    assert_eq!(score(r, Category::FullHouse), 30);
    assert_eq!(score(r, Category::Yacht), 50);
    assert_eq!(score(r, Category::FourOfAKind), 30);
}

#[test]
fn straights() {
    assert_eq!(score(roll([1, 2, 3, 4, 5]), Category::LargeStraight), 30);
    assert_eq!(score(roll([6, 2, 3, 4, 5]), Category::LargeStraight), 30);
    assert_eq!(score(roll([1, 2, 3, 4, 4]), Category::LargeStraight), 0);
    assert_eq!(score(roll([1, 2, 3, 4, 4]), Category::SmallStraight), 15);
    assert_eq!(score(roll([6, 6, 3, 4, 5]), Category::SmallStraight), 15);
    assert_eq!(score(roll([1, 2, 3, 5, 6]), Category::SmallStraight), 0);
    // a large straight also contains a small one
    assert_eq!(score(roll([2, 3, 4, 5, 6]), Category::SmallStraight), 15);
}

#[test]
fn yacht_needs_five_matching() {
    assert_eq!(score(roll([6, 6, 6, 6, 6]), Category::Yacht), 50);
    assert_eq!(score(roll([6, 6, 6, 6, 5]), Category::Yacht), 0);
}

#[test]
fn scoring_is_idempotent() {
    let r = roll([3, 3, 5, 5, 5]);
    for category in Category::ALL {
        assert_eq!(score(r, category), score(r, category));
    }

    let mut card = ScoreCard::new();
    card.record(Category::FullHouse, 21).unwrap();
    assert_eq!(totals(&card), totals(&card));
}

#[test]
fn scorecard_entries_are_commit_once() {
    let mut card = ScoreCard::new();
    assert!(!card.is_filled(Category::Ones));

    // a recorded zero is distinct from unset
    card.record(Category::Ones, 0).unwrap();
    assert_eq!(card.get(Category::Ones), Some(0));
    assert!(card.is_filled(Category::Ones));
    assert!(card.record(Category::Ones, 5).is_err());

    assert_eq!(card.filled_count(), 1);
    assert!(!card.is_complete());
    let open: Vec<Category> = card.open_categories().collect();
    assert_eq!(open.len(), 11);
    assert!(!open.contains(&Category::Ones));

    let entries = card.entries();
    assert_eq!(entries[Category::Ones.index()], Some(0));
    assert_eq!(entries.iter().filter(|entry| entry.is_none()).count(), 11);
}

#[test]
fn totals_invariant_and_bonus_boundary() {
    // upper subtotal exactly 63 earns the bonus
    let mut card = ScoreCard::new();
    card.record(Category::Ones, 3).unwrap();
    card.record(Category::Twos, 6).unwrap();
    card.record(Category::Threes, 9).unwrap();
    card.record(Category::Fours, 12).unwrap();
    card.record(Category::Fives, 15).unwrap();
    card.record(Category::Sixes, 18).unwrap();
    card.record(Category::Choice, 20).unwrap();

    let t = totals(&card);
    assert_eq!(t.upper_subtotal, 63);
    assert_eq!(t.upper_bonus, UPPER_BONUS);
    assert_eq!(t.lower_subtotal, 20);
    assert_eq!(t.total, t.upper_subtotal + t.upper_bonus + t.lower_subtotal);

    // 62 does not
    let mut card = ScoreCard::new();
    card.record(Category::Fives, 25).unwrap();
    card.record(Category::Sixes, 30).unwrap();
    card.record(Category::Ones, 4).unwrap();
    card.record(Category::Threes, 3).unwrap();
    let t = totals(&card);
    assert_eq!(t.upper_subtotal, 62);
    assert_eq!(t.upper_bonus, 0);
    assert_eq!(t.total, 62);
}

#[test]
fn yacht_bonus_adds_to_total_only() {
    let mut card = ScoreCard::new();
    card.record(Category::Yacht, YACHT_SCORE).unwrap();

    let t = totals_with_bonus(&card, 2);
    assert_eq!(t.lower_subtotal, 50);
    assert_eq!(t.total, 50 + 2 * YACHT_BONUS);
}

#[test]
fn preview_never_mutates_the_card() {
    let mut card = ScoreCard::new();
    card.record(Category::Choice, 30).unwrap();
    let before = card;

    let p = preview(&card, roll([5, 5, 5, 5, 2]), Category::FourOfAKind);
    assert_eq!(card, before);
    assert_eq!(p.current.total, 30);
    assert_eq!(p.hypothetical.total, 52);
    assert_eq!(p.delta, p.hypothetical.total - p.current.total);
}

#[test]
fn preview_includes_upper_bonus_crossing() {
    let mut card = ScoreCard::new();
    card.record(Category::Twos, 6).unwrap();
    card.record(Category::Threes, 9).unwrap();
    card.record(Category::Fours, 12).unwrap();
    card.record(Category::Fives, 15).unwrap();
    card.record(Category::Sixes, 18).unwrap();

    // three ones push the upper subtotal from 60 to 63
    let p = preview(&card, roll([1, 1, 1, 4, 5]), Category::Ones);
    assert_eq!(p.current.upper_bonus, 0);
    assert_eq!(p.hypothetical.upper_bonus, UPPER_BONUS);
    assert_eq!(p.delta, 3 + UPPER_BONUS);
}

#[test]
fn preview_of_filled_category_is_a_no_op() {
    let mut card = ScoreCard::new();
    card.record(Category::Yacht, 50).unwrap();

    let p = preview(&card, roll([6, 6, 6, 6, 6]), Category::Yacht);
    assert_eq!(p.current, p.hypothetical);
    assert_eq!(p.delta, 0);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_rolls_per_turn(2)
        .with_yacht_bonus(false);
    assert_eq!(options.rolls_per_turn, 2);
    assert!(!options.yacht_bonus);
}

#[test]
fn join_and_start_errors() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.start().unwrap_err(), StartError::NoPlayers);

    let p1 = game.join().unwrap();
    game.start().unwrap();
    assert_eq!(game.start().unwrap_err(), StartError::InvalidState);
    assert_eq!(game.join().unwrap_err(), JoinError::GameInProgress);
    assert_eq!(game.current_player(), Some(p1));
}

#[test]
fn turn_flow_and_errors() {
    let game = Game::new(GameOptions::default(), 7);
    let p1 = game.join().unwrap();
    let p2 = game.join().unwrap();

    assert_eq!(game.roll_dice(p1).unwrap_err(), RollError::InvalidState);
    game.start().unwrap();

    assert_eq!(game.state(), GameState::Rolling);
    assert_eq!(game.rolls_left(), 3);

    // acting before the first roll or out of turn fails
    assert_eq!(game.roll_dice(p2).unwrap_err(), RollError::NotYourTurn);
    assert_eq!(game.roll_dice(99).unwrap_err(), RollError::PlayerNotFound);
    assert_eq!(game.toggle_keep(p1, 0).unwrap_err(), KeepError::NoRollYet);
    assert_eq!(
        game.pick_category(p1, Category::Choice).unwrap_err(),
        PickError::NoRollYet
    );

    game.roll_dice(p1).unwrap();
    assert_eq!(game.rolls_left(), 2);
    assert_eq!(game.toggle_keep(p1, 5).unwrap_err(), KeepError::InvalidDie);
    assert_eq!(game.toggle_keep(p2, 0).unwrap_err(), KeepError::NotYourTurn);
    assert!(game.toggle_keep(p1, 0).unwrap());
    assert!(!game.toggle_keep(p1, 0).unwrap());

    game.roll_dice(p1).unwrap();
    game.roll_dice(p1).unwrap();
    assert_eq!(game.state(), GameState::MustPick);
    assert_eq!(game.rolls_left(), 0);
    assert_eq!(game.roll_dice(p1).unwrap_err(), RollError::InvalidState);
    assert_eq!(game.toggle_keep(p1, 0).unwrap_err(), KeepError::InvalidState);

    set_dice(&game, [2, 2, 2, 4, 5]);
    assert_eq!(game.pick_category(p1, Category::Choice).unwrap(), 15);

    // turn passed to the second player with a fresh roll budget
    assert_eq!(game.current_player(), Some(p2));
    assert_eq!(game.state(), GameState::Rolling);
    assert_eq!(game.rolls_left(), 3);
    assert_eq!(game.get_kept(), [false; 5]);
    assert_eq!(game.get_card(p1).unwrap().get(Category::Choice), Some(15));
}

#[test]
fn kept_dice_survive_rerolls() {
    let game = Game::new(GameOptions::default(), 3);
    let p1 = game.join().unwrap();
    game.start().unwrap();

    game.roll_dice(p1).unwrap();
    set_dice(&game, [6, 6, 1, 1, 1]);
    game.toggle_keep(p1, 0).unwrap();
    game.toggle_keep(p1, 1).unwrap();

    let rerolled = game.roll_dice(p1).unwrap();
    assert_eq!(rerolled.faces()[0], 6);
    assert_eq!(rerolled.faces()[1], 6);
}

#[test]
fn double_commit_is_rejected() {
    let game = Game::new(GameOptions::default(), 5);
    let p1 = game.join().unwrap();
    game.start().unwrap();

    take_turn(&game, p1, [1, 1, 1, 4, 5], Category::Ones);
    game.roll_dice(p1).unwrap();
    assert_eq!(
        game.pick_category(p1, Category::Ones).unwrap_err(),
        PickError::CategoryFilled
    );
}

#[test]
fn yacht_bonus_earned_on_qualifying_commit() {
    let game = Game::new(GameOptions::default(), 11);
    let p1 = game.join().unwrap();
    game.start().unwrap();

    take_turn(&game, p1, [3, 3, 3, 3, 3], Category::Yacht);
    assert_eq!(game.get_card(p1).unwrap().get(Category::Yacht), Some(50));
    assert_eq!(game.yacht_bonus_count(p1), 0);

    // a zero-scoring commit of a second quintuple earns nothing
    take_turn(&game, p1, [2, 2, 2, 2, 2], Category::SmallStraight);
    assert_eq!(game.yacht_bonus_count(p1), 0);

    // a non-zero commit of a second quintuple earns +100
    take_turn(&game, p1, [4, 4, 4, 4, 4], Category::Choice);
    assert_eq!(game.yacht_bonus_count(p1), 1);

    let t = game.totals_for(p1).unwrap();
    assert_eq!(t.lower_subtotal, 50 + 20);
    assert_eq!(t.total, 70 + YACHT_BONUS);
}

#[test]
fn yacht_bonus_requires_yacht_filled_with_fifty() {
    let game = Game::new(GameOptions::default(), 13);
    let p1 = game.join().unwrap();
    game.start().unwrap();

    // Yacht zeroed out: later quintuples never earn the bonus
    take_turn(&game, p1, [1, 2, 3, 4, 5], Category::Yacht);
    take_turn(&game, p1, [4, 4, 4, 4, 4], Category::Choice);
    assert_eq!(game.yacht_bonus_count(p1), 0);
}

#[test]
fn yacht_bonus_can_be_disabled() {
    let options = GameOptions::default().with_yacht_bonus(false);
    let game = Game::new(options, 17);
    let p1 = game.join().unwrap();
    game.start().unwrap();

    take_turn(&game, p1, [3, 3, 3, 3, 3], Category::Yacht);
    take_turn(&game, p1, [4, 4, 4, 4, 4], Category::Choice);
    assert_eq!(game.yacht_bonus_count(p1), 0);
    assert_eq!(game.totals_for(p1).unwrap().total, 70);
}

#[test]
fn full_game_reaches_outcome() {
    let game = Game::new(GameOptions::default(), 21);
    let p1 = game.join().unwrap();
    game.start().unwrap();

    for category in Category::ALL {
        take_turn(&game, p1, [1, 2, 3, 4, 5], category);
    }

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.current_player(), None);
    assert_eq!(game.roll_dice(p1).unwrap_err(), RollError::InvalidState);

    // 1+2+3+4+5+0 upper, 15 choice, 15 small + 30 large straight
    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.winner, Some(p1));
    assert_eq!(outcome.standings.len(), 1);
    assert_eq!(outcome.standings[0].totals.upper_subtotal, 15);
    assert_eq!(outcome.standings[0].totals.total, 75);
}

#[test]
fn outcome_is_none_mid_game_and_tied_games_have_no_winner() {
    let game = Game::new(GameOptions::default(), 23);
    let p1 = game.join().unwrap();
    let p2 = game.join().unwrap();
    game.start().unwrap();
    assert!(game.outcome().is_none());

    for category in Category::ALL {
        take_turn(&game, p1, [1, 2, 3, 4, 5], category);
        take_turn(&game, p2, [1, 2, 3, 4, 5], category);
    }

    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.standings.len(), 2);
    assert_eq!(outcome.winner, None);
}

#[test]
fn zero_rolls_per_turn_is_treated_as_one() {
    let options = GameOptions::default().with_rolls_per_turn(0);
    let game = Game::new(options, 37);
    let p1 = game.join().unwrap();
    game.start().unwrap();

    assert_eq!(game.rolls_left(), 1);
    game.roll_dice(p1).unwrap();
    assert_eq!(game.state(), GameState::MustPick);
    assert_eq!(game.rolls_left(), 0);

    set_dice(&game, [2, 2, 2, 4, 5]);
    assert_eq!(game.pick_category(p1, Category::Choice).unwrap(), 15);
    assert_eq!(game.rolls_left(), 1);
}

#[test]
fn leaving_after_game_over_keeps_standings() {
    let game = Game::new(GameOptions::default(), 41);
    let p1 = game.join().unwrap();
    let p2 = game.join().unwrap();
    game.start().unwrap();

    for category in Category::ALL {
        take_turn(&game, p1, [6, 6, 6, 6, 5], category);
        take_turn(&game, p2, [1, 2, 3, 4, 5], category);
    }
    assert_eq!(game.state(), GameState::GameOver);

    game.leave(p2);

    assert_eq!(game.player_count(), 2);
    assert!(game.get_card(p2).is_some());
    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.standings.len(), 2);
    assert_eq!(outcome.winner, Some(p1));
}

#[test]
fn leaving_mid_turn_passes_the_turn() {
    let game = Game::new(GameOptions::default(), 29);
    let p1 = game.join().unwrap();
    let p2 = game.join().unwrap();
    game.start().unwrap();

    game.roll_dice(p1).unwrap();
    game.leave(p1);

    assert_eq!(game.player_count(), 1);
    assert_eq!(game.current_player(), Some(p2));
    assert_eq!(game.rolls_left(), 3);
    assert!(game.get_card(p1).is_none());
}

#[test]
fn reset_restores_a_fresh_game() {
    let game = Game::new(GameOptions::default(), 31);
    let p1 = game.join().unwrap();
    game.start().unwrap();
    take_turn(&game, p1, [3, 3, 3, 3, 3], Category::Yacht);

    game.reset();
    assert_eq!(game.state(), GameState::WaitingForPlayers);
    assert_eq!(game.player_count(), 1);
    assert_eq!(game.get_card(p1).unwrap(), ScoreCard::new());
    assert_eq!(game.yacht_bonus_count(p1), 0);

    game.start().unwrap();
    assert_eq!(game.rolls_left(), 3);
}

#[test]
fn same_seed_rolls_the_same_dice() {
    let a = Game::new(GameOptions::default(), 99);
    let b = Game::new(GameOptions::default(), 99);
    let pa = a.join().unwrap();
    let pb = b.join().unwrap();
    a.start().unwrap();
    b.start().unwrap();

    assert_eq!(a.roll_dice(pa).unwrap(), b.roll_dice(pb).unwrap());
    assert_eq!(a.roll_dice(pa).unwrap(), b.roll_dice(pb).unwrap());
}
