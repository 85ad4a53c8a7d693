//! CLI Yacht example: a hot-seat game for one or two players.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use yachtrs::{Category, Game, GameOptions, GameState, Roll, preview, totals_with_bonus};

fn main() {
    println!("Yacht CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    let Some(player_count) = prompt_usize("Players (1-2): ") else {
        return;
    };
    let player_count = player_count.clamp(1, 2);
    let mut players = Vec::new();
    for _ in 0..player_count {
        match game.join() {
            Ok(id) => players.push(id),
            Err(err) => {
                println!("Join error: {err:?}");
                return;
            }
        }
    }

    if let Err(err) = game.start() {
        println!("Start error: {err:?}");
        return;
    }

    while game.state() != GameState::GameOver {
        let Some(player) = game.current_player() else {
            break;
        };

        println!("\n--- Player {player}'s turn ---");
        match game.roll_dice(player) {
            Ok(roll) => print_dice(roll, game.get_kept()),
            Err(err) => {
                println!("Roll error: {err:?}");
                return;
            }
        }

        loop {
            let rolls_left = game.rolls_left();
            let must_pick = game.state() == GameState::MustPick;
            if must_pick {
                println!("No rolls left; pick a category.");
            } else {
                println!("Rolls left: {rolls_left}");
            }

            let input = prompt_line("Action (r=roll, k<die>=keep, c=card, p<n>=pick, q=quit): ");
            match input.as_str() {
                "q" | "quit" => return,
                "c" | "card" => print_card(&game, player),
                "r" | "roll" => match game.roll_dice(player) {
                    Ok(roll) => print_dice(roll, game.get_kept()),
                    Err(err) => println!("Roll error: {err:?}"),
                },
                other => {
                    if let Some(die) = other.strip_prefix('k') {
                        match die.trim().parse::<usize>() {
                            Ok(die) if die >= 1 => match game.toggle_keep(player, die - 1) {
                                Ok(kept) => {
                                    println!("Die {die} {}.", if kept { "kept" } else { "released" });
                                    print_dice(game.get_dice(), game.get_kept());
                                }
                                Err(err) => println!("Keep error: {err:?}"),
                            },
                            _ => println!("Use k1..k5."),
                        }
                        continue;
                    }

                    if let Some(index) = other.strip_prefix('p') {
                        let Ok(index) = index.trim().parse::<usize>() else {
                            println!("Use p0..p11 (see 'c' for numbering).");
                            continue;
                        };
                        let Some(category) = Category::from_index(index) else {
                            println!("Use p0..p11 (see 'c' for numbering).");
                            continue;
                        };
                        match game.pick_category(player, category) {
                            Ok(points) => {
                                println!("{} scored {points}.", category.name());
                                break;
                            }
                            Err(err) => println!("Pick error: {err:?}"),
                        }
                        continue;
                    }

                    println!("Unknown action.");
                }
            }
        }
    }

    if let Some(outcome) = game.outcome() {
        println!("\n=== Final standings ===");
        for standing in &outcome.standings {
            println!(
                "Player {}: {} points (upper {} + bonus {})",
                standing.player_id,
                standing.totals.total,
                standing.totals.upper_subtotal,
                standing.totals.upper_bonus
            );
        }
        match outcome.winner {
            Some(winner) => println!("Player {winner} wins!"),
            None => println!("It's a tie."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_dice(roll: Roll, kept: [bool; 5]) {
    let dice: Vec<String> = roll
        .faces()
        .iter()
        .zip(kept)
        .map(|(face, kept)| {
            if kept {
                format!("[{face}]")
            } else {
                format!(" {face} ")
            }
        })
        .collect();
    println!("Dice: {}  ([x] = kept)", dice.join(" "));
}

fn print_card(game: &Game, player: u8) {
    let Some(card) = game.get_card(player) else {
        return;
    };
    let roll = game.get_dice();
    let totals = totals_with_bonus(&card, game.yacht_bonus_count(player));

    println!("\n  # Category        Score");
    for (category, entry) in Category::ALL.into_iter().zip(card.entries()) {
        let entry = match entry {
            Some(points) => format!("{points}"),
            None => {
                let p = preview(&card, roll, category);
                format!("- (would score {})", p.delta)
            }
        };
        println!(" {:2} {:<15} {entry}", category.index(), category.name());
    }
    println!(
        "    Upper {}/63, bonus {}, total {}",
        totals.upper_subtotal, totals.upper_bonus, totals.total
    );
}
