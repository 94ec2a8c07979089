// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use tilebot::{board, dictionary, display, error, game_config, logging, seeder};

fn usage() -> error::BoxAnyError {
    "usage: puzzle WORDLIST [light|heavy] [RACK] [SEED]".into()
}

pub fn main() -> error::Returns<()> {
    logging::init(None)?;
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 1 {
        return Err(usage());
    }
    let word_list = dictionary::WordList::from_file(&args[1])?;
    let mode = match args.get(2) {
        Some(s) => s.parse::<seeder::SeedMode>()?,
        None => seeder::SeedMode::Heavy,
    };
    let game_config = game_config::make_english_game_config();
    // "-" means draw a random rack
    let rack = match args.get(3).map(String::as_str) {
        Some("-") | None => None,
        Some(s) => Some(game_config.alphabet().parse_tiles(s)?),
    };
    let mut rng = match args.get(4) {
        Some(s) => rand_chacha::ChaCha20Rng::seed_from_u64(s.parse::<u64>().map_err(|_| usage())?),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };

    let board_seeder = seeder::BoardSeeder::new(&game_config, &word_list, mode);
    let puzzle = board_seeder.seed(rack.as_deref(), &mut rng)?;
    if log::log_enabled!(log::Level::Info) {
        let board = board::Board::from_tiles(&puzzle.board)?;
        log::info!(
            "{} for {} tiles\n{}",
            puzzle.id,
            puzzle.rack.len(),
            display::render_board(game_config.board_layout(), &board)
        );
    }
    println!("{}", serde_json::to_string_pretty(&puzzle)?);

    Ok(())
}
