// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use std::io::Read;
use tilebot::{dictionary, display, error, game_config, kibitzer, logging, move_picker, movegen};

// reads a question from the file named, or from stdin.
// board: occupied squares as {"row","col","letter","points"}, blanks with "is_blank".
// rack: tiles, an unassigned blank is {"letter":"?","points":0,"is_blank":true}.
// count: maximum number of ranked moves printed.
// seed: fixes the softmax draw.
pub fn main() -> error::Returns<()> {
    logging::init(None)?;
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 1 {
        return Err("usage: json WORDLIST [QUESTION.json]".into());
    }
    let word_list = dictionary::WordList::from_file(&args[1])?;
    let data = match args.get(2) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            s
        }
    };
    let question = serde_json::from_str::<kibitzer::Question>(&data)?;

    let game_config = game_config::make_english_game_config();
    let mut kibitzer = kibitzer::Kibitzer::new();
    kibitzer.prepare(&game_config, &question.rack, &question.board)?;
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "{} unseen tiles\n{}",
            kibitzer.num_unseen(),
            display::render_board(game_config.board_layout(), &kibitzer.board)
        );
    }

    let board_snapshot = movegen::BoardSnapshot {
        board: &kibitzer.board,
        game_config: &game_config,
        word_predicate: &word_list,
    };
    let mut move_picker = move_picker::MovePicker::new(question.difficulty);
    let ranked = move_picker.rank(&board_snapshot, &question.rack);
    let mut rng = match question.seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };
    let selected = move_picker::select_move(&ranked, question.difficulty, &mut rng);

    let answer = kibitzer::Answer {
        moves: ranked
            .iter()
            .take(question.count)
            .map(kibitzer::JsonMove::from)
            .collect(),
        selected: selected.map(kibitzer::JsonMove::from),
    };
    println!("{}", serde_json::to_string(&answer)?);

    Ok(())
}
