// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bag, board, dictionary, error, game_config, move_picker, movegen, puzzle, tile};
use rand::prelude::*;

static START_WORDS: &[&str] = &[
    "PLAYING", "LETTERS", "POINTS", "DOUBLE", "TRIPLE", "MASTER", "EXPERT", "PUZZLE", "STRATEGY",
    "QUALITY", "STATION", "NETWORK", "SYSTEMS", "MODERN", "PERFECT", "PICTURE", "KITCHEN",
    "GARDEN", "BRIDGE", "FRIEND", "SIMPLE", "GOLDEN", "SILVER", "PURPLE",
];

const HEAVY_ATTEMPTS: usize = 5;
const MIN_TOP_MOVES: usize = 3;
const MIN_BEST_SCORE: i16 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedMode {
    // just the opening word
    Light,
    // opening word plus simulated bot turns, retried until the puzzle is interesting
    Heavy,
}

impl std::str::FromStr for SeedMode {
    type Err = error::EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(SeedMode::Light),
            "heavy" => Ok(SeedMode::Heavy),
            _ => Err(error::new(format!("unknown seed mode {:?}", s))),
        }
    }
}

pub struct BoardSeeder<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    pub word_predicate: &'a dyn dictionary::WordPredicate,
    pub mode: SeedMode,
    pub simulation_turns: usize,
    pub num_top_moves: usize,
}

impl<'a> BoardSeeder<'a> {
    pub fn new(
        game_config: &'a game_config::GameConfig<'a>,
        word_predicate: &'a dyn dictionary::WordPredicate,
        mode: SeedMode,
    ) -> Self {
        Self {
            game_config,
            word_predicate,
            mode,
            simulation_turns: 7,
            num_top_moves: puzzle::DEFAULT_NUM_TOP_MOVES,
        }
    }

    // a board plus the ranked answers for `rack`, or a random rack if none is given.
    pub fn seed(&self, rack: Option<&[tile::Tile]>, rng: &mut dyn RngCore) -> error::Returns<puzzle::Puzzle> {
        if !self.word_predicate.is_loaded() {
            return_error!("word list is not loaded".into());
        }
        let num_attempts = match self.mode {
            SeedMode::Light => 1,
            SeedMode::Heavy => HEAVY_ATTEMPTS,
        };
        let mut last = None;
        for attempt in 1..=num_attempts {
            let puzzle = self.seed_once(rack, rng)?;
            let good_enough = puzzle.top_moves.len() >= MIN_TOP_MOVES
                && puzzle.best_score().is_some_and(|s| s >= MIN_BEST_SCORE);
            log::info!(
                "seed attempt {}: {} tiles on board, {} top moves, best {:?}",
                attempt,
                puzzle.board.len(),
                puzzle.top_moves.len(),
                puzzle.best_score()
            );
            last = Some(puzzle);
            if good_enough {
                break;
            }
        }
        match last {
            Some(puzzle) => Ok(puzzle),
            None => Err(error::new("no seed attempt".into()).into()),
        }
    }

    fn seed_once(&self, rack: Option<&[tile::Tile]>, rng: &mut dyn RngCore) -> error::Returns<puzzle::Puzzle> {
        let rack_size = self.game_config.rack_size() as usize;
        let mut bag = bag::Bag::new(self.game_config.alphabet());
        bag.shuffle(rng);
        let user_rack = match rack {
            Some(rack) => {
                let missing = bag.remove_tiles(rack);
                if !missing.is_empty() {
                    return_error!(format!(
                        "rack {} is not in the bag, missing {}",
                        tile::Rack(rack.to_vec()),
                        tile::Rack(missing)
                    ));
                }
                rack.to_vec()
            }
            None => {
                let mut rack = tile::Rack::default();
                bag.replenish(&mut rack, rack_size);
                rack.0
            }
        };

        let mut board = board::Board::new();
        self.place_opening(&mut board, &mut bag, rng)?;

        if self.mode == SeedMode::Heavy {
            let mut move_picker = move_picker::MovePicker::new(move_picker::Difficulty::Medium);
            for turn in 0..self.simulation_turns {
                if bag.is_empty() {
                    break;
                }
                let mut bot_rack = tile::Rack::default();
                bag.replenish(&mut bot_rack, rack_size);
                let board_snapshot = movegen::BoardSnapshot {
                    board: &board,
                    game_config: self.game_config,
                    word_predicate: self.word_predicate,
                };
                let picked = move_picker.pick_a_move(&board_snapshot, bot_rack.tiles(), rng);
                match picked {
                    Some(m) => {
                        board.place_all(&m.play.placed_tiles)?;
                        let leave = bot_rack.leave(&m.play.placed_tiles);
                        bag.put_back(rng, leave.tiles());
                        log::debug!("seed turn {}: {}", turn + 1, m.play);
                    }
                    None => {
                        bag.put_back(rng, bot_rack.tiles());
                        log::debug!("seed turn {}: no move for {}", turn + 1, bot_rack);
                    }
                }
            }
        }

        let board_snapshot = movegen::BoardSnapshot {
            board: &board,
            game_config: self.game_config,
            word_predicate: self.word_predicate,
        };
        let ranked = move_picker::MovePicker::new(move_picker::Difficulty::Hard).rank(&board_snapshot, &user_rack);
        Ok(puzzle::Puzzle {
            id: format!("puzzle-{}", chrono::Utc::now().timestamp_millis()),
            board: board.tiles(),
            rack: user_rack,
            top_moves: puzzle::top_moves(&ranked, self.num_top_moves),
        })
    }

    // a known word across the star that the bag can still supply, else whatever the bot can open with.
    fn place_opening(&self, board: &mut board::Board, bag: &mut bag::Bag, rng: &mut dyn RngCore) -> error::Returns<()> {
        let alphabet = self.game_config.alphabet();
        let star_row = self.game_config.board_layout().star_row();
        let mut candidates = Vec::new();
        for word in START_WORDS.iter().filter(|w| self.word_predicate.is_valid_word(w)) {
            let start_col = (board::BOARD_SIZE - word.len() as i8) / 2;
            let mut tiles = Vec::with_capacity(word.len());
            for (i, c) in (0i8..).zip(word.chars()) {
                match alphabet.make_tile(c) {
                    Some(t) => tiles.push(t.at(star_row, start_col + i)),
                    None => {
                        return_error!(format!("bad letter {:?} in {}", c, word));
                    }
                }
            }
            let letters = tiles.iter().map(|p| p.tile).collect::<Vec<_>>();
            if bag.clone().remove_tiles(&letters).is_empty() {
                candidates.push((word, tiles, letters));
            } else {
                log::debug!("{} cannot be drawn from the bag", word);
            }
        }
        if let Some((word, tiles, letters)) = candidates.choose(rng) {
            board.place_all(tiles)?;
            bag.remove_tiles(letters);
            log::info!("opening word {} at {},{}", word, star_row, tiles[0].col);
            return Ok(());
        }

        let mut move_picker = move_picker::MovePicker::new(move_picker::Difficulty::Medium);
        for _ in 0..HEAVY_ATTEMPTS {
            let mut rack = tile::Rack::default();
            bag.replenish(&mut rack, self.game_config.rack_size() as usize);
            let board_snapshot = movegen::BoardSnapshot {
                board,
                game_config: self.game_config,
                word_predicate: self.word_predicate,
            };
            let picked = move_picker.pick_a_move(&board_snapshot, rack.tiles(), rng);
            match picked {
                Some(m) => {
                    board.place_all(&m.play.placed_tiles)?;
                    bag.put_back(rng, rack.leave(&m.play.placed_tiles).tiles());
                    log::info!("opening move {}", m.play);
                    return Ok(());
                }
                None => bag.put_back(rng, rack.tiles()),
            }
        }
        return_error!("cannot find an opening move".into());
    }
}
