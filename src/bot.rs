// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, dictionary, error, game_config, move_picker, movegen, tile};
use rand::prelude::*;
use std::sync::Arc;

// an opponent that takes a believable amount of time to move.
pub struct Bot {
    pub game_config: Arc<game_config::GameConfig<'static>>,
    pub word_list: Arc<dictionary::WordList>,
    pub difficulty: move_picker::Difficulty,
    // multiplies the cosmetic delay. 0.0 answers as soon as the search is done.
    pub delay_scale: f64,
}

#[inline(always)]
pub fn draw_delay_ms(difficulty: move_picker::Difficulty, rng: &mut dyn RngCore) -> u64 {
    rng.random_range(difficulty.delay_range_ms())
}

impl Bot {
    pub fn new(
        game_config: Arc<game_config::GameConfig<'static>>,
        word_list: Arc<dictionary::WordList>,
        difficulty: move_picker::Difficulty,
    ) -> Self {
        Self {
            game_config,
            word_list,
            difficulty,
            delay_scale: 1.0,
        }
    }

    // the delay is drawn first, so the search sees the same stream whatever the scale.
    pub async fn think(
        &self,
        board: &board::Board,
        rack: &[tile::Tile],
        seed: u64,
    ) -> error::Returns<Option<move_picker::RankedMove>> {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
        let delay_ms = draw_delay_ms(self.difficulty, &mut rng);
        let sleep_for_ms = (delay_ms as f64 * self.delay_scale.max(0.0)) as u64;

        let game_config = Arc::clone(&self.game_config);
        let word_list = Arc::clone(&self.word_list);
        let difficulty = self.difficulty;
        let board = board.clone();
        let rack = rack.to_vec();
        let search = tokio::task::spawn_blocking(move || {
            let board_snapshot = movegen::BoardSnapshot {
                board: &board,
                game_config: &*game_config,
                word_predicate: &*word_list,
            };
            move_picker::MovePicker::new(difficulty).pick_a_move(&board_snapshot, &rack, &mut rng)
        });
        let sleep = tokio::time::sleep(tokio::time::Duration::from_millis(sleep_for_ms));

        let (picked, ()) = tokio::join!(search, sleep);
        let picked = picked?;
        log::debug!(
            "{} bot thought for {}ms: {}",
            difficulty,
            sleep_for_ms,
            picked.as_ref().map_or_else(|| "no move".into(), |m| m.play.to_string())
        );
        Ok(picked)
    }
}
