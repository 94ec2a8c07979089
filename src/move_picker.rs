// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, game_config, movegen, tile};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    // share of the ranked list the bot samples from.
    #[inline(always)]
    pub fn top_fraction(self) -> f64 {
        match self {
            Difficulty::Easy => 0.6,
            Difficulty::Medium => 0.3,
            Difficulty::Hard => 0.1,
        }
    }

    #[inline(always)]
    pub fn min_k(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 2,
            Difficulty::Hard => 1,
        }
    }

    // higher is more random.
    #[inline(always)]
    pub fn temperature(self) -> f64 {
        match self {
            Difficulty::Easy => 50.0,
            Difficulty::Medium => 20.0,
            Difficulty::Hard => 5.0,
        }
    }

    // cosmetic thinking time, in milliseconds.
    #[inline(always)]
    pub fn delay_range_ms(self) -> std::ops::RangeInclusive<u64> {
        match self {
            Difficulty::Easy => 800..=2000,
            Difficulty::Medium => 1200..=3000,
            Difficulty::Hard => 1500..=4000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = error::EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(error::new(format!("unknown difficulty {:?}", s))),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const COMMON_LETTERS: &[char] = &['A', 'E', 'I', 'O', 'U', 'N', 'R', 'T', 'L', 'S'];

// easy-to-use tiles kept for next turn score higher.
pub fn rack_quality(leave: &[tile::Tile]) -> i16 {
    leave
        .iter()
        .map(|t| {
            if !t.is_blank && COMMON_LETTERS.contains(&t.letter) {
                3
            } else if t.points <= 3 {
                2
            } else if t.points <= 6 {
                1
            } else {
                0
            }
        })
        .sum()
}

pub fn strategic_value(game_config: &game_config::GameConfig, play: &movegen::Move) -> i16 {
    let mut ret = 0i16;
    if play.num_tiles() == game_config.rack_size() as usize {
        ret += 50;
    }
    for word in &play.formed_words {
        let len = word.text.chars().count() as i16;
        if len >= 6 {
            ret += 2 * len;
        } else if len >= 4 {
            ret += len;
        }
    }
    for p in &play.placed_tiles {
        if p.tile.face_value() >= 8 {
            ret += p.tile.face_value() as i16;
        }
    }
    ret
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct RankedMove {
    pub play: movegen::Move,
    pub rack_quality: i16,
    pub strategic: i16,
    pub equity: f64,
}

// composite equity, best first. ties keep generation order.
pub fn rank_moves(
    game_config: &game_config::GameConfig,
    moves: Vec<movegen::Move>,
    rack: &[tile::Tile],
) -> Vec<RankedMove> {
    let rack = tile::Rack(rack.to_vec());
    let mut ranked = moves
        .into_iter()
        .map(|play| {
            let rack_quality = rack_quality(rack.leave(&play.placed_tiles).tiles());
            let strategic = strategic_value(game_config, &play);
            let equity = 0.7 * play.score as f64 + 0.2 * rack_quality as f64 + 0.1 * strategic as f64;
            RankedMove {
                play,
                rack_quality,
                strategic,
                equity,
            }
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.equity.total_cmp(&a.equity));
    ranked
}

#[inline(always)]
pub fn top_k(num_moves: usize, difficulty: Difficulty) -> usize {
    ((num_moves as f64 * difficulty.top_fraction()).floor() as usize)
        .max(difficulty.min_k())
        .min(num_moves)
}

// draws u in [0, 1) and walks the cumulative distribution.
pub fn softmax_pick<'a>(
    candidates: &'a [RankedMove],
    temperature: f64,
    rng: &mut dyn RngCore,
) -> Option<&'a RankedMove> {
    match candidates.len() {
        0 => return None,
        1 => return candidates.first(),
        _ => {}
    }
    let max_equity = candidates
        .iter()
        .map(|c| c.equity)
        .fold(f64::NEG_INFINITY, f64::max);
    let weights = candidates
        .iter()
        .map(|c| ((c.equity - max_equity) / temperature).exp())
        .collect::<Vec<_>>();
    let total = weights.iter().sum::<f64>();
    let u = rng.random::<f64>();
    let mut cumulative = 0.0;
    for (candidate, weight) in candidates.iter().zip(&weights) {
        cumulative += weight / total;
        if u <= cumulative {
            return Some(candidate);
        }
    }
    candidates.first()
}

// `ranked` must be best first, as rank_moves returns it.
pub fn select_move<'a>(
    ranked: &'a [RankedMove],
    difficulty: Difficulty,
    rng: &mut dyn RngCore,
) -> Option<&'a RankedMove> {
    let k = top_k(ranked.len(), difficulty);
    softmax_pick(&ranked[..k], difficulty.temperature(), rng)
}

// generate, rank and select in one go.
pub struct MovePicker {
    pub difficulty: Difficulty,
    move_generator: movegen::MoveGenerator,
}

impl MovePicker {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            move_generator: movegen::MoveGenerator::new(),
        }
    }

    pub fn rank(
        &mut self,
        board_snapshot: &movegen::BoardSnapshot<'_>,
        rack: &[tile::Tile],
    ) -> Vec<RankedMove> {
        self.move_generator.gen_moves(board_snapshot, rack);
        rank_moves(
            board_snapshot.game_config,
            std::mem::take(&mut self.move_generator.plays),
            rack,
        )
    }

    pub fn pick_a_move(
        &mut self,
        board_snapshot: &movegen::BoardSnapshot<'_>,
        rack: &[tile::Tile],
        rng: &mut dyn RngCore,
    ) -> Option<RankedMove> {
        let ranked = self.rank(board_snapshot, rack);
        let picked = select_move(&ranked, self.difficulty, rng).cloned();
        if let Some(m) = &picked {
            log::debug!(
                "{} picked {} (equity {:.1}) out of {}",
                self.difficulty,
                m.play,
                m.equity,
                ranked.len()
            );
        }
        picked
    }
}
