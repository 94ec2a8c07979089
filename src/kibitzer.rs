// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, error, game_config, move_picker, movegen, tile};

// moves as they go over the wire. tiles carry their own row and col.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct JsonMove {
    pub tiles: Vec<tile::PlacedTile>,
    pub words: Vec<String>,
    pub score: i16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity: Option<f64>,
}

impl From<&movegen::Move> for JsonMove {
    #[inline(always)]
    fn from(play: &movegen::Move) -> Self {
        Self {
            tiles: play.placed_tiles.clone(),
            words: play.formed_words.iter().map(|w| w.text.clone()).collect(),
            score: play.score,
            equity: None,
        }
    }
}

impl From<&move_picker::RankedMove> for JsonMove {
    #[inline(always)]
    fn from(ranked: &move_picker::RankedMove) -> Self {
        Self {
            equity: Some(ranked.equity),
            ..Self::from(&ranked.play)
        }
    }
}

// board: occupied squares only.
// count: maximum number of ranked moves returned.
// seed: for the softmax draw; absent means a fresh one.
#[derive(serde::Deserialize, Debug)]
pub struct Question {
    pub board: Vec<tile::PlacedTile>,
    pub rack: Vec<tile::Tile>,
    #[serde(default = "default_difficulty")]
    pub difficulty: move_picker::Difficulty,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_difficulty() -> move_picker::Difficulty {
    move_picker::Difficulty::Medium
}

fn default_count() -> usize {
    15
}

#[derive(serde::Serialize, Debug)]
pub struct Answer {
    pub moves: Vec<JsonMove>,
    pub selected: Option<JsonMove>,
}

// checks a position against the tile distribution before it is searched.
pub struct Kibitzer {
    // index 0 is the blank, then the letters in alphabet order
    pub available_tally: Vec<u8>,
    pub board: board::Board,
}

impl Kibitzer {
    pub fn new() -> Self {
        Self {
            available_tally: Vec::new(),
            board: board::Board::new(),
        }
    }

    fn take(&mut self, game_config: &game_config::GameConfig<'_>, t: &tile::Tile) -> error::Returns<()> {
        let alphabet = game_config.alphabet();
        let idx = if t.is_blank {
            if t.points != 0 {
                return_error!(format!("blank {} must be worth 0, not {}", t.label(), t.points));
            }
            0
        } else {
            match alphabet.letters().iter().position(|x| x.label() == t.letter) {
                Some(pos) => {
                    let expected = alphabet.letters()[pos].score();
                    if t.points != expected {
                        return_error!(format!("tile {} must be worth {}, not {}", t.letter, expected, t.points));
                    }
                    pos + 1
                }
                None => {
                    return_error!(format!("invalid tile {:?}", t.letter));
                }
            }
        };
        if self.available_tally[idx] > 0 {
            self.available_tally[idx] -= 1;
        } else {
            return_error!(format!(
                "too many tile {} (bag contains only {})",
                if t.is_blank { tile::BLANK_LETTER } else { t.letter },
                if t.is_blank { alphabet.blank_freq() } else { alphabet.letters()[idx - 1].freq() },
            ));
        }
        Ok(())
    }

    pub fn prepare(
        &mut self,
        game_config: &game_config::GameConfig<'_>,
        rack: &[tile::Tile],
        board_tiles: &[tile::PlacedTile],
    ) -> error::Returns<()> {
        let alphabet = game_config.alphabet();
        self.available_tally.clear();
        self.available_tally.push(alphabet.blank_freq());
        self.available_tally.extend(alphabet.letters().iter().map(|x| x.freq()));

        if rack.len() > game_config.rack_size() as usize {
            return_error!(format!(
                "rack has {} tiles, at most {} allowed",
                rack.len(),
                game_config.rack_size()
            ));
        }
        for t in rack {
            self.take(game_config, t)?;
        }
        for placed in board_tiles {
            self.take(game_config, &placed.tile)?;
        }
        self.board = board::Board::from_tiles(board_tiles)?;
        Ok(())
    }

    // tiles in the bag or on other racks.
    pub fn num_unseen(&self) -> usize {
        self.available_tally.iter().map(|&n| n as usize).sum()
    }
}

impl Default for Kibitzer {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
