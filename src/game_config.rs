// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

// hard caps that keep a search interactive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovegenLimits {
    pub max_anchors: usize,
    pub max_permutations_per_length: usize,
    pub max_candidates_per_anchor: usize,
    pub max_word_length: usize,
}

impl Default for MovegenLimits {
    fn default() -> Self {
        Self {
            max_anchors: 24,
            max_permutations_per_length: 40,
            max_candidates_per_anchor: 120,
            max_word_length: 5,
        }
    }
}

pub struct StaticGameConfig<'a> {
    alphabet: alphabet::Alphabet<'a>,
    board_layout: &'a board_layout::BoardLayout<'a>,
    rack_size: i8,
    num_players: u8,
    num_passes_per_player_to_end: u8,
    bingo_bonus: i16,
    movegen_limits: MovegenLimits,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &'a board_layout::BoardLayout<'a> {
        match self {
            GameConfig::Static(x) => x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_players,
        }
    }

    #[inline(always)]
    pub fn num_passes_per_player_to_end(&self) -> u16 {
        match self {
            GameConfig::Static(x) => x.num_passes_per_player_to_end as u16,
        }
    }

    #[inline(always)]
    pub fn num_passes_to_end(&self) -> u16 {
        match self {
            GameConfig::Static(x) => x.num_passes_per_player_to_end as u16 * x.num_players as u16,
        }
    }

    #[inline(always)]
    pub fn movegen_limits(&self) -> &MovegenLimits {
        match self {
            GameConfig::Static(x) => &x.movegen_limits,
        }
    }

    // bingo is exactly a full rack.
    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i16 {
        match self {
            GameConfig::Static(x) => {
                if num_played == x.rack_size as usize {
                    x.bingo_bonus
                } else {
                    0
                }
            }
        }
    }
}

pub fn make_english_game_config() -> GameConfig<'static> {
    make_english_game_config_with(2, MovegenLimits::default())
}

pub fn make_english_game_config_with(
    num_players: u8,
    movegen_limits: MovegenLimits,
) -> GameConfig<'static> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout: &board_layout::CLASSIC_BOARD_LAYOUT,
        rack_size: 7,
        num_players,
        num_passes_per_player_to_end: 3,
        bingo_bonus: 50,
        movegen_limits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_defaults() {
        let game_config = make_english_game_config();
        assert_eq!(game_config.rack_size(), 7);
        assert_eq!(game_config.num_players(), 2);
        assert_eq!(game_config.num_passes_to_end(), 6);
        assert_eq!(game_config.num_played_bonus(7), 50);
        assert_eq!(game_config.num_played_bonus(6), 0);
        let limits = game_config.movegen_limits();
        assert_eq!(limits.max_anchors, 24);
        assert_eq!(limits.max_permutations_per_length, 40);
        assert_eq!(limits.max_candidates_per_anchor, 120);
        assert_eq!(limits.max_word_length, 5);
    }

    #[test]
    fn test_more_players_need_more_passes() {
        let game_config = make_english_game_config_with(4, MovegenLimits::default());
        assert_eq!(game_config.num_passes_to_end(), 12);
    }
}
