// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, game_config, tile, word_scanner};

// premiums only count under tiles placed this turn.
pub fn score_word(
    board_layout: &board_layout::BoardLayout,
    word: &word_scanner::Word,
    new_tiles: &[tile::PlacedTile],
) -> i16 {
    let mut word_score = 0i16;
    let mut word_multiplier = 1i16;
    for placed in &word.tiles {
        let mut letter_score = placed.tile.face_value() as i16;
        if new_tiles.iter().any(|p| p.pos() == placed.pos()) {
            let premium = board_layout.premium_at(placed.row, placed.col);
            letter_score *= premium.letter_multiplier as i16;
            word_multiplier *= premium.word_multiplier as i16;
        }
        word_score += letter_score;
    }
    word_score * word_multiplier
}

// sum of the word scores, before any bonus.
pub fn score_words(
    board_layout: &board_layout::BoardLayout,
    words: &[word_scanner::Word],
    new_tiles: &[tile::PlacedTile],
) -> i16 {
    words
        .iter()
        .map(|word| score_word(board_layout, word, new_tiles))
        .sum()
}

pub fn score_move(
    game_config: &game_config::GameConfig,
    words: &[word_scanner::Word],
    new_tiles: &[tile::PlacedTile],
) -> i16 {
    score_words(game_config.board_layout(), words, new_tiles)
        + game_config.num_played_bonus(new_tiles.len())
}
