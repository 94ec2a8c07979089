// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, matrix, tile};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Word {
    pub text: String,
    pub tiles: Vec<tile::PlacedTile>,
    pub start_row: i8,
    pub start_col: i8,
    pub direction: matrix::Direction,
}

impl Word {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

// words of length >= 2 that contain at least one of new_tiles.
// horizontal words first (top-to-bottom, left-to-right), then vertical ones
// (left-to-right, top-to-bottom).
pub fn formed_words(board: &board::Board, new_tiles: &[tile::PlacedTile]) -> Vec<Word> {
    if new_tiles.is_empty() {
        return Vec::new();
    }
    let merged = board.overlay(new_tiles);
    let mut is_new = [false; board::NUM_SQUARES];
    // lanes without a new tile cannot yield a word.
    let mut touched_rows = [false; board::BOARD_SIZE as usize];
    let mut touched_cols = [false; board::BOARD_SIZE as usize];
    for placed in new_tiles {
        if board::Board::in_bounds(placed.row, placed.col) {
            is_new[board::DIM.at_row_col(placed.row, placed.col)] = true;
            touched_rows[placed.row as usize] = true;
            touched_cols[placed.col as usize] = true;
        }
    }

    let mut words = Vec::new();
    for direction in [matrix::Direction::Horizontal, matrix::Direction::Vertical] {
        let touched = match direction {
            matrix::Direction::Horizontal => &touched_rows,
            matrix::Direction::Vertical => &touched_cols,
        };
        for lane in 0..board::DIM.num_lanes(direction) {
            if !touched[lane as usize] {
                continue;
            }
            let strider = board::DIM.lane(direction, lane);
            let mut i = 0;
            while i < strider.len() {
                if merged.at_index(strider.at(i)).is_none() {
                    i += 1;
                    continue;
                }
                let start = i;
                while i < strider.len() && merged.at_index(strider.at(i)).is_some() {
                    i += 1;
                }
                if i - start >= 2 && (start..i).any(|j| is_new[strider.at(j)]) {
                    words.push(make_word(&merged, &strider, start, i, direction));
                }
            }
        }
    }
    words
}

fn make_word(
    merged: &board::Board,
    strider: &matrix::Strider,
    start: i8,
    end: i8,
    direction: matrix::Direction,
) -> Word {
    let tiles = (start..end)
        .filter_map(|j| {
            let (row, col) = board::DIM.row_col(strider.at(j));
            merged.get(row, col).map(|t| t.at(row, col))
        })
        .collect::<Vec<_>>();
    let text = tiles.iter().map(|p| p.letter()).collect::<String>();
    let (start_row, start_col) = board::DIM.row_col(strider.at(start));
    Word {
        text,
        tiles,
        start_row,
        start_col,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::alphabet;
    use proptest::prelude::*;

    fn cat_board() -> board::Board {
        let alphabet = alphabet::make_english_alphabet();
        board::Board::from_rows(&alphabet, &["", "", "", "", "", "", "", "......CAT"]).unwrap()
    }

    #[test]
    fn test_opening_word() {
        let alphabet = alphabet::make_english_alphabet();
        let tiles = "CAT"
            .chars()
            .zip(6i8..)
            .map(|(c, col)| alphabet.make_tile(c).unwrap().at(7, col))
            .collect::<Vec<_>>();
        let words = formed_words(&board::Board::new(), &tiles);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "CAT");
        assert_eq!((words[0].start_row, words[0].start_col), (7, 6));
        assert_eq!(words[0].direction, matrix::Direction::Horizontal);
    }

    #[test]
    fn test_hook_and_cross_words() {
        let alphabet = alphabet::make_english_alphabet();
        // S hooks CAT and starts a vertical word with O below it.
        let tiles = vec![
            alphabet.make_tile('S').unwrap().at(7, 9),
            alphabet.make_tile('O').unwrap().at(8, 9),
        ];
        let words = formed_words(&cat_board(), &tiles);
        let texts = words.iter().map(|w| w.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, vec!["CATS", "SO"]);
        assert_eq!(words[1].direction, matrix::Direction::Vertical);
    }

    #[test]
    fn test_existing_words_are_not_reported() {
        let alphabet = alphabet::make_english_alphabet();
        // parallel play under AT forms two short vertical words only.
        let tiles = vec![alphabet.make_tile('N').unwrap().at(8, 4)];
        assert!(formed_words(&cat_board(), &tiles).is_empty());
        let tiles = vec![
            alphabet.make_tile('X').unwrap().at(8, 7),
            alphabet.make_tile('I').unwrap().at(8, 8),
        ];
        let texts = formed_words(&cat_board(), &tiles)
            .into_iter()
            .map(|w| w.text)
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["XI", "AX", "TI"]);
    }

    #[test]
    fn test_blank_keeps_assigned_letter() {
        let tiles = vec![tile::Tile::blank().assigned('s').at(7, 9)];
        let words = formed_words(&cat_board(), &tiles);
        assert_eq!(words[0].text, "CATS");
        assert!(words[0].tiles[3].tile.is_blank);
    }

    proptest! {
        #[test]
        fn prop_words_have_at_least_two_tiles(
            cells in proptest::collection::vec((0i8..15, 0i8..15, 0usize..26), 1..12)
        ) {
            let alphabet = alphabet::make_english_alphabet();
            let tiles = cells
                .iter()
                .map(|&(row, col, i)| {
                    let letter = &alphabet.letters()[i];
                    tile::Tile::new(letter.label(), letter.score()).at(row, col)
                })
                .collect::<Vec<_>>();
            for word in formed_words(&cat_board(), &tiles) {
                prop_assert!(word.text.chars().count() >= 2);
                prop_assert_eq!(word.text.chars().count(), word.len());
            }
        }

        #[test]
        fn prop_empty_placement_scans_nothing(rows in proptest::collection::vec("[A-Z.]{0,15}", 0..15)) {
            let alphabet = alphabet::make_english_alphabet();
            let rows = rows.iter().map(|s| s.as_str()).collect::<Vec<_>>();
            let board = board::Board::from_rows(&alphabet, &rows).unwrap();
            prop_assert!(formed_words(&board, &[]).is_empty());
        }
    }
}
