// Copyright (C) 2020-2026 Andy Kurnia.

use super::{move_picker, movegen, tile};

pub const DEFAULT_NUM_TOP_MOVES: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    pub row: i8,
    pub col: i8,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PuzzleMove {
    pub tiles: Vec<tile::PlacedTile>,
    pub words: Vec<String>,
    pub score: i16,
    pub start_cell: Option<Cell>,
    pub main_word_length: Option<usize>,
    pub letters_used: Vec<char>,
}

impl From<&movegen::Move> for PuzzleMove {
    fn from(play: &movegen::Move) -> Self {
        let mut tiles = play.placed_tiles.clone();
        tiles.sort_unstable_by_key(|p| (p.row, p.col));
        Self {
            start_cell: tiles.first().map(|p| Cell { row: p.row, col: p.col }),
            main_word_length: play.main_word().map(|w| w.len()),
            letters_used: tiles.iter().map(|p| p.letter()).collect(),
            words: play.formed_words.iter().map(|w| w.text.clone()).collect(),
            score: play.score,
            tiles,
        }
    }
}

impl PuzzleMove {
    #[inline(always)]
    pub fn key(&self) -> String {
        canonical_key(&self.tiles)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Puzzle {
    pub id: String,
    pub board: Vec<tile::PlacedTile>,
    pub rack: Vec<tile::Tile>,
    pub top_moves: Vec<PuzzleMove>,
}

impl Puzzle {
    pub fn best_score(&self) -> Option<i16> {
        self.top_moves.iter().map(|m| m.score).max()
    }

    pub fn find_move(&self, tiles: &[tile::PlacedTile]) -> Option<usize> {
        let key = canonical_key(tiles);
        self.top_moves.iter().position(|m| m.key() == key)
    }
}

// "row,col,LETTER" for each tile in board order, joined by '|'.
pub fn canonical_key(tiles: &[tile::PlacedTile]) -> String {
    let mut sorted = tiles.iter().collect::<Vec<_>>();
    sorted.sort_unstable_by_key(|p| (p.row, p.col));
    sorted
        .iter()
        .map(|p| format!("{},{},{}", p.row, p.col, p.letter()))
        .collect::<Vec<_>>()
        .join("|")
}

// the best `num_moves` by composite equity.
pub fn top_moves(ranked: &[move_picker::RankedMove], num_moves: usize) -> Vec<PuzzleMove> {
    ranked
        .iter()
        .take(num_moves)
        .map(|r| PuzzleMove::from(&r.play))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    Found { index: usize, score: i16 },
    AlreadyFound { index: usize },
    NotInList,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hint {
    #[default]
    None,
    Anchor,
    Length,
    Letters,
}

// a player working through one puzzle.
pub struct PuzzleGame {
    pub puzzle: Puzzle,
    found: Vec<bool>,
    pub total_score: i16,
    hint: Hint,
}

impl PuzzleGame {
    pub fn new(puzzle: Puzzle) -> Self {
        let found = vec![false; puzzle.top_moves.len()];
        Self {
            puzzle,
            found,
            total_score: 0,
            hint: Hint::None,
        }
    }

    pub fn submit(&mut self, tiles: &[tile::PlacedTile]) -> Submission {
        match self.puzzle.find_move(tiles) {
            Some(index) if self.found[index] => Submission::AlreadyFound { index },
            Some(index) => {
                self.found[index] = true;
                let score = self.puzzle.top_moves[index].score;
                self.total_score += score;
                if Some(index) == self.current_index() {
                    self.hint = Hint::None;
                }
                log::info!("found top move {} for {}", index + 1, score);
                Submission::Found { index, score }
            }
            None => Submission::NotInList,
        }
    }

    pub fn num_found(&self) -> usize {
        self.found.iter().filter(|&&f| f).count()
    }

    #[inline(always)]
    pub fn is_over(&self) -> bool {
        self.found.iter().all(|&f| f)
    }

    // hints are about the best move not found yet.
    pub fn current_index(&self) -> Option<usize> {
        self.found.iter().position(|&f| !f)
    }

    // each call reveals a bit more: anchor, then length, then letters.
    pub fn reveal_hint(&mut self) -> Option<String> {
        let m = &self.puzzle.top_moves[self.current_index()?];
        self.hint = match self.hint {
            Hint::None => Hint::Anchor,
            Hint::Anchor => Hint::Length,
            Hint::Length | Hint::Letters => Hint::Letters,
        };
        Some(match self.hint {
            Hint::None | Hint::Anchor => match m.start_cell {
                Some(c) => format!("starts at row {} col {}", c.row, c.col),
                None => "no anchor".into(),
            },
            Hint::Length => format!("main word has {} letters", m.main_word_length.unwrap_or(0)),
            Hint::Letters => {
                let mut letters = m.letters_used.clone();
                letters.sort_unstable();
                format!("uses {}", letters.into_iter().collect::<String>())
            }
        })
    }
}
