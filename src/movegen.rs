// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, dictionary, game_config, matrix, play_scorer, tile, validator, word_scanner};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Move {
    pub placed_tiles: Vec<tile::PlacedTile>,
    pub formed_words: Vec<word_scanner::Word>,
    pub score: i16,
}

impl Move {
    #[inline(always)]
    pub fn num_tiles(&self) -> usize {
        self.placed_tiles.len()
    }

    // the word spelled by the placed tiles themselves.
    pub fn main_word(&self) -> Option<&word_scanner::Word> {
        let placed = placed_string(&self.placed_tiles);
        self.formed_words.iter().find(|w| w.text == placed)
    }

    pub fn word_texts(&self) -> Vec<&str> {
        self.formed_words.iter().map(|w| w.text.as_str()).collect()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.main_word() {
            Some(w) => {
                let t = &self.placed_tiles[0];
                match w.direction {
                    matrix::Direction::Horizontal => write!(f, "{}{}", t.row + 1, (t.col as u8 + b'a') as char)?,
                    matrix::Direction::Vertical => write!(f, "{}{}", (t.col as u8 + b'a') as char, t.row + 1)?,
                }
                write!(f, " ")?;
                for p in &self.placed_tiles {
                    write!(f, "{}", p.tile.label())?;
                }
            }
            None => write!(f, "?")?,
        }
        write!(f, " {}", self.score)
    }
}

// letters in board order. tiles are produced in order along their line.
fn placed_string(tiles: &[tile::PlacedTile]) -> String {
    let mut sorted = tiles.to_vec();
    sorted.sort_unstable_by_key(|p| (p.row, p.col));
    sorted.iter().map(|p| p.letter()).collect()
}

pub struct BoardSnapshot<'a> {
    pub board: &'a board::Board,
    pub game_config: &'a game_config::GameConfig<'a>,
    pub word_predicate: &'a dyn dictionary::WordPredicate,
}

type CandidateKey = Vec<(i8, i8, char, bool)>;

struct WorkingBuffer {
    used: Vec<bool>,
    perm: Vec<usize>,
    perms: Vec<usize>, // num_perms * length, flattened
    tiles: Vec<tile::PlacedTile>,
    blank_idxs: Vec<usize>,
    seen: std::collections::HashSet<CandidateKey>,
}

impl WorkingBuffer {
    fn new() -> Self {
        Self {
            used: Vec::new(),
            perm: Vec::new(),
            perms: Vec::new(),
            tiles: Vec::new(),
            blank_idxs: Vec::new(),
            seen: std::collections::HashSet::new(),
        }
    }

    fn init(&mut self, rack: &[tile::Tile]) {
        self.used.clear();
        self.used.resize(rack.len(), false);
        self.perm.clear();
        self.perms.clear();
        self.tiles.clear();
        self.blank_idxs.clear();
        self.seen.clear();
    }
}

// ordered selections of `length` rack indices, lexicographic, at most `limit` of them.
fn gen_permutations(
    num_tiles: usize,
    length: usize,
    limit: usize,
    used: &mut [bool],
    perm: &mut Vec<usize>,
    out: &mut Vec<usize>,
) -> usize {
    struct Env<'a> {
        num_tiles: usize,
        length: usize,
        limit: usize,
        found: usize,
        used: &'a mut [bool],
        perm: &'a mut Vec<usize>,
        out: &'a mut Vec<usize>,
    }

    fn permute(env: &mut Env<'_>) {
        if env.perm.len() == env.length {
            env.out.extend_from_slice(env.perm);
            env.found += 1;
            return;
        }
        for i in 0..env.num_tiles {
            if env.found >= env.limit {
                break;
            }
            if !env.used[i] {
                env.used[i] = true;
                env.perm.push(i);
                permute(env);
                env.perm.pop();
                env.used[i] = false;
            }
        }
    }

    out.clear();
    perm.clear();
    if length == 0 || length > num_tiles || limit == 0 {
        return 0;
    }
    let mut env = Env {
        num_tiles,
        length,
        limit,
        found: 0,
        used,
        perm,
        out,
    };
    permute(&mut env);
    env.found
}

// tries letters for each unassigned blank in turn; the first assignment whose
// words all validate wins.
fn resolve_blanks(
    board_snapshot: &BoardSnapshot<'_>,
    tiles: &mut [tile::PlacedTile],
    blank_idxs: &[usize],
) -> Option<Vec<word_scanner::Word>> {
    struct Env<'a> {
        board: &'a board::Board,
        word_predicate: &'a dyn dictionary::WordPredicate,
        blank_order: &'a [char],
        tiles: &'a mut [tile::PlacedTile],
        blank_idxs: &'a [usize],
    }

    fn assign(env: &mut Env<'_>, idx: usize) -> Option<Vec<word_scanner::Word>> {
        if idx == env.blank_idxs.len() {
            let words = word_scanner::formed_words(env.board, env.tiles);
            if !words.is_empty() && words.iter().all(|w| env.word_predicate.is_valid_word(&w.text)) {
                return Some(words);
            }
            return None;
        }
        let i = env.blank_idxs[idx];
        for &c in env.blank_order {
            env.tiles[i].tile = tile::Tile::blank().assigned(c);
            if let Some(words) = assign(env, idx + 1) {
                return Some(words);
            }
        }
        env.tiles[i].tile = tile::Tile::blank();
        None
    }

    let mut env = Env {
        board: board_snapshot.board,
        word_predicate: board_snapshot.word_predicate,
        blank_order: board_snapshot.game_config.alphabet().blank_order(),
        tiles,
        blank_idxs,
    };
    assign(&mut env, 0)
}

// empty squares next to tiles, nearest the star first, row-major on ties.
pub fn prioritized_anchors(board_snapshot: &BoardSnapshot<'_>) -> Vec<(i8, i8)> {
    let board_layout = board_snapshot.game_config.board_layout();
    let mut anchors = board_snapshot.board.anchors(board_layout);
    let (star_row, star_col) = (board_layout.star_row(), board_layout.star_col());
    anchors.sort_by_key(|&(row, col)| ((row - star_row).abs() + (col - star_col).abs(), row, col));
    anchors.truncate(board_snapshot.game_config.movegen_limits().max_anchors);
    anchors
}

pub struct MoveGenerator {
    working_buffer: WorkingBuffer,
    pub plays: Vec<Move>,
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator {
    pub fn new() -> Self {
        Self {
            working_buffer: WorkingBuffer::new(),
            plays: Vec::new(),
        }
    }

    // fills self.plays with scored, validated moves. nothing if the word list is not loaded.
    pub fn gen_moves(&mut self, board_snapshot: &BoardSnapshot<'_>, rack: &[tile::Tile]) {
        self.plays.clear();
        if !board_snapshot.word_predicate.is_loaded() {
            log::warn!("word list is not loaded, no moves generated");
            return;
        }
        self.working_buffer.init(rack);
        let limits = *board_snapshot.game_config.movegen_limits();
        let max_len = limits.max_word_length.min(rack.len());
        let anchors = prioritized_anchors(board_snapshot);
        let board_layout = board_snapshot.game_config.board_layout();
        let must_cover_star = board_snapshot.board.is_empty();

        for &(anchor_row, anchor_col) in &anchors {
            let num_before = self.plays.len();
            'anchor: for direction in [matrix::Direction::Horizontal, matrix::Direction::Vertical] {
                let (dr, dc) = direction.step();
                for length in 1..=max_len {
                    for offset in 0..length as i8 {
                        let start_row = anchor_row - dr * offset;
                        let start_col = anchor_col - dc * offset;
                        let end_row = start_row + dr * (length as i8 - 1);
                        let end_col = start_col + dc * (length as i8 - 1);
                        if !board::Board::in_bounds(start_row, start_col)
                            || !board::Board::in_bounds(end_row, end_col)
                        {
                            continue;
                        }
                        let covers = |row: i8, col: i8| {
                            (0..length as i8).any(|i| start_row + dr * i == row && start_col + dc * i == col)
                        };
                        if must_cover_star && !covers(board_layout.star_row(), board_layout.star_col()) {
                            continue;
                        }
                        if (0..length as i8)
                            .any(|i| board_snapshot.board.is_occupied(start_row + dr * i, start_col + dc * i))
                        {
                            continue;
                        }

                        let wb = &mut self.working_buffer;
                        let num_perms = gen_permutations(
                            rack.len(),
                            length,
                            limits.max_permutations_per_length,
                            &mut wb.used,
                            &mut wb.perm,
                            &mut wb.perms,
                        );
                        for p in 0..num_perms {
                            wb.tiles.clear();
                            wb.blank_idxs.clear();
                            for (i, &rack_idx) in (0i8..).zip(&wb.perms[p * length..(p + 1) * length]) {
                                let t = rack[rack_idx];
                                if t.is_blank {
                                    wb.blank_idxs.push(i as usize);
                                }
                                let t = if t.is_blank { tile::Tile::blank() } else { t };
                                wb.tiles.push(t.at(start_row + dr * i, start_col + dc * i));
                            }
                            let key = wb
                                .tiles
                                .iter()
                                .map(|x| (x.row, x.col, x.tile.letter, x.tile.is_blank))
                                .collect::<CandidateKey>();
                            if !wb.seen.insert(key) {
                                continue;
                            }
                            if !validator::validate(board_snapshot.board, &wb.tiles).is_valid() {
                                continue;
                            }
                            let Some(words) = resolve_blanks(board_snapshot, &mut wb.tiles, &wb.blank_idxs)
                            else {
                                continue;
                            };
                            let placed = placed_string(&wb.tiles);
                            if !words.iter().any(|w| w.text == placed) {
                                continue;
                            }
                            let score = play_scorer::score_move(board_snapshot.game_config, &words, &wb.tiles);
                            self.plays.push(Move {
                                placed_tiles: wb.tiles.clone(),
                                formed_words: words,
                                score,
                            });
                            if self.plays.len() - num_before >= limits.max_candidates_per_anchor {
                                break 'anchor;
                            }
                        }
                    }
                }
            }
            log::trace!(
                "anchor {},{}: {} moves",
                anchor_row,
                anchor_col,
                self.plays.len() - num_before
            );
        }
        log::debug!(
            "rack {}: {} anchors, {} candidates, {} moves",
            tile::Rack(rack.to_vec()),
            anchors.len(),
            self.working_buffer.seen.len(),
            self.plays.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{alphabet, dictionary::WordPredicate, display};

    fn rack_of(s: &str) -> Vec<tile::Tile> {
        alphabet::make_english_alphabet().parse_tiles(s).unwrap()
    }

    fn board_of(rows: &[&str]) -> board::Board {
        board::Board::from_rows(&alphabet::make_english_alphabet(), rows).unwrap()
    }

    fn gen_all(board: &board::Board, rack: &str, words: &dictionary::WordList) -> Vec<Move> {
        let game_config = game_config::make_english_game_config();
        let board_snapshot = BoardSnapshot {
            board,
            game_config: &game_config,
            word_predicate: words,
        };
        let mut move_generator = MoveGenerator::new();
        move_generator.gen_moves(&board_snapshot, &rack_of(rack));
        std::mem::take(&mut move_generator.plays)
    }

    #[test]
    fn test_not_loaded_means_no_moves() {
        let moves = gen_all(&board::Board::new(), "CAT", &dictionary::WordList::not_loaded());
        assert!(moves.is_empty());
    }

    #[test]
    fn test_opening_moves_cover_star() {
        let words = dictionary::WordList::from_words(&["CAT", "ACT", "AT", "TA"]);
        let moves = gen_all(&board::Board::new(), "CATXQZE", &words);
        assert!(!moves.is_empty());
        for m in &moves {
            assert!(m.placed_tiles.iter().any(|p| p.pos() == (7, 7)));
            assert!(m.formed_words.iter().all(|w| words.is_valid_word(&w.text)));
            assert!(m.main_word().is_some());
        }
        let cat = moves
            .iter()
            .find(|m| m.word_texts() == ["CAT"] && m.placed_tiles[0].pos() == (7, 6))
            .unwrap();
        assert_eq!(cat.score, 10);
        // every move is unique.
        let mut keys = moves
            .iter()
            .map(|m| m.placed_tiles.iter().map(|p| (p.row, p.col, p.letter())).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let n = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), n);
    }

    #[test]
    fn test_move_notation_matches_board_labels() {
        let alphabet = alphabet::make_english_alphabet();
        let board = board::Board::new();
        let moves = gen_all(&board, "CAT", &dictionary::WordList::from_words(&["CAT"]));
        let notation = |row: i8, col: i8, direction: matrix::Direction| {
            moves
                .iter()
                .find(|m| m.placed_tiles[0].pos() == (row, col) && m.main_word().map(|w| w.direction) == Some(direction))
                .unwrap()
                .to_string()
        };
        assert_eq!(notation(7, 6, matrix::Direction::Horizontal), "8g CAT 10");
        assert_eq!(notation(6, 7, matrix::Direction::Vertical), "h7 CAT 10");
        for m in &moves {
            let s = m.to_string();
            let parts = s.split(' ').collect::<Vec<_>>();
            let tiles = display::parse_placement(&alphabet, &board, parts[0], parts[1]).unwrap();
            assert_eq!(tiles, m.placed_tiles);
        }
    }

    #[test]
    fn test_single_hook_is_not_the_main_word() {
        // C before AT would make CAT, but the lone C is not itself a word.
        let words = dictionary::WordList::from_words(&["CAT"]);
        let board = board_of(&["", "", "", "", "", "", "", ".......AT"]);
        let moves = gen_all(&board, "C", &words);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_parallel_play() {
        let words = dictionary::WordList::from_words(&["CAT", "AX", "TI", "XI"]);
        let board = board_of(&["", "", "", "", "", "", "", "......CAT"]);
        let moves = gen_all(&board, "XI", &words);
        let m = moves
            .iter()
            .find(|m| m.placed_tiles.iter().map(|p| p.pos()).collect::<Vec<_>>() == [(8, 7), (8, 8)])
            .unwrap();
        assert_eq!(m.word_texts(), ["XI", "AX", "TI"]);
        // I doubled on 8,8 counts in both XI and TI.
        assert_eq!(m.score, 10 + 9 + 3);
    }

    #[test]
    fn test_blank_takes_first_working_letter() {
        let words = dictionary::WordList::from_words(&["AT", "ET", "TE", "TA"]);
        let moves = gen_all(&board::Board::new(), "?T", &words);
        // E is tried before A.
        assert!(moves.iter().any(|m| m.word_texts() == ["ET"]));
        assert!(!moves.iter().any(|m| m.word_texts() == ["AT"]));
        for m in &moves {
            let blank = m.placed_tiles.iter().find(|p| p.tile.is_blank).unwrap();
            assert_eq!(blank.letter(), 'E');
            assert_eq!(m.score, 2);
        }
    }

    #[test]
    fn test_anchor_priority() {
        let game_config = game_config::make_english_game_config();
        let words = dictionary::WordList::from_words(&["AT"]);
        let board = board_of(&["", "", "", "", "", "", "", ".......A"]);
        let board_snapshot = BoardSnapshot {
            board: &board,
            game_config: &game_config,
            word_predicate: &words,
        };
        assert_eq!(
            prioritized_anchors(&board_snapshot),
            vec![(6, 7), (7, 6), (7, 8), (8, 7)]
        );
        let board = board_of(&["A"]);
        let board_snapshot = BoardSnapshot {
            board: &board,
            game_config: &game_config,
            word_predicate: &words,
        };
        assert_eq!(prioritized_anchors(&board_snapshot), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_permutations_are_capped() {
        let mut used = vec![false; 7];
        let mut perm = Vec::new();
        let mut out = Vec::new();
        assert_eq!(gen_permutations(7, 5, 40, &mut used, &mut perm, &mut out), 40);
        assert_eq!(out.len(), 200);
        assert_eq!(&out[..5], &[0, 1, 2, 3, 4]);
        assert_eq!(gen_permutations(3, 2, 40, &mut used, &mut perm, &mut out), 6);
        assert_eq!(gen_permutations(2, 3, 40, &mut used, &mut perm, &mut out), 0);
    }
}
