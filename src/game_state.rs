// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bag, board, dictionary, endgame, error, game_config, movegen, play_scorer, tile, validator, word_scanner};
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Play {
    Pass,
    Exchange { tiles: Vec<tile::Tile> },
    Place { tiles: Vec<tile::PlacedTile> },
}

impl From<&movegen::Move> for Play {
    fn from(m: &movegen::Move) -> Self {
        Play::Place {
            tiles: m.placed_tiles.clone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GamePlayer {
    pub score: i16,
    pub rack: tile::Rack,
    // consecutive passes by this player; playing or exchanging resets it
    pub num_passes: u16,
}

pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    pub players: Box<[GamePlayer]>,
    pub board: board::Board,
    pub bag: bag::Bag,
    pub turn: u8,
    // consecutive turns, by anyone, that put nothing on the board
    pub num_unplaced_turns: u8,
}

impl Clone for GameState<'_> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            game_config: self.game_config,
            players: self.players.clone(),
            board: self.board.clone(),
            bag: self.bag.clone(),
            turn: self.turn,
            num_unplaced_turns: self.num_unplaced_turns,
        }
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.game_config = source.game_config;
        self.players.clone_from(&source.players);
        self.board.clone_from(&source.board);
        self.bag.clone_from(&source.bag);
        self.turn = source.turn;
        self.num_unplaced_turns = source.num_unplaced_turns;
    }
}

impl<'a> GameState<'a> {
    pub fn new(game_config: &'a game_config::GameConfig<'a>) -> Self {
        Self {
            game_config,
            players: (0..game_config.num_players())
                .map(|_| GamePlayer::default())
                .collect(),
            board: board::Board::new(),
            bag: bag::Bag::new(game_config.alphabet()),
            turn: 0,
            num_unplaced_turns: 0,
        }
    }

    pub fn reset(&mut self) {
        self.players.iter_mut().for_each(|p| *p = GamePlayer::default());
        self.board = board::Board::new();
        self.bag = bag::Bag::new(self.game_config.alphabet());
        self.turn = 0;
        self.num_unplaced_turns = 0;
    }

    pub fn reset_and_draw_tiles(&mut self, rng: &mut dyn RngCore) {
        self.reset();
        self.bag.shuffle(rng);
        let rack_size = self.game_config.rack_size() as usize;
        for player in self.players.iter_mut() {
            self.bag.replenish(&mut player.rack, rack_size);
        }
    }

    #[inline(always)]
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    pub fn total_passes(&self) -> u16 {
        self.players.iter().map(|p| p.num_passes).sum()
    }

    pub fn racks(&self) -> Vec<tile::Rack> {
        self.players.iter().map(|p| p.rack.clone()).collect()
    }

    pub fn board_snapshot<'b>(
        &'b self,
        word_predicate: &'b dyn dictionary::WordPredicate,
    ) -> movegen::BoardSnapshot<'b> {
        movegen::BoardSnapshot {
            board: &self.board,
            game_config: self.game_config,
            word_predicate,
        }
    }

    // returns the points scored. the board and racks are untouched on error.
    // a placement must spell only words the predicate accepts.
    pub fn play(
        &mut self,
        word_predicate: &dyn dictionary::WordPredicate,
        rng: &mut dyn RngCore,
        play: &Play,
    ) -> error::Returns<i16> {
        let rack_size = self.game_config.rack_size() as usize;
        let current_player = &mut self.players[self.turn as usize];
        match play {
            Play::Pass => {
                current_player.num_passes += 1;
                self.num_unplaced_turns = self.num_unplaced_turns.saturating_add(1);
                Ok(0)
            }
            Play::Exchange { tiles } => {
                if tiles.is_empty() {
                    return_error!("nothing to exchange".into());
                }
                if self.bag.len() < tiles.len() {
                    return_error!(format!(
                        "cannot exchange {} tiles with {} in the bag",
                        tiles.len(),
                        self.bag.len()
                    ));
                }
                let mut rack = current_player.rack.clone();
                rack.use_tiles(tiles)?;
                self.bag.replenish(&mut rack, rack_size);
                self.bag.put_back(rng, tiles);
                current_player.rack = rack;
                current_player.num_passes = 0;
                self.num_unplaced_turns = self.num_unplaced_turns.saturating_add(1);
                Ok(0)
            }
            Play::Place { tiles } => {
                let validation = validator::validate(&self.board, tiles);
                if !validation.is_valid() {
                    let messages = validation
                        .errors
                        .iter()
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>();
                    return_error!(messages.join("; "));
                }
                if let Some(p) = tiles.iter().find(|p| p.tile.needs_letter()) {
                    return_error!(format!("blank at {},{} has no letter", p.row, p.col));
                }
                let mut rack = current_player.rack.clone();
                rack.use_tiles(&tiles.iter().map(|p| p.tile).collect::<Vec<_>>())?;
                let words = word_scanner::formed_words(&self.board, tiles);
                if words.is_empty() {
                    return_error!("You must form at least one word".into());
                }
                let invalid_words = words
                    .iter()
                    .filter(|w| !word_predicate.is_valid_word(&w.text))
                    .map(|w| w.text.as_str())
                    .collect::<Vec<_>>();
                if !invalid_words.is_empty() {
                    return_error!(format!("Invalid words: {}", invalid_words.join(", ")));
                }
                let score = play_scorer::score_move(self.game_config, &words, tiles);
                let mut board = self.board.clone();
                board.place_all(tiles)?;
                self.board = board;
                self.bag.replenish(&mut rack, rack_size);
                current_player.rack = rack;
                current_player.score += score;
                current_player.num_passes = 0;
                self.num_unplaced_turns = 0;
                Ok(score)
            }
        }
    }

    pub fn next_turn(&mut self) {
        let num_players = self.players.len() as u8;
        self.turn += 1;
        if self.turn >= num_players {
            self.turn = 0;
        }
    }

    // a full round went by with every player passing or exchanging.
    #[inline(always)]
    pub fn nobody_placed(&self) -> bool {
        self.num_unplaced_turns as usize >= self.players.len()
    }

    pub fn is_over(&self, no_moves: bool) -> bool {
        endgame::is_game_over(
            self.game_config,
            &self.racks(),
            self.bag.len(),
            self.total_passes(),
            no_moves,
        )
    }

    // settles rack penalties once the game is over.
    pub fn finish(&mut self) -> Vec<i16> {
        let racks = self.racks();
        let mut scores = self.players.iter().map(|p| p.score).collect::<Vec<_>>();
        let adjustments = endgame::apply_end_game_penalties(&mut scores, &racks);
        for (player, score) in self.players.iter_mut().zip(scores) {
            player.score = score;
        }
        adjustments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;

    fn words() -> dictionary::WordList {
        dictionary::WordList::from_words(&["CAT", "AT", "TA", "QI"])
    }

    fn placed(game_config: &game_config::GameConfig, s: &str, row: i8, col: i8) -> Vec<tile::PlacedTile> {
        (0i8..)
            .zip(s.chars())
            .map(|(i, c)| game_config.alphabet().make_tile(c).unwrap().at(row, col + i))
            .collect()
    }

    #[test]
    fn test_deal() {
        let game_config = game_config::make_english_game_config();
        let mut game_state = GameState::new(&game_config);
        game_state.reset_and_draw_tiles(&mut ChaCha20Rng::seed_from_u64(3));
        assert_eq!(game_state.players.len(), 2);
        assert!(game_state.players.iter().all(|p| p.rack.len() == 7));
        assert_eq!(game_state.bag.len(), 86);
        assert!(!game_state.is_over(false));
    }

    #[test]
    fn test_place_scores_and_refills() {
        let game_config = game_config::make_english_game_config();
        let words = words();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut game_state = GameState::new(&game_config);
        let rack = game_config.alphabet().parse_tiles("CATEEEE").unwrap();
        assert!(game_state.bag.remove_tiles(&rack).is_empty());
        game_state.bag.shuffle(&mut rng);
        game_state.players[0].rack = tile::Rack(rack);
        assert_eq!(game_state.bag.len(), 93);

        let tiles = placed(&game_config, "CAT", 7, 6);
        let score = game_state.play(&words, &mut rng, &Play::Place { tiles }).unwrap();
        assert_eq!(score, 10);
        assert_eq!(game_state.players[0].score, 10);
        assert_eq!(game_state.players[0].rack.len(), 7);
        assert_eq!(game_state.bag.len(), 90);
        assert_eq!(game_state.board.len(), 3);
        game_state.next_turn();
        assert_eq!(game_state.turn, 1);
        game_state.next_turn();
        assert_eq!(game_state.turn, 0);
    }

    #[test]
    fn test_illegal_place_changes_nothing() {
        let game_config = game_config::make_english_game_config();
        let words = words();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut game_state = GameState::new(&game_config);
        game_state.reset_and_draw_tiles(&mut rng);
        let rack_before = game_state.players[0].rack.clone();
        let tiles = vec![game_state.players[0].rack.0[0].at(0, 0)];
        let err = game_state.play(&words, &mut rng, &Play::Place { tiles }).unwrap_err();
        assert!(err.to_string().contains("center"));
        let tiles = placed(&game_config, "QQ", 7, 7);
        assert!(game_state.play(&words, &mut rng, &Play::Place { tiles }).is_err());
        assert_eq!(game_state.players[0].rack, rack_before);
        assert!(game_state.board.is_empty());
    }

    fn deal_rack(game_state: &mut GameState, rng: &mut ChaCha20Rng, rack: &str) {
        let rack = game_state.game_config.alphabet().parse_tiles(rack).unwrap();
        assert!(game_state.bag.remove_tiles(&rack).is_empty());
        game_state.bag.shuffle(rng);
        game_state.players[0].rack = tile::Rack(rack);
    }

    #[test]
    fn test_unassigned_blank_changes_nothing() {
        let game_config = game_config::make_english_game_config();
        let words = words();
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let mut game_state = GameState::new(&game_config);
        deal_rack(&mut game_state, &mut rng, "A?");
        let tiles = vec![
            game_config.alphabet().make_tile('A').unwrap().at(7, 7),
            tile::Tile::blank().at(7, 8),
        ];
        let err = game_state.play(&words, &mut rng, &Play::Place { tiles }).unwrap_err();
        assert!(err.to_string().contains("no letter"));
        assert!(game_state.board.is_empty());
        assert_eq!(game_state.players[0].rack.len(), 2);
        assert_eq!(game_state.players[0].score, 0);

        let tiles = vec![
            game_config.alphabet().make_tile('A').unwrap().at(7, 7),
            tile::Tile::blank().assigned('T').at(7, 8),
        ];
        assert_eq!(game_state.play(&words, &mut rng, &Play::Place { tiles }).unwrap(), 2);
        assert_eq!(game_state.board.len(), 2);
    }

    #[test]
    fn test_words_must_be_in_the_list() {
        let game_config = game_config::make_english_game_config();
        let words = words();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut game_state = GameState::new(&game_config);
        deal_rack(&mut game_state, &mut rng, "ZQXJAT");
        let tiles = placed(&game_config, "ZQ", 7, 7);
        let err = game_state.play(&words, &mut rng, &Play::Place { tiles }).unwrap_err();
        assert_eq!(err.to_string(), "Invalid words: ZQ");
        assert!(game_state.board.is_empty());
        assert_eq!(game_state.players[0].score, 0);
        assert_eq!(game_state.players[0].rack.len(), 6);

        let tiles = placed(&game_config, "AT", 7, 7);
        assert_eq!(game_state.play(&words, &mut rng, &Play::Place { tiles }).unwrap(), 4);
        // a single tile is judged by the word it makes with the board.
        let tiles = vec![game_config.alphabet().make_tile('J').unwrap().at(6, 7)];
        let err = game_state.play(&words, &mut rng, &Play::Place { tiles }).unwrap_err();
        assert_eq!(err.to_string(), "Invalid words: JA");
        assert_eq!(game_state.board.len(), 2);
    }

    #[test]
    fn test_passes_reset_on_play() {
        let game_config = game_config::make_english_game_config();
        let words = words();
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let mut game_state = GameState::new(&game_config);
        game_state.reset_and_draw_tiles(&mut rng);
        for _ in 0..2 {
            game_state.play(&words, &mut rng, &Play::Pass).unwrap();
            game_state.next_turn();
        }
        assert_eq!(game_state.total_passes(), 2);
        let tiles = game_state.players[0].rack.0[..2].to_vec();
        game_state.play(&words, &mut rng, &Play::Exchange { tiles }).unwrap();
        assert_eq!(game_state.players[0].num_passes, 0);
        assert_eq!(game_state.total_passes(), 1);
        assert_eq!(game_state.players[0].rack.len(), 7);
        assert_eq!(game_state.bag.len(), 86);
        game_state.next_turn();
        for _ in 0..5 {
            game_state.play(&words, &mut rng, &Play::Pass).unwrap();
            game_state.next_turn();
        }
        assert_eq!(game_state.total_passes(), 6);
        assert!(game_state.is_over(false));
    }

    #[test]
    fn test_unplaced_turns_span_players() {
        let game_config = game_config::make_english_game_config();
        let words = words();
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let mut game_state = GameState::new(&game_config);
        deal_rack(&mut game_state, &mut rng, "ATEEEEE");
        game_state.bag.replenish(&mut game_state.players[1].rack, 7);
        let tiles = game_state.players[1].rack.0[..1].to_vec();
        game_state.turn = 1;
        game_state.play(&words, &mut rng, &Play::Exchange { tiles }).unwrap();
        game_state.next_turn();
        assert_eq!(game_state.num_unplaced_turns, 1);
        assert!(!game_state.nobody_placed());
        let tiles = placed(&game_config, "AT", 7, 7);
        game_state.play(&words, &mut rng, &Play::Place { tiles }).unwrap();
        game_state.next_turn();
        assert_eq!(game_state.num_unplaced_turns, 0);
        // one side passing while the other cannot move still ends the game.
        for _ in 0..2 {
            game_state.play(&words, &mut rng, &Play::Pass).unwrap();
            game_state.next_turn();
        }
        assert!(game_state.nobody_placed());
        assert!(game_state.is_over(game_state.nobody_placed()));
        // a rejected play does not count.
        game_state.reset();
        let tiles = placed(&game_config, "QQ", 7, 7);
        assert!(game_state.play(&words, &mut rng, &Play::Place { tiles }).is_err());
        assert_eq!(game_state.num_unplaced_turns, 0);
    }

    #[test]
    fn test_finish_applies_penalties() {
        let game_config = game_config::make_english_game_config();
        let mut game_state = GameState::new(&game_config);
        game_state.bag.0.clear();
        game_state.players[0].score = 100;
        game_state.players[1].score = 90;
        game_state.players[1].rack = tile::Rack(game_config.alphabet().parse_tiles("DEF").unwrap());
        assert!(game_state.is_over(false));
        assert_eq!(game_state.finish(), vec![7, -7]);
        assert_eq!(game_state.players[0].score, 107);
        assert_eq!(game_state.players[1].score, 83);
    }
}
