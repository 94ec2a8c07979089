// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use std::sync::Arc;
use tilebot::{board, bot, return_error, dictionary, display, error, game_config, game_state, logging, move_picker, puzzle, seeder, tile};

static HELP: &str = "\
new [easy|medium|hard]   start a game against the bot, you move first
play POS WORD            e.g. play 8g CAT, or play h6 cH.R ('.' plays through, lowercase is a blank)
exch TILES               exchange tiles, ? for a blank
pass
hint                     the best moves for your rack
show
puzzle [light|heavy]     seed a puzzle
try POS WORD             submit a puzzle answer
clue                     a little more about the best answer not found yet
source FILE
exit";

struct GameSession<'a> {
    game_state: game_state::GameState<'a>,
    bot: bot::Bot,
    human: usize,
    is_over: bool,
}

enum Session<'a> {
    Idle,
    Game(GameSession<'a>),
    Puzzle(puzzle::PuzzleGame),
}

struct Shell<'a> {
    game_config: &'a Arc<game_config::GameConfig<'static>>,
    word_list: Arc<dictionary::WordList>,
    runtime: tokio::runtime::Runtime,
    rng: rand_chacha::ChaCha20Rng,
    session: Session<'a>,
}

impl<'a> Shell<'a> {
    fn new_game(&mut self, difficulty: move_picker::Difficulty) {
        let mut game_state = game_state::GameState::new(self.game_config);
        game_state.reset_and_draw_tiles(&mut self.rng);
        let bot = bot::Bot::new(Arc::clone(self.game_config), Arc::clone(&self.word_list), difficulty);
        display::print_game_state(&game_state);
        self.session = Session::Game(GameSession {
            game_state,
            bot,
            human: 0,
            is_over: false,
        });
    }

    fn game_session(&mut self) -> error::Returns<&mut GameSession<'a>> {
        match &mut self.session {
            Session::Game(session) if !session.is_over => Ok(session),
            _ => Err("no game in progress, try new".into()),
        }
    }

    // settles the end of the game if it has come.
    fn check_over(session: &mut GameSession<'_>) {
        if session.game_state.is_over(session.game_state.nobody_placed()) {
            let adjustments = session.game_state.finish();
            session.is_over = true;
            display::print_game_state(&session.game_state);
            println!("game over, rack adjustments {:?}", adjustments);
        }
    }

    fn human_play(&mut self, play: &game_state::Play) -> error::Returns<()> {
        let rng = &mut self.rng;
        let word_list = &*self.word_list;
        let session = match &mut self.session {
            Session::Game(session) if !session.is_over => session,
            _ => {
                return_error!("no game in progress, try new".into());
            }
        };
        if session.game_state.turn as usize != session.human {
            return_error!("not your turn".into());
        }
        let score = session.game_state.play(word_list, rng, play)?;
        println!("you scored {}", score);
        session.game_state.next_turn();
        Self::check_over(session);
        self.bot_turns()
    }

    fn bot_turns(&mut self) -> error::Returns<()> {
        let session = match &mut self.session {
            Session::Game(session) => session,
            _ => return Ok(()),
        };
        while !session.is_over && session.game_state.turn as usize != session.human {
            let seed = self.rng.random::<u64>();
            let cur_rack = session.game_state.current_player().rack.clone();
            println!("bot is thinking...");
            let picked = self.runtime.block_on(session.bot.think(
                &session.game_state.board,
                cur_rack.tiles(),
                seed,
            ))?;
            let play = match &picked {
                Some(m) => game_state::Play::from(&m.play),
                None if !cur_rack.is_empty() && session.game_state.bag.len() >= cur_rack.len() => {
                    game_state::Play::Exchange {
                        tiles: cur_rack.0.clone(),
                    }
                }
                None => game_state::Play::Pass,
            };
            session.game_state.play(&*self.word_list, &mut self.rng, &play)?;
            match (&picked, &play) {
                (Some(m), _) => println!("bot plays {}", m.play),
                (None, game_state::Play::Exchange { tiles }) => println!("bot exchanges {} tiles", tiles.len()),
                (None, _) => println!("bot passes"),
            }
            session.game_state.next_turn();
            Self::check_over(session);
        }
        if !session.is_over {
            display::print_game_state(&session.game_state);
        }
        Ok(())
    }

    fn hint(&mut self) -> error::Returns<()> {
        let word_list = Arc::clone(&self.word_list);
        let session = self.game_session()?;
        let rack = session.game_state.current_player().rack.clone();
        let board_snapshot = session.game_state.board_snapshot(&*word_list);
        let ranked = move_picker::MovePicker::new(move_picker::Difficulty::Hard).rank(&board_snapshot, rack.tiles());
        if ranked.is_empty() {
            println!("no move, exchange or pass");
        }
        for m in ranked.iter().take(5) {
            println!("{:6.1} {}", m.equity, m.play);
        }
        Ok(())
    }

    fn new_puzzle(&mut self, mode: seeder::SeedMode) -> error::Returns<()> {
        let board_seeder = seeder::BoardSeeder::new(self.game_config, &*self.word_list, mode);
        let puzzle = board_seeder.seed(None, &mut self.rng)?;
        self.session = Session::Puzzle(puzzle::PuzzleGame::new(puzzle));
        self.show()
    }

    fn try_answer(&mut self, pos: &str, word: &str) -> error::Returns<()> {
        let alphabet = self.game_config.alphabet();
        let game = match &mut self.session {
            Session::Puzzle(game) => game,
            _ => {
                return_error!("no puzzle, try puzzle".into());
            }
        };
        let board = board::Board::from_tiles(&game.puzzle.board)?;
        let tiles = display::parse_placement(alphabet, &board, pos, word)?;
        match game.submit(&tiles) {
            puzzle::Submission::Found { index, score } => {
                println!("#{} for {}, {} of {} found", index + 1, score, game.num_found(), game.puzzle.top_moves.len());
                if game.is_over() {
                    println!("all found, total {}", game.total_score);
                }
            }
            puzzle::Submission::AlreadyFound { index } => println!("already found #{}", index + 1),
            puzzle::Submission::NotInList => println!("not one of the top {}", game.puzzle.top_moves.len()),
        }
        Ok(())
    }

    fn show(&self) -> error::Returns<()> {
        match &self.session {
            Session::Idle => println!("nothing yet, try new or puzzle"),
            Session::Game(session) => display::print_game_state(&session.game_state),
            Session::Puzzle(game) => {
                let board = board::Board::from_tiles(&game.puzzle.board)?;
                display::print_board(self.game_config.board_layout(), &board);
                println!(
                    "rack: {}, found {} of {}, total {}",
                    tile::Rack(game.puzzle.rack.clone()),
                    game.num_found(),
                    game.puzzle.top_moves.len(),
                    game.total_score
                );
            }
        }
        Ok(())
    }

    fn run(&mut self, strings: &[String]) -> error::Returns<()> {
        let arg = |i: usize| strings.get(i).map(String::as_str);
        match (strings[0].as_str(), arg(1), arg(2)) {
            ("new", difficulty, _) => {
                let difficulty = difficulty.map_or(Ok(move_picker::Difficulty::Medium), str::parse)?;
                self.new_game(difficulty);
            }
            ("play", Some(pos), Some(word)) => {
                let tiles = {
                    let session = self.game_session()?;
                    display::parse_placement(
                        session.game_state.game_config.alphabet(),
                        &session.game_state.board,
                        pos,
                        word,
                    )?
                };
                self.human_play(&game_state::Play::Place { tiles })?;
            }
            ("exch", Some(letters), _) => {
                let tiles = self.game_config.alphabet().parse_tiles(&letters.to_ascii_uppercase())?;
                self.human_play(&game_state::Play::Exchange { tiles })?;
            }
            ("pass", _, _) => self.human_play(&game_state::Play::Pass)?,
            ("hint", _, _) => self.hint()?,
            ("show", _, _) => self.show()?,
            ("puzzle", mode, _) => {
                let mode = mode.map_or(Ok(seeder::SeedMode::Heavy), str::parse)?;
                self.new_puzzle(mode)?;
            }
            ("try", Some(pos), Some(word)) => self.try_answer(pos, word)?,
            ("clue", _, _) => match &mut self.session {
                Session::Puzzle(game) => match game.reveal_hint() {
                    Some(hint) => println!("{}", hint),
                    None => println!("nothing left to find"),
                },
                _ => println!("no puzzle, try puzzle"),
            },
            _ => println!("invalid input, help for help"),
        }
        Ok(())
    }
}

pub fn main() -> error::Returns<()> {
    logging::init(None)?;
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 1 {
        return Err("usage: shell WORDLIST".into());
    }
    let game_config = Arc::new(game_config::make_english_game_config());
    let mut shell = Shell {
        game_config: &game_config,
        word_list: Arc::new(dictionary::WordList::from_file(&args[1])?),
        runtime: tokio::runtime::Runtime::new()?,
        rng: rand_chacha::ChaCha20Rng::from_os_rng(),
        session: Session::Idle,
    };
    let mut rl = rustyline::DefaultEditor::new()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if !strings.is_empty() {
                        match strings[0].as_str() {
                            "help" => {
                                println!("{}", HELP);
                            }
                            "exit" => {
                                break;
                            }
                            "source" => {
                                if strings.len() > 1 {
                                    match std::fs::read_to_string(&strings[1]) {
                                        Ok(whole_file) => {
                                            let v = cmd_stack.len();
                                            for (line_num, line) in whole_file.lines().enumerate() {
                                                cmd_stack.push((
                                                    line.to_string(),
                                                    Some((strings[1].clone(), line_num + 1)),
                                                ));
                                            }
                                            cmd_stack[v..].reverse();
                                        }
                                        Err(err) => {
                                            println!("cannot open file: {:?}", err);
                                        }
                                    }
                                } else {
                                    println!("need another arg");
                                }
                            }
                            _ => {
                                if let Err(err) = shell.run(&strings) {
                                    println!("{}", err);
                                }
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
