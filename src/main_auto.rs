// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use tilebot::{dictionary, error, game_config, game_state, logging, move_picker};

// omits 01IOl
static BASE57: &[u8; 57] = b"\
23456789\
ABCDEFGHJKLMNPQRSTUVWXYZ\
abcdefghijkmnopqrstuvwxyz\
";

const GAME_ID_LEN: usize = 8;

enum CSVRow<T1, T2> {
    Log(T1),
    Game(T2),
}

struct SerializeArc<T>(std::sync::Arc<T>);

impl<T: serde::Serialize> serde::Serialize for SerializeArc<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (*self.0).serialize(serializer)
    }
}

fn usage() -> error::BoxAnyError {
    "usage: auto WORDLIST [NUM_GAMES] [P1_DIFFICULTY] [P2_DIFFICULTY]".into()
}

pub fn main() -> error::Returns<()> {
    logging::init(None)?;
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 1 {
        return Err(usage());
    }
    let word_list = std::sync::Arc::new(dictionary::WordList::from_file(&args[1])?);
    let num_games = match args.get(2) {
        Some(s) => s.parse::<usize>().map_err(|_| usage())?,
        None => 100,
    };
    let difficulties = std::sync::Arc::new([
        args.get(3).map_or(Ok(move_picker::Difficulty::Hard), |s| s.parse())?,
        args.get(4).map_or(Ok(move_picker::Difficulty::Easy), |s| s.parse())?,
    ]);
    let game_config = std::sync::Arc::new(game_config::make_english_game_config());
    let player_aliases = std::sync::Arc::new(
        difficulties
            .iter()
            .enumerate()
            .map(|(i, d)| std::sync::Arc::new(format!("p{}-{}", i + 1, d)))
            .collect::<Box<[_]>>(),
    );
    let num_threads = num_cpus::get();
    let num_processed_games = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let mut threads = vec![];
    let (tx, rx) = std::sync::mpsc::channel();
    for _ in 0..num_threads {
        let tx = tx.clone();
        let game_config = std::sync::Arc::clone(&game_config);
        let word_list = std::sync::Arc::clone(&word_list);
        let difficulties = std::sync::Arc::clone(&difficulties);
        let player_aliases = std::sync::Arc::clone(&player_aliases);
        let num_processed_games = std::sync::Arc::clone(&num_processed_games);
        threads.push(std::thread::spawn(move || {
            let mut rng = rand_chacha::ChaCha20Rng::from_os_rng();
            let mut move_pickers = difficulties
                .iter()
                .map(|&d| move_picker::MovePicker::new(d))
                .collect::<Vec<_>>();
            let mut game_state = game_state::GameState::new(&game_config);
            let num_players = game_state.players.len();
            let mut num_bingos = vec![0u16; num_players];
            let mut game_id = String::with_capacity(GAME_ID_LEN);
            loop {
                if num_processed_games.fetch_add(1, std::sync::atomic::Ordering::SeqCst) >= num_games {
                    num_processed_games.fetch_sub(1, std::sync::atomic::Ordering::Relaxed);
                    break;
                }

                game_id.clear();
                for _ in 0..GAME_ID_LEN {
                    game_id.push(BASE57[rng.random_range(0..BASE57.len())] as char);
                }
                let game_id = std::sync::Arc::new(game_id.clone());
                num_bingos.iter_mut().for_each(|m| *m = 0);
                game_state.reset_and_draw_tiles(&mut rng);
                let went_first = rng.random_range(0..num_players as u8);
                game_state.turn = went_first;
                let mut num_moves = 0u32;
                loop {
                    num_moves += 1;
                    let old_turn = game_state.turn as usize;
                    let cur_rack = game_state.current_player().rack.clone();
                    let old_bag_len = game_state.bag.len();

                    let picked = move_pickers[old_turn].pick_a_move(
                        &game_state.board_snapshot(&*word_list),
                        cur_rack.tiles(),
                        &mut rng,
                    );
                    let (play, play_fmt, leave, equity) = match &picked {
                        Some(m) => {
                            if m.play.num_tiles() >= game_config.rack_size() as usize {
                                num_bingos[old_turn] += 1;
                            }
                            (
                                game_state::Play::from(&m.play),
                                m.play.to_string(),
                                cur_rack.leave(&m.play.placed_tiles),
                                m.equity,
                            )
                        }
                        None if !cur_rack.is_empty() && old_bag_len >= cur_rack.len() => (
                            game_state::Play::Exchange {
                                tiles: cur_rack.0.clone(),
                            },
                            format!("(exch {})", cur_rack),
                            Default::default(),
                            0.0,
                        ),
                        None => (game_state::Play::Pass, "(Pass)".into(), cur_rack.clone(), 0.0),
                    };
                    let play_score = match game_state.play(&*word_list, &mut rng, &play) {
                        Ok(score) => score,
                        Err(e) => {
                            log::error!("game {}: {} rejected: {}", game_id, play_fmt, e);
                            break;
                        }
                    };
                    game_state.next_turn();

                    let game_over = game_state.is_over(game_state.nobody_placed());
                    if game_over {
                        game_state.finish();
                    }
                    let row = CSVRow::Log((
                        SerializeArc(std::sync::Arc::clone(&player_aliases[old_turn])),
                        SerializeArc(std::sync::Arc::clone(&game_id)),
                        num_moves,
                        cur_rack.to_string(),
                        play_fmt,
                        play_score,
                        game_state.players[old_turn].score,
                        leave.to_string(),
                        format!("{:.3}", equity),
                        old_bag_len,
                        game_state.players[game_state.turn as usize].score,
                    ));
                    if tx.send(row).is_err() {
                        return;
                    }
                    if game_over {
                        let row = CSVRow::Game((
                            SerializeArc(std::sync::Arc::clone(&game_id)),
                            game_state.players.iter().map(|p| p.score).collect::<Vec<_>>(),
                            num_bingos.clone(),
                            SerializeArc(std::sync::Arc::clone(&player_aliases[went_first as usize])),
                        ));
                        if tx.send(row).is_err() {
                            return;
                        }
                        break;
                    }
                }
            }
        }));
    }
    drop(tx);

    let run_identifier = format!("log-{:08x}", chrono::Utc::now().timestamp());
    println!("logging to {}", run_identifier);
    let mut csv_log = csv::Writer::from_path(&run_identifier)?;
    let mut csv_game = csv::Writer::from_path(format!("games-{}", run_identifier))?;
    csv_log.serialize((
        "playerID",
        "gameID",
        "turn",
        "rack",
        "play",
        "score",
        "totalscore",
        "leave",
        "equity",
        "tilesremaining",
        "oppscore",
    ))?;
    csv_game.serialize((
        "gameID",
        player_aliases
            .iter()
            .map(|x| format!("{}_score", x))
            .collect::<Box<[_]>>(),
        player_aliases
            .iter()
            .map(|x| format!("{}_bingos", x))
            .collect::<Box<[_]>>(),
        "first",
    ))?;
    let mut completed_games = 0u64;
    let mut completed_moves = 0u64;
    let t0 = std::time::Instant::now();
    let mut last_tick_secs = 0;
    for row in rx.iter() {
        match row {
            CSVRow::Log(r) => {
                csv_log.serialize(r)?;
                completed_moves += 1;
            }
            CSVRow::Game(r) => {
                csv_game.serialize(r)?;
                completed_games += 1;
                let elapsed_secs = t0.elapsed().as_secs();
                if elapsed_secs > last_tick_secs {
                    last_tick_secs = elapsed_secs;
                    println!(
                        "After {} seconds, have logged {} games ({} moves) into {}",
                        elapsed_secs, completed_games, completed_moves, run_identifier
                    );
                }
            }
        }
    }
    csv_log.flush()?;
    csv_game.flush()?;
    println!(
        "After {} seconds, have logged {} games ({} moves) into {}",
        t0.elapsed().as_secs(),
        completed_games,
        completed_moves,
        run_identifier
    );

    for thread in threads {
        if let Err(e) = thread.join() {
            println!("{:?}", e);
        }
    }

    Ok(())
}
