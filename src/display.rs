// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, board_layout, error, game_state, matrix, tile};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, row: i8, col: i8) -> char {
    match board_layout.square_at(row, col) {
        board_layout::Square::Star => '*',
        board_layout::Square::TripleWord => '=',
        board_layout::Square::DoubleWord => '-',
        board_layout::Square::TripleLetter => '"',
        board_layout::Square::DoubleLetter => '\'',
        board_layout::Square::Plain => ' ',
    }
}

#[inline(always)]
pub fn board_label(board_layout: &board_layout::BoardLayout, board: &board::Board, row: i8, col: i8) -> char {
    board
        .get(row, col)
        .map_or_else(|| empty_label(board_layout, row, col), |t| t.label())
}

fn write_col_labels(s: &mut String, cols: i8) {
    s.push_str("  ");
    for c in 0..cols {
        s.push(' ');
        s.push(((c as u8) + b'a') as char);
    }
    s.push('\n');
}

fn write_rule(s: &mut String, cols: i8) {
    s.push_str("  +");
    for _ in 1..cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

pub fn render_board(board_layout: &board_layout::BoardLayout, board: &board::Board) -> String {
    let dim = board_layout.dim();
    let mut s = String::new();
    write_col_labels(&mut s, dim.cols);
    write_rule(&mut s, dim.cols);
    for r in 0..dim.rows {
        let _ = write!(s, "{:2}|", r + 1);
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            s.push(board_label(board_layout, board, r, c));
        }
        let _ = writeln!(s, "|{}", r + 1);
    }
    write_rule(&mut s, dim.cols);
    write_col_labels(&mut s, dim.cols);
    s
}

pub fn print_board(board_layout: &board_layout::BoardLayout, board: &board::Board) {
    print!("{}", render_board(board_layout, board));
}

pub fn print_game_state(game_state: &game_state::GameState<'_>) {
    print_board(game_state.game_config.board_layout(), &game_state.board);
    for (i, player) in game_state.players.iter().enumerate() {
        println!(
            "{}{} {:4} {}",
            if i == game_state.turn as usize { '>' } else { ' ' },
            i + 1,
            player.score,
            player.rack
        );
    }
    println!("bag: {} tiles", game_state.bag.len());
}

// "8g" runs across from row 8 column g, "g8" runs down. either case is accepted.
pub fn parse_position(s: &str) -> Option<(i8, i8, matrix::Direction)> {
    let s = s.trim();
    let split = s.find(|c: char| c.is_ascii_alphabetic())?;
    let (row_str, col_str, direction) = if split == 0 {
        (&s[1..], &s[..1], matrix::Direction::Vertical)
    } else {
        (&s[..split], &s[split..], matrix::Direction::Horizontal)
    };
    let mut col_chars = col_str.chars();
    let col = match (col_chars.next(), col_chars.next()) {
        (Some(c), None) => (c.to_ascii_lowercase() as u8).wrapping_sub(b'a') as i8,
        _ => return None,
    };
    let row = row_str.parse::<i8>().ok()?.checked_sub(1)?;
    board::Board::in_bounds(row, col).then_some((row, col, direction))
}

// '.' plays through the tile already there. lowercase letters are blanks.
pub fn parse_placement(
    alphabet: &alphabet::Alphabet<'_>,
    board: &board::Board,
    pos: &str,
    word: &str,
) -> error::Returns<Vec<tile::PlacedTile>> {
    let (mut row, mut col, direction) = match parse_position(pos) {
        Some(x) => x,
        None => {
            return_error!(format!("invalid position {:?}", pos));
        }
    };
    let (dr, dc) = direction.step();
    let mut tiles = Vec::with_capacity(word.len());
    for c in word.chars() {
        if !board::Board::in_bounds(row, col) {
            return_error!(format!("{} runs off the board", word));
        }
        if c == '.' {
            if !board.is_occupied(row, col) {
                return_error!(format!("nothing to play through at {},{}", row, col));
            }
        } else {
            for t in alphabet.parse_tiles(&c.to_string())? {
                if t.needs_letter() {
                    return_error!("a blank needs a letter, type it in lowercase".into());
                }
                tiles.push(t.at(row, col));
            }
        }
        row += dr;
        col += dc;
    }
    Ok(tiles)
}
