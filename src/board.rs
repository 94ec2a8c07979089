// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, error, matrix, tile};

pub const BOARD_SIZE: i8 = 15;
pub const CENTER: i8 = 7;
pub const NUM_SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

pub const DIM: matrix::Dim = matrix::Dim {
    rows: BOARD_SIZE,
    cols: BOARD_SIZE,
};

static NEIGHBORS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// flat 15x15 occupancy, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<tile::Tile>; NUM_SQUARES],
    num_tiles: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
            num_tiles: 0,
        }
    }

    pub fn from_tiles(tiles: &[tile::PlacedTile]) -> error::Returns<Self> {
        let mut board = Self::new();
        board.place_all(tiles)?;
        Ok(board)
    }

    // one string per row, '.' or ' ' for empty squares, lowercase for blanks.
    pub fn from_rows(alphabet: &alphabet::Alphabet, rows: &[&str]) -> error::Returns<Self> {
        if rows.len() > BOARD_SIZE as usize {
            return_error!(format!("board: need at most {} rows, found {}", BOARD_SIZE, rows.len()));
        }
        let mut board = Self::new();
        for (row, line) in (0i8..).zip(rows.iter()) {
            if line.chars().count() > BOARD_SIZE as usize {
                return_error!(format!("board: row {} is too long", row));
            }
            for (col, c) in (0i8..).zip(line.chars()) {
                if c == '.' || c == ' ' {
                    continue;
                }
                let t = if c.is_ascii_lowercase() {
                    if alphabet.get(c).is_none() {
                        return_error!(format!("board: invalid blank {:?}", c));
                    }
                    tile::Tile::blank().assigned(c)
                } else {
                    match alphabet.make_tile(c) {
                        Some(t) => t,
                        None => {
                            return_error!(format!("board: invalid tile {:?}", c));
                        }
                    }
                };
                board.place(&t.at(row, col))?;
            }
        }
        Ok(board)
    }

    #[inline(always)]
    pub fn in_bounds(row: i8, col: i8) -> bool {
        DIM.contains(row, col)
    }

    #[inline(always)]
    pub fn get(&self, row: i8, col: i8) -> Option<&tile::Tile> {
        if Self::in_bounds(row, col) {
            self.squares[DIM.at_row_col(row, col)].as_ref()
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn at_index(&self, idx: usize) -> Option<&tile::Tile> {
        self.squares[idx].as_ref()
    }

    #[inline(always)]
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        self.get(row, col).is_some()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_tiles == 0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_tiles as usize
    }

    // any of the 4 orthogonal neighbors occupied. false for squares at the edge of i8.
    pub fn has_neighbor(&self, row: i8, col: i8) -> bool {
        NEIGHBORS.iter().any(|&(dr, dc)| {
            match (row.checked_add(dr), col.checked_add(dc)) {
                (Some(r), Some(c)) => self.is_occupied(r, c),
                _ => false,
            }
        })
    }

    pub fn place(&mut self, placed: &tile::PlacedTile) -> error::Returns<()> {
        if !Self::in_bounds(placed.row, placed.col) {
            return_error!(format!("square {},{} is off the board", placed.row, placed.col));
        }
        if placed.tile.needs_letter() {
            return_error!(format!("blank at {},{} has no letter", placed.row, placed.col));
        }
        let idx = DIM.at_row_col(placed.row, placed.col);
        if self.squares[idx].is_some() {
            return_error!(format!("square {},{} is occupied", placed.row, placed.col));
        }
        self.squares[idx] = Some(placed.tile);
        self.num_tiles += 1;
        Ok(())
    }

    pub fn place_all(&mut self, tiles: &[tile::PlacedTile]) -> error::Returns<()> {
        for placed in tiles {
            self.place(placed)?;
        }
        Ok(())
    }

    // the merged view used for scanning; later tiles win on collisions.
    pub(crate) fn overlay(&self, tiles: &[tile::PlacedTile]) -> Self {
        let mut merged = self.clone();
        for placed in tiles {
            if Self::in_bounds(placed.row, placed.col) {
                let square = &mut merged.squares[DIM.at_row_col(placed.row, placed.col)];
                if square.is_none() {
                    merged.num_tiles += 1;
                }
                *square = Some(placed.tile);
            }
        }
        merged
    }

    pub fn tiles(&self) -> Vec<tile::PlacedTile> {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, square)| {
                square.map(|t| {
                    let (row, col) = DIM.row_col(idx);
                    t.at(row, col)
                })
            })
            .collect()
    }

    // empty squares next to a tile, or the star on an empty board.
    pub fn anchors(&self, board_layout: &board_layout::BoardLayout) -> Vec<(i8, i8)> {
        if self.is_empty() {
            return vec![(board_layout.star_row(), board_layout.star_col())];
        }
        let mut anchors = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !self.is_occupied(row, col) && self.has_neighbor(row, col) {
                    anchors.push((row, col));
                }
            }
        }
        anchors
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let c = self.get(row, col).map_or('.', |t| t.label());
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_lookup() {
        let alphabet = alphabet::make_english_alphabet();
        let mut board = Board::new();
        assert!(board.is_empty());
        board.place(&alphabet.make_tile('C').unwrap().at(7, 6)).unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.get(7, 6).map(|t| t.letter), Some('C'));
        assert!(board.get(-1, 6).is_none());
        assert!(board.place(&alphabet.make_tile('A').unwrap().at(7, 6)).is_err());
        assert!(board.place(&alphabet.make_tile('A').unwrap().at(15, 0)).is_err());
        assert!(board.place(&tile::Tile::blank().at(0, 0)).is_err());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_from_rows() {
        let alphabet = alphabet::make_english_alphabet();
        let board = Board::from_rows(&alphabet, &["", "", "", "", "", "", "", "......CaT"]).unwrap();
        assert_eq!(board.len(), 3);
        let a = board.get(7, 7).unwrap();
        assert!(a.is_blank);
        assert_eq!(a.points, 0);
        assert_eq!(board.get(7, 8).unwrap().points, 1);
        assert_eq!(board.tiles().len(), 3);
        assert!(Board::from_rows(&alphabet, &["1"]).is_err());
    }

    #[test]
    fn test_anchors() {
        let alphabet = alphabet::make_english_alphabet();
        let layout = &board_layout::CLASSIC_BOARD_LAYOUT;
        assert_eq!(Board::new().anchors(layout), vec![(7, 7)]);
        let board = Board::from_rows(&alphabet, &["", "", "", "", "", "", "", ".......A"]).unwrap();
        let anchors = board.anchors(layout);
        assert_eq!(anchors, vec![(6, 7), (7, 6), (7, 8), (8, 7)]);
    }

    #[test]
    fn test_has_neighbor_at_extremes() {
        let alphabet = alphabet::make_english_alphabet();
        let board = Board::from_rows(&alphabet, &["A"]).unwrap();
        assert!(board.has_neighbor(0, 1));
        assert!(board.has_neighbor(-1, 0));
        assert!(!board.has_neighbor(i8::MAX, 0));
        assert!(!board.has_neighbor(i8::MIN, i8::MIN));
        assert!(!board.has_neighbor(0, i8::MAX));
    }

    #[test]
    fn test_overlay_leaves_board_untouched() {
        let alphabet = alphabet::make_english_alphabet();
        let board = Board::new();
        let merged = board.overlay(&[alphabet.make_tile('Q').unwrap().at(0, 0)]);
        assert!(board.is_empty());
        assert_eq!(merged.len(), 1);
    }
}
