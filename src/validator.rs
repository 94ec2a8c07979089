// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, tile};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum PlacementError {
    NoTilesPlaced,
    OutOfBounds,
    OccupiedSquare,
    DuplicateSquare,
    NotInLine,
    Gap,
    MissingCenter,
    NotConnected,
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PlacementError::NoTilesPlaced => "You must place at least one tile",
            PlacementError::OutOfBounds => "Tiles must be placed on the board",
            PlacementError::OccupiedSquare => "Cannot place tile on occupied square",
            PlacementError::DuplicateSquare => "Cannot place two tiles on the same square",
            PlacementError::NotInLine => "Tiles must be placed in a single row or column",
            PlacementError::Gap => "Gaps between new tiles must be filled by existing tiles",
            PlacementError::MissingCenter => "First move must cover the center square",
            PlacementError::NotConnected => "New tiles must be adjacent to existing tiles",
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: Vec<PlacementError>,
}

impl Validation {
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline(always)]
    pub fn has(&self, error: PlacementError) -> bool {
        self.errors.contains(&error)
    }

    // each kind is reported once, in check order.
    #[inline(always)]
    fn push(&mut self, error: PlacementError) {
        if !self.has(error) {
            self.errors.push(error);
        }
    }
}

// does not stop at the first problem.
pub fn validate(board: &board::Board, new_tiles: &[tile::PlacedTile]) -> Validation {
    let mut ret = Validation::default();
    if new_tiles.is_empty() {
        ret.push(PlacementError::NoTilesPlaced);
        return ret;
    }

    for (i, placed) in new_tiles.iter().enumerate() {
        if !board::Board::in_bounds(placed.row, placed.col) {
            ret.push(PlacementError::OutOfBounds);
        } else if board.is_occupied(placed.row, placed.col) {
            ret.push(PlacementError::OccupiedSquare);
        }
        if new_tiles[..i].iter().any(|p| p.pos() == placed.pos()) {
            ret.push(PlacementError::DuplicateSquare);
        }
    }

    let (first_row, first_col) = new_tiles[0].pos();
    let same_row = new_tiles.iter().all(|p| p.row == first_row);
    let same_col = new_tiles.iter().all(|p| p.col == first_col);
    if new_tiles.len() > 1 {
        if !same_row && !same_col {
            ret.push(PlacementError::NotInLine);
        } else {
            let is_new = |row: i8, col: i8| new_tiles.iter().any(|p| p.row == row && p.col == col);
            let gap_free = if same_row {
                let lo = new_tiles.iter().map(|p| p.col).min().unwrap_or(first_col);
                let hi = new_tiles.iter().map(|p| p.col).max().unwrap_or(first_col);
                (lo..=hi).all(|col| is_new(first_row, col) || board.is_occupied(first_row, col))
            } else {
                let lo = new_tiles.iter().map(|p| p.row).min().unwrap_or(first_row);
                let hi = new_tiles.iter().map(|p| p.row).max().unwrap_or(first_row);
                (lo..=hi).all(|row| is_new(row, first_col) || board.is_occupied(row, first_col))
            };
            if !gap_free {
                ret.push(PlacementError::Gap);
            }
        }
    }

    if board.is_empty() {
        if !new_tiles
            .iter()
            .any(|p| p.row == board::CENTER && p.col == board::CENTER)
        {
            ret.push(PlacementError::MissingCenter);
        }
    } else if !new_tiles
        .iter()
        .any(|p| board::Board::in_bounds(p.row, p.col) && board.has_neighbor(p.row, p.col))
    {
        ret.push(PlacementError::NotConnected);
    }

    ret
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::alphabet;

    fn placed(s: &str, row: i8, col: i8, horizontal: bool) -> Vec<tile::PlacedTile> {
        let alphabet = alphabet::make_english_alphabet();
        (0i8..)
            .zip(s.chars())
            .map(|(i, c)| {
                let t = alphabet.make_tile(c).unwrap();
                if horizontal {
                    t.at(row, col + i)
                } else {
                    t.at(row + i, col)
                }
            })
            .collect()
    }

    fn board_with_cat() -> board::Board {
        board::Board::from_tiles(&placed("CAT", 7, 6, true)).unwrap()
    }

    #[test]
    fn test_nothing_placed() {
        let v = validate(&board::Board::new(), &[]);
        assert!(!v.is_valid());
        assert_eq!(v.errors, vec![PlacementError::NoTilesPlaced]);
    }

    #[test]
    fn test_opening_move() {
        let board = board::Board::new();
        assert!(validate(&board, &placed("CAT", 7, 6, true)).is_valid());
        let v = validate(&board, &placed("CAT", 3, 3, true));
        assert_eq!(v.errors, vec![PlacementError::MissingCenter]);
        let v = validate(&board, &placed("CAT", 5, 7, false));
        assert!(v.is_valid());
    }

    #[test]
    fn test_single_blank_on_center() {
        let blank = tile::Tile::blank().assigned('A').at(7, 7);
        assert!(validate(&board::Board::new(), &[blank]).is_valid());
    }

    #[test]
    fn test_disconnected_tiles() {
        let board = board_with_cat();
        let mut tiles = placed("Q", 0, 0, true);
        tiles.extend(placed("Z", 0, 2, true));
        let v = validate(&board, &tiles);
        assert!(!v.is_valid());
        assert!(v.has(PlacementError::NotConnected));
        assert!(v.has(PlacementError::Gap));
        assert_eq!(
            PlacementError::NotConnected.to_string(),
            "New tiles must be adjacent to existing tiles"
        );
    }

    #[test]
    fn test_bridging_across_existing_tile() {
        let board = board::Board::from_tiles(&placed("P", 7, 7, true)).unwrap();
        let mut tiles = placed("N", 7, 6, true);
        tiles.extend(placed("E", 7, 8, true));
        assert!(validate(&board, &tiles).is_valid());
        let mut tiles = placed("N", 7, 5, true);
        tiles.extend(placed("E", 7, 8, true));
        assert_eq!(validate(&board, &tiles).errors, vec![PlacementError::Gap]);
    }

    #[test]
    fn test_all_errors_collected() {
        let board = board_with_cat();
        let mut tiles = placed("X", 7, 7, true);
        tiles.extend(placed("Y", 9, 9, true));
        tiles.extend(placed("Y", 9, 9, true));
        let v = validate(&board, &tiles);
        assert_eq!(
            v.errors,
            vec![
                PlacementError::OccupiedSquare,
                PlacementError::DuplicateSquare,
                PlacementError::NotInLine,
            ]
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let v = validate(&board_with_cat(), &placed("AB", 7, 14, true));
        assert!(v.has(PlacementError::OutOfBounds));
    }

    #[test]
    fn test_far_off_tiles_are_reported() {
        let board = board::Board::from_tiles(&placed("A", 7, 7, true)).unwrap();
        let v = validate(&board, &placed("B", 127, 0, true));
        assert_eq!(v.errors, vec![PlacementError::OutOfBounds, PlacementError::NotConnected]);
        let v = validate(&board, &placed("B", -128, -128, true));
        assert!(v.has(PlacementError::OutOfBounds));
        // just off the edge next to a tile does not count as a connection.
        let board = board::Board::from_tiles(&placed("A", 0, 7, true)).unwrap();
        let v = validate(&board, &placed("B", -1, 7, true));
        assert_eq!(v.errors, vec![PlacementError::OutOfBounds, PlacementError::NotConnected]);
    }

    #[test]
    fn test_hook_is_connected() {
        let v = validate(&board_with_cat(), &placed("S", 7, 9, true));
        assert!(v.is_valid());
        let v = validate(&board_with_cat(), &placed("AS", 8, 7, true));
        assert!(v.is_valid());
    }
}
