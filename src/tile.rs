// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;

// letter carried by a blank that has not been assigned yet
pub const BLANK_LETTER: char = '?';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Tile {
    pub letter: char,
    pub points: u8,
    #[serde(default)]
    pub is_blank: bool,
}

impl Tile {
    #[inline(always)]
    pub fn new(letter: char, points: u8) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            points,
            is_blank: false,
        }
    }

    #[inline(always)]
    pub fn blank() -> Self {
        Self {
            letter: BLANK_LETTER,
            points: 0,
            is_blank: true,
        }
    }

    // blanks stay worth zero whatever they stand for.
    #[inline(always)]
    pub fn assigned(self, letter: char) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            points: if self.is_blank { 0 } else { self.points },
            is_blank: self.is_blank,
        }
    }

    #[inline(always)]
    pub fn needs_letter(&self) -> bool {
        self.is_blank && self.letter == BLANK_LETTER
    }

    #[inline(always)]
    pub fn face_value(&self) -> u8 {
        if self.is_blank { 0 } else { self.points }
    }

    #[inline(always)]
    pub fn at(self, row: i8, col: i8) -> PlacedTile {
        PlacedTile {
            row,
            col,
            tile: self,
        }
    }

    // true if this rack tile can be the one that got played as `played`.
    #[inline(always)]
    pub fn matches_played(&self, played: &Tile) -> bool {
        if played.is_blank {
            self.is_blank
        } else {
            !self.is_blank && self.letter == played.letter && self.points == played.points
        }
    }

    // lowercase for blanks, like a printed scoresheet.
    #[inline(always)]
    pub fn label(&self) -> char {
        if self.is_blank {
            self.letter.to_ascii_lowercase()
        } else {
            self.letter
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PlacedTile {
    pub row: i8,
    pub col: i8,
    #[serde(flatten)]
    pub tile: Tile,
}

impl PlacedTile {
    #[inline(always)]
    pub fn letter(&self) -> char {
        self.tile.letter
    }

    #[inline(always)]
    pub fn pos(&self) -> (i8, i8) {
        (self.row, self.col)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Rack(pub Vec<Tile>);

impl Rack {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    pub fn total_points(&self) -> i16 {
        self.0.iter().map(|t| t.face_value() as i16).sum()
    }

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    // what is left on the rack after these tiles are played.
    // played tiles that are not on the rack are ignored.
    pub fn leave(&self, played: &[PlacedTile]) -> Rack {
        let mut remaining = self.0.clone();
        for placed in played {
            if let Some(pos) = remaining.iter().position(|t| t.matches_played(&placed.tile)) {
                remaining.remove(pos);
            }
        }
        Rack(remaining)
    }

    // like leave(), but every played tile must come from the rack.
    pub fn use_tiles(&mut self, played: &[Tile]) -> Result<(), &'static str> {
        for tile in played {
            let pos = self
                .0
                .iter()
                .rposition(|t| t.matches_played(tile))
                .ok_or("bad tile")?;
            self.0.swap_remove(pos);
        }
        Ok(())
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for t in &self.0 {
            write!(f, "{}", if t.needs_letter() { BLANK_LETTER } else { t.label() })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_stays_zero() {
        let t = Tile::blank().assigned('z');
        assert_eq!(t.letter, 'Z');
        assert_eq!(t.points, 0);
        assert_eq!(t.face_value(), 0);
        assert_eq!(t.label(), 'z');
        assert!(!t.needs_letter());
        assert!(Tile::blank().needs_letter());
    }

    #[test]
    fn test_leave_removes_blank_by_blankness() {
        let rack = Rack(vec![
            Tile::new('A', 1),
            Tile::blank(),
            Tile::new('Q', 10),
            Tile::new('A', 1),
        ]);
        let played = [
            Tile::blank().assigned('E').at(7, 7),
            Tile::new('A', 1).at(7, 8),
        ];
        let leave = rack.leave(&played);
        assert_eq!(leave.0, vec![Tile::new('Q', 10), Tile::new('A', 1)]);
        assert_eq!(leave.total_points(), 11);
    }

    #[test]
    fn test_use_tiles_rejects_missing() {
        let mut rack = Rack(vec![Tile::new('A', 1), Tile::new('B', 3)]);
        assert!(rack.use_tiles(&[Tile::new('B', 3)]).is_ok());
        assert_eq!(rack.len(), 1);
        assert_eq!(rack.use_tiles(&[Tile::new('Z', 10)]), Err("bad tile"));
    }

    #[test]
    fn test_placed_tile_json_is_flat() {
        let p = Tile::new('C', 3).at(7, 6);
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(v["row"], 7);
        assert_eq!(v["letter"], "C");
        assert_eq!(v["points"], 3);
        let back: PlacedTile = serde_json::from_str(r#"{"row":1,"col":2,"letter":"Q","points":10}"#).unwrap();
        assert!(!back.tile.is_blank);
        assert_eq!(back.pos(), (1, 2));
    }
}
