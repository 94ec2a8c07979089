// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, tile};
use rand::prelude::*;

pub struct Bag(pub Vec<tile::Tile>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles());
        for letter in alphabet.letters() {
            for _ in 0..letter.freq() {
                bag.push(tile::Tile::new(letter.label(), letter.score()));
            }
        }
        for _ in 0..alphabet.blank_freq() {
            bag.push(tile::Tile::blank());
        }
        Bag(bag)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    pub fn pop(&mut self) -> Option<tile::Tile> {
        self.0.pop()
    }

    pub fn replenish(&mut self, rack: &mut tile::Rack, rack_size: usize) {
        for _ in 0..rack_size.saturating_sub(rack.len()).min(self.0.len()) {
            if let Some(t) = self.pop() {
                rack.0.push(t);
            }
        }
    }

    // take out tiles that are known to be elsewhere (e.g. a fixed puzzle rack).
    // returns the tiles that were not found.
    pub fn remove_tiles(&mut self, tiles: &[tile::Tile]) -> Vec<tile::Tile> {
        let mut missing = Vec::new();
        for t in tiles {
            match self.0.iter().rposition(|x| x.matches_played(t)) {
                Some(pos) => {
                    self.0.remove(pos);
                }
                None => missing.push(*t),
            }
        }
        missing
    }

    // put back the tiles at random positions. keep the rest of the bag in the same order.
    // blanks go back unassigned.
    pub fn put_back(&mut self, rng: &mut dyn RngCore, tiles: &[tile::Tile]) {
        for t in tiles {
            let t = if t.is_blank { tile::Tile::blank() } else { *t };
            let pos = rng.random_range(0..=self.0.len());
            self.0.insert(pos, t);
        }
    }
}

impl Clone for Bag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_full_bag() {
        let bag = Bag::new(&alphabet::make_english_alphabet());
        assert_eq!(bag.len(), 100);
        assert_eq!(bag.0.iter().filter(|t| t.is_blank).count(), 2);
        assert_eq!(bag.0.iter().filter(|t| t.letter == 'E').count(), 12);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let alphabet = alphabet::make_english_alphabet();
        let mut a = Bag::new(&alphabet);
        let mut b = Bag::new(&alphabet);
        a.shuffle(&mut ChaCha20Rng::seed_from_u64(7));
        b.shuffle(&mut ChaCha20Rng::seed_from_u64(7));
        assert_eq!(a.0, b.0);
    }

    #[test]
    fn test_replenish_and_put_back() {
        let alphabet = alphabet::make_english_alphabet();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut bag = Bag::new(&alphabet);
        bag.shuffle(&mut rng);
        let mut rack = tile::Rack::default();
        bag.replenish(&mut rack, 7);
        assert_eq!(rack.len(), 7);
        assert_eq!(bag.len(), 93);
        let swapped = rack.0.drain(..3).collect::<Vec<_>>();
        bag.put_back(&mut rng, &swapped);
        assert_eq!(bag.len(), 96);
        bag.replenish(&mut rack, 7);
        assert_eq!(rack.len(), 7);
    }

    #[test]
    fn test_remove_tiles() {
        let alphabet = alphabet::make_english_alphabet();
        let mut bag = Bag::new(&alphabet);
        let q = alphabet.make_tile('Q').unwrap();
        assert!(bag.remove_tiles(&[q, tile::Tile::blank()]).is_empty());
        assert_eq!(bag.remove_tiles(&[q]), vec![q]);
        assert_eq!(bag.len(), 98);
    }
}
