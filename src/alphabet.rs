// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, tile};

pub struct Letter {
    label: char,
    freq: u8,
    score: u8,
    is_vowel: bool,
}

impl Letter {
    #[inline(always)]
    pub fn label(&self) -> char {
        self.label
    }

    #[inline(always)]
    pub fn freq(&self) -> u8 {
        self.freq
    }

    #[inline(always)]
    pub fn score(&self) -> u8 {
        self.score
    }

    #[inline(always)]
    pub fn is_vowel(&self) -> bool {
        self.is_vowel
    }
}

pub struct StaticAlphabet<'a> {
    letters: &'a [Letter],
    blank_freq: u8,
    // letters tried for a blank, most useful first
    blank_order: &'a [char],
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn letters(&self) -> &'a [Letter] {
        match self {
            Alphabet::Static(x) => x.letters,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.letters().len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn blank_freq(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.blank_freq,
        }
    }

    #[inline(always)]
    pub fn blank_order(&self) -> &'a [char] {
        match self {
            Alphabet::Static(x) => x.blank_order,
        }
    }

    #[inline(always)]
    pub fn get(&self, letter: char) -> Option<&'a Letter> {
        let letter = letter.to_ascii_uppercase();
        self.letters().iter().find(|x| x.label == letter)
    }

    #[inline(always)]
    pub fn score(&self, letter: char) -> Option<u8> {
        self.get(letter).map(|x| x.score)
    }

    #[inline(always)]
    pub fn is_vowel(&self, letter: char) -> bool {
        self.get(letter).is_some_and(|x| x.is_vowel)
    }

    pub fn num_tiles(&self) -> usize {
        self.letters().iter().map(|x| x.freq as usize).sum::<usize>() + self.blank_freq() as usize
    }

    pub fn make_tile(&self, letter: char) -> Option<tile::Tile> {
        self.get(letter).map(|x| tile::Tile::new(x.label, x.score))
    }

    // uppercase letters are tiles, '?' is an unassigned blank and lowercase
    // letters are blanks already assigned to that letter.
    pub fn parse_tiles(&self, s: &str) -> error::Returns<Vec<tile::Tile>> {
        let mut v = Vec::with_capacity(s.len());
        for c in s.chars() {
            if c == tile::BLANK_LETTER {
                v.push(tile::Tile::blank());
            } else if c.is_ascii_lowercase() {
                if self.get(c).is_none() {
                    return_error!(format!("invalid blank letter {:?}", c));
                }
                v.push(tile::Tile::blank().assigned(c));
            } else {
                match self.make_tile(c) {
                    Some(t) => v.push(t),
                    None => {
                        return_error!(format!("invalid tile {:?}", c));
                    }
                }
            }
        }
        Ok(v)
    }
}

static ENGLISH_LETTERS: &[Letter] = &[
    Letter { label: 'A', freq: 9, score: 1, is_vowel: true },
    Letter { label: 'B', freq: 2, score: 3, is_vowel: false },
    Letter { label: 'C', freq: 2, score: 3, is_vowel: false },
    Letter { label: 'D', freq: 4, score: 2, is_vowel: false },
    Letter { label: 'E', freq: 12, score: 1, is_vowel: true },
    Letter { label: 'F', freq: 2, score: 4, is_vowel: false },
    Letter { label: 'G', freq: 3, score: 2, is_vowel: false },
    Letter { label: 'H', freq: 2, score: 4, is_vowel: false },
    Letter { label: 'I', freq: 9, score: 1, is_vowel: true },
    Letter { label: 'J', freq: 1, score: 8, is_vowel: false },
    Letter { label: 'K', freq: 1, score: 5, is_vowel: false },
    Letter { label: 'L', freq: 4, score: 1, is_vowel: false },
    Letter { label: 'M', freq: 2, score: 3, is_vowel: false },
    Letter { label: 'N', freq: 6, score: 1, is_vowel: false },
    Letter { label: 'O', freq: 8, score: 1, is_vowel: true },
    Letter { label: 'P', freq: 2, score: 3, is_vowel: false },
    Letter { label: 'Q', freq: 1, score: 10, is_vowel: false },
    Letter { label: 'R', freq: 6, score: 1, is_vowel: false },
    Letter { label: 'S', freq: 4, score: 1, is_vowel: false },
    Letter { label: 'T', freq: 6, score: 1, is_vowel: false },
    Letter { label: 'U', freq: 4, score: 1, is_vowel: true },
    Letter { label: 'V', freq: 2, score: 4, is_vowel: false },
    Letter { label: 'W', freq: 2, score: 4, is_vowel: false },
    Letter { label: 'X', freq: 1, score: 8, is_vowel: false },
    Letter { label: 'Y', freq: 2, score: 4, is_vowel: false },
    Letter { label: 'Z', freq: 1, score: 10, is_vowel: false },
];

static ENGLISH_BLANK_ORDER: &[char] = &[
    'E', 'A', 'O', 'I', 'N', 'R', 'T', 'L', 'S', 'U', // common first
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'M', 'P', 'Q', 'V', 'W', 'X', 'Y', 'Z',
];

pub fn make_english_alphabet() -> Alphabet<'static> {
    Alphabet::Static(StaticAlphabet {
        letters: ENGLISH_LETTERS,
        blank_freq: 2,
        blank_order: ENGLISH_BLANK_ORDER,
    })
}
