// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub letter_multiplier: i8,
}

static TWS: Premium = Premium { word_multiplier: 3, letter_multiplier: 1 };
static DWS: Premium = Premium { word_multiplier: 2, letter_multiplier: 1 };
static TLS: Premium = Premium { word_multiplier: 1, letter_multiplier: 3 };
static DLS: Premium = Premium { word_multiplier: 1, letter_multiplier: 2 };
static FVS: Premium = Premium { word_multiplier: 1, letter_multiplier: 1 };

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Square {
    TripleWord,
    DoubleWord,
    TripleLetter,
    DoubleLetter,
    Star,
    Plain,
}

pub struct StaticBoardLayout<'a> {
    premiums: &'a [Premium],
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

pub enum BoardLayout<'a> {
    Static(StaticBoardLayout<'a>),
}

impl<'a> BoardLayout<'a> {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            BoardLayout::Static(x) => x.dim,
        }
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_row,
        }
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_col,
        }
    }

    #[inline(always)]
    pub fn premiums(&self) -> &'a [Premium] {
        match self {
            BoardLayout::Static(x) => x.premiums,
        }
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums()[self.dim().at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn is_star(&self, row: i8, col: i8) -> bool {
        row == self.star_row() && col == self.star_col()
    }

    pub fn square_at(&self, row: i8, col: i8) -> Square {
        if self.is_star(row, col) {
            return Square::Star;
        }
        let premium = self.premium_at(row, col);
        match (premium.word_multiplier, premium.letter_multiplier) {
            (3, _) => Square::TripleWord,
            (2, _) => Square::DoubleWord,
            (_, 3) => Square::TripleLetter,
            (_, 2) => Square::DoubleLetter,
            _ => Square::Plain,
        }
    }
}

// the star counts as a double word.
static CLASSIC_PREMIUMS: &[Premium] = &[
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
];

pub static CLASSIC_BOARD_LAYOUT: BoardLayout<'static> = BoardLayout::Static(StaticBoardLayout {
    premiums: CLASSIC_PREMIUMS,
    dim: matrix::Dim { rows: 15, cols: 15 },
    star_row: 7,
    star_col: 7,
});
