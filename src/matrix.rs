// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    #[serde(rename = "H")]
    Horizontal,
    #[serde(rename = "V")]
    Vertical,
}

impl Direction {
    #[inline(always)]
    pub fn other(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    // (row, col) step along this direction
    #[inline(always)]
    pub fn step(self) -> (i8, i8) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }
}

// a row or a column of a flat buffer.
#[derive(Clone, Copy)]
pub struct Strider {
    base: i16,
    step: i8,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: (row as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: col as i16,
            step: self.cols,
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn lane(&self, direction: Direction, lane: i8) -> Strider {
        match direction {
            Direction::Horizontal => self.across(lane),
            Direction::Vertical => self.down(lane),
        }
    }

    #[inline(always)]
    pub fn num_lanes(&self, direction: Direction) -> i8 {
        match direction {
            Direction::Horizontal => self.rows,
            Direction::Vertical => self.cols,
        }
    }

    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        (0..self.rows).contains(&row) && (0..self.cols).contains(&col)
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn row_col(&self, idx: usize) -> (i8, i8) {
        ((idx / self.cols as usize) as i8, (idx % self.cols as usize) as i8)
    }

    #[inline(always)]
    pub fn area(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_striders_address_flat_buffer() {
        let dim = Dim { rows: 15, cols: 15 };
        assert_eq!(dim.across(7).at(6), dim.at_row_col(7, 6));
        assert_eq!(dim.down(6).at(7), dim.at_row_col(7, 6));
        assert_eq!(dim.row_col(dim.at_row_col(3, 14)), (3, 14));
        assert!(dim.contains(14, 0));
        assert!(!dim.contains(15, 0));
        assert!(!dim.contains(0, -1));
    }
}
