use crate::reversi::Direction;
use derive_more::{Constructor, Display, Error, From};
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A pair of `(row, col)` coordinates.
///
/// A [`Position`] is not necessarily on the board, coordinates are only checked against a
/// [`Board`][`crate::reversi::Board`] when a move is validated.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[derive(Arbitrary, Deserialize, Serialize)]
#[display(fmt = "({row}, {col})")]
pub struct Position {
    #[strategy(-2i32..10)]
    pub row: i32,
    #[strategy(-2i32..10)]
    pub col: i32,
}

impl Add<Direction> for Position {
    type Output = Self;

    #[inline(always)]
    fn add(self, d: Direction) -> Self::Output {
        let (dr, dc) = d.delta();
        Position::new(self.row + dr, self.col + dc)
    }
}

impl AddAssign<Direction> for Position {
    #[inline(always)]
    fn add_assign(&mut self, d: Direction) {
        *self = *self + d
    }
}

/// The reason why parsing [`Position`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParsePositionError {
    #[display(fmt = "expected two coordinates separated by a space or a comma")]
    #[from(ignore)]
    WrongArity,
    #[display(fmt = "failed to parse coordinate")]
    InvalidCoordinate(ParseIntError),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut coords = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty());

        match (coords.next(), coords.next(), coords.next()) {
            (Some(r), Some(c), None) => Ok(Position::new(r.parse()?, c.parse()?)),
            _ => Err(ParsePositionError::WrongArity),
        }
    }
}
