// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Coordinates of cells on the board.
use std::{convert::TryFrom, fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::ships::Direction;

/// Matches `r,c`, `r c` and `(r, c)`, with optional signs on either component.
static COORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)\(?\s*
        (?P<row>[+-]?[0-9]+)(?:\s*,\s*|\s+)
        (?P<col>[+-]?[0-9]+)
        \s*\)?$",
    )
    .expect("coordinate pattern is valid")
});

/// Error returned when a [`Coordinate`] could not be built from the given input.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid coordinate {input:?}: {reason}")]
pub struct CoordinateError {
    /// The input that was rejected, rendered as text.
    input: String,
    /// Short description of what was wrong with it.
    reason: &'static str,
}

impl CoordinateError {
    pub(crate) fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The input that was rejected.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the input was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Position of a cell on the board, addressed by row then column, 0-indexed.
///
/// Components are signed so that lines walking off the top or left edge of the board
/// can still be represented and rejected by bounds checks rather than wrapping.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    row: i64,
    col: i64,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Row of the cell.
    pub fn row(&self) -> i64 {
        self.row
    }

    /// Column of the cell.
    pub fn col(&self) -> i64 {
        self.col
    }

    /// The coordinate `steps` cells away from this one in `dir`.
    pub fn step(self, dir: Direction, steps: usize) -> Self {
        let (dr, dc) = dir.delta();
        let steps = i64::try_from(steps).unwrap_or(i64::MAX);
        Self {
            row: self.row.saturating_add(dr.saturating_mul(steps)),
            col: self.col.saturating_add(dc.saturating_mul(steps)),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i64, i64)> for Coordinate {
    /// Construct a [`Coordinate`] from a `(row, col)` pair.
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (i64, i64) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl TryFrom<&[i64]> for Coordinate {
    type Error = CoordinateError;

    /// Build a coordinate from a slice which must hold exactly a row and a column.
    fn try_from(parts: &[i64]) -> Result<Self, Self::Error> {
        match *parts {
            [row, col] => Ok(Self::new(row, col)),
            _ => Err(CoordinateError::new(
                format!("{:?}", parts),
                "expected exactly two components",
            )),
        }
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = COORD_PATTERN
            .captures(s.trim())
            .ok_or_else(|| CoordinateError::new(s, "expected a pair of integers"))?;
        let component = |name: &str| {
            captures[name]
                .parse::<i64>()
                .map_err(|_| CoordinateError::new(s, "component out of range"))
        };
        Ok(Self::new(component("row")?, component("col")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Coordinate::new(2, 3), Coordinate::from((2i64, 3i64)));
        assert_ne!(Coordinate::new(2, 3), Coordinate::new(3, 2));
    }

    #[test]
    fn parses_common_forms() {
        for text in &["2,3", "2, 3", " 2 3 ", "(2, 3)", "(2,3)"] {
            assert_eq!(text.parse::<Coordinate>(), Ok(Coordinate::new(2, 3)), "{}", text);
        }
        assert_eq!("-1,+4".parse::<Coordinate>(), Ok(Coordinate::new(-1, 4)));
    }

    #[test]
    fn rejects_malformed_text() {
        for text in &["", "2", "2,", "a,b", "2.5,3", "1,2,3", "99999999999999999999,0"] {
            assert!(text.parse::<Coordinate>().is_err(), "{:?} should not parse", text);
        }
    }

    #[test]
    fn slice_arity_is_checked() {
        assert_eq!(
            Coordinate::try_from(&[4i64, 5][..]),
            Ok(Coordinate::new(4, 5))
        );
        let err = Coordinate::try_from(&[1i64, 2, 3][..]).unwrap_err();
        assert_eq!(err.reason(), "expected exactly two components");
        assert!(Coordinate::try_from(&[7i64][..]).is_err());
    }

    #[test]
    fn steps_follow_direction() {
        let origin = Coordinate::new(2, 1);
        assert_eq!(origin.step(Direction::Right, 4), Coordinate::new(2, 5));
        assert_eq!(origin.step(Direction::Up, 3), Coordinate::new(-1, 1));
        assert_eq!(origin.step(Direction::Down, 0), origin);
    }
}
