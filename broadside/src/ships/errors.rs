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
//! Errors raised by [`Vessel`][crate::ships::Vessel] and its parsers.

use thiserror::Error;

use crate::board::{Coordinate, MAX_CELLS};

/// Error returned by operations on a single vessel.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum VesselError {
    /// The number of coordinates given does not match the vessel's length.
    #[error("vessel {name:?} expects {expected} coordinates, received {actual}")]
    IncorrectLength {
        name: String,
        expected: usize,
        actual: usize,
    },
    /// The same coordinate was listed more than once.
    #[error("vessel {name:?} was given {coord} more than once")]
    RepeatedCoordinate { name: String, coord: Coordinate },
    /// The segment at this coordinate had already been hit.
    #[error("vessel {name:?} already hit at {coord}")]
    DuplicateHit { name: String, coord: Coordinate },
    /// The coordinate is not on this vessel.
    #[error("coordinate {coord} is not on vessel {name:?}")]
    InvalidCoordinate { name: String, coord: Coordinate },
    /// Board symbols must be a single character.
    #[error("board symbol must be a single character, got {0:?}")]
    InvalidSymbol(String),
    /// Vessels need at least one segment.
    #[error("vessel length must be at least 1")]
    ZeroLength,
    /// The vessel could not fit on any board.
    #[error("vessel length {length} exceeds the largest board of {} cells", MAX_CELLS)]
    TooLong { length: usize },
}

/// Error returned when a vessel class name is not in the table.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown vessel class {0:?}")]
pub struct UnknownClassError(String);

impl UnknownClassError {
    pub(super) fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    /// The name that was not recognized.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Error returned when text does not name a direction.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid direction {0:?}, choose up, down, left or right")]
pub struct ParseDirectionError(String);

impl ParseDirectionError {
    pub(super) fn new(input: &str) -> Self {
        Self(input.to_owned())
    }
}
