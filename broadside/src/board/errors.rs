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
//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{
    board::{
        dimensions::{MAX_CELLS, MIN_DIMENSION},
        Coordinate,
    },
    ships::{Vessel, VesselError},
};

/// Error returned when board dimensions are unusable.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum DimensionError {
    /// Not enough rows.
    #[error("board must have more than {} rows, got {rows}", MIN_DIMENSION)]
    TooFewRows { rows: usize },
    /// Not enough columns.
    #[error("board must have more than {} cols, got {cols}", MIN_DIMENSION)]
    TooFewCols { cols: usize },
    /// The board has more cells than [`MAX_CELLS`](crate::board::MAX_CELLS).
    #[error("board too large: {rows} * {cols} cells, at most {} allowed", MAX_CELLS)]
    TooLarge { rows: usize, cols: usize },
}

/// Reason why a vessel could not be added to the board.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The vessel has not been given any coordinates yet.
    #[error("vessel has not been placed")]
    Unplaced,
    /// One of the vessel's coordinates lies outside the board.
    #[error("vessel must be within the board, {0} is outside")]
    OutOfBounds(Coordinate),
    /// One of the vessel's coordinates is already occupied by a vessel on the board.
    #[error("vessel overlaps previous vessel {name} (index {index}) at {coord}")]
    Overlaps {
        /// Index of the vessel already occupying the cell.
        index: usize,
        /// Name of the vessel already occupying the cell.
        name: String,
        /// The contested cell.
        coord: Coordinate,
    },
    /// No straight line in the requested directions fits on the board.
    #[error("no space left on the board for the vessel")]
    NoSpace,
    /// The vessel rejected the coordinates it was given.
    #[error("{0}")]
    Vessel(VesselError),
}

/// Error caused when attempting to add a vessel in an invalid position. The rejected
/// vessel is handed back so the caller can re-place it and try again.
#[derive(Error)]
#[error("could not place vessel {:?}: {reason}", .vessel.name())]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    vessel: Vessel,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected vessel.
    pub(super) fn new(reason: CannotPlaceReason, vessel: Vessel) -> Self {
        Self { reason, vessel }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> &CannotPlaceReason {
        &self.reason
    }

    /// Get a reference to the vessel whose placement was rejected.
    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    /// Extract the rejected vessel from this error.
    pub fn into_vessel(self) -> Vessel {
        self.vessel
    }
}

/// Reason why a particular cell could not be fired at.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("the target coordinate is outside the board")]
    OutOfBounds,

    /// A shot has already been fired at that cell.
    #[error("the target cell was already shot")]
    RedundantShot,
}

/// Error returned when trying to fire at a cell.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not fire at {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be fired at.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,

    /// Index of the vessel that was already struck at the cell, if any.
    vessel: Option<usize>,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self {
            reason,
            coord,
            vessel: None,
        }
    }

    /// Construct the error for a repeat shot on a segment of the vessel at `index`.
    pub(super) fn repeated_hit(coord: Coordinate, index: usize) -> Self {
        Self {
            reason: CannotShootReason::RedundantShot,
            coord,
            vessel: Some(index),
        }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the targeted cell.
    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }

    /// For a redundant shot on a vessel, the index of that vessel.
    pub fn vessel(&self) -> Option<usize> {
        self.vessel
    }
}
