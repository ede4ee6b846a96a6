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
//! Types that make up the game board.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::ships::{Health, Vessel};

use self::grid::Grid;
pub use self::{
    coordinate::{Coordinate, CoordinateError},
    dimensions::{Dimensions, MAX_CELLS, MIN_DIMENSION},
    errors::{CannotPlaceReason, CannotShootReason, DimensionError, PlaceError, ShotError},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod setup;

/// Reference to a particular cell on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CellRef {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Whether this cell has been fired at.
    fired: bool,

    /// Index of the vessel that occupies this cell, if any.
    vessel: Option<usize>,
}

impl CellRef {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }

    /// Whether this cell has been fired at previously.
    pub fn fired(&self) -> bool {
        self.fired
    }

    /// Index of the vessel that occupies this cell, if any.
    pub fn vessel(&self) -> Option<usize> {
        self.vessel
    }
}

/// Result of a shot on a single board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot landed in open water.
    Miss,
    /// The shot struck the vessel with the given index.
    Hit(usize),
}

impl ShotOutcome {
    /// Get the index of the vessel that was hit.
    pub fn vessel(&self) -> Option<usize> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(index) => Some(index),
        }
    }
}

/// Represents a single player's board: their vessels and their side of the ocean.
#[derive(Debug, Clone)]
pub struct Board {
    /// Name of the board, used in log output.
    name: String,

    /// Occupancy map of the vessels.
    grid: Grid,

    /// Vessels in the order they were added. A vessel's index here is its identity.
    vessels: Vec<Vessel>,

    /// Shots that landed in open water.
    water_shots: HashSet<Coordinate>,
}

impl Board {
    /// Create an empty board with the given [`Dimensions`].
    pub fn new(name: impl Into<String>, dim: Dimensions) -> Self {
        Self {
            name: name.into(),
            grid: Grid::new(dim),
            vessels: Vec::new(),
            water_shots: HashSet::new(),
        }
    }

    /// Create an empty board with `rows` rows and `cols` columns.
    pub fn with_size(
        name: impl Into<String>,
        rows: usize,
        cols: usize,
    ) -> Result<Self, DimensionError> {
        Ok(Self::new(name, Dimensions::new(rows, cols)?))
    }

    /// Name of this board.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Vessels on the board, in the order they were added.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Get the vessel with the given index, if it exists.
    pub fn get_vessel(&self, index: usize) -> Option<&Vessel> {
        self.vessels.get(index)
    }

    /// Coordinates of every shot that landed in open water.
    pub fn water_shots(&self) -> &HashSet<Coordinate> {
        &self.water_shots
    }

    /// Index of the vessel occupying `coord`, if any. Out of bounds cells are empty.
    pub fn occupant(&self, coord: &Coordinate) -> Option<usize> {
        self.grid.get(coord).flatten()
    }

    /// Number of cells occupied by vessels.
    pub fn occupied_cells(&self) -> usize {
        self.grid.occupied()
    }

    /// Get a reference to the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn get_coord(&self, coord: Coordinate) -> Option<CellRef> {
        let vessel = self.grid.get(&coord)?;
        let fired = match vessel {
            Some(index) => self.vessels[index]
                .segment_status(&coord)
                .map_or(false, |segment| segment.hit),
            None => self.water_shots.contains(&coord),
        };
        Some(CellRef {
            coord,
            fired,
            vessel,
        })
    }

    /// Get an iterator over the rows of the board. Each row is an iterator over the
    /// cells in that row.
    pub fn iter_cells(&self) -> impl Iterator<Item = impl Iterator<Item = CellRef> + '_> + '_ {
        self.dimensions().iter_coordinates().map(move |row| {
            row.filter_map(move |coord| self.get_coord(coord))
        })
    }

    /// Add a placed vessel to the board, returning its index.
    ///
    /// Every coordinate must be on the board and not occupied by an earlier vessel. The
    /// checks run against a trial copy of the occupancy map which is only committed
    /// once every coordinate passed, so a rejected vessel leaves the board unchanged.
    /// The rejected vessel is returned inside the error.
    pub fn add_vessel(&mut self, vessel: Vessel) -> Result<usize, PlaceError> {
        if !vessel.is_placed() {
            return Err(PlaceError::new(CannotPlaceReason::Unplaced, vessel));
        }
        let index = self.vessels.len();
        let mut trial = self.grid.clone();
        if let Err(reason) = self.mark_vessel(&mut trial, &vessel, index) {
            return Err(PlaceError::new(reason, vessel));
        }
        debug!(
            board = %self.name,
            vessel = %vessel.name(),
            index,
            "vessel added"
        );
        self.grid = trial;
        self.vessels.push(vessel);
        Ok(index)
    }

    /// Write `index` into every cell of `trial` covered by `vessel`, stopping at the
    /// first cell that is off the board or already occupied.
    fn mark_vessel(
        &self,
        trial: &mut Grid,
        vessel: &Vessel,
        index: usize,
    ) -> Result<(), CannotPlaceReason> {
        for &coord in vessel.coords() {
            match trial.get_mut(&coord) {
                None => return Err(CannotPlaceReason::OutOfBounds(coord)),
                Some(Some(other)) => {
                    return Err(CannotPlaceReason::Overlaps {
                        index: *other,
                        name: self.vessels[*other].name().to_owned(),
                        coord,
                    })
                }
                Some(cell) => *cell = Some(index),
            }
        }
        Ok(())
    }

    /// Fire a shot at this board.
    ///
    /// Vessels are tried in the order they were added and the first one occupying
    /// `coord` takes the hit. If no vessel is there the shot lands in open water. A
    /// second shot at any cell fails with [`CannotShootReason::RedundantShot`], and a
    /// failed shot changes nothing.
    pub fn resolve_fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if !self.dimensions().contains(&coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        for (index, vessel) in self.vessels.iter_mut().enumerate() {
            trace!(board = %self.name, vessel = index, %coord, "checking vessel");
            match vessel.take_fire(&coord) {
                Ok(None) => {}
                Ok(Some(_)) => {
                    debug!(board = %self.name, %coord, vessel = index, "hit");
                    return Ok(ShotOutcome::Hit(index));
                }
                // DuplicateHit is the only error take_fire raises.
                Err(err) => {
                    debug!(board = %self.name, %coord, vessel = index, %err, "redundant shot");
                    return Err(ShotError::repeated_hit(coord, index));
                }
            }
        }
        if !self.water_shots.insert(coord) {
            return Err(ShotError::new(CannotShootReason::RedundantShot, coord));
        }
        debug!(board = %self.name, %coord, "miss");
        Ok(ShotOutcome::Miss)
    }

    /// Hits taken and remaining summed over every vessel on the board.
    pub fn health(&self) -> Health {
        self.vessels.iter().map(Vessel::health).sum()
    }

    /// Whether the vessel with the given index has been sunk. `None` if there is no such
    /// vessel.
    pub fn is_sunk(&self, index: usize) -> Option<bool> {
        self.vessels.get(index).map(Vessel::is_sunk)
    }

    /// Returns true if there is at least one vessel and every vessel has been sunk.
    pub fn defeated(&self) -> bool {
        !self.vessels.is_empty() && self.health().remaining == 0
    }
}
