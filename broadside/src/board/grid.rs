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
//! The occupancy map: which vessel, if any, sits on each cell of the board.

use crate::board::{Coordinate, Dimensions};

/// Row-major map from each cell to the index of the vessel occupying it.
///
/// Cloning is how placement builds a trial copy: every cell of a new vessel is written
/// to the clone, and the clone replaces the original only once all of them passed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Occupant of each cell.
    cells: Box<[Option<usize>]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        Self {
            dim,
            cells: vec![None; dim.total_size()].into_boxed_slice(),
        }
    }

    /// Get the occupant of the cell at the given [`Coordinate`]. The outer `Option` is
    /// `None` when the coordinate is out of bounds.
    pub(super) fn get(&self, coord: &Coordinate) -> Option<Option<usize>> {
        self.dim
            .try_linearize(coord)
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Get a mutable reference to the occupant slot at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut Option<usize>> {
        let cells = &mut self.cells;
        self.dim
            .try_linearize(coord)
            .and_then(move |i| cells.get_mut(i))
    }

    /// Number of occupied cells.
    pub(super) fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
