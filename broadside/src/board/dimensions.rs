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
//! Rectangular board dimensions.
use std::convert::TryFrom;

use crate::board::{Coordinate, DimensionError};

/// Exclusive lower bound on both the number of rows and the number of columns.
pub const MIN_DIMENSION: usize = 5;

/// Upper bound on the number of cells in a board. Also bounds each side, so row and
/// column indices always fit in a [`Coordinate`] component.
pub const MAX_CELLS: usize = 1 << 20;

/// Size of a rectangular board. Rows correspond to [`Coordinate::row`] and columns to
/// [`Coordinate::col`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Both must be greater than [`MIN_DIMENSION`] and `rows * cols` must not exceed
    /// [`MAX_CELLS`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, DimensionError> {
        if rows <= MIN_DIMENSION {
            Err(DimensionError::TooFewRows { rows })
        } else if cols <= MIN_DIMENSION {
            Err(DimensionError::TooFewCols { cols })
        } else {
            rows.checked_mul(cols)
                .filter(|&cells| cells <= MAX_CELLS)
                .map(|_| Self { rows, cols })
                .ok_or(DimensionError::TooLarge { rows, cols })
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if `coord` lies within `[0, rows) x [0, cols)`.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.try_linearize(coord).is_some()
    }

    /// Convert a coordinate to a linear row-major index.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        let row = usize::try_from(coord.row()).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(coord.col()).ok().filter(|&c| c < self.cols)?;
        Some(row * self.cols + col)
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate::new((idx / self.cols) as i64, (idx % self.cols) as i64)
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let cols = self.cols as i64;
        (0..self.rows as i64).map(move |row| (0..cols).map(move |col| Coordinate::new(row, col)))
    }
}

impl Default for Dimensions {
    /// The standard 10x10 board.
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}
