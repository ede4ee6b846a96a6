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
//! Searching for legal vessel placements, and placing vessels at random.
use crate::{
    board::{Board, Coordinate},
    ships::{Direction, Directions, Vessel},
};
#[cfg(feature = "rng_gen")]
use crate::board::{CannotPlaceReason, PlaceError};
#[cfg(feature = "rng_gen")]
use rand::{seq::SliceRandom, Rng};
#[cfg(feature = "rng_gen")]
use tracing::debug;

/// A straight-line placement: the origin segment and the direction the rest extend in.
pub type Placement = (Coordinate, Direction);

impl Board {
    /// Returns true if every coordinate is on the board and unoccupied.
    pub fn fits(&self, coords: &[Coordinate]) -> bool {
        coords
            .iter()
            .all(|coord| self.grid.get(coord) == Some(None))
    }

    /// Get every straight-line placement of `vessel` along one of `directions` that
    /// would currently be accepted by [`Board::add_vessel`]. Origins are scanned in
    /// row-major order, and directions in the order of [`Direction::ALL`].
    pub fn candidate_placements<B: Into<Directions>>(
        &self,
        vessel: &Vessel,
        directions: B,
    ) -> Vec<Placement> {
        let directions = directions.into();
        self.dimensions()
            .iter_coordinates()
            .flatten()
            .flat_map(|origin| {
                Direction::ALL
                    .iter()
                    .copied()
                    .filter(move |&dir| directions.contains(dir))
                    .map(move |dir| (origin, dir))
            })
            .filter(|&(origin, dir)| self.fits(&vessel.straight_line(origin, dir)))
            .collect()
    }

    /// Choose one of the [`Board::candidate_placements`] uniformly at random. Returns
    /// `None` if no placement fits.
    #[cfg(feature = "rng_gen")]
    pub fn random_placement<R, B>(
        &self,
        rng: &mut R,
        vessel: &Vessel,
        directions: B,
    ) -> Option<Placement>
    where
        R: Rng + ?Sized,
        B: Into<Directions>,
    {
        self.candidate_placements(vessel, directions)
            .choose(rng)
            .copied()
    }

    /// Place `vessel` along a random legal straight line and add it to the board,
    /// returning its index. Fails with [`CannotPlaceReason::NoSpace`] if no placement
    /// fits, handing the vessel back.
    #[cfg(feature = "rng_gen")]
    pub fn place_random<R, B>(
        &mut self,
        rng: &mut R,
        mut vessel: Vessel,
        directions: B,
    ) -> Result<usize, PlaceError>
    where
        R: Rng + ?Sized,
        B: Into<Directions>,
    {
        let (origin, dir) = match self.random_placement(rng, &vessel, directions) {
            Some(placement) => placement,
            None => return Err(PlaceError::new(CannotPlaceReason::NoSpace, vessel)),
        };
        debug!(
            board = %self.name,
            vessel = %vessel.name(),
            %origin,
            ?dir,
            "placing vessel randomly"
        );
        if let Err(err) = vessel.place_straight(origin, dir) {
            return Err(PlaceError::new(CannotPlaceReason::Vessel(err), vessel));
        }
        self.add_vessel(vessel)
    }

    /// Randomly place each of `vessels` in turn. Stops at the first vessel that does
    /// not fit; vessels placed before it stay on the board.
    #[cfg(feature = "rng_gen")]
    pub fn populate_random<R, I, B>(
        &mut self,
        rng: &mut R,
        vessels: I,
        directions: B,
    ) -> Result<Vec<usize>, PlaceError>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = Vessel>,
        B: Into<Directions>,
    {
        let directions = directions.into();
        vessels
            .into_iter()
            .map(|vessel| self.place_random(rng, vessel, directions))
            .collect()
    }
}
