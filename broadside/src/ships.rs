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
//! Vessels: ships that own their segment positions and record hits on them.
use std::{
    collections::HashSet,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use enumflags2::BitFlags;
use tracing::trace;

use crate::board::{Coordinate, MAX_CELLS};

pub use self::{
    class::VesselClass,
    errors::{ParseDirectionError, UnknownClassError, VesselError},
};

mod class;
mod errors;

/// Direction a vessel extends in from its origin.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Towards row 0.
    Up = 0b0001,
    /// Towards the last row.
    Down = 0b0010,
    /// Towards column 0.
    Left = 0b0100,
    /// Towards the last column.
    Right = 0b1000,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: &'static [Direction] = &[
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(row, col)` step taken per segment.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Set of directions, used when searching for placements.
pub type Directions = BitFlags<Direction>;

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "up" | "n" | "north" => Ok(Direction::Up),
            "d" | "down" | "s" | "south" => Ok(Direction::Down),
            "l" | "left" | "w" | "west" => Ok(Direction::Left),
            "r" | "right" | "e" | "east" => Ok(Direction::Right),
            _ => Err(ParseDirectionError::new(s)),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Direction> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0, Direction::ALL.len())]
    }
}

/// Hits taken and hits remaining, for a single vessel or summed over a board.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Health {
    /// Segments that have been struck.
    pub taken: usize,
    /// Segments still intact.
    pub remaining: usize,
}

impl Health {
    /// Total number of segments counted.
    pub fn total(&self) -> usize {
        self.taken + self.remaining
    }
}

impl Add for Health {
    type Output = Health;

    fn add(self, rhs: Health) -> Health {
        Health {
            taken: self.taken + rhs.taken,
            remaining: self.remaining + rhs.remaining,
        }
    }
}

impl AddAssign for Health {
    fn add_assign(&mut self, rhs: Health) {
        *self = *self + rhs;
    }
}

impl Sum for Health {
    fn sum<I: Iterator<Item = Health>>(iter: I) -> Health {
        iter.fold(Health::default(), Add::add)
    }
}

/// Position of a coordinate along a vessel and whether that segment was struck.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SegmentStatus {
    /// Index of the segment, counted from the vessel's origin.
    pub index: usize,
    /// Whether the segment has been hit.
    pub hit: bool,
}

/// A ship with a fixed number of segments.
///
/// A vessel is created without a position. [`Vessel::place`] assigns one coordinate
/// per segment; after that `coords()` and `hits()` are both exactly `len()` long and
/// index-aligned. Segments only ever move from unhit to hit, through
/// [`Vessel::take_fire`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    name: String,
    class_label: String,
    symbol: char,
    length: usize,
    coords: Vec<Coordinate>,
    hits: Vec<bool>,
}

impl Vessel {
    /// Create an unplaced vessel. `symbol` must be exactly one character and `length`
    /// must be at least 1 and at most [`MAX_CELLS`].
    pub fn new(
        name: impl Into<String>,
        class_label: impl Into<String>,
        symbol: &str,
        length: usize,
    ) -> Result<Self, VesselError> {
        let mut chars = symbol.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(VesselError::InvalidSymbol(symbol.to_owned())),
        };
        if length == 0 {
            return Err(VesselError::ZeroLength);
        }
        if length > MAX_CELLS {
            return Err(VesselError::TooLong { length });
        }
        Ok(Self::from_parts(name.into(), class_label.into(), symbol, length))
    }

    /// Build a vessel from already-validated parts.
    fn from_parts(name: String, class_label: String, symbol: char, length: usize) -> Self {
        Self {
            name,
            class_label,
            symbol,
            length,
            coords: Vec::new(),
            hits: vec![false; length],
        }
    }

    /// Name of this particular vessel.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label of the vessel's class, such as `"Battleship"`.
    pub fn class_label(&self) -> &str {
        &self.class_label
    }

    /// Single character used to mark the vessel on a rendered board.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether coordinates have been assigned.
    pub fn is_placed(&self) -> bool {
        !self.coords.is_empty()
    }

    /// Segment coordinates in order from the origin. Empty until placed.
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Hit flag of each segment, aligned with [`Vessel::coords`].
    pub fn hits(&self) -> &[bool] {
        &self.hits
    }

    /// Assign the vessel's coordinates, replacing any previous position and clearing
    /// all hits. Either every coordinate is accepted or the vessel is left untouched.
    ///
    /// Only the count and uniqueness of the coordinates are checked here; bounds and
    /// overlap are checked when the vessel is added to a board.
    pub fn place<I, C>(&mut self, coords: I) -> Result<(), VesselError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        let coords: Vec<Coordinate> = coords.into_iter().map(Into::into).collect();
        if coords.len() != self.length {
            return Err(VesselError::IncorrectLength {
                name: self.name.clone(),
                expected: self.length,
                actual: coords.len(),
            });
        }
        let mut seen = HashSet::with_capacity(coords.len());
        if let Some(coord) = coords.iter().find(|coord| !seen.insert(**coord)) {
            return Err(VesselError::RepeatedCoordinate {
                name: self.name.clone(),
                coord: *coord,
            });
        }
        self.coords = coords;
        self.hits = vec![false; self.length];
        Ok(())
    }

    /// Coordinates of a straight vessel of this length starting at `origin` and
    /// extending in `dir`. Does not place the vessel.
    pub fn straight_line(&self, origin: Coordinate, dir: Direction) -> Vec<Coordinate> {
        (0..self.length).map(|i| origin.step(dir, i)).collect()
    }

    /// Shorthand for placing the vessel along [`Vessel::straight_line`].
    pub fn place_straight(&mut self, origin: Coordinate, dir: Direction) -> Result<(), VesselError> {
        let line = self.straight_line(origin, dir);
        self.place(line)
    }

    /// Resolve a shot against this vessel alone.
    ///
    /// Returns `Ok(None)` if the vessel does not occupy `coord` and `Ok(Some(index))`
    /// with the newly struck segment otherwise. Striking a segment that was already hit
    /// fails with [`VesselError::DuplicateHit`] and changes nothing.
    pub fn take_fire(&mut self, coord: &Coordinate) -> Result<Option<usize>, VesselError> {
        let index = match self.coords.iter().position(|c| c == coord) {
            Some(index) => index,
            None => return Ok(None),
        };
        if self.hits[index] {
            return Err(VesselError::DuplicateHit {
                name: self.name.clone(),
                coord: *coord,
            });
        }
        self.hits[index] = true;
        trace!(vessel = %self.name, %coord, segment = index, "segment struck");
        Ok(Some(index))
    }

    /// Hits taken and remaining on this vessel.
    pub fn health(&self) -> Health {
        let taken = self.hits.iter().filter(|&&hit| hit).count();
        Health {
            taken,
            remaining: self.hits.len() - taken,
        }
    }

    /// Returns true once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.health().remaining == 0
    }

    /// Look up the segment at `coord`. Fails if the vessel does not occupy `coord`.
    pub fn segment_status(&self, coord: &Coordinate) -> Result<SegmentStatus, VesselError> {
        self.coords
            .iter()
            .position(|c| c == coord)
            .map(|index| SegmentStatus {
                index,
                hit: self.hits[index],
            })
            .ok_or_else(|| VesselError::InvalidCoordinate {
                name: self.name.clone(),
                coord: *coord,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed_battleship() -> Vessel {
        let mut ship = Vessel::of_class(VesselClass::Battleship, "Mr. Battleship");
        ship.place_straight(Coordinate::new(2, 1), Direction::Right)
            .unwrap();
        ship
    }

    #[test]
    fn new_validates_symbol_and_length() {
        assert!(Vessel::new("a", "Raft", "R", 1).is_ok());
        assert_eq!(
            Vessel::new("a", "Raft", "RR", 1),
            Err(VesselError::InvalidSymbol("RR".to_owned()))
        );
        assert!(Vessel::new("a", "Raft", "", 1).is_err());
        assert_eq!(Vessel::new("a", "Raft", "R", 0), Err(VesselError::ZeroLength));
        assert_eq!(
            Vessel::new("a", "Raft", "R", usize::MAX),
            Err(VesselError::TooLong { length: usize::MAX })
        );
        assert!(Vessel::new("a", "Raft", "R", MAX_CELLS).is_ok());
    }

    #[test]
    fn starts_unplaced_and_unhit() {
        let ship = Vessel::of_class(VesselClass::Submarine, "Mrs. Submarine");
        assert!(!ship.is_placed());
        assert_eq!(ship.hits(), &[false, false, false]);
        assert_eq!(ship.health(), Health { taken: 0, remaining: 3 });
    }

    #[test]
    fn straight_line_steps_by_unit_delta() {
        let ship = Vessel::of_class(VesselClass::Submarine, "sub");
        let origin = Coordinate::new(4, 4);
        assert_eq!(
            ship.straight_line(origin, Direction::Up),
            vec![
                Coordinate::new(4, 4),
                Coordinate::new(3, 4),
                Coordinate::new(2, 4),
            ]
        );
        assert_eq!(
            ship.straight_line(origin, Direction::Left),
            vec![
                Coordinate::new(4, 4),
                Coordinate::new(4, 3),
                Coordinate::new(4, 2),
            ]
        );
        assert!(!ship.is_placed());
    }

    #[test]
    fn place_checks_length_and_keeps_old_position() {
        let mut ship = placed_battleship();
        let before = ship.coords().to_vec();
        let err = ship.place(vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]).unwrap_err();
        assert_eq!(
            err,
            VesselError::IncorrectLength {
                name: "Mr. Battleship".to_owned(),
                expected: 5,
                actual: 2,
            }
        );
        assert_eq!(ship.coords(), &before[..]);
    }

    #[test]
    fn place_rejects_repeated_coordinates() {
        let mut ship = Vessel::of_class(VesselClass::Submarine, "sub");
        let err = ship.place(vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(0, 0),
        ]).unwrap_err();
        assert!(matches!(err, VesselError::RepeatedCoordinate { .. }));
        assert!(!ship.is_placed());
    }

    #[test]
    fn take_fire_marks_segment_once() {
        let mut ship = placed_battleship();
        assert_eq!(ship.take_fire(&Coordinate::new(7, 7)), Ok(None));
        assert_eq!(ship.take_fire(&Coordinate::new(2, 3)), Ok(Some(2)));
        assert_eq!(ship.hits(), &[false, false, true, false, false]);
        assert!(matches!(
            ship.take_fire(&Coordinate::new(2, 3)),
            Err(VesselError::DuplicateHit { .. })
        ));
        assert_eq!(ship.health(), Health { taken: 1, remaining: 4 });
    }

    #[test]
    fn sinks_when_every_segment_is_hit() {
        let mut ship = placed_battleship();
        let coords = ship.coords().to_vec();
        for (i, coord) in coords.iter().enumerate() {
            assert!(!ship.is_sunk());
            assert_eq!(ship.take_fire(coord), Ok(Some(i)));
        }
        assert!(ship.is_sunk());
        assert_eq!(ship.health(), Health { taken: 5, remaining: 0 });
    }

    #[test]
    fn segment_status_reports_index_and_hit() {
        let mut ship = placed_battleship();
        ship.take_fire(&Coordinate::new(2, 5)).unwrap();
        assert_eq!(
            ship.segment_status(&Coordinate::new(2, 5)),
            Ok(SegmentStatus { index: 4, hit: true })
        );
        assert_eq!(
            ship.segment_status(&Coordinate::new(2, 2)),
            Ok(SegmentStatus { index: 1, hit: false })
        );
        assert!(matches!(
            ship.segment_status(&Coordinate::new(3, 3)),
            Err(VesselError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn replacing_clears_hits() {
        let mut ship = placed_battleship();
        ship.take_fire(&Coordinate::new(2, 1)).unwrap();
        ship.place_straight(Coordinate::new(0, 0), Direction::Down)
            .unwrap();
        assert_eq!(ship.health().taken, 0);
    }

    #[test]
    fn health_sums() {
        let a = Health { taken: 1, remaining: 2 };
        let b = Health { taken: 3, remaining: 0 };
        let total: Health = vec![a, b].into_iter().sum();
        assert_eq!(total, Health { taken: 4, remaining: 2 });
        assert_eq!(total.total(), 6);
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn samples_every_direction() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<Direction> = (0..200).map(|_| rng.gen()).collect();
        assert_eq!(seen.len(), Direction::ALL.len());
    }

    #[test]
    fn parses_directions() {
        assert_eq!("R".parse(), Ok(Direction::Right));
        assert_eq!("north".parse(), Ok(Direction::Up));
        assert_eq!(" down ".parse(), Ok(Direction::Down));
        assert!("sideways".parse::<Direction>().is_err());
    }
}
