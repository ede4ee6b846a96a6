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
//! Property tests over randomly built boards and shot sequences.

use std::collections::HashSet;

use broadside::{
    board::CannotShootReason, Board, Coordinate, Direction, ShotOutcome, Vessel,
};
use proptest::prelude::*;

/// Requested vessel: length, origin row, origin col, direction.
type VesselSpec = (usize, i64, i64, usize);

fn occupancy(board: &Board) -> Vec<Option<usize>> {
    board
        .iter_cells()
        .flat_map(|row| row.map(|cell| cell.vessel()).collect::<Vec<_>>())
        .collect()
}

/// Build a board from the specs, skipping vessels the board rejects. Checks that every
/// rejection leaves the board untouched.
fn build_board(rows: usize, cols: usize, specs: &[VesselSpec]) -> Board {
    let mut board = Board::with_size("prop", rows, cols).unwrap();
    for (i, &(len, row, col, dir)) in specs.iter().enumerate() {
        let mut vessel = Vessel::new(format!("v{}", i), "Test", "T", len).unwrap();
        vessel
            .place_straight(Coordinate::new(row, col), Direction::ALL[dir])
            .unwrap();
        let before = occupancy(&board);
        let count = board.vessels().len();
        match board.add_vessel(vessel) {
            Ok(index) => assert_eq!(index, count),
            Err(_) => {
                assert_eq!(board.vessels().len(), count);
                assert_eq!(occupancy(&board), before);
            }
        }
    }
    board
}

fn vessel_specs() -> impl Strategy<Value = Vec<VesselSpec>> {
    prop::collection::vec((1usize..=6, -2i64..14, -2i64..14, 0usize..4), 0..8)
}

fn shots() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-1i64..13, -1i64..13), 0..120)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn health_accounts_for_every_segment(
        rows in 6usize..=12,
        cols in 6usize..=12,
        specs in vessel_specs(),
        targets in shots(),
    ) {
        let mut board = build_board(rows, cols, &specs);
        let segments: usize = board.vessels().iter().map(Vessel::len).sum();
        prop_assert_eq!(board.health().total(), segments);
        for (row, col) in targets {
            let _ = board.resolve_fire(Coordinate::new(row, col));
            let health = board.health();
            prop_assert_eq!(health.taken + health.remaining, segments);
        }
    }

    #[test]
    fn second_shot_is_always_redundant(
        specs in vessel_specs(),
        targets in shots(),
    ) {
        let mut board = build_board(10, 10, &specs);
        let mut fired = HashSet::new();
        for (row, col) in targets {
            let coord = Coordinate::new(row, col);
            let result = board.resolve_fire(coord);
            if !board.dimensions().contains(&coord) {
                prop_assert_eq!(result.unwrap_err().reason(), CannotShootReason::OutOfBounds);
            } else if fired.insert(coord) {
                let expected = board.occupant(&coord).map_or(ShotOutcome::Miss, ShotOutcome::Hit);
                prop_assert_eq!(result, Ok(expected));
            } else {
                let health = board.health();
                let water = board.water_shots().len();
                prop_assert_eq!(result.unwrap_err().reason(), CannotShootReason::RedundantShot);
                prop_assert_eq!(board.health(), health);
                prop_assert_eq!(board.water_shots().len(), water);
            }
        }
    }

    #[test]
    fn sunk_iff_every_segment_struck(
        specs in vessel_specs(),
        targets in shots(),
    ) {
        let mut board = build_board(10, 10, &specs);
        let mut struck = HashSet::new();
        for (row, col) in targets {
            let coord = Coordinate::new(row, col);
            if let Ok(ShotOutcome::Hit(_)) = board.resolve_fire(coord) {
                prop_assert!(struck.insert(coord));
            }
        }
        for vessel in board.vessels() {
            let all_struck = vessel.coords().iter().all(|coord| struck.contains(coord));
            prop_assert_eq!(vessel.health().remaining == 0, all_struck);
            prop_assert_eq!(vessel.is_sunk(), all_struck);
        }
        prop_assert_eq!(board.defeated(), !board.vessels().is_empty() && board.vessels().iter().all(Vessel::is_sunk));
    }
}
