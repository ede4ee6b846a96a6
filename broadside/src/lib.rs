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
//! Rules engine for a two-player game of grid-based naval combat.
//!
//! The crate is built around three pieces:
//!
//! - [`Vessel`][ships::Vessel]: a ship with a fixed length that owns its segment
//!   coordinates and per-segment hit flags.
//! - [`Board`][board::Board]: a single player's waters. Validates vessel placement
//!   against bounds and an occupancy map, resolves incoming fire and aggregates health.
//! - [`Match`][game::Match]: pairs two boards and alternates fire between them.
//!
//! Rendering, prompting and turn messaging are left to the caller; everything a
//! renderer needs is exposed read-only from [`Board`][board::Board] and
//! [`Vessel`][ships::Vessel].

pub mod board;
pub mod game;
pub mod ships;

pub use crate::{
    board::{Board, Coordinate, Dimensions, ShotOutcome},
    game::{Match, Player, TurnOutcome},
    ships::{Direction, Health, Vessel, VesselClass},
};
