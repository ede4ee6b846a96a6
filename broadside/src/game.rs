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
//! Pairing of two boards into a match with alternating fire.
//!
//! The [`Match`] only decides whose turn it is and which board a shot goes to; all the
//! rules about what a shot does live in [`Board`]. Messaging and prompting are left to
//! whatever drives the match.
use tracing::debug;

use crate::board::{Board, Coordinate, ShotOutcome};

pub use self::errors::MatchError;

mod errors;

/// Player ID. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

/// Outcome of a successfully-fired shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnOutcome {
    /// Nothing was hit.
    Miss,
    /// The vessel with the given index was hit but not sunk.
    Hit(usize),
    /// The vessel with the given index was sunk but the target still has other vessels.
    Sunk(usize),
    /// The vessel with the given index was sunk, and the target has no vessels left.
    Victory(usize),
}

impl TurnOutcome {
    /// Get the index of the vessel that was hit.
    pub fn vessel(&self) -> Option<usize> {
        match *self {
            TurnOutcome::Miss => None,
            TurnOutcome::Hit(index) | TurnOutcome::Sunk(index) | TurnOutcome::Victory(index) => {
                Some(index)
            }
        }
    }
}

/// Two boards and the state of whose turn it is.
#[derive(Debug, Clone)]
pub struct Match {
    /// Boards indexed by [`Player::index`].
    boards: [Board; 2],

    /// Player whose turn it is to fire.
    current: Player,

    /// Set once either board is defeated.
    winner: Option<Player>,
}

impl Match {
    /// Start a match where `P1` owns `first`, `P2` owns `second`, and `P1` fires first.
    pub fn new(first: Board, second: Board) -> Self {
        Self::with_first_player(first, second, Player::P1)
    }

    /// Start a match where `P1` owns `first`, `P2` owns `second`, and `starter` fires
    /// first.
    pub fn with_first_player(first: Board, second: Board, starter: Player) -> Self {
        Self {
            boards: [first, second],
            current: starter,
            winner: None,
        }
    }

    /// Get the player whose turn it currently is.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Get the winner, if the match is over.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns true once one player has sunk every vessel of the other.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Get the board owned by `player`.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    /// Consume the match, returning `P1`'s and `P2`'s boards.
    pub fn into_boards(self) -> (Board, Board) {
        let [first, second] = self.boards;
        (first, second)
    }

    /// Fire at the current player's opponent. On success the turn passes to the
    /// opponent; a rejected shot leaves the turn with the current player so they can
    /// pick another target.
    pub fn fire(&mut self, coord: Coordinate) -> Result<TurnOutcome, MatchError> {
        if self.winner.is_some() {
            return Err(MatchError::AlreadyOver);
        }
        let shooter = self.current;
        let target = shooter.opponent();
        let board = &mut self.boards[target.index()];
        let outcome = match board.resolve_fire(coord)? {
            ShotOutcome::Miss => TurnOutcome::Miss,
            ShotOutcome::Hit(index) if board.defeated() => TurnOutcome::Victory(index),
            ShotOutcome::Hit(index) if board.is_sunk(index) == Some(true) => {
                TurnOutcome::Sunk(index)
            }
            ShotOutcome::Hit(index) => TurnOutcome::Hit(index),
        };
        debug!(?shooter, %coord, ?outcome, "turn resolved");
        if let TurnOutcome::Victory(_) = outcome {
            self.winner = Some(shooter);
        }
        self.current = target;
        Ok(outcome)
    }
}
