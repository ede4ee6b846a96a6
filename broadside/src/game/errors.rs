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
use thiserror::Error;

use crate::board::ShotError;

/// Error returned when a shot in a [`Match`][crate::game::Match] is rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum MatchError {
    /// The match already has a winner.
    #[error("the match is already over")]
    AlreadyOver,

    /// The target board rejected the shot.
    #[error(transparent)]
    Shot(#[from] ShotError),
}
