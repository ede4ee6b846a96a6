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
//! Table of standard vessel classes.
use std::{fmt, str::FromStr};

use crate::ships::{UnknownClassError, Vessel};

/// Vessel class ID. Each class fixes a length, a board symbol and a label.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VesselClass {
    /// Battleship: length 5, shown as `B`.
    Battleship,
    /// Submarine: length 3, shown as `S`.
    Submarine,
    /// Huge ship: length 30, shown as `!`. Only fits on large boards.
    HugeShip,
}

impl VesselClass {
    /// Every class in the table.
    pub const ALL: &'static [VesselClass] = &[
        VesselClass::Battleship,
        VesselClass::Submarine,
        VesselClass::HugeShip,
    ];

    /// Get the length of this vessel class.
    pub fn len(self) -> usize {
        match self {
            VesselClass::Battleship => 5,
            VesselClass::Submarine => 3,
            VesselClass::HugeShip => 30,
        }
    }

    /// Board symbol of this vessel class.
    pub fn symbol(self) -> char {
        match self {
            VesselClass::Battleship => 'B',
            VesselClass::Submarine => 'S',
            VesselClass::HugeShip => '!',
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            VesselClass::Battleship => "Battleship",
            VesselClass::Submarine => "Submarine",
            VesselClass::HugeShip => "Huge Ship",
        }
    }
}

impl fmt::Display for VesselClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for VesselClass {
    type Err = UnknownClassError;

    /// Parse a class from its label, ignoring case and spaces, or from its symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        VesselClass::ALL
            .iter()
            .copied()
            .find(|class| {
                let label: String = class
                    .label()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .flat_map(char::to_lowercase)
                    .collect();
                key == label || key.chars().eq(class.symbol().to_lowercase())
            })
            .ok_or_else(|| UnknownClassError::new(s))
    }
}

impl Vessel {
    /// Construct an unplaced vessel of a standard class.
    pub fn of_class(class: VesselClass, name: impl Into<String>) -> Self {
        Self::from_parts(name.into(), class.label().to_owned(), class.symbol(), class.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_uses_table() {
        let ship = Vessel::of_class(VesselClass::Battleship, "Bismarck");
        assert_eq!(ship.name(), "Bismarck");
        assert_eq!(ship.class_label(), "Battleship");
        assert_eq!(ship.symbol(), 'B');
        assert_eq!(ship.len(), 5);

        let huge = Vessel::of_class(VesselClass::HugeShip, "Dr. HugeShip");
        assert_eq!(huge.len(), 30);
        assert_eq!(huge.symbol(), '!');
    }

    #[test]
    fn parses_labels_and_symbols() {
        assert_eq!("battleship".parse(), Ok(VesselClass::Battleship));
        assert_eq!("SubMarine".parse(), Ok(VesselClass::Submarine));
        assert_eq!("huge ship".parse(), Ok(VesselClass::HugeShip));
        assert_eq!("HugeShip".parse(), Ok(VesselClass::HugeShip));
        assert_eq!("s".parse(), Ok(VesselClass::Submarine));
        assert_eq!("!".parse(), Ok(VesselClass::HugeShip));
        assert!("Faries".parse::<VesselClass>().is_err());
    }
}
