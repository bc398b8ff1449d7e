//! The game board: a fixed-size grid of positions, each holding at most one unit.
//!
//! Uses `im::HashMap` so cloning a board (and therefore a [`State`]) is O(1).
//!
//! [`State`]: super::State

use im::HashMap as ImHashMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};
use super::player::PlayerRef;
use super::position::Position;
use crate::error::{Result, RuleError};

/// Something occupying a board square.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Unit {
    /// A tank controlled by a player.
    Tank {
        /// Controlling player.
        owner: PlayerRef,
        /// Tank attributes (action points, range, durability...).
        #[serde(default)]
        attributes: Attributes,
    },
    /// A destructible wall.
    Wall {
        /// Hits remaining before the wall is destroyed.
        durability: i64,
    },
}

impl Unit {
    /// Create a tank with no attributes.
    pub fn tank(owner: impl Into<PlayerRef>) -> Self {
        Unit::Tank {
            owner: owner.into(),
            attributes: Attributes::default(),
        }
    }

    /// Create a wall.
    #[must_use]
    pub fn wall(durability: i64) -> Self {
        Unit::Wall { durability }
    }

    /// Builder: set a tank attribute. Walls are returned unchanged.
    #[must_use]
    pub fn with_attribute(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        if let Unit::Tank { attributes, .. } = &mut self {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// The controlling player, if this is a tank.
    #[must_use]
    pub fn owner(&self) -> Option<&PlayerRef> {
        match self {
            Unit::Tank { owner, .. } => Some(owner),
            Unit::Wall { .. } => None,
        }
    }

    /// Get a tank attribute. Walls have no attributes.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        match self {
            Unit::Tank { attributes, .. } => attributes.get(key),
            Unit::Wall { .. } => None,
        }
    }

    /// Check if this unit blocks movement.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        match self {
            Unit::Tank { .. } => true,
            Unit::Wall { durability } => *durability > 0,
        }
    }
}

/// A `width` x `height` grid of units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    width: u32,
    height: u32,
    #[serde(with = "unit_list")]
    units: ImHashMap<Position, Unit>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            units: ImHashMap::new(),
        }
    }

    /// Board width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if a position lies on the board.
    #[must_use]
    pub fn is_valid_position(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Get the unit at a position.
    #[must_use]
    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.units.get(&position)
    }

    /// Check if a position holds a blocking unit.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.unit_at(position).is_some_and(Unit::is_blocking)
    }

    /// Place a unit, replacing whatever was there.
    ///
    /// A player owns at most one tank, so a tank whose owner already has one
    /// on another square is rejected. Returns the replaced unit, if any.
    pub fn place_unit(&mut self, position: Position, unit: Unit) -> Result<Option<Unit>> {
        self.check_on_board(position)?;
        if let Some(owner) = unit.owner() {
            if let Some(existing) = self.tank_position(owner).filter(|p| *p != position) {
                return Err(RuleError::DuplicateTank {
                    owner: owner.to_string(),
                    existing: existing.to_human_readable(),
                });
            }
        }
        Ok(self.units.insert(position, unit))
    }

    /// Check the board is at least 1x1, every unit lies on it and no player
    /// owns more than one tank.
    ///
    /// Boards built through [`place_unit`](Self::place_unit) always pass;
    /// this is for boards read from outside.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RuleError::InvalidConfig(format!(
                "board must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }

        // Sorted so the reported error does not depend on hash order
        let mut entries: Vec<_> = self.units.iter().collect();
        entries.sort_by_key(|(position, _)| **position);

        let mut owners: FxHashMap<&PlayerRef, Position> = FxHashMap::default();
        for (position, unit) in entries {
            self.check_on_board(*position)?;
            if let Some(owner) = unit.owner() {
                if let Some(existing) = owners.insert(owner, *position) {
                    return Err(RuleError::DuplicateTank {
                        owner: owner.to_string(),
                        existing: existing.to_human_readable(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_on_board(&self, position: Position) -> Result<()> {
        if self.is_valid_position(position) {
            Ok(())
        } else {
            Err(RuleError::OffBoard {
                position: position.to_human_readable(),
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Remove and return the unit at a position.
    pub fn remove_unit(&mut self, position: Position) -> Option<Unit> {
        self.units.remove(&position)
    }

    /// Get a mutable reference to the unit at a position.
    pub fn unit_at_mut(&mut self, position: Position) -> Option<&mut Unit> {
        self.units.get_mut(&position)
    }

    /// Find the position of a player's tank.
    ///
    /// Unique because a player owns at most one tank.
    #[must_use]
    pub fn tank_position(&self, player: &PlayerRef) -> Option<Position> {
        self.units
            .iter()
            .find(|(_, unit)| unit.owner() == Some(player))
            .map(|(position, _)| *position)
    }

    /// Iterate over occupied positions and their units.
    pub fn units(&self) -> impl Iterator<Item = (&Position, &Unit)> {
        self.units.iter()
    }
}

/// JSON objects need string keys, so units are stored as a list of
/// `{ "position": ..., "unit": ... }` entries.
mod unit_list {
    use im::HashMap as ImHashMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Position, Unit};

    #[derive(Serialize, Deserialize)]
    struct Entry<U> {
        position: Position,
        unit: U,
    }

    pub fn serialize<S: Serializer>(
        units: &ImHashMap<Position, Unit>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<Entry<&Unit>> = units
            .iter()
            .map(|(position, unit)| Entry { position: *position, unit })
            .collect();
        entries.sort_by_key(|entry| entry.position);
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<ImHashMap<Position, Unit>, D::Error> {
        let entries: Vec<Entry<Unit>> = Vec::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|entry| (entry.position, entry.unit))
            .collect())
    }
}
