//! Player references and per-player data.
//!
//! ## PlayerRef
//!
//! Players are referenced by name. A `PlayerRef` is what rules receive as the
//! acting player; it never carries game data itself.
//!
//! ## Player
//!
//! The state-side record for a player: its reference plus game-defined
//! attributes (gold, council votes, etc.).

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Reference to a player by name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRef(String);

impl PlayerRef {
    /// Create a new player reference.
    ///
    /// ```
    /// use tank_rules::core::PlayerRef;
    ///
    /// let player = PlayerRef::new("Dale");
    /// assert_eq!(player.name(), "Dale");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A player registered in the game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Reference used to address this player.
    pub player_ref: PlayerRef,
    /// Game-defined player attributes.
    #[serde(default)]
    pub attributes: Attributes,
}

impl Player {
    /// Create a player with no attributes.
    pub fn new(player_ref: impl Into<PlayerRef>) -> Self {
        Self {
            player_ref: player_ref.into(),
            attributes: Attributes::default(),
        }
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attribute(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}
