//! Game state read by rule predicates.
//!
//! ## State
//!
//! - Day counter
//! - Board (tanks and walls)
//! - Registered players with their attributes
//!
//! Uses `im` persistent data structures so a snapshot can be cloned in O(1)
//! and handed to validators on other threads while the game moves on.
//!
//! Rules only ever receive `&State`; nothing in the validation path mutates it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue};
use super::board::{Board, Unit};
use super::config::GameConfig;
use super::player::{Player, PlayerRef};
use super::position::Position;
use crate::error::{Result, RuleError};

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Current day (starts at 1).
    pub day: u32,

    /// The board.
    pub board: Board,

    players: Vector<Player>,
}

impl State {
    /// Create a state with an empty board sized by `config`.
    ///
    /// `config` is expected to have passed [`GameConfig::validate`].
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated config: {config:?}");
        Self {
            day: 1,
            board: Board::new(config.board_width, config.board_height),
            players: Vector::new(),
        }
    }

    /// Load a saved state from JSON.
    ///
    /// The board is validated after decoding, so a loaded state holds the
    /// same guarantees as one built through [`place_tank`](Self::place_tank).
    pub fn from_json(json: &str) -> Result<Self> {
        let state: Self = serde_json::from_str(json)?;
        state.board.validate()?;
        tracing::debug!(
            day = state.day,
            players = state.players.len(),
            width = state.board.width(),
            height = state.board.height(),
            "loaded game state"
        );
        Ok(state)
    }

    /// Serialize the state to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    // === Players ===

    /// Register a player, replacing any existing player with the same reference.
    pub fn add_player(&mut self, player: Player) {
        match self.players.iter().position(|p| p.player_ref == player.player_ref) {
            Some(index) => {
                self.players.set(index, player);
            }
            None => self.players.push_back(player),
        }
    }

    /// Look up a player.
    #[must_use]
    pub fn player(&self, player: &PlayerRef) -> Option<&Player> {
        self.players.iter().find(|p| &p.player_ref == player)
    }

    /// Iterate over registered players in registration order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Get a player attribute.
    #[must_use]
    pub fn player_attribute(&self, player: &PlayerRef, key: &str) -> Option<&AttributeValue> {
        self.player(player).and_then(|p| p.attribute(key))
    }

    /// Set a player attribute. Returns `false` if the player is unknown.
    pub fn set_player_attribute(
        &mut self,
        player: &PlayerRef,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> bool {
        match self.players.iter_mut().find(|p| &p.player_ref == player) {
            Some(p) => {
                p.attributes.insert(key.into(), value.into());
                true
            }
            None => false,
        }
    }

    // === Tanks ===

    /// Place a player's tank on the board.
    ///
    /// Fails if `tank` is not a tank, if it lies off the board, or if its
    /// owner already has a tank on another square.
    pub fn place_tank(&mut self, position: Position, tank: Unit) -> Result<()> {
        if !matches!(tank, Unit::Tank { .. }) {
            return Err(RuleError::NotATank {
                position: position.to_human_readable(),
            });
        }
        self.board.place_unit(position, tank)?;
        Ok(())
    }

    /// Find a player's tank.
    #[must_use]
    pub fn tank_position(&self, player: &PlayerRef) -> Option<Position> {
        self.board.tank_position(player)
    }

    /// Get an attribute of a player's tank.
    #[must_use]
    pub fn tank_attribute(&self, player: &PlayerRef, key: &str) -> Option<&AttributeValue> {
        self.tank_position(player)
            .and_then(|pos| self.board.unit_at(pos))
            .and_then(|unit| unit.attribute(key))
    }

    /// Get an integer tank attribute with default.
    #[must_use]
    pub fn tank_int(&self, player: &PlayerRef, key: &str, default: i64) -> i64 {
        self.tank_attribute(player, key)
            .and_then(AttributeValue::as_int)
            .unwrap_or(default)
    }

    /// Set an attribute on a player's tank. Returns `false` if the player has no tank.
    pub fn set_tank_attribute(
        &mut self,
        player: &PlayerRef,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> bool {
        let Some(position) = self.tank_position(player) else {
            return false;
        };
        match self.board.unit_at_mut(position) {
            Some(Unit::Tank { attributes, .. }) => {
                attributes.insert(key.into(), value.into());
                true
            }
            _ => false,
        }
    }

    // === Days ===

    /// Advance to the next day. The counter stops at `u32::MAX`.
    pub fn advance_day(&mut self) {
        self.day = self.day.saturating_add(1);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::keys;

    fn test_state() -> State {
        let mut state = State::new(&GameConfig::new().with_board_size(5, 5));
        state.add_player(Player::new("Ryan").with_attribute(keys::GOLD, 2));
        state.add_player(Player::new("Ty"));
        state
            .place_tank(
                Position::new(1, 1),
                Unit::tank("Ryan").with_attribute(keys::ACTION_POINTS, 3),
            )
            .unwrap();
        state
    }

    #[test]
    fn test_new_state() {
        let state = State::new(&GameConfig::new().with_board_size(7, 4));
        assert_eq!(state.day, 1);
        assert_eq!(state.board.width(), 7);
        assert_eq!(state.board.height(), 4);
        assert_eq!(state.players().count(), 0);
    }

    #[test]
    fn test_player_lookup() {
        let state = test_state();
        let ryan = PlayerRef::new("Ryan");

        assert!(state.player(&ryan).is_some());
        assert!(state.player(&PlayerRef::new("Nobody")).is_none());
        assert_eq!(
            state.player_attribute(&ryan, keys::GOLD).and_then(|v| v.as_int()),
            Some(2)
        );
    }

    #[test]
    fn test_add_player_replaces() {
        let mut state = test_state();
        state.add_player(Player::new("Ty").with_attribute(keys::GOLD, 9));

        let names: Vec<_> = state.players().map(|p| p.player_ref.name()).collect();
        assert_eq!(names, ["Ryan", "Ty"]);
        assert_eq!(
            state.player_attribute(&PlayerRef::new("Ty"), keys::GOLD).and_then(|v| v.as_int()),
            Some(9)
        );
    }

    #[test]
    fn test_set_player_attribute() {
        let mut state = test_state();
        assert!(state.set_player_attribute(&PlayerRef::new("Ty"), keys::GOLD, 1));
        assert!(!state.set_player_attribute(&PlayerRef::new("Nobody"), keys::GOLD, 1));
    }

    #[test]
    fn test_tank_attributes() {
        let mut state = test_state();
        let ryan = PlayerRef::new("Ryan");
        let ty = PlayerRef::new("Ty");

        assert_eq!(state.tank_position(&ryan), Some(Position::new(1, 1)));
        assert_eq!(state.tank_int(&ryan, keys::ACTION_POINTS, 0), 3);
        assert_eq!(state.tank_int(&ty, keys::ACTION_POINTS, 0), 0);

        assert!(state.set_tank_attribute(&ryan, keys::ACTION_POINTS, 1));
        assert!(!state.set_tank_attribute(&ty, keys::ACTION_POINTS, 1));
        assert_eq!(state.tank_int(&ryan, keys::ACTION_POINTS, 0), 1);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut state = test_state();
        let snapshot = state.clone();

        state.set_tank_attribute(&PlayerRef::new("Ryan"), keys::ACTION_POINTS, 0);
        state.advance_day();

        assert_eq!(snapshot.day, 1);
        assert_eq!(snapshot.tank_int(&PlayerRef::new("Ryan"), keys::ACTION_POINTS, 0), 3);
        assert_eq!(state.day, 2);
    }

    #[test]
    fn test_place_tank_rejects_wall() {
        let mut state = test_state();
        let result = state.place_tank(Position::new(2, 2), Unit::wall(3));

        assert!(matches!(result, Err(RuleError::NotATank { ref position }) if position == "C3"));
        assert!(state.board.unit_at(Position::new(2, 2)).is_none());
    }

    #[test]
    fn test_place_tank_rejects_second_tank() {
        let mut state = test_state();
        let result = state.place_tank(Position::new(4, 4), Unit::tank("Ryan"));

        assert!(matches!(result, Err(RuleError::DuplicateTank { .. })));
        assert_eq!(state.tank_position(&PlayerRef::new("Ryan")), Some(Position::new(1, 1)));
        assert_eq!(state.board.units().count(), 1);
    }

    #[test]
    fn test_advance_day_saturates() {
        let mut state = test_state();
        state.day = u32::MAX;
        state.advance_day();
        assert_eq!(state.day, u32::MAX);
    }

    #[test]
    fn test_from_json_rejects_off_board_unit() {
        let json = r#"{
            "day": 1,
            "board": { "width": 2, "height": 2, "units": [
                { "position": { "x": 9, "y": 9 }, "unit": { "type": "tank", "owner": "Ryan" } }
            ] },
            "players": [{ "player_ref": "Ryan" }]
        }"#;

        let result = State::from_json(json);
        assert!(matches!(
            result,
            Err(RuleError::OffBoard { ref position, width: 2, height: 2 }) if position == "J10"
        ));
    }

    #[test]
    fn test_from_json_rejects_empty_board() {
        let json = r#"{
            "day": 1,
            "board": { "width": 0, "height": 0, "units": [] },
            "players": []
        }"#;
        assert!(matches!(State::from_json(json), Err(RuleError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_json_rejects_duplicate_tanks() {
        let json = r#"{
            "day": 1,
            "board": { "width": 5, "height": 5, "units": [
                { "position": { "x": 0, "y": 0 }, "unit": { "type": "tank", "owner": "Ryan" } },
                { "position": { "x": 4, "y": 4 }, "unit": { "type": "tank", "owner": "Ryan" } }
            ] },
            "players": [{ "player_ref": "Ryan" }]
        }"#;

        assert!(matches!(
            State::from_json(json),
            Err(RuleError::DuplicateTank { ref owner, ref existing })
                if owner == "Ryan" && existing == "A1"
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let state = test_state();
        let json = state.to_json().unwrap();
        let loaded = State::from_json(&json).unwrap();
        assert_eq!(state, loaded);
    }
}
