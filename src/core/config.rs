//! Game configuration.
//!
//! A `GameConfig` describes the board a game is played on and names the
//! ruleset in use. It is usually loaded from JSON next to the saved game.
//!
//! ```
//! use tank_rules::core::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{ "board_width": 9, "board_height": 7 }"#).unwrap();
//! assert_eq!(config.board_width, 9);
//! assert_eq!(config.ruleset, "default");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of board columns.
    pub board_width: u32,
    /// Number of board rows.
    pub board_height: u32,
    /// Name of the ruleset this game is played with.
    pub ruleset: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 11,
            board_height: 11,
            ruleset: "default".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the board size.
    #[must_use]
    pub fn with_board_size(mut self, width: u32, height: u32) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    /// Builder: set the ruleset name.
    #[must_use]
    pub fn with_ruleset(mut self, ruleset: impl Into<String>) -> Self {
        self.ruleset = ruleset.into();
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.board_width == 0 || self.board_height == 0 {
            return Err(RuleError::InvalidConfig(format!(
                "board must be at least 1x1, got {}x{}",
                self.board_width, self.board_height
            )));
        }
        if self.ruleset.trim().is_empty() {
            return Err(RuleError::InvalidConfig("ruleset name is empty".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::new();
        assert_eq!(config.board_width, 11);
        assert_eq!(config.board_height, 11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::new().with_board_size(5, 6).with_ruleset("v5");
        assert_eq!((config.board_width, config.board_height), (5, 6));
        assert_eq!(config.ruleset, "v5");
    }

    #[test]
    fn test_zero_sized_board_rejected() {
        let config = GameConfig::new().with_board_size(0, 4);
        assert!(matches!(config.validate(), Err(RuleError::InvalidConfig(_))));

        let parsed = GameConfig::from_json(r#"{ "board_height": 0 }"#);
        assert!(matches!(parsed, Err(RuleError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(GameConfig::from_json("{"), Err(RuleError::Json(_))));
    }
}
