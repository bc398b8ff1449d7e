//! Error types for the rules engine.
//!
//! Rule violations are *not* errors: they are reported as failure outcomes
//! carrying a message (see [`crate::conditional`]). `RuleError` covers the
//! remaining failures: misuse of the predicate API, malformed metadata, and
//! invalid configuration or state input.

/// Errors raised outside of ordinary rule evaluation.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A metadata-aware predicate was invoked through the metadata-free entry point.
    #[error("predicate requires metadata but was invoked without it")]
    MetadataRequired,

    /// A metadata argument was expected at `index` but the list is too short.
    #[error("missing metadata argument {index}: expected {expected}")]
    MissingMeta {
        /// Position in the metadata list.
        index: usize,
        /// Name of the expected value type.
        expected: &'static str,
    },

    /// A metadata argument had the wrong type.
    #[error("metadata argument {index} has type {found}, expected {expected}")]
    MetaType {
        /// Position in the metadata list.
        index: usize,
        /// Name of the expected value type.
        expected: &'static str,
        /// Name of the type actually supplied.
        found: &'static str,
    },

    /// A human-readable position could not be parsed.
    #[error("invalid position: {0:?}")]
    InvalidPosition(String),

    /// A position lies outside the board.
    #[error("position {position} is outside the {width}x{height} board")]
    OffBoard {
        /// The rejected position, in human-readable form.
        position: String,
        /// Board width.
        width: u32,
        /// Board height.
        height: u32,
    },

    /// A unit placed as a player's tank is not a tank.
    #[error("unit at {position} is not a tank")]
    NotATank {
        /// Where the unit was to be placed, in human-readable form.
        position: String,
    },

    /// A player already has a tank elsewhere on the board.
    #[error("{owner} already has a tank at {existing}")]
    DuplicateTank {
        /// The tank's owner.
        owner: String,
        /// Position of the tank the player already has.
        existing: String,
    },

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON input could not be decoded.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results carrying a [`RuleError`].
pub type Result<T> = std::result::Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RuleError::MetadataRequired.to_string(),
            "predicate requires metadata but was invoked without it"
        );

        let err = RuleError::MetaType { index: 1, expected: "position", found: "int" };
        assert_eq!(err.to_string(), "metadata argument 1 has type int, expected position");

        let err = RuleError::DuplicateTank { owner: "Ryan".into(), existing: "B2".into() };
        assert_eq!(err.to_string(), "Ryan already has a tank at B2");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<i64, _> = serde_json::from_str("not json");
        let err: RuleError = parse.unwrap_err().into();
        assert!(matches!(err, RuleError::Json(_)));
    }
}
