//! Action metadata passed to metadata-aware predicates.
//!
//! Metadata is an ordered, heterogeneous list whose meaning each rule defines
//! for itself: a shoot rule might expect `[Position]`, a donate rule
//! `[Player, Int]`. The engine only forwards it.
//!
//! [`MetaArgs`] reads typed values out of the list and reports mismatches as
//! [`RuleError`]s, which rules usually turn into violation messages:
//!
//! ```
//! use tank_rules::conditional::{MetaArgs, MetaValue};
//! use tank_rules::core::Position;
//!
//! let meta = [MetaValue::from(Position::new(2, 0)), MetaValue::Int(3)];
//! let args = MetaArgs::new(&meta);
//!
//! assert_eq!(args.position(0).unwrap(), Position::new(2, 0));
//! assert_eq!(args.int(1).unwrap(), 3);
//! assert!(args.text(1).is_err());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerRef, Position};
use crate::error::{Result, RuleError};

/// A single metadata value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MetaValue {
    /// Integer (amounts, counts).
    Int(i64),
    /// Flag.
    Bool(bool),
    /// Free text.
    Text(String),
    /// Board position (move or shoot target).
    Position(Position),
    /// Another player (donation or vote target).
    Player(PlayerRef),
}

impl MetaValue {
    /// Name of this value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            MetaValue::Int(_) => "int",
            MetaValue::Bool(_) => "bool",
            MetaValue::Text(_) => "text",
            MetaValue::Position(_) => "position",
            MetaValue::Player(_) => "player",
        }
    }
}

impl From<i64> for MetaValue {
    fn from(v: i64) -> Self {
        MetaValue::Int(v)
    }
}

impl From<i32> for MetaValue {
    fn from(v: i32) -> Self {
        MetaValue::Int(i64::from(v))
    }
}

impl From<bool> for MetaValue {
    fn from(v: bool) -> Self {
        MetaValue::Bool(v)
    }
}

impl From<String> for MetaValue {
    fn from(v: String) -> Self {
        MetaValue::Text(v)
    }
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        MetaValue::Text(v.to_string())
    }
}

impl From<Position> for MetaValue {
    fn from(v: Position) -> Self {
        MetaValue::Position(v)
    }
}

impl From<PlayerRef> for MetaValue {
    fn from(v: PlayerRef) -> Self {
        MetaValue::Player(v)
    }
}

/// Owned metadata list.
///
/// SmallVec keeps the common case of 0-4 values off the heap.
pub type MetaData = SmallVec<[MetaValue; 4]>;

/// Typed, index-based reader over a metadata slice.
#[derive(Clone, Copy, Debug)]
pub struct MetaArgs<'a> {
    values: &'a [MetaValue],
}

impl<'a> MetaArgs<'a> {
    /// Wrap a metadata slice.
    #[must_use]
    pub fn new(values: &'a [MetaValue]) -> Self {
        Self { values }
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn get(&self, index: usize, expected: &'static str) -> Result<&'a MetaValue> {
        self.values
            .get(index)
            .ok_or(RuleError::MissingMeta { index, expected })
    }

    fn mismatch(index: usize, expected: &'static str, found: &MetaValue) -> RuleError {
        RuleError::MetaType {
            index,
            expected,
            found: found.type_name(),
        }
    }

    /// Read an integer.
    pub fn int(&self, index: usize) -> Result<i64> {
        match self.get(index, "int")? {
            MetaValue::Int(v) => Ok(*v),
            other => Err(Self::mismatch(index, "int", other)),
        }
    }

    /// Read a flag.
    pub fn bool(&self, index: usize) -> Result<bool> {
        match self.get(index, "bool")? {
            MetaValue::Bool(v) => Ok(*v),
            other => Err(Self::mismatch(index, "bool", other)),
        }
    }

    /// Read text.
    pub fn text(&self, index: usize) -> Result<&'a str> {
        match self.get(index, "text")? {
            MetaValue::Text(v) => Ok(v),
            other => Err(Self::mismatch(index, "text", other)),
        }
    }

    /// Read a board position.
    pub fn position(&self, index: usize) -> Result<Position> {
        match self.get(index, "position")? {
            MetaValue::Position(v) => Ok(*v),
            other => Err(Self::mismatch(index, "position", other)),
        }
    }

    /// Read a player reference.
    pub fn player(&self, index: usize) -> Result<&'a PlayerRef> {
        match self.get(index, "player")? {
            MetaValue::Player(v) => Ok(v),
            other => Err(Self::mismatch(index, "player", other)),
        }
    }
}

impl<'a> From<&'a [MetaValue]> for MetaArgs<'a> {
    fn from(values: &'a [MetaValue]) -> Self {
        Self::new(values)
    }
}
