//! # tank-rules
//!
//! Composable rule validation for a turn-based tank game.
//!
//! ## Design Principles
//!
//! 1. **Complete Diagnostics**: A rejected action reports every rule it
//!    broke, not just the first one found.
//!
//! 2. **Rules Are Values**: Predicates and conditions are immutable, cheap to
//!    clone, and safe to share across threads. Define them once, reuse them
//!    for every action.
//!
//! 3. **Metadata Only Where Needed**: Rules that don't care about action
//!    metadata never see it. Rules that do get it as an ordered list.
//!
//! ## Architecture
//!
//! - **Violations vs. Errors**: A broken rule is an `Err(message)` outcome.
//!   [`RuleError`] is reserved for API misuse and bad input (malformed
//!   metadata, invalid configuration, unparseable state).
//!
//! - **Persistent State**: [`core::State`] uses `im` structures, so
//!   validators can work on an O(1) snapshot.
//!
//! ## Modules
//!
//! - `core`: Players, positions, attributes, board, state, configuration
//! - `conditional`: Predicates, conditions, action metadata
//! - `error`: Error types

pub mod conditional;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use crate::conditional::{
    Condition, ConditionOutcome, MetaArgs, MetaData, MetaValue, Predicate, PredicateOutcome,
};

pub use crate::core::{
    AttributeKey, AttributeValue, Attributes, Board, GameConfig, Player, PlayerRef, Position,
    State, Unit,
};

pub use crate::error::{Result, RuleError};
