//! Core game types: players, positions, attributes, board, state, configuration.
//!
//! These are the collaborators rule predicates read from. The conditional
//! layer is generic over them, so games with their own state types can skip
//! this module entirely.

pub mod attributes;
pub mod board;
pub mod config;
pub mod player;
pub mod position;
pub mod state;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use board::{Board, Unit};
pub use config::GameConfig;
pub use player::{Player, PlayerRef};
pub use position::Position;
pub use state::State;
