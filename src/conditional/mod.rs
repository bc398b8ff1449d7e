//! Rule predicates and conditions.
//!
//! Rules decide whether a player's action is legal against the current state.
//!
//! ## Key Components
//!
//! - [`Predicate`]: One rule check. Passes, or fails with a message.
//! - [`Condition`]: An ordered list of predicates. Fails with *every*
//!   violation message, not just the first.
//! - [`MetaValue`]: Action-specific data (target position, amount) forwarded
//!   to predicates that need it; [`MetaArgs`] reads it back with types.
//!
//! ## Metadata
//!
//! Predicates come in two shapes. Metadata-free predicates only look at the
//! state and the acting player. Metadata-aware predicates additionally get
//! the action's metadata list. [`Predicate::requires_meta_data`] tells them
//! apart without running them, and a condition requires metadata if any of
//! its predicates do.
//!
//! ## Example
//!
//! ```
//! use tank_rules::conditional::{Condition, MetaArgs, MetaValue, Predicate};
//! use tank_rules::core::{attributes::keys, GameConfig, Player, PlayerRef, Position, State, Unit};
//!
//! let can_shoot = Condition::new([
//!     Predicate::check(
//!         |state: &State, player: &PlayerRef| state.tank_int(player, keys::ACTION_POINTS, 0) >= 1,
//!         "not enough action points",
//!     ),
//!     Predicate::with_meta(|state: &State, player: &PlayerRef, meta: &[MetaValue]| {
//!         let target = MetaArgs::new(meta).position(0).map_err(|e| e.to_string())?;
//!         let range = state.tank_int(player, keys::RANGE, 0);
//!         match state.tank_position(player) {
//!             Some(pos) if i64::from(pos.distance_to(target)) <= range => Ok(()),
//!             _ => Err(format!("{target} is out of range")),
//!         }
//!     }),
//! ]);
//!
//! let mut state = State::new(&GameConfig::new().with_board_size(5, 5));
//! state.add_player(Player::new("Ty"));
//! state.place_tank(Position::new(0, 0), Unit::tank("Ty").with_attribute(keys::RANGE, 2)).unwrap();
//!
//! let ty = PlayerRef::new("Ty");
//! assert!(can_shoot.requires_meta_data());
//! assert_eq!(
//!     can_shoot.test(&state, &ty, &[MetaValue::from(Position::new(4, 4))]),
//!     Err(vec!["not enough action points".to_string(), "E5 is out of range".to_string()]),
//! );
//! ```

mod condition;
mod meta;
mod predicate;

pub use condition::{Condition, ConditionOutcome};
pub use meta::{MetaArgs, MetaData, MetaValue};
pub use predicate::{Predicate, PredicateOutcome};
