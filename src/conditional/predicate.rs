//! Rule predicates.
//!
//! A [`Predicate`] is one indivisible rule check: given the state and the
//! acting player it either passes or fails with a message. Some rules also
//! need action metadata (a target position, an amount); those are built with
//! the `*_with_meta` constructors and report [`Predicate::requires_meta_data`].
//!
//! Predicates are immutable and cheap to clone, so rules are typically
//! defined once as statics and shared:
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use tank_rules::conditional::Predicate;
//! use tank_rules::core::{attributes::keys, PlayerRef, State};
//!
//! static HAS_ACTION_POINTS: LazyLock<Predicate> = LazyLock::new(|| {
//!     Predicate::check(
//!         |state: &State, player: &PlayerRef| state.tank_int(player, keys::ACTION_POINTS, 0) > 0,
//!         "not enough action points",
//!     )
//! });
//!
//! let state = State::default();
//! let outcome = HAS_ACTION_POINTS.test_without_meta(&state, &PlayerRef::new("Ty"));
//! assert_eq!(outcome, Err("not enough action points".to_string()));
//! ```

use std::sync::Arc;

use super::condition::Condition;
use super::meta::MetaValue;
use crate::core::{PlayerRef, State};
use crate::error::RuleError;

/// Outcome of a single predicate: `Err` carries the violation message.
pub type PredicateOutcome = Result<(), String>;

type MetaFn<S, P> = dyn Fn(&S, &P, &[MetaValue]) -> PredicateOutcome + Send + Sync;
type PlainFn<S, P> = dyn Fn(&S, &P) -> PredicateOutcome + Send + Sync;

/// The two shapes a predicate function can take. Exactly one is held.
enum Check<S, P> {
    WithMeta(Arc<MetaFn<S, P>>),
    WithoutMeta(Arc<PlainFn<S, P>>),
}

impl<S, P> Clone for Check<S, P> {
    fn clone(&self) -> Self {
        match self {
            Check::WithMeta(f) => Check::WithMeta(Arc::clone(f)),
            Check::WithoutMeta(f) => Check::WithoutMeta(Arc::clone(f)),
        }
    }
}

/// A single validation rule over state `S` and player reference `P`.
pub struct Predicate<S = State, P = PlayerRef> {
    check: Check<S, P>,
}

impl<S: 'static, P: 'static> Predicate<S, P> {
    /// Create a metadata-aware predicate from an outcome-producing function.
    pub fn with_meta<F>(f: F) -> Self
    where
        F: Fn(&S, &P, &[MetaValue]) -> PredicateOutcome + Send + Sync + 'static,
    {
        Self {
            check: Check::WithMeta(Arc::new(f)),
        }
    }

    /// Create a metadata-free predicate from an outcome-producing function.
    pub fn without_meta<F>(f: F) -> Self
    where
        F: Fn(&S, &P) -> PredicateOutcome + Send + Sync + 'static,
    {
        Self {
            check: Check::WithoutMeta(Arc::new(f)),
        }
    }

    /// Create a metadata-aware predicate from a boolean test.
    ///
    /// `true` passes; `false` fails with `message`.
    pub fn check_with_meta<F>(test: F, message: impl Into<String>) -> Self
    where
        F: Fn(&S, &P, &[MetaValue]) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::with_meta(move |state, player, meta| {
            if test(state, player, meta) {
                Ok(())
            } else {
                Err(message.clone())
            }
        })
    }

    /// Create a metadata-free predicate from a boolean test.
    ///
    /// `true` passes; `false` fails with `message`.
    pub fn check<F>(test: F, message: impl Into<String>) -> Self
    where
        F: Fn(&S, &P) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::without_meta(move |state, player| {
            if test(state, player) {
                Ok(())
            } else {
                Err(message.clone())
            }
        })
    }
}

impl<S, P> Predicate<S, P> {
    /// Check if this predicate was built from a metadata-aware function.
    #[must_use]
    pub fn requires_meta_data(&self) -> bool {
        matches!(self.check, Check::WithMeta(_))
    }

    /// Evaluate the predicate.
    ///
    /// Metadata-free predicates ignore `meta`.
    pub fn test(&self, state: &S, player: &P, meta: &[MetaValue]) -> PredicateOutcome {
        match &self.check {
            Check::WithMeta(f) => f(state, player, meta),
            Check::WithoutMeta(f) => f(state, player),
        }
    }

    /// Evaluate a metadata-free predicate.
    ///
    /// # Panics
    ///
    /// Panics with [`RuleError::MetadataRequired`] if the predicate requires
    /// metadata. Callers that don't know which kind they hold should check
    /// [`requires_meta_data`](Self::requires_meta_data) or use [`test`](Self::test).
    pub fn test_without_meta(&self, state: &S, player: &P) -> PredicateOutcome {
        match self.try_test_without_meta(state, player) {
            Ok(outcome) => outcome,
            Err(err) => panic!("{err}"),
        }
    }

    /// Evaluate a metadata-free predicate, reporting misuse as an error.
    pub fn try_test_without_meta(
        &self,
        state: &S,
        player: &P,
    ) -> Result<PredicateOutcome, RuleError> {
        match &self.check {
            Check::WithoutMeta(f) => Ok(f(state, player)),
            Check::WithMeta(_) => Err(RuleError::MetadataRequired),
        }
    }

    /// Wrap this predicate in a one-element condition.
    #[must_use]
    pub fn to_condition(&self) -> Condition<S, P> {
        Condition::new([self.clone()])
    }
}

impl<S, P> Clone for Predicate<S, P> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
        }
    }
}

impl<S, P> std::fmt::Debug for Predicate<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate")
            .field("requires_meta_data", &self.requires_meta_data())
            .finish_non_exhaustive()
    }
}
