//! Rule conditions.
//!
//! A [`Condition`] is an ordered list of predicates evaluated together.
//! Unlike `Iterator::all`, evaluation never stops at the first failure: every
//! predicate runs and every violation message is collected, in order, so the
//! player sees all the reasons an action was rejected at once.

use super::meta::MetaValue;
use super::predicate::Predicate;
use crate::core::{PlayerRef, State};

/// Outcome of a condition: `Err` carries every violation message in evaluation order.
pub type ConditionOutcome = Result<(), Vec<String>>;

/// An ordered aggregate of predicates.
pub struct Condition<S = State, P = PlayerRef> {
    predicates: Vec<Predicate<S, P>>,
}

impl<S, P> Condition<S, P> {
    /// Create a condition from predicates, evaluated in iteration order.
    pub fn new(predicates: impl IntoIterator<Item = Predicate<S, P>>) -> Self {
        Self {
            predicates: predicates.into_iter().collect(),
        }
    }

    /// Create a condition with no predicates. It always passes.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Builder: append a predicate.
    #[must_use]
    pub fn with(mut self, predicate: Predicate<S, P>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append another condition's predicates after this one's.
    #[must_use]
    pub fn and(mut self, other: Condition<S, P>) -> Self {
        self.predicates.extend(other.predicates);
        self
    }

    /// Number of predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Check if there are no predicates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// The predicates, in evaluation order.
    #[must_use]
    pub fn predicates(&self) -> &[Predicate<S, P>] {
        &self.predicates
    }

    /// Check if any predicate requires metadata.
    #[must_use]
    pub fn requires_meta_data(&self) -> bool {
        self.predicates.iter().any(Predicate::requires_meta_data)
    }

    /// Evaluate every predicate and collect all violations.
    ///
    /// Metadata-aware predicates receive `meta`; the others are invoked
    /// without it.
    pub fn test(&self, state: &S, player: &P, meta: &[MetaValue]) -> ConditionOutcome {
        let violations =
            self.predicates
                .iter()
                .enumerate()
                .fold(Vec::new(), |mut violations, (index, predicate)| {
                    let outcome = if predicate.requires_meta_data() {
                        predicate.test(state, player, meta)
                    } else {
                        predicate.test_without_meta(state, player)
                    };
                    if let Err(message) = outcome {
                        tracing::trace!(index, %message, "predicate failed");
                        violations.push(message);
                    }
                    violations
                });

        tracing::debug!(
            predicates = self.predicates.len(),
            violations = violations.len(),
            "condition evaluated"
        );

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, P> Clone for Condition<S, P> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
        }
    }
}

impl<S, P> Default for Condition<S, P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S, P> std::fmt::Debug for Condition<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Condition")
            .field("predicates", &self.predicates)
            .finish()
    }
}

impl<S, P> From<Predicate<S, P>> for Condition<S, P> {
    fn from(predicate: Predicate<S, P>) -> Self {
        Self::new([predicate])
    }
}

impl<S, P> FromIterator<Predicate<S, P>> for Condition<S, P> {
    fn from_iter<I: IntoIterator<Item = Predicate<S, P>>>(iter: I) -> Self {
        Self::new(iter)
    }
}
