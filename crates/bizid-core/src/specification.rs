//! # Specification Seam
//!
//! A specification decides whether an entity satisfies a rule and explains
//! why not. Implementations return a fresh [`ValidationResult`] per call
//! and keep no per-call state, so a single instance can be shared across
//! threads behind an `Arc`.

use crate::result::ValidationResult;

/// A rule that entities of type `T` can satisfy.
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Evaluate `entity`, returning the verdict and every failure reason.
    fn evaluate(&self, entity: &T) -> ValidationResult;

    /// Whether `entity` satisfies the rule.
    fn is_satisfied_by(&self, entity: &T) -> bool {
        self.evaluate(entity).is_valid()
    }
}
