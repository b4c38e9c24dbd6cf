//! Core traits for the tier pipeline.
//!
//! A tier is described by a selector: a predicate over a sorted working
//! copy of the cast plus an optional size cap. Selectors know nothing about
//! each other; the [`TierPipeline`](crate::TierPipeline) keeps tiers
//! disjoint.

/// Admission rule for one tier of the ranking.
///
/// ## Design Note
/// - `Send + Sync` lets an engine built from selectors be shared across threads
/// - `position` is the member's index in the fully sorted cast, not in the tier
pub trait TierSelector<M>: Send + Sync {
    /// Returns the name of this tier (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `member`, found at `position` in the sorted cast, belongs here.
    fn admits(&self, member: &M, position: usize) -> bool;

    /// Maximum number of members in this tier. `None` means unbounded.
    fn limit(&self) -> Option<usize> {
        None
    }
}
