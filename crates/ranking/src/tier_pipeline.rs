//! The TierPipeline partitions a sorted cast into ordered tiers.
//!
//! Tiers are filled in the order they were added. Each member lands in at
//! most one tier: once claimed by an earlier tier its identifier is skipped
//! by every later one.

use crate::traits::TierSelector;
use cast_model::{CastCredit, CastMemberId};
use std::collections::HashSet;
use tracing::debug;

/// Chains tier selectors into one partitioning pass.
///
/// ## Usage
/// ```ignore
/// let pipeline = TierPipeline::new()
///     .add_tier(MovieMainTier::from_config(&config))
///     .add_tier(SupportingTier::from_config(&config));
///
/// let tiers = pipeline.apply(&sorted);
/// ```
pub struct TierPipeline<M> {
    tiers: Vec<Box<dyn TierSelector<M>>>,
}

impl<M: CastCredit> TierPipeline<M> {
    /// Create a new empty TierPipeline.
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Add a tier to the pipeline (builder pattern).
    pub fn add_tier(mut self, tier: impl TierSelector<M> + 'static) -> Self {
        self.tiers.push(Box::new(tier));
        self
    }

    /// Number of tiers this pipeline produces.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Partition `sorted` into one list per tier.
    ///
    /// ## Algorithm
    /// For each tier in order:
    /// 1. Walk the sorted cast front to back
    /// 2. Skip identifiers already claimed (by this or an earlier tier)
    /// 3. Keep members the selector admits until its limit is reached
    ///
    /// Claimed identifiers live in a set, so the whole pass is linear in
    /// cast size per tier. A duplicated identifier is only ever placed once,
    /// at its first admitted position.
    pub fn apply<'a>(&self, sorted: &[&'a M]) -> Vec<Vec<&'a M>> {
        let mut claimed: HashSet<CastMemberId> = HashSet::with_capacity(sorted.len());
        let mut tiers = Vec::with_capacity(self.tiers.len());

        for tier in &self.tiers {
            let limit = tier.limit().unwrap_or(usize::MAX);
            let mut selected: Vec<&'a M> = Vec::new();

            for (position, &member) in sorted.iter().enumerate() {
                if selected.len() >= limit {
                    break;
                }
                if claimed.contains(&member.id()) {
                    continue;
                }
                if tier.admits(member, position) {
                    claimed.insert(member.id());
                    selected.push(member);
                }
            }

            debug!(
                "Tier selected: {} ({} of {} members)",
                tier.name(),
                selected.len(),
                sorted.len()
            );
            tiers.push(selected);
        }

        tiers
    }
}

impl<M: CastCredit> Default for TierPipeline<M> {
    fn default() -> Self {
        Self::new()
    }
}
