//! Recurring tier for series.

use crate::config::SeriesFilterConfig;
use crate::traits::TierSelector;
use cast_model::{CastCredit, SeriesCastMember};

/// Admits popular members with at least one episode and a named role.
///
/// ## Algorithm
/// Keep a member if all hold:
/// 1. appears in at least one episode
/// 2. popularity is at least `popularity_threshold`
/// 3. first role has a character name
/// 4. has a photo
pub struct RecurringTier {
    popularity_threshold: f64,
    max_cast: usize,
}

impl RecurringTier {
    pub fn new(popularity_threshold: f64, max_cast: usize) -> Self {
        Self {
            popularity_threshold,
            max_cast,
        }
    }

    pub fn from_config(config: &SeriesFilterConfig) -> Self {
        Self::new(config.popularity_threshold, config.max_recurring_cast)
    }
}

impl TierSelector<SeriesCastMember> for RecurringTier {
    fn name(&self) -> &str {
        "RecurringTier"
    }

    fn admits(&self, member: &SeriesCastMember, _position: usize) -> bool {
        member.total_episode_count > 0
            && member.popularity >= self.popularity_threshold
            && member.first_role_character().is_some()
            && member.has_photo()
    }

    fn limit(&self) -> Option<usize> {
        Some(self.max_cast)
    }
}
