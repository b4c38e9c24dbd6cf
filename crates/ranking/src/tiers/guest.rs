//! Guest tier for series.
//!
//! Guests get in two ways: star power alone (popularity at or above the
//! guest bar), or moderate popularity combined with a real credited role.
//! A photo is required either way.

use crate::config::SeriesFilterConfig;
use crate::tiers::contains_ignore_case;
use crate::traits::TierSelector;
use cast_model::{CastCredit, SeriesCastMember};

/// Admits notable one-off appearances up to `max_guest_stars`.
pub struct GuestTier {
    min_popularity_for_guest: f64,
    min_popularity_for_recurring: f64,
    max_guest_stars: usize,
}

impl GuestTier {
    pub fn new(
        min_popularity_for_guest: f64,
        min_popularity_for_recurring: f64,
        max_guest_stars: usize,
    ) -> Self {
        Self {
            min_popularity_for_guest,
            min_popularity_for_recurring,
            max_guest_stars,
        }
    }

    pub fn from_config(config: &SeriesFilterConfig) -> Self {
        Self::new(
            config.min_popularity_for_guest,
            config.min_popularity_for_recurring,
            config.max_guest_stars,
        )
    }

    /// Named first role that isn't an uncredited or background part.
    fn has_meaningful_role(member: &SeriesCastMember) -> bool {
        member.first_role_character().is_some_and(|character| {
            !contains_ignore_case(character, "uncredited")
                && !contains_ignore_case(character, "background")
        })
    }
}

impl TierSelector<SeriesCastMember> for GuestTier {
    fn name(&self) -> &str {
        "GuestTier"
    }

    fn admits(&self, member: &SeriesCastMember, _position: usize) -> bool {
        let star_power = member.popularity >= self.min_popularity_for_guest;
        let credited_role = member.popularity >= self.min_popularity_for_recurring
            && Self::has_meaningful_role(member);

        (star_power || credited_role) && member.has_photo()
    }

    fn limit(&self) -> Option<usize> {
        Some(self.max_guest_stars)
    }
}
