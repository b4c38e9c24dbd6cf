//! Supporting tier for movies.
//!
//! Picks up credited members outside the main tier who are still popular
//! enough to be worth showing. Uncredited appearances never qualify here.

use crate::config::MovieFilterConfig;
use crate::tiers::contains_ignore_case;
use crate::traits::TierSelector;
use cast_model::{CastCredit, MovieCastMember};

/// Admits popular, credited members up to `max_cast`.
pub struct SupportingTier {
    min_popularity: f64,
    max_cast: usize,
}

impl SupportingTier {
    pub fn new(min_popularity: f64, max_cast: usize) -> Self {
        Self {
            min_popularity,
            max_cast,
        }
    }

    pub fn from_config(config: &MovieFilterConfig) -> Self {
        Self::new(config.min_popularity_for_supporting, config.max_supporting_cast)
    }
}

impl TierSelector<MovieCastMember> for SupportingTier {
    fn name(&self) -> &str {
        "SupportingTier"
    }

    fn admits(&self, member: &MovieCastMember, _position: usize) -> bool {
        member.popularity >= self.min_popularity
            && member.has_photo()
            && member.has_character()
            && !contains_ignore_case(&member.character, "uncredited")
    }

    fn limit(&self) -> Option<usize> {
        Some(self.max_cast)
    }
}
