//! Main tier for movies.
//!
//! Billing position is the primary signal: anyone in the top window of the
//! sorted credits is main cast, and so is anyone popular enough to stand out
//! further down. Either way they need a photo and a character name.

use crate::config::MovieFilterConfig;
use crate::traits::TierSelector;
use cast_model::{CastCredit, MovieCastMember};

/// Admits top-billed or popular members with a photo and a character.
///
/// ## Algorithm
/// Keep a member if:
/// 1. its position in the sorted cast is below `top_cast_count`, OR
///    its popularity is at least `popularity_threshold`
/// 2. AND it has a photo
/// 3. AND it has a non-empty character name
pub struct MovieMainTier {
    top_cast_count: usize,
    popularity_threshold: f64,
}

impl MovieMainTier {
    pub fn new(top_cast_count: usize, popularity_threshold: f64) -> Self {
        Self {
            top_cast_count,
            popularity_threshold,
        }
    }

    pub fn from_config(config: &MovieFilterConfig) -> Self {
        Self::new(config.top_cast_count, config.popularity_threshold)
    }
}

impl TierSelector<MovieCastMember> for MovieMainTier {
    fn name(&self) -> &str {
        "MovieMainTier"
    }

    fn admits(&self, member: &MovieCastMember, position: usize) -> bool {
        (position < self.top_cast_count || member.popularity >= self.popularity_threshold)
            && member.has_photo()
            && member.has_character()
    }
}
