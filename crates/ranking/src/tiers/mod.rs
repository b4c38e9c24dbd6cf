//! Tier selectors for the ranking engine.
//!
//! Movies use two tiers (main, supporting); series use three (main,
//! recurring, guest). Each selector is constructed from the pass's
//! configuration and composed into a [`TierPipeline`](crate::TierPipeline).

pub mod guest;
pub mod movie_main;
pub mod recurring;
pub mod series_main;
pub mod supporting;

// Re-export for convenience
pub use guest::GuestTier;
pub use movie_main::MovieMainTier;
pub use recurring::RecurringTier;
pub use series_main::SeriesMainTier;
pub use supporting::SupportingTier;

use cast_model::{MovieCastMember, SeriesCastMember};

/// Movie cast split into its two tiers, each in sorted order.
#[derive(Debug, Clone, Default)]
pub struct MovieTiers<'a> {
    pub main: Vec<&'a MovieCastMember>,
    pub supporting: Vec<&'a MovieCastMember>,
}

impl MovieTiers<'_> {
    pub fn len(&self) -> usize {
        self.main.len() + self.supporting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Series cast split into its three tiers, each in sorted order.
#[derive(Debug, Clone, Default)]
pub struct SeriesTiers<'a> {
    pub main: Vec<&'a SeriesCastMember>,
    pub recurring: Vec<&'a SeriesCastMember>,
    pub guest: Vec<&'a SeriesCastMember>,
}

impl SeriesTiers<'_> {
    pub fn len(&self) -> usize {
        self.main.len() + self.recurring.len() + self.guest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Case-insensitive substring test. `needle` must already be lowercase.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
