//! Configuration selection for a ranking pass.
//!
//! Thresholds are not fixed: they scale with the shape of the input.
//! Big, star-heavy movie casts get a wider main window and higher bars;
//! long-running series measure "main cast" against their own length.
//!
//! Every configuration is a fresh immutable value. Nothing here is cached
//! between calls.

use cast_model::{CastCredit, CastList, MovieCastMember};
use serde::{Deserialize, Serialize};

use crate::error::{RankingError, Result};

/// Popularity at or above which an actor counts as high profile.
pub const HIGH_PROFILE_POPULARITY: f64 = 20.0;

/// Which row of the scaling table a configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigTier {
    Small,
    Medium,
    Large,
}

/// Thresholds for ranking a movie cast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovieFilterConfig {
    pub tier: ConfigTier,
    /// Sorted positions below this are main-cast candidates regardless of popularity
    pub top_cast_count: usize,
    /// Popularity that qualifies for main cast outside the top window
    pub popularity_threshold: f64,
    pub min_popularity_for_supporting: f64,
    pub max_supporting_cast: usize,
}

/// Thresholds for ranking a series cast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesFilterConfig {
    pub tier: ConfigTier,
    /// Episodes needed to count as main cast
    pub minimum_episodes: u32,
    pub top_cast_count: usize,
    /// Popularity needed for the recurring tier
    pub popularity_threshold: f64,
    /// Lower popularity bar for guests with a meaningful credited role
    pub min_popularity_for_recurring: f64,
    pub max_recurring_cast: usize,
    pub max_guest_stars: usize,
    /// Popularity that lets a guest in on star power alone
    pub min_popularity_for_guest: f64,
}

/// Thresholds for one ranking pass, whichever media kind it is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum FilterConfiguration {
    Movie(MovieFilterConfig),
    Series(SeriesFilterConfig),
}

impl FilterConfiguration {
    pub fn tier(&self) -> ConfigTier {
        match self {
            FilterConfiguration::Movie(config) => config.tier,
            FilterConfiguration::Series(config) => config.tier,
        }
    }
}

/// Number of members at or above [`HIGH_PROFILE_POPULARITY`].
pub fn count_high_profile<M: CastCredit>(cast: &[M]) -> usize {
    cast.iter()
        .filter(|member| member.popularity() >= HIGH_PROFILE_POPULARITY)
        .count()
}

/// Pick movie thresholds from the size and star power of the full cast.
///
/// ## Algorithm
/// First match wins:
/// 1. more than 100 members AND more than 15 high-profile → large
/// 2. more than 50 members OR more than 10 high-profile → medium
/// 3. otherwise → small
pub fn select_movie_config(cast: &[MovieCastMember]) -> MovieFilterConfig {
    let high_profile_actors = count_high_profile(cast);
    let total_cast_size = cast.len();

    if total_cast_size > 100 && high_profile_actors > 15 {
        MovieFilterConfig {
            tier: ConfigTier::Large,
            top_cast_count: 50,
            popularity_threshold: 15.0,
            min_popularity_for_supporting: 8.0,
            max_supporting_cast: 20,
        }
    } else if total_cast_size > 50 || high_profile_actors > 10 {
        MovieFilterConfig {
            tier: ConfigTier::Medium,
            top_cast_count: 40,
            popularity_threshold: 12.0,
            min_popularity_for_supporting: 6.0,
            max_supporting_cast: 15,
        }
    } else {
        MovieFilterConfig {
            tier: ConfigTier::Small,
            top_cast_count: 30,
            popularity_threshold: 10.0,
            min_popularity_for_supporting: 5.0,
            max_supporting_cast: 10,
        }
    }
}

/// Pick series thresholds from the total number of episodes.
///
/// Long series (more than 70 episodes) require main cast to appear in at
/// least a tenth of all episodes, rounded up.
pub fn select_series_config(total_episodes: u32) -> SeriesFilterConfig {
    if total_episodes > 70 {
        SeriesFilterConfig {
            tier: ConfigTier::Large,
            minimum_episodes: total_episodes.div_ceil(10),
            top_cast_count: 50,
            popularity_threshold: 10.0,
            min_popularity_for_recurring: 5.0,
            max_recurring_cast: 20,
            max_guest_stars: 15,
            min_popularity_for_guest: 15.0,
        }
    } else if total_episodes > 30 {
        SeriesFilterConfig {
            tier: ConfigTier::Medium,
            minimum_episodes: 3,
            top_cast_count: 40,
            popularity_threshold: 8.0,
            min_popularity_for_recurring: 4.0,
            max_recurring_cast: 15,
            max_guest_stars: 12,
            min_popularity_for_guest: 12.0,
        }
    } else {
        SeriesFilterConfig {
            tier: ConfigTier::Small,
            minimum_episodes: 2,
            top_cast_count: 30,
            popularity_threshold: 5.0,
            min_popularity_for_recurring: 3.0,
            max_recurring_cast: 10,
            max_guest_stars: 10,
            min_popularity_for_guest: 10.0,
        }
    }
}

/// Select the configuration a ranking pass over `cast` would use.
///
/// Fails for a series without an episode count, like the engine does.
pub fn select_config(cast: &CastList, total_episodes: Option<u32>) -> Result<FilterConfiguration> {
    match cast {
        CastList::Movie(members) => Ok(FilterConfiguration::Movie(select_movie_config(members))),
        CastList::Series(_) => {
            let total_episodes = total_episodes.ok_or_else(missing_episode_count)?;
            Ok(FilterConfiguration::Series(select_series_config(total_episodes)))
        }
    }
}

pub(crate) fn missing_episode_count() -> RankingError {
    RankingError::InvalidArgument(
        "total episode count is required for series cast filtering".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_cast(size: usize, high_profile: usize) -> Vec<MovieCastMember> {
        (0..size)
            .map(|i| MovieCastMember {
                id: i as u64 + 1,
                name: format!("Actor {}", i),
                profile_path: Some(format!("/{}.jpg", i)),
                popularity: if i < high_profile { 25.0 } else { 1.0 },
                character: format!("Character {}", i),
                order: Some(i as u32),
            })
            .collect()
    }

    #[test]
    fn test_small_movie_uses_default_config() {
        let config = select_movie_config(&movie_cast(8, 0));
        assert_eq!(config.tier, ConfigTier::Small);
        assert_eq!(config.top_cast_count, 30);
        assert_eq!(config.popularity_threshold, 10.0);
        assert_eq!(config.min_popularity_for_supporting, 5.0);
        assert_eq!(config.max_supporting_cast, 10);
    }

    #[test]
    fn test_large_movie_needs_size_and_star_power() {
        let config = select_movie_config(&movie_cast(120, 18));
        assert_eq!(config.tier, ConfigTier::Large);
        assert_eq!(config.top_cast_count, 50);
        assert_eq!(config.popularity_threshold, 15.0);
        assert_eq!(config.min_popularity_for_supporting, 8.0);
        assert_eq!(config.max_supporting_cast, 20);

        // Big cast, few stars: only medium
        assert_eq!(select_movie_config(&movie_cast(120, 15)).tier, ConfigTier::Medium);
    }

    #[test]
    fn test_medium_movie_on_either_condition() {
        assert_eq!(select_movie_config(&movie_cast(51, 0)).tier, ConfigTier::Medium);
        assert_eq!(select_movie_config(&movie_cast(20, 11)).tier, ConfigTier::Medium);
        assert_eq!(select_movie_config(&movie_cast(50, 10)).tier, ConfigTier::Small);
    }

    #[test]
    fn test_movie_config_is_monotonic() {
        let mut previous = ConfigTier::Small;
        for (size, stars) in [(10, 0), (40, 5), (51, 5), (60, 12), (101, 16), (300, 40)] {
            let tier = select_movie_config(&movie_cast(size, stars)).tier;
            assert!(tier >= previous, "{}/{} selected {:?} after {:?}", size, stars, tier, previous);
            previous = tier;
        }
    }

    #[test]
    fn test_series_config_tiers() {
        let short = select_series_config(24);
        assert_eq!(short.tier, ConfigTier::Small);
        assert_eq!(short.minimum_episodes, 2);
        assert_eq!(short.top_cast_count, 30);
        assert_eq!(short.popularity_threshold, 5.0);
        assert_eq!(short.min_popularity_for_recurring, 3.0);
        assert_eq!(short.max_recurring_cast, 10);
        assert_eq!(short.max_guest_stars, 10);
        assert_eq!(short.min_popularity_for_guest, 10.0);

        let medium = select_series_config(31);
        assert_eq!(medium.tier, ConfigTier::Medium);
        assert_eq!(medium.minimum_episodes, 3);
        assert_eq!(select_series_config(30).tier, ConfigTier::Small);
        assert_eq!(select_series_config(70).tier, ConfigTier::Medium);

        let long = select_series_config(80);
        assert_eq!(long.tier, ConfigTier::Large);
        assert_eq!(long.minimum_episodes, 8);
        assert_eq!(long.max_guest_stars, 15);
        assert_eq!(long.min_popularity_for_guest, 15.0);
    }

    #[test]
    fn test_long_series_minimum_episodes_rounds_up() {
        assert_eq!(select_series_config(71).minimum_episodes, 8);
        assert_eq!(select_series_config(100).minimum_episodes, 10);
        assert_eq!(select_series_config(101).minimum_episodes, 11);
    }

    #[test]
    fn test_zero_episodes_is_smallest_tier() {
        assert_eq!(select_series_config(0), select_series_config(30));
    }

    #[test]
    fn test_series_config_is_idempotent() {
        for episodes in [0, 12, 45, 71, 250] {
            assert_eq!(select_series_config(episodes), select_series_config(episodes));
        }
    }

    #[test]
    fn test_select_config_requires_episodes_for_series() {
        let series = CastList::Series(vec![]);
        assert!(matches!(
            select_config(&series, None),
            Err(RankingError::InvalidArgument(_))
        ));
        assert!(matches!(
            select_config(&series, Some(10)),
            Ok(FilterConfiguration::Series(_))
        ));
        assert!(matches!(
            select_config(&CastList::Movie(vec![]), None),
            Ok(FilterConfiguration::Movie(_))
        ));
    }
}
