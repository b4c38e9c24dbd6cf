//! # Cast Ranking Engine
//!
//! Turns a raw provider cast list into the short, ordered list shown to
//! users:
//! 1. Select thresholds from the shape of the input
//! 2. Sort a working copy (billing order for movies, episodes for series)
//! 3. Partition into disjoint tiers with a [`TierPipeline`]
//! 4. Report the split to the observer
//! 5. Project tiers into a numbered [`CastFilterResult`]
//!
//! The engine holds no per-call state. One instance can rank any number of
//! casts, from any number of threads.

use std::cmp::Ordering;
use std::sync::Arc;

use cast_model::{CastList, MovieCastMember, SeriesCastMember};
use tracing::{debug, instrument};

use crate::config::{missing_episode_count, select_movie_config, select_series_config};
use crate::error::Result;
use crate::observer::{CastObserver, TracingObserver};
use crate::projector::{project_movie, project_series};
use crate::result::CastFilterResult;
use crate::tier_pipeline::TierPipeline;
use crate::tiers::{
    GuestTier, MovieMainTier, MovieTiers, RecurringTier, SeriesMainTier, SeriesTiers,
    SupportingTier,
};

/// Ranks cast lists into tiers.
#[derive(Clone)]
pub struct CastRankingEngine {
    observer: Arc<dyn CastObserver>,
}

impl CastRankingEngine {
    /// Create an engine that reports tier splits through `tracing`.
    pub fn new() -> Self {
        Self {
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the observer (builder pattern).
    pub fn with_observer(mut self, observer: impl CastObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Share an existing observer (builder pattern).
    pub fn with_shared_observer(mut self, observer: Arc<dyn CastObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Main entry point: rank a tagged cast list.
    ///
    /// # Arguments
    /// * `cast` - Raw cast list; its variant decides movie or series ranking
    /// * `total_episodes` - Required for series, ignored for movies
    ///
    /// # Returns
    /// * `Ok(CastFilterResult)` - Ordered cast plus tier statistics
    /// * `Err(RankingError::InvalidArgument)` - Series without an episode count
    pub fn filter_cast_members(
        &self,
        cast: &CastList,
        total_episodes: Option<u32>,
    ) -> Result<CastFilterResult> {
        match cast {
            CastList::Movie(members) => Ok(self.rank_movie_cast(members)),
            CastList::Series(members) => {
                let total_episodes = total_episodes.ok_or_else(missing_episode_count)?;
                Ok(self.rank_series_cast(members, total_episodes))
            }
        }
    }

    /// Rank a movie cast into main and supporting tiers.
    #[instrument(skip(self, cast), fields(cast_size = cast.len()))]
    pub fn rank_movie_cast(&self, cast: &[MovieCastMember]) -> CastFilterResult {
        let config = select_movie_config(cast);
        debug!("Selected movie config: {:?}", config);

        let mut sorted: Vec<&MovieCastMember> = cast.iter().collect();
        sorted.sort_by(|a, b| {
            a.credit_rank()
                .cmp(&b.credit_rank())
                .then_with(|| popularity_desc(a.popularity, b.popularity))
        });

        let pipeline = TierPipeline::new()
            .add_tier(MovieMainTier::from_config(&config))
            .add_tier(SupportingTier::from_config(&config));
        let mut selected = pipeline.apply(&sorted).into_iter();

        let tiers = MovieTiers {
            main: selected.next().unwrap_or_default(),
            supporting: selected.next().unwrap_or_default(),
        };

        self.observer.on_movie_tiers(&tiers, &config);
        project_movie(&tiers, cast)
    }

    /// Rank a series cast into main, recurring and guest tiers.
    #[instrument(skip(self, cast), fields(cast_size = cast.len()))]
    pub fn rank_series_cast(
        &self,
        cast: &[SeriesCastMember],
        total_episodes: u32,
    ) -> CastFilterResult {
        let config = select_series_config(total_episodes);
        debug!("Selected series config: {:?}", config);

        let mut sorted: Vec<&SeriesCastMember> = cast.iter().collect();
        sorted.sort_by(|a, b| {
            b.total_episode_count
                .cmp(&a.total_episode_count)
                .then_with(|| popularity_desc(a.popularity, b.popularity))
        });

        let pipeline = TierPipeline::new()
            .add_tier(SeriesMainTier::from_config(&config))
            .add_tier(RecurringTier::from_config(&config))
            .add_tier(GuestTier::from_config(&config));
        let mut selected = pipeline.apply(&sorted).into_iter();

        let tiers = SeriesTiers {
            main: selected.next().unwrap_or_default(),
            recurring: selected.next().unwrap_or_default(),
            guest: selected.next().unwrap_or_default(),
        };

        self.observer
            .on_series_tiers(&tiers, &config, total_episodes);
        project_series(&tiers, cast, config.min_popularity_for_guest)
    }
}

impl Default for CastRankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Higher popularity first. NaN sorts after every real score.
pub(crate) fn popularity_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RankingError;
    use crate::observer::NoopObserver;
    use cast_model::RoleCredit;
    use std::sync::Mutex;

    fn movie(id: u64, order: Option<u32>, popularity: f64) -> MovieCastMember {
        MovieCastMember {
            id,
            name: format!("Actor {}", id),
            profile_path: Some(format!("/{}.jpg", id)),
            popularity,
            character: format!("Character {}", id),
            order,
        }
    }

    fn series(id: u64, episodes: u32, popularity: f64) -> SeriesCastMember {
        SeriesCastMember {
            id,
            name: format!("Actor {}", id),
            profile_path: Some(format!("/{}.jpg", id)),
            popularity,
            roles: vec![RoleCredit {
                character: format!("Character {}", id),
                episode_count: episodes,
            }],
            total_episode_count: episodes,
        }
    }

    fn engine() -> CastRankingEngine {
        CastRankingEngine::new().with_observer(NoopObserver)
    }

    #[test]
    fn test_popularity_desc_puts_nan_last() {
        assert_eq!(popularity_desc(5.0, 1.0), Ordering::Less);
        assert_eq!(popularity_desc(f64::NAN, 1.0), Ordering::Greater);
        assert_eq!(popularity_desc(1.0, f64::NAN), Ordering::Less);
    }

    #[test]
    fn test_movie_sorted_by_order_then_popularity() {
        let cast = vec![
            movie(1, None, 50.0),
            movie(2, Some(1), 1.0),
            movie(3, Some(0), 1.0),
            movie(4, Some(1), 3.0),
        ];
        let result = engine().rank_movie_cast(&cast);
        let ids: Vec<u64> = result.cast.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 4, 2, 1]);
    }

    #[test]
    fn test_series_sorted_by_episodes_then_popularity() {
        let cast = vec![
            series(1, 3, 1.0),
            series(2, 10, 1.0),
            series(3, 3, 9.0),
        ];
        let result = engine().rank_series_cast(&cast, 20);
        let ids: Vec<u64> = result.cast.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_series_main_overflow_falls_through_to_recurring() {
        // 31 regulars with enough episodes; only 30 fit in main on a short series
        let cast: Vec<SeriesCastMember> = (1..=31).map(|i| series(i, 10, 6.0)).collect();
        let result = engine().rank_series_cast(&cast, 20);
        let stats = result.series_stats().unwrap();
        assert_eq!(stats.main_cast_count, 30);
        assert_eq!(stats.recurring_cast_count, 1);
        assert_eq!(result.cast[30].id, 31);
    }

    #[test]
    fn test_series_without_episodes_fails() {
        let cast = CastList::Series(vec![series(1, 3, 1.0)]);
        let err = engine().filter_cast_members(&cast, None).unwrap_err();
        assert!(matches!(err, RankingError::InvalidArgument(_)));
    }

    #[test]
    fn test_movie_ignores_episode_count() {
        let cast = CastList::Movie(vec![movie(1, Some(0), 1.0)]);
        let with = engine().filter_cast_members(&cast, Some(12)).unwrap();
        let without = engine().filter_cast_members(&cast, None).unwrap();
        assert_eq!(with, without);
    }

    #[derive(Default)]
    struct RecordingObserver {
        series_splits: Mutex<Vec<(usize, usize, usize, u32)>>,
    }

    impl CastObserver for RecordingObserver {
        fn on_series_tiers(
            &self,
            tiers: &SeriesTiers<'_>,
            _config: &crate::config::SeriesFilterConfig,
            total_episodes: u32,
        ) {
            self.series_splits.lock().unwrap().push((
                tiers.main.len(),
                tiers.recurring.len(),
                tiers.guest.len(),
                total_episodes,
            ));
        }
    }

    #[test]
    fn test_observer_receives_tier_split() {
        let observer = Arc::new(RecordingObserver::default());
        let engine = CastRankingEngine::new().with_shared_observer(observer.clone());

        let cast = vec![series(1, 10, 1.0), series(2, 1, 6.0), series(3, 0, 20.0)];
        engine.rank_series_cast(&cast, 24);

        let splits = observer.series_splits.lock().unwrap();
        assert_eq!(splits.as_slice(), &[(1, 1, 1, 24)]);
    }
}
