//! Diagnostic side channel for ranking passes.
//!
//! The engine reports every tier split to an injected observer. What the
//! observer does with it (log, count, ignore) never affects the result.

use crate::config::{MovieFilterConfig, SeriesFilterConfig};
use crate::engine::popularity_desc;
use crate::tiers::{MovieTiers, SeriesTiers};
use cast_model::SeriesCastMember;
use tracing::info;

/// How many guest stars the tracing observer lists by name.
const NOTABLE_GUESTS: usize = 5;

/// Receives the tier composition of each ranking pass.
pub trait CastObserver: Send + Sync {
    fn on_movie_tiers(&self, _tiers: &MovieTiers<'_>, _config: &MovieFilterConfig) {}

    fn on_series_tiers(
        &self,
        _tiers: &SeriesTiers<'_>,
        _config: &SeriesFilterConfig,
        _total_episodes: u32,
    ) {
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CastObserver for NoopObserver {}

/// Logs tier composition through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CastObserver for TracingObserver {
    fn on_movie_tiers(&self, tiers: &MovieTiers<'_>, config: &MovieFilterConfig) {
        info!(
            tier = ?config.tier,
            main = tiers.main.len(),
            supporting = tiers.supporting.len(),
            "Movie cast analysis"
        );
    }

    fn on_series_tiers(
        &self,
        tiers: &SeriesTiers<'_>,
        config: &SeriesFilterConfig,
        total_episodes: u32,
    ) {
        info!(
            total_episodes,
            tier = ?config.tier,
            main = tiers.main.len(),
            recurring = tiers.recurring.len(),
            guests = tiers.guest.len(),
            "Series cast analysis"
        );

        for guest in notable_guests(&tiers.guest) {
            info!(
                "Notable guest: {} (popularity {:.1}) as \"{}\" in {} episode(s)",
                guest.name,
                guest.popularity,
                guest.first_role_character().unwrap_or_default(),
                guest.total_episode_count
            );
        }
    }
}

/// Most popular guests first, without touching the tier's own order.
fn notable_guests<'a>(guests: &[&'a SeriesCastMember]) -> Vec<&'a SeriesCastMember> {
    let mut by_popularity = guests.to_vec();
    by_popularity.sort_by(|a, b| popularity_desc(a.popularity, b.popularity));
    by_popularity.truncate(NOTABLE_GUESTS);
    by_popularity
}

#[cfg(test)]
mod tests {
    use super::*;
    use cast_model::RoleCredit;

    fn guest(id: u64, popularity: f64) -> SeriesCastMember {
        SeriesCastMember {
            id,
            name: format!("Guest {}", id),
            profile_path: Some("/g.jpg".to_string()),
            popularity,
            roles: vec![RoleCredit {
                character: "Visitor".to_string(),
                episode_count: 1,
            }],
            total_episode_count: 1,
        }
    }

    #[test]
    fn test_notable_guests_sorted_and_capped() {
        let cast: Vec<SeriesCastMember> = (1..=7).map(|i| guest(i, i as f64)).collect();
        let refs: Vec<&SeriesCastMember> = cast.iter().collect();

        let notable = notable_guests(&refs);
        let ids: Vec<u64> = notable.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
        // Tier order untouched
        assert_eq!(refs[0].id, 1);
    }

    #[test]
    fn test_notable_guests_put_nan_popularity_last() {
        let cast = vec![guest(1, f64::NAN), guest(2, 3.0), guest(3, 9.0)];
        let refs: Vec<&SeriesCastMember> = cast.iter().collect();

        let ids: Vec<u64> = notable_guests(&refs).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
