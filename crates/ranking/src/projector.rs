//! Result projection: tiers in, caller-facing result out.
//!
//! This is the seam persistence attaches to. It concatenates the tiers in
//! their fixed order, numbers the members 1..N and derives the statistics.
//! It never reorders, filters or drops anything the engine selected.

use crate::config::count_high_profile;
use crate::result::{
    CastFilterResult, CastStats, MovieCastStats, ProcessedCastMember, SeriesCastStats,
};
use crate::tiers::{MovieTiers, SeriesTiers};
use cast_model::{MovieCastMember, SeriesCastMember};

/// Flatten movie tiers (main ++ supporting) into a numbered result.
pub fn project_movie(tiers: &MovieTiers<'_>, original: &[MovieCastMember]) -> CastFilterResult {
    let cast: Vec<ProcessedCastMember> = tiers
        .main
        .iter()
        .chain(tiers.supporting.iter())
        .enumerate()
        .map(|(index, member)| ProcessedCastMember::from_movie(member, order_number(index)))
        .collect();

    let stats = MovieCastStats {
        main_cast_count: tiers.main.len(),
        supporting_cast_count: tiers.supporting.len(),
        total_original_cast: original.len(),
        total_processed: cast.len(),
        high_profile_actors_count: count_high_profile(original),
    };

    CastFilterResult {
        cast,
        stats: CastStats::Movie(stats),
    }
}

/// Flatten series tiers (main ++ recurring ++ guest) into a numbered result.
///
/// `min_popularity_for_guest` decides which guests count as high profile.
pub fn project_series(
    tiers: &SeriesTiers<'_>,
    original: &[SeriesCastMember],
    min_popularity_for_guest: f64,
) -> CastFilterResult {
    let cast: Vec<ProcessedCastMember> = tiers
        .main
        .iter()
        .chain(tiers.recurring.iter())
        .chain(tiers.guest.iter())
        .enumerate()
        .map(|(index, member)| ProcessedCastMember::from_series(member, order_number(index)))
        .collect();

    let high_profile_guests_count = tiers
        .guest
        .iter()
        .filter(|member| member.popularity >= min_popularity_for_guest)
        .count();

    let stats = SeriesCastStats {
        main_cast_count: tiers.main.len(),
        recurring_cast_count: tiers.recurring.len(),
        guest_stars_count: tiers.guest.len(),
        high_profile_guests_count,
        total_original_cast: original.len(),
        total_processed: cast.len(),
        average_episodes_per_actor: average_episodes(&cast),
    };

    CastFilterResult {
        cast,
        stats: CastStats::Series(stats),
    }
}

fn order_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

/// Mean episode count rounded to one decimal; undefined for an empty list.
fn average_episodes(cast: &[ProcessedCastMember]) -> Option<f64> {
    if cast.is_empty() {
        return None;
    }
    let total: u64 = cast
        .iter()
        .map(|member| u64::from(member.total_episode_count.unwrap_or(0)))
        .sum();
    let average = total as f64 / cast.len() as f64;
    Some((average * 10.0).round() / 10.0)
}
