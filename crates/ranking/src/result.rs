//! Output types of a ranking pass.
//!
//! A [`CastFilterResult`] is built fresh for every call and handed over to
//! the caller. Statistics are derived from the tiers that produced the cast
//! list and never stored anywhere else.

use cast_model::{CastMemberId, MovieCastMember, RoleCredit, SeriesCastMember};
use serde::{Deserialize, Serialize};

/// Label used when a series member has no named first role.
pub const UNKNOWN_ROLE: &str = "Unknown Role";

/// A cast member selected for display, with its presentation position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedCastMember {
    pub id: CastMemberId,
    pub name: String,
    pub profile_path: Option<String>,
    pub popularity: f64,
    /// 1-based, dense within one result
    pub order_number: u32,
    /// Resolved character label
    pub character: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_episode_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<RoleCredit>>,
}

impl ProcessedCastMember {
    pub fn from_movie(member: &MovieCastMember, order_number: u32) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            profile_path: member.profile_path.clone(),
            popularity: member.popularity,
            order_number,
            character: member.character.clone(),
            total_episode_count: None,
            roles: None,
        }
    }

    pub fn from_series(member: &SeriesCastMember, order_number: u32) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            profile_path: member.profile_path.clone(),
            popularity: member.popularity,
            order_number,
            character: member
                .first_role_character()
                .unwrap_or(UNKNOWN_ROLE)
                .to_string(),
            total_episode_count: Some(member.total_episode_count),
            roles: Some(member.roles.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCastStats {
    pub main_cast_count: usize,
    pub supporting_cast_count: usize,
    pub total_original_cast: usize,
    pub total_processed: usize,
    /// High-profile members in the unfiltered input
    pub high_profile_actors_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesCastStats {
    pub main_cast_count: usize,
    pub recurring_cast_count: usize,
    pub guest_stars_count: usize,
    /// Guests admitted on star power
    pub high_profile_guests_count: usize,
    pub total_original_cast: usize,
    pub total_processed: usize,
    /// Mean episodes over the processed list, one decimal. `None` when empty.
    pub average_episodes_per_actor: Option<f64>,
}

/// Per-tier statistics, shaped by media kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum CastStats {
    Movie(MovieCastStats),
    Series(SeriesCastStats),
}

impl CastStats {
    pub fn main_cast_count(&self) -> usize {
        match self {
            CastStats::Movie(stats) => stats.main_cast_count,
            CastStats::Series(stats) => stats.main_cast_count,
        }
    }

    pub fn total_original_cast(&self) -> usize {
        match self {
            CastStats::Movie(stats) => stats.total_original_cast,
            CastStats::Series(stats) => stats.total_original_cast,
        }
    }

    pub fn total_processed(&self) -> usize {
        match self {
            CastStats::Movie(stats) => stats.total_processed,
            CastStats::Series(stats) => stats.total_processed,
        }
    }
}

/// Ordered cast list plus the statistics of the tiers behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastFilterResult {
    pub cast: Vec<ProcessedCastMember>,
    pub stats: CastStats,
}

impl CastFilterResult {
    pub fn len(&self) -> usize {
        self.cast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cast.is_empty()
    }

    pub fn movie_stats(&self) -> Option<&MovieCastStats> {
        match &self.stats {
            CastStats::Movie(stats) => Some(stats),
            CastStats::Series(_) => None,
        }
    }

    pub fn series_stats(&self) -> Option<&SeriesCastStats> {
        match &self.stats {
            CastStats::Series(stats) => Some(stats),
            CastStats::Movie(_) => None,
        }
    }
}
