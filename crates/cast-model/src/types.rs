//! Core domain types for provider cast credits.
//!
//! The metadata provider hands us two shapes of cast record: movie credits
//! (one character, one billing position) and aggregated series credits
//! (a list of roles with per-role episode counts). Both share the
//! identity/photo/popularity fields exposed through [`CastCredit`].

use crate::error::CastModelError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Provider identifier of a person. Shared across productions.
pub type CastMemberId = u64;

/// Provider identifier of a movie or series.
pub type ProductionId = u64;

/// Billing position used when the provider omits `order`.
pub const MISSING_CREDIT_ORDER: u32 = 999;

// =============================================================================
// Media Type
// =============================================================================

/// Kind of production a cast list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "series",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = CastModelError;

    /// Accepts the provider's `tv` tag as an alias for series.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" => Ok(MediaType::Movie),
            "series" | "tv" => Ok(MediaType::Series),
            _ => Err(CastModelError::InvalidValue {
                field: "media_type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Cast Records
// =============================================================================

/// Fields every cast record carries, whatever the production kind.
pub trait CastCredit {
    fn id(&self) -> CastMemberId;
    fn name(&self) -> &str;
    fn profile_path(&self) -> Option<&str>;
    fn popularity(&self) -> f64;

    /// True when the provider has a non-empty photo reference.
    fn has_photo(&self) -> bool {
        self.profile_path().is_some_and(|p| !p.is_empty())
    }
}

/// A single credited role in a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCredit {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub character: String,
    #[serde(default)]
    pub episode_count: u32,
}

/// A cast member from a movie's credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieCastMember {
    pub id: CastMemberId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    /// Character name; empty when the provider has none
    #[serde(default, deserialize_with = "null_as_empty")]
    pub character: String,
    /// Billing position, lower is more prominent
    #[serde(default)]
    pub order: Option<u32>,
}

impl MovieCastMember {
    /// Billing position with missing values pushed to the back.
    pub fn credit_rank(&self) -> u32 {
        self.order.unwrap_or(MISSING_CREDIT_ORDER)
    }

    pub fn has_character(&self) -> bool {
        !self.character.is_empty()
    }
}

impl CastCredit for MovieCastMember {
    fn id(&self) -> CastMemberId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn profile_path(&self) -> Option<&str> {
        self.profile_path.as_deref()
    }

    fn popularity(&self) -> f64 {
        self.popularity
    }
}

/// A cast member from a series' aggregated credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesCastMember {
    pub id: CastMemberId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    /// Roles in the order the provider lists them
    #[serde(default)]
    pub roles: Vec<RoleCredit>,
    /// Episodes across all roles
    #[serde(default)]
    pub total_episode_count: u32,
}

impl SeriesCastMember {
    /// Character of the first listed role, if it is non-empty.
    pub fn first_role_character(&self) -> Option<&str> {
        self.roles
            .first()
            .map(|role| role.character.as_str())
            .filter(|c| !c.is_empty())
    }
}

impl CastCredit for SeriesCastMember {
    fn id(&self) -> CastMemberId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn profile_path(&self) -> Option<&str> {
        self.profile_path.as_deref()
    }

    fn popularity(&self) -> f64 {
        self.popularity
    }
}

/// A raw cast list tagged with the kind of production it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CastList {
    Movie(Vec<MovieCastMember>),
    Series(Vec<SeriesCastMember>),
}

impl CastList {
    pub fn media_type(&self) -> MediaType {
        match self {
            CastList::Movie(_) => MediaType::Movie,
            CastList::Series(_) => MediaType::Series,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CastList::Movie(cast) => cast.len(),
            CastList::Series(cast) => cast.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Production Metadata
// =============================================================================

/// Credits endpoint payload: `{ "cast": [...] }`. Crew is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditsResponse<M> {
    #[serde(default = "Vec::new")]
    pub cast: Vec<M>,
}

/// Movie details as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: ProductionId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Series details as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDetails {
    pub id: ProductionId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub last_air_date: Option<String>,
    #[serde(default)]
    pub in_production: bool,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
}

/// One hit of the provider's multi search. People and other kinds share
/// the same list; only `movie` and `tv` entries carry production fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: ProductionId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub media_type: String,
    /// Movie title
    #[serde(default)]
    pub title: Option<String>,
    /// Series name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub last_air_date: Option<String>,
    #[serde(default)]
    pub in_production: bool,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl SearchItem {
    /// Production kind of this hit, if it is a movie or a series.
    pub fn production_type(&self) -> Option<MediaType> {
        match self.media_type.as_str() {
            "movie" => Some(MediaType::Movie),
            "tv" => Some(MediaType::Series),
            _ => None,
        }
    }
}

/// Multi search payload: `{ "results": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchItem>,
}

/// The provider sends `null` for unknown strings; we keep them as "".
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
