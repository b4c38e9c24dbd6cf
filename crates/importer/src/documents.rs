//! Persisted document shapes and the helpers that fill them in.
//!
//! Keys follow a fixed scheme:
//! - productions: `movie-{id}` / `series-{id}`
//! - cast members: the provider's person id, shared across productions
//! - production/cast links: `{production_key}_{cast_member_id}`

use cast_model::{
    CastMemberId, MediaType, MovieDetails, ProductionId, SearchItem, SeriesDetails,
};
use ranking::{ProcessedCastMember, UNKNOWN_ROLE};
use serde::{Deserialize, Serialize};

/// Default provider image base (500px wide renditions).
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Image and placeholder settings used when building documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImporterConfig {
    pub image_base_url: String,
    pub production_placeholder: String,
    pub cast_member_placeholder: String,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            production_placeholder: "/placeholder.jpg".to_string(),
            cast_member_placeholder: "/placeholder-actor.jpg".to_string(),
        }
    }
}

impl ImporterConfig {
    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into();
        self
    }

    pub fn production_image_url(&self, poster_path: Option<&str>) -> String {
        self.image_url(poster_path, &self.production_placeholder)
    }

    pub fn cast_member_image_url(&self, profile_path: Option<&str>) -> String {
        self.image_url(profile_path, &self.cast_member_placeholder)
    }

    /// Full image URL, or `None` when the provider has no image.
    pub fn optional_image_url(&self, path: Option<&str>) -> Option<String> {
        path.filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", self.image_base_url, path))
    }

    fn image_url(&self, path: Option<&str>, placeholder: &str) -> String {
        self.optional_image_url(path)
            .unwrap_or_else(|| placeholder.to_string())
    }
}

/// A movie or series as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionDocument {
    pub media_type: MediaType,
    pub title: String,
    /// "1999" for movies, "2008-2013" / "2019-" for series
    pub year: String,
    pub image_url: String,
}

/// Shared person document, merge-written by every production they appear in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMemberDocument {
    pub name: String,
    pub image_url: String,
}

/// Join record linking a production to one of its displayed cast members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCastMemberRecord {
    pub production_id: String,
    pub cast_member_id: CastMemberId,
    pub role: String,
    pub order_number: u32,
}

pub fn movie_key(id: ProductionId) -> String {
    format!("movie-{}", id)
}

pub fn series_key(id: ProductionId) -> String {
    format!("series-{}", id)
}

pub fn production_cast_member_key(production_key: &str, cast_member_id: CastMemberId) -> String {
    format!("{}_{}", production_key, cast_member_id)
}

/// Leading (up to four) characters of a non-empty provider date.
fn year_of(date: Option<&str>) -> Option<&str> {
    date.filter(|d| !d.is_empty())
        .map(|d| d.get(..4).unwrap_or(d))
}

/// Release year of a movie, or "Unknown Year".
pub fn format_movie_year(details: &MovieDetails) -> String {
    year_of(details.release_date.as_deref())
        .unwrap_or("Unknown Year")
        .to_string()
}

/// Air-date range of a series.
///
/// ## Algorithm
/// 1. Start year from the first air date, else "Unknown"
/// 2. No last air date: "start-" while in production, else "start"
/// 3. Same start and end year: "start"
/// 4. Otherwise "start-end"
pub fn format_series_year(details: &SeriesDetails) -> String {
    let start = year_of(details.first_air_date.as_deref()).unwrap_or("Unknown");

    let Some(last_air_date) = details.last_air_date.as_deref().filter(|d| !d.is_empty()) else {
        return if details.in_production {
            format!("{}-", start)
        } else {
            start.to_string()
        };
    };

    let end = last_air_date.get(..4).unwrap_or(last_air_date);
    if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    }
}

/// A movie or series hit from a provider search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: ProductionId,
    pub title: String,
    pub media_type: MediaType,
    pub year: String,
    /// `None` when the provider has no poster
    pub image_url: Option<String>,
}

/// Year label shown next to a search hit.
///
/// Shorter than [`format_series_year`]: a running series is "start-", an
/// ended one "start-end" even when both years match, and a series without
/// a last air date just "start". Movies fall back to "Unknown".
pub fn format_search_year(item: &SearchItem, media_type: MediaType) -> String {
    match media_type {
        MediaType::Movie => year_of(item.release_date.as_deref())
            .unwrap_or("Unknown")
            .to_string(),
        MediaType::Series => {
            let start = year_of(item.first_air_date.as_deref()).unwrap_or("Unknown");
            if item.in_production {
                format!("{}-", start)
            } else if let Some(end) = year_of(item.last_air_date.as_deref()) {
                format!("{}-{}", start, end)
            } else {
                start.to_string()
            }
        }
    }
}

/// Keep the movie and series hits of a search, in provider order.
pub fn search_results(items: &[SearchItem], config: &ImporterConfig) -> Vec<SearchResult> {
    items
        .iter()
        .filter_map(|item| {
            let media_type = item.production_type()?;
            let title = match media_type {
                MediaType::Movie => item.title.clone(),
                MediaType::Series => item.name.clone(),
            };
            Some(SearchResult {
                id: item.id,
                title: title.unwrap_or_default(),
                media_type,
                year: format_search_year(item, media_type),
                image_url: config.optional_image_url(item.poster_path.as_deref()),
            })
        })
        .collect()
}

/// Role shown on the production page for this member.
///
/// First role's character, then the movie character, then "Unknown Role".
pub fn role_label(member: &ProcessedCastMember) -> String {
    member
        .roles
        .as_ref()
        .and_then(|roles| roles.first())
        .map(|role| role.character.as_str())
        .filter(|c| !c.is_empty())
        .or_else(|| Some(member.character.as_str()).filter(|c| !c.is_empty()))
        .unwrap_or(UNKNOWN_ROLE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cast_model::RoleCredit;

    fn series(first: Option<&str>, last: Option<&str>, in_production: bool) -> SeriesDetails {
        SeriesDetails {
            id: 1,
            name: "Show".to_string(),
            first_air_date: first.map(str::to_string),
            last_air_date: last.map(str::to_string),
            in_production,
            poster_path: None,
            number_of_episodes: Some(10),
        }
    }

    fn processed(character: &str, roles: Option<Vec<RoleCredit>>) -> ProcessedCastMember {
        ProcessedCastMember {
            id: 1,
            name: "Actor".to_string(),
            profile_path: None,
            popularity: 1.0,
            order_number: 1,
            character: character.to_string(),
            total_episode_count: None,
            roles,
        }
    }

    #[test]
    fn test_keys() {
        assert_eq!(movie_key(603), "movie-603");
        assert_eq!(series_key(1396), "series-1396");
        assert_eq!(production_cast_member_key("movie-603", 6384), "movie-603_6384");
    }

    #[test]
    fn test_movie_year() {
        let mut details = MovieDetails {
            id: 603,
            title: "The Matrix".to_string(),
            release_date: Some("1999-03-30".to_string()),
            poster_path: None,
        };
        assert_eq!(format_movie_year(&details), "1999");

        details.release_date = Some(String::new());
        assert_eq!(format_movie_year(&details), "Unknown Year");

        details.release_date = None;
        assert_eq!(format_movie_year(&details), "Unknown Year");
    }

    #[test]
    fn test_series_year_range() {
        assert_eq!(format_series_year(&series(Some("2008-01-20"), Some("2013-09-29"), false)), "2008-2013");
        assert_eq!(format_series_year(&series(Some("2019-05-01"), Some("2019-08-01"), false)), "2019");
        assert_eq!(format_series_year(&series(Some("2019-05-01"), None, true)), "2019-");
        assert_eq!(format_series_year(&series(Some("2019-05-01"), None, false)), "2019");
        assert_eq!(format_series_year(&series(None, Some("2020-01-01"), false)), "Unknown-2020");
    }

    #[test]
    fn test_image_urls() {
        let config = ImporterConfig::default();
        assert_eq!(
            config.production_image_url(Some("/poster.jpg")),
            "https://image.tmdb.org/t/p/w500/poster.jpg"
        );
        assert_eq!(config.production_image_url(None), "/placeholder.jpg");
        assert_eq!(config.cast_member_image_url(Some("")), "/placeholder-actor.jpg");

        let local = ImporterConfig::default().with_image_base_url("http://cdn.local");
        assert_eq!(local.cast_member_image_url(Some("/a.jpg")), "http://cdn.local/a.jpg");
    }

    fn hit(media_type: &str, first: Option<&str>, last: Option<&str>, in_production: bool) -> SearchItem {
        SearchItem {
            id: 7,
            media_type: media_type.to_string(),
            title: Some("Movie Title".to_string()),
            name: Some("Series Name".to_string()),
            release_date: first.map(str::to_string),
            first_air_date: first.map(str::to_string),
            last_air_date: last.map(str::to_string),
            in_production,
            poster_path: None,
        }
    }

    #[test]
    fn test_search_year_for_series() {
        let running = hit("tv", Some("2019-05-01"), Some("2023-01-01"), true);
        assert_eq!(format_search_year(&running, MediaType::Series), "2019-");

        // Same start and end year is still a range here
        let one_season = hit("tv", Some("2019-05-01"), Some("2019-08-01"), false);
        assert_eq!(format_search_year(&one_season, MediaType::Series), "2019-2019");
        assert_eq!(format_series_year(&series(Some("2019-05-01"), Some("2019-08-01"), false)), "2019");

        let no_end = hit("tv", Some("2019-05-01"), None, false);
        assert_eq!(format_search_year(&no_end, MediaType::Series), "2019");

        let no_dates = hit("tv", None, Some(""), false);
        assert_eq!(format_search_year(&no_dates, MediaType::Series), "Unknown");
    }

    #[test]
    fn test_search_year_for_movie() {
        assert_eq!(format_search_year(&hit("movie", Some("1999-03-30"), None, false), MediaType::Movie), "1999");
        assert_eq!(format_search_year(&hit("movie", None, None, false), MediaType::Movie), "Unknown");
        assert_eq!(format_search_year(&hit("movie", Some(""), None, false), MediaType::Movie), "Unknown");
    }

    #[test]
    fn test_search_results_keep_productions_only() {
        let mut movie = hit("movie", Some("1999-03-30"), None, false);
        movie.poster_path = Some("/matrix.jpg".to_string());
        let series = hit("tv", Some("2008-01-20"), Some("2013-09-29"), false);
        let person = hit("person", None, None, false);

        let results = search_results(&[movie, person, series], &ImporterConfig::default());
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].media_type, MediaType::Movie);
        assert_eq!(results[0].title, "Movie Title");
        assert_eq!(
            results[0].image_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/matrix.jpg")
        );

        assert_eq!(results[1].media_type, MediaType::Series);
        assert_eq!(results[1].title, "Series Name");
        assert_eq!(results[1].year, "2008-2013");
        assert_eq!(results[1].image_url, None);
    }

    #[test]
    fn test_role_label_precedence() {
        let roles = vec![RoleCredit {
            character: "Walter White".to_string(),
            episode_count: 62,
        }];
        assert_eq!(role_label(&processed("Ignored", Some(roles))), "Walter White");
        assert_eq!(role_label(&processed("Neo", None)), "Neo");

        let empty_role = vec![RoleCredit {
            character: String::new(),
            episode_count: 1,
        }];
        assert_eq!(role_label(&processed("Fallback", Some(empty_role))), "Fallback");
        assert_eq!(role_label(&processed("", None)), UNKNOWN_ROLE);
    }
}
