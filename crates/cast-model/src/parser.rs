//! Parser for provider JSON payloads.
//!
//! Handles the four payloads the importer needs:
//! - movie credits: `{ "cast": [{ id, name, character, order, ... }] }`
//! - series aggregate credits: `{ "cast": [{ id, name, roles: [...], total_episode_count, ... }] }`
//! - movie details
//! - series details

use crate::error::{CastModelError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Deserialize a JSON string, tagging failures with where it came from.
fn parse_json<T: DeserializeOwned>(json: &str, source_name: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| CastModelError::ParseError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Read a file to a string, mapping a missing file to `FileNotFound`.
fn read_payload(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CastModelError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CastModelError::IoError(e),
    })
}

/// Parse a movie credits payload into its cast list.
pub fn parse_movie_credits(json: &str) -> Result<Vec<MovieCastMember>> {
    let response: CreditsResponse<MovieCastMember> = parse_json(json, "movie credits")?;
    Ok(response.cast)
}

/// Parse a series aggregate credits payload into its cast list.
pub fn parse_series_credits(json: &str) -> Result<Vec<SeriesCastMember>> {
    let response: CreditsResponse<SeriesCastMember> = parse_json(json, "series credits")?;
    Ok(response.cast)
}

/// Parse a credits payload of the given media type into a tagged cast list.
pub fn parse_cast_list(json: &str, media_type: MediaType) -> Result<CastList> {
    match media_type {
        MediaType::Movie => parse_movie_credits(json).map(CastList::Movie),
        MediaType::Series => parse_series_credits(json).map(CastList::Series),
    }
}

pub fn parse_movie_details(json: &str) -> Result<MovieDetails> {
    parse_json(json, "movie details")
}

pub fn parse_series_details(json: &str) -> Result<SeriesDetails> {
    parse_json(json, "series details")
}

/// Load a credits file from disk.
pub fn load_cast_list(path: &Path, media_type: MediaType) -> Result<CastList> {
    let json = read_payload(path)?;
    parse_cast_list(&json, media_type).map_err(|e| match e {
        CastModelError::ParseError { reason, .. } => CastModelError::ParseError {
            source_name: path.display().to_string(),
            reason,
        },
        other => other,
    })
}

/// Load any provider payload from disk.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = read_payload(path)?;
    parse_json(&json, &path.display().to_string())
}
