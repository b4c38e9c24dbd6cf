//! Metadata provider: where production details and credits come from.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cast_model::{
    parser, CreditsResponse, MovieCastMember, MovieDetails, ProductionId, SearchItem,
    SearchResponse, SeriesCastMember, SeriesDetails,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;

/// Source of production details and full cast credits.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    async fn fetch_movie(&self, movie_id: ProductionId) -> Result<MovieDetails>;

    async fn fetch_movie_credits(&self, movie_id: ProductionId) -> Result<Vec<MovieCastMember>>;

    async fn fetch_series(&self, series_id: ProductionId) -> Result<SeriesDetails>;

    /// Aggregate credits across every season.
    async fn fetch_series_credits(&self, series_id: ProductionId)
        -> Result<Vec<SeriesCastMember>>;

    /// Multi search by title. Hits may include people and other kinds.
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>>;
}

/// Reads provider payloads saved to disk.
///
/// Layout under the root directory:
/// ```text
/// movie/{id}.json
/// movie/{id}/credits.json
/// tv/{id}.json
/// tv/{id}/aggregate_credits.json
/// search/multi.json
/// ```
///
/// Search filters the saved hits by a case-insensitive match on title or
/// name; an empty query returns all of them.
#[derive(Debug, Clone)]
pub struct FileMetadataProvider {
    root: PathBuf,
}

impl FileMetadataProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parse one payload on the blocking pool.
    async fn load<T>(&self, relative: String) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let path = self.root.join(relative);
        debug!("Loading provider payload {:?}", path);
        let value = tokio::task::spawn_blocking(move || parser::load_json::<T>(&path)).await??;
        Ok(value)
    }
}

#[async_trait]
impl MetadataProvider for FileMetadataProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_movie(&self, movie_id: ProductionId) -> Result<MovieDetails> {
        self.load(format!("movie/{}.json", movie_id)).await
    }

    async fn fetch_movie_credits(&self, movie_id: ProductionId) -> Result<Vec<MovieCastMember>> {
        let credits: CreditsResponse<MovieCastMember> =
            self.load(format!("movie/{}/credits.json", movie_id)).await?;
        Ok(credits.cast)
    }

    async fn fetch_series(&self, series_id: ProductionId) -> Result<SeriesDetails> {
        self.load(format!("tv/{}.json", series_id)).await
    }

    async fn fetch_series_credits(
        &self,
        series_id: ProductionId,
    ) -> Result<Vec<SeriesCastMember>> {
        let credits: CreditsResponse<SeriesCastMember> = self
            .load(format!("tv/{}/aggregate_credits.json", series_id))
            .await?;
        Ok(credits.cast)
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchItem>> {
        let response: SearchResponse = self.load("search/multi.json".to_string()).await?;
        let query = query.trim().to_lowercase();

        Ok(response
            .results
            .into_iter()
            .filter(|item| {
                query.is_empty()
                    || [item.title.as_deref(), item.name.as_deref()]
                        .into_iter()
                        .flatten()
                        .any(|text| text.to_lowercase().contains(&query))
            })
            .collect())
    }
}
