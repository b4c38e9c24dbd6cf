//! # Import Orchestrator
//!
//! Imports one production at a time:
//! 1. Fetch details and full credits from the provider (concurrently)
//! 2. Write the production document
//! 3. Rank the cast with the [`CastRankingEngine`]
//! 4. Merge-write each displayed member and link it to the production
//!
//! Nothing is written when either fetch fails. Member writes run as
//! spawned tasks and are all awaited before a write failure is reported.

use std::sync::Arc;
use std::time::Instant;

use cast_model::{CastList, MediaType, ProductionId};
use ranking::{CastFilterResult, CastRankingEngine, CastStats, ProcessedCastMember};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{info, instrument, warn};

use crate::documents::{
    format_movie_year, format_series_year, movie_key, production_cast_member_key, role_label,
    search_results, series_key, CastMemberDocument, ImporterConfig, ProductionCastMemberRecord,
    ProductionDocument, SearchResult,
};
use crate::error::{ImportError, Result};
use crate::provider::MetadataProvider;
use crate::store::CastStore;

/// Outcome of a movie import.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieImportResult {
    pub movie_id: String,
    pub title: String,
    pub year: String,
    /// Members in the ranked cast
    pub cast_count: usize,
    pub stats: CastStats,
}

/// Outcome of a series import.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesImportResult {
    pub series_id: String,
    pub title: String,
    pub year_range: String,
    pub cast_count: usize,
    pub episode_count: u32,
    pub stats: CastStats,
}

/// Coordinates provider, ranking engine and store.
#[derive(Clone)]
pub struct ImportOrchestrator {
    provider: Arc<dyn MetadataProvider>,
    store: Arc<dyn CastStore>,
    engine: CastRankingEngine,
    config: ImporterConfig,
}

impl ImportOrchestrator {
    pub fn new(provider: Arc<dyn MetadataProvider>, store: Arc<dyn CastStore>) -> Self {
        Self {
            provider,
            store,
            engine: CastRankingEngine::new(),
            config: ImporterConfig::default(),
        }
    }

    pub fn with_engine(mut self, engine: CastRankingEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_config(mut self, config: ImporterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ImporterConfig {
        &self.config
    }

    /// Search the provider for movies and series to import.
    ///
    /// Other kinds of hits (people, collections) are dropped.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn search_media(&self, query: &str) -> Result<Vec<SearchResult>> {
        let items = self.provider.search(query).await?;
        let results = search_results(&items, &self.config);
        info!(
            "Search \"{}\": {} of {} hits are movies or series",
            query,
            results.len(),
            items.len()
        );
        Ok(results)
    }

    /// Import a movie and its ranked cast.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn import_movie(&self, movie_id: ProductionId) -> Result<MovieImportResult> {
        let start_time = Instant::now();
        let key = movie_key(movie_id);

        let (details, credits) = tokio::join!(
            self.provider.fetch_movie(movie_id),
            self.provider.fetch_movie_credits(movie_id)
        );
        let details = details?;
        let credits = credits?;
        info!(
            "Fetched {} ({} credited cast members)",
            details.title,
            credits.len()
        );

        if details.title.is_empty() {
            return Err(ImportError::MissingField {
                production_id: key,
                field: "title",
            });
        }

        let year = format_movie_year(&details);
        self.store
            .save_production(
                &key,
                ProductionDocument {
                    media_type: MediaType::Movie,
                    title: details.title.clone(),
                    year: year.clone(),
                    image_url: self
                        .config
                        .production_image_url(details.poster_path.as_deref()),
                },
            )
            .await?;

        let ranked = self
            .engine
            .filter_cast_members(&CastList::Movie(credits), None)?;
        let saved = self.save_cast(&key, &ranked).await?;

        info!(
            "Imported movie {} ({}): {} of {} cast members saved in {:.2?}",
            details.title,
            year,
            saved,
            ranked.len(),
            start_time.elapsed()
        );

        Ok(MovieImportResult {
            movie_id: key,
            title: details.title,
            year,
            cast_count: ranked.len(),
            stats: ranked.stats,
        })
    }

    /// Import a series and its ranked cast.
    ///
    /// The provider must report the series' episode count; without it the
    /// ranking step fails and no cast is written.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn import_series(&self, series_id: ProductionId) -> Result<SeriesImportResult> {
        let start_time = Instant::now();
        let key = series_key(series_id);

        let (details, credits) = tokio::join!(
            self.provider.fetch_series(series_id),
            self.provider.fetch_series_credits(series_id)
        );
        let details = details?;
        let credits = credits?;
        info!(
            "Fetched {} ({} credited cast members, {:?} episodes)",
            details.name,
            credits.len(),
            details.number_of_episodes
        );

        if details.name.is_empty() {
            return Err(ImportError::MissingField {
                production_id: key,
                field: "name",
            });
        }

        let year_range = format_series_year(&details);
        self.store
            .save_production(
                &key,
                ProductionDocument {
                    media_type: MediaType::Series,
                    title: details.name.clone(),
                    year: year_range.clone(),
                    image_url: self
                        .config
                        .production_image_url(details.poster_path.as_deref()),
                },
            )
            .await?;

        let ranked = self
            .engine
            .filter_cast_members(&CastList::Series(credits), details.number_of_episodes)?;
        let episode_count = details.number_of_episodes.unwrap_or_default();
        let saved = self.save_cast(&key, &ranked).await?;

        info!(
            "Imported series {} ({}): {} of {} cast members saved in {:.2?}",
            details.name,
            year_range,
            saved,
            ranked.len(),
            start_time.elapsed()
        );

        Ok(SeriesImportResult {
            series_id: key,
            title: details.name,
            year_range,
            cast_count: ranked.len(),
            episode_count,
            stats: ranked.stats,
        })
    }

    /// Write every ranked member and its join record.
    ///
    /// Every write runs to completion even when another one fails, so a
    /// failed import leaves all other members written. Returns how many
    /// members were written, or the first failure.
    async fn save_cast(&self, production_key: &str, ranked: &CastFilterResult) -> Result<usize> {
        let mut tasks = JoinSet::new();

        for member in &ranked.cast {
            let store = Arc::clone(&self.store);
            let production_key = production_key.to_string();
            let document = CastMemberDocument {
                name: member.name.clone(),
                image_url: self
                    .config
                    .cast_member_image_url(member.profile_path.as_deref()),
            };
            let record = link_record(&production_key, member);

            tasks.spawn(async move {
                if document.name.is_empty() {
                    warn!(
                        "Skipping cast member {} of {}: missing name",
                        record.cast_member_id, production_key
                    );
                    return Ok::<bool, ImportError>(false);
                }

                store
                    .merge_cast_member(record.cast_member_id, document)
                    .await?;
                let link_key = production_cast_member_key(&production_key, record.cast_member_id);
                store.save_production_cast_member(&link_key, record).await?;
                Ok(true)
            });
        }

        let mut saved = 0;
        let mut first_error = None;
        while let Some(outcome) = tasks.join_next().await {
            match outcome.map_err(ImportError::from).and_then(|written| written) {
                Ok(true) => saved += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!("Cast write failed for {}: {}", production_key, e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(saved),
        }
    }
}

fn link_record(production_key: &str, member: &ProcessedCastMember) -> ProductionCastMemberRecord {
    ProductionCastMemberRecord {
        production_id: production_key.to_string(),
        cast_member_id: member.id,
        role: role_label(member),
        order_number: member.order_number,
    }
}
