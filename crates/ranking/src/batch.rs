//! Ranking many productions at once.
//!
//! Every ranking pass is independent and pure, so a batch is just a
//! parallel map over requests. Results come back in request order.

use cast_model::CastList;
use rayon::prelude::*;
use tracing::debug;

use crate::engine::CastRankingEngine;
use crate::error::Result;
use crate::result::CastFilterResult;

/// One production's raw cast plus the episode count series ranking needs.
#[derive(Debug, Clone)]
pub struct RankRequest {
    pub cast: CastList,
    pub total_episodes: Option<u32>,
}

impl RankRequest {
    pub fn movie(cast: Vec<cast_model::MovieCastMember>) -> Self {
        Self {
            cast: CastList::Movie(cast),
            total_episodes: None,
        }
    }

    pub fn series(cast: Vec<cast_model::SeriesCastMember>, total_episodes: u32) -> Self {
        Self {
            cast: CastList::Series(cast),
            total_episodes: Some(total_episodes),
        }
    }
}

/// Rank every request in parallel using Rayon.
///
/// A failing request doesn't stop the others; each slot carries its own
/// `Result`.
pub fn rank_batch(
    engine: &CastRankingEngine,
    requests: &[RankRequest],
) -> Vec<Result<CastFilterResult>> {
    debug!("Ranking batch of {} productions", requests.len());

    requests
        .par_iter()
        .map(|request| engine.filter_cast_members(&request.cast, request.total_episodes))
        .collect()
}
