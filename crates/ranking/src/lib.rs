//! Cast ranking: tier selection and ordering of credited cast members.
//!
//! This crate provides:
//! - Configuration selection that scales thresholds with the input
//! - TierSelector trait and the movie/series tier implementations
//! - TierPipeline for partitioning a sorted cast into disjoint tiers
//! - CastRankingEngine tying it together, plus batch ranking with Rayon
//!
//! ## Architecture
//! A ranking pass runs in stages:
//! 1. The configuration is selected from cast size, star power or episode count
//! 2. A working copy of the cast is sorted
//! 3. Tier selectors partition it (main, then supporting / recurring / guest)
//! 4. The projector numbers the concatenated tiers and derives statistics
//!
//! ## Example Usage
//! ```ignore
//! use ranking::CastRankingEngine;
//! use cast_model::CastList;
//!
//! let engine = CastRankingEngine::new();
//! let result = engine.filter_cast_members(&CastList::Series(cast), Some(62))?;
//!
//! for member in &result.cast {
//!     println!("{}. {} as {}", member.order_number, member.name, member.character);
//! }
//! ```

pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod projector;
pub mod result;
pub mod tier_pipeline;
pub mod tiers;
pub mod traits;

// Re-export main types
pub use batch::{rank_batch, RankRequest};
pub use config::{
    select_config, select_movie_config, select_series_config, ConfigTier, FilterConfiguration,
    MovieFilterConfig, SeriesFilterConfig, HIGH_PROFILE_POPULARITY,
};
pub use engine::CastRankingEngine;
pub use error::{RankingError, Result};
pub use observer::{CastObserver, NoopObserver, TracingObserver};
pub use result::{
    CastFilterResult, CastStats, MovieCastStats, ProcessedCastMember, SeriesCastStats,
    UNKNOWN_ROLE,
};
pub use tier_pipeline::TierPipeline;
pub use traits::TierSelector;
