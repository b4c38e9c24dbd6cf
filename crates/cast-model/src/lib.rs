//! # Cast Model Crate
//!
//! Domain types for credited cast members as the metadata provider
//! delivers them, plus parsing of the provider's JSON payloads.
//!
//! ## Main Components
//!
//! - **types**: Cast records (movie and series shapes), media type, production details
//! - **parser**: Parse credits/details JSON into Rust structs
//! - **error**: Error types for loading and parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use cast_model::{parser, MediaType};
//! use std::path::Path;
//!
//! let cast = parser::load_cast_list(Path::new("credits.json"), MediaType::Movie)?;
//! println!("{} credited members", cast.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CastModelError, Result};
pub use types::{
    // Type aliases
    CastMemberId,
    ProductionId,
    // Constants
    MISSING_CREDIT_ORDER,
    // Core types
    CastCredit,
    CastList,
    MovieCastMember,
    SeriesCastMember,
    RoleCredit,
    CreditsResponse,
    MovieDetails,
    SeriesDetails,
    SearchItem,
    SearchResponse,
    // Enums
    MediaType,
};
