//! # Importer Crate
//!
//! Pulls a production and its credits from a metadata provider, ranks the
//! cast and persists the result as documents.
//!
//! ## Main Components
//!
//! - **provider**: `MetadataProvider` trait and a file-backed implementation
//! - **store**: `CastStore` trait and an in-memory implementation
//! - **documents**: Stored shapes, key scheme, search hits, year/image/role formatting
//! - **orchestrator**: `ImportOrchestrator` tying them to the ranking engine
//!
//! ## Example Usage
//!
//! ```ignore
//! use importer::{FileMetadataProvider, ImportOrchestrator, MemoryCastStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryCastStore::new());
//! let orchestrator = ImportOrchestrator::new(
//!     Arc::new(FileMetadataProvider::new("data")),
//!     store.clone(),
//! );
//! let imported = orchestrator.import_series(1396).await?;
//! println!("{} ({}) with {} cast members", imported.title, imported.year_range, imported.cast_count);
//! ```

pub mod documents;
pub mod error;
pub mod orchestrator;
pub mod provider;
pub mod store;

pub use documents::{
    CastMemberDocument, ImporterConfig, ProductionCastMemberRecord, ProductionDocument,
    SearchResult, DEFAULT_IMAGE_BASE_URL,
};
pub use error::{ImportError, Result};
pub use orchestrator::{ImportOrchestrator, MovieImportResult, SeriesImportResult};
pub use provider::{FileMetadataProvider, MetadataProvider};
pub use store::{CastStore, MemoryCastStore, StoreSnapshot};
