//! spacebio-ingestion: Publication loading for the dashboard.
//!
//! Fetches one page of raw article records from the articles endpoint,
//! normalises every record (filling absent fields from fixed defaults or an
//! injected fallback generator), and extracts the facet values observed in the
//! loaded set. Load failures never propagate: they become an empty record set
//! plus a failed [`loader::LoadStatus`].

pub mod facets;
pub mod fallback;
pub mod loader;
pub mod models;
pub mod normalise;
pub mod sources;

pub use loader::{DataLoader, LoadError, LoadOutcome, LoadStatus};
