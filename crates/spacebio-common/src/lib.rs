//! spacebio-common: Shared types, errors, and the HTTP client used across all Spacebio crates.

pub mod error;
pub mod http;
pub mod models;

// Re-export commonly used types
pub use error::{Result, SpacebioError};
pub use models::{FacetChoice, FacetSets, PublicationRecord, QueryResult, Snippet, ALL_SENTINEL};
