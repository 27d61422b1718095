//! Startup load of the publication corpus.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use spacebio_common::{FacetSets, PublicationRecord, SpacebioError};
use thiserror::Error;
use tracing::{info, warn};

use crate::facets::extract_facets;
use crate::fallback::SeededFallback;
use crate::normalise::normalise_page;
use crate::sources::ArticleSource;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Client(#[from] SpacebioError),

    #[error("Articles endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Articles endpoint reported an error: {0}")]
    Backend(String),
}

/// What the last load attempt produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    /// No load has finished yet.
    Pending,
    Loaded { count: usize, at: DateTime<Utc> },
    Failed { message: String, at: DateTime<Utc> },
}

impl LoadStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadStatus::Failed { .. })
    }
}

/// Records, facets and status of one load. Always usable, even after a failure.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub records: Vec<PublicationRecord>,
    pub facets: FacetSets,
    pub status: LoadStatus,
}

pub struct DataLoader {
    source: Arc<dyn ArticleSource>,
    page_size: u32,
    fallback_seed: Option<u64>,
}

impl DataLoader {
    pub fn new(source: Arc<dyn ArticleSource>, page_size: u32, fallback_seed: Option<u64>) -> Self {
        Self { source, page_size, fallback_seed }
    }

    /// Fetches and normalises one page. Failures are absorbed into an empty
    /// outcome whose status carries the error message.
    pub async fn load(&self) -> LoadOutcome {
        match self.source.fetch_articles(self.page_size).await {
            Ok(raws) => {
                let mut fallback = SeededFallback::from_seed_option(self.fallback_seed);
                let records = normalise_page(raws, &mut fallback);
                let facets = extract_facets(&records);
                info!(count = records.len(), "Publications loaded");
                LoadOutcome {
                    status: LoadStatus::Loaded { count: records.len(), at: Utc::now() },
                    records,
                    facets,
                }
            }
            Err(e) => {
                warn!("Publication load failed, continuing with an empty corpus: {}", e);
                LoadOutcome {
                    records: Vec::new(),
                    facets: FacetSets::empty(),
                    status: LoadStatus::Failed { message: e.to_string(), at: Utc::now() },
                }
            }
        }
    }
}
