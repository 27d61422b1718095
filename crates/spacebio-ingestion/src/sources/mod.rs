//! Publication source clients.

pub mod articles;

use async_trait::async_trait;
use crate::loader::LoadError;
use crate::models::RawRecord;

/// Common interface for anything that can hand the loader a page of raw records.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch up to `page_size` raw article records.
    async fn fetch_articles(&self, page_size: u32) -> Result<Vec<RawRecord>, LoadError>;
}
