//! spacebio-analytics: Filtering and aggregation over the loaded publications.
//!
//! Everything here is a pure function of `(records, selection)`: no caching,
//! no hidden state. [`DashboardView::compute`] bundles the whole pipeline for
//! the web layer.

pub mod aggregate;
pub mod filter;
pub mod insights;

use serde::Serialize;
use spacebio_common::PublicationRecord;

pub use aggregate::{CountBucket, SummaryStats, YearCount};
pub use filter::FilterSelection;
pub use insights::{Insight, InsightKind};

/// Filtered subset plus every statistic derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub filtered: Vec<PublicationRecord>,
    pub stats: SummaryStats,
    pub topic_distribution: Vec<CountBucket>,
    pub year_distribution: Vec<YearCount>,
    pub organism_distribution: Vec<CountBucket>,
    pub mission_distribution: Vec<CountBucket>,
    pub insights: Vec<Insight>,
}

impl DashboardView {
    pub fn compute(records: &[PublicationRecord], selection: &FilterSelection) -> Self {
        let filtered = filter::filter_records(records, selection);

        Self {
            stats: aggregate::summary_stats(&filtered),
            topic_distribution: aggregate::topic_distribution(&filtered),
            year_distribution: aggregate::year_distribution(&filtered),
            organism_distribution: aggregate::organism_distribution(&filtered),
            mission_distribution: aggregate::mission_distribution(&filtered),
            insights: insights::key_insights(&filtered),
            filtered: filtered.into_iter().cloned().collect(),
        }
    }
}
