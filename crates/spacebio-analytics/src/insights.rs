//! Key insights for mission planning, derived from the filtered set.

use serde::{Deserialize, Serialize};
use spacebio_common::PublicationRecord;

use crate::aggregate::{group_counts, topic_distribution, CountBucket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    MostStudied,
    ResearchGap,
    Actionable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub headline: String,
    pub detail: String,
}

/// Up to three insights; none for an empty set.
pub fn key_insights(records: &[&PublicationRecord]) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(top) = leader(topic_distribution(records)) {
        insights.push(Insight {
            kind: InsightKind::MostStudied,
            headline: format!("Most Studied: {}", top.name),
            detail: format!("{} of {} publications in view", top.value, records.len()),
        });
    }

    let gaps: Vec<&PublicationRecord> = records.iter().copied().filter(|r| r.has_research_gap).collect();
    if let Some(top) = leader(group_counts(&gaps, |r| r.topic.as_str())) {
        insights.push(Insight {
            kind: InsightKind::ResearchGap,
            headline: format!("Research Gap: {}", top.name),
            detail: format!("{} publications flagged as under-studied", top.value),
        });
    }

    let actionable: Vec<&PublicationRecord> = records.iter().copied().filter(|r| r.is_actionable).collect();
    if let Some(top) = leader(group_counts(&actionable, |r| r.organism.as_str())) {
        insights.push(Insight {
            kind: InsightKind::Actionable,
            headline: format!("Actionable: {} studies", top.name),
            detail: format!("{} publications with directly applicable findings", top.value),
        });
    }

    insights
}

/// Largest bucket; the first one seen wins a tie.
fn leader(buckets: Vec<CountBucket>) -> Option<CountBucket> {
    buckets.into_iter().fold(None, |best, b| match best {
        Some(ref cur) if cur.value >= b.value => best,
        _ => Some(b),
    })
}
