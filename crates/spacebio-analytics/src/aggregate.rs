//! Group-by counts and summary statistics over a filtered record set.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use spacebio_common::PublicationRecord;

/// Count of records sharing one categorical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBucket {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total: usize,
    pub research_gaps: usize,
    pub actionable: usize,
    /// Mean citation count rounded half-up; `0` for an empty set.
    pub avg_citations: u64,
}

/// Buckets in the order their key is first seen.
pub fn group_counts<'a, F>(records: &[&'a PublicationRecord], key: F) -> Vec<CountBucket>
where
    F: Fn(&'a PublicationRecord) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<CountBucket> = Vec::new();
    for record in records {
        let name = key(*record);
        match index.get(name) {
            Some(&i) => buckets[i].value += 1,
            None => {
                index.insert(name, buckets.len());
                buckets.push(CountBucket { name: name.to_string(), value: 1 });
            }
        }
    }
    buckets
}

pub fn topic_distribution(records: &[&PublicationRecord]) -> Vec<CountBucket> {
    group_counts(records, |r| r.topic.as_str())
}

pub fn organism_distribution(records: &[&PublicationRecord]) -> Vec<CountBucket> {
    group_counts(records, |r| r.organism.as_str())
}

pub fn mission_distribution(records: &[&PublicationRecord]) -> Vec<CountBucket> {
    group_counts(records, |r| r.mission.as_str())
}

/// Publications per year, ascending by year.
pub fn year_distribution(records: &[&PublicationRecord]) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.year).or_default() += 1;
    }
    counts.into_iter().map(|(year, count)| YearCount { year, count }).collect()
}

pub fn summary_stats(records: &[&PublicationRecord]) -> SummaryStats {
    let total = records.len();
    let citations: u64 = records.iter().map(|r| u64::from(r.citation_count)).sum();

    SummaryStats {
        total,
        research_gaps: records.iter().filter(|r| r.has_research_gap).count(),
        actionable: records.iter().filter(|r| r.is_actionable).count(),
        avg_citations: rounded_mean(citations, total as u64),
    }
}

/// `round(sum / n)` with halves rounded up, in integer arithmetic. `n == 0` gives 0.
fn rounded_mean(sum: u64, n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    (2 * sum + n) / (2 * n)
}
