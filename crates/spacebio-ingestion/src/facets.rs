//! Facet extraction over a loaded record set.

use std::collections::{BTreeSet, HashSet};

use spacebio_common::{FacetChoice, FacetSets, PublicationRecord};

/// Distinct topics, organisms and missions in first-seen order, and distinct
/// years ascending. Every list starts with [`FacetChoice::All`].
pub fn extract_facets(records: &[PublicationRecord]) -> FacetSets {
    let years: BTreeSet<i32> = records.iter().map(|r| r.year).collect();

    FacetSets {
        topics: distinct(records.iter().map(|r| r.topic.as_str())),
        organisms: distinct(records.iter().map(|r| r.organism.as_str())),
        missions: distinct(records.iter().map(|r| r.mission.as_str())),
        years: std::iter::once(FacetChoice::All)
            .chain(years.into_iter().map(|y| FacetChoice::Value(y.to_string())))
            .collect(),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<FacetChoice> {
    let mut seen = HashSet::new();
    let mut out = vec![FacetChoice::All];
    for value in values {
        if seen.insert(value) {
            out.push(FacetChoice::Value(value.to_string()));
        }
    }
    out
}
