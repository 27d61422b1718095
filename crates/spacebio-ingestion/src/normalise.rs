//! Raw record → [`PublicationRecord`] with per-field defaults.

use spacebio_common::PublicationRecord;

use crate::fallback::FallbackGenerator;
use crate::models::RawRecord;

pub const DEFAULT_TITLE: &str = "Untitled Publication";
pub const DEFAULT_AUTHORS: &str = "Unknown Authors";
pub const DEFAULT_TOPIC: &str = "Uncategorized";
pub const DEFAULT_ORGANISM: &str = "Unknown Organism";
pub const DEFAULT_MISSION: &str = "Unknown Mission";

/// Findings shown for records that carry no abstract.
pub const DEFAULT_KEY_FINDINGS: [&str; 3] = [
    "Significant changes observed in cellular response",
    "Novel adaptation mechanisms identified",
    "Potential countermeasures proposed",
];

/// Builds a record from `raw`. `position` is the 0-based index in the page and
/// becomes the id when the source sends none.
///
/// Generated values are drawn in a fixed order (year, citations, research gap,
/// actionable) and only for fields that are absent.
pub fn normalise_record(
    raw: RawRecord,
    position: usize,
    fallback: &mut dyn FallbackGenerator,
) -> PublicationRecord {
    let year = raw.year.unwrap_or_else(|| fallback.year());
    let citation_count = raw.citations.unwrap_or_else(|| fallback.citation_count());
    let has_research_gap = raw.research_gap.unwrap_or_else(|| fallback.research_gap());
    let is_actionable = raw.actionable.unwrap_or_else(|| fallback.actionable());

    PublicationRecord {
        id: raw.id.unwrap_or_else(|| (position + 1).to_string()),
        title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        authors: raw.authors.unwrap_or_else(|| DEFAULT_AUTHORS.to_string()),
        year,
        topic: raw.topic.unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
        organism: raw.organism.unwrap_or_else(|| DEFAULT_ORGANISM.to_string()),
        mission: raw.mission.unwrap_or_else(|| DEFAULT_MISSION.to_string()),
        citation_count,
        key_findings: raw
            .abstract_lines
            .unwrap_or_else(|| DEFAULT_KEY_FINDINGS.iter().map(|s| s.to_string()).collect()),
        has_research_gap,
        is_actionable,
    }
}

pub fn normalise_page(
    raws: Vec<RawRecord>,
    fallback: &mut dyn FallbackGenerator,
) -> Vec<PublicationRecord> {
    raws.into_iter()
        .enumerate()
        .map(|(i, raw)| normalise_record(raw, i, fallback))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::SeededFallback;
    use pretty_assertions::assert_eq;

    /// Always answers with the same values so defaults are easy to assert on.
    struct Fixed;

    impl FallbackGenerator for Fixed {
        fn year(&mut self) -> i32 { 2001 }
        fn citation_count(&mut self) -> u32 { 77 }
        fn research_gap(&mut self) -> bool { true }
        fn actionable(&mut self) -> bool { false }
    }

    #[test]
    fn test_empty_raw_record_gets_every_default() {
        let rec = normalise_record(RawRecord::default(), 4, &mut Fixed);

        assert_eq!(rec.id, "5");
        assert_eq!(rec.title, DEFAULT_TITLE);
        assert_eq!(rec.authors, DEFAULT_AUTHORS);
        assert_eq!(rec.topic, DEFAULT_TOPIC);
        assert_eq!(rec.organism, DEFAULT_ORGANISM);
        assert_eq!(rec.mission, DEFAULT_MISSION);
        assert_eq!(rec.year, 2001);
        assert_eq!(rec.citation_count, 77);
        assert_eq!(rec.key_findings.len(), 3);
        assert!(rec.has_research_gap);
        assert!(!rec.is_actionable);
    }

    #[test]
    fn test_present_fields_are_kept() {
        let raw = RawRecord {
            id: Some("PMC42".into()),
            organism: Some("Arabidopsis".into()),
            citations: Some(3),
            research_gap: Some(false),
            actionable: Some(true),
            ..Default::default()
        };
        let rec = normalise_record(raw, 0, &mut Fixed);

        assert_eq!(rec.id, "PMC42");
        assert_eq!(rec.organism, "Arabidopsis");
        assert_eq!(rec.citation_count, 3);
        assert!(!rec.has_research_gap);
        assert!(rec.is_actionable);
    }

    #[test]
    fn test_seeded_pages_are_reproducible() {
        let page = || vec![RawRecord::default(); 20];
        let a = normalise_page(page(), &mut SeededFallback::new(2024));
        let b = normalise_page(page(), &mut SeededFallback::new(2024));
        assert_eq!(a, b);
    }
}
