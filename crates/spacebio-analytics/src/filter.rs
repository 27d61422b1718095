//! Search text + facet filtering.

use serde::{Deserialize, Serialize};
use spacebio_common::{FacetChoice, PublicationRecord};

/// The user's current search and facet choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub search_text: String,
    pub topic: FacetChoice,
    pub organism: FacetChoice,
}

impl FilterSelection {
    pub fn matches(&self, record: &PublicationRecord) -> bool {
        Matcher::new(self).matches(record)
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty() && self.topic.is_all() && self.organism.is_all()
    }
}

/// A selection with its search text lowercased once, for use across a whole record set.
struct Matcher<'s> {
    needle: String,
    selection: &'s FilterSelection,
}

impl<'s> Matcher<'s> {
    fn new(selection: &'s FilterSelection) -> Self {
        Self { needle: selection.search_text.to_lowercase(), selection }
    }

    /// Case-insensitive substring of title OR authors, AND both facets match.
    fn matches(&self, record: &PublicationRecord) -> bool {
        let matches_search = record.title.to_lowercase().contains(&self.needle)
            || record.authors.to_lowercase().contains(&self.needle);
        matches_search
            && self.selection.topic.matches(&record.topic)
            && self.selection.organism.matches(&record.organism)
    }
}

/// Records matching `selection`, in input order.
pub fn filter_records<'a>(
    records: impl IntoIterator<Item = &'a PublicationRecord>,
    selection: &FilterSelection,
) -> Vec<&'a PublicationRecord> {
    let matcher = Matcher::new(selection);
    records.into_iter().filter(|r| matcher.matches(r)).collect()
}
