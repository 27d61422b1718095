//! Invariants of the filter/aggregation pipeline over generated corpora.

use spacebio_analytics::aggregate::{
    organism_distribution, summary_stats, topic_distribution, year_distribution,
};
use spacebio_analytics::filter::filter_records;
use spacebio_analytics::{DashboardView, FilterSelection};
use spacebio_common::{FacetChoice, PublicationRecord};
use spacebio_test_utils::fixtures::random_corpus;

fn selections() -> Vec<FilterSelection> {
    let searches = ["", "bone", "HEART", "author 1", "zzz"];
    let topics = [FacetChoice::All, FacetChoice::Value("Immunology".into())];
    let organisms = [FacetChoice::All, FacetChoice::Value("Mouse".into()), FacetChoice::Value("Yeast".into())];

    let mut out = Vec::new();
    for search in searches {
        for topic in &topics {
            for organism in &organisms {
                out.push(FilterSelection {
                    search_text: search.to_string(),
                    topic: topic.clone(),
                    organism: organism.clone(),
                });
            }
        }
    }
    out
}

fn corpora() -> Vec<Vec<PublicationRecord>> {
    vec![Vec::new(), random_corpus(1, 1), random_corpus(7, 60), random_corpus(42, 250)]
}

#[test]
fn filtering_is_idempotent() {
    for records in corpora() {
        for selection in selections() {
            let once = filter_records(&records, &selection);
            let twice = filter_records(once.iter().copied(), &selection);
            assert_eq!(once, twice, "selection {selection:?}");
        }
    }
}

#[test]
fn all_sentinel_matches_every_facet_value() {
    for records in corpora() {
        let unfiltered = filter_records(&records, &FilterSelection::default());
        assert_eq!(unfiltered.len(), records.len());

        // With topic at All, an organism filter keeps that organism across every topic.
        for organism in records.iter().map(|r| r.organism.clone()) {
            let selection = FilterSelection {
                topic: FacetChoice::All,
                organism: FacetChoice::Value(organism.clone()),
                ..Default::default()
            };
            let expected: Vec<&PublicationRecord> = records.iter().filter(|r| r.organism == organism).collect();
            assert_eq!(filter_records(&records, &selection), expected, "organism {organism}");
        }

        for topic in records.iter().map(|r| r.topic.clone()) {
            let selection = FilterSelection {
                topic: FacetChoice::Value(topic.clone()),
                organism: FacetChoice::All,
                ..Default::default()
            };
            let expected: Vec<&PublicationRecord> = records.iter().filter(|r| r.topic == topic).collect();
            assert_eq!(filter_records(&records, &selection), expected, "topic {topic}");
        }
    }
}

#[test]
fn grouped_counts_sum_to_filtered_size() {
    for records in corpora() {
        for selection in selections() {
            let filtered = filter_records(&records, &selection);
            let n = filtered.len();

            assert_eq!(topic_distribution(&filtered).iter().map(|b| b.value).sum::<usize>(), n);
            assert_eq!(organism_distribution(&filtered).iter().map(|b| b.value).sum::<usize>(), n);
            assert_eq!(year_distribution(&filtered).iter().map(|y| y.count).sum::<usize>(), n);
            assert_eq!(summary_stats(&filtered).total, n);
        }
    }
}

#[test]
fn year_distribution_is_strictly_ascending() {
    for records in corpora() {
        let all: Vec<&PublicationRecord> = records.iter().collect();
        let years = year_distribution(&all);
        assert!(years.windows(2).all(|w| w[0].year < w[1].year));
    }
}

#[test]
fn empty_view_has_defined_average() {
    let records = random_corpus(3, 40);
    let selection = FilterSelection { search_text: "no such publication".into(), ..Default::default() };
    let view = DashboardView::compute(&records, &selection);

    assert_eq!(view.stats.total, 0);
    assert_eq!(view.stats.avg_citations, 0);
    let json = serde_json::to_value(&view.stats).unwrap();
    assert_eq!(json["avg_citations"], 0);
}

#[test]
fn view_is_deterministic() {
    let records = random_corpus(9, 120);
    for selection in selections() {
        assert_eq!(
            DashboardView::compute(&records, &selection),
            DashboardView::compute(&records, &selection)
        );
    }
}
