//! Publication fixtures.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};
use spacebio_common::PublicationRecord;

const TOPICS: [&str; 6] = [
    "Microgravity Effects",
    "Radiation Biology",
    "Musculoskeletal",
    "Immunology",
    "Plant Biology",
    "Cardiovascular",
];
const ORGANISMS: [&str; 5] = ["Mouse", "Human", "Arabidopsis", "Drosophila", "C. elegans"];
const MISSIONS: [&str; 4] = ["ISS", "STS-131", "Bion-M1", "Apollo 17"];
const WORDS: [&str; 6] = ["bone", "muscle", "root", "immune", "heart", "gene"];

/// A minimal record with the given identity; every other field is neutral.
pub fn record(id: &str, title: &str, year: i32, topic: &str, organism: &str) -> PublicationRecord {
    PublicationRecord {
        id: id.to_string(),
        title: title.to_string(),
        authors: "Doe et al.".to_string(),
        year,
        topic: topic.to_string(),
        organism: organism.to_string(),
        mission: "ISS".to_string(),
        citation_count: 0,
        key_findings: vec![],
        has_research_gap: false,
        is_actionable: false,
    }
}

/// "Microgravity bone loss" by Lee et al. (2010), 10 citations, actionable, no gap.
pub fn bone_loss_record() -> PublicationRecord {
    PublicationRecord {
        authors: "Lee et al.".to_string(),
        citation_count: 10,
        is_actionable: true,
        key_findings: vec!["Trabecular bone volume decreased".to_string()],
        ..record("1", "Microgravity bone loss", 2010, "Musculoskeletal", "Mouse")
    }
}

/// The same publication as served by the articles endpoint.
pub fn bone_loss_article() -> Value {
    json!({
        "id": 1,
        "title": "Microgravity bone loss",
        "authors": "Lee et al.",
        "year": 2010,
        "topic": "Musculoskeletal",
        "organism": "Mouse",
        "mission": "ISS",
        "citations": 10,
        "abstract": ["Trabecular bone volume decreased"],
        "researchGap": false,
        "actionable": true
    })
}

/// A reproducible pseudo-random corpus of `n` records.
pub fn random_corpus(seed: u64, n: usize) -> Vec<PublicationRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let word = WORDS[rng.gen_range(0..WORDS.len())];
            PublicationRecord {
                id: (i + 1).to_string(),
                title: format!("Effects of spaceflight on {} tissue", word),
                authors: format!("Author {} et al.", i + 1),
                year: rng.gen_range(2000..=2024),
                topic: TOPICS[rng.gen_range(0..TOPICS.len())].to_string(),
                organism: ORGANISMS[rng.gen_range(0..ORGANISMS.len())].to_string(),
                mission: MISSIONS[rng.gen_range(0..MISSIONS.len())].to_string(),
                citation_count: rng.gen_range(0..150),
                key_findings: vec![],
                has_research_gap: rng.gen_bool(0.3),
                is_actionable: rng.gen_bool(0.5),
            }
        })
        .collect()
}
