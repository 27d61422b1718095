//! Publication, facet and query-result types shared by the loader, the analytics
//! engine and the web layer.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Facet value that stands for "no filter on this dimension".
pub const ALL_SENTINEL: &str = "All";

/// A normalised publication. Built once by the loader and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRecord {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub year: i32,
    pub topic: String,
    pub organism: String,
    pub mission: String,
    pub citation_count: u32,
    pub key_findings: Vec<String>,
    pub has_research_gap: bool,
    pub is_actionable: bool,
}

/// One entry of a facet dropdown: either the `All` sentinel or a concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetChoice {
    #[default]
    All,
    Value(String),
}

impl FacetChoice {
    /// Parses user input; blank input and the literal `All` both mean "no filter".
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL_SENTINEL {
            FacetChoice::All
        } else {
            FacetChoice::Value(trimmed.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            FacetChoice::All => true,
            FacetChoice::Value(v) => v == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetChoice::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FacetChoice::All => ALL_SENTINEL,
            FacetChoice::Value(v) => v,
        }
    }
}

impl fmt::Display for FacetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FacetChoice {
    fn from(raw: String) -> Self {
        FacetChoice::parse(&raw)
    }
}

impl From<FacetChoice> for String {
    fn from(choice: FacetChoice) -> Self {
        choice.as_str().to_string()
    }
}

/// Distinct facet values observed in the loaded records, each list led by `All`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetSets {
    pub topics: Vec<FacetChoice>,
    pub organisms: Vec<FacetChoice>,
    pub missions: Vec<FacetChoice>,
    pub years: Vec<FacetChoice>,
}

impl FacetSets {
    /// Facets for an empty record set: just the sentinel on every dimension.
    pub fn empty() -> Self {
        Self {
            topics: vec![FacetChoice::All],
            organisms: vec![FacetChoice::All],
            missions: vec![FacetChoice::All],
            years: vec![FacetChoice::All],
        }
    }
}

impl Default for FacetSets {
    fn default() -> Self { Self::empty() }
}

/// A supporting context fragment returned by the question-answering backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    #[serde(default, deserialize_with = "string_or_number")]
    pub chunk_id: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub text_preview: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub publication_id: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub link: Option<String>,
}

/// Outcome of the latest question. Each new query replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryResult {
    Answered {
        question: String,
        answer_text: String,
        snippets: Vec<Snippet>,
        /// Backend response exactly as received.
        raw: serde_json::Value,
    },
    Failed {
        question: String,
        error_message: String,
    },
}

impl QueryResult {
    pub fn question(&self) -> &str {
        match self {
            QueryResult::Answered { question, .. } | QueryResult::Failed { question, .. } => question,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, QueryResult::Failed { .. })
    }
}

/// Accepts identifiers sent either as JSON strings or numbers; `null` becomes empty.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
