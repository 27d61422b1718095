//! Raw article records as served by the articles endpoint.
//!
//! Every field is optional and read leniently: a value of the wrong JSON type
//! is treated the same as an absent one, so a single malformed record can
//! never fail the whole page.

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub authors: Option<String>,
    pub year: Option<i32>,
    pub topic: Option<String>,
    pub organism: Option<String>,
    pub mission: Option<String>,
    pub citations: Option<u32>,
    pub abstract_lines: Option<Vec<String>>,
    pub research_gap: Option<bool>,
    pub actionable: Option<bool>,
}

impl RawRecord {
    pub fn from_json(r: &Value) -> Self {
        RawRecord {
            id: match &r["id"] {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            },
            title: text(&r["title"]),
            authors: authors(&r["authors"]),
            year: year(&r["year"]),
            topic: text(&r["topic"]),
            organism: text(&r["organism"]),
            mission: text(&r["mission"]),
            citations: match &r["citations"] {
                Value::Number(n) => n.as_u64().map(|c| c.min(u32::MAX as u64) as u32),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            },
            abstract_lines: abstract_lines(&r["abstract"]),
            research_gap: r["researchGap"].as_bool(),
            actionable: r["actionable"].as_bool(),
        }
    }
}

fn text(v: &Value) -> Option<String> {
    v.as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// `"Lee et al."` or `["Lee, A.", "Kim, B."]` → one display string.
fn authors(v: &Value) -> Option<String> {
    match v {
        Value::Array(items) => {
            let names: Vec<String> = items.iter().filter_map(text).collect();
            (!names.is_empty()).then(|| names.join(", "))
        }
        other => text(other),
    }
}

/// Accepts `2014`, `"2014"` and date strings such as `"2014-05-01"`.
fn year(v: &Value) -> Option<i32> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && f.abs() < 1e9).map(|f| f as i64))
            .and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.len() == 4 { digits.parse().ok() } else { None }
        }
        _ => None,
    }
}

fn abstract_lines(v: &Value) -> Option<Vec<String>> {
    let lines: Vec<String> = match v {
        Value::Array(items) => items.iter().filter_map(text).collect(),
        other => text(other).into_iter().collect(),
    };
    (!lines.is_empty()).then_some(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_full_record_is_read() {
        let raw = RawRecord::from_json(&json!({
            "id": 7,
            "title": "Microgravity bone loss",
            "authors": ["Lee, A.", "Kim, B."],
            "year": "2010",
            "topic": "Musculoskeletal",
            "organism": "Mouse",
            "mission": "STS-131",
            "citations": 10,
            "abstract": "Bone density dropped by 12%.",
            "researchGap": false,
            "actionable": true
        }));

        assert_eq!(raw.id.as_deref(), Some("7"));
        assert_eq!(raw.authors.as_deref(), Some("Lee, A., Kim, B."));
        assert_eq!(raw.year, Some(2010));
        assert_eq!(raw.citations, Some(10));
        assert_eq!(raw.abstract_lines, Some(vec!["Bone density dropped by 12%.".to_string()]));
        assert_eq!(raw.research_gap, Some(false));
        assert_eq!(raw.actionable, Some(true));
    }

    #[test]
    fn test_wrong_types_are_treated_as_absent() {
        let raw = RawRecord::from_json(&json!({
            "title": 42,
            "authors": [],
            "year": "unknown",
            "citations": -3,
            "abstract": [" ", null],
            "researchGap": "yes"
        }));
        assert_eq!(raw, RawRecord::default());
    }

    #[test]
    fn test_year_from_date_string() {
        assert_eq!(year(&json!("2014-05-01")), Some(2014));
        assert_eq!(year(&json!("14-05-01")), None);
    }

    #[test]
    fn test_year_from_whole_float() {
        assert_eq!(year(&json!(2010.0)), Some(2010));
        assert_eq!(year(&json!(2010.5)), None);
    }

    #[test]
    fn test_abstract_list_keeps_order() {
        let raw = RawRecord::from_json(&json!({"abstract": ["first", "second"]}));
        assert_eq!(raw.abstract_lines, Some(vec!["first".to_string(), "second".to_string()]));
    }
}
