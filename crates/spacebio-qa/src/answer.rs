//! Reading answers out of `/ask` responses.
//!
//! The preferred shape is structured: `{"answer": {"content": "..."}, "context": [...]}`.
//! Backends that forward an LLM client's repr instead send
//! `{"answer": "... content='...' ...", ...}`; that envelope is unwrapped here as
//! a compatibility fallback.

use regex::Regex;
use serde_json::Value;
use spacebio_common::Snippet;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::QueryError;

/// Answer text and supporting snippets extracted from one response body.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub answer_text: String,
    pub snippets: Vec<Snippet>,
    pub raw: Value,
}

pub fn parse_answer(body: Value) -> Result<Answer, QueryError> {
    let answer_text = match &body["answer"] {
        Value::String(s) => unwrap_content_envelope(s),
        Value::Object(obj) => obj
            .get("content")
            .or_else(|| obj.get("text"))
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .ok_or_else(|| QueryError::Malformed("structured answer has no content".to_string()))?,
        _ => return Err(QueryError::Malformed("response has no answer".to_string())),
    };

    // Older backends name the snippet list `top_chunks`.
    let context = match &body["context"] {
        Value::Array(items) => items.as_slice(),
        _ => body["top_chunks"].as_array().map(Vec::as_slice).unwrap_or(&[]),
    };
    let snippets: Vec<Snippet> = context
        .iter()
        .filter_map(|c| serde_json::from_value(c.clone()).ok())
        .collect();

    debug!(snippets = snippets.len(), "Parsed answer");

    Ok(Answer { answer_text, snippets, raw: body })
}

fn envelope_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // content='...' or content="...", honouring backslash escapes inside the quotes
        Regex::new(r#"(?s)content=(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")"#).unwrap()
    })
}

/// Returns the text inside a `content='...'` envelope, or the trimmed input
/// unchanged when there is none.
pub fn unwrap_content_envelope(raw: &str) -> String {
    match envelope_regex().captures(raw) {
        Some(caps) => {
            let inner = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str()).unwrap_or("");
            unescape(inner).trim().to_string()
        }
        None => raw.trim().to_string(),
    }
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_envelope_is_stripped() {
        assert_eq!(
            unwrap_content_envelope("content='Spaceflight reduces bone density.'"),
            "Spaceflight reduces bone density."
        );
    }

    #[test]
    fn test_envelope_inside_message_repr() {
        let raw = r#"model='llama2' message=Message(role='assistant', content="It's the fluid shift.\nMostly.", images=None)"#;
        assert_eq!(unwrap_content_envelope(raw), "It's the fluid shift.\nMostly.");
    }

    #[test]
    fn test_escaped_quotes_are_unescaped() {
        assert_eq!(unwrap_content_envelope(r"content='the crew\'s data'"), "the crew's data");
    }

    #[test]
    fn test_plain_answer_passes_through() {
        assert_eq!(unwrap_content_envelope("  Plain answer. "), "Plain answer.");
    }

    #[test]
    fn test_structured_answer_is_preferred() {
        let answer = parse_answer(json!({
            "answer": {"content": "Muscle atrophy is reduced by exercise."},
            "context": [{"chunk_id": "c1", "section": "results", "text_preview": "...", "publication_id": "p1", "score": 0.9}]
        }))
        .unwrap();
        assert_eq!(answer.answer_text, "Muscle atrophy is reduced by exercise.");
        assert_eq!(answer.snippets.len(), 1);
        assert_eq!(answer.snippets[0].section, "results");
    }

    #[test]
    fn test_top_chunks_are_accepted() {
        let answer = parse_answer(json!({
            "answer": "ok",
            "top_chunks": [{"chunk_id": 3, "text_preview": "x", "publication_id": 9, "score": 0.5}]
        }))
        .unwrap();
        assert_eq!(answer.snippets[0].chunk_id, "3");
    }

    #[test]
    fn test_missing_answer_is_malformed() {
        assert!(matches!(
            parse_answer(json!({"detail": "Not Found"})),
            Err(QueryError::Malformed(_))
        ));
    }
}
