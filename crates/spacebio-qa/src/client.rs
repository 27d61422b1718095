//! `/ask` client.
//!
//! Endpoint: POST {base}/ask with {"question": ..., "top_k": ...}

use async_trait::async_trait;
use serde::Serialize;
use spacebio_common::http::{join_endpoint, EndpointClient};
use tracing::instrument;

use crate::answer::{parse_answer, Answer};
use crate::error::QueryError;
use crate::limit::ResultLimit;

#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn ask(&self, question: &str, limit: ResultLimit) -> Result<Answer, QueryError>;
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
    top_k: u32,
}

pub struct HttpAnswerService {
    client: EndpointClient,
    base_url: String,
}

impl HttpAnswerService {
    pub fn new(client: EndpointClient, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    pub fn url(&self) -> String {
        join_endpoint(&self.base_url, "ask")
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    #[instrument(skip(self), fields(top_k = limit.get()))]
    async fn ask(&self, question: &str, limit: ResultLimit) -> Result<Answer, QueryError> {
        let resp = self.client
            .post(&self.url())?
            .json(&AskRequest { question, top_k: limit.get() })
            .send()
            .await?;

        let body = check_response_status(resp).await?;
        parse_answer(body)
    }
}

/// Reads the body and turns an error status into [`QueryError::Api`], using the
/// backend's `detail`/`error`/`message` field when it sent one.
async fn check_response_status(resp: reqwest::Response) -> Result<serde_json::Value, QueryError> {
    let status = resp.status().as_u16();
    let text = resp.text().await?;
    let body: Option<serde_json::Value> = serde_json::from_str(&text).ok();

    if status >= 400 {
        let message = body
            .as_ref()
            .and_then(|b| {
                b["detail"].as_str()
                    .or_else(|| b["error"].as_str())
                    .or_else(|| b["message"].as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| {
                let snippet: String = text.chars().take(200).collect();
                if snippet.trim().is_empty() { "unknown API error".to_string() } else { snippet }
            });
        return Err(QueryError::Api { status, message });
    }

    body.ok_or_else(|| QueryError::Malformed("response is not JSON".to_string()))
}
