//! Articles endpoint client.
//!
//! Endpoint: GET {base}/articles?page_size=<n> → { "articles": [...] }

use async_trait::async_trait;
use spacebio_common::http::{join_endpoint, EndpointClient};
use tracing::{debug, instrument};

use crate::loader::LoadError;
use crate::models::RawRecord;
use super::ArticleSource;

pub struct HttpArticleSource {
    client: EndpointClient,
    base_url: String,
}

impl HttpArticleSource {
    pub fn new(client: EndpointClient, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    pub fn url(&self) -> String {
        join_endpoint(&self.base_url, "articles")
    }
}

#[async_trait]
impl ArticleSource for HttpArticleSource {
    #[instrument(skip(self))]
    async fn fetch_articles(&self, page_size: u32) -> Result<Vec<RawRecord>, LoadError> {
        let resp = self.client
            .get(&self.url())?
            .query(&[("page_size", page_size.to_string())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LoadError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body: serde_json::Value = resp.json().await?;
        parse_articles_page(&body)
    }
}

/// Reads the `articles` array out of a page body. A body that carries an
/// `error` field, or no `articles` array at all, is a failed load.
pub fn parse_articles_page(body: &serde_json::Value) -> Result<Vec<RawRecord>, LoadError> {
    let Some(articles) = body["articles"].as_array() else {
        let message = body["error"]
            .as_str()
            .map(String::from)
            .unwrap_or_else(|| "response has no articles array".to_string());
        return Err(LoadError::Backend(message));
    };

    debug!(count = articles.len(), "Articles endpoint returned records");

    Ok(articles.iter().map(RawRecord::from_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_with_articles() {
        let raws = parse_articles_page(&json!({
            "page": 1,
            "page_size": 2,
            "articles": [{"title": "A"}, {"title": "B", "organism": "Mouse"}],
            "total": 2
        }))
        .unwrap();
        assert_eq!(raws.len(), 2);
        assert_eq!(raws[1].organism.as_deref(), Some("Mouse"));
    }

    #[test]
    fn test_error_body_is_a_backend_failure() {
        let err = parse_articles_page(&json!({"error": "relation \"articles\" does not exist"})).unwrap_err();
        match err {
            LoadError::Backend(msg) => assert!(msg.contains("does not exist")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_articles_array() {
        assert!(matches!(
            parse_articles_page(&json!({"articles": null})),
            Err(LoadError::Backend(_))
        ));
    }
}
