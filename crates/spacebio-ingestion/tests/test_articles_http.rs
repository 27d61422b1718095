//! Articles client and loader against an in-process articles endpoint.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use spacebio_common::http::EndpointClient;
use spacebio_ingestion::sources::articles::HttpArticleSource;
use spacebio_ingestion::sources::ArticleSource;
use spacebio_ingestion::{DataLoader, LoadError, LoadStatus};
use spacebio_test_utils::fixtures::{bone_loss_article, bone_loss_record};
use spacebio_test_utils::stub::{closed_base_url, spawn_stub};

fn source_for(base: &str) -> HttpArticleSource {
    let client = EndpointClient::new(&[base], Duration::from_secs(5)).unwrap();
    HttpArticleSource::new(client, format!("{}/api", base))
}

async fn articles(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let page_size: usize = params.get("page_size").and_then(|s| s.parse().ok()).unwrap_or(10);
    let mut articles = vec![bone_loss_article()];
    articles.extend((0..5).map(|i| json!({"title": format!("Untitled study {i}")})));
    articles.truncate(page_size);
    Json(json!({"page": 1, "page_size": page_size, "articles": articles}))
}

#[tokio::test]
async fn test_fetch_passes_page_size() {
    let base = spawn_stub(Router::new().route("/api/articles", get(articles))).await;
    let raws = source_for(&base).fetch_articles(3).await.unwrap();
    assert_eq!(raws.len(), 3);
    assert_eq!(raws[0].title.as_deref(), Some("Microgravity bone loss"));
}

#[tokio::test]
async fn test_loader_normalises_served_records() {
    let base = spawn_stub(Router::new().route("/api/articles", get(articles))).await;
    let loader = DataLoader::new(Arc::new(source_for(&base)), 100, Some(5));
    let outcome = loader.load().await;

    assert_eq!(outcome.records.len(), 6);
    assert_eq!(outcome.records[0], bone_loss_record());
    assert_eq!(outcome.records[1].organism, "Unknown Organism");
    assert_eq!(outcome.records[1].id, "2");
    assert!(matches!(outcome.status, LoadStatus::Loaded { count: 6, .. }));
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let router = Router::new().route(
        "/api/articles",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database offline") }),
    );
    let base = spawn_stub(router).await;
    let err = source_for(&base).fetch_articles(10).await.unwrap_err();
    match err {
        LoadError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database offline");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_yields_empty_outcome() {
    let base = closed_base_url().await;
    let loader = DataLoader::new(Arc::new(source_for(&base)), 100, None);
    let outcome = loader.load().await;

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.facets.topics.len(), 1);
    assert!(outcome.status.is_failed());
}
