//! Shared application state for the web server.

use std::sync::Arc;

use minijinja::Environment;
use serde::{Deserialize, Serialize};
use spacebio_common::QueryResult;
use spacebio_config::DashboardConfig;
use spacebio_ingestion::DataLoader;
use spacebio_qa::QueryDispatcher;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

use crate::render;
use crate::session::{reduce, Action, DashboardState};

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A load attempt finished, successfully or not
    RecordsLoaded { count: usize, failed: bool },
    /// The latest query has a result
    QueryResolved { seq: u64, question: String, failed: bool },
    /// A superseded query finished and its result was dropped
    QueryDiscarded { seq: u64 },
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::RecordsLoaded { .. } => "records_loaded",
            AppEvent::QueryResolved { .. } => "query_resolved",
            AppEvent::QueryDiscarded { .. } => "query_discarded",
        }
    }
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    session: RwLock<DashboardState>,
    pub loader: DataLoader,
    pub dispatcher: QueryDispatcher,
    pub templates: Environment<'static>,
    pub dashboard: DashboardConfig,
    pub default_top_k: u32,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<AppEvent>,
}

impl AppState {
    pub fn new(
        loader: DataLoader,
        dispatcher: QueryDispatcher,
        dashboard: DashboardConfig,
        default_top_k: u32,
    ) -> Result<Self, minijinja::Error> {
        let (event_tx, _) = broadcast::channel(256);
        Ok(Self {
            session: RwLock::new(DashboardState::default()),
            loader,
            dispatcher,
            templates: render::environment()?,
            dashboard,
            default_top_k,
            event_tx,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }

    fn publish(&self, event: AppEvent) {
        // no subscribers is fine
        let _ = self.event_tx.send(event);
    }

    /// A copy of the current session.
    pub async fn snapshot(&self) -> DashboardState {
        self.session.read().await.clone()
    }

    /// Replaces the session with `reduce(session, action)` and returns the new value.
    pub async fn apply(&self, action: Action) -> DashboardState {
        let mut session = self.session.write().await;
        let next = reduce(&session, action);
        *session = next.clone();
        next
    }

    /// Fetches the corpus and swaps it into the session.
    pub async fn reload(&self) {
        let outcome = self.loader.load().await;
        let event = AppEvent::RecordsLoaded {
            count: outcome.records.len(),
            failed: outcome.status.is_failed(),
        };
        self.apply(Action::RecordsLoaded(outcome)).await;
        self.publish(event);
    }

    /// Issues a new query token and marks the query pending.
    pub async fn submit_query(&self, question: &str) -> u64 {
        let next = self.apply(Action::QuerySubmitted { question: question.trim().to_string() }).await;
        next.query.latest_seq
    }

    /// Stores `result` if `seq` is still the latest query. Returns whether it was kept.
    pub async fn resolve_query(&self, seq: u64, result: QueryResult) -> bool {
        let mut session = self.session.write().await;
        if !session.is_current_query(seq) {
            drop(session);
            debug!(seq, "Discarding superseded query result");
            self.publish(AppEvent::QueryDiscarded { seq });
            return false;
        }

        let event = AppEvent::QueryResolved {
            seq,
            question: result.question().to_string(),
            failed: result.is_failure(),
        };
        *session = reduce(&session, Action::QueryResolved { seq, result });
        drop(session);
        self.publish(event);
        true
    }

    /// Submits, dispatches and resolves one question. The session lock is not
    /// held while the answer service is being called.
    pub async fn ask(&self, question: &str, raw_limit: &str) -> bool {
        let seq = self.submit_query(question).await;
        info!(seq, "Dispatching question");
        let result = self.dispatcher.dispatch(question, raw_limit).await;
        self.resolve_query(seq, result).await
    }
}

pub type SharedState = Arc<AppState>;
