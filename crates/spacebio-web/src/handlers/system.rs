//! Health check and corpus reload.

use axum::extract::State;
use axum::response::Redirect;
use axum::Json;
use serde_json::{json, Value};

use crate::state::SharedState;

pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    let session = state.snapshot().await;
    Json(json!({
        "status": "ok",
        "records": session.records.len(),
        "load": session.load_status,
    }))
}

/// Retries the corpus load; used by the banner shown after a failed load.
pub async fn reload(State(state): State<SharedState>) -> Redirect {
    state.reload().await;
    Redirect::to("/")
}
