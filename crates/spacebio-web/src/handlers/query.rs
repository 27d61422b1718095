//! Question submission and the way back from the results view.

use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

use crate::session::Action;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AskForm {
    pub question: String,
    /// Kept as text so blank and malformed input reach the limit validation.
    #[serde(default)]
    pub top_k: String,
}

/// Runs the query to completion, then shows the results screen.
pub async fn ask(State(state): State<SharedState>, Form(form): Form<AskForm>) -> Redirect {
    state.ask(&form.question, &form.top_k).await;
    Redirect::to("/")
}

pub async fn back(State(state): State<SharedState>) -> Redirect {
    state.apply(Action::Back).await;
    Redirect::to("/")
}
