//! Dashboard page and the form actions that change what it shows.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use spacebio_analytics::FilterSelection;
use spacebio_common::FacetChoice;

use crate::error::ApiError;
use crate::render::render_page;
use crate::session::{Action, Tab};
use crate::state::SharedState;

/// Renders the current screen: the dashboard tabs, or the results view.
pub async fn dashboard(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let session = state.snapshot().await;
    let html = render_page(&state.templates, &session, &state.dashboard, state.default_top_k)?;
    Ok(Html(html))
}

pub async fn show_tab(State(state): State<SharedState>, Path(tab): Path<Tab>) -> Redirect {
    state.apply(Action::ShowTab(tab)).await;
    Redirect::to("/")
}

#[derive(Debug, Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub organism: String,
}

impl From<FilterForm> for FilterSelection {
    fn from(form: FilterForm) -> Self {
        FilterSelection {
            search_text: form.search,
            topic: FacetChoice::parse(&form.topic),
            organism: FacetChoice::parse(&form.organism),
        }
    }
}

pub async fn set_filters(State(state): State<SharedState>, Form(form): Form<FilterForm>) -> Redirect {
    state.apply(Action::SetFilters(form.into())).await;
    Redirect::to("/")
}

pub async fn toggle_filters(State(state): State<SharedState>) -> Redirect {
    state.apply(Action::ToggleFilters).await;
    Redirect::to("/")
}

#[derive(Debug, Deserialize)]
pub struct SelectForm {
    pub id: String,
}

pub async fn select_record(State(state): State<SharedState>, Form(form): Form<SelectForm>) -> Redirect {
    state.apply(Action::SelectRecord(form.id)).await;
    Redirect::to("/")
}

pub async fn clear_selection(State(state): State<SharedState>) -> Redirect {
    state.apply(Action::ClearSelection).await;
    Redirect::to("/")
}
