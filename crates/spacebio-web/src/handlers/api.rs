//! JSON views of the dashboard data.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use spacebio_analytics::{CountBucket, DashboardView, FilterSelection, Insight, SummaryStats, YearCount};
use spacebio_common::{FacetChoice, FacetSets, PublicationRecord};
use spacebio_ingestion::LoadStatus;

use crate::state::SharedState;

/// Optional overrides of the session's filter selection.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub search: Option<String>,
    pub topic: Option<String>,
    pub organism: Option<String>,
}

impl FilterParams {
    fn apply_to(self, mut selection: FilterSelection) -> FilterSelection {
        if let Some(search) = self.search {
            selection.search_text = search;
        }
        if let Some(topic) = self.topic {
            selection.topic = FacetChoice::parse(&topic);
        }
        if let Some(organism) = self.organism {
            selection.organism = FacetChoice::parse(&organism);
        }
        selection
    }
}

async fn current_view(state: &SharedState, params: FilterParams) -> (FilterSelection, DashboardView) {
    let session = state.snapshot().await;
    let selection = params.apply_to(session.selection.clone());
    let view = DashboardView::compute(&session.records, &selection);
    (selection, view)
}

#[derive(Debug, Serialize)]
pub struct PublicationsResponse {
    pub selection: FilterSelection,
    pub total: usize,
    pub publications: Vec<PublicationRecord>,
}

/// GET /api/publications
pub async fn api_publications(
    State(state): State<SharedState>,
    Query(params): Query<FilterParams>,
) -> Json<PublicationsResponse> {
    let (selection, view) = current_view(&state, params).await;
    Json(PublicationsResponse {
        selection,
        total: view.filtered.len(),
        publications: view.filtered,
    })
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub selection: FilterSelection,
    pub stats: SummaryStats,
    pub topic_distribution: Vec<CountBucket>,
    pub year_distribution: Vec<YearCount>,
    pub organism_distribution: Vec<CountBucket>,
    pub mission_distribution: Vec<CountBucket>,
    pub insights: Vec<Insight>,
}

/// GET /api/stats
pub async fn api_stats(
    State(state): State<SharedState>,
    Query(params): Query<FilterParams>,
) -> Json<StatsResponse> {
    let (selection, view) = current_view(&state, params).await;
    Json(StatsResponse {
        selection,
        stats: view.stats,
        topic_distribution: view.topic_distribution,
        year_distribution: view.year_distribution,
        organism_distribution: view.organism_distribution,
        mission_distribution: view.mission_distribution,
        insights: view.insights,
    })
}

#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub facets: FacetSets,
    pub load_status: LoadStatus,
}

/// GET /api/facets
pub async fn api_facets(State(state): State<SharedState>) -> Json<FacetsResponse> {
    let session = state.snapshot().await;
    Json(FacetsResponse {
        facets: session.facets,
        load_status: session.load_status,
    })
}
