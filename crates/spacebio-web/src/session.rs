//! Dashboard session state and the reducer that evolves it.
//!
//! [`DashboardState`] is never mutated in place. Handlers build an [`Action`]
//! from the request and swap in the value returned by [`reduce`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use spacebio_analytics::FilterSelection;
use spacebio_common::{FacetSets, PublicationRecord, QueryResult};
use spacebio_ingestion::{LoadOutcome, LoadStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Overview,
    Explore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Dashboard,
    Results,
}

/// Bookkeeping for the question panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryState {
    /// Token of the most recently issued query; `0` before the first one.
    pub latest_seq: u64,
    pub pending: bool,
    pub last_question: String,
    pub result: Option<QueryResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub records: Arc<[PublicationRecord]>,
    pub facets: FacetSets,
    pub load_status: LoadStatus,
    pub selection: FilterSelection,
    pub tab: Tab,
    pub screen: Screen,
    pub show_filters: bool,
    pub selected_record: Option<String>,
    pub query: QueryState,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            facets: FacetSets::empty(),
            load_status: LoadStatus::Pending,
            selection: FilterSelection::default(),
            tab: Tab::default(),
            screen: Screen::default(),
            show_filters: false,
            selected_record: None,
            query: QueryState::default(),
        }
    }
}

impl DashboardState {
    pub fn selected(&self) -> Option<&PublicationRecord> {
        let id = self.selected_record.as_deref()?;
        self.records.iter().find(|r| r.id == id)
    }

    /// Whether a resolution carrying `seq` belongs to the latest issued query.
    pub fn is_current_query(&self, seq: u64) -> bool {
        seq != 0 && seq == self.query.latest_seq
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    RecordsLoaded(LoadOutcome),
    SetFilters(FilterSelection),
    ShowTab(Tab),
    ToggleFilters,
    SelectRecord(String),
    ClearSelection,
    /// Issues the next sequence token and shows the results screen.
    QuerySubmitted { question: String },
    /// Ignored unless `seq` is the latest issued token.
    QueryResolved { seq: u64, result: QueryResult },
    /// Leaves the results screen for the tab that was active before.
    Back,
}

pub fn reduce(state: &DashboardState, action: Action) -> DashboardState {
    let mut next = state.clone();
    match action {
        Action::RecordsLoaded(outcome) => {
            next.records = Arc::from(outcome.records);
            next.facets = outcome.facets;
            next.load_status = outcome.status;
            if next.selected().is_none() {
                next.selected_record = None;
            }
        }
        Action::SetFilters(selection) => next.selection = selection,
        Action::ShowTab(tab) => {
            next.tab = tab;
            next.screen = Screen::Dashboard;
        }
        Action::ToggleFilters => next.show_filters = !state.show_filters,
        Action::SelectRecord(id) => {
            next.selected_record = state.records.iter().any(|r| r.id == id).then_some(id);
        }
        Action::ClearSelection => next.selected_record = None,
        Action::QuerySubmitted { question } => {
            next.query.latest_seq = state.query.latest_seq + 1;
            next.query.pending = true;
            next.query.last_question = question;
            next.screen = Screen::Results;
        }
        Action::QueryResolved { seq, result } => {
            if !state.is_current_query(seq) {
                return next;
            }
            next.query.pending = false;
            next.query.result = Some(result);
            next.screen = Screen::Results;
        }
        Action::Back => next.screen = Screen::Dashboard,
    }
    next
}
