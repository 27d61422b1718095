//! Page rendering with minijinja. Templates are compiled into the binary.

use minijinja::{context, Environment};
use serde::Serialize;
use spacebio_analytics::{DashboardView, Insight, SummaryStats};
use spacebio_common::{FacetSets, PublicationRecord, QueryResult};
use spacebio_config::DashboardConfig;
use spacebio_ingestion::LoadStatus;

use crate::charts::{self, Bar, LineChart, Slice};
use crate::session::{DashboardState, Screen, Tab};

pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("base.html", include_str!("../templates/base.html"))?;
    env.add_template("charts.html", include_str!("../templates/charts.html"))?;
    env.add_template("dashboard.html", include_str!("../templates/dashboard.html"))?;
    env.add_template("results.html", include_str!("../templates/results.html"))?;
    Ok(env)
}

/// Header data shared by every page.
#[derive(Debug, Serialize)]
struct Chrome<'a> {
    record_count: usize,
    load_status: &'a LoadStatus,
    facets: &'a FacetSets,
    search_text: &'a str,
    topic: &'a str,
    organism: &'a str,
    show_filters: bool,
    tab: Tab,
    screen: Screen,
    default_top_k: u32,
}

#[derive(Debug, Serialize)]
struct Overview<'a> {
    stats: SummaryStats,
    years: LineChart,
    topics: Vec<Bar>,
    organisms: Vec<Slice>,
    insights: &'a [Insight],
}

#[derive(Debug, Serialize)]
struct Explore<'a> {
    total: usize,
    shown: &'a [PublicationRecord],
    selected: Option<&'a PublicationRecord>,
}

/// Renders whichever screen the session is on.
pub fn render_page(
    env: &Environment<'static>,
    state: &DashboardState,
    dashboard: &DashboardConfig,
    default_top_k: u32,
) -> Result<String, minijinja::Error> {
    let chrome = Chrome {
        record_count: state.records.len(),
        load_status: &state.load_status,
        facets: &state.facets,
        search_text: &state.selection.search_text,
        topic: state.selection.topic.as_str(),
        organism: state.selection.organism.as_str(),
        show_filters: state.show_filters,
        tab: state.tab,
        screen: state.screen,
        default_top_k,
    };

    match state.screen {
        Screen::Results => render_results(env, &chrome, state),
        Screen::Dashboard => render_dashboard(env, &chrome, state, dashboard),
    }
}

fn render_dashboard(
    env: &Environment<'static>,
    chrome: &Chrome<'_>,
    state: &DashboardState,
    dashboard: &DashboardConfig,
) -> Result<String, minijinja::Error> {
    let view = DashboardView::compute(&state.records, &state.selection);

    let overview = Overview {
        stats: view.stats,
        years: charts::line_chart(&view.year_distribution),
        topics: charts::bar_chart(&view.topic_distribution, dashboard.top_topics),
        organisms: charts::pie_chart(&view.organism_distribution),
        insights: &view.insights,
    };
    let explore = Explore {
        total: view.filtered.len(),
        shown: &view.filtered[..view.filtered.len().min(dashboard.explore_limit)],
        selected: state.selected(),
    };

    env.get_template("dashboard.html")?.render(context! {
        chrome => chrome,
        overview => overview,
        explore => explore,
        width => charts::WIDTH,
        height => charts::HEIGHT,
    })
}

fn render_results(
    env: &Environment<'static>,
    chrome: &Chrome<'_>,
    state: &DashboardState,
) -> Result<String, minijinja::Error> {
    let result: Option<&QueryResult> = state.query.result.as_ref();
    let raw_json = match result {
        Some(QueryResult::Answered { raw, .. }) => serde_json::to_string_pretty(raw).ok(),
        _ => None,
    };

    env.get_template("results.html")?.render(context! {
        chrome => chrome,
        pending => state.query.pending,
        question => &state.query.last_question,
        result => result,
        raw_json => raw_json,
    })
}
