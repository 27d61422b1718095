//! Axum router: maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use crate::state::SharedState;
use crate::handlers::{
    api::{api_facets, api_publications, api_stats},
    dashboard::{clear_selection, dashboard, select_record, set_filters, show_tab, toggle_filters},
    query::{ask, back},
    system::{health, reload},
};
use crate::sse::sse_handler;

/// Build and return the full Axum router.
/// Every POST route answers with a redirect to `/`.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // Pages
        .route("/",               get(dashboard))
        .route("/view/{tab}",     post(show_tab))
        .route("/filters",        post(set_filters))
        .route("/filters/toggle", post(toggle_filters))
        .route("/select",         post(select_record))
        .route("/select/clear",   post(clear_selection))
        .route("/ask",            post(ask))
        .route("/back",           post(back))
        .route("/reload",         post(reload))
        .route("/health",         get(health))

        // SSE streaming
        .route("/api/events", get(sse_handler))

        // API endpoints
        .route("/api/publications", get(api_publications))
        .route("/api/stats",        get(api_stats))
        .route("/api/facets",       get(api_facets))

        // Static files
        .nest_service("/static", ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
