//! Spacebio Web Server
//!
//! Run with: cargo run -p spacebio-web

use std::sync::Arc;
use std::time::Duration;

use spacebio_common::http::EndpointClient;
use spacebio_config::Config;
use spacebio_ingestion::sources::articles::HttpArticleSource;
use spacebio_ingestion::DataLoader;
use spacebio_qa::{HttpAnswerService, QueryDispatcher};
use spacebio_web::state::AppState;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("spacebio=debug,info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Spacebio Web Server...");

    let config = Config::load()?;
    let endpoints = &config.endpoints;
    let client = EndpointClient::new(
        &[endpoints.articles_base_url.as_str(), endpoints.ask_base_url.as_str()],
        Duration::from_secs(endpoints.request_timeout_secs),
    )?;
    info!(articles = %endpoints.articles_base_url, ask = %endpoints.ask_base_url, "Backend endpoints");

    let source = HttpArticleSource::new(client.clone(), endpoints.articles_base_url.clone());
    let loader = DataLoader::new(Arc::new(source), config.loader.page_size, config.loader.fallback_seed);

    let service = HttpAnswerService::new(client, endpoints.ask_base_url.clone());
    let dispatcher = QueryDispatcher::new(Arc::new(service), config.qa.default_top_k, config.qa.max_top_k);

    // Create app state
    let state = Arc::new(AppState::new(
        loader,
        dispatcher,
        config.dashboard.clone(),
        config.qa.default_top_k,
    )?);

    // Initial load runs in the background; the page shows a loading banner until it lands
    let loading = state.clone();
    tokio::spawn(async move { loading.reload().await });

    // Build router
    let app = spacebio_web::router::build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
