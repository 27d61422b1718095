//! spacebio-web: Web dashboard for the space bioscience publication corpus.
//! Provides:
//!   - Overview tab: summary cards, year/topic/organism charts, key insights
//!   - Explore tab: filtered publication list with a detail panel
//!   - Question answering against the remote answer service
//!   - JSON API and SSE event stream

pub mod charts;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod session;
pub mod sse;
pub mod state;
