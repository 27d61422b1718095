//! Server-Sent Events (SSE) so an open page learns about new records and answers.

use axum::response::sse::{Event, KeepAlive, Sse};
use axum::extract::State;
use futures_core::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::state::SharedState;

/// SSE endpoint. Each event carries its kind as the SSE event name and the
/// serialized [`crate::state::AppEvent`] as data. Lagged receivers skip ahead.
pub async fn sse_handler(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.subscribe();
    let stream = BroadcastStream::new(rx)
        .filter_map(|result| {
            let event = result.ok()?;
            let data = serde_json::to_string(&event).ok()?;
            Some(Ok(Event::default().event(event.name()).data(data)))
        });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}
