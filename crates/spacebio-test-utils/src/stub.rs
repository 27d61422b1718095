//! Throwaway HTTP backends bound to an ephemeral localhost port.

use axum::Router;
use tokio::net::TcpListener;

/// Serves `router` in the background and returns its base URL (`http://127.0.0.1:<port>`).
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server crashed");
    });
    format!("http://{}", addr)
}

/// A base URL on a port that was free a moment ago; connecting to it fails.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe listener");
    let addr = listener.local_addr().expect("probe listener address");
    drop(listener);
    format!("http://{}", addr)
}
