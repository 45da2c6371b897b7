// Fixture HTTP server.
//
// Binds an ephemeral local port and serves the seeded application. Each
// scenario starts its own instance, so parallel test binaries never share
// a port or any state.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use axum::Router;
use tokio::task::JoinHandle;

use crate::pages;
use crate::seed::Seed;

/// Handle to a running fixture application.
pub struct FixtureServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FixtureServer {
    /// Starts the fixture with the canonical demo seed.
    pub async fn start() -> Self {
        Self::start_with(Seed::demo()).await
    }

    /// Starts the fixture with a custom seed.
    pub async fn start_with(seed: Seed) -> Self {
        let app = router(seed);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind fixture server");
        let addr = listener.local_addr().expect("failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fixture server failed");
        });
        tracing::debug!(%addr, "fixture server started");

        FixtureServer { addr, handle }
    }

    /// Base URL of the running fixture, e.g. `http://127.0.0.1:45678`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stops the server.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

pub(crate) fn router(seed: Seed) -> Router {
    let seed = Arc::new(seed);
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/issues") }))
        .route("/projects", get(projects_page))
        .route("/issues", get(issues_page))
        .route("/board/{id}", get(board_page))
        .with_state(seed)
}

async fn projects_page(State(seed): State<Arc<Seed>>) -> Html<String> {
    Html(pages::projects(&seed))
}

async fn issues_page(State(seed): State<Arc<Seed>>) -> Html<String> {
    Html(pages::issues(&seed))
}

async fn board_page(
    State(seed): State<Arc<Seed>>,
    Path(id): Path<u32>,
) -> axum::response::Response {
    match pages::board(&seed, id) {
        Some(html) => Html(html).into_response(),
        None => (StatusCode::NOT_FOUND, Html("<h1>Доска не найдена</h1>".to_string()))
            .into_response(),
    }
}
