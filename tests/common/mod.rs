//! Shared test helpers: a local stand-in for the Docker Hub tags API

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::future::IntoFuture;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Every tracked constant pinned at v1.0.0, in the layout of the real file
pub const IMAGES_GO: &str = r#"package images

const (
	C          = "horuszup/horusec-c:v1.0.0"
	Csharp     = "horuszup/horusec-csharp:v1.0.0"
	Elixir     = "horuszup/horusec-elixir:v1.0.0"
	Generic    = "horuszup/horusec-generic:v1.0.0"
	Go         = "horuszup/horusec-go:v1.0.0"
	HCL        = "horuszup/horusec-hcl:v1.0.0"
	Javascript = "horuszup/horusec-js:v1.0.0"
	Leaks      = "horuszup/horusec-leaks:v1.0.0"
	PHP        = "horuszup/horusec-php:v1.0.0"
	Python     = "horuszup/horusec-python:v1.0.0"
	Ruby       = "horuszup/horusec-ruby:v1.0.0"
	Shell      = "horuszup/horusec-shell:v1.0.0"
)
"#;

/// Repositories behind the tracked constants
pub const REPOSITORIES: &[&str] = &[
    "horusec-c",
    "horusec-csharp",
    "horusec-elixir",
    "horusec-generic",
    "horusec-go",
    "horusec-hcl",
    "horusec-js",
    "horusec-leaks",
    "horusec-php",
    "horusec-python",
    "horusec-ruby",
    "horusec-shell",
];

/// Canned pages keyed by (repository, page number), plus a request log
#[derive(Clone, Default)]
struct StubState {
    pages: Arc<Mutex<HashMap<(String, usize), String>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

async fn list_tags(
    State(state): State<StubState>,
    Path((namespace, repository)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Response {
    state.requests.lock().unwrap().push(uri.to_string());

    if namespace != "horuszup" {
        return StatusCode::NOT_FOUND.into_response();
    }
    let page = query.page.unwrap_or(1);
    match state.pages.lock().unwrap().get(&(repository, page)) {
        Some(body) => ([(header::CONTENT_TYPE, "application/json")], body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Docker Hub tags API served by axum from canned JSON pages
pub struct StubRegistry {
    base_url: String,
    state: StubState,
    _shutdown_tx: oneshot::Sender<()>,
}

impl StubRegistry {
    /// Bind to an ephemeral port and serve on the current runtime
    pub async fn start() -> Self {
        let state = StubState::default();
        let app = Router::new()
            .route(
                "/v2/namespaces/:namespace/repositories/:repository/tags",
                get(list_tags),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        tokio::spawn(server.into_future());

        Self {
            base_url: format!("http://{addr}"),
            state,
            _shutdown_tx: shutdown_tx,
        }
    }

    /// Base URL to pass as `--registry-url`
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of one tag page, as Docker Hub puts it in `next`
    pub fn page_url(&self, repository: &str, page: usize) -> String {
        format!(
            "{}/v2/namespaces/horuszup/repositories/{repository}/tags?page={page}&page_size=100",
            self.base_url
        )
    }

    /// Serve a raw body as the given page of a repository
    pub fn with_raw_page(self, repository: &str, page: usize, body: impl Into<String>) -> Self {
        self.state
            .pages
            .lock()
            .unwrap()
            .insert((repository.to_string(), page), body.into());
        self
    }

    /// Serve the given tags split over one page per slice
    pub fn with_pages(mut self, repository: &str, pages: &[&[&str]]) -> Self {
        for (index, tags) in pages.iter().enumerate() {
            let page = index + 1;
            let next = if page < pages.len() {
                json!(self.page_url(repository, page + 1))
            } else {
                json!(null)
            };
            let results: Vec<_> = tags.iter().map(|tag| json!({ "name": tag })).collect();
            let body = json!({ "count": results.len(), "next": next, "results": results });
            self = self.with_raw_page(repository, page, body.to_string());
        }
        self
    }

    /// Serve the given tags on a single page
    pub fn with_tags(self, repository: &str, tags: &[&str]) -> Self {
        self.with_pages(repository, &[tags])
    }

    /// Serve the same tags for every tracked repository
    pub fn with_all(mut self, tags: &[&str]) -> Self {
        for repository in REPOSITORIES {
            self = self.with_tags(repository, tags);
        }
        self
    }

    /// Request URIs received so far
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// Accepts connections and never answers, so every request times out
pub async fn start_silent_registry() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{addr}")
}
