//! Local web interface
//!
//! ## Endpoints
//!
//! - `GET /` — the search page
//! - `POST /search` — `{query, type?}` → `{success, type}` or `{success, error}`
//!
//! Every request loads its own cache store and searcher; nothing mutable is
//! shared between requests.

use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use crate::browser::BrowserLauncher;
use crate::cache::CacheStore;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::error::{Error, Result};
use crate::search::{Category, Searcher};

const INDEX_HTML: &str = include_str!("index.html");

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Body of `POST /search`
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    /// Category name, `"auto"`, or absent
    #[serde(default, rename = "type")]
    pub category: Option<String>,
}

/// Response of `POST /search`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    fn ok(category: Category) -> Self {
        Self {
            success: true,
            category: Some(category),
            error: None,
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            category: None,
            error: Some(error.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Shared, read-only handler configuration
#[derive(Clone)]
pub struct AppState {
    /// Cache file, `None` when caching is disabled
    pub cache_path: Option<PathBuf>,
    pub browser: Arc<dyn BrowserLauncher>,
    pub open_delay: Duration,
}

impl AppState {
    fn searcher(&self) -> Searcher {
        let sink: Arc<dyn DiagnosticSink> = Arc::new(LogSink);
        let store = match self.cache_path {
            Some(ref path) => CacheStore::load(path, sink.clone()),
            None => CacheStore::disabled(sink.clone()),
        };
        Searcher::new(store, self.browser.clone(), sink).with_open_delay(self.open_delay)
    }
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/search", post(handle_search))
        .with_state(state)
}

/// Bind the listener for `host:port` (port `0` picks a free port)
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    let bind_addr = format!("{}:{}", host, port);
    TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| Error::Server(format!("failed to bind {bind_addr}: {e}")))
}

/// Serve until the process exits
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr: SocketAddr = listener
        .local_addr()
        .map_err(|e| Error::Server(format!("failed to get local addr: {e}")))?;
    log::info!("Web interface listening on http://{addr}");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| Error::Server(e.to_string()))
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// `GET /`
async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `POST /search`
async fn handle_search(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> (StatusCode, Json<SearchResponse>) {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            log::debug!("Rejected search body: {rejection}");
            return bad_request(format!("Invalid request body: {}", rejection.body_text()));
        }
    };

    let query = request.query.unwrap_or_default();
    if query.trim().is_empty() {
        return bad_request(Error::missing_query().to_string());
    }

    let category_override = match parse_category(request.category.as_deref()) {
        Ok(category) => category,
        Err(message) => return bad_request(message),
    };

    match state.searcher().search(&query, category_override).await {
        Ok(outcome) => (StatusCode::OK, Json(SearchResponse::ok(outcome.category))),
        Err(Error::Validation(message)) => bad_request(message),
        Err(e) => {
            log::error!("Search error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchResponse::failed("Internal server error")),
            )
        }
    }
}

/// `None`, empty and `"auto"` all mean auto-detect
fn parse_category(raw: Option<&str>) -> std::result::Result<Option<Category>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("auto") => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<SearchResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(SearchResponse::failed(message)),
    )
}
