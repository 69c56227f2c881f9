//! Integration tests for Minimart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p minimart-integration-tests
//! ```
//!
//! The tests drive the storefront router in-process through tower, with a
//! temporary data directory per harness. No server process or network
//! port is involved.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use tempfile::TempDir;

use minimart_storefront::config::StorefrontConfig;
use minimart_storefront::routes;
use minimart_storefront::state::AppState;
use minimart_storefront::storage::LocalStore;

/// A storefront wired to a temporary data directory.
///
/// The directory lives as long as the harness or any router built from
/// it, so building a second router over the same harness exercises
/// rehydration from disk.
pub struct TestApp {
    data_dir: Arc<TempDir>,
}

impl TestApp {
    #[must_use]
    pub fn new() -> Self {
        Self {
            data_dir: Arc::new(TempDir::new().expect("Failed to create temp data dir")),
        }
    }

    /// Build a router over this harness's data directory.
    ///
    /// Application state is rebuilt from disk, so a fresh router sees
    /// whatever an earlier one persisted. Clone the router to send it
    /// several requests against the same in-memory state. The router
    /// shares ownership of the data directory, so `TestApp::new().router()`
    /// keeps the directory alive for the router's lifetime.
    #[must_use]
    pub fn router(&self) -> Router {
        let config = StorefrontConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            data_dir: self.data_dir.path().to_path_buf(),
        };
        let store =
            LocalStore::open(config.data_dir.clone()).expect("Failed to open local store");
        routes::app(AppState::new(config, store))
            .layer(axum::Extension(Arc::clone(&self.data_dir)))
    }

    /// Path of the JSON document behind a storage key.
    #[must_use]
    pub fn document_path(&self, key: &str) -> std::path::PathBuf {
        self.data_dir.path().join(format!("{key}.json"))
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a GET request.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Build a POST request with a form-encoded body.
#[must_use]
pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .expect("Failed to build request")
}

/// Read a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not UTF-8")
}
