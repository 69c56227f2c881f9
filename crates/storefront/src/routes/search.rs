//! Search box redirect.

use axum::{extract::Query, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

/// Search submission query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Send a search box submission to the product listing.
///
/// The query is trimmed first; an empty box performs no search and lands
/// on the plain listing.
#[instrument]
pub async fn submit(Query(query): Query<SearchQuery>) -> Redirect {
    let q = query.q.trim();

    if q.is_empty() {
        Redirect::to("/products")
    } else {
        Redirect::to(&format!("/products?search={}", urlencoding::encode(q)))
    }
}
