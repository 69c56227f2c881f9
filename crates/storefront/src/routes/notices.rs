//! Notification toast fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::state::AppState;
use crate::views::NoticeView;

/// Notification region template (for HTMX).
///
/// Also included by the full pages, so the region carries its own refresh
/// attributes and survives an `outerHTML` swap.
#[derive(Template, WebTemplate)]
#[template(path = "partials/notices.html")]
pub struct NoticesTemplate {
    pub notices: Vec<NoticeView>,
}

/// Get the live notification toasts (HTMX).
#[instrument(skip(state))]
pub async fn fragment(State(state): State<AppState>) -> impl IntoResponse {
    NoticesTemplate {
        notices: state.notice_views(),
    }
}
