//! Authentication route handlers.
//!
//! Login is a demo flow: a syntactically valid email is recorded in the
//! local store together with a logged-in flag, nothing else ever checks
//! it, and there is no password verification.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use minimart_core::Email;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::storage::keys;
use crate::views::NoticeView;

/// Inline validation message shown for a bad address.
const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// The record written by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRecord {
    pub email: Email,
    pub logged_in: bool,
}

/// Login form data. The password control is submitted but never read.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    /// Previously entered address, so a failed submit keeps it.
    pub email: String,
    pub cart_count: u32,
    pub notices: Vec<NoticeView>,
}

/// Display the login page.
#[instrument(skip(state))]
pub async fn login_page(State(state): State<AppState>) -> impl IntoResponse {
    LoginTemplate {
        error: None,
        email: String::new(),
        cart_count: state.cart_count(),
        notices: state.notice_views(),
    }
}

/// Handle login form submission.
///
/// An invalid address re-renders the page with the inline error; a valid
/// one writes the login record and returns home.
#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let Ok(email) = Email::parse(&form.email) else {
        return Ok(LoginTemplate {
            error: Some(INVALID_EMAIL_MESSAGE.to_owned()),
            email: form.email,
            cart_count: state.cart_count(),
            notices: state.notice_views(),
        }
        .into_response());
    };

    let record = LoginRecord {
        email,
        logged_in: true,
    };
    state.store().put(keys::LOGIN, &record)?;

    state.notify("Demo: Login successful! Redirecting to home page...");

    Ok(Redirect::to("/").into_response())
}

/// Handle logout: clear the login record and return to the login page.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<Redirect> {
    state.store().remove(keys::LOGIN)?;
    Ok(Redirect::to("/login"))
}
