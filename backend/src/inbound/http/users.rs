//! Sign-in and sign-out handlers.
//!
//! ```text
//! GET  /users/signin
//! POST /users/signin   username=admin&password=secret
//! POST /users/signout
//! ```

use actix_web::{HttpResponse, get, http::StatusCode, post, web};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::LoginCredentials;
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{html, redirect_with_flash};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::Page;

/// Flash shown after a rejected sign-in.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Form body of `POST /users/signin`.
#[derive(Deserialize)]
pub struct SignInForm {
    /// Submitted username, echoed back into the form on failure.
    #[serde(default)]
    pub username: String,
    /// Submitted password.
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for SignInForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInForm")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Sign-in form.
#[get("/users/signin")]
pub async fn signin_form(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let page = Page::from_session(&session)?;
    let body = state.views.sign_in(&page, "")?;
    Ok(html(StatusCode::OK, body))
}

/// Check the submitted credentials and start a session.
///
/// Failure re-renders the form with `422 Unprocessable Entity`, keeping the
/// submitted username.
#[post("/users/signin")]
pub async fn signin(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<SignInForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let verified = match LoginCredentials::try_from_parts(&form.username, &form.password) {
        Ok(credentials) if state.credentials.verify(&credentials).await => Some(credentials),
        Ok(_) | Err(_) => None,
    };

    let Some(credentials) = verified else {
        warn!(username = %form.username, "sign-in rejected");
        let page = Page::from_session(&session)?.with_flash(INVALID_CREDENTIALS);
        let body = state.views.sign_in(&page, &form.username)?;
        return Ok(html(StatusCode::UNPROCESSABLE_ENTITY, body));
    };

    session.renew();
    session.persist_user(credentials.username())?;
    info!(username = %credentials.username(), "signed in");
    redirect_with_flash(&session, "Welcome!", "/")
}

/// End the signed-in session.
#[post("/users/signout")]
pub async fn signout(session: SessionContext) -> ApiResult<HttpResponse> {
    session.sign_out();
    redirect_with_flash(&session, "You have been signed out.", "/")
}

#[cfg(test)]
mod tests;
