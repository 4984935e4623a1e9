//! Document pages and form handlers.
//!
//! ```text
//! GET  /                       index
//! GET  /new                    new-document form
//! POST /new                    new_doc=<name>
//! GET  /{filename}             view
//! GET  /{filename}/edit        edit form
//! POST /{filename}             updated_text=<content>
//! POST /{filename}/delete
//! POST /{filename}/duplicate
//! ```
//!
//! Every mutation redirects to `/` with a flash message. Recoverable domain
//! failures (a bad name, a missing document) become a flash and a redirect;
//! anything else is returned as an error response.

use actix_web::{HttpResponse, get, http::StatusCode, post, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{DocumentBody, Error, RenderedDocument};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{html, plain_text, redirect_with_flash};
use crate::inbound::http::session::{SessionContext, SignedInUser};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::Page;

/// Form body of `POST /new`.
#[derive(Debug, Deserialize)]
pub struct NewDocumentForm {
    /// Requested document name.
    #[serde(default)]
    pub new_doc: String,
}

/// Form body of `POST /{filename}`.
#[derive(Debug, Deserialize)]
pub struct UpdateDocumentForm {
    /// Replacement content.
    #[serde(default)]
    pub updated_text: String,
}

/// Turn a recoverable failure into a flash plus redirect to `location`.
fn flash_on_recoverable(
    session: &SessionContext,
    error: Error,
    location: &str,
) -> ApiResult<HttpResponse> {
    if error.is_recoverable() {
        debug!(code = ?error.code(), message = %error.message(), "recoverable failure");
        redirect_with_flash(session, error.message(), location)
    } else {
        Err(error)
    }
}

/// Document list.
#[get("/")]
pub async fn index(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let documents = state.documents.list().await?;
    let page = Page::from_session(&session)?;
    let body = state.views.index(&page, &documents)?;
    Ok(html(StatusCode::OK, body))
}

/// New-document form.
#[get("/new")]
pub async fn new_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    _user: SignedInUser,
) -> ApiResult<HttpResponse> {
    let page = Page::from_session(&session)?;
    let body = state.views.new_document(&page)?;
    Ok(html(StatusCode::OK, body))
}

/// Create an empty document.
#[post("/new")]
pub async fn create(
    state: web::Data<HttpState>,
    session: SessionContext,
    _user: SignedInUser,
    form: web::Form<NewDocumentForm>,
) -> ApiResult<HttpResponse> {
    match state.documents_command.create(&form.new_doc).await {
        Ok(name) => redirect_with_flash(&session, &format!("{name} was created."), "/"),
        Err(error) => flash_on_recoverable(&session, error, "/new"),
    }
}

fn document_response(
    state: &HttpState,
    session: &SessionContext,
    document: RenderedDocument,
) -> ApiResult<HttpResponse> {
    match document.body {
        DocumentBody::Html(fragment) => {
            let page = Page::from_session(session)?;
            let body = state.views.document(&page, &document.name, &fragment)?;
            Ok(html(StatusCode::OK, body))
        }
        DocumentBody::Raw(bytes) => Ok(plain_text(bytes)),
    }
}

/// Show a document: markdown as an HTML page, everything else as plain text.
#[get("/{filename}")]
pub async fn view(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    match state.documents.view(&path).await {
        Ok(document) => document_response(&state, &session, document),
        Err(error) => flash_on_recoverable(&session, error, "/"),
    }
}

/// Edit form with the current content.
#[get("/{filename}/edit")]
pub async fn edit_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    _user: SignedInUser,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    match state.documents.load_for_edit(&path).await {
        Ok(document) => {
            let page = Page::from_session(&session)?;
            let body = state.views.edit(&page, &document)?;
            Ok(html(StatusCode::OK, body))
        }
        Err(error) => flash_on_recoverable(&session, error, "/"),
    }
}

/// Overwrite a document with the submitted text.
#[post("/{filename}")]
pub async fn update(
    state: web::Data<HttpState>,
    session: SessionContext,
    _user: SignedInUser,
    path: web::Path<String>,
    form: web::Form<UpdateDocumentForm>,
) -> ApiResult<HttpResponse> {
    match state
        .documents_command
        .update(&path, &form.updated_text)
        .await
    {
        Ok(name) => redirect_with_flash(&session, &format!("{name} has been updated!"), "/"),
        Err(error) => flash_on_recoverable(&session, error, "/"),
    }
}

/// Remove a document.
#[post("/{filename}/delete")]
pub async fn delete(
    state: web::Data<HttpState>,
    session: SessionContext,
    _user: SignedInUser,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    match state.documents_command.delete(&path).await {
        Ok(name) => redirect_with_flash(&session, &format!("{name} has been deleted."), "/"),
        Err(error) => flash_on_recoverable(&session, error, "/"),
    }
}

/// Copy a document under the next free `(n)` name.
#[post("/{filename}/duplicate")]
pub async fn duplicate(
    state: web::Data<HttpState>,
    session: SessionContext,
    _user: SignedInUser,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    match state.documents_command.duplicate(&path).await {
        Ok(name) => redirect_with_flash(&session, &format!("{name} was created."), "/"),
        Err(error) => flash_on_recoverable(&session, error, "/"),
    }
}

#[cfg(test)]
#[path = "documents_tests.rs"]
mod tests;
