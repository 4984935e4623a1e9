//! HTML views rendered with Tera.
//!
//! Templates are compiled into the binary from `backend/templates`. Names
//! ending in `.html` are auto-escaped; only rendered markdown is marked safe.

use serde::Serialize;
use tera::{Context, Tera};
use tracing::error;

use crate::domain::{DocumentName, EditableDocument, Error};

use super::session::SessionContext;

const TEMPLATES: [(&str, &str); 6] = [
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("index.html", include_str!("../../../templates/index.html")),
    ("document.html", include_str!("../../../templates/document.html")),
    ("new.html", include_str!("../../../templates/new.html")),
    ("edit.html", include_str!("../../../templates/edit.html")),
    ("signin.html", include_str!("../../../templates/signin.html")),
];

/// Values shown on every page: the pending flash message and the signed-in
/// user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    /// One-shot message consumed from the session.
    pub flash: Option<String>,
    /// Signed-in username, if any.
    pub username: Option<String>,
}

impl Page {
    /// Build the page frame from the session, consuming its flash message.
    ///
    /// # Errors
    /// Propagates session read failures.
    pub fn from_session(session: &SessionContext) -> Result<Self, Error> {
        Ok(Self {
            flash: session.take_flash()?,
            username: session.user()?.map(|user| user.as_str().to_owned()),
        })
    }

    /// Replace the flash message with one produced by this request.
    #[must_use]
    pub fn with_flash(mut self, message: impl Into<String>) -> Self {
        self.flash = Some(message.into());
        self
    }

    fn context(&self) -> Context {
        let mut context = Context::new();
        context.insert("flash", &self.flash);
        context.insert("username", &self.username);
        context
    }
}

/// Compiled template set.
#[derive(Debug)]
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compile the embedded templates.
    ///
    /// # Errors
    /// Returns the Tera error when a template fails to parse.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    fn render(&self, template: &str, context: &Context) -> Result<String, Error> {
        self.tera.render(template, context).map_err(|err| {
            error!(%template, error = ?err, "template rendering failed");
            Error::internal(format!("failed to render {template}"))
        })
    }

    /// Document list.
    ///
    /// # Errors
    /// Returns an internal error when rendering fails.
    pub fn index(&self, page: &Page, documents: &[DocumentName]) -> Result<String, Error> {
        let mut context = page.context();
        let names: Vec<&str> = documents.iter().map(DocumentName::as_str).collect();
        context.insert("documents", &names);
        self.render("index.html", &context)
    }

    /// Rendered markdown document inside the layout.
    ///
    /// # Errors
    /// Returns an internal error when rendering fails.
    pub fn document(
        &self,
        page: &Page,
        name: &DocumentName,
        html: &str,
    ) -> Result<String, Error> {
        let mut context = page.context();
        context.insert("name", name.as_str());
        context.insert("body", html);
        self.render("document.html", &context)
    }

    /// New-document form.
    ///
    /// # Errors
    /// Returns an internal error when rendering fails.
    pub fn new_document(&self, page: &Page) -> Result<String, Error> {
        self.render("new.html", &page.context())
    }

    /// Edit form pre-filled with the stored content.
    ///
    /// # Errors
    /// Returns an internal error when rendering fails.
    pub fn edit(&self, page: &Page, document: &EditableDocument) -> Result<String, Error> {
        let mut context = page.context();
        context.insert("name", document.name.as_str());
        context.insert("content", &document.content);
        self.render("edit.html", &context)
    }

    /// Sign-in form; `login_name` pre-fills the username field.
    ///
    /// # Errors
    /// Returns an internal error when rendering fails.
    pub fn sign_in(&self, page: &Page, login_name: &str) -> Result<String, Error> {
        let mut context = page.context();
        context.insert("login_name", login_name);
        self.render("signin.html", &context)
    }
}
