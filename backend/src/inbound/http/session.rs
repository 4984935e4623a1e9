//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: the signed-in username and one-shot flash
//! messages.

use actix_session::Session;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, Username};

use super::responses::redirect;

pub(crate) const USER_KEY: &str = "username";
pub(crate) const FLASH_KEY: &str = "message";

/// Flash shown when a protected route is requested without signing in.
pub const SIGN_IN_REQUIRED: &str = "You must be signed in to perform that action.";

fn read_error(error: impl std::fmt::Display) -> Error {
    Error::internal(format!("failed to read session: {error}"))
}

fn write_error(error: impl std::fmt::Display) -> Error {
    Error::internal(format!("failed to persist session: {error}"))
}

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the signed-in username in the session cookie.
    pub fn persist_user(&self, username: &Username) -> Result<(), Error> {
        self.0
            .insert(USER_KEY, username.as_str())
            .map_err(write_error)
    }

    /// Fetch the signed-in username, if present.
    pub fn user(&self) -> Result<Option<Username>, Error> {
        let raw = self.0.get::<String>(USER_KEY).map_err(read_error)?;
        match raw {
            Some(raw) => match Username::new(raw) {
                Ok(username) => Ok(Some(username)),
                Err(error) => {
                    tracing::warn!("invalid username in session cookie: {error}");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Forget the signed-in user; any other session state is kept.
    pub fn sign_out(&self) {
        self.0.remove(USER_KEY);
    }

    /// Rotate the session key while keeping its state.
    pub fn renew(&self) {
        self.0.renew();
    }

    /// Store a message for the next rendered page.
    pub fn set_flash(&self, message: &str) -> Result<(), Error> {
        self.0.insert(FLASH_KEY, message).map_err(write_error)
    }

    /// Remove and return the pending flash message.
    pub fn take_flash(&self) -> Result<Option<String>, Error> {
        match self.0.remove_as::<String>(FLASH_KEY) {
            None => Ok(None),
            Some(Ok(message)) => Ok(Some(message)),
            Some(Err(raw)) => Err(read_error(format_args!("flash is not a string: {raw}"))),
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

/// Extractor guarding routes that need a signed-in user.
///
/// When nobody is signed in the request is answered with a redirect to `/`
/// and the [`SIGN_IN_REQUIRED`] flash, without running the handler.
#[derive(Debug, Clone)]
pub struct SignedInUser(pub Username);

impl FromRequest for SignedInUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = SessionContext::from_request(req, payload);
        Box::pin(async move {
            let session = fut.await?;
            if let Some(username) = session.user()? {
                return Ok(SignedInUser(username));
            }
            session.set_flash(SIGN_IN_REQUIRED)?;
            Err(InternalError::from_response(SIGN_IN_REQUIRED, redirect("/")).into())
        })
    }
}
