//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};

use crate::domain::DocumentService;
use crate::domain::ports::{FixtureCredentialStore, InMemoryDocumentRepository};

use super::state::HttpState;
use super::views::Views;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// State over an in-memory repository seeded with `documents` and the
/// fixture credential store (`admin` / `secret`).
pub fn test_state(documents: &[(&str, &str)]) -> HttpState {
    let repository = InMemoryDocumentRepository::with_documents(documents.iter().copied())
        .expect("valid fixture documents");
    state_over(Arc::new(repository))
}

/// State over a caller-held repository, for tests that seed raw bytes.
pub fn state_over(repository: Arc<InMemoryDocumentRepository>) -> HttpState {
    let service = Arc::new(DocumentService::new(repository));
    HttpState::new(
        service.clone(),
        service,
        Arc::new(FixtureCredentialStore),
        Arc::new(Views::new().expect("templates compile")),
    )
}

/// Session cookie set on `res`, if any.
pub fn session_cookie(res: &ServiceResponse) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

/// App with every page route, the given state and the test session middleware.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .configure(super::configure)
}

/// Sign in as the fixture `admin` user and return the session cookie.
pub async fn sign_in<S>(app: &S) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = test::TestRequest::post()
        .uri("/users/signin")
        .set_form([("username", "admin"), ("password", "secret")])
        .to_request();
    let response = test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::FOUND, "fixture sign-in");
    session_cookie(&response).expect("session cookie set")
}

/// Status, `Location` header, body and refreshed session cookie of a response.
#[derive(Debug)]
pub struct Outcome {
    pub status: StatusCode,
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
    pub bytes: Vec<u8>,
    pub cookie: Option<Cookie<'static>>,
}

/// Send `request`, attaching `cookie` when given, and collect the outcome.
pub async fn send<S>(
    app: &S,
    request: test::TestRequest,
    cookie: Option<&Cookie<'static>>,
) -> Outcome
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = match cookie {
        Some(cookie) => request.cookie(cookie.clone()),
        None => request,
    };
    let response = test::call_service(app, request.to_request()).await;
    let header_value = |name: header::HeaderName| {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    let status = response.status();
    let location = header_value(header::LOCATION);
    let content_type = header_value(header::CONTENT_TYPE);
    let cookie = session_cookie(&response);
    let bytes = test::read_body(response).await.to_vec();
    Outcome {
        status,
        location,
        content_type,
        body: String::from_utf8_lossy(&bytes).into_owned(),
        bytes,
        cookie,
    }
}
