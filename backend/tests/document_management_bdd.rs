//! Behaviour tests for the document pages.
//!
//! Each scenario drives the page routes over a real document directory and a
//! bcrypt credential file, carrying the session cookie between requests the
//! way a browser would.
//
// rstest-bdd generates guard variables with double underscores, which trips
// the non_snake_case lint under -D warnings.
#![allow(non_snake_case)]

use std::cell::RefCell;
use std::path::Path;
use std::sync::Arc;

use actix_rt::SystemRunner;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::http::{StatusCode, header};
use actix_web::test as actix_test;
use actix_web::{App, web};
use cms::Trace;
use cms::domain::DocumentService;
use cms::inbound::http;
use cms::inbound::http::state::HttpState;
use cms::inbound::http::views::Views;
use cms::outbound::credentials::YamlCredentialStore;
use cms::outbound::fs::FsDocumentRepository;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

const EDITOR: &str = "admin";
const EDITOR_PASSWORD: &str = "secret";

#[derive(Debug, Clone)]
struct Outcome {
    status: StatusCode,
    location: Option<String>,
    body: String,
}

struct CmsWorld {
    runner: SystemRunner,
    root: TempDir,
    state: HttpState,
    key: Key,
    cookie: RefCell<Option<Cookie<'static>>>,
    last: RefCell<Option<Outcome>>,
}

impl CmsWorld {
    fn new() -> Self {
        let root = tempfile::tempdir().expect("temporary document root");
        let repository = FsDocumentRepository::open(root.path()).expect("open document root");
        let hash = bcrypt::hash(EDITOR_PASSWORD, 4).expect("hash fixture password");
        let credentials =
            YamlCredentialStore::from_yaml("users.yml", &format!("{EDITOR}: \"{hash}\"\n"))
                .expect("parse credentials");
        let service = Arc::new(DocumentService::new(Arc::new(repository)));
        let state = HttpState::new(
            service.clone(),
            service,
            Arc::new(credentials),
            Arc::new(Views::new().expect("templates compile")),
        );
        Self {
            runner: actix_rt::System::new(),
            root,
            state,
            key: Key::generate(),
            cookie: RefCell::new(None),
            last: RefCell::new(None),
        }
    }

    fn document_path(&self, name: &str) -> std::path::PathBuf {
        self.root.path().join(name)
    }

    fn seed(&self, name: &str, content: &str) {
        std::fs::write(self.document_path(name), content).expect("seed document");
    }

    fn send(&self, request: actix_test::TestRequest) -> Outcome {
        let state = self.state.clone();
        let key = self.key.clone();
        let cookie = self.cookie.borrow().clone();
        let (outcome, issued) = self.runner.block_on(async move {
            let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
                .cookie_name("session".to_owned())
                .cookie_secure(false)
                .build();
            let app = actix_test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .wrap(session)
                    .wrap(Trace)
                    .configure(http::configure),
            )
            .await;
            let request = match cookie {
                Some(cookie) => request.cookie(cookie),
                None => request,
            };
            let response = actix_test::call_service(&app, request.to_request()).await;
            let status = response.status();
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let issued = response
                .response()
                .cookies()
                .find(|cookie| cookie.name() == "session")
                .map(Cookie::into_owned);
            let body = actix_test::read_body(response).await;
            let body = String::from_utf8(body.to_vec()).expect("utf-8 body");
            (
                Outcome {
                    status,
                    location,
                    body,
                },
                issued,
            )
        });
        if let Some(cookie) = issued {
            *self.cookie.borrow_mut() = Some(cookie);
        }
        *self.last.borrow_mut() = Some(outcome.clone());
        outcome
    }

    fn last(&self) -> Outcome {
        self.last.borrow().clone().expect("a request was sent")
    }

    fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Outcome {
        self.send(actix_test::TestRequest::post().uri(path).set_form(fields))
    }
}

fn assert_on_disk(root: &Path, name: &str, expected: &str) {
    let content = std::fs::read_to_string(root.join(name)).expect("document on disk");
    assert_eq!(content, expected);
}

#[fixture]
fn world() -> CmsWorld {
    CmsWorld::new()
}

#[given("a document root containing {name}")]
fn a_document_root_containing(world: &CmsWorld, name: String) {
    world.seed(&name, &format!("Contents of {name}"));
}

#[given("a markdown document {name} titled {title}")]
fn a_markdown_document_titled(world: &CmsWorld, name: String, title: String) {
    world.seed(&name, &format!("# {title}\n\nSome text.\n"));
}

#[given("the editor is signed in")]
fn the_editor_is_signed_in(world: &CmsWorld) {
    let outcome = world.post_form(
        "/users/signin",
        &[("username", EDITOR), ("password", EDITOR_PASSWORD)],
    );
    assert_eq!(outcome.status, StatusCode::FOUND);
}

#[when("the visitor opens {path}")]
fn the_visitor_opens(world: &CmsWorld, path: String) {
    world.send(actix_test::TestRequest::get().uri(&path));
}

#[when("someone signs in as {username} with password {password}")]
fn someone_signs_in(world: &CmsWorld, username: String, password: String) {
    world.post_form(
        "/users/signin",
        &[("username", username.as_str()), ("password", password.as_str())],
    );
}

#[when("the editor creates {name}")]
fn the_editor_creates(world: &CmsWorld, name: String) {
    world.post_form("/new", &[("new_doc", name.as_str())]);
}

#[when("the editor saves {name} with {text}")]
fn the_editor_saves(world: &CmsWorld, name: String, text: String) {
    world.post_form(&format!("/{name}"), &[("updated_text", text.as_str())]);
}

#[when("the editor duplicates {name}")]
fn the_editor_duplicates(world: &CmsWorld, name: String) {
    world.post_form(&format!("/{name}/duplicate"), &[]);
}

#[when("the editor deletes {name}")]
fn the_editor_deletes(world: &CmsWorld, name: String) {
    world.post_form(&format!("/{name}/delete"), &[]);
}

#[then("the response redirects to {location}")]
fn the_response_redirects_to(world: &CmsWorld, location: String) {
    let outcome = world.last();
    assert_eq!(outcome.status, StatusCode::FOUND);
    assert_eq!(outcome.location.as_deref(), Some(location.as_str()));
}

#[then("the following page shows {message}")]
fn the_following_page_shows(world: &CmsWorld, message: String) {
    let location = world.last().location.expect("redirect location");
    let page = world.send(actix_test::TestRequest::get().uri(&location));
    assert_eq!(page.status, StatusCode::OK);
    assert!(
        page.body.contains(&message),
        "expected {message:?} in {}",
        page.body
    );
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &CmsWorld, status: u16) {
    assert_eq!(world.last().status.as_u16(), status);
}

#[then("the page shows {text}")]
fn the_page_shows(world: &CmsWorld, text: String) {
    let outcome = world.last();
    assert!(
        outcome.body.contains(&text),
        "expected {text:?} in {}",
        outcome.body
    );
}

#[then("the document root holds {name} reading {content}")]
fn the_document_root_holds(world: &CmsWorld, name: String, content: String) {
    assert_on_disk(world.root.path(), &name, &content);
}

#[then("the document root no longer holds {name}")]
fn the_document_root_no_longer_holds(world: &CmsWorld, name: String) {
    assert!(!world.document_path(&name).exists());
}

#[scenario(
    path = "tests/features/document_management.feature",
    name = "Visitors must sign in before changing documents"
)]
fn visitors_must_sign_in(world: CmsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/document_management.feature",
    name = "Markdown documents are rendered as HTML"
)]
fn markdown_documents_are_rendered(world: CmsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/document_management.feature",
    name = "Wrong passwords are rejected"
)]
fn wrong_passwords_are_rejected(world: CmsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/document_management.feature",
    name = "An editor creates, edits, duplicates and deletes a document"
)]
fn editor_document_lifecycle(world: CmsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/document_management.feature",
    name = "Invalid names are sent back to the new document form"
)]
fn invalid_names_return_to_the_form(world: CmsWorld) {
    drop(world);
}
