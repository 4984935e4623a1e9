//! Tests for the sign-in and sign-out handlers.

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use rstest::rstest;

use super::INVALID_CREDENTIALS;
use crate::inbound::http::test_utils::{send, sign_in, test_app, test_state};

#[actix_web::test]
async fn signin_form_is_rendered() {
    let app = test::init_service(test_app(test_state(&[]))).await;

    let outcome = send(&app, TestRequest::get().uri("/users/signin"), None).await;

    assert_eq!(outcome.status, StatusCode::OK);
    assert!(outcome.body.contains("<form action="));
    assert!(outcome.body.contains("<button type="));
}

#[actix_web::test]
async fn signin_welcomes_user() {
    let app = test::init_service(test_app(test_state(&[]))).await;

    let signed_in = send(
        &app,
        TestRequest::post()
            .uri("/users/signin")
            .set_form([("username", "admin"), ("password", "secret")]),
        None,
    )
    .await;
    assert_eq!(signed_in.status, StatusCode::FOUND);
    assert_eq!(signed_in.location.as_deref(), Some("/"));

    let cookie = signed_in.cookie.expect("session cookie set");
    let index = send(&app, TestRequest::get().uri("/"), Some(&cookie)).await;
    assert!(index.body.contains("Welcome!"));
    assert!(index.body.contains("Signed in as admin"));
}

#[rstest]
#[case("admin", "wrong")]
#[case("guest", "secret")]
#[case("admin", "")]
#[case("", "secret")]
#[actix_web::test]
async fn bad_credentials_rerender_form(#[case] username: &str, #[case] password: &str) {
    let app = test::init_service(test_app(test_state(&[]))).await;

    let outcome = send(
        &app,
        TestRequest::post()
            .uri("/users/signin")
            .set_form([("username", username), ("password", password)]),
        None,
    )
    .await;

    assert_eq!(outcome.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(outcome.body.contains(INVALID_CREDENTIALS));
    assert!(outcome.body.contains(&format!(r#"value="{username}""#)));
    assert!(!outcome.body.contains("Signed in as"));
}

#[actix_web::test]
async fn signout_ends_session() {
    let app = test::init_service(test_app(test_state(&[]))).await;
    let cookie = sign_in(&app).await;

    let signed_out = send(&app, TestRequest::post().uri("/users/signout"), Some(&cookie)).await;
    assert_eq!(signed_out.status, StatusCode::FOUND);
    assert_eq!(signed_out.location.as_deref(), Some("/"));

    let cookie = signed_out.cookie.expect("session cookie updated");
    let index = send(&app, TestRequest::get().uri("/"), Some(&cookie)).await;
    assert!(index.body.contains("You have been signed out."));
    assert!(!index.body.contains("Signed in as"));
    assert!(index.body.contains(r#"href="/users/signin""#));
}
