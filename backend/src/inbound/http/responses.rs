//! Response builders shared by the HTML handlers.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, http::StatusCode};

use crate::domain::Error;

use super::session::SessionContext;

/// Pages depend on the session, so shared caches must not keep them.
pub const PRIVATE_NO_CACHE_MUST_REVALIDATE: &str = "private, no-cache, must-revalidate";

/// `302 Found` pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Store `message` as the next flash and redirect to `location`.
pub fn redirect_with_flash(
    session: &SessionContext,
    message: &str,
    location: &str,
) -> Result<HttpResponse, Error> {
    session.set_flash(message)?;
    Ok(redirect(location))
}

/// HTML page with the given status.
pub fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .insert_header((header::CACHE_CONTROL, PRIVATE_NO_CACHE_MUST_REVALIDATE))
        .body(body)
}

/// Plain text document body, sent as stored.
pub fn plain_text(body: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .insert_header((header::CACHE_CONTROL, PRIVATE_NO_CACHE_MUST_REVALIDATE))
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn redirect_sets_location() {
        let res = redirect("/new");
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers().get(header::LOCATION).expect("location"), "/new");
    }

    #[rstest]
    #[case(html(StatusCode::OK, String::new()), "text/html; charset=utf-8")]
    #[case(plain_text(Vec::new()), "text/plain; charset=utf-8")]
    fn content_types(#[case] res: HttpResponse, #[case] expected: &str) {
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).expect("content type"),
            expected
        );
        assert_eq!(
            res.headers().get(header::CACHE_CONTROL).expect("cache control"),
            PRIVATE_NO_CACHE_MUST_REVALIDATE
        );
    }
}
