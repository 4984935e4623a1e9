//! HTTP inbound adapter serving the HTML pages and form endpoints.

use actix_web::web;

pub mod documents;
pub mod error;
pub mod health;
pub mod responses;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod views;

pub use error::ApiResult;

/// Register the page routes.
///
/// Fixed paths go first so `/new` and `/users/...` are never captured by the
/// `/{filename}` patterns.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(documents::index)
        .service(documents::new_form)
        .service(documents::create)
        .service(users::signin_form)
        .service(users::signin)
        .service(users::signout)
        .service(documents::view)
        .service(documents::edit_form)
        .service(documents::update)
        .service(documents::delete)
        .service(documents::duplicate);
}
