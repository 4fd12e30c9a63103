//! Helpers shared by the page handlers.
use actix_web::{http::header::ContentType, HttpMessage as _, HttpRequest, HttpResponse};

use crate::{auth::User, config, site::pages::Links};

/// Where the dashboard sends signed-in users who did not ask for anything else
pub const DEFAULT_REDIRECT: &str = "/admin";

/// The user the gate resolved for this request, if any.
#[must_use]
pub fn current_user(req: &HttpRequest) -> Option<User> {
    req.extensions().get::<User>().cloned()
}

/// `200 OK` with an HTML body.
#[must_use]
pub fn html_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(body)
}

/// Only same-site paths are followed after sign-in. Anything else, including
/// protocol-relative `//host` URLs, falls back to the dashboard.
#[must_use]
pub fn local_redirect(target: Option<&str>) -> &str {
    match target {
        Some(path) if is_local_path(path) => path,
        Some(path) => {
            tracing::debug!("Ignoring non-local redirect target '{path}'");
            DEFAULT_REDIRECT
        }
        None => DEFAULT_REDIRECT,
    }
}

/// Same-site absolute path, not protocol-relative
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

/// Public GitHub links for the configured repository.
#[must_use]
pub fn repository_links(github: &config::GitHub) -> Links {
    let repository = format!("https://github.com/{}/{}", github.owner, github.repo);
    Links {
        latest_release: format!("{repository}/releases/latest"),
        repository,
    }
}
