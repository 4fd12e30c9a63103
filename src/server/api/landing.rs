//! Public pages.
use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use super::{
    state::Global,
    utils::{current_user, html_response, repository_links},
};
use crate::{
    admin::Profile,
    site::{content::NOT_FOUND_MESSAGE, pages},
};

/// The landing page, with the visitor's avatar when signed in.
pub async fn landing<T: Global + 'static>(
    req: HttpRequest,
    state: web::Data<T>,
) -> impl Responder {
    let config = state.config();
    let viewer = current_user(&req).map(|user| Profile::new(&user, &config.admin));
    html_response(pages::landing(
        viewer.as_ref(),
        &repository_links(&config.github),
    ))
}

/// Liveness probe
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Fallback for unknown paths
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound()
        .insert_header(ContentType::html())
        .body(pages::message_page("Page not found", NOT_FOUND_MESSAGE))
}
