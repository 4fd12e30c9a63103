//! The admin dashboard and its JSON endpoints.
use actix_web::{http::header::LOCATION, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;
use serde_derive::Deserialize;

use super::{
    state::Global,
    utils::{current_user, html_response},
};
use crate::{
    admin::Profile,
    server::{errors::HttpError, gate::sign_in_location},
    site::{
        mock,
        pages::{self, Tab, TabContent},
    },
};

/// Dashboard query
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// `overview` (default) or `github`
    pub tab: Option<String>,
}

/// The dashboard page.
///
/// GitHub is only queried when its tab is open. A failed fetch renders an
/// error card with a retry link in place of the charts.
pub async fn dashboard<T: Global + 'static>(
    req: HttpRequest,
    state: web::Data<T>,
    query: web::Query<DashboardQuery>,
) -> impl Responder {
    let config = state.config();
    let Some(user) = current_user(&req) else {
        // Only reachable when the gate does not cover this path
        let location = sign_in_location(&config.gate.sign_in_path, req.path());
        return HttpResponse::Found()
            .insert_header((LOCATION, location))
            .finish();
    };
    let profile = Profile::new(&user, &config.admin);
    let path = req.path();

    match Tab::from_query(query.tab.as_deref()) {
        Tab::Overview => {
            let analytics = mock::admin_analytics();
            html_response(pages::dashboard(
                &profile,
                path,
                &TabContent::Overview(&analytics),
            ))
        }
        Tab::GitHub => {
            let fetched = state.github().analytics().await;
            let content = TabContent::GitHub(fetched.as_ref(), Utc::now());
            html_response(pages::dashboard(&profile, path, &content))
        }
    }
}

/// Internal stats as JSON.
///
/// # Errors
/// Errors with [`HttpError::Unauthorized`] if nobody is signed in.
pub async fn stats(req: HttpRequest) -> Result<HttpResponse, HttpError> {
    current_user(&req).ok_or(HttpError::Unauthorized)?;
    Ok(HttpResponse::Ok().json(mock::admin_analytics()))
}

/// GitHub analytics as JSON, `502` when GitHub cannot be read.
///
/// # Errors
/// Errors with [`HttpError::Unauthorized`] if nobody is signed in, or
/// [`HttpError::BadGateway`] if either GitHub request fails.
pub async fn github<T: Global + 'static>(
    req: HttpRequest,
    state: web::Data<T>,
) -> Result<HttpResponse, HttpError> {
    current_user(&req).ok_or(HttpError::Unauthorized)?;
    let analytics = state
        .github()
        .analytics()
        .await
        .map_err(|error| HttpError::BadGateway(error.to_string()))?;
    Ok(HttpResponse::Ok().json(analytics))
}

/// The signed-in user's profile as JSON.
///
/// # Errors
/// Errors with [`HttpError::Unauthorized`] if nobody is signed in.
pub async fn me<T: Global + 'static>(
    req: HttpRequest,
    state: web::Data<T>,
) -> Result<HttpResponse, HttpError> {
    let user = current_user(&req).ok_or(HttpError::Unauthorized)?;
    Ok(HttpResponse::Ok().json(Profile::new(&user, &state.config().admin)))
}
