//! Sign-in, sign-up and sign-out.
//!
//! Credentials never reach this server. The sign-in and sign-up pages send
//! visitors to the identity provider, which comes back to the callback with
//! a session token. The callback checks the token with the provider before
//! storing it in the session cookie.
use actix_web::{
    cookie::{Cookie, SameSite},
    http::header::LOCATION,
    web, HttpRequest, HttpResponse, Responder,
};
use serde_derive::Deserialize;
use url::{form_urlencoded, Url};

use super::{
    state::Global,
    utils::{html_response, local_redirect},
};
use crate::server::{
    gate::session_user,
    headers::REDIRECT_URL_PARAM,
};
use crate::site::pages::{self, AuthPage};

/// Where the provider sends visitors back to
pub const CALLBACK_PATH: &str = "/sign-in/callback";

/// Shown after a rejected callback
const INVALID_SESSION_MESSAGE: &str = "That sign-in did not go through. Please try again.";

/// Query of the sign-in and sign-up pages
#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    /// Local path to land on afterwards
    pub redirect_url: Option<String>,
    /// Set when a previous callback was rejected
    pub error: Option<String>,
}

/// Query of the provider callback
#[derive(Debug, Default, Deserialize)]
pub struct CallbackQuery {
    /// Session token issued by the provider
    pub session: Option<String>,
    /// Local path to land on afterwards
    pub redirect_url: Option<String>,
}

/// Sign-in page
pub async fn sign_in<T: Global + 'static>(
    req: HttpRequest,
    state: web::Data<T>,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    auth_page(AuthPage::SignIn, &req, state.get_ref(), &query)
}

/// Sign-up page
pub async fn sign_up<T: Global + 'static>(
    req: HttpRequest,
    state: web::Data<T>,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    auth_page(AuthPage::SignUp, &req, state.get_ref(), &query)
}

/// Render either auth page, pointing at the hosted provider page when one is configured.
fn auth_page<T: Global>(page: AuthPage, req: &HttpRequest, state: &T, query: &AuthQuery) -> HttpResponse {
    let auth = &state.config().auth;
    let redirect_url = local_redirect(query.redirect_url.as_deref());
    let hosted = match page {
        AuthPage::SignIn => auth.sign_in_url.as_deref(),
        AuthPage::SignUp => auth.sign_up_url.as_deref(),
    };
    let hosted_url = hosted.and_then(|base| hosted_page_url(base, &callback_url(req, redirect_url)));
    let error = query.error.is_some().then_some(INVALID_SESSION_MESSAGE);
    html_response(pages::auth_page(
        page,
        hosted_url.as_deref(),
        CALLBACK_PATH,
        redirect_url,
        error,
    ))
}

/// Absolute URL of the callback, as the provider needs it.
fn callback_url(req: &HttpRequest, redirect_url: &str) -> String {
    let info = req.connection_info();
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(REDIRECT_URL_PARAM, redirect_url)
        .finish();
    format!("{}://{}{CALLBACK_PATH}?{query}", info.scheme(), info.host())
}

/// The provider's hosted page with our callback attached.
fn hosted_page_url(base: &str, callback: &str) -> Option<String> {
    match Url::parse(base) {
        Ok(mut url) => {
            url.query_pairs_mut()
                .append_pair(REDIRECT_URL_PARAM, callback);
            Some(url.into())
        }
        Err(error) => {
            tracing::warn!("Ignoring invalid hosted auth page '{base}': {error}");
            None
        }
    }
}

/// Provider callback: check the session, store it and move on.
pub async fn callback<T: Global + 'static>(
    req: HttpRequest,
    state: web::Data<T>,
    query: web::Query<CallbackQuery>,
) -> impl Responder {
    let config = state.config();
    let redirect_url = local_redirect(query.redirect_url.as_deref());
    let token = query.session.as_deref();
    let Some(user) = session_user(state.identity(), token).await else {
        tracing::info!("Rejected sign-in callback");
        let retry = form_urlencoded::Serializer::new(String::new())
            .append_pair(REDIRECT_URL_PARAM, redirect_url)
            .append_pair("error", "session")
            .finish();
        return HttpResponse::Found()
            .insert_header((LOCATION, format!("{}?{retry}", config.gate.sign_in_path)))
            .finish();
    };
    tracing::info!(user_id = %user.id, "Signed in");

    let cookie = Cookie::build(
        config.auth.session_cookie.clone(),
        token.unwrap_or_default().to_owned(),
    )
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .secure(req.connection_info().scheme() == "https")
    .finish();
    HttpResponse::Found()
        .insert_header((LOCATION, redirect_url))
        .cookie(cookie)
        .finish()
}

/// End the session at the provider (best effort) and clear the cookie.
pub async fn sign_out<T: Global + 'static>(
    req: HttpRequest,
    state: web::Data<T>,
) -> impl Responder {
    let cookie_name = state.config().auth.session_cookie.clone();
    if let Some(session) = req.cookie(&cookie_name) {
        if let Err(error) = state.identity().sign_out(session.value()).await {
            tracing::warn!("Provider sign-out failed: {error:#}");
        }
    }
    let mut removal = Cookie::build(cookie_name, "").path("/").finish();
    removal.make_removal();
    HttpResponse::Found()
        .insert_header((LOCATION, "/"))
        .cookie(removal)
        .finish()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hosted_page_url_expect_callback_appended() {
        let cut = hosted_page_url(
            "https://accounts.uwumi.app/sign-in",
            "http://localhost:8080/sign-in/callback?redirect_url=%2Fadmin",
        )
        .unwrap();
        assert_eq!(
            cut,
            "https://accounts.uwumi.app/sign-in?redirect_url=http%3A%2F%2Flocalhost%3A8080%2Fsign-in%2Fcallback%3Fredirect_url%3D%252Fadmin"
        );
    }

    #[test]
    fn test_hosted_page_url_when_invalid_expect_none() {
        assert!(hosted_page_url("not a url", "http://localhost/cb").is_none());
    }
}
