//! The route gate.
//!
//! Runs in front of every handler. It resolves the session cookie into a
//! [`User`] (stored in the request extensions for handlers to read) and
//! redirects requests for protected paths that lack a signed-in user, or an
//! admin when admin checks are switched on.
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header::LOCATION,
    middleware::Next,
    web, Error, HttpMessage as _, HttpResponse,
};
use tracing_actix_web::RootSpan;
use url::form_urlencoded;

use super::{
    api::state::Global,
    headers::{HTTP_X_UWUMI_GATE, REDIRECT_URL_PARAM},
};
use crate::{
    admin::{is_admin_route, is_user_admin},
    auth::{IdentityProvider, User},
    config::{self, Config},
    utils::paths::normalize_path,
};

/// Static files never need a user, so their requests skip session lookups
const ASSET_PREFIXES: [&str; 2] = ["/images/", "/screenshots/"];

/// What the gate does with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Pass through to the handler
    Allow,
    /// Protected path without a signed-in user
    SignIn,
    /// Admin route, signed-in user is not an admin
    Home,
}

/// True when `path` falls under one of the protected prefixes.
#[must_use]
pub fn is_protected(path: &str, gate: &config::Gate) -> bool {
    gate.protected.iter().any(|prefix| {
        let prefix = prefix.trim_end_matches('/');
        prefix.is_empty()
            || path == prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Decide what happens to a request for `path` made by `user`.
/// `path` is expected to be normalized.
#[must_use]
pub fn decide(path: &str, user: Option<&User>, config: &Config) -> Decision {
    if !is_protected(path, &config.gate) {
        return Decision::Allow;
    }
    let Some(user) = user else {
        return Decision::SignIn;
    };
    if config.gate.require_admin
        && is_admin_route(path, &config.admin)
        && !is_user_admin(Some(user), &config.admin)
    {
        return Decision::Home;
    }
    Decision::Allow
}

/// Where to send an anonymous visitor: the sign-in page, carrying the path
/// to come back to.
#[must_use]
pub fn sign_in_location(sign_in_path: &str, return_to: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(REDIRECT_URL_PARAM, return_to)
        .finish();
    format!("{sign_in_path}?{query}")
}

/// Resolve a session token. Provider failures are logged and treated as
/// "not signed in".
pub async fn session_user(identity: &dyn IdentityProvider, token: Option<&str>) -> Option<User> {
    let token = token.filter(|token| !token.is_empty())?;
    match identity.user_for_session(token).await {
        Ok(user) => user,
        Err(error) => {
            tracing::warn!("Could not resolve session: {error:#}");
            None
        }
    }
}

/// Gate middleware, registered with [`actix_web::middleware::from_fn`].
///
/// # Errors
/// Only errors the wrapped service returns.
pub async fn protect<T: Global + 'static, B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let Some(state) = req.app_data::<web::Data<T>>().cloned() else {
        tracing::error!("Gate is missing application state");
        return next.call(req).await.map(ServiceResponse::map_into_left_body);
    };
    // Decoded the same way the router decodes it, so `/%61dmin` is `/admin`
    let path = normalize_path(req.match_info().path());
    let user = if ASSET_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        None
    } else {
        let token = req
            .cookie(&state.config().auth.session_cookie)
            .map(|cookie| cookie.value().to_owned());
        session_user(state.identity(), token.as_deref()).await
    };

    match decide(&path, user.as_ref(), state.config()) {
        Decision::Allow => {
            if let Some(found) = user {
                if let Some(root_span) = req.extensions().get::<RootSpan>() {
                    root_span.record("user_id", found.id.as_str());
                }
                req.extensions_mut().insert(found);
            }
            next.call(req).await.map(ServiceResponse::map_into_left_body)
        }
        Decision::SignIn => {
            let return_to = req
                .uri()
                .path_and_query()
                .map_or(path.as_str(), |path_and_query| path_and_query.as_str());
            let location = sign_in_location(&state.config().gate.sign_in_path, return_to);
            tracing::debug!("Anonymous request for '{path}', redirecting to sign in");
            Ok(redirect(req, &location, "sign-in"))
        }
        Decision::Home => {
            tracing::info!("Non-admin request for '{path}', redirecting home");
            Ok(redirect(req, "/", "admin-only"))
        }
    }
}

/// Short-circuit the request with a `302 Found`.
fn redirect<B>(req: ServiceRequest, location: &str, rule: &str) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::Found()
        .insert_header((LOCATION, location))
        .insert_header((HTTP_X_UWUMI_GATE, rule))
        .finish();
    req.into_response(response).map_into_right_body()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::auth::user::EmailAddress;
    use serde_json::json;

    fn user(email: &str) -> User {
        User {
            id: "user_1".to_owned(),
            email_addresses: vec![EmailAddress {
                id: "email_1".to_owned(),
                email_address: email.to_owned(),
            }],
            primary_email_address_id: Some("email_1".to_owned()),
            ..User::default()
        }
    }

    fn config(require_admin: bool) -> Config {
        let mut conf = Config::default();
        conf.gate.require_admin = require_admin;
        conf
    }

    #[test]
    fn test_is_protected_when_prefix_matches_expect_true() {
        let gate = config::Gate::default();
        assert!(is_protected("/admin", &gate));
        assert!(is_protected("/admin/", &gate));
        assert!(is_protected("/admin/api/github", &gate));
    }

    #[test]
    fn test_is_protected_when_only_shared_prefix_expect_false() {
        let gate = config::Gate::default();
        assert!(!is_protected("/", &gate));
        assert!(!is_protected("/administrator", &gate));
        assert!(!is_protected("/sign-in", &gate));
    }

    #[test]
    fn test_is_protected_when_root_prefix_expect_everything() {
        let gate = config::Gate {
            protected: vec!["/".to_owned()],
            ..config::Gate::default()
        };
        assert!(is_protected("/", &gate));
        assert!(is_protected("/anything", &gate));
    }

    #[test]
    fn test_decide_when_anonymous_on_admin_expect_sign_in() {
        assert_eq!(decide("/admin", None, &config(false)), Decision::SignIn);
    }

    #[test]
    fn test_decide_when_public_page_expect_allow() {
        for path in ["/", "/sign-in", "/sign-up", "/images/icon.png"] {
            assert_eq!(decide(path, None, &config(true)), Decision::Allow);
        }
    }

    #[test]
    fn test_decide_when_non_admin_and_check_off_expect_allow() {
        let cut = user("someone@example.com");
        assert_eq!(decide("/admin", Some(&cut), &config(false)), Decision::Allow);
    }

    #[test]
    fn test_decide_when_non_admin_and_check_on_expect_home() {
        let cut = user("someone@example.com");
        assert_eq!(decide("/admin", Some(&cut), &config(true)), Decision::Home);
        assert_eq!(
            decide("/admin/settings/x", Some(&cut), &config(true)),
            Decision::Home
        );
    }

    #[test]
    fn test_decide_when_admin_and_check_on_expect_allow() {
        let by_email = user("admin@uwumi.app");
        assert_eq!(decide("/admin", Some(&by_email), &config(true)), Decision::Allow);

        let mut by_role = user("someone@example.com");
        by_role
            .public_metadata
            .insert("role".to_owned(), json!("admin"));
        assert_eq!(decide("/admin", Some(&by_role), &config(true)), Decision::Allow);
    }

    #[test]
    fn test_sign_in_location_expect_encoded_return_path() {
        assert_eq!(
            sign_in_location("/sign-in", "/admin?tab=github"),
            "/sign-in?redirect_url=%2Fadmin%3Ftab%3Dgithub"
        );
    }
}
