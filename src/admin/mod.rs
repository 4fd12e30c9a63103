//! Admin authorization.
//!
//! Admin status is never stored. It is recomputed from the configured
//! allow-lists every time it is asked for.
use serde_derive::Serialize;

use crate::auth::User;
use crate::config;

/// Metadata role that grants admin access
pub const ADMIN_ROLE: &str = "admin";

/// Whether `user` has admin access.
///
/// True iff the user's primary email is in the email allow-list, the user id
/// is in the id allow-list, or the public metadata role is `"admin"`. An
/// absent user is never an admin.
#[must_use]
pub fn is_user_admin(user: Option<&User>, config: &config::Admin) -> bool {
    let Some(user) = user else {
        return false;
    };
    if user
        .primary_email()
        .is_some_and(|email| config.emails.contains(email))
    {
        return true;
    }
    if config.user_ids.contains(&user.id) {
        return true;
    }
    user.role() == Some(ADMIN_ROLE)
}

/// Whether `path` is one of the admin routes, or below one.
#[must_use]
pub fn is_admin_route(path: &str, config: &config::Admin) -> bool {
    config.routes.iter().any(|route| {
        path == route
            || path
                .strip_prefix(route.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// What the dashboard and the API show about the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Provider user id
    pub id: String,
    /// Primary email, empty when there is none
    pub email: String,
    /// Display name
    pub name: String,
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Avatar
    pub image_url: Option<String>,
    /// Avatar fallback
    pub initials: String,
    /// Admin status at the time the profile was built
    pub is_admin: bool,
}

impl Profile {
    /// Build the profile of `user`.
    #[must_use]
    pub fn new(user: &User, config: &config::Admin) -> Self {
        Self {
            id: user.id.clone(),
            email: user.primary_email().unwrap_or_default().to_owned(),
            name: user.display_name(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            image_url: user.image_url.clone(),
            initials: user.initials(),
            is_admin: is_user_admin(Some(user), config),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::auth::EmailAddress;
    use serde_json::Value;
    use std::collections::HashSet;

    fn admin_config() -> config::Admin {
        config::Admin {
            emails: HashSet::from(["admin@uwumi.app".to_owned()]),
            user_ids: HashSet::from(["user_root".to_owned()]),
            ..config::Admin::default()
        }
    }

    fn user_with_email(id: &str, email: &str) -> User {
        User {
            id: id.to_owned(),
            email_addresses: vec![EmailAddress {
                id: "e1".to_owned(),
                email_address: email.to_owned(),
            }],
            primary_email_address_id: Some("e1".to_owned()),
            ..User::default()
        }
    }

    #[test]
    fn test_is_user_admin_when_primary_email_listed_expect_true() {
        let cut = user_with_email("user_1", "admin@uwumi.app");
        assert!(is_user_admin(Some(&cut), &admin_config()));
    }

    #[test]
    fn test_is_user_admin_when_listed_email_not_primary_expect_false() {
        let mut cut = user_with_email("user_1", "someone@example.com");
        cut.email_addresses.push(EmailAddress {
            id: "e2".to_owned(),
            email_address: "admin@uwumi.app".to_owned(),
        });
        assert!(!is_user_admin(Some(&cut), &admin_config()));
    }

    #[test]
    fn test_is_user_admin_when_id_listed_expect_true() {
        let cut = user_with_email("user_root", "someone@example.com");
        assert!(is_user_admin(Some(&cut), &admin_config()));
    }

    #[test]
    fn test_is_user_admin_when_role_admin_expect_true() {
        let mut cut = user_with_email("user_1", "someone@example.com");
        cut.public_metadata
            .insert("role".to_owned(), Value::String("admin".to_owned()));
        assert!(is_user_admin(Some(&cut), &admin_config()));
    }

    #[test]
    fn test_is_user_admin_when_nothing_matches_expect_false() {
        let mut cut = user_with_email("user_1", "someone@example.com");
        cut.public_metadata
            .insert("role".to_owned(), Value::String("editor".to_owned()));
        assert!(!is_user_admin(Some(&cut), &admin_config()));
        assert!(!is_user_admin(Some(&User::default()), &admin_config()));
    }

    #[test]
    fn test_is_user_admin_when_absent_expect_false() {
        assert!(!is_user_admin(None, &admin_config()));
    }

    #[test]
    fn test_is_admin_route() {
        let conf = config::Admin::default();
        assert!(is_admin_route("/admin", &conf));
        assert!(is_admin_route("/admin/users", &conf));
        assert!(is_admin_route("/admin/api/stats", &conf));
        assert!(!is_admin_route("/administrator", &conf));
        assert!(!is_admin_route("/", &conf));
    }

    #[test]
    fn test_profile_new() {
        let mut user = user_with_email("user_1", "admin@uwumi.app");
        user.first_name = Some("Durgesh".to_owned());
        let cut = Profile::new(&user, &admin_config());
        assert_eq!(cut.email, "admin@uwumi.app");
        assert_eq!(cut.name, "Durgesh");
        assert_eq!(cut.initials, "D");
        assert!(cut.is_admin);
    }
}
