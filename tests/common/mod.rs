#![allow(dead_code)]
use std::sync::Arc;

use actix_http::{body::MessageBody, Request};
use actix_service::Service;
use actix_web::{dev::ServiceResponse, test, Error};
use async_trait::async_trait;
use chrono::{TimeZone as _, Utc};
use reqwest::StatusCode;
use serde_json::json;

use uwumi::auth::{fixed::StaticProvider, EmailAddress, IdentityProvider, User};
use uwumi::config::{Config, StaticSession};
use uwumi::github::client::Resource;
use uwumi::github::types::{Asset, Release, Repository};
use uwumi::github::{FetchError, GitHubService, ReleaseSource};
use uwumi::server::{api::state::App as AppState, app::init_app};

/// Session of a user on the email allow-list
pub const ADMIN_TOKEN: &str = "admin-session";
/// Session of a signed-in user with no admin rights
pub const MEMBER_TOKEN: &str = "member-session";
/// Session of a user made admin through their metadata role
pub const ROLE_ADMIN_TOKEN: &str = "role-admin-session";

pub fn user(id: &str, email: &str, first_name: &str) -> User {
    User {
        id: id.to_owned(),
        email_addresses: vec![EmailAddress {
            id: format!("email_{id}"),
            email_address: email.to_owned(),
        }],
        primary_email_address_id: Some(format!("email_{id}")),
        first_name: Some(first_name.to_owned()),
        last_name: Some("Tester".to_owned()),
        ..User::default()
    }
}

pub fn sessions() -> Vec<StaticSession> {
    let mut role_admin = user("user_role", "role@example.com", "Rin");
    role_admin
        .public_metadata
        .insert("role".to_owned(), json!("admin"));
    vec![
        StaticSession {
            token: ADMIN_TOKEN.to_owned(),
            user: user("user_admin", "admin@uwumi.app", "Ada"),
        },
        StaticSession {
            token: MEMBER_TOKEN.to_owned(),
            user: user("user_member", "member@example.com", "Max"),
        },
        StaticSession {
            token: ROLE_ADMIN_TOKEN.to_owned(),
            user: role_admin,
        },
    ]
}

pub fn repository() -> Repository {
    Repository {
        id: 1,
        name: "uwumi".to_owned(),
        full_name: "uwumilabs/uwumi".to_owned(),
        description: Some("Anime, manga and movies in one app".to_owned()),
        stargazers_count: 1_500,
        forks_count: 120,
        watchers_count: 1_500,
        language: Some("TypeScript".to_owned()),
        size: 2_048,
        ..Repository::default()
    }
}

fn asset(name: &str, download_count: u64) -> Asset {
    Asset {
        name: name.to_owned(),
        download_count,
        size: 50 * 1024 * 1024,
        ..Asset::default()
    }
}

/// Two releases, newest first: 65 downloads in total
pub fn releases() -> Vec<Release> {
    vec![
        Release {
            id: 2,
            tag_name: "v1.1.0".to_owned(),
            published_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).single(),
            assets: vec![asset("uwumi-v1.1.0.apk", 5)],
            ..Release::default()
        },
        Release {
            id: 1,
            tag_name: "v1.0.0".to_owned(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single(),
            assets: vec![
                asset("uwumi-v1.0.0.apk", 10),
                asset("uwumi-v1.0.0.ipa", 20),
                asset("uwumi-android-arm64.apk", 30),
            ],
            ..Release::default()
        },
    ]
}

/// Release source answering from the fixtures, or failing the releases read
pub struct FixtureSource {
    pub fail: bool,
}

#[async_trait]
impl ReleaseSource for FixtureSource {
    async fn fetch_repository(&self) -> Result<Repository, FetchError> {
        Ok(repository())
    }

    async fn fetch_releases(&self) -> Result<Vec<Release>, FetchError> {
        if self.fail {
            return Err(FetchError::Status {
                resource: Resource::Releases,
                status: StatusCode::FORBIDDEN,
            });
        }
        Ok(releases())
    }
}

/// Identity provider that is always down
pub struct BrokenProvider;

#[async_trait]
impl IdentityProvider for BrokenProvider {
    async fn user_for_session(&self, _token: &str) -> anyhow::Result<Option<User>> {
        anyhow::bail!("provider unavailable")
    }

    async fn sign_out(&self, _token: &str) -> anyhow::Result<()> {
        anyhow::bail!("provider unavailable")
    }
}

/// How to build the app under test
pub struct Setup {
    pub config: Config,
    pub github_fails: bool,
    pub identity: Arc<dyn IdentityProvider>,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            config: Config::default(),
            github_fails: false,
            identity: Arc::new(StaticProvider::new(sessions())),
        }
    }
}

impl Setup {
    pub fn require_admin(mut self) -> Self {
        self.config.gate.require_admin = true;
        self
    }

    pub fn github_fails(mut self) -> Self {
        self.github_fails = true;
        self
    }

    pub async fn initialize_app(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
        let state = AppState {
            config: Arc::new(self.config),
            identity: self.identity,
            github: GitHubService::new(Arc::new(FixtureSource {
                fail: self.github_fails,
            })),
        };
        test::init_service(init_app(&state)).await
    }
}

pub async fn initialize_app(
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    Setup::default().initialize_app().await
}
