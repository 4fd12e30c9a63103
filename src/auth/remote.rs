//! Identity provider reached over HTTPS.
//!
//! The provider exposes a user endpoint that answers with the [`User`] of
//! the bearer session token, and optionally an endpoint that revokes it.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{IdentityProvider, User};

/// Time allowed for a provider round trip
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

/// Remote identity provider
#[derive(Debug, Clone)]
pub struct RemoteProvider {
    /// Shared HTTP client
    client: reqwest::Client,
    /// Endpoint returning the current user
    user_url: String,
    /// Endpoint revoking the current session
    sign_out_url: Option<String>,
}

impl RemoteProvider {
    /// Create a remote provider.
    ///
    /// # Errors
    /// Errors if the HTTP client cannot be built.
    pub fn new(user_url: String, sign_out_url: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(PROVIDER_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            user_url,
            sign_out_url,
        })
    }
}

/// Statuses that mean "this token has no user" rather than "the provider failed"
fn is_rejection(status: StatusCode) -> bool {
    [
        StatusCode::UNAUTHORIZED,
        StatusCode::FORBIDDEN,
        StatusCode::NOT_FOUND,
    ]
    .contains(&status)
}

#[async_trait]
impl IdentityProvider for RemoteProvider {
    #[tracing::instrument(name = "Resolving session", skip(self, token))]
    async fn user_for_session(&self, token: &str) -> anyhow::Result<Option<User>> {
        let response = self
            .client
            .get(&self.user_url)
            .bearer_auth(token)
            .send()
            .await?;
        let status = response.status();
        if is_rejection(status) {
            tracing::debug!(%status, "Session rejected by provider");
            return Ok(None);
        }
        if !status.is_success() {
            anyhow::bail!("Identity provider answered {status}");
        }
        Ok(Some(response.json::<User>().await?))
    }

    async fn sign_out(&self, token: &str) -> anyhow::Result<()> {
        let Some(sign_out_url) = self.sign_out_url.as_ref() else {
            return Ok(());
        };
        let status = self
            .client
            .post(sign_out_url)
            .bearer_auth(token)
            .send()
            .await?
            .status();
        if status.is_success() || is_rejection(status) {
            Ok(())
        } else {
            anyhow::bail!("Identity provider sign-out answered {status}")
        }
    }
}
