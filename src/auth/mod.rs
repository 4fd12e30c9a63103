//! Identity provider integration.
//!
//! The site never handles credentials. Sign-in and sign-up happen on the
//! provider's pages; what comes back is an opaque session token, stored in a
//! cookie and resolved into a [`User`] on each request.
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{self, Provider};

pub mod fixed;
pub mod remote;
pub mod user;

pub use user::{EmailAddress, User};

/// Resolves session tokens into users.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The user a session token belongs to, `None` when the session is unknown or expired.
    ///
    /// # Errors
    /// Errors if the provider cannot be reached or answers unexpectedly.
    async fn user_for_session(&self, token: &str) -> anyhow::Result<Option<User>>;

    /// End the session at the provider.
    ///
    /// # Errors
    /// Errors if the provider rejects or fails the request.
    async fn sign_out(&self, token: &str) -> anyhow::Result<()>;
}

/// Build the identity provider named in the config.
///
/// # Errors
/// Errors if the remote provider's HTTP client cannot be built.
pub fn from_config(auth: &config::Auth) -> anyhow::Result<Arc<dyn IdentityProvider>> {
    let provider: Arc<dyn IdentityProvider> = match &auth.provider {
        Provider::Remote {
            user_url,
            sign_out_url,
        } => {
            tracing::info!("Resolving sessions against {user_url}");
            Arc::new(remote::RemoteProvider::new(
                user_url.clone(),
                sign_out_url.clone(),
            )?)
        }
        Provider::Static { sessions } => {
            tracing::info!("Resolving sessions from {} static entries", sessions.len());
            Arc::new(fixed::StaticProvider::new(sessions.iter().cloned()))
        }
    };
    Ok(provider)
}
