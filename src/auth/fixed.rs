//! Identity provider backed by a fixed session table.
//!
//! Used for local development and tests, where no hosted provider is around.
use std::collections::HashMap;

use async_trait::async_trait;

use super::{IdentityProvider, User};
use crate::config::StaticSession;

/// Session token to user lookup
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    /// Known sessions
    sessions: HashMap<String, User>,
}

impl StaticProvider {
    /// Create a provider from session entries. Later entries win on duplicate tokens.
    pub fn new<I: IntoIterator<Item = StaticSession>>(sessions: I) -> Self {
        Self {
            sessions: sessions
                .into_iter()
                .map(|session| (session.token, session.user))
                .collect(),
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticProvider {
    async fn user_for_session(&self, token: &str) -> anyhow::Result<Option<User>> {
        Ok(self.sessions.get(token).cloned())
    }

    async fn sign_out(&self, token: &str) -> anyhow::Result<()> {
        // Tokens are configuration; there is nothing to revoke.
        tracing::debug!(known = self.sessions.contains_key(token), "Static sign-out");
        Ok(())
    }
}
