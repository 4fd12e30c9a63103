//! Centralized state management for the Actix web server
use std::{fmt, sync::Arc};

use crate::{
    auth::{self, IdentityProvider},
    config::Config,
    github::{GitHubClient, GitHubService},
};

/// Global, read-only state
pub trait Global {
    /// Site configuration
    fn config(&self) -> &Config;
    /// Resolves session cookies into users
    fn identity(&self) -> &dyn IdentityProvider;
    /// GitHub analytics
    fn github(&self) -> &GitHubService;
}

/// Application state, built once at start-up and cloned into each worker
#[derive(Clone)]
pub struct App {
    /// Site configuration
    pub config: Arc<Config>,
    /// Identity provider
    pub identity: Arc<dyn IdentityProvider>,
    /// GitHub analytics
    pub github: GitHubService,
}

impl App {
    /// Build the state described by `config`: the configured identity
    /// provider and a GitHub client for the configured repository.
    ///
    /// # Errors
    /// Errors if either HTTP client cannot be built.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let identity = auth::from_config(&config.auth)?;
        let client = GitHubClient::new(&config.github)?;
        Ok(Self {
            config: Arc::new(config),
            identity,
            github: GitHubService::new(Arc::new(client)),
        })
    }
}

impl Global for App {
    fn config(&self) -> &Config {
        &self.config
    }

    fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    fn github(&self) -> &GitHubService {
        &self.github
    }
}

impl fmt::Debug for App {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("App")
            .field("config", &self.config)
            .field("github", &self.github)
            .finish_non_exhaustive()
    }
}
