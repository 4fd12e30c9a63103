//! Fetching repository and release data from the GitHub REST API.
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use derive_more::Display;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::analytics::{aggregate, Analytics};
use super::types::{Release, Repository};
use crate::config;

/// Media type the API is asked to answer with
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Which of the two reads failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Resource {
    /// `GET /repos/{owner}/{repo}`
    #[display(fmt = "repository")]
    Repository,
    /// `GET /repos/{owner}/{repo}/releases`
    #[display(fmt = "releases")]
    Releases,
}

/// A failed read from the API
#[derive(Debug, Display)]
pub enum FetchError {
    /// The API answered with a non-success status
    #[display(fmt = "Failed to fetch {}: {}", resource, status)]
    Status {
        /// The read that failed
        resource: Resource,
        /// Status the API answered with
        status: StatusCode,
    },
    /// The request could not be sent or the body could not be decoded
    #[display(fmt = "Failed to fetch {}: {}", resource, source)]
    Request {
        /// The read that failed
        resource: Resource,
        /// Transport or decode error
        source: reqwest::Error,
    },
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

/// The single error surfaced when analytics cannot be assembled
#[derive(Debug, Display)]
#[display(fmt = "Error fetching GitHub analytics")]
pub struct AnalyticsError(pub FetchError);

impl Error for AnalyticsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

/// Where repository and release data comes from
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Repository metadata
    ///
    /// # Errors
    /// Errors if the read fails.
    async fn fetch_repository(&self) -> Result<Repository, FetchError>;

    /// Published releases, newest first
    ///
    /// # Errors
    /// Errors if the read fails.
    async fn fetch_releases(&self) -> Result<Vec<Release>, FetchError>;
}

/// HTTPS client for one repository
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// Shared HTTP client carrying the default headers
    client: reqwest::Client,
    /// `{api_url}/repos/{owner}/{repo}`
    repo_url: String,
}

impl GitHubClient {
    /// Create a client for the repository named in the config.
    ///
    /// # Errors
    /// Errors if the token is not a valid header value or the client cannot be built.
    pub fn new(conf: &config::GitHub) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        if let Some(token) = conf.token.as_ref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }
        let client = reqwest::Client::builder()
            .user_agent(conf.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(conf.timeout_secs))
            .build()?;
        let repo_url = format!(
            "{}/repos/{}/{}",
            conf.api_url.trim_end_matches('/'),
            conf.owner,
            conf.repo
        );
        Ok(Self { client, repo_url })
    }

    /// GET `url` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: Resource,
    ) -> Result<T, FetchError> {
        tracing::debug!("Fetching {resource} from {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request { resource, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { resource, status });
        }
        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Request { resource, source })
    }
}

#[async_trait]
impl ReleaseSource for GitHubClient {
    async fn fetch_repository(&self) -> Result<Repository, FetchError> {
        self.get_json(&self.repo_url, Resource::Repository).await
    }

    async fn fetch_releases(&self) -> Result<Vec<Release>, FetchError> {
        let url = format!("{}/releases", self.repo_url);
        self.get_json(&url, Resource::Releases).await
    }
}

/// Assembles [`Analytics`] from a [`ReleaseSource`]
#[derive(Clone)]
pub struct GitHubService {
    /// Data source
    source: Arc<dyn ReleaseSource>,
}

impl fmt::Debug for GitHubService {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "GitHub analytics service")
    }
}

impl GitHubService {
    /// Create a service reading from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn ReleaseSource>) -> Self {
        Self { source }
    }

    /// Fetch the repository and its releases concurrently and aggregate them.
    ///
    /// # Errors
    /// Fails as a whole if either read fails. There are no partial results
    /// and no retries.
    #[tracing::instrument(name = "Fetching GitHub analytics", skip(self))]
    pub async fn analytics(&self) -> Result<Analytics, AnalyticsError> {
        let fetched = futures::try_join!(
            self.source.fetch_repository(),
            self.source.fetch_releases()
        );
        match fetched {
            Ok((repository, releases)) => {
                tracing::debug!("Aggregating {} releases", releases.len());
                Ok(aggregate(repository, releases))
            }
            Err(error) => {
                tracing::error!("Failed to fetch GitHub analytics: {error}");
                Err(AnalyticsError(error))
            }
        }
    }
}
