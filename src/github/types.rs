//! Shapes of the GitHub REST API responses the site reads.
use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

/// Repository metadata, `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
    /// Numeric id
    pub id: u64,
    /// Short name
    pub name: String,
    /// `owner/repo`
    pub full_name: String,
    /// Description from the repository settings
    #[serde(default)]
    pub description: Option<String>,
    /// Web page
    #[serde(default)]
    pub html_url: Option<String>,
    /// Stars
    #[serde(default)]
    pub stargazers_count: u64,
    /// Forks
    #[serde(default)]
    pub forks_count: u64,
    /// Watchers
    #[serde(default)]
    pub watchers_count: u64,
    /// Open issues and pull requests
    #[serde(default)]
    pub open_issues_count: u64,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last metadata change
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Last push
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    /// Main language
    #[serde(default)]
    pub language: Option<String>,
    /// Size in kilobytes
    #[serde(default)]
    pub size: u64,
}

/// A published release, one entry of `GET /repos/{owner}/{repo}/releases`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Release {
    /// Numeric id
    pub id: u64,
    /// Git tag, e.g. `v1.0.0`
    pub tag_name: String,
    /// Display title
    #[serde(default)]
    pub name: Option<String>,
    /// Release notes, markdown
    #[serde(default)]
    pub body: Option<String>,
    /// Web page
    #[serde(default)]
    pub html_url: Option<String>,
    /// Unset for drafts
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Attached files
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Release {
    /// Downloads of this release, summed over its assets.
    #[must_use]
    pub fn download_count(&self) -> u64 {
        self.assets.iter().map(|asset| asset.download_count).sum()
    }
}

/// A file attached to a release, with its own download counter
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Asset {
    /// Numeric id
    pub id: u64,
    /// File name
    pub name: String,
    /// Times downloaded
    #[serde(default)]
    pub download_count: u64,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// MIME type
    #[serde(default)]
    pub content_type: Option<String>,
    /// Direct download link
    #[serde(default)]
    pub browser_download_url: Option<String>,
}
