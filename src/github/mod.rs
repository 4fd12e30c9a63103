//! Live download analytics for the app's GitHub repository.
//!
//! [`client`] reads the repository and its releases, [`analytics`] turns
//! them into the totals, trend and per-platform breakdown the dashboard
//! charts.
pub mod analytics;
pub mod client;
pub mod types;

pub use analytics::{aggregate, Analytics, AssetKind, AssetShare, ReleaseStats, TrendPoint};
pub use client::{AnalyticsError, FetchError, GitHubClient, GitHubService, ReleaseSource};
