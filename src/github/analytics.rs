//! Download analytics derived from a repository's releases.
//!
//! Everything here is a pure function of the fetched data, so it can be
//! exercised with fixtures and no network.
use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde_derive::Serialize;

use super::types::{Release, Repository};

/// Coarse platform bucket for a release asset, inferred from its file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// `android` or `.apk`
    AndroidApk,
    /// `ios` or `.ipa`
    IosIpa,
    /// `windows` or `.exe`
    Windows,
    /// `macos` or `.dmg`
    MacOs,
    /// `linux` or `.AppImage`
    Linux,
    /// No pattern matched; grouped under the asset's own name
    Other(String),
}

impl AssetKind {
    /// Bucket an asset by file name.
    ///
    /// Patterns are checked in order and match case-sensitively, so a name
    /// with `android` anywhere is an APK no matter what else it contains,
    /// while `Android` is not.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let has = |needles: &[&str]| needles.iter().any(|needle| name.contains(needle));
        if has(&["android", ".apk"]) {
            Self::AndroidApk
        } else if has(&["ios", ".ipa"]) {
            Self::IosIpa
        } else if has(&["windows", ".exe"]) {
            Self::Windows
        } else if has(&["macos", ".dmg"]) {
            Self::MacOs
        } else if has(&["linux", ".AppImage"]) {
            Self::Linux
        } else {
            Self::Other(name.to_owned())
        }
    }

    /// Label shown in charts
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::AndroidApk => "Android APK",
            Self::IosIpa => "iOS IPA",
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// A release together with its summed download count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseStats {
    /// The release as the API returned it
    #[serde(flatten)]
    pub release: Release,
    /// Sum over the release's assets
    pub download_count: u64,
}

impl From<Release> for ReleaseStats {
    fn from(release: Release) -> Self {
        let download_count = release.download_count();
        Self {
            release,
            download_count,
        }
    }
}

/// One point of the download trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Release tag
    pub version: String,
    /// Downloads of that release
    pub downloads: u64,
    /// Publish date of the release
    pub date: Option<DateTime<Utc>>,
}

/// Downloads of one asset bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetShare {
    /// Bucket label
    pub name: String,
    /// Summed over every release
    pub downloads: u64,
    /// Share of all downloads, 0 to 100
    pub percentage: f64,
}

/// Everything the dashboard shows about the GitHub repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    /// Repository metadata
    pub repository: Repository,
    /// Releases in the order the API returned them, newest first
    pub releases: Vec<ReleaseStats>,
    /// Summed over every release
    pub total_downloads: u64,
    /// First release in input order
    pub latest_release: Option<ReleaseStats>,
    /// Oldest release first
    pub download_trends: Vec<TrendPoint>,
    /// Most downloaded bucket first
    pub asset_breakdown: Vec<AssetShare>,
}

/// Aggregate a repository and its releases (newest first, as the API
/// returns them) into dashboard analytics.
#[must_use]
pub fn aggregate(repository: Repository, releases: Vec<Release>) -> Analytics {
    let asset_breakdown = asset_breakdown(&releases);
    let releases: Vec<ReleaseStats> = releases.into_iter().map(ReleaseStats::from).collect();
    let total_downloads = releases.iter().map(|stats| stats.download_count).sum();
    let download_trends = releases
        .iter()
        .rev()
        .map(|stats| TrendPoint {
            version: stats.release.tag_name.clone(),
            downloads: stats.download_count,
            date: stats.release.published_at,
        })
        .collect();
    Analytics {
        repository,
        latest_release: releases.first().cloned(),
        releases,
        total_downloads,
        download_trends,
        asset_breakdown,
    }
}

/// Sum downloads per asset bucket and express each as a share of the total.
///
/// Buckets are sorted by downloads, descending. Buckets with equal downloads
/// keep the order in which they were first seen.
#[must_use]
pub fn asset_breakdown(releases: &[Release]) -> Vec<AssetShare> {
    let mut order: Vec<AssetKind> = Vec::new();
    let mut totals: HashMap<AssetKind, u64> = HashMap::new();
    for asset in releases.iter().flat_map(|release| release.assets.iter()) {
        let kind = AssetKind::from_name(&asset.name);
        let total = totals.entry(kind.clone()).or_insert_with(|| {
            order.push(kind);
            0
        });
        *total += asset.download_count;
    }
    let total_downloads: u64 = totals.values().sum();
    let mut shares: Vec<AssetShare> = order
        .into_iter()
        .map(|kind| {
            let downloads = totals.get(&kind).copied().unwrap_or_default();
            AssetShare {
                name: kind.label().to_owned(),
                downloads,
                percentage: percentage(downloads, total_downloads),
            }
        })
        .collect();
    shares.sort_by(|left, right| right.downloads.cmp(&left.downloads));
    shares
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Download counts are far below 2^52, and the result is only displayed"
)]
/// `part` as a percentage of `whole`, 0 when `whole` is 0
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
