//! Full pages: landing, sign-in/sign-up, dashboard and errors.
use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use super::chart::{bar_list, bars_from_parts, line_chart, Bar, Point};
use super::content::{
    Orientation, ADMIN_NAVIGATION_ITEMS, APP_DESCRIPTION, APP_NAME, CHART_COLORS, DISCORD_URL,
    DOWNLOAD_STATS, FEATURES, GITHUB_PROFILE_URL, HERO_MEDIA, HERO_STATS, NAVIGATION_ITEMS,
    PLATFORMS, SCREENSHOTS,
};
use super::format::{format_bytes, format_date, format_number, format_thousands};
use super::html::{document, escape};
use super::mock::AdminAnalytics;
use crate::admin::Profile;
use crate::github::{Analytics, AnalyticsError};

/// Links the landing page points at
#[derive(Debug, Clone)]
pub struct Links {
    /// GitHub repository page
    pub repository: String,
    /// Latest release page, where the APK lives
    pub latest_release: String,
}

/// The public landing page. `viewer` is the signed-in visitor, if any.
#[must_use]
pub fn landing(viewer: Option<&Profile>, links: &Links) -> String {
    let mut body = navbar(viewer);
    body.push_str(&hero());
    body.push_str(&features());
    body.push_str(&screenshots());
    body.push_str(&download(links));
    body.push_str(&footer(links));
    document("", APP_DESCRIPTION, &body)
}

/// Top bar with anchors and the sign-in or admin controls
fn navbar(viewer: Option<&Profile>) -> String {
    let mut html = format!(
        r#"<header class="navbar"><a href="/" class="brand"><img src="/images/icon.png" alt="" width="36"> {APP_NAME}</a><nav>"#
    );
    for item in &NAVIGATION_ITEMS {
        let _ = write!(html, r#"<a href="{}">{}</a>"#, item.href, escape(item.name));
    }
    if viewer.is_some() {
        html.push_str(r#"<a href="/admin">Admin</a>"#);
    }
    html.push_str("</nav><div>");
    match viewer {
        Some(profile) => {
            let _ = write!(
                html,
                r#"{} <a class="btn" href="/sign-out">Sign out</a>"#,
                avatar(profile)
            );
        }
        None => html.push_str(r#"<a class="btn" href="/sign-in">Sign In</a>"#),
    }
    html.push_str("</div></header>");
    html
}

///
fn hero() -> String {
    let mut html = format!(
        r#"<section class="hero container"><h1>{APP_NAME}</h1><p class="muted">{}</p><div class="grid">"#,
        escape(APP_DESCRIPTION)
    );
    for media in HERO_MEDIA {
        let _ = write!(html, r#"<div class="card">{media}</div>"#);
    }
    html.push_str(r#"</div><div class="grid">"#);
    for stat in &HERO_STATS {
        let _ = write!(
            html,
            r#"<div><div class="stat-value">{}</div><div class="muted">{}</div></div>"#,
            stat.value, stat.label
        );
    }
    html.push_str(
        r##"</div><p><a class="btn" href="#download">Download Now</a></p></section>"##,
    );
    html
}

///
fn features() -> String {
    let mut html = String::from(
        r#"<section id="features" class="container"><h2>Powerful Features</h2><p class="muted">Everything you need for the ultimate entertainment experience, all in one app.</p><div class="grid">"#,
    );
    for feature in &FEATURES {
        let _ = write!(
            html,
            r#"<div class="card"><h3>{}</h3><p class="muted">{}</p></div>"#,
            escape(feature.title),
            escape(feature.description)
        );
    }
    let _ = write!(
        html,
        r#"</div><div class="card"><p>{APP_NAME} is completely free and open source. Join our community and contribute to making it even better!</p></div></section>"#
    );
    html
}

///
fn screenshots() -> String {
    let mut html = format!(
        r#"<section id="screenshots" class="container"><h2>See It In Action</h2><p class="muted">Take a look at {APP_NAME}'s beautiful interface and smooth user experience across all features.</p><div class="grid">"#
    );
    for shot in &SCREENSHOTS {
        let (width, height) = match shot.orientation {
            Orientation::Portrait => (200, 356),
            Orientation::Landscape => (320, 180),
        };
        let _ = write!(
            html,
            r#"<figure class="card"><span class="muted">{}</span><img src="{}" alt="{}" width="{width}" height="{height}" loading="lazy"><figcaption><h3>{}</h3><p class="muted">{}</p></figcaption></figure>"#,
            escape(shot.category),
            shot.image,
            escape(shot.title),
            escape(shot.title),
            escape(shot.description)
        );
    }
    html.push_str("</div></section>");
    html
}

///
fn download(links: &Links) -> String {
    let mut html = format!(
        r#"<section id="download" class="container"><h2>Download {APP_NAME}</h2><p class="muted">Get started with {APP_NAME} today. Available for multiple platforms with more coming soon.</p><div class="grid">"#
    );
    for stat in &DOWNLOAD_STATS {
        let _ = write!(
            html,
            r#"<div class="card"><div class="stat-value">{}</div><div class="muted">{}</div></div>"#,
            stat.value, stat.label
        );
    }
    html.push_str(r#"</div><div class="grid">"#);
    for platform in &PLATFORMS {
        let action = if platform.available {
            format!(
                r#"<a class="btn" href="{}">Download {}</a>"#,
                escape(&links.latest_release),
                escape(platform.name)
            )
        } else {
            r#"<span class="btn" aria-disabled="true">Coming Soon</span>"#.to_owned()
        };
        let _ = write!(
            html,
            r#"<div class="card"><h3>{}</h3><p class="muted">{}</p>{action}</div>"#,
            escape(platform.name),
            escape(platform.description)
        );
    }
    let _ = write!(
        html,
        r#"</div><div class="card"><h3>Open Source</h3><p class="muted">Built with love by the community</p><p>{APP_NAME} is completely open source. Check out the code, contribute to the project, or report issues on GitHub. Join our growing community of developers!</p><a class="btn" href="{}">View on GitHub</a></div></section>"#,
        escape(&links.repository)
    );
    html
}

///
fn footer(links: &Links) -> String {
    let repo = escape(&links.repository);
    format!(
        r##"<footer id="github" class="container"><div class="grid"><div><strong>{APP_NAME}</strong><p class="muted">{}</p><p><a href="{DISCORD_URL}">Discord</a> <a href="{GITHUB_PROFILE_URL}">GitHub</a></p></div><div><h3>Product</h3><a href="#features">Features</a><br><a href="#screenshots">Screenshots</a><br><a href="#download">Download</a><br><a href="{repo}/releases">Releases</a></div><div><h3>Community</h3><a href="{repo}">GitHub</a><br><a href="{repo}/issues">Issues</a><br><a href="{repo}/discussions">Discussions</a><br><a href="{repo}/graphs/contributors">Contributors</a></div></div><p class="muted">&copy; {APP_NAME}</p></footer>"##,
        escape(APP_DESCRIPTION)
    )
}

///
fn avatar(profile: &Profile) -> String {
    profile.image_url.as_ref().map_or_else(
        || format!(r#"<span class="avatar">{}</span>"#, escape(&profile.initials)),
        |url| {
            format!(
                r#"<img class="avatar" src="{}" alt="{}">"#,
                escape(url),
                escape(&profile.name)
            )
        },
    )
}

/// Which auth page to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPage {
    /// `/sign-in`
    SignIn,
    /// `/sign-up`
    SignUp,
}

impl AuthPage {
    ///
    const fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Sign up",
        }
    }
}

/// Sign-in or sign-up page.
///
/// With a `hosted_url` the page hands off to the identity provider. Without
/// one it offers a form that posts a session token to `callback_path`.
#[must_use]
pub fn auth_page(
    page: AuthPage,
    hosted_url: Option<&str>,
    callback_path: &str,
    redirect_url: &str,
    error: Option<&str>,
) -> String {
    let title = page.title();
    let mut body = format!(
        r#"<main class="container"><div class="card"><h1>{title} to {APP_NAME}</h1>"#
    );
    if let Some(message) = error {
        let _ = write!(body, r#"<p class="error">{}</p>"#, escape(message));
    }
    match hosted_url {
        Some(url) => {
            let _ = write!(
                body,
                r#"<p><a class="btn" href="{}">Continue to {}</a></p>"#,
                escape(url),
                title.to_lowercase()
            );
        }
        None => {
            let _ = write!(
                body,
                r#"<form method="get" action="{}"><label>Session token <input name="session" required autocomplete="off"></label><input type="hidden" name="redirect_url" value="{}"><button class="btn" type="submit">{title}</button></form>"#,
                escape(callback_path),
                escape(redirect_url)
            );
        }
    }
    let other = match page {
        AuthPage::SignIn => r#"<p class="muted">No account? <a href="/sign-up">Sign up</a></p>"#,
        AuthPage::SignUp => {
            r#"<p class="muted">Already have an account? <a href="/sign-in">Sign in</a></p>"#
        }
    };
    body.push_str(other);
    body.push_str("</div></main>");
    document(title, APP_DESCRIPTION, &body)
}

/// Dashboard tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Internal stats
    #[default]
    Overview,
    /// Repository and release downloads
    GitHub,
}

impl Tab {
    /// Parse the `tab` query value, defaulting to the overview.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("github") => Self::GitHub,
            _ => Self::Overview,
        }
    }

    ///
    const fn slug(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::GitHub => "github",
        }
    }
}

/// What the selected tab shows
#[derive(Debug)]
pub enum TabContent<'data> {
    /// Internal stats
    Overview(&'data AdminAnalytics),
    /// GitHub analytics, or the error that stopped them, with the time of the fetch
    GitHub(Result<&'data Analytics, &'data AnalyticsError>, DateTime<Utc>),
}

/// The admin dashboard.
#[must_use]
pub fn dashboard(profile: &Profile, current_path: &str, content: &TabContent) -> String {
    let mut body = String::from(r#"<div class="layout"><aside class="sidebar">"#);
    let _ = write!(
        body,
        r#"<h2>{APP_NAME}</h2><p class="muted">Admin Dashboard</p><nav>"#
    );
    for item in &ADMIN_NAVIGATION_ITEMS {
        let current = if item.href == current_path {
            r#" aria-current="page""#
        } else {
            ""
        };
        let _ = write!(body, r#"<a href="{}"{current}>{}</a>"#, item.href, item.name);
    }
    body.push_str(r#"<a href="/sign-out">Sign Out</a></nav></aside><div>"#);

    let _ = write!(
        body,
        r#"<header class="navbar"><div>{} <strong>{}</strong> <span class="muted">{}</span>{}</div></header><main class="container">"#,
        avatar(profile),
        escape(&profile.name),
        escape(&profile.email),
        if profile.is_admin { " &middot; Admin" } else { "" },
    );
    let greeting = profile
        .first_name
        .as_deref()
        .unwrap_or(profile.email.as_str());
    let _ = write!(
        body,
        r#"<h1>Dashboard</h1><p class="muted">Welcome back, {}! Here's what's happening with {APP_NAME}.</p>"#,
        escape(greeting)
    );

    let selected = match content {
        TabContent::Overview(_) => Tab::Overview,
        TabContent::GitHub(..) => Tab::GitHub,
    };
    body.push_str(r#"<nav class="tabs">"#);
    for (tab, label) in [(Tab::Overview, "Overview"), (Tab::GitHub, "GitHub Analytics")] {
        let _ = write!(
            body,
            r#"<a href="/admin?tab={}" aria-selected="{}">{label}</a>"#,
            tab.slug(),
            tab == selected
        );
    }
    body.push_str("</nav>");

    match content {
        TabContent::Overview(analytics) => body.push_str(&overview(analytics)),
        TabContent::GitHub(Ok(analytics), fetched_at) => {
            body.push_str(&github_analytics(analytics, fetched_at));
        }
        TabContent::GitHub(Err(error), _) => body.push_str(&github_error(error)),
    }
    body.push_str("</main></div></div>");
    document("Admin", APP_DESCRIPTION, &body)
}

/// A row of headline cards
fn stat_cards(cards: &[(&str, String)]) -> String {
    let mut html = String::from(r#"<div class="grid">"#);
    for (title, value) in cards {
        let _ = write!(
            html,
            r#"<div class="card"><div class="stat-value">{}</div><div class="muted">{}</div></div>"#,
            escape(value),
            escape(title)
        );
    }
    html.push_str("</div>");
    html
}

///
fn overview(analytics: &AdminAnalytics) -> String {
    let stats = &analytics.stats;
    let mut html = stat_cards(&[
        ("Total Users", format_thousands(stats.total_users)),
        ("Active Users", format_thousands(stats.active_users)),
        ("Total Content", format_thousands(stats.total_content)),
        ("Monthly Views", format_number(stats.monthly_views)),
    ]);

    let users: Vec<Point> = analytics
        .user_activity
        .iter()
        .map(|day| Point::new(day.date.clone(), day.users))
        .collect();
    let views: Vec<Point> = analytics
        .user_activity
        .iter()
        .map(|day| Point::new(day.date.clone(), day.views))
        .collect();
    let content = &analytics.content_stats;
    let distribution = bars_from_parts(&[
        Point::new("Anime", content.anime),
        Point::new("Manga", content.manga),
        Point::new("Movies", content.movies),
    ]);
    let _ = write!(
        html,
        r#"<div class="grid"><div class="card"><h3>User Activity</h3>{}{}</div><div class="card"><h3>Content Distribution</h3>{}</div></div>"#,
        line_chart("Active users", &users, CHART_COLORS[0]),
        line_chart("Views", &views, CHART_COLORS[1]),
        bar_list(&distribution, &CHART_COLORS[..3]),
    );

    html.push_str(r#"<div class="grid">"#);
    let popular = &analytics.popular_content;
    for (heading, items) in [
        ("Popular Anime", &popular.anime),
        ("Popular Manga", &popular.manga),
        ("Popular Movies", &popular.movies),
    ] {
        let _ = write!(html, r#"<div class="card"><h3>{heading}</h3><ol>"#);
        for item in items {
            let _ = write!(
                html,
                r#"<li>{} <span class="muted">&#9733; {:.1}</span></li>"#,
                escape(&item.title),
                item.rating
            );
        }
        html.push_str("</ol></div>");
    }
    html.push_str("</div>");
    html
}

///
fn github_analytics(analytics: &Analytics, fetched_at: &DateTime<Utc>) -> String {
    let repo = &analytics.repository;
    let repo_url = repo
        .html_url
        .clone()
        .unwrap_or_else(|| format!("https://github.com/{}", repo.full_name));
    let mut html = format!(
        r#"<div><h2>GitHub Analytics</h2><p class="muted">Real-time insights from your repository</p><p class="muted">Last updated: {} <a class="btn" href="/admin?tab=github">Refresh</a></p></div>"#,
        fetched_at.format("%H:%M:%S UTC")
    );

    let _ = write!(
        html,
        r#"<div class="card"><h3>{}</h3><p class="muted">{}</p><p class="muted">"#,
        escape(&repo.full_name),
        escape(repo.description.as_deref().unwrap_or_default())
    );
    if let Some(language) = repo.language.as_deref() {
        let _ = write!(html, "{} &middot; ", escape(language));
    }
    if let Some(created) = repo.created_at.as_ref() {
        let _ = write!(html, "Created {} &middot; ", format_date(created));
    }
    let _ = write!(
        html,
        r#"{}</p><a class="btn" href="{}">View on GitHub</a></div>"#,
        format_bytes(repo.size.saturating_mul(1024)),
        escape(&repo_url)
    );

    html.push_str(&stat_cards(&[
        ("Total Downloads", format_number(analytics.total_downloads)),
        ("GitHub Stars", format_number(repo.stargazers_count)),
        ("Forks", format_number(repo.forks_count)),
        ("Watchers", format_number(repo.watchers_count)),
    ]));

    let trend: Vec<Point> = analytics
        .download_trends
        .iter()
        .map(|point| Point::new(point.version.clone(), point.downloads))
        .collect();
    let breakdown: Vec<Bar> = analytics
        .asset_breakdown
        .iter()
        .map(|share| Bar {
            label: share.name.clone(),
            value: share.downloads,
            percentage: share.percentage,
        })
        .collect();
    let _ = write!(
        html,
        r#"<div class="grid"><div class="card"><h3>Download Trends by Version</h3>{}</div><div class="card"><h3>Downloads by Platform</h3>{}</div></div>"#,
        line_chart("Downloads per release", &trend, CHART_COLORS[0]),
        bar_list(&breakdown, &CHART_COLORS),
    );

    if let Some(latest) = analytics.latest_release.as_ref() {
        let release = &latest.release;
        let _ = write!(
            html,
            r#"<div class="card"><h3>Latest Release: {}</h3><p class="muted">{}{} &middot; {} downloads</p><ul>"#,
            escape(&release.tag_name),
            escape(release.name.as_deref().unwrap_or_default()),
            release
                .published_at
                .as_ref()
                .map(|date| format!(" &middot; {}", format_date(date)))
                .unwrap_or_default(),
            format_thousands(latest.download_count),
        );
        for asset in &release.assets {
            let _ = write!(
                html,
                r#"<li>{} <span class="muted">{} &middot; {} downloads</span></li>"#,
                escape(&asset.name),
                format_bytes(asset.size),
                format_thousands(asset.download_count)
            );
        }
        html.push_str("</ul></div>");
    }

    if !analytics.releases.is_empty() {
        html.push_str(r#"<div class="card"><h3>Release History</h3><table><thead><tr><th>Version</th><th>Published</th><th>Assets</th><th>Downloads</th></tr></thead><tbody>"#);
        for stats in &analytics.releases {
            let release = &stats.release;
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&release.tag_name),
                release
                    .published_at
                    .as_ref()
                    .map_or_else(|| "Draft".to_owned(), format_date),
                release.assets.len(),
                format_thousands(stats.download_count)
            );
        }
        html.push_str("</tbody></table></div>");
    }
    html
}

/// Error card with a retry link
fn github_error(error: &AnalyticsError) -> String {
    format!(
        r#"<div class="card"><h3>Failed to Load GitHub Data</h3><p class="error">{}</p><a class="btn" href="/admin?tab=github">Retry</a></div>"#,
        escape(&error.to_string())
    )
}

/// Page for statuses that end in an HTML response
#[must_use]
pub fn message_page(title: &str, message: &str) -> String {
    let body = format!(
        r#"<main class="container"><div class="card"><h1>{}</h1><p class="muted">{}</p><a class="btn" href="/">Back home</a></div></main>"#,
        escape(title),
        escape(message)
    );
    document(title, APP_DESCRIPTION, &body)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::github::client::{FetchError, Resource};
    use crate::github::types::{Asset, Release, Repository};
    use crate::github::aggregate;
    use crate::site::mock::admin_analytics;

    fn links() -> Links {
        Links {
            repository: "https://github.com/uwumilabs/uwumi".to_owned(),
            latest_release: "https://github.com/uwumilabs/uwumi/releases/latest".to_owned(),
        }
    }

    fn profile(is_admin: bool) -> Profile {
        Profile {
            id: "user_1".to_owned(),
            email: "ada@example.com".to_owned(),
            name: "Ada Lovelace".to_owned(),
            first_name: Some("Ada".to_owned()),
            last_name: Some("Lovelace".to_owned()),
            image_url: None,
            initials: "AL".to_owned(),
            is_admin,
        }
    }

    #[test]
    fn test_landing_when_anonymous_expect_sign_in_and_all_sections() {
        let cut = landing(None, &links());
        for anchor in [r#"id="features""#, r#"id="screenshots""#, r#"id="download""#, r#"id="github""#] {
            assert!(cut.contains(anchor), "missing {anchor}");
        }
        assert!(cut.contains(r#"href="/sign-in""#));
        assert!(!cut.contains(r#"href="/admin""#));
        assert!(cut.contains("Coming Soon"));
        assert!(cut.contains("releases/latest"));
    }

    #[test]
    fn test_landing_when_signed_in_expect_admin_link_and_initials() {
        let cut = landing(Some(&profile(false)), &links());
        assert!(cut.contains(r#"href="/admin""#));
        assert!(cut.contains(r#"href="/sign-out""#));
        assert!(cut.contains(">AL</span>"));
    }

    #[test]
    fn test_auth_page_when_hosted_expect_link_else_form() {
        let hosted = auth_page(
            AuthPage::SignIn,
            Some("https://accounts.example.com/sign-in?redirect_url=x"),
            "/sign-in/callback",
            "/admin",
            None,
        );
        assert!(hosted.contains("https://accounts.example.com/sign-in?redirect_url=x"));
        assert!(!hosted.contains("<form"));

        let local = auth_page(AuthPage::SignUp, None, "/sign-in/callback", "/admin", Some("Bad <token>"));
        assert!(local.contains(r#"action="/sign-in/callback""#));
        assert!(local.contains(r#"value="/admin""#));
        assert!(local.contains("Bad &lt;token&gt;"));
    }

    #[test]
    fn test_tab_from_query() {
        assert_eq!(Tab::from_query(Some("github")), Tab::GitHub);
        assert_eq!(Tab::from_query(Some("overview")), Tab::Overview);
        assert_eq!(Tab::from_query(Some("nope")), Tab::Overview);
        assert_eq!(Tab::from_query(None), Tab::Overview);
    }

    #[test]
    fn test_dashboard_overview() {
        let data = admin_analytics();
        let cut = dashboard(&profile(true), "/admin", &TabContent::Overview(&data));
        assert!(cut.contains("Welcome back, Ada!"));
        assert!(cut.contains("1,250"));
        assert!(cut.contains("125.0K"));
        assert!(cut.contains("Attack on Titan"));
        assert!(cut.contains(r#"aria-current="page""#));
        assert!(cut.contains("&middot; Admin"));
    }

    #[test]
    fn test_dashboard_github_success() {
        let analytics = aggregate(
            Repository {
                full_name: "uwumilabs/uwumi".to_owned(),
                stargazers_count: 1_500,
                ..Repository::default()
            },
            vec![Release {
                tag_name: "v1.0.0".to_owned(),
                assets: vec![Asset {
                    name: "uwumi.apk".to_owned(),
                    download_count: 2_000,
                    size: 1_536,
                    ..Asset::default()
                }],
                ..Release::default()
            }],
        );
        let cut = dashboard(
            &profile(false),
            "/admin",
            &TabContent::GitHub(Ok(&analytics), Utc::now()),
        );
        assert!(cut.contains("uwumilabs/uwumi"));
        assert!(cut.contains("1.5K"));
        assert!(cut.contains("Latest Release: v1.0.0"));
        assert!(cut.contains("Android APK"));
        assert!(cut.contains("Draft"));
    }

    #[test]
    fn test_dashboard_github_error_expect_retry() {
        let error = AnalyticsError(FetchError::Status {
            resource: Resource::Releases,
            status: reqwest::StatusCode::FORBIDDEN,
        });
        let cut = dashboard(
            &profile(false),
            "/admin",
            &TabContent::GitHub(Err(&error), Utc::now()),
        );
        assert!(cut.contains("Failed to Load GitHub Data"));
        assert!(cut.contains("Error fetching GitHub analytics"));
        assert!(cut.contains(r#"href="/admin?tab=github">Retry"#));
    }
}
