//! Internal dashboard stats.
//!
//! There is no user or content store behind the site yet, so these numbers
//! are fixed sample data with the shape a real source would fill in.
use serde_derive::Serialize;

/// Everything shown on the dashboard's overview tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminAnalytics {
    /// Headline numbers
    pub stats: AdminStats,
    /// Last seven days
    pub user_activity: Vec<UserActivity>,
    /// Titles per media type
    pub content_stats: ContentStats,
    /// Top titles
    pub popular_content: PopularContent,
}

/// Headline numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    /// Registered users
    pub total_users: u64,
    /// Users active this month
    pub active_users: u64,
    /// Titles across every media type
    pub total_content: u64,
    /// Page views this month
    pub monthly_views: u64,
}

/// One day of activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserActivity {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Active users that day
    pub users: u64,
    /// Page views that day
    pub views: u64,
}

/// Titles per media type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    /// Anime titles
    pub anime: u64,
    /// Manga titles
    pub manga: u64,
    /// Movie titles
    pub movies: u64,
}

/// Top titles per media type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularContent {
    /// Top anime
    pub anime: Vec<MediaItem>,
    /// Top manga
    pub manga: Vec<MediaItem>,
    /// Top movies
    pub movies: Vec<MediaItem>,
}

/// A title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaItem {
    /// Catalogue id
    pub id: String,
    /// Display title
    pub title: String,
    /// Average rating out of 10
    pub rating: f64,
    /// Portrait artwork
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Landscape artwork
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

/// Stock photo used for a sample title
fn pexels(photo: u32) -> String {
    format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=400")
}

/// Sample title with a poster
fn with_poster(id: &str, title: &str, rating: f64, photo: u32) -> MediaItem {
    MediaItem {
        id: id.to_owned(),
        title: title.to_owned(),
        rating,
        poster: Some(pexels(photo)),
        cover: None,
    }
}

/// Sample title with a cover
fn with_cover(id: &str, title: &str, rating: f64, photo: u32) -> MediaItem {
    MediaItem {
        cover: Some(pexels(photo)),
        poster: None,
        ..with_poster(id, title, rating, photo)
    }
}

/// The overview tab's data.
#[must_use]
pub fn admin_analytics() -> AdminAnalytics {
    let activity = [
        ("2024-01-10", 45, 234),
        ("2024-01-11", 52, 287),
        ("2024-01-12", 48, 312),
        ("2024-01-13", 61, 398),
        ("2024-01-14", 58, 445),
        ("2024-01-15", 67, 523),
        ("2024-01-16", 73, 612),
    ];
    AdminAnalytics {
        stats: AdminStats {
            total_users: 1_250,
            active_users: 875,
            total_content: 45,
            monthly_views: 125_000,
        },
        user_activity: activity
            .into_iter()
            .map(|(date, users, views)| UserActivity {
                date: date.to_owned(),
                users,
                views,
            })
            .collect(),
        content_stats: ContentStats {
            anime: 25,
            manga: 15,
            movies: 5,
        },
        popular_content: PopularContent {
            anime: vec![
                with_poster("1", "Attack on Titan", 9.0, 1_040_160),
                with_poster("2", "Demon Slayer", 8.7, 1_181_467),
                with_poster("3", "My Hero Academia", 8.5, 1_181_354),
            ],
            manga: vec![
                with_cover("1", "One Piece", 9.2, 1_181_298),
                with_cover("2", "Naruto", 8.9, 1_181_396),
            ],
            movies: vec![
                with_poster("1", "Your Name", 8.4, 1_181_263),
                with_poster("2", "Spirited Away", 9.3, 1_181_244),
            ],
        },
    }
}
