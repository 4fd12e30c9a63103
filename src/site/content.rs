//! Static content of the landing page and dashboard chrome.

/// Product name
pub const APP_NAME: &str = "Uwumi";

/// Tagline used in the hero and `<meta name="description">`
pub const APP_DESCRIPTION: &str = "Feature-rich anime, manga and movie streaming app built with React Native and Expo. Download now for the ultimate entertainment experience.";

/// Community links
pub const DISCORD_URL: &str = "https://discord.gg/n7xVPxbG4R";
/// Maintainer's GitHub profile
pub const GITHUB_PROFILE_URL: &str = "https://github.com/2004durgesh";

/// A navigation link
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    /// Link text
    pub name: &'static str,
    /// Link target
    pub href: &'static str,
}

/// Landing page navigation, in-page anchors
pub const NAVIGATION_ITEMS: [NavItem; 4] = [
    NavItem { name: "Features", href: "#features" },
    NavItem { name: "Screenshots", href: "#screenshots" },
    NavItem { name: "Download", href: "#download" },
    NavItem { name: "GitHub", href: "#github" },
];

/// Dashboard sidebar
pub const ADMIN_NAVIGATION_ITEMS: [NavItem; 2] = [
    NavItem { name: "Dashboard", href: "/admin" },
    NavItem { name: "Home", href: "/" },
];

/// Chart palette
pub const CHART_COLORS: [&str; 6] = [
    "#8B5CF6", "#EC4899", "#10B981", "#F59E0B", "#EF4444", "#3B82F6",
];

/// A headline number with a caption
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    /// The number
    pub value: &'static str,
    /// Caption
    pub label: &'static str,
}

/// Numbers under the hero
pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "4.8", label: "Rating" },
    Stat { value: "10K+", label: "Users" },
    Stat { value: "Free", label: "Forever" },
];

/// Media types shown in the hero
pub const HERO_MEDIA: [&str; 3] = ["Anime", "Manga", "Movies"];

/// Numbers above the download cards
pub const DOWNLOAD_STATS: [Stat; 4] = [
    Stat { value: "4.8/5", label: "User Rating" },
    Stat { value: "10K+", label: "Downloads" },
    Stat { value: "Open", label: "Source" },
    Stat { value: "Free", label: "Forever" },
];

/// A feature card
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    /// Card heading
    pub title: &'static str,
    /// Card text
    pub description: &'static str,
}

/// Feature grid
pub const FEATURES: [Feature; 9] = [
    Feature {
        title: "Anime Streaming",
        description: "Watch thousands of anime episodes in HD quality with multiple subtitle options.",
    },
    Feature {
        title: "Manga Reader",
        description: "Read manga with a beautiful, customizable reader interface and offline support.",
    },
    Feature {
        title: "Movie Collection",
        description: "Discover and stream movies from various genres with detailed information.",
    },
    Feature {
        title: "Offline Downloads",
        description: "Download content for offline viewing when you're on the go.",
    },
    Feature {
        title: "Smart Search",
        description: "Find content quickly with our intelligent search and recommendation system.",
    },
    Feature {
        title: "Favorites & Lists",
        description: "Create custom lists and mark your favorite content for easy access.",
    },
    Feature {
        title: "Ad-Free Experience",
        description: "Enjoy uninterrupted streaming without annoying advertisements.",
    },
    Feature {
        title: "Fast Performance",
        description: "Lightning-fast loading times and smooth playback on all devices.",
    },
    Feature {
        title: "Multi-Language",
        description: "Support for multiple languages with subtitles and dubbing options.",
    },
];

/// Screen orientation of a screenshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Phone held upright
    Portrait,
    /// Phone held sideways
    Landscape,
}

/// A screenshot card
#[derive(Debug, Clone, Copy)]
pub struct Screenshot {
    /// Card heading
    pub title: &'static str,
    /// Caption
    pub description: &'static str,
    /// Path under the public directory
    pub image: &'static str,
    /// Gallery filter
    pub category: &'static str,
    /// Frame shape
    pub orientation: Orientation,
}

/// Screenshot gallery
pub const SCREENSHOTS: [Screenshot; 6] = [
    Screenshot {
        title: "Home",
        description: "Browse trending anime with beautiful card layouts",
        image: "/screenshots/home.jpeg",
        category: "Home",
        orientation: Orientation::Portrait,
    },
    Screenshot {
        title: "Details",
        description: "Detailed information with ratings and reviews",
        image: "/screenshots/details.jpeg",
        category: "Details",
        orientation: Orientation::Portrait,
    },
    Screenshot {
        title: "Video Player",
        description: "Immersive video player with custom controls",
        image: "/screenshots/player.jpeg",
        category: "Player",
        orientation: Orientation::Landscape,
    },
    Screenshot {
        title: "Manga Reader",
        description: "Beautiful manga reading experience",
        image: "/screenshots/reader.png",
        category: "Reader",
        orientation: Orientation::Portrait,
    },
    Screenshot {
        title: "Search & Discovery",
        description: "Find content with smart search features",
        image: "/screenshots/search.jpeg",
        category: "Search",
        orientation: Orientation::Portrait,
    },
    Screenshot {
        title: "Favorites",
        description: "Manage your favorite content easily",
        image: "/screenshots/favorite.jpeg",
        category: "Lists",
        orientation: Orientation::Portrait,
    },
];

/// A download card
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    /// Card heading
    pub name: &'static str,
    /// Card text
    pub description: &'static str,
    /// Unavailable platforms show "Coming Soon" instead of a link
    pub available: bool,
}

/// Download cards
pub const PLATFORMS: [Platform; 2] = [
    Platform {
        name: "Android APK",
        description: "Download directly for Android devices",
        available: true,
    },
    Platform {
        name: "iOS (TestFlight)",
        description: "Beta testing via TestFlight",
        available: false,
    },
];

/// Shown when a visitor may not see a page
pub const UNAUTHORIZED_MESSAGE: &str = "You are not authorized to access this resource.";
/// Shown for unknown paths
pub const NOT_FOUND_MESSAGE: &str = "The requested resource was not found.";
