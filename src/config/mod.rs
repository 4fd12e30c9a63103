//! Site configuration.
//!
//! Read once at start-up from a TOML file (`uwumi.toml` by default) and
//! shared read-only for the lifetime of the server. Every section has
//! defaults, so a missing file or a missing section still yields a runnable
//! site.
use crate::auth::User;
use serde_derive::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Config file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "uwumi.toml";

/// Environment variable holding a GitHub token for authenticated API calls.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the port the server listens on.
pub const PORT_ENV: &str = "UWUMI_PORT";

/// Top level config object
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: Server,
    /// Admin allow-lists
    pub admin: Admin,
    /// Route gating
    pub gate: Gate,
    /// GitHub repository whose releases feed the analytics
    pub github: GitHub,
    /// Identity provider and session handling
    pub auth: Auth,
}

impl Config {
    /// Load the config at `path`, falling back to defaults when the file does not exist.
    /// Environment overrides are applied afterwards.
    ///
    /// # Errors
    /// Will error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut conf = if path.exists() {
            let config_str = read_to_string(path)?;
            toml::from_str::<Self>(&config_str)
                .map_err(|err| anyhow::anyhow!("Invalid config '{}': {err}", path.display()))?
        } else {
            tracing::warn!("No config found at '{}', using defaults", path.display());
            Self::default()
        };
        conf.apply_overrides(|key| std::env::var(key).ok());
        Ok(conf)
    }

    /// Apply overrides looked up through `lookup` (normally the process environment).
    pub fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        if let Some(token) = lookup(GITHUB_TOKEN_ENV).filter(|token| !token.is_empty()) {
            self.github.token = Some(token);
        }
        if let Some(port) = lookup(PORT_ENV) {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid {PORT_ENV} value '{port}'"),
            }
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Server {
    /// Address to bind to
    pub bind: String,
    /// Port to listen on
    pub port: u16,
    /// Directory holding `images/` and `screenshots/`
    pub public_dir: PathBuf,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_owned(),
            port: 8080,
            public_dir: PathBuf::from("public"),
        }
    }
}

/// Admin allow-lists.
///
/// A user is an admin when their primary email is in `emails`, their id is
/// in `user_ids`, or their public metadata carries `role = "admin"`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Admin {
    /// Admin email addresses
    pub emails: HashSet<String>,
    /// Identity provider user ids with admin access, independent of email
    pub user_ids: HashSet<String>,
    /// Paths that make up the admin area
    pub routes: Vec<String>,
}

impl Default for Admin {
    fn default() -> Self {
        Self {
            emails: HashSet::from(["admin@uwumi.app".to_owned()]),
            user_ids: HashSet::new(),
            routes: [
                "/admin",
                "/admin/dashboard",
                "/admin/content",
                "/admin/users",
                "/admin/settings",
            ]
            .into_iter()
            .map(ToOwned::to_owned)
            .collect(),
        }
    }
}

/// Route gating
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Gate {
    /// Path prefixes that require a signed-in user
    pub protected: Vec<String>,
    /// Where unauthenticated visitors are sent
    pub sign_in_path: String,
    /// Also require admin status on admin routes. Off in the deployed site.
    pub require_admin: bool,
}

impl Default for Gate {
    fn default() -> Self {
        Self {
            protected: vec!["/admin".to_owned()],
            sign_in_path: "/sign-in".to_owned(),
            require_admin: false,
        }
    }
}

/// GitHub repository whose releases feed the analytics
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHub {
    /// Base URL of the REST API
    pub api_url: String,
    /// Owning user or organization
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// `User-Agent` sent with every request, required by the API
    pub user_agent: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Optional token, raises the rate limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for GitHub {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_owned(),
            owner: "uwumilabs".to_owned(),
            repo: "uwumi".to_owned(),
            user_agent: concat!("uwumi-site/", env!("CARGO_PKG_VERSION")).to_owned(),
            timeout_secs: 10,
            token: None,
        }
    }
}

/// Identity provider and session handling
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Auth {
    /// Name of the cookie carrying the session token
    pub session_cookie: String,
    /// Hosted sign-in page. When unset the site shows a session token form.
    pub sign_in_url: Option<String>,
    /// Hosted sign-up page
    pub sign_up_url: Option<String>,
    /// Which identity provider resolves sessions
    pub provider: Provider,
}

impl Default for Auth {
    fn default() -> Self {
        Self {
            session_cookie: "__session".to_owned(),
            sign_in_url: None,
            sign_up_url: None,
            provider: Provider::default(),
        }
    }
}

/// Identity provider selection
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Provider {
    /// Resolve sessions against a remote user endpoint
    Remote {
        /// Endpoint returning the user for a bearer session token
        user_url: String,
        /// Endpoint revoking a session, if the provider has one
        #[serde(default)]
        sign_out_url: Option<String>,
    },
    /// Fixed token to user table
    Static {
        /// Known sessions
        #[serde(default)]
        sessions: Vec<StaticSession>,
    },
}

impl Default for Provider {
    fn default() -> Self {
        Self::Static {
            sessions: Vec::new(),
        }
    }
}

/// One entry of the static provider's session table
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticSession {
    /// Session token as carried by the cookie
    pub token: String,
    /// User the token signs in as
    pub user: User,
}
