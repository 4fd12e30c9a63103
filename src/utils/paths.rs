//! Utility functions for working with request paths
use lazy_static::lazy_static;
use regex::Regex;

#[expect(clippy::expect_used, reason = "The pattern is a constant")]
/// Collapse runs of `/` into one and drop any trailing `/`, so that
/// `//admin///users/` and `/admin/users` are matched the same way.
/// The root path stays `/`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"/{2,}").expect("Failed to compile regex!?!");
    }
    let collapsed = RE.replace_all(path, "/");
    let trimmed = collapsed.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        trimmed.to_owned()
    }
}
