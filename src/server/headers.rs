//! Headers and cookie attributes used by the Uwumi server.

/// Set on gate redirects, naming the rule that fired.
///
/// Example:
///
/// For an anonymous request to `/admin/settings`:
///
/// `X-Uwumi-Gate: sign-in`
pub const HTTP_X_UWUMI_GATE: &str = "X-Uwumi-Gate";

/// Query parameter carrying the path to return to after signing in
pub const REDIRECT_URL_PARAM: &str = "redirect_url";

