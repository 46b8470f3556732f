//! URL normalization for extracted result links.
//!
//! Search-result hrefs arrive in two awkward shapes: redirect wrappers
//! (`/url?q=<target>&sa=U`) and site-relative paths. Normalization unwraps
//! the former and absolutizes the latter. It never fails: malformed input
//! degrades to best-effort passthrough of the original string.

use url::form_urlencoded;

/// Normalize a raw href into an absolute result URL.
///
/// 1. If `raw_url` starts with `redirect_prefix`, the true destination is
///    read from the `q` query parameter; when that fails the original href
///    is kept unchanged.
/// 2. A URL still lacking an absolute scheme marker gets `base_url`
///    prepended.
#[must_use]
pub fn normalize(raw_url: &str, redirect_prefix: &str, base_url: &str) -> String {
    let mut url = raw_url.trim().to_string();

    if !redirect_prefix.is_empty() && url.starts_with(redirect_prefix) {
        if let Some(target) = redirect_target(&url) {
            url = target;
        }
    }

    if !url.is_empty() && !url.starts_with("http") {
        url = format!("{base_url}{url}");
    }

    url
}

/// Extract the `q` parameter from a redirect-wrapper href.
///
/// Parses everything after the first `?` as a query string. An absent or
/// empty `q` yields `None` so the caller keeps the original href.
fn redirect_target(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
        .filter(|target| !target.is_empty())
}
