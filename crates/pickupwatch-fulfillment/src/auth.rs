//! Signals that the session cookie has expired.
//!
//! Each predicate is independent and any one of them is enough to raise
//! [`crate::FulfillmentError::AuthExpired`].

use reqwest::Url;

/// Phrases that only appear on the retailer's sign-in pages.
const SIGN_IN_MARKERS: &[&str] = &["sign in", "signin", "sign-in", "log in", "login"];

/// Which check flagged the session as expired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSignal {
    /// HTTP 401 or 403.
    Status(u16),
    /// Redirects ended on a sign-in URL.
    SignInRedirect(String),
    /// A non-JSON body containing a sign-in marker.
    BodyMarker(&'static str),
}

impl std::fmt::Display for AuthSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthSignal::Status(status) => write!(f, "HTTP {status}"),
            AuthSignal::SignInRedirect(url) => write!(f, "redirected to sign-in page {url}"),
            AuthSignal::BodyMarker(marker) => write!(f, "response body contains \"{marker}\""),
        }
    }
}

#[must_use]
pub fn status_signal(status: u16) -> Option<AuthSignal> {
    matches!(status, 401 | 403).then_some(AuthSignal::Status(status))
}

#[must_use]
pub fn redirect_signal(final_url: &Url) -> Option<AuthSignal> {
    let path = final_url.path().to_ascii_lowercase();
    SIGN_IN_MARKERS
        .iter()
        .filter(|marker| !marker.contains(' '))
        .any(|marker| path.contains(marker))
        .then(|| AuthSignal::SignInRedirect(final_url.to_string()))
}

/// JSON bodies are never inspected: a sign-in interstitial is always HTML.
#[must_use]
pub fn body_signal(body: &str) -> Option<AuthSignal> {
    let trimmed = body.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return None;
    }

    let lower = trimmed.to_lowercase();
    SIGN_IN_MARKERS
        .iter()
        .find(|marker| lower.contains(*marker))
        .copied()
        .map(AuthSignal::BodyMarker)
}
