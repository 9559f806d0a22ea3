//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// A non-empty configured base wins; otherwise requests go to the page's
/// own origin, where the report service is hosted.
///
/// # Returns
/// - API base URL like "http://localhost:5000" without a trailing slash
/// - Empty string if window is not available (relative URLs are used)
pub fn api_base(configured: &str) -> String {
    let configured = configured.trim().trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a base, a path and an encoded query string
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("http://localhost:5000", "/api/organizations", "filter_corp=true");
/// assert_eq!(url, "http://localhost:5000/api/organizations?filter_corp=true");
/// ```
pub fn api_url(base: &str, path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}{}?{}", base, path, query)
    }
}
