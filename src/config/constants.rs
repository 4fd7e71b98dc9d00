//! Configuration constants.
//!
//! This module defines the constants used throughout the crate, including the
//! redirect budget, the statuses treated as redirects and transport timeouts.

use reqwest::StatusCode;

// Redirect handling
/// Maximum number of redirect hops to follow for a single request.
///
/// Reaching this bound stops redirect following without raising an error.
pub const MAX_REDIRECTIONS_COUNT: usize = 5;

/// Statuses that trigger another hop.
///
/// 303 and 308 are returned to the caller as they are.
pub const REDIRECT_STATUSES: [StatusCode; 3] = [
    StatusCode::MOVED_PERMANENTLY,
    StatusCode::FOUND,
    StatusCode::TEMPORARY_REDIRECT,
];

/// Path segment identifying the WebDAV service root.
///
/// The `Destination` header is rebuilt from the part of the redirect location
/// before the last occurrence of this marker.
pub const WEBDAV_ROOT_MARKER: &str = "/remote.php/dav";

// Network operation timeouts
/// Whole-call timeout in seconds (covers long uploads and downloads).
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
/// TCP connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 60;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("dav_redirect/", env!("CARGO_PKG_VERSION"));

/// Returns whether `status` is followed by the resolver.
pub fn is_redirect_status(status: StatusCode) -> bool {
    REDIRECT_STATUSES.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_followed_statuses() {
        assert!(is_redirect_status(StatusCode::MOVED_PERMANENTLY));
        assert!(is_redirect_status(StatusCode::FOUND));
        assert!(is_redirect_status(StatusCode::TEMPORARY_REDIRECT));
    }

    #[test]
    fn test_unfollowed_statuses() {
        for code in [200u16, 201, 204, 207, 303, 304, 308, 404, 500] {
            let status = StatusCode::from_u16(code).expect("valid status code");
            assert!(
                !is_redirect_status(status),
                "status {} should not be followed",
                code
            );
        }
    }
}
