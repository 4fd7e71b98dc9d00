//! Error categorization.
//!
//! This module maps `reqwest` failures onto [`TransportErrorKind`].

use super::types::{TransportError, TransportErrorKind};

/// Categorizes a `reqwest::Error` into a `TransportErrorKind`.
///
/// Redirect and status errors cannot occur with the redirect client (automatic
/// redirects are disabled and statuses are never turned into errors), so they
/// fall into `Other`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_builder() {
        TransportErrorKind::Builder
    } else if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if error.is_request() {
        TransportErrorKind::Request
    } else if error.is_body() {
        TransportErrorKind::Body
    } else if error.is_decode() {
        TransportErrorKind::Decode
    } else {
        TransportErrorKind::Other
    }
}

/// Wraps a `reqwest::Error` raised while executing `method url`.
pub fn transport_error_from_reqwest(
    error: reqwest::Error,
    method: &str,
    url: &str,
) -> TransportError {
    let kind = categorize_reqwest_error(&error);
    TransportError::new(kind, method, url, error)
}
