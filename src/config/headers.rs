//! HTTP header name constants.
//!
//! Header names are compared case-insensitively by `reqwest::header::HeaderMap`,
//! so a single constant covers `Destination` and `destination` alike.

use reqwest::header::HeaderName;

/// WebDAV `Destination` request header (RFC 4918, section 10.3), used by COPY and MOVE.
pub const DESTINATION: HeaderName = HeaderName::from_static("destination");

/// `Location` response header.
pub const LOCATION: HeaderName = reqwest::header::LOCATION;

