//! `Destination` header rewriting for redirected COPY/MOVE requests.

use reqwest::header::HeaderValue;
use url::Url;

use crate::error_handling::DestinationRewriteError;

/// Rebuilds a `Destination` value so it points into the redirected service.
///
/// The part of `location` before the last `dav_root_marker` replaces the base
/// URI prefix of `original_destination`:
///
/// ```text
/// location     https://host2/remote.php/dav/files/user/
/// destination  https://host/remote.php/dav/files/user/a.txt
/// base URI     https://host
/// result       https://host2/remote.php/dav/files/user/a.txt
/// ```
///
/// The destination is cut at the length of the base URI without checking that
/// it actually starts with it.
///
/// # Errors
///
/// - `MarkerNotFound` if `location` has no `dav_root_marker`
/// - `DestinationTooShort` if the destination cannot be cut at the base URI length
pub fn rewrite_destination(
    location: &str,
    original_destination: &str,
    base_uri: &Url,
    dav_root_marker: &str,
) -> Result<String, DestinationRewriteError> {
    let suffix_index =
        location
            .rfind(dav_root_marker)
            .ok_or_else(|| DestinationRewriteError::MarkerNotFound {
                location: location.to_string(),
                marker: dav_root_marker.to_string(),
            })?;
    let redirection_base = &location[..suffix_index];

    let base = base_uri_str(base_uri);
    let destination_path = original_destination.get(base.len()..).ok_or_else(|| {
        DestinationRewriteError::DestinationTooShort {
            destination: original_destination.to_string(),
            base_uri: base.to_string(),
        }
    })?;

    Ok(format!("{}{}", redirection_base, destination_path))
}

/// Same as [`rewrite_destination`], producing a header value.
pub(crate) fn rewrite_destination_header(
    location: &str,
    original_destination: &str,
    base_uri: &Url,
    dav_root_marker: &str,
) -> Result<HeaderValue, DestinationRewriteError> {
    let rewritten =
        rewrite_destination(location, original_destination, base_uri, dav_root_marker)?;
    HeaderValue::from_str(&rewritten)
        .map_err(|_| DestinationRewriteError::InvalidHeaderValue(rewritten))
}

/// String form of the base URI used as the cut point.
///
/// `Url` always renders an empty path as `/`; service base URIs are written
/// without the trailing slash.
fn base_uri_str(base_uri: &Url) -> &str {
    base_uri.as_str().trim_end_matches('/')
}
