//! URL validation and base URI derivation.

use anyhow::{bail, Context, Result};
use url::Url;

/// Maximum URL length (2048 characters), matching common server limits.
const MAX_URL_LENGTH: usize = 2048;

/// Validates and normalizes a request URL.
///
/// Adds an `https://` prefix if no scheme is given, then checks that the URL
/// parses and uses http or https.
///
/// # Errors
///
/// Returns an error if the URL is too long, does not parse, or uses another scheme.
pub fn validate_and_normalize_url(url: &str) -> Result<Url> {
    let url = url.trim();
    if url.len() > MAX_URL_LENGTH {
        bail!(
            "URL exceeds maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    let parsed = Url::parse(&normalized).with_context(|| format!("Invalid URL: {url}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => bail!("Unsupported scheme {other} for URL: {url}"),
    }
}

/// Guesses the service base URI from a request URL.
///
/// Everything before the last `dav_root_marker` is the base
/// (`https://host/nextcloud/remote.php/dav/files/u` gives
/// `https://host/nextcloud`). Without the marker the URL origin is used.
pub fn derive_base_uri(url: &Url, dav_root_marker: &str) -> Result<Url> {
    let s = url.as_str();
    let Some(index) = s.rfind(dav_root_marker) else {
        return Url::parse(&url.origin().ascii_serialization())
            .with_context(|| format!("URL has no usable origin: {url}"));
    };
    Url::parse(&s[..index]).with_context(|| format!("Invalid base URI derived from {url}"))
}
