//! Building the first request from CLI options.

use anyhow::{Context, Result};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use crate::config::{Config, DESTINATION};
use crate::transport::DavRequest;

/// Parses a `Name: value` header argument.
///
/// # Errors
///
/// Returns an error if the colon is missing or the name or value is not legal.
pub fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue)> {
    let (name, value) = raw
        .split_once(':')
        .with_context(|| format!("Header must look like \"Name: value\": {raw}"))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .with_context(|| format!("Invalid header name in {raw}"))?;
    let value = HeaderValue::from_str(value.trim())
        .with_context(|| format!("Invalid header value in {raw}"))?;
    Ok((name, value))
}

/// Builds the request described by `config` against `url`.
///
/// `--destination` wins over a `Destination` passed through `--header`.
///
/// # Errors
///
/// Returns an error if the method, a header, or the destination is not legal.
pub fn build_request(config: &Config, url: Url) -> Result<DavRequest> {
    let method = Method::from_bytes(config.method.trim().to_ascii_uppercase().as_bytes())
        .with_context(|| format!("Invalid HTTP method: {}", config.method))?;

    let mut request = DavRequest::new(method, url);
    for raw in &config.headers {
        let (name, value) = parse_header(raw)?;
        request = request.with_header(name, value);
    }
    if let Some(destination) = &config.destination {
        let value = HeaderValue::from_str(destination)
            .with_context(|| format!("Invalid Destination: {destination}"))?;
        request = request.with_header(DESTINATION, value);
    }
    Ok(request)
}
