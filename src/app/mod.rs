//! Main application modules.
//!
//! This module ties the pieces together for the CLI: URL validation, building
//! the first request, running the resolver and reporting the outcome.

pub mod report;
pub mod request;
pub mod url;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::Config;
use crate::initialization::init_transport;
use crate::redirect::RedirectResolver;
use crate::transport::Transport;

// Re-export public API
pub use report::ResolveReport;
pub use request::build_request;
pub use url::{derive_base_uri, validate_and_normalize_url};

/// Sends the configured request and follows its redirects.
///
/// This is the main entry point for the library. It builds a transport that
/// never follows redirects on its own, executes the first request, and hands
/// the response to [`RedirectResolver`].
///
/// # Arguments
///
/// * `config` - Request and resolver settings
///
/// # Errors
///
/// This function will return an error if:
/// - The URL, method, a header or the base URI is invalid
/// - The HTTP client cannot be initialized
/// - A request fails, or a `Location` or `Destination` cannot be rebuilt
///
/// # Example
///
/// ```no_run
/// use dav_redirect::{run_resolve, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     url: "https://cloud.example.com/remote.php/dav/files/alice/a.txt".to_string(),
///     method: "MOVE".to_string(),
///     destination: Some("https://cloud.example.com/remote.php/dav/files/alice/b.txt".to_string()),
///     ..Default::default()
/// };
/// let report = run_resolve(config).await?;
/// println!("{} after {} redirects", report.final_status, report.chain.redirections_count());
/// # Ok(())
/// # }
/// ```
pub async fn run_resolve(config: Config) -> Result<ResolveReport> {
    let transport = init_transport(&config)
        .await
        .context("Failed to initialize HTTP client")?;
    resolve_with(&transport, &config).await
}

/// Same as [`run_resolve`] over a caller-supplied transport.
///
/// # Errors
///
/// See [`run_resolve`].
pub async fn resolve_with<T>(transport: &T, config: &Config) -> Result<ResolveReport>
where
    T: Transport + ?Sized,
{
    let url = validate_and_normalize_url(&config.url)?;
    let base_uri = match &config.base_uri {
        Some(raw) => validate_and_normalize_url(raw).context("Invalid base URI")?,
        None => derive_base_uri(&url, &config.dav_root)?,
    };
    let request = build_request(config, url)?;

    info!("{} {}", request.method(), request.url());
    let response = transport
        .execute(&request)
        .await
        .with_context(|| format!("Request to {} failed", request.url()))?;

    let resolver = RedirectResolver::new(config.into());
    let resolution = resolver
        .follow_redirects(transport, request.clone(), response, &base_uri)
        .await
        .with_context(|| format!("Failed to follow redirects for {}", request.url()))?;

    if resolution.is_redirect_limit() {
        warn!(
            "Too many redirects for {} (limit {})",
            request.url(),
            resolver.config().max_redirects
        );
    }
    if let Some(permanent) = resolution.chain.last_permanent_location() {
        info!("{} moved permanently to {}", request.url(), permanent);
    }

    Ok(ResolveReport::new(
        &request,
        base_uri.as_str().trim_end_matches('/'),
        &resolution,
    ))
}
