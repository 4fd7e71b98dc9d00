//! Redirect chain resolution.
//!
//! This module follows redirect chains manually so the WebDAV `Destination`
//! header can be rewritten on every hop, and records the full path taken.

use log::debug;
use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

use super::chain::RedirectChain;
use super::destination::rewrite_destination_header;
use crate::config::{is_redirect_status, ResolverConfig, DESTINATION};
use crate::error_handling::{DestinationRewriteError, ResolveError};
use crate::transport::{DavRequest, DavResponse, Transport};

/// Why redirect following stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// A non-redirect status was reached.
    Completed,
    /// A redirect status arrived without a `Location` header; reported as 404.
    MissingLocation,
    /// The redirect budget ran out while still being redirected.
    RedirectLimit,
}

/// Outcome of [`RedirectResolver::follow_redirects`].
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Locations and statuses visited.
    pub chain: RedirectChain,
    /// Why following stopped.
    pub termination: Termination,
    /// Last request issued (the original one when nothing was followed).
    pub request: DavRequest,
    /// Last response received.
    pub response: DavResponse,
}

impl Resolution {
    /// Terminal status: `404 Not Found` for a redirect without `Location`,
    /// otherwise the status of the last response.
    pub fn status(&self) -> StatusCode {
        match self.termination {
            Termination::MissingLocation => StatusCode::NOT_FOUND,
            Termination::Completed | Termination::RedirectLimit => self.response.status(),
        }
    }

    /// Whether the caller should report "too many redirects".
    pub fn is_redirect_limit(&self) -> bool {
        self.termination == Termination::RedirectLimit
    }
}

/// Follows 301/302/307 responses for WebDAV requests.
///
/// Stateless between calls; only the read-only [`ResolverConfig`] is kept.
#[derive(Debug, Clone, Default)]
pub struct RedirectResolver {
    config: ResolverConfig,
}

impl RedirectResolver {
    /// Creates a resolver with the given settings.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Settings in use.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Follows redirects starting from an already executed request.
    ///
    /// Each hop releases the previous response through `transport`, derives the
    /// next request from the current one, rewrites `Destination` when the
    /// original request carried it, and executes. Hops run one after another.
    ///
    /// # Arguments
    ///
    /// * `transport` - Transport used to re-execute; must not follow redirects itself
    /// * `request` - The request that produced `response`
    /// * `response` - The first response
    /// * `base_uri` - Base URI of the service, the cut point for `Destination`
    ///
    /// # Errors
    ///
    /// - `ResolveError::Transport` if re-executing fails (not retried)
    /// - `ResolveError::InvalidLocation` if a `Location` value cannot be resolved
    /// - `ResolveError::DestinationRewrite` if `Destination` cannot be rebuilt
    ///
    /// A missing `Location` and an exhausted redirect budget are not errors;
    /// see [`Resolution::termination`].
    pub async fn follow_redirects<T>(
        &self,
        transport: &T,
        request: DavRequest,
        response: DavResponse,
        base_uri: &Url,
    ) -> Result<Resolution, ResolveError>
    where
        T: Transport + ?Sized,
    {
        let original_destination = request.headers().get(DESTINATION).cloned();
        let mut chain = RedirectChain::new(response.status().as_u16(), self.config.max_redirects);
        let mut request = request;
        let mut response = response;

        let termination = loop {
            if !is_redirect_status(response.status()) {
                break Termination::Completed;
            }
            if chain.is_exhausted() {
                debug!(
                    "Stopped following redirects for {} after {} hops",
                    request.url(),
                    chain.redirections_count()
                );
                break Termination::RedirectLimit;
            }

            let Some(location) = response.location().map(str::to_owned) else {
                debug!(
                    "No location to redirect to for {} ({})",
                    response.url(),
                    response.status()
                );
                break Termination::MissingLocation;
            };
            debug!("Location to redirect: {}", location);

            let target = request
                .url()
                .join(&location)
                .map_err(|source| ResolveError::InvalidLocation {
                    location: location.clone(),
                    source,
                })?;

            let destination = match &original_destination {
                Some(original) => {
                    let original = std::str::from_utf8(original.as_bytes())
                        .map_err(|_| DestinationRewriteError::NotUtf8)?;
                    let rewritten = rewrite_destination_header(
                        redirection_source(&location, &target),
                        original,
                        base_uri,
                        &self.config.dav_root_marker,
                    )?;
                    debug!("Destination rewritten to {:?}", rewritten);
                    Some(rewritten)
                }
                None => None,
            };

            // The old connection goes back before the target changes
            transport.release(response);
            request = request.redirect_to(target, destination);

            response = transport.execute(&request).await?;
            chain.record_hop(location, response.status().as_u16());
        };

        Ok(Resolution {
            chain,
            termination,
            request,
            response,
        })
    }
}

/// The string the `Destination` rewrite cuts: the raw `Location` when it is
/// already absolute, otherwise the target it was joined into.
fn redirection_source<'a>(location: &'a str, target: &'a Url) -> &'a str {
    match Url::parse(location) {
        Ok(_) => location,
        Err(_) => target.as_str(),
    }
}
