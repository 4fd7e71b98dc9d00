//! dav_redirect library: redirect following for WebDAV requests
//!
//! This library follows `301`, `302` and `307` responses the way a WebDAV
//! client has to: every hop re-issues the same method and headers, and the
//! `Destination` header of `COPY`/`MOVE` requests is rebuilt so it points into
//! the server the request was redirected to.
//!
//! # Example
//!
//! ```no_run
//! use dav_redirect::{run_resolve, Config};
//! use tokio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://cloud.example.com/remote.php/dav/files/alice/".to_string(),
//!     method: "PROPFIND".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_resolve(config).await?;
//! println!("{} -> {} ({:?})", report.url, report.final_url, report.termination);
//! # Ok(())
//! # }
//! ```
//!
//! The resolver can also be driven directly with any [`Transport`]:
//!
//! ```no_run
//! use dav_redirect::{DavRequest, RedirectResolver, ResolverConfig, Transport};
//! use url::Url;
//!
//! # async fn example(transport: &dyn Transport) -> Result<(), Box<dyn std::error::Error>> {
//! let request = DavRequest::new(
//!     reqwest::Method::GET,
//!     Url::parse("https://cloud.example.com/remote.php/dav/files/alice/")?,
//! );
//! let response = transport.execute(&request).await?;
//! let base_uri = Url::parse("https://cloud.example.com")?;
//!
//! let resolution = RedirectResolver::new(ResolverConfig::default())
//!     .follow_redirects(transport, request, response, &base_uri)
//!     .await?;
//! println!("{} after {} hops", resolution.status(), resolution.chain.redirections_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
mod redirect;
mod transport;

// Re-export public API
pub use app::{resolve_with, run_resolve, ResolveReport};
pub use config::{Config, LogFormat, LogLevel, OutputFormat, ResolverConfig};
pub use error_handling::{
    DestinationRewriteError, InitializationError, ResolveError, TransportError,
    TransportErrorKind,
};
pub use redirect::{rewrite_destination, RedirectChain, RedirectResolver, Resolution, Termination};
pub use transport::{DavRequest, DavResponse, ReqwestTransport, Transport};
