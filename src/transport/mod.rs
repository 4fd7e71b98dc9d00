//! HTTP transport seam.
//!
//! The resolver only needs to issue one request at a time and hand back the
//! previous response before the next hop. [`Transport`] captures exactly that;
//! [`ReqwestTransport`] is the production implementation.

mod client;
mod request;

use async_trait::async_trait;

use crate::error_handling::TransportError;

pub use client::ReqwestTransport;
pub use request::{DavRequest, DavResponse};

/// Issues HTTP requests on behalf of the resolver.
///
/// Implementations must not follow redirects themselves.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes `request` once and returns the response.
    async fn execute(&self, request: &DavRequest) -> Result<DavResponse, TransportError>;

    /// Gives up a response that will not be used again.
    ///
    /// Called before the next hop is derived, so a transport holding live
    /// connections can return them to its pool first.
    fn release(&self, response: DavResponse) {
        drop(response);
    }
}
