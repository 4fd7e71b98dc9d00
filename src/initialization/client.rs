//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP client and the
//! transport used for redirect resolution.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::transport::ReqwestTransport;

/// Initializes a shared HTTP client for redirect resolution.
///
/// Creates a `reqwest::Client` with redirects disabled so every hop goes
/// through the resolver, which keeps the `Destination` header in step with
/// the target. Cookies are not stored.
///
/// # Arguments
///
/// * `config` - Configuration containing user-agent and timeout settings
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub async fn init_redirect_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the transport used by the CLI.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub async fn init_transport(config: &Config) -> Result<ReqwestTransport, InitializationError> {
    let client = init_redirect_client(config).await?;
    Ok(ReqwestTransport::new(client))
}
