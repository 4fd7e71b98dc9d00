//! Error type definitions.
//!
//! This module defines all error types used throughout the crate.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Categories of transport failures.
///
/// Mirrors the `reqwest::Error` predicates so callers can decide on their own
/// retry policy without downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorKind {
    /// The request could not be built
    Builder,
    /// The request or connect timeout elapsed
    Timeout,
    /// No connection could be established
    Connect,
    /// Sending the request failed
    Request,
    /// Reading the response body failed
    Body,
    /// The response could not be decoded
    Decode,
    /// Anything else
    Other,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransportErrorKind {
    /// Returns a human-readable string representation of the error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::Builder => "HTTP request builder error",
            TransportErrorKind::Timeout => "HTTP request timeout error",
            TransportErrorKind::Connect => "HTTP request connect error",
            TransportErrorKind::Request => "HTTP request error",
            TransportErrorKind::Body => "HTTP request body error",
            TransportErrorKind::Decode => "HTTP request decode error",
            TransportErrorKind::Other => "HTTP request other error",
        }
    }
}

/// A failure while issuing one request through a [`crate::Transport`].
///
/// The resolver never retries on these; they propagate to the caller unchanged.
#[derive(Error, Debug)]
#[error("{kind} for {method} {url}: {source}")]
pub struct TransportError {
    /// What went wrong.
    pub kind: TransportErrorKind,
    /// Request method.
    pub method: String,
    /// Request target.
    pub url: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl TransportError {
    /// Wraps an underlying error raised while executing `method url`.
    pub fn new<E>(kind: TransportErrorKind, method: &str, url: &str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self {
            kind,
            method: method.to_string(),
            url: url.to_string(),
            source: source.into(),
        }
    }
}

/// Reasons the `Destination` header could not be rewritten for a redirect target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DestinationRewriteError {
    /// The redirect location does not contain the DAV root marker.
    #[error("redirect location {location} does not contain DAV root {marker}")]
    MarkerNotFound {
        /// Resolved redirect location.
        location: String,
        /// DAV root path marker that was searched for.
        marker: String,
    },

    /// The original destination cannot be cut at the base URI length.
    #[error("destination {destination} is shorter than base URI {base_uri}")]
    DestinationTooShort {
        /// Original `Destination` value.
        destination: String,
        /// Base URI string form used as the cut point.
        base_uri: String,
    },

    /// The original `Destination` is not valid UTF-8.
    #[error("destination header is not valid UTF-8")]
    NotUtf8,

    /// The rewritten value is not a legal header value.
    #[error("rewritten destination {0} is not a valid header value")]
    InvalidHeaderValue(String),
}

/// Error types for redirect resolution.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Re-executing the request against a redirect target failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The `Location` header could not be resolved to a URL.
    #[error("invalid redirect location {location}: {source}")]
    InvalidLocation {
        /// Raw `Location` header value.
        location: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The `Destination` header could not be rewritten for the new location.
    #[error("cannot rewrite Destination header: {0}")]
    DestinationRewrite(#[from] DestinationRewriteError),
}
