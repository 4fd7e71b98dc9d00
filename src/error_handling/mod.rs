//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, transport and redirect resolution
//! - Categorization of `reqwest` failures
//!
//! Two conditions that stop redirect following are not errors:
//! a redirect without a `Location` header and an exhausted redirect budget.
//! Both are reported through [`crate::Termination`].

mod categorization;
mod types;

// Re-export public API
pub use categorization::transport_error_from_reqwest;
pub use types::{
    DestinationRewriteError, InitializationError, ResolveError, TransportError,
    TransportErrorKind,
};
