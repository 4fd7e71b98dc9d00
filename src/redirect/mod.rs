//! WebDAV-aware redirect following.
//!
//! This module provides:
//! - [`RedirectResolver`]: the bounded redirect loop
//! - [`RedirectChain`]: the record of locations and statuses visited
//! - [`rewrite_destination`]: the `Destination` rewrite rule for COPY/MOVE

mod chain;
mod destination;
mod resolver;


pub use chain::RedirectChain;
pub use destination::rewrite_destination;
pub use resolver::{RedirectResolver, Resolution, Termination};
