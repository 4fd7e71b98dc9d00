//! Redirect chain record.

use serde::Serialize;

/// The path taken while following redirects for one request.
///
/// `locations[i]` is the `Location` value that was followed on hop `i`, and
/// `statuses[i]` is the status returned by the request sent there. Hops are
/// recorded as pairs, so both sequences always have the same length, and that
/// length never exceeds `max_redirects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectChain {
    initial_status: u16,
    locations: Vec<String>,
    statuses: Vec<u16>,
    max_redirects: usize,
}

impl RedirectChain {
    /// Starts an empty chain for a response with `initial_status`.
    pub fn new(initial_status: u16, max_redirects: usize) -> Self {
        Self {
            initial_status,
            locations: Vec::new(),
            statuses: Vec::new(),
            max_redirects,
        }
    }

    /// Appends one followed hop.
    ///
    /// Callers check [`is_exhausted`](Self::is_exhausted) first.
    pub(crate) fn record_hop(&mut self, location: String, status: u16) {
        debug_assert!(!self.is_exhausted(), "hop recorded past the redirect bound");
        self.locations.push(location);
        self.statuses.push(status);
    }

    /// Status observed before any redirect was followed.
    pub fn initial_status(&self) -> u16 {
        self.initial_status
    }

    /// Locations followed, in visiting order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Status returned at each followed location.
    pub fn statuses(&self) -> &[u16] {
        &self.statuses
    }

    /// Upper bound on the number of hops.
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// Number of redirects followed.
    pub fn redirections_count(&self) -> usize {
        self.locations.len()
    }

    /// Whether the redirect budget has been used up.
    pub fn is_exhausted(&self) -> bool {
        self.redirections_count() >= self.max_redirects
    }

    /// Last status in the path, or the initial one when nothing was followed.
    pub fn last_status(&self) -> u16 {
        self.statuses
            .last()
            .copied()
            .unwrap_or(self.initial_status)
    }

    /// Most recently followed location.
    pub fn last_location(&self) -> Option<&str> {
        self.locations.last().map(String::as_str)
    }

    /// Most recent location reached through a `301 Moved Permanently`.
    ///
    /// Callers use this to update a stored server address after a permanent
    /// move. Later temporary redirects do not hide an earlier permanent one.
    pub fn last_permanent_location(&self) -> Option<&str> {
        // The status that produced locations[i] is the one observed just before it
        let producing = std::iter::once(self.initial_status).chain(self.statuses.iter().copied());
        producing
            .zip(self.locations.iter())
            .filter(|(status, _)| *status == 301)
            .map(|(_, location)| location.as_str())
            .last()
    }
}
