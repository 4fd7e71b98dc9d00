//! Redirect report printed by the CLI.

use colored::Colorize;
use serde::Serialize;

use crate::redirect::{RedirectChain, Resolution, Termination};
use crate::transport::DavRequest;

/// Summary of one resolved request.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    /// HTTP method of the request
    pub method: String,
    /// URL the first request was sent to
    pub url: String,
    /// Base URI used to rebuild `Destination`
    pub base_uri: String,
    /// `Destination` of the first request, if any
    pub destination: Option<String>,
    /// Locations and statuses visited
    pub chain: RedirectChain,
    /// Why following stopped
    pub termination: Termination,
    /// Terminal status (404 when a redirect had no `Location`)
    pub final_status: u16,
    /// URL of the last request issued
    pub final_url: String,
    /// `Destination` of the last request issued
    pub final_destination: Option<String>,
    /// Last location reached through a permanent redirect
    pub permanent_location: Option<String>,
}

impl ResolveReport {
    /// Builds a report from the first request and the resolution outcome.
    pub fn new(original: &DavRequest, base_uri: &str, resolution: &Resolution) -> Self {
        Self {
            method: original.method().to_string(),
            url: original.url().to_string(),
            base_uri: base_uri.to_string(),
            destination: original.destination().map(str::to_owned),
            chain: resolution.chain.clone(),
            termination: resolution.termination,
            final_status: resolution.status().as_u16(),
            final_url: resolution.request.url().to_string(),
            final_destination: resolution.request.destination().map(str::to_owned),
            permanent_location: resolution
                .chain
                .last_permanent_location()
                .map(str::to_owned),
        }
    }

    /// Human-readable rendering, one line per hop.
    pub fn render_plain(&self) -> String {
        let mut lines = Vec::with_capacity(self.chain.redirections_count() + 4);
        lines.push(format!(
            "{} {} -> {}",
            self.method.bold(),
            self.url,
            self.chain.initial_status()
        ));

        for (index, (location, status)) in self
            .chain
            .locations()
            .iter()
            .zip(self.chain.statuses())
            .enumerate()
        {
            lines.push(format!("  {}. {} -> {}", index + 1, location, status));
        }

        let outcome = match self.termination {
            Termination::Completed => format!("{}", self.final_status).green().to_string(),
            Termination::MissingLocation => {
                format!("{} (redirect without Location)", self.final_status)
                    .yellow()
                    .to_string()
            }
            Termination::RedirectLimit => format!(
                "{} (too many redirects, limit {})",
                self.final_status,
                self.chain.max_redirects()
            )
            .red()
            .to_string(),
        };
        lines.push(format!("Final: {} {}", outcome, self.final_url));

        if let Some(destination) = &self.final_destination {
            lines.push(format!("Destination: {}", destination));
        }
        if let Some(permanent) = &self.permanent_location {
            lines.push(format!("Moved permanently to: {}", permanent));
        }
        lines.join("\n")
    }

    /// JSON rendering of the whole report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
