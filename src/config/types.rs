//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    MAX_REDIRECTIONS_COUNT, WEBDAV_ROOT_MARKER,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the redirect report printed by the CLI.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per hop
    Plain,
    /// A single JSON document
    Json,
}

/// Settings read by [`crate::RedirectResolver`].
///
/// Shared read-only between calls; the resolver keeps no other state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Maximum number of redirects followed before giving up
    pub max_redirects: usize,
    /// Path marker of the WebDAV root, used to rebuild `Destination`
    pub dav_root_marker: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_redirects: MAX_REDIRECTIONS_COUNT,
            dav_root_marker: WEBDAV_ROOT_MARKER.to_string(),
        }
    }
}

/// Command-line and library configuration.
///
/// Can be parsed from the command line or constructed programmatically.
///
/// # Examples
///
/// ```bash
/// # Follow redirects for a plain GET
/// dav_redirect https://cloud.example.com/remote.php/dav/files/alice/
///
/// # Follow redirects for a MOVE, rewriting its Destination on every hop
/// dav_redirect https://cloud.example.com/remote.php/dav/files/alice/a.txt \
///     --method MOVE \
///     --destination https://cloud.example.com/remote.php/dav/files/alice/b.txt
/// ```
///
/// ```no_run
/// use dav_redirect::Config;
///
/// let config = Config {
///     url: "https://cloud.example.com/remote.php/dav/files/alice/".to_string(),
///     max_redirects: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dav_redirect",
    about = "Follows WebDAV redirect chains, keeping the Destination header in step."
)]
pub struct Config {
    /// Request URL
    #[arg(value_parser)]
    pub url: String,

    /// HTTP method (GET, PROPFIND, COPY, MOVE, ...)
    #[arg(long, default_value = "GET")]
    pub method: String,

    /// WebDAV Destination header for COPY/MOVE
    #[arg(long)]
    pub destination: Option<String>,

    /// Extra request header as "Name: value" (repeatable)
    #[arg(long = "header", short = 'H')]
    pub headers: Vec<String>,

    /// Base URI of the service.
    ///
    /// Defaults to the part of the URL before the DAV root marker.
    #[arg(long)]
    pub base_uri: Option<String>,

    /// Maximum number of redirects to follow
    #[arg(long, default_value_t = MAX_REDIRECTIONS_COUNT)]
    pub max_redirects: usize,

    /// Path marker of the WebDAV root
    #[arg(long, default_value = WEBDAV_ROOT_MARKER)]
    pub dav_root: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: "GET".to_string(),
            destination: None,
            headers: Vec::new(),
            base_uri: None,
            max_redirects: MAX_REDIRECTIONS_COUNT,
            dav_root: WEBDAV_ROOT_MARKER.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Plain,
        }
    }
}

impl From<&Config> for ResolverConfig {
    fn from(config: &Config) -> Self {
        Self {
            max_redirects: config.max_redirects,
            dav_root_marker: config.dav_root.clone(),
        }
    }
}
