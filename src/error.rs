//! Error types for webpage2text.
//!
//! Each stage of the pipeline has its own error type. None of them abort the
//! program: fetch failures become the extracted text, write and clipboard
//! failures are reported and the remaining outputs still run.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Failure while fetching a page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    /// DNS, connection, TLS or timeout failure.
    #[error("{}", with_causes(.0))]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{code} {category}: {reason} for url: {url}", category = status_category(.code))]
    Status {
        code: u16,
        reason: String,
        url: String,
    },

    /// The response body could not be read completely.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Render an error followed by its chain of causes.
fn with_causes(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn status_category(code: &u16) -> &'static str {
    match *code {
        400..=499 => "Client Error",
        500..=599 => "Server Error",
        _ => "HTTP Error",
    }
}

/// Failure while writing the extracted text to a file.
#[derive(Debug, thiserror::Error)]
#[error("{source}: '{}'", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Failure while copying the extracted text to the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard utility is installed.
    #[error("no clipboard utility found (tried: {tried})")]
    Unavailable { tried: String },

    /// The utility exists but could not be started or fed.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    /// The utility ran and reported failure.
    #[error("{program} exited with {status}")]
    Failed {
        program: &'static str,
        status: ExitStatus,
    },
}

/// Inconsistent classifier configuration.
#[derive(Debug, thiserror::Error)]
#[error("invalid options: {0}")]
pub struct OptionsError(pub String);

/// Umbrella error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Options(#[from] OptionsError),
}

/// Result type alias for webpage2text operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
