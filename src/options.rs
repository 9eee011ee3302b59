//! Configuration options for fetching and boilerplate classification.
//!
//! The `Options` struct carries the classifier thresholds and the HTTP
//! settings. The defaults are the tuned values of the jusText heuristic and
//! are what the command-line tool uses.

use std::time::Duration;

use crate::error::OptionsError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration options for fetching and extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use webpage2text::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Duration::from_secs(5),
///     no_headings: true,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Blocks shorter than this (in characters) are classified short.
    ///
    /// Default: `70`
    pub length_low: usize,

    /// Blocks longer than this with a high stopword density are good.
    ///
    /// Default: `200`
    pub length_high: usize,

    /// Minimum stopword density for a block to be near-good.
    ///
    /// Default: `0.30`
    pub stopwords_low: f64,

    /// Stopword density from which a long block is good.
    ///
    /// Default: `0.32`
    pub stopwords_high: f64,

    /// Blocks with a larger share of link text are bad.
    ///
    /// Default: `0.2`
    pub max_link_density: f64,

    /// How far (in characters) a good block may follow a heading for the
    /// heading to be kept.
    ///
    /// Default: `200`
    pub max_heading_distance: usize,

    /// Treat headings like any other block.
    ///
    /// Default: `false`
    pub no_headings: bool,

    /// Total request timeout (connect, redirects and body).
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// `User-Agent` header value.
    ///
    /// Default: `webpage2text/<version>`
    pub user_agent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            length_low: 70,
            length_high: 200,
            stopwords_low: 0.30,
            stopwords_high: 0.32,
            max_link_density: 0.2,
            max_heading_distance: 200,
            no_headings: false,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Options {
    /// Check that the thresholds are consistent.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError` if a low threshold exceeds its high
    /// counterpart, a density lies outside `0.0..=1.0`, or the timeout is zero.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.length_low > self.length_high {
            return Err(OptionsError(format!(
                "length_low ({}) exceeds length_high ({})",
                self.length_low, self.length_high
            )));
        }
        if self.stopwords_low > self.stopwords_high {
            return Err(OptionsError(format!(
                "stopwords_low ({}) exceeds stopwords_high ({})",
                self.stopwords_low, self.stopwords_high
            )));
        }
        for (name, value) in [
            ("stopwords_low", self.stopwords_low),
            ("stopwords_high", self.stopwords_high),
            ("max_link_density", self.max_link_density),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(OptionsError(format!("{name} must lie in 0.0..=1.0, got {value}")));
            }
        }
        if self.timeout.is_zero() {
            return Err(OptionsError("timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}
