//! Page fetching.
//!
//! One blocking GET per run: no retries and no connection reuse beyond the
//! request itself. Redirects are followed and anything but a final 2xx is
//! an error.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::encoding::{charset_from_content_type, decode_html};
use crate::error::FetchError;
use crate::Options;

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// URL after redirects.
    pub url: String,
    pub status: u16,
    /// Raw response body.
    pub content: Vec<u8>,
    /// Charset named by the `Content-Type` header.
    pub charset: Option<String>,
}

impl Page {
    /// The body decoded to UTF-8.
    #[must_use]
    pub fn html(&self) -> String {
        decode_html(&self.content, self.charset.as_deref())
    }
}

/// Parse and check a user-supplied URL.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` for unparsable URLs and for schemes
/// other than `http` and `https`.
pub fn parse_url(raw: &str) -> Result<Url, FetchError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: trimmed.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|err| match err {
        url::ParseError::RelativeUrlWithoutBase => {
            invalid(format!("No scheme supplied. Perhaps you meant https://{trimmed}?"))
        }
        other => invalid(other.to_string()),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(format!("unsupported scheme '{scheme}'"))),
    }
}

/// Blocking HTTP client configured from `Options`.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the TLS backend cannot be set up.
    pub fn new(options: &Options) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.clone())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// GET `url` and read the whole body.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for invalid URLs, network failures, timeouts,
    /// non-2xx responses and interrupted bodies.
    pub fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let url = parse_url(url)?;
        debug!(url = %url, "fetching page");

        let response = self.client.get(url).send().map_err(FetchError::Request)?;
        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: final_url,
            });
        }

        let charset = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(charset_from_content_type);
        let content = response.bytes().map_err(FetchError::Body)?.to_vec();

        debug!(
            url = %final_url,
            status = status.as_u16(),
            bytes = content.len(),
            charset = charset.as_deref().unwrap_or("-"),
            "page fetched"
        );

        Ok(Page {
            url: final_url,
            status: status.as_u16(),
            content,
            charset,
        })
    }
}
