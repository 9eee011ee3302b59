//! # webpage2text
//!
//! Fetch a web page and extract its main readable text.
//!
//! The page is fetched with a single blocking GET, cut into text blocks and
//! classified with the jusText heuristic (length, link density and German
//! stopword density, then neighbour context). Content blocks are joined by
//! newlines. If nothing survives, all visible text of the page is returned
//! instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use webpage2text::{extract_text, Method, Options, Stoplist};
//!
//! let html = "<html><body><p>Nur ein kurzer Satz.</p></body></html>";
//! let extraction = extract_text(html, &Stoplist::german(), &Options::default());
//! assert_eq!(extraction.text, "Nur ein kurzer Satz.");
//! assert_eq!(extraction.method, Method::Fallback);
//! ```
//!
//! Fetching goes through [`fetch_and_extract`], which keeps errors separate,
//! or [`extract_text_from_url`], which turns a failed fetch into the German
//! error line the command-line tool prints.

mod error;
mod options;
mod stoplist;

/// Boilerplate classification of text blocks.
pub mod boilerplate;

/// Clipboard access.
pub mod clipboard;

/// Character encoding detection and decoding.
pub mod encoding;

/// Full-text fallback extraction.
pub mod fallback;

/// HTTP fetching.
pub mod fetch;

/// Diagnostic logging setup.
pub mod logging;

/// Routing of the extracted text to file, clipboard or console.
pub mod output;

use tracing::{debug, warn};

pub use boilerplate::{BlockClass, TextBlock};
pub use error::{ClipboardError, Error, FetchError, OptionsError, Result, WriteError};
pub use fetch::{Fetcher, Page};
pub use options::Options;
pub use stoplist::Stoplist;

/// Prefix of the text returned in place of content when fetching fails.
pub const FETCH_ERROR_PREFIX: &str = "Ein Fehler ist aufgetreten: ";

/// Which extractor produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Content blocks kept by the classifier.
    Boilerplate,
    /// All visible text, because the classifier kept nothing.
    Fallback,
}

/// Extracted text and its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub method: Method,
}

/// Extract the main text of an HTML document.
///
/// Falls back to the full visible text when the classified output is empty
/// or whitespace. The result may still be empty for a page without text.
#[must_use]
pub fn extract_text(html: &str, stoplist: &Stoplist, options: &Options) -> Extraction {
    let text = boilerplate::extract(html, stoplist, options);
    if !text.trim().is_empty() {
        return Extraction {
            text,
            method: Method::Boilerplate,
        };
    }

    debug!("no content blocks found, using full page text");
    Extraction {
        text: fallback::full_text(html),
        method: Method::Fallback,
    }
}

/// Extract the main text of a fetched page using the German stoplist.
#[must_use]
pub fn extract_page(page: &Page, options: &Options) -> Extraction {
    extract_text(&page.html(), &Stoplist::german(), options)
}

/// Fetch `url` and extract its main text.
///
/// # Errors
///
/// Returns `Error::Options` for inconsistent options and `Error::Fetch`
/// when the page cannot be retrieved.
pub fn fetch_and_extract(url: &str, options: &Options) -> Result<Extraction> {
    options.validate()?;
    let page = Fetcher::new(options)?.fetch(url)?;
    Ok(extract_page(&page, options))
}

/// Fetch `url` and extract its main text, reporting failures as text.
///
/// A failed fetch yields `"Ein Fehler ist aufgetreten: {details}"`, which is
/// then handled like any extracted text.
#[must_use]
pub fn extract_text_from_url(url: &str, options: &Options) -> String {
    match fetch_and_extract(url, options) {
        Ok(extraction) => extraction.text,
        Err(err) => {
            warn!(url, error = %err, "fetch failed");
            format!("{FETCH_ERROR_PREFIX}{err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_page_uses_classifier() {
        let html = "<html><body><p>Die Stadt hat in den vergangenen Jahren viel Geld in den Ausbau der Radwege gesteckt, \
                    und die meisten Bürger sind mit dem Ergebnis zufrieden. Trotzdem gibt es noch immer Stellen, an \
                    denen sich Radfahrer und Autofahrer in die Quere kommen.</p>\
                    <ul><li><a href=\"/\">Startseite</a></li></ul></body></html>";
        let extraction = extract_text(html, &Stoplist::german(), &Options::default());
        assert_eq!(extraction.method, Method::Boilerplate);
        assert!(extraction.text.starts_with("Die Stadt hat"));
        assert!(!extraction.text.contains("Startseite"));
    }

    #[test]
    fn all_boilerplate_page_falls_back() {
        let html = r#"<html><body><ul><li><a href="/">Start</a></li><li><a href="/b">Blog</a></li></ul></body></html>"#;
        let extraction = extract_text(html, &Stoplist::german(), &Options::default());
        assert_eq!(extraction.method, Method::Fallback);
        assert_eq!(extraction.text, "StartBlog");
    }

    #[test]
    fn blank_page_yields_empty_text() {
        let extraction = extract_text("<html><body></body></html>", &Stoplist::german(), &Options::default());
        assert_eq!(extraction.text, "");
        assert_eq!(extraction.method, Method::Fallback);
    }

    #[test]
    fn invalid_url_becomes_error_text() {
        let text = extract_text_from_url("nicht-eine-url", &Options::default());
        assert_eq!(
            text,
            "Ein Fehler ist aufgetreten: Invalid URL 'nicht-eine-url': No scheme supplied. Perhaps you meant https://nicht-eine-url?"
        );
    }

    #[test]
    fn invalid_options_are_rejected_before_fetching() {
        let options = Options {
            length_low: 500,
            ..Options::default()
        };
        assert!(matches!(
            fetch_and_extract("http://127.0.0.1:9/", &options),
            Err(Error::Options(_))
        ));
    }

    #[test]
    fn extraction_is_repeatable() {
        let html = "<html><body><h1>Titel</h1><p>Ein Absatz.</p></body></html>";
        let first = extract_text(html, &Stoplist::german(), &Options::default());
        let second = extract_text(html, &Stoplist::german(), &Options::default());
        assert_eq!(first, second);
    }
}
