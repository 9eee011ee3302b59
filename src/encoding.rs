//! Character encoding detection and decoding of fetched pages.
//!
//! The body of an HTTP response is raw bytes. Before segmentation it is
//! decoded to UTF-8 using, in order of precedence, a byte-order mark, the
//! charset of the `Content-Type` header, a charset declared in the document
//! head, and finally UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// How far into the document to look for a `<meta>` declaration.
const META_SCAN_LIMIT: usize = 1024;

/// Match `<meta charset="...">`
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static CONTENT_TYPE_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Match the `charset` parameter of a `Content-Type` header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*"?([^";\s]+)"?"#).expect("valid regex")
});

/// Extract the charset parameter from a `Content-Type` header value.
///
/// ```
/// use webpage2text::encoding::charset_from_content_type;
///
/// assert_eq!(
///     charset_from_content_type("text/html; charset=ISO-8859-1"),
///     Some("ISO-8859-1".to_string())
/// );
/// assert_eq!(charset_from_content_type("text/html"), None);
/// ```
#[must_use]
pub fn charset_from_content_type(value: &str) -> Option<String> {
    HEADER_CHARSET_RE
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Find the charset declared in the document head, if any.
fn meta_charset(html: &[u8]) -> Option<&'static Encoding> {
    let head = &html[..html.len().min(META_SCAN_LIMIT)];
    let head = String::from_utf8_lossy(head);

    [&*CHARSET_META_RE, &*CONTENT_TYPE_META_RE]
        .into_iter()
        .filter_map(|re| re.captures(&head).and_then(|c| c.get(1)))
        .find_map(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Pick the encoding for a document.
///
/// `declared` is the charset from the HTTP headers. Unknown labels are
/// ignored rather than treated as errors.
#[must_use]
pub fn detect_encoding(html: &[u8], declared: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    if let Some(encoding) = declared.and_then(|label| Encoding::for_label(label.trim().as_bytes())) {
        return encoding;
    }

    meta_charset(html).unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Never fails: malformed sequences are replaced with U+FFFD.
///
/// ```
/// use webpage2text::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Stra\xDFe</body></html>";
/// assert!(decode_html(html, None).contains("Straße"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8], declared: Option<&str>) -> String {
    let encoding = detect_encoding(html, declared);
    debug!(encoding = encoding.name(), bytes = html.len(), "decoding page");

    // decode() strips a matching BOM itself
    let (decoded, _encoding_used, had_errors) = encoding.decode(html);
    if had_errors {
        debug!(encoding = encoding.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}
