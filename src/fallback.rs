//! Fallback Extraction
//!
//! Used when the boilerplate classifier keeps nothing. Returns every text
//! node of the document in order, with no filtering and no separators
//! beyond the whitespace already present in the markup.

use dom_query::{Document, NodeRef};
use tracing::debug;

/// Elements whose text content is code or markup, not readable text.
const HIDDEN_TAGS: &[&str] = &["script", "style", "template", "noscript"];

fn is_hidden(node: &NodeRef) -> bool {
    node.node_name()
        .is_some_and(|name| HIDDEN_TAGS.contains(&name.to_ascii_lowercase().as_str()))
}

fn collect_text(node: &NodeRef, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(&child.text());
        } else if child.is_element() && !is_hidden(&child) {
            collect_text(&child, out);
        }
    }
}

/// Concatenate all visible text of `html`, title included.
///
/// ```
/// use webpage2text::fallback::full_text;
///
/// let html = "<html><head><title>Titel</title></head><body><p>Text</p></body></html>";
/// assert_eq!(full_text(html), "TitelText");
/// ```
#[must_use]
pub fn full_text(html: &str) -> String {
    let doc = Document::from(html);
    let mut out = String::new();
    for node in doc.select("html").nodes() {
        collect_text(node, &mut out);
    }
    debug!(chars = out.chars().count(), "collected full text");
    out
}
