//! Document segmentation into text blocks.
//!
//! Walks the parsed DOM in document order. Block-level tags open a new
//! block, inline tags do not, and two `<br>` in a row count as a block
//! break. Text inside `<a>` is tallied separately for link density.

use dom_query::{Document, NodeRef};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Opening or closing any of these starts a new block.
const BLOCK_TAGS: &[&str] = &[
    "body", "blockquote", "caption", "center", "col", "colgroup", "dd", "div", "dl", "dt",
    "fieldset", "form", "legend", "optgroup", "option", "p", "pre", "table", "td", "textarea",
    "tfoot", "th", "thead", "tr", "ul", "li", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Subtrees that never carry readable text.
const SKIPPED_TAGS: &[&str] = &["head", "script", "style", "noscript", "template", "link", "meta"];

#[allow(clippy::expect_used)]
static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse whitespace runs: a run containing a line break becomes `\n`,
/// any other run a single space.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN_RE
        .replace_all(text, |caps: &Captures| {
            let run = &caps[0];
            if run.contains(['\n', '\r']) { "\n" } else { " " }
        })
        .into_owned()
}

/// A block of text before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Whitespace-normalised, trimmed text.
    pub text: String,
    /// Dot-joined element names open when the block started, e.g. `html.body.div.h2`.
    pub dom_path: String,
    /// Characters of text that sat inside `<a>` elements.
    pub link_chars: usize,
}

#[derive(Debug, Default)]
struct PendingSegment {
    dom_path: String,
    fragments: Vec<String>,
    link_chars: usize,
}

impl PendingSegment {
    fn at(dom_path: String) -> Self {
        Self {
            dom_path,
            ..Self::default()
        }
    }

    fn finish(self) -> Segment {
        let joined = normalize_whitespace(&self.fragments.concat());
        Segment {
            text: joined.trim().to_string(),
            dom_path: self.dom_path,
            link_chars: self.link_chars,
        }
    }
}

#[derive(Debug, Default)]
struct Segmenter {
    path: Vec<String>,
    current: PendingSegment,
    segments: Vec<Segment>,
    in_link: bool,
    after_br: bool,
}

impl Segmenter {
    fn start_element(&mut self, name: &str) {
        self.path.push(name.to_string());

        if BLOCK_TAGS.contains(&name) || (name == "br" && self.after_br) {
            self.start_segment();
            return;
        }

        self.after_br = name == "br";
        if self.after_br {
            self.current.fragments.push(" ".to_string());
        } else if name == "a" {
            self.in_link = true;
        }
    }

    fn end_element(&mut self, name: &str) {
        self.path.pop();
        if BLOCK_TAGS.contains(&name) {
            self.start_segment();
        }
        if name == "a" {
            self.in_link = false;
        }
    }

    fn characters(&mut self, content: &str) {
        if content.trim().is_empty() {
            return;
        }
        let text = normalize_whitespace(content);
        if self.in_link {
            self.current.link_chars += text.chars().count();
        }
        self.current.fragments.push(text);
        self.after_br = false;
    }

    /// Close the current block (if it received any text) and open a new one
    /// at the current path.
    fn start_segment(&mut self) {
        let next = PendingSegment::at(self.path.join("."));
        let done = std::mem::replace(&mut self.current, next);
        if !done.fragments.is_empty() {
            self.segments.push(done.finish());
        }
    }

    fn visit(&mut self, node: &NodeRef) {
        if node.is_element() {
            let Some(name) = node.node_name() else {
                return;
            };
            let name = name.to_ascii_lowercase();
            if SKIPPED_TAGS.contains(&name.as_str()) {
                return;
            }
            self.start_element(&name);
            for child in node.children() {
                self.visit(&child);
            }
            self.end_element(&name);
        } else if node.is_text() {
            self.characters(&node.text());
        }
    }
}

/// Split a parsed document into text blocks in document order.
#[must_use]
pub fn segment_document(doc: &Document) -> Vec<Segment> {
    let mut segmenter = Segmenter::default();
    let html = doc.select("html");
    for node in html.nodes() {
        segmenter.visit(node);
    }
    segmenter.start_segment();
    segmenter.segments
}
