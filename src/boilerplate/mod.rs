//! Boilerplate removal.
//!
//! A reimplementation of the jusText heuristic. The document is cut into
//! text blocks at block-level tags, each block gets a context-free class
//! from its length, link density and stopword density, and a second pass
//! settles the uncertain blocks by looking at their neighbours.
//!
//! # Module Structure
//!
//! - `segment`: DOM walk producing text blocks in document order
//! - `classify`: context-free classification and contextual revision
//!
//! # Usage
//!
//! ```rust
//! use webpage2text::{boilerplate, Options, Stoplist};
//!
//! let html = "<html><body><ul><li><a href='/'>Startseite</a></li></ul></body></html>";
//! let blocks = boilerplate::text_blocks(html, &Stoplist::german(), &Options::default());
//! assert!(blocks.iter().all(|b| b.is_boilerplate()));
//! ```

pub mod classify;
pub mod segment;

use dom_query::Document;
use tracing::debug;

use crate::{Options, Stoplist};

/// Class of a text block.
///
/// `Short` and `NearGood` only exist between the two classification passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockClass {
    Bad,
    Short,
    NearGood,
    Good,
}

/// A classified block of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Whitespace-normalised text.
    pub text: String,
    /// Dot-joined element names open where the block started.
    pub dom_path: String,
    /// Block lies inside `h1`..`h6` (always false with `no_headings`).
    pub is_heading: bool,
    /// Characters inside links.
    pub link_chars: usize,
    /// Whitespace-separated words.
    pub words: usize,
    /// Words found in the stoplist.
    pub stopwords: usize,
    /// Class from the block alone.
    pub context_free_class: BlockClass,
    /// Final class.
    pub class: BlockClass,
}

impl TextBlock {
    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn is_boilerplate(&self) -> bool {
        self.class != BlockClass::Good
    }

    /// Share of the text inside links; `0.0` for empty blocks.
    #[must_use]
    pub fn link_density(&self) -> f64 {
        match self.len() {
            0 => 0.0,
            len => self.link_chars as f64 / len as f64,
        }
    }

    /// Share of words that are stopwords; `0.0` for blocks without words.
    #[must_use]
    pub fn stopword_density(&self) -> f64 {
        match self.words {
            0 => 0.0,
            words => self.stopwords as f64 / words as f64,
        }
    }
}

/// Segment and classify `html`, returning every block in document order.
#[must_use]
pub fn text_blocks(html: &str, stoplist: &Stoplist, options: &Options) -> Vec<TextBlock> {
    let doc = Document::from(html);
    let mut blocks: Vec<TextBlock> = segment::segment_document(&doc)
        .into_iter()
        .map(|s| classify::classify_segment(s, stoplist, options))
        .collect();
    classify::revise(&mut blocks, options);

    debug!(
        blocks = blocks.len(),
        content = blocks.iter().filter(|b| !b.is_boilerplate()).count(),
        "classified text blocks"
    );
    blocks
}

/// Join the text of all content blocks with `\n`.
///
/// Empty when the document has no text or everything is boilerplate.
#[must_use]
pub fn extract(html: &str, stoplist: &Stoplist, options: &Options) -> String {
    text_blocks(html, stoplist, options)
        .into_iter()
        .filter(|b| !b.is_boilerplate())
        .map(|b| b.text)
        .collect::<Vec<_>>()
        .join("\n")
}
