//! Block classification.
//!
//! Two passes. The context-free pass looks at each block alone: link
//! density, length and stopword density. The context-sensitive pass resolves
//! the undecided classes (`Short`, `NearGood`) from the nearest decided
//! neighbours, so a short line between two content paragraphs is kept and a
//! short line inside a menu is dropped.

use regex::Regex;
use std::sync::LazyLock;

use super::segment::Segment;
use super::{BlockClass, TextBlock};
use crate::{Options, Stoplist};

#[allow(clippy::expect_used)]
static HEADING_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bh\d\b").expect("valid regex"));

#[allow(clippy::expect_used)]
static SELECT_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^select|\.select").expect("valid regex"));

/// Turn a segment into a block carrying its context-free class.
#[must_use]
pub fn classify_segment(segment: Segment, stoplist: &Stoplist, options: &Options) -> TextBlock {
    let words = segment.text.split_whitespace().count();
    let stopwords = stoplist.count_in(&segment.text);
    let is_heading = !options.no_headings && HEADING_PATH_RE.is_match(&segment.dom_path);

    let mut block = TextBlock {
        text: segment.text,
        dom_path: segment.dom_path,
        is_heading,
        link_chars: segment.link_chars,
        words,
        stopwords,
        context_free_class: BlockClass::Bad,
        class: BlockClass::Bad,
    };
    block.context_free_class = context_free_class(&block, options);
    block.class = block.context_free_class;
    block
}

fn context_free_class(block: &TextBlock, options: &Options) -> BlockClass {
    let length = block.len();
    let stopword_density = block.stopword_density();

    if block.link_density() > options.max_link_density {
        BlockClass::Bad
    } else if block.text.contains('\u{a9}') || block.text.contains("&copy") {
        BlockClass::Bad
    } else if SELECT_PATH_RE.is_match(&block.dom_path) {
        BlockClass::Bad
    } else if length < options.length_low {
        if block.link_chars > 0 {
            BlockClass::Bad
        } else {
            BlockClass::Short
        }
    } else if stopword_density >= options.stopwords_high {
        if length > options.length_high {
            BlockClass::Good
        } else {
            BlockClass::NearGood
        }
    } else if stopword_density >= options.stopwords_low {
        BlockClass::NearGood
    } else {
        BlockClass::Bad
    }
}

/// First decided class in `blocks`. Document edges count as `Bad`.
fn nearest<'a>(blocks: impl Iterator<Item = &'a TextBlock>, ignore_near_good: bool) -> BlockClass {
    blocks
        .map(|b| b.class)
        .find(|class| match class {
            BlockClass::Good | BlockClass::Bad => true,
            BlockClass::NearGood => !ignore_near_good,
            BlockClass::Short => false,
        })
        .unwrap_or(BlockClass::Bad)
}

fn prev_neighbour(blocks: &[TextBlock], i: usize, ignore_near_good: bool) -> BlockClass {
    nearest(blocks[..i].iter().rev(), ignore_near_good)
}

fn next_neighbour(blocks: &[TextBlock], i: usize, ignore_near_good: bool) -> BlockClass {
    nearest(blocks[i + 1..].iter(), ignore_near_good)
}

/// Whether a `Good` block starts within `max_distance` characters after `i`.
fn good_follows(blocks: &[TextBlock], i: usize, max_distance: usize) -> bool {
    let mut distance = 0;
    for block in &blocks[i + 1..] {
        if distance > max_distance {
            break;
        }
        if block.class == BlockClass::Good {
            return true;
        }
        distance += block.len();
    }
    false
}

fn resolve_short(blocks: &[TextBlock], i: usize) -> BlockClass {
    let prev = prev_neighbour(blocks, i, true);
    let next = next_neighbour(blocks, i, true);

    match (prev, next) {
        (BlockClass::Good, BlockClass::Good) => BlockClass::Good,
        (BlockClass::Bad, BlockClass::Bad) => BlockClass::Bad,
        _ => {
            let near_good_before = prev == BlockClass::Bad
                && prev_neighbour(blocks, i, false) == BlockClass::NearGood;
            let near_good_after = next == BlockClass::Bad
                && next_neighbour(blocks, i, false) == BlockClass::NearGood;
            if near_good_before || near_good_after {
                BlockClass::Good
            } else {
                BlockClass::Bad
            }
        }
    }
}

/// Resolve `Short` and `NearGood` blocks from their neighbours and rescue
/// headings that introduce content. Afterwards every block is `Good` or `Bad`.
pub fn revise(blocks: &mut [TextBlock], options: &Options) {
    // short headings right before content
    for i in 0..blocks.len() {
        if blocks[i].is_heading
            && blocks[i].class == BlockClass::Short
            && good_follows(blocks, i, options.max_heading_distance)
        {
            blocks[i].class = BlockClass::NearGood;
        }
    }

    // all short blocks are decided against the same snapshot
    let snapshot: &[TextBlock] = blocks;
    let decided: Vec<(usize, BlockClass)> = (0..snapshot.len())
        .filter(|&i| snapshot[i].class == BlockClass::Short)
        .map(|i| (i, resolve_short(snapshot, i)))
        .collect();
    for (i, class) in decided {
        blocks[i].class = class;
    }

    for i in 0..blocks.len() {
        if blocks[i].class != BlockClass::NearGood {
            continue;
        }
        let prev = prev_neighbour(blocks, i, true);
        let next = next_neighbour(blocks, i, true);
        blocks[i].class = if prev == BlockClass::Bad && next == BlockClass::Bad {
            BlockClass::Bad
        } else {
            BlockClass::Good
        };
    }

    // headings dropped only by context
    for i in 0..blocks.len() {
        if blocks[i].is_heading
            && blocks[i].class == BlockClass::Bad
            && blocks[i].context_free_class != BlockClass::Bad
            && good_follows(blocks, i, options.max_heading_distance)
        {
            blocks[i].class = BlockClass::Good;
        }
    }
}
