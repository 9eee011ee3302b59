//! Stopword lists for the boilerplate classifier.
//!
//! Content paragraphs are full of function words ("und", "der", "nicht"),
//! navigation and link lists are not. The share of stopwords in a block is
//! one of the classifier's three signals.

use std::collections::HashSet;

const GERMAN: &str = include_str!("../stoplists/German.txt");

/// A set of lowercase stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stoplist {
    words: HashSet<String>,
}

impl Stoplist {
    /// The built-in German list used by the command-line tool.
    #[must_use]
    pub fn german() -> Self {
        Self::from_words(GERMAN.lines())
    }

    /// Build a list from arbitrary words. Blank entries are skipped and every
    /// word is lowercased.
    ///
    /// ```
    /// use webpage2text::Stoplist;
    ///
    /// let stoplist = Stoplist::from_words(["The", "and", ""]);
    /// assert!(stoplist.contains("the"));
    /// assert_eq!(stoplist.len(), 2);
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Count the whitespace-separated words of `text` that are stopwords.
    ///
    /// Punctuation attached to a word keeps it from matching.
    #[must_use]
    pub fn count_in(&self, text: &str) -> usize {
        text.split_whitespace().filter(|w| self.contains(w)).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
