// Copyright (c) 2025 Kilo Keywords Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keyword matcher implementation.
//!
//! This module contains the matcher that owns the keyword trie, normalizes
//! keywords and text according to its case policy, and drives the shared
//! longest-match scan for extraction and replacement.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace, warn};

use super::error::{KeywordMatcherError, KeywordMatcherResult};
use super::scan::{ScanEvent, Scanner};
use crate::config::MatcherConfig;
use crate::data_structures::keyword_trie::TrieNode;

/// Options for configuring the keyword matcher behavior.
#[derive(Debug, Clone, Default)]
pub struct MatcherOptions {
    /// Whether keywords and text are compared without lower-casing
    pub case_sensitive: bool,
}

impl MatcherOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matching should be case-sensitive.
    ///
    /// # Arguments
    ///
    /// * `value` - `true` to compare characters exactly, `false` to lower-case
    ///   keywords and text before comparing.
    ///
    /// # Returns
    ///
    /// Updated options object with the specified setting.
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }
}

impl From<&MatcherConfig> for MatcherOptions {
    fn from(config: &MatcherConfig) -> Self {
        Self::new().case_sensitive(config.case_sensitive)
    }
}

/// A keyword occurrence accepted by the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Canonical name of the matched keyword
    pub canonical: String,

    /// Character offset of the first matched character in the normalized text
    pub start: usize,

    /// Character offset just past the match in the normalized text
    pub end: usize,
}

impl KeywordMatch {
    /// Creates a new match result.
    pub fn new<S: Into<String>>(canonical: S, start: usize, end: usize) -> Self {
        Self {
            canonical: canonical.into(),
            start,
            end,
        }
    }
}

/// Multi-keyword matcher and replacer.
///
/// The matcher is populated with keywords (each mapped to a canonical form)
/// and then scans text in a single pass, either collecting the canonical
/// names of the keywords found or rewriting the text with every match
/// replaced.
///
/// Queries take `&self` and never mutate; insertion takes `&mut self`.
/// The type carries no internal synchronization, so sharing it across
/// threads while inserting requires an external lock.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    /// Root of the keyword trie
    root: TrieNode,

    /// Matching options, fixed at construction
    options: MatcherOptions,

    /// Number of successful insertions, duplicates included
    keyword_count: usize,
}

impl KeywordMatcher {
    /// Creates an empty, case-insensitive matcher.
    pub fn new() -> Self {
        Self::with_options(MatcherOptions::default())
    }

    /// Creates an empty matcher with the given options.
    pub fn with_options(options: MatcherOptions) -> Self {
        Self {
            root: TrieNode::new(),
            options,
            keyword_count: 0,
        }
    }

    /// Creates an empty matcher from the matcher section of the configuration.
    pub fn from_config(config: &MatcherConfig) -> Self {
        Self::with_options(MatcherOptions::from(config))
    }

    /// Returns `true` if keywords and text are compared exactly.
    pub fn is_case_sensitive(&self) -> bool {
        self.options.case_sensitive
    }

    /// Returns the number of insertions performed.
    ///
    /// Re-inserting an existing keyword counts again.
    pub fn size(&self) -> usize {
        self.keyword_count
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.keyword_count == 0
    }

    fn normalize<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.options.case_sensitive {
            Cow::Borrowed(s)
        } else {
            Cow::Owned(s.to_lowercase())
        }
    }

    /// Adds a keyword that is its own canonical name.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordMatcherError::EmptyKeyword`] if `word` is empty.
    pub fn add_keyword(&mut self, word: &str) -> KeywordMatcherResult<()> {
        self.add_keyword_with(word, word)
    }

    /// Adds a keyword mapped to `canonical`.
    ///
    /// The keyword is normalized according to the case policy; `canonical`
    /// is stored as given. Adding a keyword again replaces its canonical
    /// name and still increments [`size`](Self::size).
    ///
    /// # Errors
    ///
    /// Returns [`KeywordMatcherError::EmptyKeyword`] if `word` is empty. The
    /// matcher is left unchanged.
    pub fn add_keyword_with<C>(&mut self, word: &str, canonical: C) -> KeywordMatcherResult<()>
    where
        C: Into<String>,
    {
        if word.is_empty() {
            warn!("Rejected empty keyword");
            return Err(KeywordMatcherError::EmptyKeyword);
        }

        let normalized = self.normalize(word);
        let length = normalized.chars().count();
        let replaced = self
            .root
            .insert(normalized.chars(), length, canonical.into());
        self.keyword_count += 1;

        debug!(
            keyword = %normalized,
            replaced,
            keyword_count = self.keyword_count,
            "Added keyword"
        );
        Ok(())
    }

    /// Adds every `(word, canonical)` pair in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error; pairs before it stay inserted.
    pub fn add_keywords<I, W, C>(&mut self, pairs: I) -> KeywordMatcherResult<()>
    where
        I: IntoIterator<Item = (W, C)>,
        W: AsRef<str>,
        C: Into<String>,
    {
        for (word, canonical) in pairs {
            self.add_keyword_with(word.as_ref(), canonical)?;
        }
        Ok(())
    }

    /// Returns `true` if `word` was inserted as a complete keyword.
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Returns the canonical name stored for `word`.
    pub fn get(&self, word: &str) -> Option<&str> {
        if word.is_empty() {
            return None;
        }
        self.root.lookup_exact(self.normalize(word).chars())
    }

    /// Returns every stored `(keyword, canonical)` pair, sorted by keyword.
    ///
    /// Keywords appear in normalized form, once each.
    pub fn keywords(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.keyword_count);
        self.root.collect_keywords(&mut String::new(), &mut out);
        out.sort_unstable();
        out
    }

    fn normalized_chars(&self, text: &str) -> Vec<char> {
        self.normalize(text).chars().collect()
    }

    /// Returns the set of canonical names of all keywords found in `text`.
    ///
    /// Each canonical name is reported once regardless of how often it
    /// matched.
    pub fn extract_keywords(&self, text: &str) -> HashSet<String> {
        let mut found = HashSet::new();
        if text.is_empty() {
            return found;
        }

        let chars = self.normalized_chars(text);
        for event in Scanner::new(&self.root, &chars) {
            if let ScanEvent::Matched { canonical, .. } = event {
                if !found.contains(canonical) {
                    found.insert(canonical.to_string());
                }
            }
        }

        trace!(
            text_len = chars.len(),
            found = found.len(),
            "Extracted keywords"
        );
        found
    }

    /// Returns every accepted match in `text`, in scan order.
    ///
    /// Offsets count characters of the normalized text.
    pub fn find_all(&self, text: &str) -> Vec<KeywordMatch> {
        if text.is_empty() {
            return Vec::new();
        }

        let chars = self.normalized_chars(text);
        let matches: Vec<KeywordMatch> = Scanner::new(&self.root, &chars)
            .filter_map(|event| match event {
                ScanEvent::Matched {
                    canonical,
                    start,
                    end,
                } => Some(KeywordMatch::new(canonical, start, end)),
                ScanEvent::Unmatched(_) => None,
            })
            .collect();

        trace!(
            text_len = chars.len(),
            matches = matches.len(),
            "Found keyword matches"
        );
        matches
    }

    /// Returns `text` with every matched keyword replaced by its canonical name.
    ///
    /// The output is built from the normalized text, so in case-insensitive
    /// mode unmatched spans come back lower-cased. Empty input is returned
    /// unchanged.
    pub fn replace(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let chars = self.normalized_chars(text);
        let mut out = String::with_capacity(text.len());
        let mut replaced = 0usize;

        for event in Scanner::new(&self.root, &chars) {
            match event {
                ScanEvent::Unmatched(c) => out.push(c),
                ScanEvent::Matched { canonical, .. } => {
                    out.push_str(canonical);
                    replaced += 1;
                }
            }
        }

        trace!(text_len = chars.len(), replaced, "Replaced keywords");
        out
    }

    /// Returns a human-readable dump of the trie.
    ///
    /// Intended for diagnostics only; the format is not stable.
    pub fn debug_representation(&self) -> String {
        self.to_string()
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for KeywordMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "KeywordMatcher(case_sensitive={}, size={})",
            self.options.case_sensitive, self.keyword_count
        )?;
        self.root.write_tree(f, 1)
    }
}
