// Copyright (c) 2025 Kilo Keywords Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Longest-match scan shared by extraction and replacement.
//!
//! The scan walks only the goto edges of the trie. When a walk starting at
//! position `i` dead-ends without passing a terminal node, scanning restarts
//! at `i + 1`; there are no failure links.

use std::iter::FusedIterator;

use crate::data_structures::keyword_trie::{Terminal, TrieNode};

/// One step of the scan over a normalized character sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanEvent<'a> {
    /// No keyword starts at this character; it is passed through.
    Unmatched(char),

    /// The longest keyword starting at `start` ends at `end` (exclusive).
    Matched {
        canonical: &'a str,
        start: usize,
        end: usize,
    },
}

/// Iterator over the scan events of a text.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    /// Trie root the walks start from
    root: &'a TrieNode,

    /// The normalized text being scanned
    text: &'a [char],

    /// Index of the next character to examine
    position: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(root: &'a TrieNode, text: &'a [char]) -> Self {
        Self {
            root,
            text,
            position: 0,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = ScanEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.position;
        let c = *self.text.get(start)?;

        match longest_match_at(self.root, self.text, start) {
            Some(terminal) => {
                // A zero length marker could only come from a hand-built trie.
                let end = start + terminal.length.max(1);
                self.position = end;
                Some(ScanEvent::Matched {
                    canonical: &terminal.canonical,
                    start,
                    end,
                })
            }
            None => {
                self.position = start + 1;
                Some(ScanEvent::Unmatched(c))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len().saturating_sub(self.position);
        (remaining.min(1), Some(remaining))
    }
}

impl FusedIterator for Scanner<'_> {}

/// Walks the trie from `start` and returns the deepest terminal passed.
fn longest_match_at<'a>(root: &'a TrieNode, text: &[char], start: usize) -> Option<&'a Terminal> {
    let mut node = root;
    let mut best = None;

    for &c in &text[start..] {
        match node.child(c) {
            Some(next) => {
                node = next;
                if let Some(terminal) = node.terminal() {
                    best = Some(terminal);
                }
            }
            None => break,
        }
    }

    best
}
