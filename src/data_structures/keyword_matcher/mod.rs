// Copyright (c) 2025 Kilo Keywords Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keyword Matcher for single-pass extraction and replacement.
//!
//! This module provides a dictionary-driven matcher: keywords are inserted
//! into a character trie, each mapped to a canonical name, and text is then
//! scanned once to either collect the canonical names found or rewrite the
//! text with every match replaced.
//!
//! # Features
//!
//! - Longest match at each scan position
//! - Non-overlapping matches; scanning resumes right after an accepted match
//! - Case-insensitive (default) or case-sensitive comparison
//! - Works on Unicode scalar values, not bytes
//!
//! # Example
//!
//! ```
//! use kilo_keywords::data_structures::keyword_matcher::KeywordMatcher;
//!
//! let mut matcher = KeywordMatcher::new();
//! matcher.add_keyword_with("Big Apple", "New York").unwrap();
//! matcher.add_keyword_with("Bay Area", "San Francisco").unwrap();
//!
//! let found = matcher.extract_keywords("I love the big apple and the bay area.");
//! assert_eq!(found.len(), 2);
//! assert!(found.contains("New York"));
//!
//! assert_eq!(
//!     matcher.replace("I love the big apple."),
//!     "i love the New York."
//! );
//! ```
//!
//! # Performance Characteristics
//!
//! - Insertion: O(k) for a keyword of k characters
//! - Scan: O(n * m) worst case for a text of n characters and a longest
//!   keyword of m characters; O(n) when partial walks are short
//!
//! The scan keeps no failure links. A walk that dead-ends before reaching a
//! keyword end is abandoned and scanning restarts at the next character.

mod error;
mod matcher;
mod scan;

#[cfg(test)]
mod tests;

// Re-exports
pub use error::{KeywordMatcherError, KeywordMatcherResult};
pub use matcher::{KeywordMatch, KeywordMatcher, MatcherOptions};
