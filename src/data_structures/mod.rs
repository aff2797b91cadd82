//! Data structures for the Kilo keyword matcher.
//!
//! - [`keyword_trie`]: the character trie storing keywords and their
//!   canonical names
//! - [`keyword_matcher`]: the matcher built on the trie

pub mod keyword_matcher;
pub mod keyword_trie;

// Re-export common data structures
pub use keyword_matcher::{KeywordMatcher, KeywordMatcherError, KeywordMatcherResult};
pub use keyword_trie::TrieNode;
