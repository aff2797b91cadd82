// Copyright (c) 2025 Kilo Keywords Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keyword Trie
//!
//! A character-indexed trie whose marked nodes store the canonical replacement
//! for the keyword spelled by the path leading to them. It is the goto
//! structure walked by the [`KeywordMatcher`](super::keyword_matcher::KeywordMatcher)
//! scan.
//!
//! # Example
//!
//! ```
//! use kilo_keywords::data_structures::keyword_trie::TrieNode;
//!
//! let mut root = TrieNode::new();
//! root.insert("rust".chars(), 4, "Rust".to_string());
//!
//! assert!(root.has_child('r'));
//! assert_eq!(root.lookup_exact("rust".chars()), Some("Rust"));
//! assert_eq!(root.lookup_exact("rus".chars()), None);
//! ```

mod node;

pub use node::{Terminal, TrieNode};
