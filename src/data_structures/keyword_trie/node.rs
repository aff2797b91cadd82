// Copyright (c) 2025 Kilo Keywords Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the keyword trie.
//!
//! Each node owns its children outright; the structure is a strict tree with
//! no shared ownership and no back-references.

use std::fmt;

use fnv::FnvHashMap;

/// Marker stored on the node that ends an inserted keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    /// Length in characters of the (normalized) keyword ending here.
    pub length: usize,

    /// Replacement emitted when the keyword is matched.
    pub canonical: String,
}

/// A node in the keyword trie.
///
/// The path of characters from the root to a node carrying a [`Terminal`]
/// spells exactly one inserted keyword, and `terminal.length` equals the
/// length of that path.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    /// Map of characters to owned child nodes
    children: FnvHashMap<char, TrieNode>,

    /// Present only when this node ends a keyword
    terminal: Option<Terminal>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a child exists for `c`.
    #[inline]
    pub fn has_child(&self, c: char) -> bool {
        self.children.contains_key(&c)
    }

    /// Returns the child node for `c`, if any.
    #[inline]
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Returns the terminal marker of this node, if it ends a keyword.
    #[inline]
    pub fn terminal(&self) -> Option<&Terminal> {
        self.terminal.as_ref()
    }

    /// Inserts the remaining characters of a keyword below this node.
    ///
    /// Missing children are created along the way. When the sequence is
    /// exhausted the terminal marker of the reached node is set, replacing
    /// any marker left by an earlier insertion of the same keyword.
    ///
    /// # Returns
    ///
    /// `true` if the reached node already carried a terminal marker.
    pub fn insert<I>(&mut self, remaining: I, original_length: usize, canonical: String) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self;
        for c in remaining {
            node = node.children.entry(c).or_default();
        }

        node.terminal
            .replace(Terminal {
                length: original_length,
                canonical,
            })
            .is_some()
    }

    /// Follows `sequence` from this node and returns the node it ends on.
    pub fn descend<I>(&self, sequence: I) -> Option<&TrieNode>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self;
        for c in sequence {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// Returns the canonical string stored at the end of `sequence`.
    ///
    /// `None` when the sequence is not fully present as a path or when the
    /// node it reaches does not end a keyword.
    pub fn lookup_exact<I>(&self, sequence: I) -> Option<&str>
    where
        I: IntoIterator<Item = char>,
    {
        self.descend(sequence)?
            .terminal
            .as_ref()
            .map(|t| t.canonical.as_str())
    }

    /// Collects every keyword stored below this node into `out`.
    ///
    /// `prefix` holds the characters spelled by the path to this node.
    pub fn collect_keywords(&self, prefix: &mut String, out: &mut Vec<(String, String)>) {
        if let Some(terminal) = &self.terminal {
            out.push((prefix.clone(), terminal.canonical.clone()));
        }

        for (c, child) in &self.children {
            prefix.push(*c);
            child.collect_keywords(prefix, out);
            prefix.pop();
        }
    }

    /// Children sorted by character, for deterministic output.
    fn sorted_children(&self) -> Vec<(char, &TrieNode)> {
        let mut children: Vec<(char, &TrieNode)> =
            self.children.iter().map(|(c, n)| (*c, n)).collect();
        children.sort_unstable_by_key(|(c, _)| *c);
        children
    }

    /// Writes an indented dump of this subtree.
    pub(crate) fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for (c, child) in self.sorted_children() {
            write!(f, "{:indent$}{:?}", "", c, indent = depth * 2)?;
            if let Some(terminal) = &child.terminal {
                write!(f, " => {:?} (len {})", terminal.canonical, terminal.length)?;
            }
            writeln!(f)?;
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_creates_path() {
        let mut root = TrieNode::new();
        assert!(!root.has_child('a'));

        let replaced = root.insert("abc".chars(), 3, "xyz".to_string());
        assert!(!replaced);

        assert!(root.has_child('a'));
        assert!(!root.has_child('b'));

        let a = root.child('a').unwrap();
        assert!(a.terminal().is_none());
        let c = a.child('b').and_then(|b| b.child('c')).unwrap();
        assert_eq!(
            c.terminal(),
            Some(&Terminal {
                length: 3,
                canonical: "xyz".to_string()
            })
        );
    }

    #[test]
    fn test_insert_is_last_write_wins() {
        let mut root = TrieNode::new();
        root.insert("key".chars(), 3, "first".to_string());
        let replaced = root.insert("key".chars(), 3, "second".to_string());

        assert!(replaced);
        assert_eq!(root.lookup_exact("key".chars()), Some("second"));
    }

    #[test]
    fn test_lookup_exact_requires_full_path_and_terminal() {
        let mut root = TrieNode::new();
        root.insert("python".chars(), 6, "Python".to_string());

        assert_eq!(root.lookup_exact("python".chars()), Some("Python"));
        assert_eq!(root.lookup_exact("pyth".chars()), None);
        assert_eq!(root.lookup_exact("pythonic".chars()), None);
        assert_eq!(root.lookup_exact("java".chars()), None);
    }

    #[test]
    fn test_shared_prefixes() {
        let mut root = TrieNode::new();
        root.insert("app".chars(), 3, "app".to_string());
        root.insert("apple".chars(), 5, "apple".to_string());

        assert_eq!(root.lookup_exact("app".chars()), Some("app"));
        assert_eq!(root.lookup_exact("apple".chars()), Some("apple"));
        assert_eq!(root.lookup_exact("appl".chars()), None);

        let mut keywords = Vec::new();
        root.collect_keywords(&mut String::new(), &mut keywords);
        keywords.sort();
        assert_eq!(
            keywords,
            vec![
                ("app".to_string(), "app".to_string()),
                ("apple".to_string(), "apple".to_string()),
            ]
        );
    }

    #[test]
    fn test_multibyte_characters() {
        let mut root = TrieNode::new();
        root.insert("café".chars(), 4, "coffee".to_string());

        assert!(root.descend("caf".chars()).unwrap().has_child('é'));
        assert_eq!(root.lookup_exact("café".chars()), Some("coffee"));
    }
}
