//! # Byte Trie ``{ Vec<u8> -> T }``
//!
//! A byte-level trie stored as a node arena.
//!
//! Each node keeps its outgoing edges sorted by byte, so a transition is a
//! binary search over at most 256 edges; every query costs time proportional
//! to the number of bytes scanned, independent of the number of entries.

use crate::types::TokenType;

/// Arena index of the root node.
const ROOT: usize = 0;

#[derive(Debug, Clone, PartialEq)]
struct TrieNode<T> {
    /// Outgoing ``(byte, node)`` edges, sorted by byte.
    edges: Vec<(u8, usize)>,

    /// The value of the key ending at this node, if any.
    value: Option<T>,
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            value: None,
        }
    }
}

/// A byte-level prefix trie mapping byte strings to token ids.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `trie`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTrie<T: TokenType> {
    nodes: Vec<TrieNode<T>>,
    len: usize,
}

impl<T: TokenType> Default for TokenTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenType> TokenTrie<T> {
    /// Create a new, empty trie.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// The number of keys in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the trie empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn child(
        &self,
        node: usize,
        byte: u8,
    ) -> Option<usize> {
        let edges = &self.nodes[node].edges;
        edges
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|idx| edges[idx].1)
    }

    /// Look up the value of an exact key.
    ///
    /// ## Arguments
    /// * `key` - The byte key.
    ///
    /// ## Returns
    /// The value if `key` is present.
    pub fn get(
        &self,
        key: &[u8],
    ) -> Option<T> {
        let mut node = ROOT;
        for &b in key {
            node = self.child(node, b)?;
        }
        self.nodes[node].value
    }

    /// Insert a key, replacing any previous value.
    ///
    /// ## Arguments
    /// * `key` - The byte key.
    /// * `value` - The value to associate with `key`.
    ///
    /// ## Returns
    /// The previous value, if the key was already present.
    pub fn insert(
        &mut self,
        key: &[u8],
        value: T,
    ) -> Option<T> {
        let mut node = ROOT;
        for &b in key {
            node = match self.nodes[node]
                .edges
                .binary_search_by_key(&b, |&(e, _)| e)
            {
                Ok(idx) => self.nodes[node].edges[idx].1,
                Err(idx) => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].edges.insert(idx, (b, next));
                    next
                }
            };
        }

        let prev = self.nodes[node].value.replace(value);
        if prev.is_none() {
            self.len += 1;
        }
        prev
    }

    /// Iterate over every key which is a non-empty prefix of `text`.
    ///
    /// Matches are yielded shortest first, as ``(prefix_len, value)``.
    pub fn prefix_matches<'a>(
        &'a self,
        text: &'a [u8],
    ) -> PrefixMatches<'a, T> {
        PrefixMatches {
            trie: self,
            text,
            pos: 0,
            node: Some(ROOT),
        }
    }

    /// Collect up to `cap` keys which are prefixes of `text`, shortest first.
    pub fn common_prefix_matches(
        &self,
        text: &[u8],
        cap: usize,
    ) -> Vec<(usize, T)> {
        self.prefix_matches(text).take(cap).collect()
    }

    /// Find the longest key which is a prefix of `text`.
    ///
    /// ## Returns
    /// ``Some((prefix_len, value))`` for the longest match; `None` if no key matches.
    pub fn longest_prefix_match(
        &self,
        text: &[u8],
    ) -> Option<(usize, T)> {
        self.prefix_matches(text).last()
    }
}

/// Iterator over the prefix matches of a [`TokenTrie`].
///
/// See [`TokenTrie::prefix_matches`].
pub struct PrefixMatches<'a, T: TokenType> {
    trie: &'a TokenTrie<T>,
    text: &'a [u8],
    pos: usize,
    node: Option<usize>,
}

impl<T: TokenType> Iterator for PrefixMatches<'_, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.node {
            if self.pos >= self.text.len() {
                self.node = None;
                break;
            }

            let next = self.trie.child(node, self.text[self.pos]);
            self.pos += 1;
            self.node = next;

            if let Some(next) = next
                && let Some(value) = self.trie.nodes[next].value
            {
                return Some((self.pos, value));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_trie(keys: &[&str]) -> TokenTrie<u32> {
        let mut trie = TokenTrie::new();
        for (idx, key) in keys.iter().enumerate() {
            trie.insert(key.as_bytes(), idx as u32);
        }
        trie
    }

    #[test]
    fn test_insert_get() {
        let mut trie = build_trie(&["a", "ab", "abc", "b"]);
        assert_eq!(trie.len(), 4);
        assert!(!trie.is_empty());

        assert_eq!(trie.get(b"a"), Some(0));
        assert_eq!(trie.get(b"ab"), Some(1));
        assert_eq!(trie.get(b"abc"), Some(2));
        assert_eq!(trie.get(b"b"), Some(3));
        assert_eq!(trie.get(b"abcd"), None);
        assert_eq!(trie.get(b"c"), None);
        assert_eq!(trie.get(b""), None);

        assert_eq!(trie.insert(b"ab", 7), Some(1));
        assert_eq!(trie.len(), 4);
        assert_eq!(trie.get(b"ab"), Some(7));
    }

    #[test]
    fn test_edges_stay_sorted() {
        let trie = build_trie(&["z", "a", "m", "b", "y"]);
        assert_eq!(trie.get(b"z"), Some(0));
        assert_eq!(trie.get(b"a"), Some(1));
        assert_eq!(trie.get(b"m"), Some(2));
        assert_eq!(trie.get(b"b"), Some(3));
        assert_eq!(trie.get(b"y"), Some(4));

        let root_edges: Vec<u8> = trie.nodes[ROOT].edges.iter().map(|&(b, _)| b).collect();
        assert_eq!(root_edges, b"abmyz".to_vec());
    }

    #[test]
    fn test_prefix_matches() {
        let trie = build_trie(&["un", "una", "unaff", "unaffable", "x"]);

        assert_eq!(
            trie.common_prefix_matches(b"unaffable!", 16),
            vec![(2, 0), (3, 1), (5, 2), (9, 3)]
        );
        assert_eq!(trie.common_prefix_matches(b"unaffable!", 2), vec![(2, 0), (3, 1)]);
        assert!(trie.common_prefix_matches(b"u", 16).is_empty());
        assert!(trie.common_prefix_matches(b"", 16).is_empty());

        assert_eq!(trie.longest_prefix_match(b"unaffab"), Some((5, 2)));
        assert_eq!(trie.longest_prefix_match(b"xyz"), Some((1, 4)));
        assert_eq!(trie.longest_prefix_match(b"yz"), None);
    }

    #[test]
    fn test_multibyte_keys() {
        let trie = build_trie(&["计算", "计算机", "##机"]);

        let text = "计算机科学";
        assert_eq!(
            trie.longest_prefix_match(text.as_bytes()),
            Some(("计算机".len(), 1))
        );
        assert_eq!(
            trie.common_prefix_matches(text.as_bytes(), 8),
            vec![("计算".len(), 0), ("计算机".len(), 1)]
        );
    }
}
