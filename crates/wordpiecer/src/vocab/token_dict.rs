//! # Token Dictionary ``{ String <-> T }``

use crate::{
    errors::{WPResult, WordPiecerError},
    types::TokenType,
    vocab::token_trie::{PrefixMatches, TokenTrie},
};

/// An ordered, growable ``{ String <-> T }`` dictionary backed by a [`TokenTrie`].
///
/// Ids are dense and assigned in insertion order: the n-th distinct token
/// inserted receives id `n`. Entries are never removed or renumbered.
///
/// Queries borrow `&self` and never mutate, so a dictionary may be shared
/// across threads for reading; [`insert`](Self::insert) takes `&mut self`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDict<T: TokenType> {
    trie: TokenTrie<T>,
    keys: Vec<String>,
}

impl<T: TokenType> Default for TokenDict<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenType> TokenDict<T> {
    /// Create a new, empty dictionary.
    pub fn new() -> Self {
        Self {
            trie: TokenTrie::new(),
            keys: Vec::new(),
        }
    }

    /// Build a dictionary from an ordered token stream.
    ///
    /// Duplicate tokens keep the id of their first occurrence.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens, in id order.
    pub fn from_tokens<I, S>(tokens: I) -> WPResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        dict.extend(tokens)?;
        Ok(dict)
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Is the dictionary empty?
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Get the underlying trie.
    pub fn trie(&self) -> &TokenTrie<T> {
        &self.trie
    }

    /// Iterate over the entries in id order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Look up the id of an exact token.
    pub fn exact_match(
        &self,
        token: &str,
    ) -> Option<T> {
        self.trie.get(token.as_bytes())
    }

    /// Is `token` an entry?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.exact_match(token).is_some()
    }

    /// Get the token string for an id.
    pub fn get_token(
        &self,
        id: T,
    ) -> Option<&str> {
        id.to_usize()
            .and_then(|idx| self.keys.get(idx))
            .map(String::as_str)
    }

    /// Insert a token.
    ///
    /// Idempotent: inserting a present token returns its existing id
    /// and leaves the dictionary unchanged.
    ///
    /// ## Arguments
    /// * `token` - The token to insert.
    ///
    /// ## Returns
    /// The id of the token.
    pub fn insert(
        &mut self,
        token: &str,
    ) -> WPResult<T> {
        if token.is_empty() {
            return Err(WordPiecerError::EmptyToken);
        }
        if let Some(id) = self.exact_match(token) {
            return Ok(id);
        }

        let size = self.keys.len();
        let id = T::from_usize(size).ok_or(WordPiecerError::VocabSizeOverflow { size: size + 1 })?;

        self.trie.insert(token.as_bytes(), id);
        self.keys.push(token.to_string());
        Ok(id)
    }

    /// Insert every token from a stream; see [`insert`](Self::insert).
    pub fn extend<I, S>(
        &mut self,
        tokens: I,
    ) -> WPResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.insert(token.as_ref())?;
        }
        Ok(())
    }

    /// Iterate over every entry which is a prefix of `text`, shortest first.
    ///
    /// Yields ``(prefix_len, id)``.
    pub fn prefix_matches<'a>(
        &'a self,
        text: &'a str,
    ) -> PrefixMatches<'a, T> {
        self.trie.prefix_matches(text.as_bytes())
    }

    /// Collect up to `cap` entries which are prefixes of `text`, shortest first.
    ///
    /// ## Arguments
    /// * `text` - The text suffix to match against.
    /// * `cap` - The maximum number of matches to return.
    ///
    /// ## Returns
    /// ``(matched_str, id)`` pairs; each `matched_str` is a prefix slice of `text`.
    pub fn common_prefix_matches<'a>(
        &self,
        text: &'a str,
        cap: usize,
    ) -> Vec<(&'a str, T)> {
        // Entries are valid utf-8; so a byte-prefix match ends on a char boundary.
        self.trie
            .prefix_matches(text.as_bytes())
            .take(cap)
            .map(|(len, id)| (&text[..len], id))
            .collect()
    }

    /// Find the longest entry which is a prefix of `text`.
    ///
    /// ## Returns
    /// ``Some((matched_str, id))``, or `None` when no entry matches.
    pub fn longest_prefix_match<'a>(
        &self,
        text: &'a str,
    ) -> Option<(&'a str, T)> {
        self.trie
            .longest_prefix_match(text.as_bytes())
            .map(|(len, id)| (&text[..len], id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_insertion_order() {
        type T = u32;
        let dict: TokenDict<T> =
            TokenDict::from_tokens(["[PAD]", "zebra", "apple", "zebra", "mango"]).unwrap();

        assert_eq!(dict.len(), 4);
        assert_eq!(dict.exact_match("[PAD]"), Some(0));
        assert_eq!(dict.exact_match("zebra"), Some(1));
        assert_eq!(dict.exact_match("apple"), Some(2));
        assert_eq!(dict.exact_match("mango"), Some(3));
        assert_eq!(dict.exact_match("kiwi"), None);

        assert_eq!(dict.get_token(2), Some("apple"));
        assert_eq!(dict.get_token(4), None);

        assert_eq!(
            dict.tokens().collect::<Vec<_>>(),
            vec!["[PAD]", "zebra", "apple", "mango"]
        );
    }

    #[test]
    fn test_insert_is_idempotent() {
        type T = u32;
        let mut dict: TokenDict<T> = TokenDict::from_tokens(["a", "b"]).unwrap();

        assert_eq!(dict.insert("c").unwrap(), 2);
        assert_eq!(dict.len(), 3);

        assert_eq!(dict.insert("c").unwrap(), 2);
        assert_eq!(dict.insert("a").unwrap(), 0);
        assert_eq!(dict.len(), 3);

        assert!(matches!(dict.insert(""), Err(WordPiecerError::EmptyToken)));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_insert_overflow() {
        type T = u8;
        let mut dict: TokenDict<T> =
            TokenDict::from_tokens((0..256).map(|i| format!("t{i}"))).unwrap();
        assert_eq!(dict.len(), 256);

        assert!(matches!(
            dict.insert("one-too-many"),
            Err(WordPiecerError::VocabSizeOverflow { size: 257 })
        ));
        assert_eq!(dict.len(), 256);
    }

    #[test]
    fn test_prefix_queries() {
        type T = u32;
        let dict: TokenDict<T> =
            TokenDict::from_tokens(["play", "playing", "##ing", "[MASK]", "[MASK]x"]).unwrap();

        assert_eq!(
            dict.common_prefix_matches("playingly", 8),
            vec![("play", 0), ("playing", 1)]
        );
        assert_eq!(dict.common_prefix_matches("playingly", 1), vec![("play", 0)]);

        assert_eq!(dict.longest_prefix_match("playin"), Some(("play", 0)));
        assert_eq!(dict.longest_prefix_match("##ingo"), Some(("##ing", 2)));
        assert_eq!(dict.longest_prefix_match("##in"), None);
        assert_eq!(dict.longest_prefix_match("[MASK] x"), Some(("[MASK]", 3)));
    }
}
