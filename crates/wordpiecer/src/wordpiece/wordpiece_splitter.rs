//! # WordPiece Splitter
//!
//! Greedy longest-match-first subword segmentation of [`BasicToken`]s.

use core::ops::Range;

use crate::{
    errors::{WPResult, WordPiecerError},
    segmentation::BasicToken,
    types::TokenType,
    vocab::TokenDict,
};

/// Default continuation marker for non-initial pieces.
pub const DEFAULT_CONTINUATION_PREFIX: &str = "##";

/// Default maximum basic-token byte length eligible for subword search.
pub const DEFAULT_MAX_INPUT_CHARS_PER_WORD: usize = 100;

/// WordPiece subword splitter over a vocabulary [`TokenDict`].
///
/// Tokens which can not be fully covered by vocabulary pieces degrade to a
/// single UNK piece spanning the whole basic token.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `wordpiece`.
#[derive(Debug, Clone, PartialEq)]
pub struct WordPieceSplitter<T: TokenType> {
    vocab: TokenDict<T>,
    unk_token: String,
    unk_id: T,
    continuation_prefix: String,
    max_input_chars_per_word: usize,
}

impl<T: TokenType> WordPieceSplitter<T> {
    /// Create a new splitter.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary.
    /// * `unk_token` - The out-of-vocabulary token; must be a vocabulary entry.
    pub fn new(
        vocab: TokenDict<T>,
        unk_token: &str,
    ) -> WPResult<Self> {
        let unk_id = vocab
            .exact_match(unk_token)
            .ok_or_else(|| WordPiecerError::MissingSpecialToken {
                name: "unk",
                token: unk_token.to_string(),
            })?;

        Ok(Self {
            vocab,
            unk_token: unk_token.to_string(),
            unk_id,
            continuation_prefix: DEFAULT_CONTINUATION_PREFIX.to_string(),
            max_input_chars_per_word: DEFAULT_MAX_INPUT_CHARS_PER_WORD,
        })
    }

    /// Set the continuation marker.
    ///
    /// ## Errors
    /// [`WordPiecerError::InvalidOptions`] if the prefix is empty.
    pub fn with_continuation_prefix<S: Into<String>>(
        mut self,
        prefix: S,
    ) -> WPResult<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(WordPiecerError::InvalidOptions(
                "continuation prefix must be non-empty".to_string(),
            ));
        }
        self.continuation_prefix = prefix;
        Ok(self)
    }

    /// Set the maximum basic-token byte length eligible for subword search.
    pub fn with_max_input_chars_per_word(
        mut self,
        max_input_chars_per_word: usize,
    ) -> Self {
        self.max_input_chars_per_word = max_input_chars_per_word;
        self
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &TokenDict<T> {
        &self.vocab
    }

    /// Get the vocabulary, mutably.
    ///
    /// Entries can be added, but never removed or renumbered.
    pub fn vocab_mut(&mut self) -> &mut TokenDict<T> {
        &mut self.vocab
    }

    /// Get the out-of-vocabulary token.
    pub fn unk_token(&self) -> &str {
        &self.unk_token
    }

    /// Get the out-of-vocabulary id.
    pub fn unk_id(&self) -> T {
        self.unk_id
    }

    /// Get the continuation marker.
    pub fn continuation_prefix(&self) -> &str {
        &self.continuation_prefix
    }

    /// Get the maximum basic-token byte length eligible for subword search.
    pub fn max_input_chars_per_word(&self) -> usize {
        self.max_input_chars_per_word
    }

    /// Greedily segment `text` into ``(text_range, id)`` pieces.
    ///
    /// ## Returns
    /// `false` if some suffix has no vocabulary piece; `pieces` is then partial.
    fn greedy_split(
        &self,
        text: &str,
        pieces: &mut Vec<(Range<usize>, T)>,
    ) -> bool {
        let prefix_len = self.continuation_prefix.len();
        let mut candidate = String::new();

        let mut cursor = 0;
        while cursor < text.len() {
            let suffix = &text[cursor..];

            let accepted = if cursor == 0 {
                self.vocab.trie().longest_prefix_match(suffix.as_bytes())
            } else {
                candidate.clear();
                candidate.push_str(&self.continuation_prefix);
                candidate.push_str(suffix);

                match self.vocab.trie().longest_prefix_match(candidate.as_bytes()) {
                    Some((len, id)) if len > prefix_len => Some((len - prefix_len, id)),
                    _ => None,
                }
            };

            let Some((len, id)) = accepted else {
                return false;
            };
            pieces.push((cursor..cursor + len, id));
            cursor += len;
        }
        true
    }

    /// Split one basic token, calling `f(piece, id, source_byte_range)` per piece.
    ///
    /// ## Arguments
    /// * `token` - The basic token.
    /// * `is_special` - Is the token text a special token? Specials are never split.
    /// * `f` - The piece sink.
    pub fn for_each_piece<F>(
        &self,
        token: &BasicToken,
        is_special: bool,
        f: &mut F,
    ) where
        F: FnMut(&str, T, Range<usize>),
    {
        let text = token.text.as_str();

        if is_special || text.len() > self.max_input_chars_per_word {
            let id = self.vocab.exact_match(text).unwrap_or(self.unk_id);
            f(text, id, token.span.clone());
            return;
        }
        if let Some(id) = self.vocab.exact_match(text) {
            f(text, id, token.span.clone());
            return;
        }

        let mut pieces = Vec::new();
        if !self.greedy_split(text, &mut pieces) {
            f(&self.unk_token, self.unk_id, token.span.clone());
            return;
        }

        let mut buf = String::new();
        for (range, id) in pieces {
            let source = token.source_range(range.clone());
            if range.start == 0 {
                f(&text[range], id, source);
            } else {
                buf.clear();
                buf.push_str(&self.continuation_prefix);
                buf.push_str(&text[range]);
                f(&buf, id, source);
            }
        }
    }

    /// Split one basic token into owned ``(piece, id, source_byte_range)`` triples.
    pub fn split(
        &self,
        token: &BasicToken,
        is_special: bool,
    ) -> Vec<(String, T, Range<usize>)> {
        let mut pieces = Vec::new();
        self.for_each_piece(token, is_special, &mut |piece, id, range| {
            pieces.push((piece.to_string(), id, range));
        });
        pieces
    }
}
