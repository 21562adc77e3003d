use std::path::Path;

use crate::{
    errors::WPResult,
    segmentation::basic_tokenizer::DEFAULT_MAX_PREFIX_MATCHES,
    tokenizer::WordPieceTokenizer,
    types::TokenType,
    vocab::{SpecialTokens, TokenDict, io::load_token_dict_path},
    wordpiece::{
        OffsetMode,
        wordpiece_splitter::{DEFAULT_CONTINUATION_PREFIX, DEFAULT_MAX_INPUT_CHARS_PER_WORD},
    },
};

/// Options for configuring a [`WordPieceTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Fold case and strip accents before matching.
    pub do_lower_case: bool,

    /// Report offsets in codepoints, rather than bytes.
    pub codepoint_level: bool,

    /// Basic tokens longer than this (in bytes) skip subword search.
    pub max_input_chars_per_word: usize,

    /// Cap on simultaneous special-token prefix matches at one position.
    pub max_prefix_matches: usize,

    /// Marker prepended to non-initial subword pieces.
    pub continuation_prefix: String,

    /// The named special tokens.
    pub special_tokens: SpecialTokens,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            do_lower_case: true,
            codepoint_level: false,
            max_input_chars_per_word: DEFAULT_MAX_INPUT_CHARS_PER_WORD,
            max_prefix_matches: DEFAULT_MAX_PREFIX_MATCHES,
            continuation_prefix: DEFAULT_CONTINUATION_PREFIX.to_string(),
            special_tokens: SpecialTokens::default(),
        }
    }
}

impl TokenizerOptions {
    /// Set whether case is folded and accents stripped.
    pub fn with_do_lower_case(
        mut self,
        do_lower_case: bool,
    ) -> Self {
        self.do_lower_case = do_lower_case;
        self
    }

    /// Set whether offsets are reported in codepoints.
    pub fn with_codepoint_level(
        mut self,
        codepoint_level: bool,
    ) -> Self {
        self.codepoint_level = codepoint_level;
        self
    }

    /// Set the maximum basic-token byte length eligible for subword search.
    pub fn with_max_input_chars_per_word(
        mut self,
        max_input_chars_per_word: usize,
    ) -> Self {
        self.max_input_chars_per_word = max_input_chars_per_word;
        self
    }

    /// Set the cap on special-token prefix matches.
    pub fn with_max_prefix_matches(
        mut self,
        max_prefix_matches: usize,
    ) -> Self {
        self.max_prefix_matches = max_prefix_matches;
        self
    }

    /// Set the continuation marker.
    pub fn with_continuation_prefix<S: Into<String>>(
        mut self,
        continuation_prefix: S,
    ) -> Self {
        self.continuation_prefix = continuation_prefix.into();
        self
    }

    /// Set the named special tokens.
    pub fn with_special_tokens(
        mut self,
        special_tokens: SpecialTokens,
    ) -> Self {
        self.special_tokens = special_tokens;
        self
    }

    /// The offset unit selected by `codepoint_level`.
    pub fn offset_mode(&self) -> OffsetMode {
        OffsetMode::from_codepoint_level(self.codepoint_level)
    }

    /// Build a [`WordPieceTokenizer`] for the given vocab.
    pub fn build<T: TokenType>(
        &self,
        vocab: TokenDict<T>,
    ) -> WPResult<WordPieceTokenizer<T>> {
        WordPieceTokenizer::new(vocab, self.clone())
    }

    /// Load a vocabulary file and build a [`WordPieceTokenizer`] for it.
    pub fn load<T, P>(
        &self,
        path: P,
    ) -> WPResult<WordPieceTokenizer<T>>
    where
        T: TokenType,
        P: AsRef<Path>,
    {
        self.build(load_token_dict_path(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TokenizerOptions::default();
        assert!(options.do_lower_case);
        assert!(!options.codepoint_level);
        assert_eq!(options.max_input_chars_per_word, 100);
        assert_eq!(options.max_prefix_matches, 512);
        assert_eq!(options.continuation_prefix, "##");
        assert_eq!(options.special_tokens, SpecialTokens::default());
        assert_eq!(options.offset_mode(), OffsetMode::Byte);
    }

    #[test]
    fn test_builders() {
        let options = TokenizerOptions::default()
            .with_do_lower_case(false)
            .with_codepoint_level(true)
            .with_max_input_chars_per_word(20)
            .with_max_prefix_matches(8)
            .with_continuation_prefix("@@")
            .with_special_tokens(SpecialTokens::default().with_unk("<unk>"));

        assert!(!options.do_lower_case);
        assert_eq!(options.offset_mode(), OffsetMode::Codepoint);
        assert_eq!(options.max_input_chars_per_word, 20);
        assert_eq!(options.max_prefix_matches, 8);
        assert_eq!(options.continuation_prefix, "@@");
        assert_eq!(options.special_tokens.unk, "<unk>");
    }
}
