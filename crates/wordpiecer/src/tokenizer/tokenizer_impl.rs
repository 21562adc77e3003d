use std::path::Path;

use crate::{
    concurrency::{parallel_map, resolve_num_threads},
    encoders::{BatchEncodeOptions, BatchEncoding, EncodeOptions, Encoding},
    errors::WPResult,
    segmentation::{BasicToken, BasicTokenizer},
    tokenizer::TokenizerOptions,
    types::{Offset, TokenType},
    vocab::{
        SpecialIds,
        TokenDict,
        io::load_token_dict_path,
        size_hints::EXPECTED_BYTES_PER_TOKEN,
    },
    wordpiece::{OffsetMapper, WordPieceSplitter},
};

/// A BERT-style WordPiece tokenizer.
///
/// Layers vocabulary subword splitting and encoding over a
/// [`BasicTokenizer`]; all read operations take `&self` and are safe to
/// call concurrently. Mutation (`insert`, `add_special_token`) takes
/// `&mut self`, so it can never race an encode on the same instance.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `tokenizer`.
#[derive(Debug, Clone, PartialEq)]
pub struct WordPieceTokenizer<T: TokenType> {
    options: TokenizerOptions,
    basic: BasicTokenizer,
    wordpiece: WordPieceSplitter<T>,
    special_ids: SpecialIds<T>,
}

impl<T: TokenType> WordPieceTokenizer<T> {
    /// Build a tokenizer over a vocabulary.
    ///
    /// ## Errors
    /// * [`MissingSpecialToken`](crate::errors::WordPiecerError::MissingSpecialToken)
    ///   if any of the named special tokens is not a vocabulary entry.
    /// * [`InvalidOptions`](crate::errors::WordPiecerError::InvalidOptions)
    ///   if the continuation prefix is empty.
    pub fn new(
        vocab: TokenDict<T>,
        options: TokenizerOptions,
    ) -> WPResult<Self> {
        let special_ids = SpecialIds::resolve(&options.special_tokens, &vocab)?;

        let basic = BasicTokenizer::new(options.do_lower_case, &options.special_tokens)?
            .with_max_prefix_matches(options.max_prefix_matches);

        let wordpiece = WordPieceSplitter::new(vocab, &options.special_tokens.unk)?
            .with_continuation_prefix(options.continuation_prefix.as_str())?
            .with_max_input_chars_per_word(options.max_input_chars_per_word);

        log::info!(
            "built wordpiece tokenizer: {} tokens, do_lower_case={}, offsets={:?}",
            wordpiece.vocab().len(),
            options.do_lower_case,
            options.offset_mode(),
        );

        Ok(Self {
            options,
            basic,
            wordpiece,
            special_ids,
        })
    }

    /// Build a tokenizer over an ordered token list; ids are list positions.
    pub fn from_tokens<I, S>(
        tokens: I,
        options: TokenizerOptions,
    ) -> WPResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(TokenDict::from_tokens(tokens)?, options)
    }

    /// Load a vocabulary file and build a tokenizer over it.
    ///
    /// ## Errors
    /// [`VocabRead`](crate::errors::WordPiecerError::VocabRead) if the file
    /// can not be opened or read; plus the errors of [`new`](Self::new).
    pub fn from_vocab_path<P: AsRef<Path>>(
        path: P,
        options: TokenizerOptions,
    ) -> WPResult<Self> {
        Self::new(load_token_dict_path(path)?, options)
    }

    /// Get the options this tokenizer was built with.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Get the underlying [`BasicTokenizer`].
    pub fn basic_tokenizer(&self) -> &BasicTokenizer {
        &self.basic
    }

    /// Get the underlying [`WordPieceSplitter`].
    pub fn wordpiece(&self) -> &WordPieceSplitter<T> {
        &self.wordpiece
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &TokenDict<T> {
        self.wordpiece.vocab()
    }

    /// Get the resolved special-token ids.
    pub fn special_ids(&self) -> &SpecialIds<T> {
        &self.special_ids
    }

    /// The vocabulary size.
    pub fn size(&self) -> usize {
        self.vocab().len()
    }

    /// Padding id.
    pub fn pad_id(&self) -> T {
        self.special_ids.pad
    }

    /// Sequence-start id.
    pub fn cls_id(&self) -> T {
        self.special_ids.cls
    }

    /// Separator id.
    pub fn sep_id(&self) -> T {
        self.special_ids.sep
    }

    /// Out-of-vocabulary id.
    pub fn unk_id(&self) -> T {
        self.special_ids.unk
    }

    /// Mask id.
    pub fn mask_id(&self) -> T {
        self.special_ids.mask
    }

    /// Padding token.
    pub fn pad_token(&self) -> &str {
        &self.options.special_tokens.pad
    }

    /// Sequence-start token.
    pub fn cls_token(&self) -> &str {
        &self.options.special_tokens.cls
    }

    /// Separator token.
    pub fn sep_token(&self) -> &str {
        &self.options.special_tokens.sep
    }

    /// Out-of-vocabulary token.
    pub fn unk_token(&self) -> &str {
        &self.options.special_tokens.unk
    }

    /// Mask token.
    pub fn mask_token(&self) -> &str {
        &self.options.special_tokens.mask
    }

    /// Is `token` a vocabulary entry?
    pub fn count(
        &self,
        token: &str,
    ) -> bool {
        self.vocab().contains(token)
    }

    /// The id of `token`; the UNK id if it is not a vocabulary entry.
    pub fn get_id(
        &self,
        token: &str,
    ) -> T {
        self.vocab().exact_match(token).unwrap_or(self.special_ids.unk)
    }

    /// The token string of `id`, if `id` is in the vocabulary.
    pub fn get_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.vocab().get_token(id)
    }

    /// Add a token to the vocabulary; idempotent.
    ///
    /// ## Returns
    /// The (new or existing) id of the token.
    pub fn insert(
        &mut self,
        token: &str,
    ) -> WPResult<T> {
        let before = self.size();
        let id = self.wordpiece.vocab_mut().insert(token)?;
        if self.size() != before {
            log::debug!("inserted vocabulary token {token:?} -> {id}");
        }
        Ok(id)
    }

    /// Add tokens to the vocabulary; see [`insert`](Self::insert).
    pub fn insert_all<I, S>(
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

    /// Add a special (never split) token; idempotent.
    ///
    /// Special tokens which are not also vocabulary entries encode as UNK.
    pub fn add_special_token(
        &mut self,
        token: &str,
    ) -> WPResult<()> {
        self.basic.add_special_token(token)
    }

    /// Add special tokens; see [`add_special_token`](Self::add_special_token).
    pub fn add_special_tokens<I, S>(
        &mut self,
        tokens: I,
    ) -> WPResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.basic.add_special_tokens(tokens)
    }

    /// Segment text into basic tokens, without subword splitting.
    pub fn basic_tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.basic.basic_tokenize(text)
    }

    /// Run the full pipeline, calling `f(token, id, offset)` per final token.
    ///
    /// Offsets are in the configured [`OffsetMode`](crate::wordpiece::OffsetMode),
    /// describe the source `text`, and are strictly ordered.
    pub fn for_each_token<F>(
        &self,
        text: &str,
        f: &mut F,
    ) where
        F: FnMut(&str, T, Offset),
    {
        let mapper = OffsetMapper::new(self.options.offset_mode(), text);
        for token in self.basic.segment(text) {
            self.split_basic_token(&token, &mapper, f);
        }
    }

    #[inline]
    fn split_basic_token<F>(
        &self,
        token: &BasicToken,
        mapper: &OffsetMapper,
        f: &mut F,
    ) where
        F: FnMut(&str, T, Offset),
    {
        let is_special = self.basic.is_special(&token.text);
        self.wordpiece
            .for_each_piece(token, is_special, &mut |piece, id, range| {
                f(piece, id, mapper.map(range))
            });
    }

    /// Tokenize text into final WordPiece tokens.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let mut tokens = Vec::with_capacity(Self::capacity_hint(text));
        self.for_each_token(text, &mut |token, _, _| tokens.push(token.to_string()));
        tokens
    }

    /// Tokenize text into final WordPiece tokens and their source offsets.
    pub fn tokenize_with_offsets(
        &self,
        text: &str,
    ) -> (Vec<String>, Vec<Offset>) {
        let capacity = Self::capacity_hint(text);
        let mut tokens = Vec::with_capacity(capacity);
        let mut offsets = Vec::with_capacity(capacity);
        self.for_each_token(text, &mut |token, _, offset| {
            tokens.push(token.to_string());
            offsets.push(offset);
        });
        (tokens, offsets)
    }

    /// Map token strings to ids; unknown tokens map to the UNK id.
    ///
    /// With `add_cls_sep`, the ids are wrapped in ``[CLS] ... [SEP]``.
    pub fn convert_tokens_to_ids<S: AsRef<str>>(
        &self,
        tokens: &[S],
        add_cls_sep: bool,
    ) -> Vec<T> {
        let mut ids = Vec::with_capacity(tokens.len() + 2);
        if add_cls_sep {
            ids.push(self.special_ids.cls);
        }
        ids.extend(tokens.iter().map(|token| self.get_id(token.as_ref())));
        if add_cls_sep {
            ids.push(self.special_ids.sep);
        }
        ids
    }

    /// Map ids to token strings; ids outside the vocabulary map to the UNK token.
    pub fn convert_ids_to_tokens(
        &self,
        ids: &[T],
    ) -> Vec<String> {
        ids.iter()
            .map(|&id| self.get_token(id).unwrap_or(self.unk_token()).to_string())
            .collect()
    }

    /// Encode one text.
    ///
    /// With `options.truncation`, ``len(ids) <= options.max_length``; and when
    /// also wrapping, the last id is always the SEP id.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode(
        &self,
        text: &str,
        options: &EncodeOptions,
    ) -> Encoding<T> {
        let capacity = Self::capacity_hint(text);
        let mut ids = Vec::with_capacity(capacity + 2);
        let mut offsets = Vec::with_capacity(capacity);

        if options.add_cls_sep {
            ids.push(self.special_ids.cls);
        }
        self.for_each_token(text, &mut |_, id, offset| {
            ids.push(id);
            offsets.push(offset);
        });
        if options.add_cls_sep {
            ids.push(self.special_ids.sep);
        }

        let mut encoding = Encoding::new(ids, offsets);
        if options.truncation {
            let sep_id = options.add_cls_sep.then_some(self.special_ids.sep);
            encoding.truncate(options.max_length, sep_id);
        }
        encoding
    }

    /// Encode a batch of texts.
    ///
    /// Row `i` of the result is the encoding of `texts[i]`, regardless of
    /// the worker count.
    ///
    /// ## Errors
    /// [`External`](crate::errors::WordPiecerError::External) if the worker
    /// pool can not be built.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, texts)))]
    pub fn encode_batch<S>(
        &self,
        texts: &[S],
        options: &BatchEncodeOptions,
    ) -> WPResult<BatchEncoding<T>>
    where
        S: AsRef<str> + Sync,
    {
        let num_threads = resolve_num_threads(options.num_threads, texts.len());
        log::debug!(
            "encoding batch of {} texts on {} workers",
            texts.len(),
            num_threads
        );

        let mut encodings = parallel_map(texts, num_threads, |text| {
            self.encode(text.as_ref(), &options.encode)
        })?;

        let longest = encodings.iter().map(Encoding::len).max().unwrap_or(0);
        if let Some(target) = options.padding_target(longest) {
            BatchEncoding::pad_encodings(&mut encodings, target, self.special_ids.pad);
        }

        Ok(encodings.into())
    }

    fn capacity_hint(text: &str) -> usize {
        (text.len() as f32 / EXPECTED_BYTES_PER_TOKEN) as usize
    }
}
