//! # Encodings
//!
//! Model-ready id sequences, with the aligned segment ids, attention mask,
//! and source offsets.

use crate::types::{Offset, TokenType};

/// One encoded sequence.
///
/// `ids`, `token_type_ids`, and `attention_mask` always have equal length.
/// `offsets` has one range per *content* token; ``[CLS]``, ``[SEP]``, and
/// padding have none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoding<T: TokenType> {
    /// Token ids.
    pub ids: Vec<T>,

    /// Segment ids; always `0` for single-sequence encoding.
    pub token_type_ids: Vec<T>,

    /// `1` for real tokens, `0` for padding.
    pub attention_mask: Vec<T>,

    /// Source offsets of the content tokens.
    pub offsets: Vec<Offset>,
}

impl<T: TokenType> Encoding<T> {
    /// Build an unpadded encoding from ids and content offsets.
    pub fn new(
        ids: Vec<T>,
        offsets: Vec<Offset>,
    ) -> Self {
        let len = ids.len();
        Self {
            ids,
            token_type_ids: vec![T::zero(); len],
            attention_mask: vec![T::one(); len],
            offsets,
        }
    }

    /// The sequence length, including specials and padding.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Is the sequence empty?
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Clip the sequence to `max_length`.
    ///
    /// With `sep_id`, the sequence is taken to be ``[CLS] ... [SEP]``-wrapped;
    /// the last kept position is overwritten with `sep_id`, and only
    /// ``max_length - 2`` content offsets survive.
    pub fn truncate(
        &mut self,
        max_length: usize,
        sep_id: Option<T>,
    ) {
        if self.ids.len() <= max_length {
            return;
        }

        self.ids.truncate(max_length);
        self.token_type_ids.truncate(max_length);
        self.attention_mask.truncate(max_length);

        match sep_id {
            Some(sep_id) => {
                self.offsets.truncate(max_length.saturating_sub(2));
                if let Some(last) = self.ids.last_mut() {
                    *last = sep_id;
                }
            }
            None => self.offsets.truncate(max_length),
        }
    }

    /// Right-pad the sequence to `len` with `pad_id`; offsets are untouched.
    pub fn pad_to(
        &mut self,
        len: usize,
        pad_id: T,
    ) {
        if self.ids.len() >= len {
            return;
        }
        self.ids.resize(len, pad_id);
        self.token_type_ids.resize(len, T::zero());
        self.attention_mask.resize(len, T::zero());
    }
}

/// A batch of encodings, stacked field-wise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchEncoding<T: TokenType> {
    /// Token ids, one row per input.
    pub ids: Vec<Vec<T>>,

    /// Segment ids, one row per input.
    pub token_type_ids: Vec<Vec<T>>,

    /// Attention masks, one row per input.
    pub attention_mask: Vec<Vec<T>>,

    /// Content offsets, one (unpadded) row per input.
    pub offsets: Vec<Vec<Offset>>,
}

impl<T: TokenType> BatchEncoding<T> {
    /// Pad every encoding to `len` with `pad_id`.
    pub fn pad_encodings(
        encodings: &mut [Encoding<T>],
        len: usize,
        pad_id: T,
    ) {
        for encoding in encodings {
            encoding.pad_to(len, pad_id);
        }
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Is the batch empty?
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Get row `index` as an [`Encoding`].
    pub fn get(
        &self,
        index: usize,
    ) -> Option<Encoding<T>> {
        Some(Encoding {
            ids: self.ids.get(index)?.clone(),
            token_type_ids: self.token_type_ids.get(index)?.clone(),
            attention_mask: self.attention_mask.get(index)?.clone(),
            offsets: self.offsets.get(index)?.clone(),
        })
    }
}

impl<T: TokenType> FromIterator<Encoding<T>> for BatchEncoding<T> {
    fn from_iter<I: IntoIterator<Item = Encoding<T>>>(iter: I) -> Self {
        let mut batch = Self::default();
        for encoding in iter {
            batch.ids.push(encoding.ids);
            batch.token_type_ids.push(encoding.token_type_ids);
            batch.attention_mask.push(encoding.attention_mask);
            batch.offsets.push(encoding.offsets);
        }
        batch
    }
}

impl<T: TokenType> From<Vec<Encoding<T>>> for BatchEncoding<T> {
    fn from(encodings: Vec<Encoding<T>>) -> Self {
        encodings.into_iter().collect()
    }
}
