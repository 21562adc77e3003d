//! # Encode Options
//!
//! Options for [`encode`](crate::tokenizer::WordPieceTokenizer::encode)
//! and [`encode_batch`](crate::tokenizer::WordPieceTokenizer::encode_batch).

/// Default maximum encoded sequence length.
pub const DEFAULT_MAX_LENGTH: usize = 512;

/// Options for encoding a single text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Wrap the sequence in ``[CLS] ... [SEP]``.
    pub add_cls_sep: bool,

    /// Clip sequences longer than `max_length`.
    pub truncation: bool,

    /// The truncation (and optional padding) length.
    pub max_length: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            add_cls_sep: true,
            truncation: true,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl EncodeOptions {
    /// Set whether to wrap the sequence in ``[CLS] ... [SEP]``.
    pub fn with_add_cls_sep(
        mut self,
        add_cls_sep: bool,
    ) -> Self {
        self.add_cls_sep = add_cls_sep;
        self
    }

    /// Set whether to clip sequences longer than `max_length`.
    pub fn with_truncation(
        mut self,
        truncation: bool,
    ) -> Self {
        self.truncation = truncation;
        self
    }

    /// Set the truncation length.
    pub fn with_max_length(
        mut self,
        max_length: usize,
    ) -> Self {
        self.max_length = max_length;
        self
    }
}

/// Options for encoding a batch of texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchEncodeOptions {
    /// Per-text encode options.
    pub encode: EncodeOptions,

    /// Worker count; `0` selects the available parallelism.
    pub num_threads: usize,

    /// Pad rows to a common length.
    pub padding: bool,

    /// Pad to at least `encode.max_length`, rather than the longest row.
    pub padding_to_max_length: bool,
}

impl Default for BatchEncodeOptions {
    fn default() -> Self {
        Self {
            encode: EncodeOptions::default(),
            num_threads: 1,
            padding: true,
            padding_to_max_length: false,
        }
    }
}

impl From<EncodeOptions> for BatchEncodeOptions {
    fn from(encode: EncodeOptions) -> Self {
        Self {
            encode,
            ..Default::default()
        }
    }
}

impl BatchEncodeOptions {
    /// Set the per-text encode options.
    pub fn with_encode(
        mut self,
        encode: EncodeOptions,
    ) -> Self {
        self.encode = encode;
        self
    }

    /// Set the worker count; `0` selects the available parallelism.
    pub fn with_num_threads(
        mut self,
        num_threads: usize,
    ) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Set whether rows are padded to a common length.
    pub fn with_padding(
        mut self,
        padding: bool,
    ) -> Self {
        self.padding = padding;
        self
    }

    /// Set whether padding extends to at least `encode.max_length`.
    pub fn with_padding_to_max_length(
        mut self,
        padding_to_max_length: bool,
    ) -> Self {
        self.padding_to_max_length = padding_to_max_length;
        self
    }

    /// The padded row length for a batch whose longest row is `longest`.
    ///
    /// `None` when padding is disabled.
    pub fn padding_target(
        &self,
        longest: usize,
    ) -> Option<usize> {
        if !self.padding {
            return None;
        }
        Some(if self.padding_to_max_length {
            longest.max(self.encode.max_length)
        } else {
            longest
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EncodeOptions::default();
        assert!(options.add_cls_sep);
        assert!(options.truncation);
        assert_eq!(options.max_length, 512);

        let batch = BatchEncodeOptions::default();
        assert_eq!(batch.encode, options);
        assert_eq!(batch.num_threads, 1);
        assert!(batch.padding);
        assert!(!batch.padding_to_max_length);
    }

    #[test]
    fn test_padding_target() {
        let options = BatchEncodeOptions::from(EncodeOptions::default().with_max_length(10));
        assert_eq!(options.padding_target(4), Some(4));
        assert_eq!(
            options.with_padding_to_max_length(true).padding_target(4),
            Some(10)
        );
        assert_eq!(
            options.with_padding_to_max_length(true).padding_target(12),
            Some(12)
        );
        assert_eq!(options.with_padding(false).padding_target(4), None);
    }
}
