//! # Tokenizer
//!
//! [`WordPieceTokenizer`] composes segmentation, subword splitting, and
//! encoding over one vocabulary; [`TokenizerOptions`] configures it.
//!
//! ## Example
//!
//! ```rust
//! use wordpiecer::{
//!     encoders::EncodeOptions,
//!     tokenizer::{TokenizerOptions, WordPieceTokenizer},
//! };
//!
//! let vocab = ["[PAD]", "[CLS]", "[SEP]", "[UNK]", "[MASK]", "play", "##ing", "hello"];
//! let tokenizer: WordPieceTokenizer<u32> =
//!     WordPieceTokenizer::from_tokens(vocab, TokenizerOptions::default()).unwrap();
//!
//! assert_eq!(tokenizer.tokenize("Playing hello"), vec!["play", "##ing", "hello"]);
//!
//! let encoding = tokenizer.encode("Playing hello", &EncodeOptions::default());
//! assert_eq!(encoding.ids, vec![1, 5, 6, 7, 2]);
//! assert_eq!(encoding.offsets, vec![0..4, 4..7, 8..13]);
//! ```

mod tokenizer_impl;
mod tokenizer_options;

#[doc(inline)]
pub use tokenizer_impl::*;
#[doc(inline)]
pub use tokenizer_options::*;
