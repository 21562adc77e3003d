//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use wordpiecer::{
//!     tokenizer::{TokenizerOptions, WordPieceTokenizer},
//!     vocab::io::load_vocab_path,
//! };
//!
//! fn example() -> wordpiecer::errors::WPResult<WordPieceTokenizer<u32>> {
//!     let tokens = load_vocab_path("vocab.txt")?;
//!     WordPieceTokenizer::from_tokens(tokens, TokenizerOptions::default())
//! }
//! ```

mod line_vocab;

#[doc(inline)]
pub use line_vocab::*;
