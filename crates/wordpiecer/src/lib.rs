//! # `wordpiecer` WordPiece Tokenizer
//!
//! This is a high-throughput BERT-style WordPiece tokenizer, with exact
//! source offsets for every emitted token.
//!
//! `wordpiecer` loads pretrained ``vocab.txt`` vocabularies unchanged; a
//! token's id is its position among the non-empty lines of the file.
//!
//! See:
//! * [`tokenizer`] for the end-to-end [`WordPieceTokenizer`].
//! * [`segmentation`] for unicode pre-segmentation into basic tokens.
//! * [`wordpiece`] for greedy subword splitting, and offset units.
//! * [`encoders`] for encodings, truncation, and padding.
//! * [`vocab`] for the trie dictionaries and vocabulary io.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``rayon``
//!
//! #### feature: ``rayon``
//!
//! Batch encoding fans out on a per-call ``rayon`` thread pool.
//! Without it, batches use ``std::thread::scope`` workers; the index
//! partitioning and the output order are the same either way.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Encoding Text
//!
//! ```rust,no_run
//! use wordpiecer::{
//!     BatchEncodeOptions,
//!     EncodeOptions,
//!     TokenizerOptions,
//!     WordPieceTokenizer,
//! };
//!
//! fn example() -> wordpiecer::WPResult<()> {
//!     let tokenizer: WordPieceTokenizer<u32> =
//!         WordPieceTokenizer::from_vocab_path("vocab.txt", TokenizerOptions::default())?;
//!
//!     let encoding = tokenizer.encode("Hello, world!", &EncodeOptions::default());
//!     println!("{:?} {:?}", encoding.ids, encoding.offsets);
//!
//!     let batch = tokenizer.encode_batch(
//!         &["first text", "and a second"],
//!         &BatchEncodeOptions::default().with_num_threads(0),
//!     )?;
//!     assert_eq!(batch.ids[0].len(), batch.ids[1].len());
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod concurrency;
pub mod encoders;
pub mod errors;
pub mod segmentation;
pub mod tokenizer;
pub mod types;
pub mod vocab;
pub mod wordpiece;

#[doc(inline)]
pub use encoders::{BatchEncodeOptions, BatchEncoding, EncodeOptions, Encoding};
#[doc(inline)]
pub use errors::{WPResult, WordPiecerError};
#[doc(inline)]
pub use tokenizer::{TokenizerOptions, WordPieceTokenizer};
#[doc(inline)]
pub use types::{Offset, TokenType};
