//! # Text Segmentation
//!
//! Pre-segmentation of raw text into [`BasicToken`]s:
//! * [`char_class`] - per-codepoint classification;
//! * [`normalize`] - case folding and accent stripping;
//! * [`BasicTokenizer`] - the segmenting scan, with atomic special tokens.

pub mod basic_tokenizer;
pub mod char_class;
pub mod normalize;

#[doc(inline)]
pub use basic_tokenizer::{BasicToken, BasicTokenizer};
#[doc(inline)]
pub use char_class::CharClass;
