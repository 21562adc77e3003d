//! # WordPiece
//!
//! Subword splitting of basic tokens, and offset unit conversion.

pub mod offset_map;
pub mod wordpiece_splitter;

#[doc(inline)]
pub use offset_map::{CodepointIndex, OffsetMapper, OffsetMode};
#[doc(inline)]
pub use wordpiece_splitter::WordPieceSplitter;
