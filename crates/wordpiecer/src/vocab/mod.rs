//! # Vocabulary
//!
//! This module provides the dictionary structures and vocabulary io.
//!
//! * [`TokenTrie`] - a byte-level prefix trie ``{ Vec<u8> -> T }``.
//! * [`TokenDict`] - an ordered ``{ String <-> T }`` dictionary over a trie;
//!   used both for the model vocabulary and for the special-token set.
//! * [`SpecialTokens`] / [`SpecialIds`] - the named PAD/CLS/SEP/UNK/MASK tokens.
pub mod io;

pub mod size_hints;
pub mod special_tokens;
pub mod token_dict;
pub mod token_trie;

#[doc(inline)]
pub use special_tokens::{SpecialIds, SpecialTokens};
#[doc(inline)]
pub use token_dict::TokenDict;
#[doc(inline)]
pub use token_trie::TokenTrie;
