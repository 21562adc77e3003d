//! # Encoders
//!
//! Encoded sequence containers, and the options which shape them.

mod encode_options;
mod encoding;

#[doc(inline)]
pub use encode_options::*;
#[doc(inline)]
pub use encoding::*;
