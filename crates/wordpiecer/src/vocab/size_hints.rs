//! # Common Statistics

/// Expected bytes/basic-token ratio of mixed text.
pub const EXPECTED_BYTES_PER_WORD: f32 = 5.0;

/// Expected bytes/wordpiece ratio of mixed text.
pub const EXPECTED_BYTES_PER_TOKEN: f32 = 4.0;
