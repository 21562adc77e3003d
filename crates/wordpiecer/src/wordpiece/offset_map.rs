//! # Offset Units

use core::ops::Range;

/// The unit of reported offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OffsetMode {
    /// Raw utf-8 byte positions.
    #[default]
    Byte,

    /// Unicode scalar value (codepoint) positions.
    Codepoint,
}

impl OffsetMode {
    /// Select the mode from a ``codepoint_level`` flag.
    pub fn from_codepoint_level(codepoint_level: bool) -> Self {
        if codepoint_level {
            Self::Codepoint
        } else {
            Self::Byte
        }
    }
}

/// A precomputed ``byte -> codepoint`` position index over one text.
///
/// Holds one entry per byte, plus one for ``text.len()``;
/// interior bytes of a multi-byte codepoint map to that codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointIndex {
    index: Vec<usize>,
}

impl CodepointIndex {
    /// Build the index for `text`.
    pub fn new(text: &str) -> Self {
        let mut index = Vec::with_capacity(text.len() + 1);
        let mut count = 0;
        for c in text.chars() {
            index.extend(core::iter::repeat_n(count, c.len_utf8()));
            count += 1;
        }
        index.push(count);
        Self { index }
    }

    /// The number of codepoints in the text.
    pub fn codepoint_len(&self) -> usize {
        self.index[self.index.len() - 1]
    }

    /// Convert a byte position to a codepoint position.
    #[inline]
    pub fn to_codepoint(
        &self,
        byte: usize,
    ) -> usize {
        self.index[byte]
    }

    /// Convert a byte range to a codepoint range.
    #[inline]
    pub fn convert(
        &self,
        range: Range<usize>,
    ) -> Range<usize> {
        self.to_codepoint(range.start)..self.to_codepoint(range.end)
    }
}

/// Converts source byte ranges into the configured [`OffsetMode`] for one text.
#[derive(Debug, Clone)]
pub enum OffsetMapper {
    /// Identity; byte offsets.
    Byte,

    /// Codepoint offsets through a [`CodepointIndex`].
    Codepoint(CodepointIndex),
}

impl OffsetMapper {
    /// Build a mapper for `text`.
    ///
    /// Only [`OffsetMode::Codepoint`] pays for an index.
    pub fn new(
        mode: OffsetMode,
        text: &str,
    ) -> Self {
        match mode {
            OffsetMode::Byte => Self::Byte,
            OffsetMode::Codepoint => Self::Codepoint(CodepointIndex::new(text)),
        }
    }

    /// Map a source byte range.
    #[inline]
    pub fn map(
        &self,
        range: Range<usize>,
    ) -> Range<usize> {
        match self {
            Self::Byte => range,
            Self::Codepoint(index) => index.convert(range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint_index() {
        let text = "aé计\u{1F600}b";
        let index = CodepointIndex::new(text);

        assert_eq!(index.codepoint_len(), 5);
        assert_eq!(index.to_codepoint(0), 0);
        assert_eq!(index.to_codepoint(1), 1);
        assert_eq!(index.to_codepoint(3), 2);
        assert_eq!(index.to_codepoint(6), 3);
        assert_eq!(index.to_codepoint(10), 4);
        assert_eq!(index.to_codepoint(11), 5);

        assert_eq!(index.convert(3..6), 2..3);
    }

    #[test]
    fn test_empty_index() {
        let index = CodepointIndex::new("");
        assert_eq!(index.codepoint_len(), 0);
        assert_eq!(index.convert(0..0), 0..0);
    }

    #[test]
    fn test_mapper() {
        let text = "计算 ab";
        assert_eq!(OffsetMapper::new(OffsetMode::Byte, text).map(7..9), 7..9);
        assert_eq!(
            OffsetMapper::new(OffsetMode::Codepoint, text).map(7..9),
            3..5
        );
        assert_eq!(OffsetMode::from_codepoint_level(true), OffsetMode::Codepoint);
        assert_eq!(OffsetMode::default(), OffsetMode::Byte);
    }
}
