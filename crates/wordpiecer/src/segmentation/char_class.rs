//! # Codepoint Classification

use unicode_general_category::{GeneralCategory, get_general_category};

/// How the segmentor treats a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letters and digits; appended to the open run.
    AsciiAlnum,

    /// ASCII whitespace and `Zs` space separators; closes the open run.
    Whitespace,

    /// Control, format, unassigned, private-use and U+FFFD; dropped, closes the open run.
    Control,

    /// ASCII symbols, CJK ideographs, and unicode punctuation.
    ///
    /// Closes the open run and is emitted as a one-codepoint token.
    Isolated,

    /// Everything else (letters, marks, symbols); normalized and appended to the open run.
    Word,
}

/// Decode the first unicode scalar value of `text`.
///
/// ## Returns
/// ``Some((char, byte_width))``, or `None` if `text` is empty.
#[inline]
pub fn decode_scalar(text: &str) -> Option<(char, usize)> {
    text.chars().next().map(|c| (c, c.len_utf8()))
}

/// Classify a codepoint.
pub fn classify(c: char) -> CharClass {
    if c.is_ascii() {
        return classify_ascii(c);
    }

    if is_cjk_ideograph(c) {
        return CharClass::Isolated;
    }
    if c == char::REPLACEMENT_CHARACTER {
        return CharClass::Control;
    }

    use GeneralCategory::*;
    match get_general_category(c) {
        ConnectorPunctuation | DashPunctuation | OpenPunctuation | ClosePunctuation
        | InitialPunctuation | FinalPunctuation | OtherPunctuation => CharClass::Isolated,
        SpaceSeparator => CharClass::Whitespace,
        Control | Format | Surrogate | PrivateUse | Unassigned => CharClass::Control,
        _ => CharClass::Word,
    }
}

#[inline]
fn classify_ascii(c: char) -> CharClass {
    match c {
        c if c.is_ascii_alphanumeric() => CharClass::AsciiAlnum,
        '\t' | '\n' | '\r' | ' ' => CharClass::Whitespace,
        c if c.is_ascii_control() => CharClass::Control,
        _ => CharClass::Isolated,
    }
}

/// Is `c` in one of the CJK unified ideograph blocks?
///
/// This is the block set BERT uses; it excludes Hangul, Hiragana and Katakana,
/// which are written with spaces or are handled as ordinary letters.
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF
            | 0x3400..=0x4DBF
            | 0x20000..=0x2A6DF
            | 0x2A700..=0x2B73F
            | 0x2B740..=0x2B81F
            | 0x2B820..=0x2CEAF
            | 0xF900..=0xFAFF
            | 0x2F800..=0x2FA1F
    )
}
