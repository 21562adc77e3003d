//! # Basic Tokenizer
//!
//! A single left-to-right scan which splits raw text into [`BasicToken`]s.
//!
//! At each position the scan first tries the longest special-token match;
//! otherwise it decodes one scalar value and acts on its [`CharClass`].
//! Runs of word codepoints accumulate into one token until a boundary event
//! (whitespace, control, isolated codepoint, special token, end of text).

use core::ops::Range;

use crate::{
    errors::WPResult,
    segmentation::{
        char_class::{CharClass, classify, decode_scalar},
        normalize::push_folded,
    },
    vocab::{SpecialTokens, TokenDict, size_hints::EXPECTED_BYTES_PER_WORD},
};

/// Default cap on simultaneous common-prefix matches.
pub const DEFAULT_MAX_PREFIX_MATCHES: usize = 512;

/// A maximal unit of segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicToken {
    /// The byte span in the source text.
    pub span: Range<usize>,

    /// The (possibly normalized) token text.
    pub text: String,

    /// ``text byte -> source byte range``; one entry per text byte.
    ///
    /// Bytes produced by folding map to the whole source codepoint they
    /// came from; so a range that ends inside a multi-codepoint fold still
    /// covers that source codepoint.
    ///
    /// `None` when every codepoint kept its source byte width, so that
    /// ``span.start + i`` is the source position of text byte `i`.
    pub source_map: Option<Vec<Range<usize>>>,
}

impl BasicToken {
    /// Build a token whose text is the source slice itself.
    pub fn verbatim(
        start: usize,
        text: &str,
    ) -> Self {
        Self {
            span: start..start + text.len(),
            text: text.to_string(),
            source_map: None,
        }
    }

    /// Is the text byte-aligned with the source span?
    pub fn is_aligned(&self) -> bool {
        self.source_map.is_none()
    }

    /// Map a byte range of [`text`](Self::text) to a byte range of the source text.
    ///
    /// `range` must lie on `text` char boundaries. Starts round down to
    /// the start of their source codepoint, ends round up to its end.
    pub fn source_range(
        &self,
        range: Range<usize>,
    ) -> Range<usize> {
        match &self.source_map {
            None => self.span.start + range.start..self.span.start + range.end,
            Some(map) if range.is_empty() => {
                let pos = map.get(range.start).map_or(self.span.end, |r| r.start);
                pos..pos
            }
            Some(map) => map[range.start].start..map[range.end - 1].end,
        }
    }
}

/// The in-progress run of word codepoints.
#[derive(Debug, Default)]
struct OpenRun {
    start: Option<usize>,
    text: String,
    source_map: Option<Vec<Range<usize>>>,
}

impl OpenRun {
    #[inline]
    fn open(
        &mut self,
        pos: usize,
    ) {
        if self.start.is_none() {
            self.start = Some(pos);
        }
    }

    /// Append a codepoint whose output bytes are its source bytes.
    #[inline]
    fn push_aligned(
        &mut self,
        pos: usize,
        c: char,
    ) {
        self.open(pos);
        if let Some(map) = &mut self.source_map {
            map.extend((pos..pos + c.len_utf8()).map(|b| b..b + 1));
        }
        self.text.push(c);
    }

    /// Append the folded form of a codepoint.
    fn push_folded(
        &mut self,
        pos: usize,
        c: char,
        width: usize,
    ) {
        self.open(pos);

        let before = self.text.len();
        let produced = push_folded(c, &mut self.text);

        let aligned = produced == width && self.text[before..].chars().nth(1).is_none();
        if aligned && self.source_map.is_none() {
            return;
        }

        let start = self.start.unwrap_or(pos);
        let map = self
            .source_map
            .get_or_insert_with(|| (start..start + before).map(|b| b..b + 1).collect());

        if aligned {
            map.extend((pos..pos + produced).map(|b| b..b + 1));
        } else {
            map.extend(core::iter::repeat_n(pos..pos + width, produced));
        }
    }

    /// Close the run at `end`; emitting it if it produced any text.
    fn close(
        &mut self,
        end: usize,
        tokens: &mut Vec<BasicToken>,
    ) {
        let Some(start) = self.start.take() else {
            return;
        };
        let text = core::mem::take(&mut self.text);
        let source_map = self.source_map.take();

        if text.is_empty() {
            return;
        }

        tokens.push(BasicToken {
            span: start..end,
            text,
            source_map,
        });
    }
}

/// Unicode-aware pre-segmentation with atomic special tokens.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `basic`.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicTokenizer {
    do_lower_case: bool,
    max_prefix_matches: usize,
    specials: TokenDict<u32>,
}

impl BasicTokenizer {
    /// Create a new basic tokenizer.
    ///
    /// ## Arguments
    /// * `do_lower_case` - fold case and strip accents from word codepoints.
    /// * `specials` - the named special tokens, which are never split.
    pub fn new(
        do_lower_case: bool,
        specials: &SpecialTokens,
    ) -> WPResult<Self> {
        Ok(Self {
            do_lower_case,
            max_prefix_matches: DEFAULT_MAX_PREFIX_MATCHES,
            specials: TokenDict::from_tokens(specials.tokens())?,
        })
    }

    /// Set the cap on simultaneous special-token prefix matches.
    pub fn with_max_prefix_matches(
        mut self,
        max_prefix_matches: usize,
    ) -> Self {
        self.max_prefix_matches = max_prefix_matches.max(1);
        self
    }

    /// Does this tokenizer fold case?
    pub fn do_lower_case(&self) -> bool {
        self.do_lower_case
    }

    /// Get the special-token dictionary.
    pub fn special_dict(&self) -> &TokenDict<u32> {
        &self.specials
    }

    /// Is `token` a special token?
    pub fn is_special(
        &self,
        token: &str,
    ) -> bool {
        self.specials.contains(token)
    }

    /// Add a special token; idempotent.
    pub fn add_special_token(
        &mut self,
        token: &str,
    ) -> WPResult<()> {
        self.specials.insert(token)?;
        log::debug!("added special token {token:?}");
        Ok(())
    }

    /// Add special tokens; see [`add_special_token`](Self::add_special_token).
    pub fn add_special_tokens<I, S>(
        &mut self,
        tokens: I,
    ) -> WPResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add_special_token(token.as_ref())?;
        }
        Ok(())
    }

    /// The longest special token at the start of `text`.
    #[inline]
    fn special_prefix<'a>(
        &self,
        text: &'a str,
    ) -> Option<&'a str> {
        self.specials
            .prefix_matches(text)
            .take(self.max_prefix_matches)
            .last()
            .map(|(len, _)| &text[..len])
    }

    /// Segment text into [`BasicToken`]s.
    ///
    /// Spans are strictly ordered and non-overlapping.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn segment(
        &self,
        text: &str,
    ) -> Vec<BasicToken> {
        let capacity = text.len() as f32 / EXPECTED_BYTES_PER_WORD;
        let mut tokens = Vec::with_capacity(capacity as usize);

        let mut run = OpenRun::default();
        let mut pos = 0;
        while pos < text.len() {
            let rest = &text[pos..];

            if let Some(special) = self.special_prefix(rest) {
                run.close(pos, &mut tokens);
                tokens.push(BasicToken::verbatim(pos, special));
                pos += special.len();
                continue;
            }

            let Some((c, width)) = decode_scalar(rest) else {
                break;
            };

            match classify(c) {
                CharClass::AsciiAlnum => {
                    let c = if self.do_lower_case {
                        c.to_ascii_lowercase()
                    } else {
                        c
                    };
                    run.push_aligned(pos, c);
                }
                CharClass::Word => {
                    if self.do_lower_case {
                        run.push_folded(pos, c, width);
                    } else {
                        run.push_aligned(pos, c);
                    }
                }
                CharClass::Whitespace | CharClass::Control => run.close(pos, &mut tokens),
                CharClass::Isolated => {
                    run.close(pos, &mut tokens);
                    tokens.push(BasicToken::verbatim(pos, &rest[..width]));
                }
            }
            pos += width;
        }
        run.close(text.len(), &mut tokens);

        tokens
    }

    /// Segment text, returning only the token strings.
    pub fn basic_tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.segment(text).into_iter().map(|t| t.text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(do_lower_case: bool) -> BasicTokenizer {
        BasicTokenizer::new(do_lower_case, &SpecialTokens::default()).unwrap()
    }

    fn spans(tokens: &[BasicToken]) -> Vec<(Range<usize>, &str)> {
        tokens
            .iter()
            .map(|t| (t.span.clone(), t.text.as_str()))
            .collect()
    }

    #[test]
    fn test_empty_and_whitespace() {
        let basic = basic(true);
        assert!(basic.segment("").is_empty());
        assert!(basic.segment(" \t\r\n \u{3000}\u{00A0}").is_empty());
        assert!(basic.segment("\x01\u{FFFD}\u{200B}").is_empty());
    }

    #[test]
    fn test_ascii_runs_and_punctuation() {
        let basic = basic(true);
        let text = "Hello, World! it's 42.";
        let tokens = basic.segment(text);

        assert_eq!(
            spans(&tokens),
            vec![
                (0..5, "hello"),
                (5..6, ","),
                (7..12, "world"),
                (12..13, "!"),
                (14..16, "it"),
                (16..17, "'"),
                (17..18, "s"),
                (19..21, "42"),
                (21..22, "."),
            ]
        );
        assert!(tokens.iter().all(BasicToken::is_aligned));
    }

    #[test]
    fn test_without_lower_case() {
        let basic = basic(false);
        assert_eq!(
            basic.basic_tokenize("Héllo WORLD"),
            vec!["Héllo", "WORLD"]
        );
    }

    #[test]
    fn test_cjk_and_unicode_punctuation() {
        let basic = basic(true);
        let text = "计算机（Computer）";
        let tokens = basic.segment(text);

        assert_eq!(
            spans(&tokens),
            vec![
                (0..3, "计"),
                (3..6, "算"),
                (6..9, "机"),
                (9..12, "（"),
                (12..20, "computer"),
                (20..23, "）"),
            ]
        );
    }

    #[test]
    fn test_special_tokens_are_atomic() {
        let basic = basic(true);
        let text = "ab[MASK]Cd [SEP]";
        let tokens = basic.segment(text);

        assert_eq!(
            spans(&tokens),
            vec![
                (0..2, "ab"),
                (2..8, "[MASK]"),
                (8..10, "cd"),
                (11..16, "[SEP]"),
            ]
        );

        // Special tokens are matched case-sensitively and never folded.
        assert_eq!(
            basic.basic_tokenize("[mask]"),
            vec!["[", "mask", "]"]
        );
    }

    #[test]
    fn test_added_special_tokens() {
        let mut basic = basic(true);
        basic.add_special_tokens(["<e>", "<e>>"]).unwrap();
        assert!(basic.is_special("<e>>"));

        assert_eq!(
            basic.basic_tokenize("x<e>>y<e>z"),
            vec!["x", "<e>>", "y", "<e>", "z"]
        );
    }

    #[test]
    fn test_controls_close_runs() {
        let basic = basic(true);
        let text = "ab\x01cd\u{200B}ef";
        let tokens = basic.segment(text);
        assert_eq!(
            spans(&tokens),
            vec![(0..2, "ab"), (3..5, "cd"), (8..10, "ef")]
        );
    }

    #[test]
    fn test_accent_stripping_source_map() {
        let basic = basic(true);
        let text = "Café au LAIT";
        let tokens = basic.segment(text);

        assert_eq!(
            spans(&tokens),
            vec![(0..5, "cafe"), (6..8, "au"), (9..13, "lait")]
        );

        let cafe = &tokens[0];
        assert!(!cafe.is_aligned());
        assert_eq!(
            cafe.source_map.as_deref(),
            Some(&[0..1, 1..2, 2..3, 3..5][..])
        );
        assert_eq!(cafe.source_range(0..2), 0..2);
        assert_eq!(cafe.source_range(2..4), 2..5);
        assert_eq!(&text[cafe.source_range(3..4)], "é");
    }

    #[test]
    fn test_leading_combining_mark() {
        let basic = basic(true);
        let text = "\u{0301}ab";
        let tokens = basic.segment(text);

        assert_eq!(spans(&tokens), vec![(0..4, "ab")]);
        assert_eq!(tokens[0].source_range(0..2), 2..4);
    }

    #[test]
    fn test_multi_codepoint_fold_maps_to_whole_source() {
        let basic = basic(true);
        // One precomposed syllable folds to three jamo.
        let text = "x\u{D55C}";
        let tokens = basic.segment(text);

        assert_eq!(spans(&tokens), vec![(0..4, "x\u{1112}\u{1161}\u{11AB}")]);
        let han = &tokens[0];
        assert_eq!(han.source_range(0..1), 0..1);
        assert_eq!(han.source_range(1..4), 1..4);
        assert_eq!(han.source_range(1..7), 1..4);
        assert_eq!(han.source_range(7..10), 1..4);
        assert_eq!(han.source_range(0..10), 0..4);
    }

    #[test]
    fn test_same_width_fold_stays_aligned() {
        let basic = basic(true);
        let tokens = basic.segment("ΑΒΓ");
        assert_eq!(spans(&tokens), vec![(0..6, "αβγ")]);
        assert!(tokens[0].is_aligned());
    }
}
