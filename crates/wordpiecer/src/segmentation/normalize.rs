//! # Case Folding and Accent Stripping

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::char::decompose_canonical;

/// Lower-case `c`, apply canonical decomposition (NFD), and drop
/// nonspacing marks (`Mn`); appending the residue to `out`.
///
/// ## Returns
/// The number of bytes appended; may be zero (a lone combining mark).
pub fn push_folded(
    c: char,
    out: &mut String,
) -> usize {
    let before = out.len();
    for lower in c.to_lowercase() {
        decompose_canonical(lower, |d| {
            if get_general_category(d) != GeneralCategory::NonspacingMark {
                out.push(d);
            }
        });
    }
    out.len() - before
}

/// Fold every codepoint of `text`; see [`push_folded`].
pub fn fold_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_folded(c, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_folded() {
        let mut buf = String::new();
        assert_eq!(push_folded('A', &mut buf), 1);
        assert_eq!(push_folded('É', &mut buf), 1);
        assert_eq!(push_folded('\u{0301}', &mut buf), 0);
        assert_eq!(push_folded('ß', &mut buf), 2);
        assert_eq!(buf, "aeß");
    }

    #[test]
    fn test_fold_str() {
        assert_eq!(fold_str("Café"), "cafe");
        assert_eq!(fold_str("NAÏVE"), "naive");
        assert_eq!(fold_str("Ångström"), "angstrom");
        assert_eq!(fold_str("cafe\u{0301}"), "cafe");
        assert_eq!(fold_str("İ"), "i");
        assert_eq!(fold_str("Ελληνικά"), "ελληνικα");
    }

    #[test]
    fn test_hangul_decomposes() {
        // Conjoining jamo are letters (`Lo`), not marks; so they survive.
        let folded = fold_str("한");
        assert_eq!(folded.chars().count(), 3);
        assert_eq!(folded, "\u{1112}\u{1161}\u{11AB}");
    }
}
