//! # Special Tokens
//!
//! The named PAD/CLS/SEP/UNK/MASK token strings are configuration,
//! owned per tokenizer; so differently configured tokenizers never interfere.

use crate::{
    errors::{WPResult, WordPiecerError},
    types::TokenType,
    vocab::TokenDict,
};

/// Default padding token.
pub const DEFAULT_PAD_TOKEN: &str = "[PAD]";
/// Default sequence-start token.
pub const DEFAULT_CLS_TOKEN: &str = "[CLS]";
/// Default separator token.
pub const DEFAULT_SEP_TOKEN: &str = "[SEP]";
/// Default out-of-vocabulary token.
pub const DEFAULT_UNK_TOKEN: &str = "[UNK]";
/// Default mask token.
pub const DEFAULT_MASK_TOKEN: &str = "[MASK]";

/// The named special token strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecialTokens {
    /// Padding token.
    pub pad: String,

    /// Sequence-start token.
    pub cls: String,

    /// Separator token.
    pub sep: String,

    /// Out-of-vocabulary token.
    pub unk: String,

    /// Mask token.
    pub mask: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            pad: DEFAULT_PAD_TOKEN.to_string(),
            cls: DEFAULT_CLS_TOKEN.to_string(),
            sep: DEFAULT_SEP_TOKEN.to_string(),
            unk: DEFAULT_UNK_TOKEN.to_string(),
            mask: DEFAULT_MASK_TOKEN.to_string(),
        }
    }
}

impl SpecialTokens {
    /// Iterate over ``(role, token)`` pairs, in `pad, cls, sep, unk, mask` order.
    pub fn named(&self) -> [(&'static str, &str); 5] {
        [
            ("pad", self.pad.as_str()),
            ("cls", self.cls.as_str()),
            ("sep", self.sep.as_str()),
            ("unk", self.unk.as_str()),
            ("mask", self.mask.as_str()),
        ]
    }

    /// Iterate over the token strings.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.named().into_iter().map(|(_, token)| token)
    }

    /// Set the padding token.
    pub fn with_pad<S: Into<String>>(
        mut self,
        token: S,
    ) -> Self {
        self.pad = token.into();
        self
    }

    /// Set the sequence-start token.
    pub fn with_cls<S: Into<String>>(
        mut self,
        token: S,
    ) -> Self {
        self.cls = token.into();
        self
    }

    /// Set the separator token.
    pub fn with_sep<S: Into<String>>(
        mut self,
        token: S,
    ) -> Self {
        self.sep = token.into();
        self
    }

    /// Set the out-of-vocabulary token.
    pub fn with_unk<S: Into<String>>(
        mut self,
        token: S,
    ) -> Self {
        self.unk = token.into();
        self
    }

    /// Set the mask token.
    pub fn with_mask<S: Into<String>>(
        mut self,
        token: S,
    ) -> Self {
        self.mask = token.into();
        self
    }
}

/// The vocabulary ids of the [`SpecialTokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecialIds<T: TokenType> {
    /// Padding id.
    pub pad: T,

    /// Sequence-start id.
    pub cls: T,

    /// Separator id.
    pub sep: T,

    /// Out-of-vocabulary id.
    pub unk: T,

    /// Mask id.
    pub mask: T,
}

impl<T: TokenType> SpecialIds<T> {
    /// Resolve every special token against a vocabulary.
    ///
    /// ## Errors
    /// [`WordPiecerError::MissingSpecialToken`] for the first token
    /// which is not a vocabulary entry.
    pub fn resolve(
        specials: &SpecialTokens,
        vocab: &TokenDict<T>,
    ) -> WPResult<Self> {
        let lookup = |name: &'static str, token: &str| {
            let id = vocab
                .exact_match(token)
                .ok_or_else(|| WordPiecerError::MissingSpecialToken {
                    name,
                    token: token.to_string(),
                })?;
            log::debug!("special token {name} {token:?} -> {id}");
            Ok::<T, WordPiecerError>(id)
        };

        Ok(Self {
            pad: lookup("pad", &specials.pad)?,
            cls: lookup("cls", &specials.cls)?,
            sep: lookup("sep", &specials.sep)?,
            unk: lookup("unk", &specials.unk)?,
            mask: lookup("mask", &specials.mask)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        type T = u32;
        let vocab: TokenDict<T> =
            TokenDict::from_tokens(["hello", "[MASK]", "[UNK]", "[SEP]", "[CLS]", "[PAD]"])
                .unwrap();

        let ids = SpecialIds::resolve(&SpecialTokens::default(), &vocab).unwrap();
        assert_eq!(
            ids,
            SpecialIds {
                pad: 5,
                cls: 4,
                sep: 3,
                unk: 2,
                mask: 1,
            }
        );
    }

    #[test]
    fn test_resolve_missing() {
        type T = u32;
        let vocab: TokenDict<T> =
            TokenDict::from_tokens(["[PAD]", "[CLS]", "[SEP]", "[UNK]", "[MASK]"]).unwrap();

        let specials = SpecialTokens::default().with_unk("<unk>");
        match SpecialIds::resolve(&specials, &vocab) {
            Err(WordPiecerError::MissingSpecialToken { name, token }) => {
                assert_eq!(name, "unk");
                assert_eq!(token, "<unk>");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_named() {
        let specials = SpecialTokens::default().with_mask("<mask>");
        assert_eq!(
            specials.tokens().collect::<Vec<_>>(),
            vec!["[PAD]", "[CLS]", "[SEP]", "[UNK]", "<mask>"]
        );
    }
}
