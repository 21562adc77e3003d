//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::Range,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max id in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A half-open ``start..end`` position range in the source text.
///
/// Units are bytes or unicode codepoints, depending on the
/// [`OffsetMode`](crate::wordpiece::OffsetMode) of the producer.
pub type Offset = Range<usize>;

/// Compile-time check that a value is [`Send`].
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is [`Sync`].
#[cfg(test)]
pub(crate) fn check_is_sync<S: Sync>(_: &S) {}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
    }
}
