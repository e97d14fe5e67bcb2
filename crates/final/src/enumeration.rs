//! Final model for enumerations over a fixed-width underlying integer.

use std::marker::PhantomData;

use fixbin_buffers::Buffer;

use crate::model::{FinalModel, Size};
use crate::pod::FinalPod;
use crate::value::FinalValueModel;

/// An enumeration with a declared fixed-width raw representation.
///
/// `from_repr` is infallible: a raw value that matches no declared
/// enumerator still decodes, into whatever "unrecognized" state the enum
/// author chooses (typically a catch-all variant wrapping the raw value).
/// The codec never rejects or validates raw values.
///
/// `Repr` fixes the encoded width. Converting a wider domain value into
/// `Repr` inside `to_repr` is a defined-width truncation chosen by the
/// implementor; the codec itself never truncates.
///
/// # Example
///
/// ```
/// use fixbin_final::FinalEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Side {
///     Buy,
///     Sell,
///     Unknown(u8),
/// }
///
/// impl FinalEnum for Side {
///     type Repr = u8;
///
///     fn from_repr(raw: u8) -> Self {
///         match raw {
///             0 => Side::Buy,
///             1 => Side::Sell,
///             other => Side::Unknown(other),
///         }
///     }
///
///     fn to_repr(&self) -> u8 {
///         match self {
///             Side::Buy => 0,
///             Side::Sell => 1,
///             Side::Unknown(other) => *other,
///         }
///     }
/// }
///
/// assert_eq!(Side::from_repr(1), Side::Sell);
/// assert_eq!(Side::from_repr(9), Side::Unknown(9));
/// ```
pub trait FinalEnum: Sized {
    /// Underlying fixed-width integer representation.
    type Repr: FinalPod;

    /// Reconstructs the enumeration from a raw value; never fails.
    fn from_repr(raw: Self::Repr) -> Self;

    /// Returns the raw representation to encode.
    fn to_repr(&self) -> Self::Repr;
}

/// Final model for a [`FinalEnum`].
///
/// Encodes `to_repr` and decodes through `from_repr` at the declared
/// representation width. A bounds-failed `get` returns the enum decoded from
/// the representation's zero value.
#[derive(Debug, Clone, Copy)]
pub struct FinalEnumModel<E: FinalEnum> {
    repr: FinalValueModel<E::Repr>,
    _marker: PhantomData<E>,
}

impl<E: FinalEnum> FinalModel for FinalEnumModel<E> {
    type Value = E;

    const SIZE: usize = <E::Repr as FinalPod>::SIZE;

    fn new(offset: usize) -> Self {
        Self {
            repr: FinalValueModel::new(offset),
            _marker: PhantomData,
        }
    }

    #[inline]
    fn fbe_offset(&self) -> usize {
        self.repr.fbe_offset()
    }

    fn get(&self, buffer: &Buffer, size: &mut Size) -> E {
        E::from_repr(self.repr.get(buffer, size))
    }

    fn set(&self, buffer: &mut Buffer, value: &E) -> usize {
        self.repr.set(buffer, &value.to_repr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        Green,
        Blue,
        Unknown(u32),
    }

    impl FinalEnum for Color {
        type Repr = u32;

        fn from_repr(raw: u32) -> Self {
            match raw {
                0 => Color::Red,
                1 => Color::Green,
                2 => Color::Blue,
                other => Color::Unknown(other),
            }
        }

        fn to_repr(&self) -> u32 {
            match self {
                Color::Red => 0,
                Color::Green => 1,
                Color::Blue => 2,
                Color::Unknown(other) => *other,
            }
        }
    }

    #[test]
    fn enum_roundtrip() {
        let mut buffer = Buffer::new();
        buffer.allocate(4);
        let model = FinalEnumModel::<Color>::new(0);
        assert_eq!(model.set(&mut buffer, &Color::Blue), 4);

        let mut size = Size::new();
        assert_eq!(model.get(&buffer, &mut size), Color::Blue);
        assert_eq!(size.value, 4);
    }

    #[test]
    fn unknown_raw_value_decodes_unrecognized() {
        let buffer = Buffer::from_vec(vec![0x2A, 0x00, 0x00, 0x00]);
        let model = FinalEnumModel::<Color>::new(0);
        let mut size = Size::new();
        assert_eq!(model.get(&buffer, &mut size), Color::Unknown(42));
        assert_eq!(size.value, 4);
    }

    #[test]
    fn width_follows_declared_repr() {
        assert_eq!(FinalEnumModel::<Color>::SIZE, 4);
        assert_eq!(FinalEnumModel::<Color>::new(0).fbe_size(), 4);
    }
}
