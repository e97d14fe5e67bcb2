//! Generic leaf codec over any fixed-width plain-old-data type.

use std::marker::PhantomData;

use fixbin_buffers::Buffer;

use crate::model::{FinalModel, Size};
use crate::pod::FinalPod;

/// Widest leaf encoding (UUID / raw 16-byte block); scratch space for `set`.
const MAX_POD_SIZE: usize = 16;

/// Final model for a single fixed-width value.
///
/// One instantiation per [`FinalPod`] type replaces the hand-written
/// per-primitive codec family; the aliases below name the instantiations.
///
/// # Example
///
/// ```
/// use fixbin_buffers::Buffer;
/// use fixbin_final::{FinalModel, FinalModelI64, Size};
///
/// let mut buffer = Buffer::new();
/// buffer.allocate(8);
/// let model = FinalModelI64::new(0);
/// model.set(&mut buffer, &-42);
///
/// let mut size = Size::new();
/// assert_eq!(model.get(&buffer, &mut size), -42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FinalValueModel<T> {
    offset: usize,
    _marker: PhantomData<T>,
}

impl<T: FinalPod> FinalModel for FinalValueModel<T> {
    type Value = T;

    const SIZE: usize = T::SIZE;

    fn new(offset: usize) -> Self {
        Self {
            offset,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn fbe_offset(&self) -> usize {
        self.offset
    }

    fn get(&self, buffer: &Buffer, size: &mut Size) -> T {
        let position = match buffer.offset().checked_add(self.offset) {
            Some(position) => position,
            None => return T::default(),
        };
        let bytes = match buffer.read_fixed(position, T::SIZE) {
            Ok(bytes) => bytes,
            Err(_) => return T::default(),
        };
        size.value = T::SIZE;
        T::decode(bytes)
    }

    fn set(&self, buffer: &mut Buffer, value: &T) -> usize {
        if !self.in_bounds(buffer) {
            return 0;
        }
        let position = buffer.offset() + self.offset;
        let mut raw = [0u8; MAX_POD_SIZE];
        let raw = &mut raw[..T::SIZE];
        value.encode(raw);
        buffer.write(position, raw);
        T::SIZE
    }
}

pub type FinalModelBool = FinalValueModel<bool>;
pub type FinalModelU8 = FinalValueModel<u8>;
pub type FinalModelI8 = FinalValueModel<i8>;
pub type FinalModelU16 = FinalValueModel<u16>;
pub type FinalModelI16 = FinalValueModel<i16>;
pub type FinalModelU32 = FinalValueModel<u32>;
pub type FinalModelI32 = FinalValueModel<i32>;
pub type FinalModelU64 = FinalValueModel<u64>;
pub type FinalModelI64 = FinalValueModel<i64>;
pub type FinalModelF32 = FinalValueModel<f32>;
pub type FinalModelF64 = FinalValueModel<f64>;
pub type FinalModelChar = FinalValueModel<char>;
pub type FinalModelBytes16 = FinalValueModel<[u8; 16]>;
pub type FinalModelUuid = FinalValueModel<uuid::Uuid>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VerifyError;

    #[test]
    fn get_out_of_bounds_returns_default_and_leaves_size() {
        let buffer = Buffer::from_vec(vec![0xFF; 2]);
        let model = FinalModelU32::new(0);
        let mut size = Size::new();
        size.value = 99;
        assert_eq!(model.get(&buffer, &mut size), 0);
        assert_eq!(size.value, 99);
    }

    #[test]
    fn set_out_of_bounds_is_a_noop() {
        let mut buffer = Buffer::from_vec(vec![0xAA; 2]);
        let model = FinalModelU32::new(0);
        assert_eq!(model.set(&mut buffer, &7), 0);
        assert_eq!(buffer.data(), &[0xAA, 0xAA]);
    }

    #[test]
    fn verify_respects_window_offset() {
        let mut buffer = Buffer::from_vec(vec![0; 6]);
        buffer.shift(4).unwrap();
        let model = FinalModelU32::new(0);
        assert_eq!(
            model.verify(&buffer),
            Err(VerifyError::OutOfRange {
                offset: 4,
                needed: 4,
                available: 6,
            })
        );
        buffer.unshift(2).unwrap();
        assert_eq!(model.verify(&buffer), Ok(4));
    }

    #[test]
    fn rebased_model_reads_the_sub_region() {
        let mut buffer = Buffer::from_vec(vec![0; 8]);
        let model = FinalModelU16::new(0);
        buffer.shift(6).unwrap();
        model.set(&mut buffer, &0xBEEF);
        buffer.unshift(6).unwrap();
        assert_eq!(buffer.data()[6..], [0xEF, 0xBE]);
    }

    #[test]
    fn allocation_size_equals_fbe_size() {
        let model = FinalModelF64::new(0);
        assert_eq!(model.allocation_size(&1.0), model.fbe_size());
    }
}
