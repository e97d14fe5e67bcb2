//! The final model contract and the consumed-size carrier.

use fixbin_buffers::Buffer;

use crate::error::VerifyError;

/// Out-parameter carrier reporting bytes consumed by the most recent `get`.
///
/// Decouples "how many bytes did this read cost" from the decoded value. A
/// bounds-failed `get` leaves the carrier untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Bytes consumed by the most recent successful `get`.
    pub value: usize,
}

impl Size {
    /// Creates a zeroed carrier.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Contract shared by every fixed-size codec, leaf and composite alike.
///
/// A model stores only its relative offset; the [`Buffer`] is passed into
/// every operation, so a model can never outlive or dangle into the storage
/// it decodes from. The encoded width is the constant [`SIZE`](Self::SIZE):
/// a pure function of the type, independent of buffer contents.
///
/// The intended call order is `verify` once, then `get`/`set`. Skipping
/// `verify` is allowed — `get` degrades to the type's default value on an
/// out-of-bounds field and `set` becomes a no-op returning 0 bytes written.
pub trait FinalModel: Sized {
    /// The decoded domain value.
    type Value;

    /// Fixed byte width of the encoded form.
    const SIZE: usize;

    /// Creates a model at a byte offset relative to the buffer window base.
    fn new(offset: usize) -> Self;

    /// Returns the model's fixed relative offset.
    fn fbe_offset(&self) -> usize;

    /// Returns the fixed byte width of the encoded form.
    #[inline]
    fn fbe_size(&self) -> usize {
        Self::SIZE
    }

    /// Whether the model's full layout lies inside the buffer's valid bytes.
    ///
    /// The predicate is
    /// `buffer.offset() + fbe_offset() + fbe_size() <= buffer.size()`,
    /// computed without wraparound so an overflowing position can never pass.
    #[inline]
    fn in_bounds(&self, buffer: &Buffer) -> bool {
        buffer
            .offset()
            .checked_add(self.fbe_offset())
            .and_then(|position| position.checked_add(self.fbe_size()))
            .is_some_and(|end| end <= buffer.size())
    }

    /// Checks that the buffer holds enough bytes for the full fixed layout.
    ///
    /// Returns the consumed size on success. Composites override this with a
    /// fail-fast aggregation over their children.
    fn verify(&self, buffer: &Buffer) -> Result<usize, VerifyError> {
        if self.in_bounds(buffer) {
            Ok(Self::SIZE)
        } else {
            Err(VerifyError::OutOfRange {
                offset: buffer.offset().saturating_add(self.fbe_offset()),
                needed: Self::SIZE,
                available: buffer.size(),
            })
        }
    }

    /// Decodes the value, reporting consumed bytes through `size`.
    ///
    /// On an out-of-bounds field this returns the type's default value and
    /// leaves `size` untouched; callers that need strict bounds reporting
    /// call [`verify`](Self::verify) first.
    fn get(&self, buffer: &Buffer, size: &mut Size) -> Self::Value;

    /// Encodes the value, returning bytes written.
    ///
    /// An out-of-bounds write is a defined no-op returning 0: nothing past
    /// the buffer's valid size is touched, in every build profile.
    fn set(&self, buffer: &mut Buffer, value: &Self::Value) -> usize;

    /// Bytes needed to allocate for the value.
    ///
    /// Always equals [`fbe_size`](Self::fbe_size) for fixed-width models;
    /// kept for interface uniformity with variable-size model families.
    #[inline]
    fn allocation_size(&self, _value: &Self::Value) -> usize {
        Self::SIZE
    }
}
