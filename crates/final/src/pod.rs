//! Fixed-width plain-old-data capability.
//!
//! One impl per leaf type; the generic
//! [`FinalValueModel`](crate::FinalValueModel) turns each impl into a full
//! codec, so the per-type leaf family is a single parametrized codec rather
//! than one hand-written model per primitive.

/// A value with a fixed-width raw encoding.
///
/// Numeric types encode little-endian, two's-complement for signed integers,
/// IEEE-754 bit patterns for floats. `decode` is infallible over any `SIZE`
/// bytes: every bit pattern reconstructs to some value, falling back to the
/// type's default only where a pattern has no representation (e.g. a `char`
/// surrogate). `Default` supplies the value returned by a bounds-failed
/// `get`.
///
/// Callers guarantee `bytes.len() == SIZE` for `decode` and
/// `out.len() == SIZE` for `encode`.
pub trait FinalPod: Copy + Default {
    /// Fixed byte width of the raw encoding.
    const SIZE: usize;

    /// Reconstructs a value from its raw bytes.
    fn decode(bytes: &[u8]) -> Self;

    /// Writes the value's raw bytes into `out`.
    fn encode(self, out: &mut [u8]);
}

impl FinalPod for bool {
    const SIZE: usize = 1;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out[0] = self as u8;
    }
}

impl FinalPod for u8 {
    const SIZE: usize = 1;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out[0] = self;
    }
}

impl FinalPod for i8 {
    const SIZE: usize = 1;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out[0] = self as u8;
    }
}

impl FinalPod for u16 {
    const SIZE: usize = 2;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        u16::from_le_bytes([bytes[0], bytes[1]])
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl FinalPod for i16 {
    const SIZE: usize = 2;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        i16::from_le_bytes([bytes[0], bytes[1]])
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl FinalPod for u32 {
    const SIZE: usize = 4;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl FinalPod for i32 {
    const SIZE: usize = 4;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl FinalPod for u64 {
    const SIZE: usize = 8;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ])
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl FinalPod for i64 {
    const SIZE: usize = 8;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        i64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ])
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl FinalPod for f32 {
    const SIZE: usize = 4;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl FinalPod for f64 {
    const SIZE: usize = 8;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        f64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ])
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

/// Unicode scalar encoded as a 4-byte code point; patterns with no scalar
/// representation decode to `'\0'`.
impl FinalPod for char {
    const SIZE: usize = 4;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        let raw = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        char::from_u32(raw).unwrap_or('\0')
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&(self as u32).to_le_bytes());
    }
}

/// Raw 16-byte block, stored as-is.
impl FinalPod for [u8; 16] {
    const SIZE: usize = 16;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        let mut out = [0u8; 16];
        out.copy_from_slice(bytes);
        out
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(&self);
    }
}

/// UUID stored in canonical RFC 4122 byte order.
impl FinalPod for uuid::Uuid {
    const SIZE: usize = 16;

    #[inline]
    fn decode(bytes: &[u8]) -> Self {
        uuid::Uuid::from_bytes(<[u8; 16]>::decode(bytes))
    }

    #[inline]
    fn encode(self, out: &mut [u8]) {
        out.copy_from_slice(self.as_bytes());
    }
}
