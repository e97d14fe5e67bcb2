//! Growable byte buffer with a logical `(offset, size)` window.

use crate::BufferError;

/// A contiguous, growable byte region with a logical window.
///
/// The buffer tracks an `offset` (base of the current record) and a `size`
/// (total valid bytes). Reads are validated against `size`; writes grow the
/// backing storage as needed. Positions are absolute — codecs add the window
/// `offset` themselves before calling in.
///
/// The buffer never hands out long-lived raw views into its storage: a write
/// may reallocate, so callers re-resolve positions through the buffer on
/// every access.
///
/// # Example
///
/// ```
/// use fixbin_buffers::Buffer;
///
/// let mut buffer = Buffer::new();
/// buffer.allocate(4);
/// buffer.write_u32(0, 0xDEAD_BEEF);
/// assert_eq!(buffer.read_u32(0), Ok(0xDEAD_BEEF));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    data: Vec<u8>,
    offset: usize,
    size: usize,
}

impl Buffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with pre-reserved backing capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            offset: 0,
            size: 0,
        }
    }

    /// Creates a buffer over existing bytes; the whole vector is valid.
    pub fn from_vec(data: Vec<u8>) -> Self {
        let size = data.len();
        Self {
            data,
            offset: 0,
            size,
        }
    }

    /// Returns the valid bytes of the buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data[..self.size]
    }

    /// Consumes the buffer, returning its valid bytes.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.data.truncate(self.size);
        self.data
    }

    /// Returns the logical base of the current record.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of valid bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the backing storage capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Moves the logical base forward, re-basing codecs onto a sub-region.
    pub fn shift(&mut self, n: usize) -> Result<(), BufferError> {
        let offset = self.offset.checked_add(n).ok_or(BufferError::Overflow)?;
        if offset > self.size {
            return Err(BufferError::Overflow);
        }
        self.offset = offset;
        Ok(())
    }

    /// Moves the logical base back, undoing a prior [`shift`](Self::shift).
    pub fn unshift(&mut self, n: usize) -> Result<(), BufferError> {
        if n > self.offset {
            return Err(BufferError::Overflow);
        }
        self.offset -= n;
        Ok(())
    }

    /// Sets the valid size, growing backing storage as needed.
    ///
    /// Newly exposed bytes are zeroed. Shrinking clamps the window base back
    /// into range.
    pub fn resize(&mut self, size: usize) {
        if size > self.data.len() {
            self.data.resize(size, 0);
        }
        self.size = size;
        if self.offset > self.size {
            self.offset = self.size;
        }
    }

    /// Appends `n` valid (zeroed) bytes, returning the previous size.
    pub fn allocate(&mut self, n: usize) -> usize {
        let old = self.size;
        self.resize(old + n);
        old
    }

    /// Clears the window back to an empty view without releasing storage.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.size = 0;
    }

    /// Returns `len` raw bytes at an absolute position.
    #[inline]
    pub fn read_fixed(&self, position: usize, len: usize) -> Result<&[u8], BufferError> {
        let end = position.checked_add(len).ok_or(BufferError::OutOfRange)?;
        if end > self.size {
            return Err(BufferError::OutOfRange);
        }
        Ok(&self.data[position..end])
    }

    /// Stores raw bytes at an absolute position, growing storage if needed.
    ///
    /// Growing the backing storage does not extend the valid size; reads past
    /// `size` keep failing until the window is resized.
    #[inline]
    pub fn write(&mut self, position: usize, bytes: &[u8]) {
        let end = position + bytes.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[position..end].copy_from_slice(bytes);
    }

    // ---------------------------------------------------------------- reads

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn read_u8(&self, position: usize) -> Result<u8, BufferError> {
        let b = self.read_fixed(position, 1)?;
        Ok(b[0])
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn read_i8(&self, position: usize) -> Result<i8, BufferError> {
        let b = self.read_fixed(position, 1)?;
        Ok(b[0] as i8)
    }

    /// Reads an unsigned 16-bit integer (little-endian).
    #[inline]
    pub fn read_u16(&self, position: usize) -> Result<u16, BufferError> {
        let b = self.read_fixed(position, 2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Reads a signed 16-bit integer (little-endian).
    #[inline]
    pub fn read_i16(&self, position: usize) -> Result<i16, BufferError> {
        let b = self.read_fixed(position, 2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    /// Reads an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn read_u32(&self, position: usize) -> Result<u32, BufferError> {
        let b = self.read_fixed(position, 4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads a signed 32-bit integer (little-endian).
    #[inline]
    pub fn read_i32(&self, position: usize) -> Result<i32, BufferError> {
        let b = self.read_fixed(position, 4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn read_u64(&self, position: usize) -> Result<u64, BufferError> {
        let b = self.read_fixed(position, 8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Reads a signed 64-bit integer (little-endian).
    #[inline]
    pub fn read_i64(&self, position: usize) -> Result<i64, BufferError> {
        let b = self.read_fixed(position, 8)?;
        Ok(i64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Reads a 32-bit floating point number (little-endian bit pattern).
    #[inline]
    pub fn read_f32(&self, position: usize) -> Result<f32, BufferError> {
        let b = self.read_fixed(position, 4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Reads a 64-bit floating point number (little-endian bit pattern).
    #[inline]
    pub fn read_f64(&self, position: usize) -> Result<f64, BufferError> {
        let b = self.read_fixed(position, 8)?;
        Ok(f64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Reads 16 raw bytes.
    #[inline]
    pub fn read_bytes16(&self, position: usize) -> Result<[u8; 16], BufferError> {
        let b = self.read_fixed(position, 16)?;
        let mut out = [0u8; 16];
        out.copy_from_slice(b);
        Ok(out)
    }

    // --------------------------------------------------------------- writes

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn write_u8(&mut self, position: usize, value: u8) {
        self.write(position, &[value]);
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn write_i8(&mut self, position: usize, value: i8) {
        self.write(position, &[value as u8]);
    }

    /// Writes an unsigned 16-bit integer (little-endian).
    #[inline]
    pub fn write_u16(&mut self, position: usize, value: u16) {
        self.write(position, &value.to_le_bytes());
    }

    /// Writes a signed 16-bit integer (little-endian).
    #[inline]
    pub fn write_i16(&mut self, position: usize, value: i16) {
        self.write(position, &value.to_le_bytes());
    }

    /// Writes an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn write_u32(&mut self, position: usize, value: u32) {
        self.write(position, &value.to_le_bytes());
    }

    /// Writes a signed 32-bit integer (little-endian).
    #[inline]
    pub fn write_i32(&mut self, position: usize, value: i32) {
        self.write(position, &value.to_le_bytes());
    }

    /// Writes an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn write_u64(&mut self, position: usize, value: u64) {
        self.write(position, &value.to_le_bytes());
    }

    /// Writes a signed 64-bit integer (little-endian).
    #[inline]
    pub fn write_i64(&mut self, position: usize, value: i64) {
        self.write(position, &value.to_le_bytes());
    }

    /// Writes a 32-bit floating point number (little-endian bit pattern).
    #[inline]
    pub fn write_f32(&mut self, position: usize, value: f32) {
        self.write(position, &value.to_le_bytes());
    }

    /// Writes a 64-bit floating point number (little-endian bit pattern).
    #[inline]
    pub fn write_f64(&mut self, position: usize, value: f64) {
        self.write(position, &value.to_le_bytes());
    }

    /// Writes 16 raw bytes.
    #[inline]
    pub fn write_bytes16(&mut self, position: usize, value: &[u8; 16]) {
        self.write(position, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_empty() {
        let buffer = Buffer::new();
        assert_eq!(buffer.offset(), 0);
        assert_eq!(buffer.size(), 0);
        assert_eq!(buffer.data(), &[] as &[u8]);
    }

    #[test]
    fn from_vec_exposes_whole_vector() {
        let buffer = Buffer::from_vec(vec![1, 2, 3]);
        assert_eq!(buffer.size(), 3);
        assert_eq!(buffer.data(), &[1, 2, 3]);
    }

    #[test]
    fn allocate_returns_old_size() {
        let mut buffer = Buffer::new();
        assert_eq!(buffer.allocate(4), 0);
        assert_eq!(buffer.allocate(2), 4);
        assert_eq!(buffer.size(), 6);
    }

    #[test]
    fn shift_and_unshift_move_window() {
        let mut buffer = Buffer::from_vec(vec![0; 8]);
        buffer.shift(3).unwrap();
        assert_eq!(buffer.offset(), 3);
        buffer.unshift(2).unwrap();
        assert_eq!(buffer.offset(), 1);
        assert_eq!(buffer.unshift(2), Err(BufferError::Overflow));
        assert_eq!(buffer.shift(8), Err(BufferError::Overflow));
    }

    #[test]
    fn read_validates_against_size_not_capacity() {
        let mut buffer = Buffer::with_capacity(64);
        buffer.allocate(2);
        assert_eq!(buffer.read_u32(0), Err(BufferError::OutOfRange));
        assert!(buffer.capacity() >= 2);
    }

    #[test]
    fn write_grows_storage_but_not_size() {
        let mut buffer = Buffer::new();
        buffer.write_u32(10, 0xAABBCCDD);
        assert_eq!(buffer.size(), 0);
        assert!(buffer.capacity() >= 14);
        assert_eq!(buffer.read_u32(10), Err(BufferError::OutOfRange));
        buffer.resize(14);
        assert_eq!(buffer.read_u32(10), Ok(0xAABBCCDD));
    }

    #[test]
    fn resize_shrink_clamps_offset() {
        let mut buffer = Buffer::from_vec(vec![0; 8]);
        buffer.shift(6).unwrap();
        buffer.resize(4);
        assert_eq!(buffer.offset(), 4);
    }

    #[test]
    fn reset_keeps_storage() {
        let mut buffer = Buffer::from_vec(vec![1, 2, 3, 4]);
        buffer.reset();
        assert_eq!(buffer.size(), 0);
        assert!(buffer.capacity() >= 4);
    }

    #[test]
    fn little_endian_layout() {
        let mut buffer = Buffer::new();
        buffer.allocate(4);
        buffer.write_u32(0, 0x0403_0201);
        assert_eq!(buffer.data(), &[0x01, 0x02, 0x03, 0x04]);
    }
}
