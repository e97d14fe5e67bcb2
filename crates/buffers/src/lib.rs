//! Growable binary buffer for fixbin.
//!
//! This crate provides the byte storage that fixed-layout codecs read from
//! and write into. A [`Buffer`] owns a contiguous, growable byte region and
//! tracks a logical window over it: an `offset` (base of the current record)
//! and a `size` (total valid bytes). All reads are validated against the
//! logical `size`, never against raw capacity.
//!
//! # Example
//!
//! ```
//! use fixbin_buffers::Buffer;
//!
//! let mut buffer = Buffer::new();
//! buffer.allocate(6);
//! buffer.write_u16(0, 0x0201);
//! buffer.write_u32(2, 0x0605_0403);
//!
//! assert_eq!(buffer.read_u16(0), Ok(0x0201));
//! assert_eq!(buffer.read_u32(2), Ok(0x0605_0403));
//! assert_eq!(buffer.data(), &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
//! ```

mod buffer;

pub use buffer::Buffer;

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Requested position and width exceed the buffer's valid size.
    OutOfRange,
    /// Buffer overflow during a window adjustment.
    Overflow,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::OutOfRange => write!(f, "position out of range"),
            BufferError::Overflow => write!(f, "buffer overflow"),
        }
    }
}

impl std::error::Error for BufferError {}
