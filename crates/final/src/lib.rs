//! Fixed-size final model codecs for fixbin.
//!
//! A *final model* reads and writes one value of a schema-known type at a
//! fixed byte offset inside a [`Buffer`](fixbin_buffers::Buffer). There are
//! no length prefixes, tags, or self-description: the layout is fully
//! determined by the type, which makes encode/decode a handful of
//! bounds-checked memory accesses. The trade-off is that final layouts cannot
//! add optional fields later without breaking binary compatibility.
//!
//! Every codec — leaf or composite — implements the same [`FinalModel`]
//! contract: a constant byte width, a relative offset, a `verify` bounds
//! pass, and `get`/`set` accessors. Composites are built from ordered child
//! models at contiguous running-sum offsets and aggregate the contract over
//! them, so arbitrarily nested fixed layouts compose from the same parts.
//!
//! Models store only their offset; the buffer is passed into every
//! operation. Decoding never fails on the hot path: an out-of-bounds `get`
//! returns the type's default value, so callers that need strict bounds
//! reporting run [`FinalModel::verify`] first.
//!
//! # Example
//!
//! ```
//! use fixbin_buffers::Buffer;
//! use fixbin_final::{FinalModel, FinalModelU32, Size};
//!
//! let mut buffer = Buffer::new();
//! buffer.allocate(4);
//!
//! let model = FinalModelU32::new(0);
//! assert_eq!(model.set(&mut buffer, &5), 4);
//! assert_eq!(model.verify(&buffer), Ok(4));
//!
//! let mut size = Size::new();
//! assert_eq!(model.get(&buffer, &mut size), 5);
//! assert_eq!(size.value, 4);
//! assert_eq!(buffer.data(), &[0x05, 0x00, 0x00, 0x00]);
//! ```

mod composite;
mod enumeration;
mod error;
mod model;
mod pod;
mod value;

pub use enumeration::{FinalEnum, FinalEnumModel};
pub use error::VerifyError;
pub use model::{FinalModel, Size};
pub use pod::FinalPod;
pub use value::{
    FinalModelBool, FinalModelBytes16, FinalModelChar, FinalModelF32, FinalModelF64,
    FinalModelI16, FinalModelI32, FinalModelI64, FinalModelI8, FinalModelU16, FinalModelU32,
    FinalModelU64, FinalModelU8, FinalModelUuid, FinalValueModel,
};
