//! Round-trip law: for every leaf width and any representable raw value,
//! `get(set(v))` reconstructs a bit-identical value at any in-bounds offset.

use fixbin_buffers::Buffer;
use fixbin_final::{FinalModel, FinalPod, FinalValueModel, Size};
use proptest::prelude::*;

fn roundtrip<T: FinalPod>(value: T, offset: usize) -> T {
    let model = FinalValueModel::<T>::new(offset);
    let mut buffer = Buffer::new();
    buffer.allocate(offset + T::SIZE);

    assert_eq!(model.set(&mut buffer, &value), T::SIZE);

    let mut size = Size::new();
    let back = model.get(&buffer, &mut size);
    assert_eq!(size.value, T::SIZE);
    back
}

proptest! {
    #[test]
    fn roundtrip_bool(v in any::<bool>(), offset in 0usize..32) {
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    #[test]
    fn roundtrip_u8(v in any::<u8>(), offset in 0usize..32) {
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    #[test]
    fn roundtrip_i8(v in any::<i8>(), offset in 0usize..32) {
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    #[test]
    fn roundtrip_u16(v in any::<u16>(), offset in 0usize..32) {
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    #[test]
    fn roundtrip_i16(v in any::<i16>(), offset in 0usize..32) {
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    #[test]
    fn roundtrip_u32(v in any::<u32>(), offset in 0usize..32) {
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    #[test]
    fn roundtrip_i32(v in any::<i32>(), offset in 0usize..32) {
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    #[test]
    fn roundtrip_u64(v in any::<u64>(), offset in 0usize..32) {
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    #[test]
    fn roundtrip_i64(v in any::<i64>(), offset in 0usize..32) {
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    // Floats compare by bit pattern so NaN payloads count too.
    #[test]
    fn roundtrip_f32_bits(bits in any::<u32>(), offset in 0usize..32) {
        let v = f32::from_bits(bits);
        prop_assert_eq!(roundtrip(v, offset).to_bits(), bits);
    }

    #[test]
    fn roundtrip_f64_bits(bits in any::<u64>(), offset in 0usize..32) {
        let v = f64::from_bits(bits);
        prop_assert_eq!(roundtrip(v, offset).to_bits(), bits);
    }

    #[test]
    fn roundtrip_char(v in any::<char>(), offset in 0usize..32) {
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    #[test]
    fn roundtrip_bytes16(v in any::<[u8; 16]>(), offset in 0usize..32) {
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    #[test]
    fn roundtrip_uuid(raw in any::<[u8; 16]>(), offset in 0usize..32) {
        let v = uuid::Uuid::from_bytes(raw);
        prop_assert_eq!(roundtrip(v, offset), v);
    }

    // Truncating the buffer below the fixed width always fails verify.
    #[test]
    fn verify_rejects_truncated_buffers(missing in 1usize..=8, v in any::<u64>()) {
        let model = FinalValueModel::<u64>::new(0);
        let mut buffer = Buffer::new();
        buffer.allocate(8);
        model.set(&mut buffer, &v);
        buffer.resize(8 - missing);
        prop_assert!(model.verify(&buffer).is_err());
    }
}
