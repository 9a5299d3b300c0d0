//! Codec implementations for Rust primitive types.
//!
//! All fixed-width scalars are written as their raw byte representation in
//! the host's byte order, with no normalization. The wire format is only
//! portable between hosts that agree on byte order and width; this is a
//! deliberate property of the protocol, not an oversight.

use crate::{
    codec::{EncodeSize, FixedSize, Read, Write},
    error::Error,
    util::at_least,
};
use bytes::{Buf, BufMut};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                buf.$write_method(*self);
            }
        }

        impl EncodeSize for $type {
            #[inline]
            fn encode_size(&self) -> usize {
                Self::SIZE
            }
        }

        impl Read for $type {
            #[inline]
            fn read(buf: &mut impl Buf) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(buf.$read_method())
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_numeric!(u8, get_u8, put_u8);
impl_numeric!(u16, get_u16_ne, put_u16_ne);
impl_numeric!(u32, get_u32_ne, put_u32_ne);
impl_numeric!(u64, get_u64_ne, put_u64_ne);
impl_numeric!(u128, get_u128_ne, put_u128_ne);
impl_numeric!(i8, get_i8, put_i8);
impl_numeric!(i16, get_i16_ne, put_i16_ne);
impl_numeric!(i32, get_i32_ne, put_i32_ne);
impl_numeric!(i64, get_i64_ne, put_i64_ne);
impl_numeric!(i128, get_i128_ne, put_i128_ne);
impl_numeric!(f32, get_f32_ne, put_f32_ne);
impl_numeric!(f64, get_f64_ne, put_f64_ne);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(if *self { 1 } else { 0 });
    }
}

impl Read for bool {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        match u8::read(buf)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidBool),
        }
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}

impl EncodeSize for bool {
    #[inline]
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

// Char implementation: the 4-byte scalar value, validated on decode.
impl Write for char {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u32_ne(*self as u32);
    }
}

impl Read for char {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let raw = u32::read(buf)?;
        char::from_u32(raw).ok_or(Error::InvalidChar(raw))
    }
}

impl FixedSize for char {
    const SIZE: usize = 4;
}

impl EncodeSize for char {
    #[inline]
    fn encode_size(&self) -> usize {
        Self::SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decode, Encode, EncodeSize};
    use paste::paste;

    macro_rules! impl_num_test {
        ($type:ty) => {
            paste! {
                #[test]
                fn [<test_ $type>]() {
                    let expected_len = std::mem::size_of::<$type>();
                    let values: [$type; 5] =
                        [0 as $type, 1 as $type, 42 as $type, <$type>::MAX, <$type>::MIN];
                    for value in values.iter() {
                        assert_eq!(value.encode_size(), expected_len);
                        let encoded = value.encode();
                        assert_eq!(encoded.len(), expected_len);
                        let decoded = <$type>::decode(encoded).unwrap();
                        assert_eq!(*value, decoded);
                    }
                }
            }
        };
    }
    impl_num_test!(u8);
    impl_num_test!(u16);
    impl_num_test!(u32);
    impl_num_test!(u64);
    impl_num_test!(u128);
    impl_num_test!(i8);
    impl_num_test!(i16);
    impl_num_test!(i32);
    impl_num_test!(i64);
    impl_num_test!(i128);
    impl_num_test!(f32);
    impl_num_test!(f64);

    #[test]
    fn test_native_layout() {
        assert_eq!(&0x0102u16.encode()[..], 0x0102u16.to_ne_bytes());
        assert_eq!(&0x01020304u32.encode()[..], 0x01020304u32.to_ne_bytes());
        assert_eq!(&(-5i64).encode()[..], (-5i64).to_ne_bytes());
        assert_eq!(&1.0f32.encode()[..], 1.0f32.to_ne_bytes());
        assert_eq!(&1.0f64.encode()[..], 1.0f64.to_ne_bytes());
    }

    #[test]
    fn test_bool() {
        assert_eq!(&true.encode()[..], [0x01]);
        assert_eq!(&false.encode()[..], [0x00]);
        assert_eq!(bool::decode(true.encode()).unwrap(), true);
        assert_eq!(bool::decode(false.encode()).unwrap(), false);
        assert!(matches!(
            bool::decode(&[0x02][..]),
            Err(Error::InvalidBool)
        ));
    }

    #[test]
    fn test_char() {
        for value in ['a', '\0', 'é', '中', '🦀'] {
            let encoded = value.encode();
            assert_eq!(encoded.len(), 4);
            assert_eq!(char::decode(encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_char_invalid_scalar() {
        // Unpaired surrogate, not a valid scalar value.
        let encoded = 0xD800u32.encode();
        assert!(matches!(
            char::decode(encoded),
            Err(Error::InvalidChar(0xD800))
        ));
    }

    #[test]
    fn test_truncated() {
        assert!(matches!(u64::decode(&[0u8; 7][..]), Err(Error::EndOfBuffer)));
        assert!(matches!(char::decode(&[0u8; 3][..]), Err(Error::EndOfBuffer)));
    }
}
