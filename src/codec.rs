//! Core codec traits.
//!
//! Values are encoded by recursive dispatch: composite shapes delegate
//! element-wise to these traits until the write or read bottoms out in a
//! primitive. User-defined aggregates participate by implementing
//! [`Write`], [`EncodeSize`], and [`Read`] field by field; there is no
//! raw-memory fallback for opaque types.

use crate::error::Error;
use bytes::{Buf, BufMut, BytesMut};

/// Trait for types that can be written (encoded) to a buffer.
pub trait Write {
    /// Encodes this value by writing to a buffer.
    ///
    /// Implementations should panic if the buffer doesn't have enough capacity.
    fn write(&self, buf: &mut impl BufMut);
}

/// Trait for types that can report the exact length of their encoding.
pub trait EncodeSize {
    /// Returns the encoded length of this value.
    ///
    /// This method MUST return the exact number of bytes that will be
    /// written by `write()`.
    fn encode_size(&self) -> usize;
}

/// Trait for types that can be read (decoded) from a buffer.
pub trait Read: Sized {
    /// Reads a value from the buffer, consuming the necessary bytes.
    ///
    /// Returns an error if decoding fails (e.g., invalid data, not enough
    /// bytes remaining).
    fn read(buf: &mut impl Buf) -> Result<Self, Error>;
}

/// Trait for types with a known, constant encoded length.
pub trait FixedSize {
    /// The length of the encoded value.
    const SIZE: usize;
}

/// Trait for types that can be encoded to a standalone buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes a value to a fresh `BytesMut` buffer.
    ///
    /// Panics if the `write` implementation does not write the number of
    /// bytes promised by `encode_size`.
    ///
    /// (Provided method).
    fn encode(&self) -> BytesMut {
        let len = self.encode_size();
        let mut buffer = BytesMut::with_capacity(len);
        self.write(&mut buffer);
        assert_eq!(buffer.len(), len, "write() did not write expected bytes");
        buffer
    }
}

// Automatically implement `Encode` for types that implement `Write` and
// `EncodeSize`.
impl<T: Write + EncodeSize + ?Sized> Encode for T {}

/// Trait for types that can be decoded from a buffer, ensuring the entire
/// buffer is consumed.
pub trait Decode: Read {
    /// Decodes a value from a buffer, failing if any bytes are left over.
    ///
    /// (Provided method).
    fn decode(mut buf: impl Buf) -> Result<Self, Error> {
        let result = Self::read(&mut buf)?;
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(result)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<T: Read> Decode for T {}

/// Trait for types that can be both encoded and decoded.
pub trait Codec: Encode + Decode {}

// Automatically implement `Codec` for types that implement `Encode` and
// `Decode`.
impl<T: Encode + Decode> Codec for T {}
