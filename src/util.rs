//! Shared helpers for codec implementations.

use crate::error::Error;
use bytes::{Buf, BufMut};

/// The width, in bytes, of the count prefix written before every
/// variable-length collection and text value.
pub const LEN_WIDTH: usize = 8;

/// Returns an error if the buffer does not contain at least `len` more bytes.
#[inline]
pub fn at_least(buf: &mut impl Buf, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}

/// Writes a collection count as a fixed-width unsigned integer.
///
/// Counts are always [`LEN_WIDTH`] bytes in the host's byte order, matching
/// the width of the widest supported platform so that the envelope layout
/// does not depend on how the collection length is held in memory.
#[inline]
pub fn write_len(buf: &mut impl BufMut, len: usize) {
    buf.put_u64_ne(len as u64);
}

/// Reads a collection count previously written by [`write_len`].
///
/// Fails with [`Error::InvalidLength`] if the count cannot be addressed on
/// this platform.
#[inline]
pub fn read_len(buf: &mut impl Buf) -> Result<usize, Error> {
    at_least(buf, LEN_WIDTH)?;
    let raw = buf.get_u64_ne();
    usize::try_from(raw).map_err(|_| Error::InvalidLength(raw))
}
