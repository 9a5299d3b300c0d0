//! Codec implementations for text.
//!
//! Text is encoded as a fixed-width length prefix followed by that many raw
//! UTF-8 bytes. Decode validates the bytes; input that is not UTF-8 fails
//! rather than producing a mangled string.

use crate::{
    codec::{EncodeSize, Read, Write},
    error::Error,
    util::{at_least, read_len, write_len, LEN_WIDTH},
};
use bytes::{Buf, BufMut};

impl Write for str {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(buf, self.len());
        buf.put_slice(self.as_bytes());
    }
}

impl EncodeSize for str {
    #[inline]
    fn encode_size(&self) -> usize {
        LEN_WIDTH + self.len()
    }
}

impl Write for String {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.as_str().write(buf);
    }
}

impl EncodeSize for String {
    #[inline]
    fn encode_size(&self) -> usize {
        self.as_str().encode_size()
    }
}

impl Read for String {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = read_len(buf)?;
        at_least(buf, len)?;
        let mut bytes = vec![0u8; len];
        buf.copy_to_slice(&mut bytes);
        Ok(String::from_utf8(bytes)?)
    }
}
