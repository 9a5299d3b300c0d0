//! Codec implementations for ordered sequence containers.
//!
//! Dynamic sequences carry a count envelope and encode their elements in
//! forward iteration order; fixed-size arrays omit the count entirely, the
//! length being implicit in the type. `Vec<bool>` takes the same path as any
//! other element type: one count, then one byte per value. Density is traded
//! for decode simplicity; there is no bit packing.

use crate::{
    codec::{EncodeSize, Read, Write},
    error::Error,
    util::{read_len, write_len, LEN_WIDTH},
};
use bytes::{Buf, BufMut};
use std::collections::{LinkedList, VecDeque};

// Growable sequences share one envelope; only the rebuild step differs.
macro_rules! impl_sequence {
    ($container:ident, $insert:ident) => {
        impl<T: Write> Write for $container<T> {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                write_len(buf, self.len());
                for item in self {
                    item.write(buf);
                }
            }
        }

        impl<T: EncodeSize> EncodeSize for $container<T> {
            #[inline]
            fn encode_size(&self) -> usize {
                LEN_WIDTH + self.iter().map(EncodeSize::encode_size).sum::<usize>()
            }
        }

        impl<T: Read> Read for $container<T> {
            #[inline]
            fn read(buf: &mut impl Buf) -> Result<Self, Error> {
                let len = read_len(buf)?;
                let mut container = $container::new();
                for _ in 0..len {
                    container.$insert(T::read(buf)?);
                }
                Ok(container)
            }
        }
    };
}

impl_sequence!(VecDeque, push_back);
impl_sequence!(LinkedList, push_back);

// Vec gets its own Read so decoding can reserve up front. A hostile count
// cannot trigger an oversized allocation: a count beyond the remaining bytes
// can never be satisfied, so the reservation is capped at what the buffer
// could still produce.
impl<T: Write> Write for Vec<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(buf, self.len());
        for item in self {
            item.write(buf);
        }
    }
}

impl<T: EncodeSize> EncodeSize for Vec<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        LEN_WIDTH + self.iter().map(EncodeSize::encode_size).sum::<usize>()
    }
}

impl<T: Read> Read for Vec<T> {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = read_len(buf)?;
        let mut vec = Vec::with_capacity(len.min(buf.remaining()));
        for _ in 0..len {
            vec.push(T::read(buf)?);
        }
        Ok(vec)
    }
}

// Fixed-size arrays: no count on the wire, the static shape carries the
// length on both sides.
impl<T: Write, const N: usize> Write for [T; N] {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        for item in self {
            item.write(buf);
        }
    }
}

impl<T: EncodeSize, const N: usize> EncodeSize for [T; N] {
    #[inline]
    fn encode_size(&self) -> usize {
        self.iter().map(EncodeSize::encode_size).sum()
    }
}

impl<T: Read, const N: usize> Read for [T; N] {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::read(buf)?);
        }
        // Infallible: the loop produced exactly N items.
        Ok(items.try_into().unwrap_or_else(|_| unreachable!()))
    }
}
