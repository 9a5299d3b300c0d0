//! Codec implementations for key-based containers.
//!
//! Maps and sets carry the count envelope and dump their entries in the
//! container's own iteration order. For the hashed variants that order is
//! unspecified, so two containers holding identical elements may serialize
//! to different byte sequences: the wire form is not canonical and must not
//! be used for content-addressed comparison.
//!
//! Decode rebuilds by repeated insert with first-wins semantics: a later
//! duplicate key in the input is a no-op, never an overwrite. Duplicate-key
//! data is instead carried by `Vec<(K, V)>`, which shares the exact pair
//! stream envelope and preserves every pair.

use crate::{
    codec::{EncodeSize, Read, Write},
    error::Error,
    util::{read_len, write_len, LEN_WIDTH},
};
use bytes::{Buf, BufMut};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::Hash,
};

macro_rules! impl_map {
    ($container:ident, $($bound:tt)*) => {
        impl<K: Write, V: Write> Write for $container<K, V> {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                write_len(buf, self.len());
                for (key, value) in self {
                    key.write(buf);
                    value.write(buf);
                }
            }
        }

        impl<K: EncodeSize, V: EncodeSize> EncodeSize for $container<K, V> {
            #[inline]
            fn encode_size(&self) -> usize {
                LEN_WIDTH
                    + self
                        .iter()
                        .map(|(key, value)| key.encode_size() + value.encode_size())
                        .sum::<usize>()
            }
        }

        impl<K: Read + $($bound)*, V: Read> Read for $container<K, V> {
            #[inline]
            fn read(buf: &mut impl Buf) -> Result<Self, Error> {
                let len = read_len(buf)?;
                let mut container = $container::new();
                for _ in 0..len {
                    let key = K::read(buf)?;
                    let value = V::read(buf)?;
                    container.entry(key).or_insert(value);
                }
                Ok(container)
            }
        }
    };
}

macro_rules! impl_set {
    ($container:ident, $($bound:tt)*) => {
        impl<K: Write> Write for $container<K> {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                write_len(buf, self.len());
                for key in self {
                    key.write(buf);
                }
            }
        }

        impl<K: EncodeSize> EncodeSize for $container<K> {
            #[inline]
            fn encode_size(&self) -> usize {
                LEN_WIDTH + self.iter().map(EncodeSize::encode_size).sum::<usize>()
            }
        }

        impl<K: Read + $($bound)*> Read for $container<K> {
            #[inline]
            fn read(buf: &mut impl Buf) -> Result<Self, Error> {
                let len = read_len(buf)?;
                let mut container = $container::new();
                for _ in 0..len {
                    container.insert(K::read(buf)?);
                }
                Ok(container)
            }
        }
    };
}

impl_map!(BTreeMap, Ord);
impl_map!(HashMap, Eq + Hash);
impl_set!(BTreeSet, Ord);
impl_set!(HashSet, Eq + Hash);
