//! Codec implementation for single-ended access adapters.
//!
//! [`BinaryHeap`] exposes priority-ordered access rather than meaningful
//! iteration, so encode snapshots the heap (a clone) and drains the snapshot
//! in pop order. The subject heap is never mutated: encoding is read-only
//! and safe under concurrent observation, and the wire bytes list elements
//! highest-priority first. Decode rebuilds by repeated decode-and-push.
//!
//! Stack- and queue-ordered adapters map to `Vec` and `VecDeque` in this
//! crate; their sequence codecs already preserve pop and front order across
//! a round trip.

use crate::{
    codec::{EncodeSize, Read, Write},
    error::Error,
    util::{read_len, write_len, LEN_WIDTH},
};
use bytes::{Buf, BufMut};
use std::collections::BinaryHeap;

impl<T: Write + Ord + Clone> Write for BinaryHeap<T> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        write_len(buf, self.len());
        let mut snapshot = self.clone();
        while let Some(item) = snapshot.pop() {
            item.write(buf);
        }
    }
}

impl<T: EncodeSize> EncodeSize for BinaryHeap<T> {
    #[inline]
    fn encode_size(&self) -> usize {
        LEN_WIDTH + self.iter().map(EncodeSize::encode_size).sum::<usize>()
    }
}

impl<T: Read + Ord> Read for BinaryHeap<T> {
    #[inline]
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = read_len(buf)?;
        let mut heap = BinaryHeap::with_capacity(len.min(buf.remaining()));
        for _ in 0..len {
            heap.push(T::read(buf)?);
        }
        Ok(heap)
    }
}
