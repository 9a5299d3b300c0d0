//! A byte staging area with independent read and write cursors.
//!
//! [`Buffer`] is the stateful core of the crate: values are appended with
//! [`Buffer::put`], extracted with [`Buffer::take`], and the cursors are
//! manipulated either through named methods or through [`Directive`] values
//! handled by the [`Buffer::apply`] dispatcher.
//!
//! The write cursor and the read cursor are fully independent. Seeking the
//! write cursor back and writing overwrites bytes in place (growing the
//! buffer once the end is passed); the read cursor is only ever moved by
//! reads and by [`Buffer::seek_read`]. Directives never touch the read
//! cursor — this asymmetry is part of the contract.

use crate::{
    codec::{Encode, Read},
    error::Error,
};
use bytes::{buf::UninitSlice, Buf, BufMut, Bytes};
use std::io::SeekFrom;
use tracing::trace;

/// A control command applied to a [`Buffer`].
///
/// Directives are stateless values, consumed immediately by
/// [`Buffer::apply`] and never represented on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Discard all content and reset both cursors to zero.
    Clear,
    /// Move the write cursor to the start (subsequent writes overwrite).
    SeekWriteStart,
    /// Move the write cursor past the last byte.
    SeekWriteEnd,
    /// Enable trace output for this instance.
    TraceOn,
    /// Disable trace output for this instance.
    TraceOff,
}

/// An in-memory byte sequence with independent read and write cursors.
#[derive(Debug)]
pub struct Buffer {
    data: Vec<u8>,
    read_pos: usize,
    write_pos: usize,
    healthy: bool,
    trace: bool,
}

impl Buffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            read_pos: 0,
            write_pos: 0,
            healthy: true,
            trace: false,
        }
    }

    /// Creates an empty buffer with at least `capacity` bytes reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buffer = Self::new();
        buffer.data.reserve(capacity);
        buffer
    }

    /// Encodes `value` at the write cursor.
    ///
    /// Returns `self` so calls can be chained:
    ///
    /// ```
    /// use stowage::Buffer;
    ///
    /// let mut buffer = Buffer::new();
    /// buffer.put(&123u64).put(&true);
    /// assert_eq!(buffer.len(), 9);
    /// ```
    pub fn put<T: Encode + ?Sized>(&mut self, value: &T) -> &mut Self {
        if self.trace {
            trace!(
                ty = std::any::type_name::<T>(),
                size = value.encode_size(),
                at = self.write_pos,
                "write"
            );
        }
        value.write(&mut *self);
        self
    }

    /// Decodes a value at the read cursor.
    ///
    /// On failure the buffer is marked unhealthy (see [`Buffer::healthy`])
    /// until it is cleared or reloaded. Bytes consumed before the failure
    /// are not restored.
    pub fn take<T: Read>(&mut self) -> Result<T, Error> {
        let result = T::read(&mut *self);
        match &result {
            Ok(_) if self.trace => trace!(
                ty = std::any::type_name::<T>(),
                remaining = self.remaining(),
                "read"
            ),
            Err(err) => {
                self.healthy = false;
                if self.trace {
                    trace!(ty = std::any::type_name::<T>(), error = %err, "read failed");
                }
            }
            _ => {}
        }
        result
    }

    /// Appends raw bytes at the write cursor, without any envelope.
    pub fn append(&mut self, bytes: &[u8]) -> &mut Self {
        self.put_slice(bytes);
        self
    }

    /// Consumes exactly `count` raw bytes from the read cursor.
    pub fn consume(&mut self, count: usize) -> Result<Bytes, Error> {
        if self.remaining() < count {
            self.healthy = false;
            return Err(Error::EndOfBuffer);
        }
        Ok(self.copy_to_bytes(count))
    }

    /// Applies a [`Directive`], dispatching to the matching named method.
    pub fn apply(&mut self, directive: Directive) -> &mut Self {
        match directive {
            Directive::Clear => self.clear(),
            Directive::SeekWriteStart => self.seek_write_start(),
            Directive::SeekWriteEnd => self.seek_write_end(),
            Directive::TraceOn => self.set_trace(true),
            Directive::TraceOff => self.set_trace(false),
        }
        self
    }

    /// Discards all content, resets both cursors to zero, and restores
    /// health.
    pub fn clear(&mut self) {
        self.data.clear();
        self.read_pos = 0;
        self.write_pos = 0;
        self.healthy = true;
    }

    /// Moves the write cursor to the start of the buffer.
    ///
    /// Subsequent writes overwrite existing content in place. The read
    /// cursor is not affected.
    pub fn seek_write_start(&mut self) {
        self.write_pos = 0;
    }

    /// Moves the write cursor past the last byte of the buffer.
    pub fn seek_write_end(&mut self) {
        self.write_pos = self.data.len();
    }

    /// Enables or disables trace output for this instance.
    ///
    /// Tracing never affects wire content; events are emitted through the
    /// process-wide [`tracing`] subscriber, so the embedding program decides
    /// where (or whether) they land.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// Repositions the read cursor.
    ///
    /// This is the only way to move the read cursor other than reading;
    /// directives deliberately leave it alone. Returns the new position.
    pub fn seek_read(&mut self, pos: SeekFrom) -> Result<usize, Error> {
        let target = match pos {
            SeekFrom::Start(n) => n as i128,
            SeekFrom::End(n) => self.data.len() as i128 + n as i128,
            SeekFrom::Current(n) => self.read_pos as i128 + n as i128,
        };
        if target < 0 || target > self.data.len() as i128 {
            let clamped = target.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
            return Err(Error::InvalidPosition(clamped));
        }
        self.read_pos = target as usize;
        Ok(self.read_pos)
    }

    /// Returns the read cursor position.
    pub fn read_position(&self) -> usize {
        self.read_pos
    }

    /// Returns the write cursor position.
    pub fn write_position(&self) -> usize {
        self.write_pos
    }

    /// Returns the total number of bytes held, regardless of cursors.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the full content, regardless of cursors.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns whether every operation since the last clear or load has
    /// succeeded.
    ///
    /// Callers that ignore individual results must check this before
    /// trusting extracted values.
    pub fn healthy(&self) -> bool {
        self.healthy
    }

    pub(crate) fn replace(&mut self, data: Vec<u8>) {
        self.data = data;
        self.read_pos = 0;
        self.write_pos = 0;
        self.healthy = true;
    }

    pub(crate) fn content(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buf for Buffer {
    #[inline]
    fn remaining(&self) -> usize {
        self.data.len() - self.read_pos
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.data[self.read_pos..]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining(), "cannot advance past end of buffer");
        self.read_pos += cnt;
    }
}

// The write cursor may sit before the end of the buffer, in which case the
// writable chunk is the already-initialized tail and writing overwrites it.
// Once the cursor reaches the end, the writable chunk is spare capacity and
// advancing extends the initialized length.
unsafe impl BufMut for Buffer {
    #[inline]
    fn remaining_mut(&self) -> usize {
        usize::MAX - self.write_pos
    }

    #[inline]
    unsafe fn advance_mut(&mut self, cnt: usize) {
        let new_pos = self
            .write_pos
            .checked_add(cnt)
            .expect("write cursor overflow");
        if new_pos > self.data.len() {
            assert!(
                new_pos <= self.data.capacity(),
                "cannot advance past reserved capacity"
            );
            self.data.set_len(new_pos);
        }
        self.write_pos = new_pos;
    }

    #[inline]
    fn chunk_mut(&mut self) -> &mut UninitSlice {
        if self.write_pos == self.data.len() {
            if self.data.len() == self.data.capacity() {
                self.data.reserve(64);
            }
            UninitSlice::uninit(self.data.spare_capacity_mut())
        } else {
            UninitSlice::new(&mut self.data[self.write_pos..])
        }
    }
}

#[cfg(test)]
mod tests {
    // `bytes::Buf` is deliberately not imported here: its by-value
    // `take(self, usize)` would win method resolution over the inherent
    // `Buffer::take::<T>(&mut self)` used throughout these tests.
    use super::{Buffer, Directive, Error};
    use bytes::Bytes;
    use std::io::SeekFrom;

    #[test]
    fn test_put_take_round_trip() {
        let mut buffer = Buffer::new();
        buffer.put(&42u32).put(&true).put(&-7i16);
        assert_eq!(buffer.take::<u32>().unwrap(), 42);
        assert_eq!(buffer.take::<bool>().unwrap(), true);
        assert_eq!(buffer.take::<i16>().unwrap(), -7);
        assert_eq!(bytes::Buf::remaining(&buffer), 0);
        assert!(buffer.healthy());
    }

    #[test]
    fn test_cursors_independent() {
        let mut buffer = Buffer::new();
        buffer.put(&1u8);
        assert_eq!(buffer.write_position(), 1);
        assert_eq!(buffer.read_position(), 0);
        assert_eq!(buffer.take::<u8>().unwrap(), 1);
        assert_eq!(buffer.read_position(), 1);
        assert_eq!(buffer.write_position(), 1);
    }

    #[test]
    fn test_clear_idempotent() {
        let mut buffer = Buffer::new();
        buffer.put(&42u64);
        let _ = buffer.take::<u128>(); // poison health
        assert!(!buffer.healthy());
        buffer.clear();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.read_position(), 0);
        assert_eq!(buffer.write_position(), 0);
        assert!(buffer.healthy());

        // No stale data survives a clear.
        assert!(matches!(buffer.take::<u8>(), Err(Error::EndOfBuffer)));
        buffer.clear();
        assert!(buffer.healthy());
    }

    #[test]
    fn test_take_past_end_poisons() {
        let mut buffer = Buffer::new();
        buffer.put(&1u8);
        assert!(buffer.healthy());
        assert!(matches!(buffer.take::<u32>(), Err(Error::EndOfBuffer)));
        assert!(!buffer.healthy());
    }

    #[test]
    fn test_seek_write_start_overwrites() {
        let mut buffer = Buffer::new();
        buffer.put(&0xAAAAAAAAu32).put(&0xBBBBBBBBu32);
        assert_eq!(buffer.len(), 8);

        buffer.seek_write_start();
        buffer.put(&0x11111111u32);
        // Overwrite in place: length unchanged, second value intact.
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.take::<u32>().unwrap(), 0x11111111);
        assert_eq!(buffer.take::<u32>().unwrap(), 0xBBBBBBBB);
    }

    #[test]
    fn test_overwrite_grows_past_end() {
        let mut buffer = Buffer::new();
        buffer.put(&0xAAu8).put(&0xBBu8);
        buffer.seek_write_start();
        buffer.put(&0x01020304u32);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.take::<u32>().unwrap(), 0x01020304);
    }

    #[test]
    fn test_seek_write_end() {
        let mut buffer = Buffer::new();
        buffer.put(&1u8).put(&2u8);
        buffer.seek_write_start();
        buffer.put(&9u8);
        buffer.seek_write_end();
        buffer.put(&3u8);
        assert_eq!(buffer.as_slice(), [9, 2, 3]);
    }

    #[test]
    fn test_directives_do_not_move_read_cursor() {
        let mut buffer = Buffer::new();
        buffer.put(&1u8).put(&2u8);
        assert_eq!(buffer.take::<u8>().unwrap(), 1);
        buffer
            .apply(Directive::SeekWriteStart)
            .apply(Directive::SeekWriteEnd);
        assert_eq!(buffer.read_position(), 1);
        assert_eq!(buffer.take::<u8>().unwrap(), 2);
    }

    #[test]
    fn test_apply_clear() {
        let mut buffer = Buffer::new();
        buffer.put(&1u64).apply(Directive::Clear);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_apply_trace_toggle() {
        let mut buffer = Buffer::new();
        buffer.apply(Directive::TraceOn);
        assert!(buffer.trace);
        buffer.apply(Directive::TraceOff);
        assert!(!buffer.trace);
    }

    #[test]
    fn test_trace_does_not_change_wire() {
        let mut silent = Buffer::new();
        silent.put(&42u32).put(&String::from("trace me"));

        let mut traced = Buffer::new();
        traced.apply(Directive::TraceOn);
        traced.put(&42u32).put(&String::from("trace me"));

        assert_eq!(silent.as_slice(), traced.as_slice());
    }

    #[test]
    fn test_seek_read() {
        let mut buffer = Buffer::new();
        buffer.append(&[1, 2, 3, 4]);
        assert_eq!(buffer.seek_read(SeekFrom::Start(2)).unwrap(), 2);
        assert_eq!(buffer.take::<u8>().unwrap(), 3);
        assert_eq!(buffer.seek_read(SeekFrom::Current(-1)).unwrap(), 2);
        assert_eq!(buffer.seek_read(SeekFrom::End(-4)).unwrap(), 0);
        assert_eq!(buffer.take::<u8>().unwrap(), 1);
    }

    #[test]
    fn test_seek_read_out_of_range() {
        let mut buffer = Buffer::new();
        buffer.append(&[1, 2, 3]);
        assert!(matches!(
            buffer.seek_read(SeekFrom::Start(4)),
            Err(Error::InvalidPosition(4))
        ));
        assert!(matches!(
            buffer.seek_read(SeekFrom::End(-4)),
            Err(Error::InvalidPosition(-1))
        ));
        // A failed seek leaves the cursor where it was.
        assert_eq!(buffer.read_position(), 0);
    }

    #[test]
    fn test_append_consume() {
        let mut buffer = Buffer::new();
        buffer.append(&[1, 2, 3]).append(&[4, 5]);
        assert_eq!(buffer.consume(4).unwrap(), Bytes::from_static(&[1, 2, 3, 4]));
        assert!(matches!(buffer.consume(2), Err(Error::EndOfBuffer)));
        assert!(!buffer.healthy());
    }

    #[test]
    fn test_with_capacity() {
        let buffer = Buffer::with_capacity(1024);
        assert!(buffer.is_empty());
        assert!(buffer.data.capacity() >= 1024);
    }
}
