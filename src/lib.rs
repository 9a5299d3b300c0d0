//! Staged binary serialization over a cursor-addressed byte buffer.
//!
//! # Overview
//!
//! A [`Buffer`] is an in-memory byte sequence with independent read and
//! write cursors. Values are appended with [`Buffer::put`] and extracted
//! with [`Buffer::take`]; each call recursively decomposes composite values
//! down to primitive writes and reads against the buffer. A small set of
//! [`Directive`] commands manipulates the cursors and the per-instance
//! trace flag, and the whole buffer can be mirrored to a file with
//! [`Buffer::save`] and [`Buffer::load`].
//!
//! The wire format is a flat byte stream: fixed-width scalars in the host's
//! byte order, variable-length collections as a fixed-width count followed
//! by their elements in iteration order, fixed-size arrays with no count,
//! and text as a length prefix plus raw UTF-8 bytes. There is no magic
//! number, version tag, or checksum, and no endianness normalization —
//! the bytes are only meaningful to hosts that share the producing host's
//! layout assumptions. Decode order must mirror encode order exactly.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Primitives: unsigned and signed integers, floats, `bool`, `char`
//! - Text: `String` (and `&str` for encoding)
//! - Sequences: `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, `[T; N]`
//! - Associative containers: `BTreeMap`, `HashMap`, `BTreeSet`, `HashSet`
//! - Adapters: `BinaryHeap<T>`
//! - Tuples up to arity 12
//!
//! User-defined types participate by implementing [`Write`], [`Read`], and
//! [`EncodeSize`] field by field; there is no raw-memory fallback.
//!
//! # Example
//!
//! ```
//! use stowage::{Buffer, Directive};
//!
//! let mut buffer = Buffer::new();
//! buffer.put(&123u64).put(&String::from("Some text..."));
//!
//! assert_eq!(buffer.take::<u64>().unwrap(), 123);
//! assert_eq!(buffer.take::<String>().unwrap(), "Some text...");
//!
//! buffer.apply(Directive::Clear);
//! assert!(buffer.is_empty());
//! ```
//!
//! # Example (custom aggregate)
//!
//! ```
//! // `bytes::Buf` is referenced by path below rather than imported: in
//! // scope, its by-value `take(self, usize)` would shadow `Buffer::take`.
//! use bytes::BufMut;
//! use stowage::{Buffer, EncodeSize, Error, Read, Write};
//!
//! #[derive(Debug, PartialEq)]
//! struct Item {
//!     id: u64,
//!     tags: Vec<u32>,
//! }
//!
//! impl Write for Item {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.id.write(buf);
//!         self.tags.write(buf);
//!     }
//! }
//!
//! impl EncodeSize for Item {
//!     fn encode_size(&self) -> usize {
//!         self.id.encode_size() + self.tags.encode_size()
//!     }
//! }
//!
//! impl Read for Item {
//!     fn read(buf: &mut impl bytes::Buf) -> Result<Self, Error> {
//!         let id = u64::read(buf)?;
//!         let tags = Vec::<u32>::read(buf)?;
//!         Ok(Self { id, tags })
//!     }
//! }
//!
//! let item = Item { id: 7, tags: vec![10, 20, 30] };
//! let mut buffer = Buffer::new();
//! buffer.put(&item);
//! assert_eq!(buffer.take::<Item>().unwrap(), item);
//! ```

pub mod buffer;
pub mod codec;
pub mod error;
mod persist;
pub mod types;
pub mod util;

// Re-export main types and traits
pub use buffer::{Buffer, Directive};
pub use codec::{Codec, Decode, Encode, EncodeSize, FixedSize, Read, Write};
pub use error::Error;
pub use util::LEN_WIDTH;
