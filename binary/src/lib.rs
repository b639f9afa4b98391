//! Bounds-checked binary serialization primitives for the bedwire codec.
//!
//! This crate provides [`BinaryReader`] and [`BinaryWriter`], the byte-level
//! cursor pair every packet codec is built on: variable-length integers
//! (with zigzag signed forms), fixed-width little/big-endian integers,
//! booleans, raw blocks and length-prefixed byte strings.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - Every read is length-checked before it touches
//!   the buffer; a short buffer is an error, never a panic.
//! - **No domain knowledge** - This crate knows nothing about packets or
//!   game state; it only moves typed values in and out of byte buffers.
//! - **Canonical output** - Writers always emit the minimal varint form;
//!   readers accept padded forms from peers.
//!
//! # Example
//!
//! ```
//! use binary::{BinaryReader, BinaryWriter};
//!
//! let mut writer = BinaryWriter::new();
//! writer.write_varu32(300);
//! writer.write_bool(true);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = BinaryReader::new(&bytes);
//! assert_eq!(reader.read_varu32().unwrap(), 300);
//! assert!(reader.read_bool().unwrap());
//! ```

mod error;
mod reader;
mod writer;

pub use error::{BinaryError, BinaryResult};
pub use reader::BinaryReader;
pub use writer::BinaryWriter;
