//! Packet envelope and payload codecs for the bedwire protocol.
//!
//! This crate turns typed packet values into exact byte sequences and turns
//! untrusted byte buffers back into validated packets. The transport layer
//! hands in one complete, already-decrypted buffer per packet and receives
//! one complete encoded buffer per packet. Header bit layout, payload
//! field order and structural validation all live here.
//!
//! # Design Principles
//!
//! - **Byte-exact wire format** - A fixed external client defines the
//!   format; every field's width, endianness and order is a contract.
//! - **Bounded decoding** - All reads are bounds-checked and all repeated
//!   structures are validated against protocol ceilings before allocation.
//! - **One failure shape** - Every decode failure is wrapped at the
//!   envelope with the packet type's display name.
//! - **No transport knowledge** - Framing, reliability, encryption and
//!   compression belong to the layers around this crate.
//!
//! # Example
//!
//! ```
//! use binary::{BinaryReader, BinaryWriter};
//! use protocol::{LevelEventPacket, Packet, Vec3};
//!
//! let packet = LevelEventPacket::create(3001, 0, Vec3::new(1.0, 64.0, -1.0));
//!
//! let mut writer = BinaryWriter::new();
//! packet.encode(&mut writer);
//! let bytes = writer.finish();
//!
//! let mut reader = BinaryReader::new(&bytes);
//! let decoded = LevelEventPacket::decode(&mut reader).unwrap();
//! assert_eq!(decoded, packet);
//! ```

mod error;
mod handler;
mod header;
pub mod ids;
mod level_chunk;
mod level_event;
mod login;
mod packet;
mod structure;
mod types;

pub use error::{DecodeError, PacketDecodeError, ProtocolResult};
pub use handler::PacketHandler;
pub use header::{PacketHeader, SubClientIds, PID_MASK};
pub use level_chunk::{LevelChunkPacket, SubChunkRequestMode, MAX_BLOB_HASHES};
pub use level_event::{LevelEventPacket, ADD_PARTICLE_MASK};
pub use login::{JwtChain, LoginPacket};
pub use packet::Packet;
pub use structure::{StructureEditorData, StructureSettings};
pub use types::{BlockPosition, ChunkPosition, Vec3};
