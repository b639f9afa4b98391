//! Chunk column delivery packet.

use binary::{BinaryReader, BinaryWriter};

use crate::error::DecodeError;
use crate::handler::PacketHandler;
use crate::header::{PacketHeader, SubClientIds};
use crate::ids;
use crate::packet::Packet;
use crate::types::ChunkPosition;

/// Sentinel count: the client should request every sub-chunk on demand.
const REQUEST_FULL_COLUMN_FAKE_COUNT: u32 = u32::MAX;

/// Sentinel count: on-demand requests for a truncated column; the real
/// count follows as a 16-bit field.
const REQUEST_TRUNCATED_COLUMN_FAKE_COUNT: u32 = u32::MAX - 1;

/// Ceiling on the cache blob hash list, fixed by the protocol to bound
/// memory and message size.
pub const MAX_BLOB_HASHES: usize = 64;

/// How the client should source sub-chunk data for this column.
///
/// On the wire this is one overloaded varint count field with two reserved
/// sentinel values; modelling it as a tagged variant keeps the sentinel
/// magic out of application code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubChunkRequestMode {
    /// Sub-chunk data is carried inline; `count` sub-chunks are serialized
    /// in the payload.
    ///
    /// Counts at or above the reserved sentinel values cannot be encoded;
    /// supplying one is a caller invariant violation.
    Inline {
        /// Number of serialized sub-chunks.
        count: u32,
    },

    /// The client requests sub-chunks on demand for the full column.
    OnDemandFullColumn,

    /// The client requests sub-chunks on demand for a truncated column of
    /// `count` sub-chunks.
    OnDemandTruncated {
        /// Number of sub-chunks in the truncated column.
        count: u16,
    },
}

impl SubChunkRequestMode {
    /// Returns `true` for the on-demand variants.
    #[must_use]
    pub const fn is_client_request(self) -> bool {
        !matches!(self, Self::Inline { .. })
    }

    fn read(reader: &mut BinaryReader<'_>) -> Result<Self, DecodeError> {
        match reader.read_varu32()? {
            REQUEST_FULL_COLUMN_FAKE_COUNT => Ok(Self::OnDemandFullColumn),
            REQUEST_TRUNCATED_COLUMN_FAKE_COUNT => Ok(Self::OnDemandTruncated {
                count: reader.read_u16_le()?,
            }),
            count => Ok(Self::Inline { count }),
        }
    }

    fn write(self, writer: &mut BinaryWriter) {
        match self {
            Self::Inline { count } => writer.write_varu32(count),
            Self::OnDemandFullColumn => writer.write_varu32(REQUEST_FULL_COLUMN_FAKE_COUNT),
            Self::OnDemandTruncated { count } => {
                writer.write_varu32(REQUEST_TRUNCATED_COLUMN_FAKE_COUNT);
                writer.write_u16_le(count);
            }
        }
    }
}

/// Delivers one chunk column: position, sub-chunk sourcing mode, optional
/// cache blob hashes and the opaque terrain payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelChunkPacket {
    pub sub_ids: SubClientIds,
    pub chunk_position: ChunkPosition,
    pub dimension_id: i32,
    pub sub_chunks: SubChunkRequestMode,
    /// Present exactly when the client-side chunk cache is in use.
    pub used_blob_hashes: Option<Vec<u64>>,
    pub extra_payload: Vec<u8>,
}

impl LevelChunkPacket {
    /// Creates a chunk delivery packet.
    #[must_use]
    pub const fn create(
        chunk_position: ChunkPosition,
        dimension_id: i32,
        sub_chunks: SubChunkRequestMode,
        used_blob_hashes: Option<Vec<u64>>,
        extra_payload: Vec<u8>,
    ) -> Self {
        Self {
            sub_ids: SubClientIds::new(0, 0),
            chunk_position,
            dimension_id,
            sub_chunks,
            used_blob_hashes,
            extra_payload,
        }
    }

    /// Returns `true` if the client is expected to request sub-chunks on
    /// demand rather than read them from this packet.
    #[must_use]
    pub const fn is_client_sub_chunk_request_enabled(&self) -> bool {
        self.sub_chunks.is_client_request()
    }

    /// Returns `true` if the client-side chunk cache is in use.
    #[must_use]
    pub const fn is_cache_enabled(&self) -> bool {
        self.used_blob_hashes.is_some()
    }
}

impl Packet for LevelChunkPacket {
    const NETWORK_ID: u16 = ids::LEVEL_CHUNK;
    const NAME: &'static str = "LevelChunkPacket";

    fn sub_ids(&self) -> SubClientIds {
        self.sub_ids
    }

    fn decode_payload(
        header: PacketHeader,
        reader: &mut BinaryReader<'_>,
    ) -> Result<Self, DecodeError> {
        let chunk_position = ChunkPosition::read(reader)?;
        let dimension_id = reader.read_vars32()?;
        let sub_chunks = SubChunkRequestMode::read(reader)?;

        let used_blob_hashes = if reader.read_bool()? {
            let count = reader.read_varu32()? as usize;
            if count > MAX_BLOB_HASHES {
                return Err(DecodeError::BlobHashesOverLimit {
                    limit: MAX_BLOB_HASHES,
                    actual: count,
                });
            }
            let mut hashes = Vec::with_capacity(count);
            for _ in 0..count {
                hashes.push(reader.read_u64_le()?);
            }
            Some(hashes)
        } else {
            None
        };

        Ok(Self {
            sub_ids: header.sub_ids,
            chunk_position,
            dimension_id,
            sub_chunks,
            used_blob_hashes,
            extra_payload: reader.read_bytes_prefixed()?.to_vec(),
        })
    }

    fn encode_payload(&self, writer: &mut BinaryWriter) {
        self.chunk_position.write(writer);
        writer.write_vars32(self.dimension_id);
        self.sub_chunks.write(writer);

        writer.write_bool(self.used_blob_hashes.is_some());
        if let Some(hashes) = &self.used_blob_hashes {
            writer.write_varu32(hashes.len() as u32);
            for &hash in hashes {
                writer.write_u64_le(hash);
            }
        }
        writer.write_bytes_prefixed(&self.extra_payload);
    }

    fn handle(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_level_chunk(self)
    }
}
