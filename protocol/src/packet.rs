//! The packet envelope: the contract every packet type implements.

use binary::{BinaryReader, BinaryWriter};

use crate::error::{DecodeError, PacketDecodeError, ProtocolResult};
use crate::handler::PacketHandler;
use crate::header::{PacketHeader, SubClientIds};

/// A typed packet with a fixed wire identifier.
///
/// Decoding and encoding run a fixed two-phase pipeline: the shared header
/// varint (identifier + routing tags) followed by the type-specific payload.
/// Concrete types implement only the payload phase; the header phase and
/// error wrapping are provided here so every packet type agrees on routing
/// semantics and failure shape.
pub trait Packet: Sized {
    /// The stable wire identifier for this packet type (10 bits, 0-1023).
    const NETWORK_ID: u16;

    /// Display name used in decode diagnostics, never in protocol logic.
    const NAME: &'static str;

    /// Whether this packet may be exchanged before authentication completes.
    ///
    /// Pure metadata for the session layer; the codec does not enforce it.
    #[must_use]
    fn can_be_sent_before_login() -> bool {
        false
    }

    /// The routing tags carried by this packet instance.
    fn sub_ids(&self) -> SubClientIds;

    /// Decodes the payload fields, without the envelope header.
    fn decode_payload(header: PacketHeader, reader: &mut BinaryReader<'_>)
        -> Result<Self, DecodeError>;

    /// Encodes the payload fields, without the envelope header.
    fn encode_payload(&self, writer: &mut BinaryWriter);

    /// Dispatches this packet to the matching handler method, returning
    /// whether the handler considered it handled.
    fn handle(&self, handler: &mut dyn PacketHandler) -> bool;

    /// Decodes a complete packet from `reader`.
    ///
    /// Reads and validates the header, then delegates to
    /// [`decode_payload`](Self::decode_payload). Every failure, buffer
    /// bounds or structural, is wrapped with this packet type's display
    /// name before it reaches the caller.
    fn decode(reader: &mut BinaryReader<'_>) -> ProtocolResult<Self> {
        decode_body::<Self>(reader).map_err(|kind| PacketDecodeError::wrap(kind, Self::NAME))
    }

    /// Encodes this packet, header then payload, into `writer`.
    ///
    /// Encoding a well-formed packet value never fails.
    fn encode(&self, writer: &mut BinaryWriter) {
        PacketHeader::new(Self::NETWORK_ID)
            .with_sub_ids(self.sub_ids())
            .encode(writer);
        self.encode_payload(writer);
    }
}

fn decode_body<P: Packet>(reader: &mut BinaryReader<'_>) -> Result<P, DecodeError> {
    let header = PacketHeader::decode(reader)?;
    if header.pid != P::NETWORK_ID {
        return Err(DecodeError::UnexpectedPacketId {
            expected: P::NETWORK_ID,
            actual: header.pid,
        });
    }
    P::decode_payload(header, reader)
}
