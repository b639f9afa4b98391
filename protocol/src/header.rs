//! Packet header bit layout.
//!
//! Every packet starts with a single unsigned varint packing three fields:
//! bits 0-9 the packet identifier, bits 10-11 the sender sub-client id,
//! bits 12-13 the recipient sub-client id.

use binary::{BinaryReader, BinaryResult, BinaryWriter};

/// Mask for the 10-bit packet identifier.
pub const PID_MASK: u32 = 0x3FF;

const SUBCLIENT_ID_MASK: u32 = 0x03;
const SENDER_SUBCLIENT_ID_SHIFT: u32 = 10;
const RECIPIENT_SUBCLIENT_ID_SHIFT: u32 = 12;

/// Split-screen routing tags carried in the packet header.
///
/// Each id occupies 2 bits on the wire; values are masked to that range at
/// construction so an out-of-range input can never bleed into neighbouring
/// header bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SubClientIds {
    sender: u8,
    recipient: u8,
}

impl SubClientIds {
    /// Creates routing tags, truncating each id to its 2-bit range.
    #[must_use]
    pub const fn new(sender: u8, recipient: u8) -> Self {
        Self {
            sender: sender & SUBCLIENT_ID_MASK as u8,
            recipient: recipient & SUBCLIENT_ID_MASK as u8,
        }
    }

    /// The sender sub-client id (0-3).
    #[must_use]
    pub const fn sender(self) -> u8 {
        self.sender
    }

    /// The recipient sub-client id (0-3).
    #[must_use]
    pub const fn recipient(self) -> u8 {
        self.recipient
    }
}

/// The decoded packet header: identifier plus routing tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    /// The 10-bit packet identifier.
    pub pid: u16,
    /// Split-screen routing tags.
    pub sub_ids: SubClientIds,
}

impl PacketHeader {
    /// Creates a header for the given identifier with default routing tags.
    #[must_use]
    pub const fn new(pid: u16) -> Self {
        Self {
            pid: pid & PID_MASK as u16,
            sub_ids: SubClientIds::new(0, 0),
        }
    }

    /// Returns this header with the given routing tags.
    #[must_use]
    pub const fn with_sub_ids(mut self, sub_ids: SubClientIds) -> Self {
        self.sub_ids = sub_ids;
        self
    }

    /// Packs the header into its varint value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.pid as u32
            | (self.sub_ids.sender as u32) << SENDER_SUBCLIENT_ID_SHIFT
            | (self.sub_ids.recipient as u32) << RECIPIENT_SUBCLIENT_ID_SHIFT
    }

    /// Unpacks a header from its varint value. Bits above the recipient
    /// field are ignored.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            pid: (raw & PID_MASK) as u16,
            sub_ids: SubClientIds::new(
                (raw >> SENDER_SUBCLIENT_ID_SHIFT) as u8,
                (raw >> RECIPIENT_SUBCLIENT_ID_SHIFT) as u8,
            ),
        }
    }

    /// Writes the header varint.
    pub fn encode(self, writer: &mut BinaryWriter) {
        writer.write_varu32(self.raw());
    }

    /// Reads a header varint.
    pub fn decode(reader: &mut BinaryReader<'_>) -> BinaryResult<Self> {
        Ok(Self::from_raw(reader.read_varu32()?))
    }
}
