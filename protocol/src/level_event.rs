//! World event notification packet.

use binary::{BinaryReader, BinaryWriter};

use crate::error::DecodeError;
use crate::handler::PacketHandler;
use crate::header::{PacketHeader, SubClientIds};
use crate::ids;
use crate::packet::Packet;
use crate::types::Vec3;

/// Bit OR-ed into the event id to mark a standard particle spawn.
pub const ADD_PARTICLE_MASK: i32 = 0x4000;

/// Notifies the client of a world event (sound, particle, weather change)
/// at a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelEventPacket {
    pub sub_ids: SubClientIds,
    pub event_id: i32,
    pub event_data: i32,
    pub position: Vec3,
}

impl LevelEventPacket {
    /// Creates an event notification.
    #[must_use]
    pub const fn create(event_id: i32, event_data: i32, position: Vec3) -> Self {
        Self {
            sub_ids: SubClientIds::new(0, 0),
            event_id,
            event_data,
            position,
        }
    }

    /// Creates a standard particle spawn event.
    #[must_use]
    pub const fn standard_particle(particle_id: i32, data: i32, position: Vec3) -> Self {
        Self::create(ADD_PARTICLE_MASK | particle_id, data, position)
    }
}

impl Packet for LevelEventPacket {
    const NETWORK_ID: u16 = ids::LEVEL_EVENT;
    const NAME: &'static str = "LevelEventPacket";

    fn sub_ids(&self) -> SubClientIds {
        self.sub_ids
    }

    fn decode_payload(
        header: PacketHeader,
        reader: &mut BinaryReader<'_>,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            sub_ids: header.sub_ids,
            event_id: reader.read_vars32()?,
            position: Vec3::read(reader)?,
            event_data: reader.read_vars32()?,
        })
    }

    fn encode_payload(&self, writer: &mut BinaryWriter) {
        writer.write_vars32(self.event_id);
        self.position.write(writer);
        writer.write_vars32(self.event_data);
    }

    fn handle(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_level_event(self)
    }
}
