//! The handler boundary: the sole coupling point to application logic.

use crate::level_chunk::LevelChunkPacket;
use crate::level_event::LevelEventPacket;
use crate::login::LoginPacket;

/// Capability object receiving decoded packets, one method per packet type.
///
/// Every method returns whether the packet was considered handled; the
/// defaults leave everything unhandled so implementors only override the
/// packets they care about.
pub trait PacketHandler {
    /// Handles a level event notification.
    fn handle_level_event(&mut self, _packet: &LevelEventPacket) -> bool {
        false
    }

    /// Handles a chunk delivery.
    fn handle_level_chunk(&mut self, _packet: &LevelChunkPacket) -> bool {
        false
    }

    /// Handles a login request.
    fn handle_login(&mut self, _packet: &LoginPacket) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::Packet;
    use crate::types::Vec3;

    struct EventCounter {
        events: u32,
    }

    impl PacketHandler for EventCounter {
        fn handle_level_event(&mut self, _packet: &LevelEventPacket) -> bool {
            self.events += 1;
            true
        }
    }

    #[test]
    fn dispatch_reaches_overridden_method() {
        let packet = LevelEventPacket::create(2001, 0, Vec3::new(1.0, 2.0, 3.0));
        let mut handler = EventCounter { events: 0 };
        assert!(packet.handle(&mut handler));
        assert_eq!(handler.events, 1);
    }

    #[test]
    fn default_methods_report_unhandled() {
        let packet = LevelEventPacket::create(2001, 0, Vec3::new(0.0, 0.0, 0.0));
        struct Inert;
        impl PacketHandler for Inert {}
        let mut handler = Inert;
        assert!(!packet.handle(&mut handler));
    }
}
