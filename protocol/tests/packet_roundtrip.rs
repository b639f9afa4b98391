//! End-to-end roundtrips over the full envelope for every packet type.

use binary::{BinaryReader, BinaryWriter};
use protocol::{
    ids, ChunkPosition, JwtChain, LevelChunkPacket, LevelEventPacket, LoginPacket, Packet,
    PacketHeader, SubChunkRequestMode, SubClientIds, Vec3,
};

fn encode<P: Packet>(packet: &P) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    packet.encode(&mut writer);
    writer.finish()
}

fn decode<P: Packet>(bytes: &[u8]) -> P {
    let mut reader = BinaryReader::new(bytes);
    let packet = P::decode(&mut reader).unwrap();
    assert!(reader.is_empty(), "decode must consume the whole buffer");
    packet
}

#[test]
fn level_event_roundtrip_minimal() {
    let packet = LevelEventPacket::create(0, 0, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(decode::<LevelEventPacket>(&encode(&packet)), packet);
}

#[test]
fn level_event_roundtrip_maximal() {
    let packet = LevelEventPacket::create(i32::MAX, i32::MIN, Vec3::new(f32::MAX, f32::MIN, 1e-9));
    assert_eq!(decode::<LevelEventPacket>(&encode(&packet)), packet);
}

#[test]
fn level_chunk_roundtrip_minimal() {
    let packet = LevelChunkPacket::create(
        ChunkPosition::new(0, 0),
        0,
        SubChunkRequestMode::Inline { count: 0 },
        None,
        Vec::new(),
    );
    assert_eq!(decode::<LevelChunkPacket>(&encode(&packet)), packet);
}

#[test]
fn level_chunk_roundtrip_maximal() {
    let packet = LevelChunkPacket::create(
        ChunkPosition::new(i32::MIN, i32::MAX),
        2,
        SubChunkRequestMode::OnDemandTruncated { count: u16::MAX },
        Some((0..64).map(|i| u64::MAX - i).collect()),
        vec![0xA5; 4096],
    );
    assert_eq!(decode::<LevelChunkPacket>(&encode(&packet)), packet);
}

#[test]
fn level_chunk_sentinel_states_roundtrip() {
    for mode in [
        SubChunkRequestMode::OnDemandFullColumn,
        SubChunkRequestMode::OnDemandTruncated { count: 9 },
        SubChunkRequestMode::Inline { count: 24 },
    ] {
        let packet =
            LevelChunkPacket::create(ChunkPosition::new(3, -3), 1, mode, None, vec![1, 2, 3]);
        let decoded = decode::<LevelChunkPacket>(&encode(&packet));
        assert_eq!(decoded.sub_chunks, mode);
    }
}

#[test]
fn login_roundtrip() {
    let packet = LoginPacket::create(
        786,
        JwtChain {
            chain: vec!["a.b.c".to_owned(), "d.e.f".to_owned()],
        },
        b"client-data-token".to_vec(),
    );
    assert_eq!(decode::<LoginPacket>(&encode(&packet)), packet);
}

#[test]
fn login_roundtrip_minimal() {
    let packet = LoginPacket::create(0, JwtChain { chain: vec![String::new()] }, vec![0]);
    assert_eq!(decode::<LoginPacket>(&encode(&packet)), packet);
}

#[test]
fn header_bit_layout_is_stable() {
    let header = PacketHeader::new(42).with_sub_ids(SubClientIds::new(3, 2));
    assert_eq!(header.raw(), 42 | (3 << 10) | (2 << 12));

    let decoded = PacketHeader::from_raw(42 | (3 << 10) | (2 << 12));
    assert_eq!(decoded.pid, 42);
    assert_eq!(decoded.sub_ids.sender(), 3);
    assert_eq!(decoded.sub_ids.recipient(), 2);
}

#[test]
fn sub_client_ids_travel_with_the_packet() {
    let mut packet = LevelEventPacket::create(7, 7, Vec3::new(1.0, 2.0, 3.0));
    packet.sub_ids = SubClientIds::new(2, 1);

    let decoded = decode::<LevelEventPacket>(&encode(&packet));
    assert_eq!(decoded.sub_ids.sender(), 2);
    assert_eq!(decoded.sub_ids.recipient(), 1);
}

#[test]
fn header_is_a_single_varint() {
    // With default routing tags and a small id, the whole header is one byte.
    let packet = LevelEventPacket::create(0, 0, Vec3::new(0.0, 0.0, 0.0));
    let bytes = encode(&packet);
    assert_eq!(u16::from(bytes[0]), ids::LEVEL_EVENT);
}

#[test]
fn only_login_may_precede_authentication() {
    assert!(LoginPacket::can_be_sent_before_login());
    assert!(!LevelEventPacket::can_be_sent_before_login());
    assert!(!LevelChunkPacket::can_be_sent_before_login());
}
