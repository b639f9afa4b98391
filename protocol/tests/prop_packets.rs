use binary::{BinaryReader, BinaryWriter};
use proptest::prelude::*;
use protocol::{
    ChunkPosition, JwtChain, LevelChunkPacket, LevelEventPacket, LoginPacket, Packet,
    SubChunkRequestMode, SubClientIds, Vec3,
};

fn sub_ids_strategy() -> impl Strategy<Value = SubClientIds> {
    (0u8..4, 0u8..4).prop_map(|(sender, recipient)| SubClientIds::new(sender, recipient))
}

fn sub_chunks_strategy() -> impl Strategy<Value = SubChunkRequestMode> {
    prop_oneof![
        // Stay clear of the reserved sentinel values.
        (0u32..=0xFFFF).prop_map(|count| SubChunkRequestMode::Inline { count }),
        Just(SubChunkRequestMode::OnDemandFullColumn),
        any::<u16>().prop_map(|count| SubChunkRequestMode::OnDemandTruncated { count }),
    ]
}

fn level_chunk_strategy() -> impl Strategy<Value = LevelChunkPacket> {
    (
        sub_ids_strategy(),
        any::<i32>(),
        any::<i32>(),
        0i32..3,
        sub_chunks_strategy(),
        prop::option::of(prop::collection::vec(any::<u64>(), 0..=64)),
        prop::collection::vec(any::<u8>(), 0..256),
    )
        .prop_map(|(sub_ids, x, z, dimension, sub_chunks, hashes, payload)| {
            let mut packet = LevelChunkPacket::create(
                ChunkPosition::new(x, z),
                dimension,
                sub_chunks,
                hashes,
                payload,
            );
            packet.sub_ids = sub_ids;
            packet
        })
}

fn level_event_strategy() -> impl Strategy<Value = LevelEventPacket> {
    (
        sub_ids_strategy(),
        any::<i32>(),
        any::<i32>(),
        any::<f32>(),
        any::<f32>(),
        any::<f32>(),
    )
        .prop_map(|(sub_ids, id, data, x, y, z)| {
            let mut packet = LevelEventPacket::create(id, data, Vec3::new(x, y, z));
            packet.sub_ids = sub_ids;
            packet
        })
}

fn login_strategy() -> impl Strategy<Value = LoginPacket> {
    (
        any::<i32>(),
        prop::collection::vec("[A-Za-z0-9+/=.]{0,40}", 1..4),
        prop::collection::vec(any::<u8>(), 1..128),
    )
        .prop_map(|(protocol_version, chain, client)| {
            LoginPacket::create(protocol_version, JwtChain { chain }, client)
        })
}

fn encode<P: Packet>(packet: &P) -> Vec<u8> {
    let mut writer = BinaryWriter::new();
    packet.encode(&mut writer);
    writer.finish()
}

proptest! {
    #[test]
    fn prop_level_event_roundtrip(packet in level_event_strategy()) {
        let bytes = encode(&packet);
        let mut reader = BinaryReader::new(&bytes);
        let decoded = LevelEventPacket::decode(&mut reader).unwrap();
        // Compare bit patterns so NaN positions still roundtrip.
        prop_assert_eq!(decoded.event_id, packet.event_id);
        prop_assert_eq!(decoded.event_data, packet.event_data);
        prop_assert_eq!(decoded.position.x.to_bits(), packet.position.x.to_bits());
        prop_assert_eq!(decoded.position.y.to_bits(), packet.position.y.to_bits());
        prop_assert_eq!(decoded.position.z.to_bits(), packet.position.z.to_bits());
        prop_assert_eq!(decoded.sub_ids, packet.sub_ids);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_level_chunk_roundtrip(packet in level_chunk_strategy()) {
        let bytes = encode(&packet);
        let mut reader = BinaryReader::new(&bytes);
        let decoded = LevelChunkPacket::decode(&mut reader).unwrap();
        prop_assert_eq!(decoded, packet);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_login_roundtrip(packet in login_strategy()) {
        let bytes = encode(&packet);
        let mut reader = BinaryReader::new(&bytes);
        let decoded = LoginPacket::decode(&mut reader).unwrap();
        prop_assert_eq!(decoded, packet);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_truncated_chunk_never_decodes(packet in level_chunk_strategy(), cut in any::<prop::sample::Index>()) {
        let bytes = encode(&packet);
        let end = cut.index(bytes.len());
        let mut reader = BinaryReader::new(&bytes[..end]);
        prop_assert!(LevelChunkPacket::decode(&mut reader).is_err());
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut reader = BinaryReader::new(&data);
        let _ = LevelChunkPacket::decode(&mut reader);
        let mut reader = BinaryReader::new(&data);
        let _ = LoginPacket::decode(&mut reader);
        let mut reader = BinaryReader::new(&data);
        let _ = LevelEventPacket::decode(&mut reader);
    }
}
