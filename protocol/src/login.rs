//! Login request packet with its embedded connection-request sub-stream.

use binary::{BinaryReader, BinaryWriter};
use serde::Serialize;

use crate::error::DecodeError;
use crate::handler::PacketHandler;
use crate::header::{PacketHeader, SubClientIds};
use crate::ids;
use crate::packet::Packet;

/// The chain of signed identity tokens carried by the login document.
///
/// Serializes to exactly `{"chain": [...]}`, the structure the peer expects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct JwtChain {
    pub chain: Vec<String>,
}

/// Client login request, the only packet exchanged before authentication
/// completes.
///
/// The payload embeds a second framing layer: the outer varint-prefixed
/// string contains two 32-bit-little-endian-length-prefixed blocks, a JSON
/// document holding the token chain and an opaque client-data token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPacket {
    pub sub_ids: SubClientIds,
    pub protocol: i32,
    pub chain_data_jwt: JwtChain,
    pub client_data_jwt: Vec<u8>,
}

impl LoginPacket {
    /// Creates a login request.
    #[must_use]
    pub const fn create(protocol: i32, chain_data_jwt: JwtChain, client_data_jwt: Vec<u8>) -> Self {
        Self {
            sub_ids: SubClientIds::new(0, 0),
            protocol,
            chain_data_jwt,
            client_data_jwt,
        }
    }

    fn decode_connection_request(request: &[u8]) -> Result<(JwtChain, Vec<u8>), DecodeError> {
        let mut reader = BinaryReader::new(request);

        let chain_len = reader.read_i32_le()?;
        if chain_len <= 0 {
            return Err(DecodeError::NonPositiveLength {
                field: "chain data JSON",
                length: chain_len,
            });
        }
        let chain_json = reader.read_bytes(chain_len as usize)?;
        let chain_data_jwt = Self::decode_jwt_chain(chain_json)?;

        let client_len = reader.read_i32_le()?;
        if client_len <= 0 {
            return Err(DecodeError::NonPositiveLength {
                field: "clientData JWT",
                length: client_len,
            });
        }
        let client_data_jwt = reader.read_bytes(client_len as usize)?.to_vec();

        Ok((chain_data_jwt, client_data_jwt))
    }

    fn decode_jwt_chain(json: &[u8]) -> Result<JwtChain, DecodeError> {
        let document: serde_json::Value =
            serde_json::from_slice(json).map_err(|err| DecodeError::MalformedDocument {
                reason: err.to_string(),
            })?;

        let entries = document
            .get("chain")
            .and_then(serde_json::Value::as_array)
            .ok_or(DecodeError::MissingDocumentKey { key: "chain" })?;

        let mut chain = Vec::with_capacity(entries.len());
        for entry in entries {
            let jwt = entry.as_str().ok_or(DecodeError::NonStringToken)?;
            chain.push(jwt.to_owned());
        }
        Ok(JwtChain { chain })
    }

    fn encode_connection_request(&self) -> Vec<u8> {
        let chain_json = serde_json::to_vec(&self.chain_data_jwt)
            .expect("token chain serialization cannot fail");

        let mut writer = BinaryWriter::new();
        writer
            .write_i32_le(i32::try_from(chain_json.len()).expect("chain data JSON length overflow"));
        writer.write_bytes(&chain_json);
        writer.write_i32_le(
            i32::try_from(self.client_data_jwt.len()).expect("clientData JWT length overflow"),
        );
        writer.write_bytes(&self.client_data_jwt);
        writer.finish()
    }
}

impl Packet for LoginPacket {
    const NETWORK_ID: u16 = ids::LOGIN;
    const NAME: &'static str = "LoginPacket";

    fn can_be_sent_before_login() -> bool {
        true
    }

    fn sub_ids(&self) -> SubClientIds {
        self.sub_ids
    }

    fn decode_payload(
        header: PacketHeader,
        reader: &mut BinaryReader<'_>,
    ) -> Result<Self, DecodeError> {
        let protocol = reader.read_i32_be()?;
        let request = reader.read_bytes_prefixed()?;
        let (chain_data_jwt, client_data_jwt) = Self::decode_connection_request(request)?;

        Ok(Self {
            sub_ids: header.sub_ids,
            protocol,
            chain_data_jwt,
            client_data_jwt,
        })
    }

    fn encode_payload(&self, writer: &mut BinaryWriter) {
        writer.write_i32_be(self.protocol);
        writer.write_bytes_prefixed(&self.encode_connection_request());
    }

    fn handle(&self, handler: &mut dyn PacketHandler) -> bool {
        handler.handle_login(self)
    }
}
