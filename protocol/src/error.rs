//! Error types for packet decoding.

use std::fmt;

use binary::BinaryError;

/// Result type for packet decode operations at the envelope boundary.
pub type ProtocolResult<T> = Result<T, PacketDecodeError>;

/// Structural and buffer-level failures raised while decoding a payload.
///
/// These are produced inside header validation and payload codecs; the
/// envelope wraps them into a [`PacketDecodeError`] before they reach the
/// caller, so they never escape without the packet's display name attached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// A serializer primitive ran past the end of the buffer.
    Binary(BinaryError),

    /// The header identifier does not match the packet type being decoded.
    UnexpectedPacketId {
        /// The identifier the concrete packet type expects.
        expected: u16,
        /// The identifier found in the header.
        actual: u16,
    },

    /// A repeated structure exceeded its protocol-fixed ceiling.
    BlobHashesOverLimit {
        /// The protocol ceiling.
        limit: usize,
        /// The count found on the wire.
        actual: usize,
    },

    /// A length prefix inside an embedded sub-stream was zero or negative.
    NonPositiveLength {
        /// Which length field was malformed.
        field: &'static str,
        /// The length found on the wire.
        length: i32,
    },

    /// An embedded document could not be structurally decoded.
    MalformedDocument {
        /// Parser diagnostic.
        reason: String,
    },

    /// An embedded document is missing a required key, or the key does not
    /// hold the expected array.
    MissingDocumentKey {
        /// The required key.
        key: &'static str,
    },

    /// A token chain entry was not a string.
    NonStringToken,

    /// A field holds a value outside its enumerated legal range.
    InvalidEnumValue {
        /// Which field was malformed.
        field: &'static str,
        /// The raw value found on the wire.
        value: u32,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary(err) => write!(f, "{err}"),
            Self::UnexpectedPacketId { expected, actual } => {
                write!(f, "invalid packet ID: expected {expected}, got {actual}")
            }
            Self::BlobHashesOverLimit { limit, actual } => {
                write!(f, "expected at most {limit} blob hashes, got {actual}")
            }
            Self::NonPositiveLength { field, length } => {
                write!(f, "invalid {field} length: {length}")
            }
            Self::MalformedDocument { reason } => {
                write!(f, "failed decoding embedded document: {reason}")
            }
            Self::MissingDocumentKey { key } => {
                write!(f, "invalid document structure for key: {key}")
            }
            Self::NonStringToken => write!(f, "token chain entry must be a string"),
            Self::InvalidEnumValue { field, value } => {
                write!(f, "invalid {field} value: {value}")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Binary(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BinaryError> for DecodeError {
    fn from(err: BinaryError) -> Self {
        Self::Binary(err)
    }
}

/// A decode failure wrapped with the originating packet type's display name.
///
/// Built only at the envelope boundary, so callers always receive one
/// failure shape with full diagnostic context regardless of which layer
/// rejected the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketDecodeError {
    packet: &'static str,
    kind: DecodeError,
}

impl PacketDecodeError {
    /// Wraps a payload-level failure with the packet's display name.
    #[must_use]
    pub const fn wrap(kind: DecodeError, packet: &'static str) -> Self {
        Self { packet, kind }
    }

    /// The display name of the packet type that failed to decode.
    #[must_use]
    pub const fn packet_name(&self) -> &'static str {
        self.packet
    }

    /// The underlying failure.
    #[must_use]
    pub const fn kind(&self) -> &DecodeError {
        &self.kind
    }
}

impl fmt::Display for PacketDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error decoding {}: {}", self.packet, self.kind)
    }
}

impl std::error::Error for PacketDecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
