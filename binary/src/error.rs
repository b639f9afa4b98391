//! Error types for binary stream operations.

use std::fmt;

/// Result type for binary stream operations.
pub type BinaryResult<T> = Result<T, BinaryError>;

/// Errors that can occur while reading from a binary stream.
///
/// Writers never fail: they append to a growable buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A varint continuation chain did not terminate within its maximum length.
    VarIntTooLong {
        /// Maximum number of bytes allowed for this varint width.
        max_bytes: usize,
    },

    /// A length-prefixed string was not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for BinaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::VarIntTooLong { max_bytes } => {
                write!(f, "varint did not terminate after {max_bytes} bytes")
            }
            Self::InvalidUtf8 => write!(f, "string is not valid UTF-8"),
        }
    }
}

impl std::error::Error for BinaryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unexpected_eof() {
        let err = BinaryError::UnexpectedEof {
            requested: 8,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("8 bytes"), "should mention requested bytes");
        assert!(msg.contains("3 bytes"), "should mention available bytes");
    }

    #[test]
    fn display_varint_too_long() {
        let err = BinaryError::VarIntTooLong { max_bytes: 5 };
        let msg = err.to_string();
        assert!(msg.contains('5'), "should mention the byte cap");
        assert!(msg.contains("varint"));
    }

    #[test]
    fn display_invalid_utf8() {
        let err = BinaryError::InvalidUtf8;
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn error_equality() {
        let err1 = BinaryError::UnexpectedEof {
            requested: 4,
            available: 0,
        };
        let err2 = BinaryError::UnexpectedEof {
            requested: 4,
            available: 0,
        };
        let err3 = BinaryError::UnexpectedEof {
            requested: 4,
            available: 1,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<BinaryError>();
    }
}
