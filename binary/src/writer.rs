//! Byte-level writer for encoding binary data.

/// A growable byte buffer writer.
///
/// Writes are accumulated in an internal buffer. Call [`finish`](Self::finish)
/// to take the final byte buffer, or [`finish_into`](Self::finish_into) to
/// append it to an existing one. Write operations never fail.
#[derive(Debug, Default)]
pub struct BinaryWriter {
    buf: Vec<u8>,
}

impl BinaryWriter {
    /// Creates a new empty `BinaryWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `BinaryWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.buf);
    }

    /// Writes a raw block of bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Writes a single-byte boolean: exactly 1 for `true`, 0 for `false`.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    /// Writes a `u16` (little-endian).
    pub fn write_u16_le(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes a `u32` (little-endian).
    pub fn write_u32_le(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes an `i32` (little-endian).
    pub fn write_i32_le(&mut self, value: i32) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes an `i32` (big-endian).
    pub fn write_i32_be(&mut self, value: i32) {
        self.write_bytes(&value.to_be_bytes());
    }

    /// Writes a `u64` (little-endian).
    pub fn write_u64_le(&mut self, value: u64) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes an `f32` (little-endian).
    pub fn write_f32_le(&mut self, value: f32) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Writes an unsigned 32-bit varint in minimal-length form.
    pub fn write_varu32(&mut self, mut value: u32) {
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.buf.push(byte);
            if value == 0 {
                return;
            }
        }
    }

    /// Writes a zigzag-encoded signed 32-bit varint.
    pub fn write_vars32(&mut self, value: i32) {
        self.write_varu32(((value << 1) ^ (value >> 31)) as u32);
    }

    /// Writes an unsigned 64-bit varint in minimal-length form.
    pub fn write_varu64(&mut self, mut value: u64) {
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.buf.push(byte);
            if value == 0 {
                return;
            }
        }
    }

    /// Writes a zigzag-encoded signed 64-bit varint.
    pub fn write_vars64(&mut self, value: i64) {
        self.write_varu64(((value << 1) ^ (value >> 63)) as u64);
    }

    /// Writes a varint-length-prefixed byte string.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len()` exceeds `u32::MAX`; the wire format cannot
    /// represent longer strings, so this is a caller invariant violation.
    pub fn write_bytes_prefixed(&mut self, bytes: &[u8]) {
        let len = u32::try_from(bytes.len()).expect("byte string length exceeds u32::MAX");
        self.write_varu32(len);
        self.write_bytes(bytes);
    }

    /// Writes a varint-length-prefixed UTF-8 string.
    pub fn write_string(&mut self, value: &str) {
        self.write_bytes_prefixed(value.as_bytes());
    }
}
