//! Small positional value types read and written as nested wire structures.

use binary::{BinaryReader, BinaryResult, BinaryWriter};

/// A 3-component floating-point position, three `f32` little-endian on the
/// wire.
///
/// This is a wire value, not a math type; vector arithmetic belongs to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Creates a position from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Reads a position, x then y then z.
    pub fn read(reader: &mut BinaryReader<'_>) -> BinaryResult<Self> {
        Ok(Self {
            x: reader.read_f32_le()?,
            y: reader.read_f32_le()?,
            z: reader.read_f32_le()?,
        })
    }

    /// Writes a position, x then y then z.
    pub fn write(self, writer: &mut BinaryWriter) {
        writer.write_f32_le(self.x);
        writer.write_f32_le(self.y);
        writer.write_f32_le(self.z);
    }
}

/// A chunk column coordinate pair, two signed varints on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChunkPosition {
    pub x: i32,
    pub z: i32,
}

impl ChunkPosition {
    /// Creates a chunk coordinate pair.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Reads a chunk coordinate pair.
    pub fn read(reader: &mut BinaryReader<'_>) -> BinaryResult<Self> {
        Ok(Self {
            x: reader.read_vars32()?,
            z: reader.read_vars32()?,
        })
    }

    /// Writes a chunk coordinate pair.
    pub fn write(self, writer: &mut BinaryWriter) {
        writer.write_vars32(self.x);
        writer.write_vars32(self.z);
    }
}

/// A block coordinate triple: signed varint x and z, unsigned varint y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPosition {
    pub x: i32,
    pub y: u32,
    pub z: i32,
}

impl BlockPosition {
    /// Creates a block coordinate triple.
    #[must_use]
    pub const fn new(x: i32, y: u32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Reads a block coordinate triple.
    pub fn read(reader: &mut BinaryReader<'_>) -> BinaryResult<Self> {
        Ok(Self {
            x: reader.read_vars32()?,
            y: reader.read_varu32()?,
            z: reader.read_vars32()?,
        })
    }

    /// Writes a block coordinate triple.
    pub fn write(self, writer: &mut BinaryWriter) {
        writer.write_vars32(self.x);
        writer.write_varu32(self.y);
        writer.write_vars32(self.z);
    }
}
