//! Structure block value types: authoring settings and editor metadata.
//!
//! These are plain data holders with range-enforcing setters. Higher-level
//! payload codecs read and write them as nested structures, field by field,
//! with the same serializer primitives as everything else.

use binary::{BinaryReader, BinaryWriter};

use crate::error::DecodeError;
use crate::types::{BlockPosition, Vec3};

/// Structure authoring settings, nested inside structure block packets.
///
/// Rotation is kept in degrees ({0, 90, 180, 270}); the wire carries the
/// quarter-turn index in one byte.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureSettings {
    pub palette_name: String,
    pub ignore_entities: bool,
    pub ignore_blocks: bool,
    pub allow_non_ticking_chunks: bool,
    pub dimensions: BlockPosition,
    pub offset: BlockPosition,
    pub last_touched_by_player_id: i64,
    pub rotation: u16,
    pub mirror: u8,
    pub animation_mode: u8,
    pub animation_seconds: f32,
    pub integrity_value: f32,
    pub integrity_seed: u32,
    pub pivot: Vec3,
}

impl Default for StructureSettings {
    fn default() -> Self {
        Self {
            palette_name: String::new(),
            ignore_entities: false,
            ignore_blocks: false,
            allow_non_ticking_chunks: false,
            dimensions: BlockPosition::default(),
            offset: BlockPosition::default(),
            last_touched_by_player_id: 0,
            rotation: 0,
            mirror: 0,
            animation_mode: 0,
            animation_seconds: 0.0,
            integrity_value: 1.0,
            integrity_seed: 0,
            pivot: Vec3::default(),
        }
    }
}

impl StructureSettings {
    const VALID_ROTATIONS: [u16; 4] = [0, 90, 180, 270];

    /// Returns `true` if the rotation is one of the four legal quarter turns.
    #[must_use]
    pub fn is_valid_rotation(&self) -> bool {
        Self::VALID_ROTATIONS.contains(&self.rotation)
    }

    /// Returns `true` if the mirror flag is in its legal range.
    #[must_use]
    pub const fn is_valid_mirror(&self) -> bool {
        self.mirror <= 1
    }

    /// Sets the integrity value, clamped into `[0, 1]`.
    pub fn set_integrity(&mut self, value: f32) {
        self.integrity_value = value.clamp(0.0, 1.0);
    }

    /// Sets the palette name.
    pub fn set_palette_name(&mut self, name: impl Into<String>) {
        self.palette_name = name.into();
    }

    /// Sets the animation duration and mode together.
    pub fn set_animation(&mut self, seconds: f32, mode: u8) {
        self.animation_seconds = seconds;
        self.animation_mode = mode;
    }

    /// Reads settings as a nested structure.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self, DecodeError> {
        let palette_name = reader.read_string()?;
        let ignore_entities = reader.read_bool()?;
        let ignore_blocks = reader.read_bool()?;
        let allow_non_ticking_chunks = reader.read_bool()?;
        let dimensions = BlockPosition::read(reader)?;
        let offset = BlockPosition::read(reader)?;
        let last_touched_by_player_id = reader.read_vars64()?;

        let rotation_index = reader.read_u8()?;
        if rotation_index > 3 {
            return Err(DecodeError::InvalidEnumValue {
                field: "rotation",
                value: u32::from(rotation_index),
            });
        }
        let mirror = reader.read_u8()?;
        if mirror > 1 {
            return Err(DecodeError::InvalidEnumValue {
                field: "mirror",
                value: u32::from(mirror),
            });
        }

        Ok(Self {
            palette_name,
            ignore_entities,
            ignore_blocks,
            allow_non_ticking_chunks,
            dimensions,
            offset,
            last_touched_by_player_id,
            rotation: u16::from(rotation_index) * 90,
            mirror,
            animation_mode: reader.read_u8()?,
            animation_seconds: reader.read_f32_le()?,
            integrity_value: reader.read_f32_le()?,
            integrity_seed: reader.read_u32_le()?,
            pivot: Vec3::read(reader)?,
        })
    }

    /// Writes settings as a nested structure.
    ///
    /// The rotation must be one of the four legal quarter turns; other
    /// values are a caller invariant violation and encode as zero turns.
    pub fn write(&self, writer: &mut BinaryWriter) {
        writer.write_string(&self.palette_name);
        writer.write_bool(self.ignore_entities);
        writer.write_bool(self.ignore_blocks);
        writer.write_bool(self.allow_non_ticking_chunks);
        self.dimensions.write(writer);
        self.offset.write(writer);
        writer.write_vars64(self.last_touched_by_player_id);
        writer.write_u8((self.rotation / 90 % 4) as u8);
        writer.write_u8(self.mirror);
        writer.write_u8(self.animation_mode);
        writer.write_f32_le(self.animation_seconds);
        writer.write_f32_le(self.integrity_value);
        writer.write_u32_le(self.integrity_seed);
        self.pivot.write(writer);
    }
}

/// Structure editor metadata, wrapping [`StructureSettings`] with block
/// identity and save-mode fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureEditorData {
    pub structure_name: String,
    pub structure_data_field: String,
    pub include_players: bool,
    pub show_bounding_box: bool,
    pub structure_block_type: i32,
    pub structure_settings: StructureSettings,
    pub structure_redstone_save_mode: i32,
}

impl StructureEditorData {
    pub const TYPE_DATA: i32 = 0;
    pub const TYPE_SAVE: i32 = 1;
    pub const TYPE_LOAD: i32 = 2;
    pub const TYPE_CORNER: i32 = 3;
    pub const TYPE_INVALID: i32 = 4;
    pub const TYPE_EXPORT: i32 = 5;

    /// Returns `true` if the block type is one of the defined variants.
    #[must_use]
    pub const fn is_valid_structure_block_type(&self) -> bool {
        self.structure_block_type >= Self::TYPE_DATA && self.structure_block_type <= Self::TYPE_EXPORT
    }

    /// Human-readable name for the block type.
    #[must_use]
    pub const fn block_type_as_str(&self) -> &'static str {
        match self.structure_block_type {
            Self::TYPE_DATA => "Data Block",
            Self::TYPE_SAVE => "Save Block",
            Self::TYPE_LOAD => "Load Block",
            Self::TYPE_CORNER => "Corner Block",
            Self::TYPE_INVALID => "Invalid Block",
            Self::TYPE_EXPORT => "Export Block",
            _ => "Unknown",
        }
    }

    /// Sets the structure name.
    pub fn set_structure_name(&mut self, name: impl Into<String>) {
        self.structure_name = name.into();
    }

    /// Sets the redstone save mode, rejecting negative modes.
    ///
    /// Returns `false` and leaves the field unchanged if `mode` is negative.
    pub fn set_redstone_save_mode(&mut self, mode: i32) -> bool {
        if mode >= 0 {
            self.structure_redstone_save_mode = mode;
            return true;
        }
        false
    }

    /// Reads editor metadata as a nested structure.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self, DecodeError> {
        let structure_name = reader.read_string()?;
        let structure_data_field = reader.read_string()?;
        let include_players = reader.read_bool()?;
        let show_bounding_box = reader.read_bool()?;

        let structure_block_type = reader.read_vars32()?;
        if !(Self::TYPE_DATA..=Self::TYPE_EXPORT).contains(&structure_block_type) {
            return Err(DecodeError::InvalidEnumValue {
                field: "structure block type",
                value: structure_block_type as u32,
            });
        }

        Ok(Self {
            structure_name,
            structure_data_field,
            include_players,
            show_bounding_box,
            structure_block_type,
            structure_settings: StructureSettings::read(reader)?,
            structure_redstone_save_mode: reader.read_vars32()?,
        })
    }

    /// Writes editor metadata as a nested structure.
    pub fn write(&self, writer: &mut BinaryWriter) {
        writer.write_string(&self.structure_name);
        writer.write_string(&self.structure_data_field);
        writer.write_bool(self.include_players);
        writer.write_bool(self.show_bounding_box);
        writer.write_vars32(self.structure_block_type);
        self.structure_settings.write(writer);
        writer.write_vars32(self.structure_redstone_save_mode);
    }
}

impl Default for StructureEditorData {
    fn default() -> Self {
        Self {
            structure_name: String::new(),
            structure_data_field: String::new(),
            include_players: false,
            show_bounding_box: true,
            structure_block_type: Self::TYPE_DATA,
            structure_settings: StructureSettings::default(),
            structure_redstone_save_mode: 0,
        }
    }
}
