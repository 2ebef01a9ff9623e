//! Byte order handling for message files
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when reading and writing
//! serialized coordinate messages.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Result, Write};

use crate::errors::{CoordError, CoordResult};

/// Marker written at the start of a little-endian file ("II")
pub const LITTLE_ENDIAN_MARKER: u16 = 0x4949;
/// Marker written at the start of a big-endian file ("MM")
pub const BIG_ENDIAN_MARKER: u16 = 0x4D4D;

/// Represents the byte order of a message file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    #[default]
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the file marker
    pub fn detect(reader: &mut dyn Read) -> CoordResult<Self> {
        // Both markers are palindromes, so the read order does not matter
        let marker = reader.read_u16::<LittleEndian>()?;
        match marker {
            LITTLE_ENDIAN_MARKER => Ok(ByteOrder::LittleEndian),
            BIG_ENDIAN_MARKER => Ok(ByteOrder::BigEndian),
            _ => Err(CoordError::InvalidByteOrder(marker)),
        }
    }

    /// Writes the marker identifying this byte order
    pub fn write_marker(&self, writer: &mut dyn Write) -> CoordResult<()> {
        writer.write_u16::<LittleEndian>(self.marker())?;
        Ok(())
    }

    /// The file marker for this byte order
    pub fn marker(&self) -> u16 {
        match self {
            ByteOrder::LittleEndian => LITTLE_ENDIAN_MARKER,
            ByteOrder::BigEndian => BIG_ENDIAN_MARKER,
        }
    }

    /// Parses a byte order name as used in config files and on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "little" | "le" | "ii" | "little-endian" => Some(ByteOrder::LittleEndian),
            "big" | "be" | "mm" | "big-endian" => Some(ByteOrder::BigEndian),
            _ => None,
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    /// Read a u16 value
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16>;

    /// Read a u32 value
    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32>;

    /// Read an f64 value
    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64>;

    /// Write a u16 value
    fn write_u16(&self, writer: &mut dyn Write, value: u16) -> Result<()>;

    /// Write a u32 value
    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()>;

    /// Write an f64 value
    fn write_f64(&self, writer: &mut dyn Write, value: f64) -> Result<()>;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16> {
        reader.read_u16::<LittleEndian>()
    }

    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }

    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64> {
        reader.read_f64::<LittleEndian>()
    }

    fn write_u16(&self, writer: &mut dyn Write, value: u16) -> Result<()> {
        writer.write_u16::<LittleEndian>(value)
    }

    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()> {
        writer.write_u32::<LittleEndian>(value)
    }

    fn write_f64(&self, writer: &mut dyn Write, value: f64) -> Result<()> {
        writer.write_f64::<LittleEndian>(value)
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16> {
        reader.read_u16::<BigEndian>()
    }

    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }

    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64> {
        reader.read_f64::<BigEndian>()
    }

    fn write_u16(&self, writer: &mut dyn Write, value: u16) -> Result<()> {
        writer.write_u16::<BigEndian>(value)
    }

    fn write_u32(&self, writer: &mut dyn Write, value: u32) -> Result<()> {
        writer.write_u32::<BigEndian>(value)
    }

    fn write_f64(&self, writer: &mut dyn Write, value: f64) -> Result<()> {
        writer.write_f64::<BigEndian>(value)
    }
}
