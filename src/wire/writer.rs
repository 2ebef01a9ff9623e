//! Serialization of coordinate messages
//!
//! Fields are written in declaration order. Sequences carry a u32 count
//! prefix and the frame id is a u32 length followed by UTF-8 bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::errors::{CoordError, CoordResult};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::msg::{Coordinate, CoordinateMessage, CoordinateSet, CoordinateSets, Header, Time};
use super::constants::{MAX_FRAME_ID_LEN, MESSAGE_MAGIC};

/// Writes coordinate messages in a fixed byte order
pub struct MessageWriter {
    byte_order: ByteOrder,
    handler: Box<dyn ByteOrderHandler>,
}

impl MessageWriter {
    /// Create a writer for the given byte order
    pub fn new(byte_order: ByteOrder) -> Self {
        MessageWriter {
            byte_order,
            handler: byte_order.create_handler(),
        }
    }

    /// Byte order this writer produces
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Write a complete message file: marker, magic, kind, then the message
    pub fn write_message(&self, writer: &mut dyn Write, message: &CoordinateMessage) -> CoordResult<()> {
        self.byte_order.write_marker(writer)?;
        self.handler.write_u16(writer, MESSAGE_MAGIC)?;
        writer.write_all(&[message.kind().code()])?;

        match message {
            CoordinateMessage::Coordinate(msg) => self.write_coordinate(writer, msg),
            CoordinateMessage::CoordinateSet(msg) => self.write_coordinate_set(writer, msg),
            CoordinateMessage::CoordinateSets(msg) => self.write_coordinate_sets(writer, msg),
        }
    }

    /// Write a message file to disk
    pub fn write_file<P: AsRef<Path>>(&self, path: P, message: &CoordinateMessage) -> CoordResult<()> {
        let path = path.as_ref();
        debug!("Writing {} message to {} ({})",
               message.kind().name(), path.display(), self.byte_order.name());

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_message(&mut writer, message)?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize a message file into memory
    pub fn to_bytes(&self, message: &CoordinateMessage) -> CoordResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_message(&mut buffer, message)?;
        Ok(buffer)
    }

    /// Write a time stamp
    pub fn write_time(&self, writer: &mut dyn Write, time: &Time) -> CoordResult<()> {
        self.handler.write_u32(writer, time.secs())?;
        self.handler.write_u32(writer, time.nsecs())?;
        Ok(())
    }

    /// Write a message header
    pub fn write_header(&self, writer: &mut dyn Write, header: &Header) -> CoordResult<()> {
        self.handler.write_u32(writer, header.seq)?;
        self.write_time(writer, &header.stamp)?;

        let frame_id = header.frame_id.as_bytes();
        if frame_id.len() > MAX_FRAME_ID_LEN {
            return Err(CoordError::FrameIdTooLong(frame_id.len()));
        }
        self.handler.write_u32(writer, frame_id.len() as u32)?;
        writer.write_all(frame_id)?;
        Ok(())
    }

    /// Write a single coordinate (no file header)
    pub fn write_coordinate(&self, writer: &mut dyn Write, msg: &Coordinate) -> CoordResult<()> {
        self.write_header(writer, &msg.header)?;
        self.handler.write_f64(writer, msg.x)?;
        self.handler.write_f64(writer, msg.y)?;
        Ok(())
    }

    /// Write a coordinate set (no file header)
    pub fn write_coordinate_set(&self, writer: &mut dyn Write, msg: &CoordinateSet) -> CoordResult<()> {
        self.write_header(writer, &msg.header)?;
        self.write_count(writer, msg.data.len())?;
        for coordinate in &msg.data {
            self.write_coordinate(writer, coordinate)?;
        }
        Ok(())
    }

    /// Write a list of coordinate sets (no file header)
    pub fn write_coordinate_sets(&self, writer: &mut dyn Write, msg: &CoordinateSets) -> CoordResult<()> {
        self.write_header(writer, &msg.header)?;
        self.write_count(writer, msg.data.len())?;
        for set in &msg.data {
            self.write_coordinate_set(writer, set)?;
        }
        Ok(())
    }

    fn write_count(&self, writer: &mut dyn Write, count: usize) -> CoordResult<()> {
        let count = u32::try_from(count).map_err(|_| CoordError::CountOverflow(count))?;
        self.handler.write_u32(writer, count)?;
        Ok(())
    }
}

impl Default for MessageWriter {
    fn default() -> Self {
        MessageWriter::new(ByteOrder::default())
    }
}
