//! Deserialization of coordinate messages
//!
//! The reader detects the byte order from the file marker and then
//! decodes fields with the matching handler. Counts read from the input
//! are not trusted for allocation.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use crate::errors::{CoordError, CoordResult};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::msg::{Coordinate, CoordinateMessage, CoordinateSet, CoordinateSets, Header, MessageKind, Time};
use super::constants::{MAX_FRAME_ID_LEN, MAX_PREALLOCATED_ELEMENTS, MESSAGE_MAGIC};

/// Reads coordinate message files
pub struct MessageReader {
    byte_order: Option<ByteOrder>,
    handler: Option<Box<dyn ByteOrderHandler>>,
}

impl MessageReader {
    /// Create a new reader; the byte order is learned from the first file read
    pub fn new() -> Self {
        MessageReader {
            byte_order: None,
            handler: None,
        }
    }

    /// Create a reader for raw message bodies in a known byte order
    pub fn with_byte_order(byte_order: ByteOrder) -> Self {
        MessageReader {
            byte_order: Some(byte_order),
            handler: Some(byte_order.create_handler()),
        }
    }

    /// Byte order of the last file read, if any
    pub fn byte_order(&self) -> Option<ByteOrder> {
        self.byte_order
    }

    /// Read a complete message file from a reader
    pub fn read_message(&mut self, reader: &mut dyn Read) -> CoordResult<CoordinateMessage> {
        let byte_order = ByteOrder::detect(reader)?;
        self.byte_order = Some(byte_order);
        self.handler = Some(byte_order.create_handler());

        let magic = self.handler()?.read_u16(reader)?;
        if magic != MESSAGE_MAGIC {
            return Err(CoordError::InvalidMagic(magic));
        }

        let mut kind_byte = [0u8; 1];
        reader.read_exact(&mut kind_byte)?;
        let kind = MessageKind::from_code(kind_byte[0])
            .ok_or(CoordError::UnknownMessageKind(kind_byte[0]))?;
        debug!("Reading {} message ({})", kind.name(), byte_order.name());

        let message = match kind {
            MessageKind::Coordinate => CoordinateMessage::Coordinate(self.read_coordinate(reader)?),
            MessageKind::CoordinateSet => CoordinateMessage::CoordinateSet(self.read_coordinate_set(reader)?),
            MessageKind::CoordinateSets => CoordinateMessage::CoordinateSets(self.read_coordinate_sets(reader)?),
        };

        let mut trailing = [0u8; 1];
        if reader.read(&mut trailing)? != 0 {
            warn!("Ignoring trailing bytes after {} message", kind.name());
        }

        Ok(message)
    }

    /// Load a message file from disk
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> CoordResult<CoordinateMessage> {
        let path = path.as_ref();
        debug!("Loading message file {}", path.display());
        let mut reader = BufReader::new(File::open(path)?);
        self.read_message(&mut reader)
    }

    /// Parse a message file held in memory
    pub fn read_bytes(&mut self, bytes: &[u8]) -> CoordResult<CoordinateMessage> {
        let mut cursor = bytes;
        self.read_message(&mut cursor)
    }

    /// Read a time stamp
    ///
    /// Nanoseconds of a whole second or more are rejected rather than carried.
    pub fn read_time(&self, reader: &mut dyn Read) -> CoordResult<Time> {
        let handler = self.handler()?;
        let secs = handler.read_u32(reader)?;
        let nsecs = handler.read_u32(reader)?;
        Time::try_new(secs, nsecs).ok_or(CoordError::InvalidStamp { secs, nsecs })
    }

    /// Read a message header
    pub fn read_header(&self, reader: &mut dyn Read) -> CoordResult<Header> {
        let seq = self.handler()?.read_u32(reader)?;
        let stamp = self.read_time(reader)?;

        let len = self.handler()?.read_u32(reader)? as usize;
        if len > MAX_FRAME_ID_LEN {
            return Err(CoordError::FrameIdTooLong(len));
        }
        let mut bytes = vec![0u8; len];
        reader.read_exact(&mut bytes)?;
        let frame_id = String::from_utf8(bytes).map_err(|_| CoordError::InvalidFrameId)?;

        Ok(Header { seq, stamp, frame_id })
    }

    /// Read a single coordinate body
    pub fn read_coordinate(&self, reader: &mut dyn Read) -> CoordResult<Coordinate> {
        let header = self.read_header(reader)?;
        let handler = self.handler()?;
        let x = handler.read_f64(reader)?;
        let y = handler.read_f64(reader)?;
        Ok(Coordinate { header, x, y })
    }

    /// Read a coordinate set body
    pub fn read_coordinate_set(&self, reader: &mut dyn Read) -> CoordResult<CoordinateSet> {
        let header = self.read_header(reader)?;
        let count = self.handler()?.read_u32(reader)? as usize;

        let mut data = Vec::with_capacity(count.min(MAX_PREALLOCATED_ELEMENTS));
        for _ in 0..count {
            data.push(self.read_coordinate(reader)?);
        }
        Ok(CoordinateSet { header, data })
    }

    /// Read a coordinate sets body
    pub fn read_coordinate_sets(&self, reader: &mut dyn Read) -> CoordResult<CoordinateSets> {
        let header = self.read_header(reader)?;
        let count = self.handler()?.read_u32(reader)? as usize;

        let mut data = Vec::with_capacity(count.min(MAX_PREALLOCATED_ELEMENTS));
        for _ in 0..count {
            data.push(self.read_coordinate_set(reader)?);
        }
        Ok(CoordinateSets { header, data })
    }

    fn handler(&self) -> CoordResult<&dyn ByteOrderHandler> {
        self.handler
            .as_deref()
            .ok_or_else(|| CoordError::GenericError("Byte order not yet known".to_string()))
    }
}

impl Default for MessageReader {
    fn default() -> Self {
        MessageReader::new()
    }
}
