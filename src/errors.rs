//! Custom error types for coordinate message handling

use std::fmt;
use std::io;

/// Errors raised while reading, writing or parsing coordinate data
///
/// The marshaller itself never fails; these cover the codec, the text
/// point format, configuration and the CLI.
#[derive(Debug)]
pub enum CoordError {
    /// I/O error
    IoError(io::Error),
    /// Invalid byte order marker at the start of a message file
    InvalidByteOrder(u16),
    /// Magic number did not match
    InvalidMagic(u16),
    /// Message kind byte is not one we know
    UnknownMessageKind(u8),
    /// A different message kind was found than the one requested
    UnexpectedMessageKind {
        /// Kind the caller asked for
        expected: &'static str,
        /// Kind stored in the file
        found: &'static str,
    },
    /// Header stamp with nanoseconds outside `0..1_000_000_000`
    InvalidStamp {
        /// Seconds field as read
        secs: u32,
        /// Nanoseconds field as read
        nsecs: u32,
    },
    /// Frame id is not valid UTF-8
    InvalidFrameId,
    /// Frame id length exceeds the allowed maximum
    FrameIdTooLong(usize),
    /// Sequence length does not fit the wire format's u32 count
    CountOverflow(usize),
    /// A point in the text format could not be parsed
    InvalidPoint {
        /// 1-based line number
        line: usize,
        /// Offending text
        text: String,
    },
    /// Configuration problem
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::IoError(e) => write!(f, "I/O error: {}", e),
            CoordError::InvalidByteOrder(v) => write!(f, "Invalid byte order marker: {:#06x}", v),
            CoordError::InvalidMagic(v) => write!(f, "Invalid message magic: {:#06x}", v),
            CoordError::UnknownMessageKind(k) => write!(f, "Unknown message kind: {}", k),
            CoordError::UnexpectedMessageKind { expected, found } =>
                write!(f, "Expected a {} message but found {}", expected, found),
            CoordError::InvalidStamp { secs, nsecs } =>
                write!(f, "Invalid stamp {}s {}ns: nanoseconds must be below one second", secs, nsecs),
            CoordError::InvalidFrameId => write!(f, "Frame id is not valid UTF-8"),
            CoordError::FrameIdTooLong(len) => write!(f, "Frame id too long: {} bytes", len),
            CoordError::CountOverflow(len) => write!(f, "Sequence too long for message: {} elements", len),
            CoordError::InvalidPoint { line, text } =>
                write!(f, "Invalid point on line {}: '{}'", line, text),
            CoordError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CoordError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CoordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoordError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CoordError {
    fn from(error: io::Error) -> Self {
        CoordError::IoError(error)
    }
}

impl From<String> for CoordError {
    fn from(msg: String) -> Self {
        CoordError::GenericError(msg)
    }
}

/// Result type for coordinate operations
pub type CoordResult<T> = Result<T, CoordError>;
