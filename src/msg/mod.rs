//! Coordinate message schemas
//!
//! These mirror the messaging framework's record layouts: every message
//! carries a [`Header`], and the set types nest the level below them in a
//! `data` sequence.

mod coordinate;
mod header;
mod time;

use crate::errors::{CoordError, CoordResult};

pub use self::coordinate::{Coordinate, CoordinateSet, CoordinateSets};
pub use self::header::Header;
pub use self::time::Time;

/// Which of the three message levels a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Single coordinate
    Coordinate,
    /// Set of coordinates
    CoordinateSet,
    /// List of coordinate sets
    CoordinateSets,
}

impl MessageKind {
    /// Wire identifier for this kind
    pub fn code(&self) -> u8 {
        match self {
            MessageKind::Coordinate => 1,
            MessageKind::CoordinateSet => 2,
            MessageKind::CoordinateSets => 3,
        }
    }

    /// Look up a kind by its wire identifier
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(MessageKind::Coordinate),
            2 => Some(MessageKind::CoordinateSet),
            3 => Some(MessageKind::CoordinateSets),
            _ => None,
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            MessageKind::Coordinate => "coordinate",
            MessageKind::CoordinateSet => "coordinate set",
            MessageKind::CoordinateSets => "coordinate sets",
        }
    }

    /// Parse the CLI spelling: `point`, `set` or `sets`
    pub fn from_level(level: &str) -> Option<Self> {
        match level.to_lowercase().as_str() {
            "point" | "coordinate" => Some(MessageKind::Coordinate),
            "set" => Some(MessageKind::CoordinateSet),
            "sets" | "list" => Some(MessageKind::CoordinateSets),
            _ => None,
        }
    }
}

/// Any one of the coordinate messages
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateMessage {
    Coordinate(Coordinate),
    CoordinateSet(CoordinateSet),
    CoordinateSets(CoordinateSets),
}

impl CoordinateMessage {
    /// Kind of the wrapped message
    pub fn kind(&self) -> MessageKind {
        match self {
            CoordinateMessage::Coordinate(_) => MessageKind::Coordinate,
            CoordinateMessage::CoordinateSet(_) => MessageKind::CoordinateSet,
            CoordinateMessage::CoordinateSets(_) => MessageKind::CoordinateSets,
        }
    }

    /// Top-level header of the wrapped message
    pub fn header(&self) -> &Header {
        match self {
            CoordinateMessage::Coordinate(msg) => &msg.header,
            CoordinateMessage::CoordinateSet(msg) => &msg.header,
            CoordinateMessage::CoordinateSets(msg) => &msg.header,
        }
    }

    /// Unwrap a single coordinate, failing for the other kinds
    pub fn into_coordinate(self) -> CoordResult<Coordinate> {
        match self {
            CoordinateMessage::Coordinate(msg) => Ok(msg),
            other => Err(other.mismatch(MessageKind::Coordinate)),
        }
    }

    /// Unwrap a coordinate set, failing for the other kinds
    pub fn into_coordinate_set(self) -> CoordResult<CoordinateSet> {
        match self {
            CoordinateMessage::CoordinateSet(msg) => Ok(msg),
            other => Err(other.mismatch(MessageKind::CoordinateSet)),
        }
    }

    /// Unwrap a list of coordinate sets, failing for the other kinds
    pub fn into_coordinate_sets(self) -> CoordResult<CoordinateSets> {
        match self {
            CoordinateMessage::CoordinateSets(msg) => Ok(msg),
            other => Err(other.mismatch(MessageKind::CoordinateSets)),
        }
    }

    fn mismatch(&self, expected: MessageKind) -> CoordError {
        CoordError::UnexpectedMessageKind {
            expected: expected.name(),
            found: self.kind().name(),
        }
    }
}

impl From<Coordinate> for CoordinateMessage {
    fn from(msg: Coordinate) -> Self {
        CoordinateMessage::Coordinate(msg)
    }
}

impl From<CoordinateSet> for CoordinateMessage {
    fn from(msg: CoordinateSet) -> Self {
        CoordinateMessage::CoordinateSet(msg)
    }
}

impl From<CoordinateSets> for CoordinateMessage {
    fn from(msg: CoordinateSets) -> Self {
        CoordinateMessage::CoordinateSets(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        for kind in [MessageKind::Coordinate, MessageKind::CoordinateSet, MessageKind::CoordinateSets] {
            assert_eq!(MessageKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(MessageKind::from_code(0), None);
        assert_eq!(MessageKind::from_code(4), None);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(MessageKind::from_level("Point"), Some(MessageKind::Coordinate));
        assert_eq!(MessageKind::from_level("set"), Some(MessageKind::CoordinateSet));
        assert_eq!(MessageKind::from_level("sets"), Some(MessageKind::CoordinateSets));
        assert_eq!(MessageKind::from_level("cube"), None);
    }

    #[test]
    fn test_into_kind() {
        let message: CoordinateMessage = CoordinateSet::default().into();
        assert_eq!(message.header(), &Header::default());
        assert!(message.clone().into_coordinate_set().is_ok());

        match message.into_coordinate() {
            Err(CoordError::UnexpectedMessageKind { expected, found }) => {
                assert_eq!(expected, "coordinate");
                assert_eq!(found, "coordinate set");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
