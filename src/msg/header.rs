//! Standard message header

use super::time::Time;

/// Header carried by every coordinate message
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Header {
    /// Sequence number, owned by the transport
    pub seq: u32,
    /// Time the message was produced
    pub stamp: Time,
    /// Reference frame the coordinates are expressed in
    pub frame_id: String,
}

impl Header {
    /// Create a header with the given stamp and frame
    pub fn new(stamp: Time, frame_id: &str) -> Self {
        Header {
            seq: 0,
            stamp,
            frame_id: frame_id.to_string(),
        }
    }
}
