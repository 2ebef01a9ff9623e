//! Binary message file format
//!
//! ## File layout
//! ```text
//! [Byte order marker(2)] [Magic(2)] [Kind(1)] [Message(N)]
//! ```
//!
//! ## Message layout
//! ```text
//! Time           := secs:u32 nsecs:u32
//! Header         := seq:u32 Time frame_id_len:u32 frame_id:utf8
//! Coordinate     := Header x:f64 y:f64
//! CoordinateSet  := Header count:u32 Coordinate[count]
//! CoordinateSets := Header count:u32 CoordinateSet[count]
//! ```
//!
//! Everything after the marker uses the marker's byte order.

pub mod constants;
pub mod reader;
pub mod writer;
#[cfg(test)]
mod tests;

pub use reader::MessageReader;
pub use writer::MessageWriter;
