//! Constants for the coordinate message file format

/// Magic number following the byte order marker ("CX")
pub const MESSAGE_MAGIC: u16 = 0x4358;

/// Bytes taken by marker, magic and kind
pub const FILE_HEADER_SIZE: usize = 5;

/// Longest frame id accepted when reading or writing
pub const MAX_FRAME_ID_LEN: usize = 0xFFFF;

/// Upper bound on capacity reserved up front from an untrusted count
pub const MAX_PREALLOCATED_ELEMENTS: usize = 4096;
