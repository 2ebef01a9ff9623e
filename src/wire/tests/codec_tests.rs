//! Tests for the message reader and writer

use std::io::Cursor;

use super::test_utils::{create_coordinate_buffer, sample_coordinate_sets};
use crate::errors::CoordError;
use crate::io::byte_order::ByteOrder;
use crate::msg::{Coordinate, CoordinateMessage, CoordinateSet, Header, MessageKind, Time};
use crate::wire::constants::FILE_HEADER_SIZE;
use crate::wire::{MessageReader, MessageWriter};

fn expected_coordinate() -> Coordinate {
    Coordinate {
        header: Header { seq: 7, stamp: Time::new(10, 20), frame_id: "map".to_string() },
        x: 1.5,
        y: -2.0,
    }
}

#[test]
fn test_read_known_layout() {
    let buffer = create_coordinate_buffer();
    let mut reader = MessageReader::new();

    let message = reader.read_message(&mut Cursor::new(buffer)).unwrap();
    assert_eq!(message, CoordinateMessage::Coordinate(expected_coordinate()));
    assert_eq!(reader.byte_order(), Some(ByteOrder::LittleEndian));
}

#[test]
fn test_write_known_layout() {
    let writer = MessageWriter::new(ByteOrder::LittleEndian);
    let bytes = writer.to_bytes(&expected_coordinate().into()).unwrap();
    assert_eq!(bytes, create_coordinate_buffer());
}

#[test]
fn test_big_endian_layout() {
    let writer = MessageWriter::new(ByteOrder::BigEndian);
    assert_eq!(writer.byte_order(), ByteOrder::BigEndian);
    let bytes = writer.to_bytes(&expected_coordinate().into()).unwrap();

    assert_eq!(&bytes[0..5], &[0x4D, 0x4D, 0x43, 0x58, 0x01]);
    assert_eq!(&bytes[5..9], &[0, 0, 0, 7]);

    let message = MessageReader::new().read_bytes(&bytes).unwrap();
    assert_eq!(message, CoordinateMessage::Coordinate(expected_coordinate()));
}

#[test]
fn test_nested_roundtrip_both_orders() {
    let original: CoordinateMessage = sample_coordinate_sets().into();

    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let bytes = MessageWriter::new(order).to_bytes(&original).unwrap();
        let mut reader = MessageReader::new();
        let decoded = reader.read_bytes(&bytes).unwrap();

        assert_eq!(decoded, original);
        assert_eq!(decoded.kind(), MessageKind::CoordinateSets);
        assert_eq!(reader.byte_order(), Some(order));
    }
}

#[test]
fn test_empty_set_roundtrip() {
    let original: CoordinateMessage = CoordinateSet::default().into();
    let bytes = MessageWriter::default().to_bytes(&original).unwrap();

    // seq, secs, nsecs, frame id length, count
    assert_eq!(bytes.len(), FILE_HEADER_SIZE + 4 * 5);
    assert_eq!(MessageReader::new().read_bytes(&bytes).unwrap(), original);
}

#[test]
fn test_body_only_reader() {
    let writer = MessageWriter::new(ByteOrder::BigEndian);
    let mut body = Vec::new();
    writer.write_coordinate(&mut body, &expected_coordinate()).unwrap();

    let reader = MessageReader::with_byte_order(ByteOrder::BigEndian);
    let decoded = reader.read_coordinate(&mut Cursor::new(body)).unwrap();
    assert_eq!(decoded, expected_coordinate());
}

#[test]
fn test_body_read_without_byte_order_fails() {
    let reader = MessageReader::new();
    let result = reader.read_coordinate(&mut Cursor::new(vec![0u8; 64]));
    assert!(matches!(result, Err(CoordError::GenericError(_))));
}

#[test]
fn test_invalid_marker() {
    let mut buffer = create_coordinate_buffer();
    buffer[0] = 0x12;
    let result = MessageReader::new().read_bytes(&buffer);
    assert!(matches!(result, Err(CoordError::InvalidByteOrder(_))));
}

#[test]
fn test_invalid_magic() {
    let mut buffer = create_coordinate_buffer();
    buffer[2] = 0x00;
    let result = MessageReader::new().read_bytes(&buffer);
    assert!(matches!(result, Err(CoordError::InvalidMagic(_))));
}

#[test]
fn test_unknown_kind() {
    let mut buffer = create_coordinate_buffer();
    buffer[4] = 9;
    let result = MessageReader::new().read_bytes(&buffer);
    assert!(matches!(result, Err(CoordError::UnknownMessageKind(9))));
}

#[test]
fn test_truncated_input() {
    let buffer = create_coordinate_buffer();
    let result = MessageReader::new().read_bytes(&buffer[..buffer.len() - 3]);
    assert!(matches!(result, Err(CoordError::IoError(_))));
}

#[test]
fn test_invalid_frame_id() {
    let mut buffer = create_coordinate_buffer();
    // First byte of "map" sits after file header (5) and seq/secs/nsecs/len (16)
    buffer[21] = 0xFF;
    let result = MessageReader::new().read_bytes(&buffer);
    assert!(matches!(result, Err(CoordError::InvalidFrameId)));
}

#[test]
fn test_oversized_frame_id_length_rejected() {
    let mut buffer = create_coordinate_buffer();
    buffer[17..21].copy_from_slice(&u32::MAX.to_le_bytes());
    let result = MessageReader::new().read_bytes(&buffer);
    assert!(matches!(result, Err(CoordError::FrameIdTooLong(_))));
}

#[test]
fn test_oversized_frame_id_not_written() {
    let mut msg = expected_coordinate();
    msg.header.frame_id = "x".repeat(0x1_0000);
    let result = MessageWriter::default().to_bytes(&msg.into());
    assert!(matches!(result, Err(CoordError::FrameIdTooLong(0x1_0000))));
}

#[test]
fn test_huge_count_does_not_preallocate() {
    let writer = MessageWriter::default();
    let mut bytes = writer.to_bytes(&CoordinateSet::default().into()).unwrap();
    let count_offset = bytes.len() - 4;
    bytes[count_offset..].copy_from_slice(&u32::MAX.to_le_bytes());

    let result = MessageReader::new().read_bytes(&bytes);
    assert!(matches!(result, Err(CoordError::IoError(_))));
}

#[test]
fn test_out_of_range_nanoseconds_rejected() {
    let mut buffer = create_coordinate_buffer();
    // nsecs follows the file header (5), seq (4) and secs (4)
    buffer[13..17].copy_from_slice(&1_500_000_000u32.to_le_bytes());

    let result = MessageReader::new().read_bytes(&buffer);
    assert!(matches!(result, Err(CoordError::InvalidStamp { secs: 10, nsecs: 1_500_000_000 })));
}

#[test]
fn test_extreme_stamps_roundtrip_exactly() {
    let mut msg = expected_coordinate();
    msg.header.stamp = Time::new(1, 1_500_000_000);
    assert_eq!(msg.header.stamp, Time::new(2, 500_000_000));

    for stamp in [Time::new(u32::MAX, 999_999_999), msg.header.stamp] {
        msg.header.stamp = stamp;
        let bytes = MessageWriter::default().to_bytes(&msg.clone().into()).unwrap();
        let decoded = MessageReader::new().read_bytes(&bytes).unwrap().into_coordinate().unwrap();
        assert_eq!(decoded.header.stamp, stamp);
        assert_eq!(decoded, msg);
    }
}
