//! Tests for the coordinate marshaller

use std::time::Duration;

use crate::coordinate::Point;
use crate::marshal::{FixedClock, Marshaller, StepClock};
use crate::msg::{Coordinate, CoordinateSet, CoordinateSets, Header, Time};

fn step_marshaller() -> Marshaller<StepClock> {
    Marshaller::with_clock(StepClock::new(Time::new(100, 0), Duration::from_millis(1)))
}

fn points(values: &[(f64, f64)]) -> Vec<Point> {
    values.iter().copied().map(Point::from).collect()
}

#[test]
fn test_point_roundtrip() {
    let marshaller = Marshaller::with_clock(FixedClock::new(Time::new(5, 0)));
    let point = Point::new(3.5, -2.0);

    let msg = marshaller.encode_point(&point);
    assert_eq!(msg.x, 3.5);
    assert_eq!(msg.y, -2.0);
    assert_eq!(msg.header.stamp, Time::new(5, 0));

    assert_eq!(marshaller.decode_point(&msg), Point::new(3.5, -2.0));
}

#[test]
fn test_decode_point_ignores_header() {
    let marshaller = Marshaller::new();
    let msg = Coordinate {
        header: Header { seq: 9, stamp: Time::new(1, 2), frame_id: "map".to_string() },
        x: f64::MAX,
        y: -0.0,
    };

    let point = marshaller.decode_point(&msg);
    assert_eq!(point.x, f64::MAX);
    assert!(point.y == 0.0 && point.y.is_sign_negative());
    assert_eq!(Point::from(&msg), point);
}

#[test]
fn test_point_set_roundtrip_preserves_order() {
    let marshaller = step_marshaller();
    let input = points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);

    let msg = marshaller.encode_point_set(&input);
    assert_eq!(msg.len(), 3);
    assert_eq!(marshaller.decode_point_set(&msg), input);
}

#[test]
fn test_empty_inputs_give_empty_outputs() {
    let marshaller = step_marshaller();
    let no_points: Vec<Point> = Vec::new();
    let no_sets: Vec<Vec<Point>> = Vec::new();

    let set = marshaller.encode_point_set(&no_points);
    assert!(set.is_empty());
    assert!(marshaller.decode_point_set(&set).is_empty());

    let sets = marshaller.encode_point_set_list(&no_sets);
    assert!(sets.is_empty());
    assert!(marshaller.decode_point_set_list(&sets).is_empty());

    assert!(marshaller.decode_point_set(&CoordinateSet::default()).is_empty());
    assert!(marshaller.decode_point_set_list(&CoordinateSets::default()).is_empty());
}

#[test]
fn test_point_set_list_roundtrip_keeps_empty_sets() {
    let marshaller = step_marshaller();
    let input = vec![Vec::new(), points(&[(1.0, 1.0)])];

    let msg = marshaller.encode_point_set_list(&input);
    assert_eq!(msg.len(), 2);
    assert!(msg.data[0].is_empty());
    assert_eq!(msg.point_count(), 1);

    assert_eq!(marshaller.decode_point_set_list(&msg), input);
}

#[test]
fn test_encode_overwrites_stamps() {
    let first = Marshaller::with_clock(FixedClock::new(Time::new(1, 0)));
    let second = Marshaller::with_clock(FixedClock::new(Time::new(2, 0)));
    let input = points(&[(4.0, 5.0)]);

    let msg = first.encode_point_set(&input);
    let reencoded = second.encode_point_set(&second.decode_point_set(&msg));

    assert_eq!(reencoded.header.stamp, Time::new(2, 0));
    assert_eq!(reencoded.data[0].header.stamp, Time::new(2, 0));
    assert_eq!(reencoded.data[0].x, msg.data[0].x);
    assert_eq!(reencoded.data[0].y, msg.data[0].y);
}

#[test]
fn test_successive_point_stamps_do_not_decrease() {
    let marshaller = step_marshaller();
    let mut previous = Time::default();

    for i in 0..10 {
        let msg = marshaller.encode_point(&Point::new(i as f64, 0.0));
        assert!(msg.header.stamp >= previous);
        previous = msg.header.stamp;
    }
}

#[test]
fn test_set_stamp_follows_last_element() {
    let marshaller = step_marshaller();
    let msg = marshaller.encode_point_set(&points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));

    let last = msg.data.last().map(|c| c.header.stamp).unwrap();
    assert!(msg.header.stamp > last);
    for pair in msg.data.windows(2) {
        assert!(pair[0].header.stamp < pair[1].header.stamp);
    }
}

#[test]
fn test_list_stamp_follows_every_nested_stamp() {
    let marshaller = step_marshaller();
    let input = vec![points(&[(0.0, 0.0), (1.0, 1.0)]), Vec::new(), points(&[(2.0, 2.0)])];
    let msg = marshaller.encode_point_set_list(&input);

    for set in &msg.data {
        assert!(msg.header.stamp > set.header.stamp);
        for coordinate in &set.data {
            assert!(set.header.stamp > coordinate.header.stamp);
        }
    }
}

#[test]
fn test_frame_id_is_written_to_every_header() {
    let marshaller = Marshaller::with_clock(FixedClock::new(Time::new(1, 0))).with_frame_id("odom");
    let msg = marshaller.encode_point_set_list(&[points(&[(1.0, 2.0)])]);

    assert_eq!(marshaller.frame_id(), "odom");
    assert_eq!(msg.header.frame_id, "odom");
    assert_eq!(msg.data[0].header.frame_id, "odom");
    assert_eq!(msg.data[0].data[0].header.frame_id, "odom");
    assert_eq!(msg.header.seq, 0);
}

#[test]
fn test_decode_into_appends() {
    let marshaller = step_marshaller();
    let msg = marshaller.encode_point_set(&points(&[(7.0, 8.0)]));

    let mut output = vec![Point::origin()];
    marshaller.decode_point_set_into(&msg, &mut output);
    assert_eq!(output, vec![Point::origin(), Point::new(7.0, 8.0)]);

    let list = marshaller.encode_point_set_list(&[points(&[(1.0, 1.0)])]);
    let mut nested = vec![Vec::new()];
    marshaller.decode_point_set_list_into(&list, &mut nested);
    assert_eq!(nested, vec![Vec::new(), points(&[(1.0, 1.0)])]);
}

#[test]
fn test_list_progress_hook_sees_every_slot() {
    let marshaller = step_marshaller();
    let input = vec![points(&[(1.0, 1.0)]), Vec::new(), points(&[(2.0, 2.0), (3.0, 3.0)])];

    let mut seen = Vec::new();
    let msg = marshaller.encode_point_set_list_with(&input, |index| seen.push(index));

    assert_eq!(seen, vec![0, 1, 2]);
    assert_eq!(marshaller.decode_point_set_list(&msg), input);
}
