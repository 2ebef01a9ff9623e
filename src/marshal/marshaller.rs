//! Conversion between coordinate messages and points
//!
//! Each level is built from the one below it: sets map the single-point
//! conversion over their elements, lists map the set conversion. Decoding
//! copies `x` and `y` and drops headers. Encoding copies `x` and `y` and
//! stamps every header it creates with the marshaller's clock. Set and
//! list stamps are read once, after their last element has been appended,
//! so a container stamp is never earlier than any stamp nested inside it.

use log::trace;

use crate::coordinate::Point;
use crate::msg::{Coordinate, CoordinateSet, CoordinateSets, Header};
use super::clock::{Clock, SystemClock};

/// Converts between coordinate messages and in-memory points
#[derive(Debug, Clone, Default)]
pub struct Marshaller<C: Clock = SystemClock> {
    clock: C,
    frame_id: String,
}

impl Marshaller<SystemClock> {
    /// Create a marshaller stamping with the wall clock
    pub fn new() -> Self {
        Marshaller::with_clock(SystemClock)
    }
}

impl<C: Clock> Marshaller<C> {
    /// Create a marshaller stamping with the given clock
    pub fn with_clock(clock: C) -> Self {
        Marshaller {
            clock,
            frame_id: String::new(),
        }
    }

    /// Set the frame id written into encoded headers
    pub fn with_frame_id(mut self, frame_id: &str) -> Self {
        self.frame_id = frame_id.to_string();
        self
    }

    /// Frame id written into encoded headers
    pub fn frame_id(&self) -> &str {
        &self.frame_id
    }

    fn stamped_header(&self) -> Header {
        Header::new(self.clock.now(), &self.frame_id)
    }

    /// Convert a coordinate message to a point
    pub fn decode_point(&self, input: &Coordinate) -> Point {
        Point::new(input.x, input.y)
    }

    /// Convert a point to a coordinate message stamped with the current time
    pub fn encode_point(&self, input: &Point) -> Coordinate {
        Coordinate {
            header: self.stamped_header(),
            x: input.x,
            y: input.y,
        }
    }

    /// Convert a coordinate set message to a list of points
    pub fn decode_point_set(&self, input: &CoordinateSet) -> Vec<Point> {
        let mut output = Vec::with_capacity(input.data.len());
        self.decode_point_set_into(input, &mut output);
        output
    }

    /// Append the points of a coordinate set message to `output`
    pub fn decode_point_set_into(&self, input: &CoordinateSet, output: &mut Vec<Point>) {
        output.extend(input.data.iter().map(|coordinate| self.decode_point(coordinate)));
    }

    /// Convert a list of points to a coordinate set message
    pub fn encode_point_set(&self, input: &[Point]) -> CoordinateSet {
        let data: Vec<Coordinate> = input.iter().map(|point| self.encode_point(point)).collect();
        let header = self.stamped_header();
        trace!("Encoded coordinate set of {} points at {}", data.len(), header.stamp);

        CoordinateSet { header, data }
    }

    /// Convert a coordinate sets message to a list of point lists
    pub fn decode_point_set_list(&self, input: &CoordinateSets) -> Vec<Vec<Point>> {
        let mut output = Vec::with_capacity(input.data.len());
        self.decode_point_set_list_into(input, &mut output);
        output
    }

    /// Append the point lists of a coordinate sets message to `output`
    pub fn decode_point_set_list_into(&self, input: &CoordinateSets, output: &mut Vec<Vec<Point>>) {
        output.extend(input.data.iter().map(|set| self.decode_point_set(set)));
    }

    /// Convert a list of point lists to a coordinate sets message
    pub fn encode_point_set_list<S>(&self, input: &[S]) -> CoordinateSets
    where
        S: AsRef<[Point]>,
    {
        self.encode_point_set_list_with(input, |_| {})
    }

    /// Like [`encode_point_set_list`](Self::encode_point_set_list), calling
    /// `on_slot` with the index of each slot once it has been filled
    pub fn encode_point_set_list_with<S, F>(&self, input: &[S], mut on_slot: F) -> CoordinateSets
    where
        S: AsRef<[Point]>,
        F: FnMut(usize),
    {
        let mut data = vec![CoordinateSet::default(); input.len()];
        for (index, (slot, points)) in data.iter_mut().zip(input).enumerate() {
            *slot = self.encode_point_set(points.as_ref());
            on_slot(index);
        }
        let header = self.stamped_header();
        trace!("Encoded {} coordinate sets at {}", data.len(), header.stamp);

        CoordinateSets { header, data }
    }
}

impl From<&Coordinate> for Point {
    fn from(input: &Coordinate) -> Self {
        Point::new(input.x, input.y)
    }
}
