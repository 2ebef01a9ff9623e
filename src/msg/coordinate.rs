//! Coordinate message types at the three nesting levels

use super::header::Header;

/// A single coordinate
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coordinate {
    pub header: Header,
    pub x: f64,
    pub y: f64,
}

/// An ordered set of coordinates
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinateSet {
    pub header: Header,
    pub data: Vec<Coordinate>,
}

/// An ordered list of coordinate sets
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinateSets {
    pub header: Header,
    pub data: Vec<CoordinateSet>,
}

impl CoordinateSet {
    /// Number of coordinates in the set
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the set holds no coordinates
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl CoordinateSets {
    /// Number of sets in the list
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the list holds no sets
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Total number of coordinates across all sets
    pub fn point_count(&self) -> usize {
        self.data.iter().map(CoordinateSet::len).sum()
    }
}
