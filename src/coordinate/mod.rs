//! In-memory coordinate types
//!
//! This module provides the plain point containers consumed by
//! downstream geometry code.

mod bbox;
mod point;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
