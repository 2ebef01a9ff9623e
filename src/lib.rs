pub mod errors;
pub mod io;
pub mod msg;
pub mod coordinate;
pub mod marshal;
pub mod wire;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::CoordKit;

pub use coordinate::{BoundingBox, Point};
pub use errors::{CoordError, CoordResult};
pub use marshal::{Clock, FixedClock, Marshaller, StepClock, SystemClock};
pub use msg::{Coordinate, CoordinateMessage, CoordinateSet, CoordinateSets, Header, MessageKind, Time};
pub use wire::{MessageReader, MessageWriter};
