//! Coordinate marshalling
//!
//! Converts coordinate messages into plain points for geometry code and
//! back, stamping encoded messages through an injectable [`Clock`].

pub mod clock;
mod marshaller;
#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, StepClock, SystemClock};
pub use marshaller::Marshaller;
