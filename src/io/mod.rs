//! I/O utilities for message files
//!
//! This module provides the byte order strategies used by the wire codec.

pub mod byte_order;
