//! # Domain Layer (Inner Hexagon)
//!
//! Value objects and pure functions for the state manager calling convention.
//! NO I/O, NO backend access.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
