//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the state manager ports.

pub mod memory_state;

pub use memory_state::*;
