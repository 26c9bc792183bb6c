//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions between the state manager and the outside world.
//!
//! - **Driven Ports (Outbound)**: `StateBackend`
//! - No concrete implementations in this module

pub mod outbound;

pub use outbound::*;
