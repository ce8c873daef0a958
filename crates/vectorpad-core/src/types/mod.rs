//! Common type aliases used across VectorPad crates.

pub mod aliases;

pub use aliases::*;
