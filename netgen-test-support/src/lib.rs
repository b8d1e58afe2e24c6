//! Shared test utilities used across netgen crates.

pub mod ci;
pub mod tracing;
