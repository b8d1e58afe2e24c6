//! Benchmark support crate for netgen.
//!
//! Provides parameter types, seeded fixtures, and a setup error used by the
//! Criterion benchmarks for the two generators and the metrics collaborator.

pub mod error;
pub mod params;
pub mod reference;
