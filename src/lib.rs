//! simd4 - Throughput comparison of the SIMD kernel against scalar math
//!
//! The kernel itself lives in the `simd4_math` crate. This crate adds the
//! scalar reference types, the timing runner and its configuration.

pub mod config;
pub mod plain;
pub mod throughput;
