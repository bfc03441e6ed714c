//! Shared test utilities used across tansaku crates.

pub mod ci;
pub mod tracing;
