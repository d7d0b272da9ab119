//! Rendery Core
//!
//! Shared plumbing for the Rendery crates: math types, hash collections,
//! logging and profiling setup.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
