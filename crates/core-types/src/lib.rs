//! # Core Types
//!
//! Layer 0 of the workspace: the plain data records every other crate speaks in.
//! Nothing in here computes a ratio; it only knows how to describe an observation
//! period and whether that description is usable.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Phase;
pub use error::CoreError;
pub use structs::ObservationPeriod;
