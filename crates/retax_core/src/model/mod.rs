//! Value objects shared across the engines
//!
//! Everything here is recomputed on demand from current inputs; no type has
//! durable identity or lifecycle beyond a single evaluation pass.

pub mod property;
pub mod records;

pub use property::{PropertyProfile, PropertyType};
pub use records::{OperatingCashFlowRecord, YearlyDepreciation};
