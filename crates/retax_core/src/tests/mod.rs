//! Integration tests for the retax_core engines
//!
//! Tests are organized by topic:
//! - `depreciation` - year-one math and multi-year schedules
//! - `cash_flow` - operating cash-flow projection
//! - `scenario` - full-report evaluation and cross-engine laws
//!
//! Sale taxation and catalog invariants are covered by unit tests inside
//! their own modules.

mod depreciation;
mod scenario;
