//! Integration tests for the retax TUI layer
//!
//! Tests are organized by topic:
//! - `fields` - input parsing, validation, and toggle behavior
//! - `state` - recompute-on-edit and error withholding
//! - `export` - JSON export round-trips

mod export;
mod state;
