//! Helpers for declaring domain entities as resources

#[macro_use]
pub mod macros;
