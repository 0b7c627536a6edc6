//! Common utilities for the wombat parser.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - per-document deduplicated warnings for recoverable
//!   anomalies

pub mod warning;

pub use warning::WarningLog;
