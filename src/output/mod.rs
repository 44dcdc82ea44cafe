//! Console reporting
//!
//! Console output is the suite's only reporting channel: human-readable
//! summaries plus CI-scannable annotation lines.

pub mod annotate;
mod formatter;

pub use formatter::{OutputFormat, ResultFormatter};
