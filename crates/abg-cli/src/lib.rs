//! CLI library components for the acid-base interpreter.

pub mod logging;
pub mod report;
pub mod summary;
