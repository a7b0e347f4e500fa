//! CLI library components for OTR price comparison.

pub mod logging;
pub mod pipeline;
pub mod summary;
