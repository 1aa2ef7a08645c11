//!
//! The gas comparisons data model.
//!

pub mod comparison;
pub mod cost;
pub mod report;
