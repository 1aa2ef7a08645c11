//!
//! The gas comparisons report entry.
//!

use crate::model::comparison::Comparison;
use crate::model::cost::Cost;

///
/// The gas comparisons report entry.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Entry {
    /// The parsed comparison.
    #[serde(flatten)]
    pub comparison: Comparison,
    /// The estimated cost of the average gas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
}

impl Entry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(comparison: Comparison, cost: Option<Cost>) -> Self {
        Self { comparison, cost }
    }
}
