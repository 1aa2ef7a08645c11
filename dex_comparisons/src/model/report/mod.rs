//!
//! The gas comparisons report.
//!

pub mod entry;

use crate::model::comparison::Comparison;
use crate::model::cost::Estimator;

use self::entry::Entry;

///
/// The gas comparisons report.
///
/// Entries keep the order of the input lines.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Report {
    /// The report entries.
    pub entries: Vec<Entry>,
    /// The cost estimator, if the cost column is enabled.
    #[serde(skip)]
    pub estimator: Option<Estimator>,
}

impl Report {
    ///
    /// Creates an empty report.
    ///
    pub fn new(estimator: Option<Estimator>) -> Self {
        Self {
            entries: Vec::new(),
            estimator,
        }
    }

    ///
    /// Whether the entries carry an estimated cost.
    ///
    pub fn estimates_cost(&self) -> bool {
        self.estimator.is_some()
    }

    ///
    /// Appends a comparison, estimating its cost if enabled.
    ///
    pub fn push(&mut self, comparison: Comparison) {
        let cost = self
            .estimator
            .as_ref()
            .map(|estimator| estimator.estimate(comparison.average));
        self.entries.push(Entry::new(comparison, cost));
    }

    ///
    /// The number of entries.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    ///
    /// Whether the report has no entries.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
