//!
//! A single fuzz test gas comparison.
//!

///
/// A single fuzz test gas comparison, parsed from one line of the log.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Comparison {
    /// The exchange identifier, uppercased.
    pub dex: String,
    /// The token pair identifier, uppercased.
    pub pair: String,
    /// The benchmarked action, uppercased.
    pub action: String,
    /// The number of fuzz runs reported by the test.
    pub runs: u64,
    /// The mean gas consumption.
    pub average: u64,
    /// The mean gas consumption digits as they appear in the log.
    #[serde(skip)]
    pub average_digits: String,
    /// The median gas consumption, if the log reports it as an integer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median: Option<u64>,
}

impl Comparison {
    ///
    /// A shortcut constructor.
    ///
    /// The identifiers are uppercased.
    ///
    pub fn new(
        dex: &str,
        pair: &str,
        action: &str,
        runs: u64,
        average: u64,
        median: Option<u64>,
    ) -> Self {
        Self {
            dex: dex.to_uppercase(),
            pair: pair.to_uppercase(),
            action: action.to_uppercase(),
            runs,
            average,
            average_digits: average.to_string(),
            median,
        }
    }
}
