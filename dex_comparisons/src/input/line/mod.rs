//!
//! The fuzz test result line parser.
//!


use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::comparison::Comparison;

/// The test suite marker.
pub const MARKER_SUITE: &str = "IntegrationTestGasComparisons:";

/// The fuzz test name marker.
pub const MARKER_TEST: &str = "testFuzz_";

/// The fuzz test argument type annotation.
pub const MARKER_ARGUMENTS: &str = "(uint256)";

/// The run count marker.
pub const MARKER_RUNS: &str = "(runs:";

/// The mean gas marker.
pub const MARKER_AVERAGE: &str = "μ:";

/// The median gas marker.
pub const MARKER_MEDIAN: &str = "~:";

/// The markers in the order they must appear in a line.
const MARKERS: [&str; 6] = [
    MARKER_SUITE,
    MARKER_TEST,
    MARKER_ARGUMENTS,
    MARKER_RUNS,
    MARKER_AVERAGE,
    MARKER_MEDIAN,
];

/// The whole line shape, with the statistics captured loosely so that bad values get their own errors.
/// Anything after the median marker is optional.
static LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"IntegrationTestGasComparisons:.*?testFuzz_(?P<dex>[^_\s(]+)_(?P<pair>[^_\s(]+)_(?P<action>[^\s(]+)\(uint256\)\s*\(runs:\s*(?P<runs>\d+),\s*μ:(?P<average>[^,]*),\s*~:(?P<median>[^)]*)\)?",
    )
    .expect("Always valid")
});

///
/// The line parsing error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required marker is absent.
    #[error("missing marker `{marker}`")]
    MissingMarker {
        /// The first marker not found.
        marker: &'static str,
    },
    /// All markers are present, but the line does not have the expected shape.
    #[error("expected `testFuzz_<dex>_<pair>_<action>(uint256)(runs: <n>, μ: <average>, ~: <median>)`")]
    Malformed,
    /// The mean gas is not a non-negative integer.
    #[error("invalid average gas `{value}`")]
    InvalidAverage {
        /// The trimmed value.
        value: String,
    },
    /// The run count differs from the expected one.
    #[error("expected {expected} runs, found {found}")]
    RunCountMismatch {
        /// The expected run count.
        expected: u64,
        /// The run count in the line.
        found: u64,
    },
}

///
/// Parses a fuzz test result line.
///
/// If `expected_runs` is set, the run count reported by the line must be equal to it.
///
pub fn parse(line: &str, expected_runs: Option<u64>) -> Result<Comparison, Error> {
    let captures = match LINE_REGEX.captures(line) {
        Some(captures) => captures,
        None => return Err(diagnose(line)),
    };

    let runs = captures["runs"]
        .parse::<u64>()
        .map_err(|_| Error::Malformed)?;
    if let Some(expected) = expected_runs {
        if runs != expected {
            return Err(Error::RunCountMismatch {
                expected,
                found: runs,
            });
        }
    }

    let average_digits = captures["average"].trim();
    let average = Some(average_digits)
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()))
        .and_then(|digits| digits.parse::<u64>().ok())
        .ok_or_else(|| Error::InvalidAverage {
            value: average_digits.to_owned(),
        })?;
    let median = captures["median"].trim().parse::<u64>().ok();

    let mut comparison = Comparison::new(
        &captures["dex"],
        &captures["pair"],
        &captures["action"],
        runs,
        average,
        median,
    );
    comparison.average_digits = average_digits.to_owned();
    Ok(comparison)
}

///
/// Finds out why a line did not match.
///
fn diagnose(line: &str) -> Error {
    let mut rest = line;
    for marker in MARKERS.into_iter() {
        match rest.find(marker) {
            Some(position) => rest = &rest[position + marker.len()..],
            None => return Error::MissingMarker { marker },
        }
    }
    Error::Malformed
}

impl FromStr for Comparison {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse(line, None)
    }
}
