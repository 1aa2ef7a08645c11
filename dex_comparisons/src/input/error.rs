//!
//! The gas comparisons log reading error.
//!

use std::path::PathBuf;

///
/// The gas comparisons log reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error opening the input file.
    #[error("Opening input file {path:?}: {error}")]
    Opening {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error parsing a line of the input file.
    #[error("Parsing input file {path:?} at line {line}: {error}")]
    Line {
        /// The underlying line parsing error.
        error: crate::input::line::Error,
        /// The path to the input file.
        path: PathBuf,
        /// The 1-based line number.
        line: usize,
    },
}

impl Error {
    ///
    /// Whether the error only affects a single line, so the rest of the input can still be read.
    ///
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }
}
