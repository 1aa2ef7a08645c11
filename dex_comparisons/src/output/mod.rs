//!
//! The gas comparisons report output.
//!

pub mod csv;
pub mod format;
pub mod json;

use std::path::Path;

use crate::model::report::Report;

use self::csv::Csv;
use self::format::Format;
use self::json::Json;

///
/// The rendered report, written as a single file.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// The file content.
    pub content: String,
}

impl Output {
    ///
    /// Writes the report to a file, overwriting it if it exists.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.content.as_str())
            .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl From<(&Report, Format)> for Output {
    fn from((report, format): (&Report, Format)) -> Self {
        match format {
            Format::Csv => Csv::from(report).into(),
            Format::Json => Json::from(report).into(),
        }
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Self {
            content: value.content,
        }
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Self {
            content: value.content,
        }
    }
}
