//!
//! The gas comparisons log input.
//!

pub mod error;
pub mod line;

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use crate::model::comparison::Comparison;

use self::error::Error as InputError;

///
/// The gas comparisons log input.
///
/// Lines are read lazily, so the whole log is never held in memory.
///
#[derive(Debug)]
pub struct Input<R> {
    /// The input path, used for diagnostics.
    path: PathBuf,
    /// The line reader.
    reader: R,
}

impl<R> Input<R>
where
    R: BufRead,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf, reader: R) -> Self {
        Self { path, reader }
    }

    ///
    /// Parses the input line by line, in order.
    ///
    /// Blank lines are skipped. A reading error ends the sequence.
    ///
    pub fn comparisons(
        self,
        expected_runs: Option<u64>,
    ) -> impl Iterator<Item = Result<Comparison, InputError>> {
        let Self { path, reader } = self;
        let mut failed = false;
        reader
            .lines()
            .enumerate()
            .map_while(move |(index, text)| {
                if failed {
                    return None;
                }
                let text = match text {
                    Ok(text) => text,
                    Err(error) => {
                        failed = true;
                        return Some(Some(Err(InputError::Reading {
                            error,
                            path: path.clone(),
                        })));
                    }
                };
                if text.trim().is_empty() {
                    return Some(None);
                }
                Some(Some(line::parse(text.as_str(), expected_runs).map_err(
                    |error| InputError::Line {
                        error,
                        path: path.clone(),
                        line: index + 1,
                    },
                )))
            })
            .flatten()
    }
}

impl TryFrom<&Path> for Input<BufReader<File>> {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = File::open(path).map_err(|error| InputError::Opening {
            error,
            path: path.to_path_buf(),
        })?;
        Ok(Self::new(path.to_path_buf(), BufReader::new(file)))
    }
}
